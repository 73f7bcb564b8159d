use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Field values of a new medical contact
#[derive(Clone, Debug, Default)]
pub struct NewMedicalContact {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub hospital: String,
    pub specialty: String,
    pub phone_number: String,
    pub notes: String,
}

/// Partial update of a medical contact, `None` keeps the stored value
#[derive(Clone, Debug, Default)]
pub struct MedicalContactChanges {
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub hospital: Option<String>,
    pub specialty: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
}

pub struct MedicalContactRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MedicalContactRepository<'a, C> {
    /// Creates a new instance of [`MedicalContactRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new, active medical contact
    pub async fn create(
        &self,
        owner_id: i32,
        contact: NewMedicalContact,
    ) -> Result<entity::medical_contact::Model, DbErr> {
        let contact = entity::medical_contact::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            active: ActiveValue::Set(true),
            title: ActiveValue::Set(contact.title),
            first_name: ActiveValue::Set(contact.first_name),
            last_name: ActiveValue::Set(contact.last_name),
            hospital: ActiveValue::Set(contact.hospital),
            specialty: ActiveValue::Set(contact.specialty),
            phone_number: ActiveValue::Set(contact.phone_number),
            notes: ActiveValue::Set(contact.notes),
            ..Default::default()
        };

        contact.insert(self.db).await
    }

    pub async fn get(
        &self,
        contact_id: i32,
    ) -> Result<Option<entity::medical_contact::Model>, DbErr> {
        entity::prelude::MedicalContact::find_by_id(contact_id)
            .one(self.db)
            .await
    }

    /// Gets the active medical contacts of an account sorted by last name
    pub async fn get_active_by_owner_id(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::medical_contact::Model>, DbErr> {
        entity::prelude::MedicalContact::find()
            .filter(entity::medical_contact::Column::OwnerId.eq(owner_id))
            .filter(entity::medical_contact::Column::Active.eq(true))
            .order_by_asc(entity::medical_contact::Column::LastName)
            .order_by_asc(entity::medical_contact::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        contact: entity::medical_contact::Model,
        changes: MedicalContactChanges,
    ) -> Result<entity::medical_contact::Model, DbErr> {
        let mut contact_am = contact.clone().into_active_model();

        if let Some(title) = changes.title {
            contact_am.title = ActiveValue::Set(title);
        }
        if let Some(first_name) = changes.first_name {
            contact_am.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            contact_am.last_name = ActiveValue::Set(last_name);
        }
        if let Some(hospital) = changes.hospital {
            contact_am.hospital = ActiveValue::Set(hospital);
        }
        if let Some(specialty) = changes.specialty {
            contact_am.specialty = ActiveValue::Set(specialty);
        }
        if let Some(phone_number) = changes.phone_number {
            contact_am.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(notes) = changes.notes {
            contact_am.notes = ActiveValue::Set(notes);
        }

        if !contact_am.is_changed() {
            return Ok(contact);
        }

        contact_am.update(self.db).await
    }

    /// Marks a medical contact as inactive
    pub async fn deactivate(
        &self,
        contact: entity::medical_contact::Model,
    ) -> Result<entity::medical_contact::Model, DbErr> {
        let mut contact_am = contact.into_active_model();
        contact_am.active = ActiveValue::Set(false);

        contact_am.update(self.db).await
    }

    /// Deletes every medical contact of an account, active or not
    pub async fn delete_by_owner_id(&self, owner_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MedicalContact::delete_many()
            .filter(entity::medical_contact::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await
    }
}
