use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

#[derive(Clone, Debug, Default)]
pub struct NewMedication {
    pub name: String,
    pub generic_name: String,
    pub dose: String,
    pub notes: String,
}

/// Partial update of a medication, `None` keeps the stored value
#[derive(Clone, Debug, Default)]
pub struct MedicationChanges {
    pub name: Option<String>,
    pub generic_name: Option<String>,
    pub dose: Option<String>,
    pub notes: Option<String>,
}

pub struct MedicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MedicationRepository<'a, C> {
    /// Creates a new instance of [`MedicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new, active medication
    pub async fn create(
        &self,
        owner_id: i32,
        medication: NewMedication,
    ) -> Result<entity::medication::Model, DbErr> {
        let medication = entity::medication::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            active: ActiveValue::Set(true),
            name: ActiveValue::Set(medication.name),
            generic_name: ActiveValue::Set(medication.generic_name),
            dose: ActiveValue::Set(medication.dose),
            notes: ActiveValue::Set(medication.notes),
            ..Default::default()
        };

        medication.insert(self.db).await
    }

    pub async fn get(&self, medication_id: i32) -> Result<Option<entity::medication::Model>, DbErr> {
        entity::prelude::Medication::find_by_id(medication_id)
            .one(self.db)
            .await
    }

    /// Gets the active medications of an account sorted by name
    pub async fn get_active_by_owner_id(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::medication::Model>, DbErr> {
        entity::prelude::Medication::find()
            .filter(entity::medication::Column::OwnerId.eq(owner_id))
            .filter(entity::medication::Column::Active.eq(true))
            .order_by_asc(entity::medication::Column::Name)
            .order_by_asc(entity::medication::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        medication: entity::medication::Model,
        changes: MedicationChanges,
    ) -> Result<entity::medication::Model, DbErr> {
        let mut medication_am = medication.clone().into_active_model();

        if let Some(name) = changes.name {
            medication_am.name = ActiveValue::Set(name);
        }
        if let Some(generic_name) = changes.generic_name {
            medication_am.generic_name = ActiveValue::Set(generic_name);
        }
        if let Some(dose) = changes.dose {
            medication_am.dose = ActiveValue::Set(dose);
        }
        if let Some(notes) = changes.notes {
            medication_am.notes = ActiveValue::Set(notes);
        }

        if !medication_am.is_changed() {
            return Ok(medication);
        }

        medication_am.update(self.db).await
    }

    /// Marks a medication as inactive
    pub async fn deactivate(
        &self,
        medication: entity::medication::Model,
    ) -> Result<entity::medication::Model, DbErr> {
        let mut medication_am = medication.into_active_model();
        medication_am.active = ActiveValue::Set(false);

        medication_am.update(self.db).await
    }

    /// Deletes every medication of an account, active or not
    pub async fn delete_by_owner_id(&self, owner_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Medication::delete_many()
            .filter(entity::medication::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await
    }
}
