use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

#[derive(Clone, Debug, Default)]
pub struct NewInsuranceCard {
    pub subscriber_name: String,
    pub member_id: String,
    pub group_number: String,
    pub plan_number: String,
    pub plan_type: String,
    pub purpose: String,
    pub notes: String,
}

/// Partial update of an insurance card, `None` keeps the stored value
#[derive(Clone, Debug, Default)]
pub struct InsuranceCardChanges {
    pub subscriber_name: Option<String>,
    pub member_id: Option<String>,
    pub group_number: Option<String>,
    pub plan_number: Option<String>,
    pub plan_type: Option<String>,
    pub purpose: Option<String>,
    pub notes: Option<String>,
}

pub struct InsuranceCardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InsuranceCardRepository<'a, C> {
    /// Creates a new instance of [`InsuranceCardRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: i32,
        card: NewInsuranceCard,
    ) -> Result<entity::insurance_card::Model, DbErr> {
        let card = entity::insurance_card::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            subscriber_name: ActiveValue::Set(card.subscriber_name),
            member_id: ActiveValue::Set(card.member_id),
            group_number: ActiveValue::Set(card.group_number),
            plan_number: ActiveValue::Set(card.plan_number),
            plan_type: ActiveValue::Set(card.plan_type),
            purpose: ActiveValue::Set(card.purpose),
            notes: ActiveValue::Set(card.notes),
            ..Default::default()
        };

        card.insert(self.db).await
    }

    pub async fn get(&self, card_id: i32) -> Result<Option<entity::insurance_card::Model>, DbErr> {
        entity::prelude::InsuranceCard::find_by_id(card_id)
            .one(self.db)
            .await
    }

    /// Gets the insurance cards of an account sorted by purpose
    pub async fn get_many_by_owner_id(
        &self,
        owner_id: i32,
    ) -> Result<Vec<entity::insurance_card::Model>, DbErr> {
        entity::prelude::InsuranceCard::find()
            .filter(entity::insurance_card::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::insurance_card::Column::Purpose)
            .order_by_asc(entity::insurance_card::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        card: entity::insurance_card::Model,
        changes: InsuranceCardChanges,
    ) -> Result<entity::insurance_card::Model, DbErr> {
        let mut card_am = card.clone().into_active_model();

        if let Some(subscriber_name) = changes.subscriber_name {
            card_am.subscriber_name = ActiveValue::Set(subscriber_name);
        }
        if let Some(member_id) = changes.member_id {
            card_am.member_id = ActiveValue::Set(member_id);
        }
        if let Some(group_number) = changes.group_number {
            card_am.group_number = ActiveValue::Set(group_number);
        }
        if let Some(plan_number) = changes.plan_number {
            card_am.plan_number = ActiveValue::Set(plan_number);
        }
        if let Some(plan_type) = changes.plan_type {
            card_am.plan_type = ActiveValue::Set(plan_type);
        }
        if let Some(purpose) = changes.purpose {
            card_am.purpose = ActiveValue::Set(purpose);
        }
        if let Some(notes) = changes.notes {
            card_am.notes = ActiveValue::Set(notes);
        }

        if !card_am.is_changed() {
            return Ok(card);
        }

        card_am.update(self.db).await
    }

    /// Deletes an insurance card
    ///
    /// Returns OK regardless of the card existing, to confirm the deletion result check the
    /// [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, card_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::InsuranceCard::delete_by_id(card_id)
            .exec(self.db)
            .await
    }

    pub async fn delete_by_owner_id(&self, owner_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::InsuranceCard::delete_many()
            .filter(entity::insurance_card::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await
    }
}
