use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn resources<'a>(&'a self) -> ResourceFixtures<'a> {
        ResourceFixtures { context: self }
    }
}

pub struct ResourceFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ResourceFixtures<'a> {
    pub async fn insert_medical_contact(
        &self,
        owner_id: i32,
        first_name: &str,
        last_name: &str,
    ) -> Result<entity::medical_contact::Model, TestError> {
        let contact = factory::medical_contact(owner_id, first_name, last_name);

        Ok(entity::prelude::MedicalContact::insert(contact)
            .exec_with_returning(&self.context.db)
            .await?)
    }

    pub async fn insert_medication(
        &self,
        owner_id: i32,
        name: &str,
    ) -> Result<entity::medication::Model, TestError> {
        let medication = factory::medication(owner_id, name);

        Ok(entity::prelude::Medication::insert(medication)
            .exec_with_returning(&self.context.db)
            .await?)
    }

    pub async fn insert_insurance_card(
        &self,
        owner_id: i32,
        purpose: &str,
    ) -> Result<entity::insurance_card::Model, TestError> {
        let card = factory::insurance_card(owner_id, purpose);

        Ok(entity::prelude::InsuranceCard::insert(card)
            .exec_with_returning(&self.context.db)
            .await?)
    }

    /// Insert an entry with a `pain` condition
    ///
    /// `entry_type` & `detail` are stored as given, so the caller is responsible for pointing
    /// appointment & medication entries at an existing record.
    pub async fn insert_entry(
        &self,
        owner_id: i32,
        entry_type: &str,
        detail: &str,
        scale: i32,
        date: NaiveDate,
    ) -> Result<entity::entry::Model, TestError> {
        Ok(entity::prelude::Entry::insert(entity::entry::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            entry_type: ActiveValue::Set(entry_type.to_string()),
            detail: ActiveValue::Set(detail.to_string()),
            condition: ActiveValue::Set("pain".to_string()),
            scale: ActiveValue::Set(scale),
            notes: ActiveValue::Set(String::new()),
            date: ActiveValue::Set(date),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}

/// Active models with plausible default field values
pub mod factory {
    use sea_orm::ActiveValue;

    pub fn medical_contact(
        owner_id: i32,
        first_name: &str,
        last_name: &str,
    ) -> entity::medical_contact::ActiveModel {
        entity::medical_contact::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            active: ActiveValue::Set(true),
            title: ActiveValue::Set("Dr.".to_string()),
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            hospital: ActiveValue::Set("General Hospital".to_string()),
            specialty: ActiveValue::Set("Neurology".to_string()),
            phone_number: ActiveValue::Set("555-123-4567".to_string()),
            notes: ActiveValue::Set(String::new()),
            ..Default::default()
        }
    }

    pub fn medication(owner_id: i32, name: &str) -> entity::medication::ActiveModel {
        entity::medication::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            active: ActiveValue::Set(true),
            name: ActiveValue::Set(name.to_string()),
            generic_name: ActiveValue::Set(format!("{} (generic)", name)),
            dose: ActiveValue::Set("200mg".to_string()),
            notes: ActiveValue::Set(String::new()),
            ..Default::default()
        }
    }

    pub fn insurance_card(owner_id: i32, purpose: &str) -> entity::insurance_card::ActiveModel {
        entity::insurance_card::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            subscriber_name: ActiveValue::Set("Alice Smith".to_string()),
            member_id: ActiveValue::Set("M-1001".to_string()),
            group_number: ActiveValue::Set("G-22".to_string()),
            plan_number: ActiveValue::Set("P-333".to_string()),
            plan_type: ActiveValue::Set("PPO".to_string()),
            purpose: ActiveValue::Set(purpose.to_string()),
            notes: ActiveValue::Set(String::new()),
            ..Default::default()
        }
    }
}
