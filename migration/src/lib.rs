pub use sea_orm_migration::prelude::*;

mod m20251102_000001_medlog_account;
mod m20251102_000002_medlog_credential;
mod m20251102_000003_medlog_medical_contact;
mod m20251102_000004_medlog_medication;
mod m20251102_000005_medlog_entry;
mod m20251102_000006_medlog_insurance_card;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251102_000001_medlog_account::Migration),
            Box::new(m20251102_000002_medlog_credential::Migration),
            Box::new(m20251102_000003_medlog_medical_contact::Migration),
            Box::new(m20251102_000004_medlog_medication::Migration),
            Box::new(m20251102_000005_medlog_entry::Migration),
            Box::new(m20251102_000006_medlog_insurance_card::Migration),
        ]
    }
}
