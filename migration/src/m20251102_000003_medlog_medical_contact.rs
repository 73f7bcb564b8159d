use sea_orm_migration::{prelude::*, schema::*};

static IDX_MEDICAL_CONTACT_OWNER_ID: &str = "idx-medlog_medical_contact-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedlogMedicalContact::Table)
                    .if_not_exists()
                    .col(pk_auto(MedlogMedicalContact::Id))
                    .col(integer(MedlogMedicalContact::OwnerId))
                    .col(boolean(MedlogMedicalContact::Active))
                    .col(string(MedlogMedicalContact::Title))
                    .col(string(MedlogMedicalContact::FirstName))
                    .col(string(MedlogMedicalContact::LastName))
                    .col(string(MedlogMedicalContact::Hospital))
                    .col(string(MedlogMedicalContact::Specialty))
                    .col(string(MedlogMedicalContact::PhoneNumber))
                    .col(text(MedlogMedicalContact::Notes))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEDICAL_CONTACT_OWNER_ID)
                    .table(MedlogMedicalContact::Table)
                    .col(MedlogMedicalContact::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEDICAL_CONTACT_OWNER_ID)
                    .table(MedlogMedicalContact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MedlogMedicalContact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MedlogMedicalContact {
    Table,
    Id,
    OwnerId,
    Active,
    Title,
    FirstName,
    LastName,
    Hospital,
    Specialty,
    PhoneNumber,
    Notes,
}
