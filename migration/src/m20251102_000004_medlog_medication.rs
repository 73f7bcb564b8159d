use sea_orm_migration::{prelude::*, schema::*};

static IDX_MEDICATION_OWNER_ID: &str = "idx-medlog_medication-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedlogMedication::Table)
                    .if_not_exists()
                    .col(pk_auto(MedlogMedication::Id))
                    .col(integer(MedlogMedication::OwnerId))
                    .col(boolean(MedlogMedication::Active))
                    .col(string(MedlogMedication::Name))
                    .col(string(MedlogMedication::GenericName))
                    .col(string(MedlogMedication::Dose))
                    .col(text(MedlogMedication::Notes))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEDICATION_OWNER_ID)
                    .table(MedlogMedication::Table)
                    .col(MedlogMedication::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEDICATION_OWNER_ID)
                    .table(MedlogMedication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MedlogMedication::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MedlogMedication {
    Table,
    Id,
    OwnerId,
    Active,
    Name,
    GenericName,
    Dose,
    Notes,
}
