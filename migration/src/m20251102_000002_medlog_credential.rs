use sea_orm_migration::{prelude::*, schema::*};

static IDX_CREDENTIAL_ACCOUNT_ID: &str = "idx-medlog_credential-account_id";
static IDX_CREDENTIAL_USERNAME: &str = "idx-medlog_credential-username";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedlogCredential::Table)
                    .if_not_exists()
                    .col(pk_auto(MedlogCredential::Id))
                    .col(integer(MedlogCredential::AccountId))
                    .col(string(MedlogCredential::Username))
                    .col(string(MedlogCredential::Password))
                    .col(timestamp(MedlogCredential::DateJoined))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CREDENTIAL_ACCOUNT_ID)
                    .table(MedlogCredential::Table)
                    .col(MedlogCredential::AccountId)
                    .to_owned(),
            )
            .await?;

        // Lookup index only; username uniqueness is checked case-insensitively by the application
        manager
            .create_index(
                Index::create()
                    .name(IDX_CREDENTIAL_USERNAME)
                    .table(MedlogCredential::Table)
                    .col(MedlogCredential::Username)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CREDENTIAL_USERNAME)
                    .table(MedlogCredential::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CREDENTIAL_ACCOUNT_ID)
                    .table(MedlogCredential::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MedlogCredential::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MedlogCredential {
    Table,
    Id,
    AccountId,
    Username,
    Password,
    DateJoined,
}
