use sea_orm_migration::{prelude::*, schema::*};

static IDX_ENTRY_OWNER_ID: &str = "idx-medlog_entry-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // `detail` holds either free text or the id of a contact/medication depending on
        // `entry_type`, so no foreign key is declared for it.
        manager
            .create_table(
                Table::create()
                    .table(MedlogEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(MedlogEntry::Id))
                    .col(integer(MedlogEntry::OwnerId))
                    .col(string(MedlogEntry::EntryType))
                    .col(string(MedlogEntry::Detail))
                    .col(string(MedlogEntry::Condition))
                    .col(integer(MedlogEntry::Scale))
                    .col(text(MedlogEntry::Notes))
                    .col(date(MedlogEntry::Date))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENTRY_OWNER_ID)
                    .table(MedlogEntry::Table)
                    .col(MedlogEntry::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENTRY_OWNER_ID)
                    .table(MedlogEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MedlogEntry::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MedlogEntry {
    Table,
    Id,
    OwnerId,
    EntryType,
    Detail,
    Condition,
    Scale,
    Notes,
    Date,
}
