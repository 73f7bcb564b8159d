use sea_orm_migration::{prelude::*, schema::*};

static IDX_INSURANCE_CARD_OWNER_ID: &str = "idx-medlog_insurance_card-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedlogInsuranceCard::Table)
                    .if_not_exists()
                    .col(pk_auto(MedlogInsuranceCard::Id))
                    .col(integer(MedlogInsuranceCard::OwnerId))
                    .col(string(MedlogInsuranceCard::SubscriberName))
                    .col(string(MedlogInsuranceCard::MemberId))
                    .col(string(MedlogInsuranceCard::GroupNumber))
                    .col(string(MedlogInsuranceCard::PlanNumber))
                    .col(string(MedlogInsuranceCard::PlanType))
                    .col(string(MedlogInsuranceCard::Purpose))
                    .col(text(MedlogInsuranceCard::Notes))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INSURANCE_CARD_OWNER_ID)
                    .table(MedlogInsuranceCard::Table)
                    .col(MedlogInsuranceCard::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INSURANCE_CARD_OWNER_ID)
                    .table(MedlogInsuranceCard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MedlogInsuranceCard::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MedlogInsuranceCard {
    Table,
    Id,
    OwnerId,
    SubscriberName,
    MemberId,
    GroupNumber,
    PlanNumber,
    PlanType,
    Purpose,
    Notes,
}
