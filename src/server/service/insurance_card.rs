use sea_orm::DatabaseConnection;

use crate::{
    model::insurance_card::{InsuranceCardDto, InsuranceCardPayloadDto},
    server::{
        data::insurance_card::{InsuranceCardChanges, InsuranceCardRepository, NewInsuranceCard},
        error::Error,
        model::db::InsuranceCardModel,
        util::validate,
    },
};

impl From<InsuranceCardModel> for InsuranceCardDto {
    fn from(card: InsuranceCardModel) -> Self {
        Self {
            id: card.id,
            subscriber_name: card.subscriber_name,
            member_id: card.member_id,
            group_number: card.group_number,
            plan_number: card.plan_number,
            plan_type: card.plan_type,
            purpose: card.purpose,
            notes: card.notes,
        }
    }
}

fn validate_payload(dto: &InsuranceCardPayloadDto, required: bool) -> Result<(), Error> {
    validate::non_empty(dto.subscriber_name.as_deref(), "Subscriber name", required)?;
    validate::non_empty(dto.purpose.as_deref(), "Purpose", required)?;

    Ok(())
}

impl TryFrom<InsuranceCardPayloadDto> for NewInsuranceCard {
    type Error = Error;

    fn try_from(dto: InsuranceCardPayloadDto) -> Result<Self, Self::Error> {
        validate_payload(&dto, true)?;

        Ok(Self {
            subscriber_name: dto.subscriber_name.unwrap_or_default(),
            member_id: dto.member_id.unwrap_or_default(),
            group_number: dto.group_number.unwrap_or_default(),
            plan_number: dto.plan_number.unwrap_or_default(),
            plan_type: dto.plan_type.unwrap_or_default(),
            purpose: dto.purpose.unwrap_or_default(),
            notes: dto.notes.unwrap_or_default(),
        })
    }
}

impl TryFrom<InsuranceCardPayloadDto> for InsuranceCardChanges {
    type Error = Error;

    fn try_from(dto: InsuranceCardPayloadDto) -> Result<Self, Self::Error> {
        validate_payload(&dto, false)?;

        Ok(Self {
            subscriber_name: validate::present(dto.subscriber_name),
            member_id: validate::present(dto.member_id),
            group_number: validate::present(dto.group_number),
            plan_number: validate::present(dto.plan_number),
            plan_type: validate::present(dto.plan_type),
            purpose: validate::present(dto.purpose),
            notes: validate::present(dto.notes),
        })
    }
}

pub struct InsuranceCardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InsuranceCardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, owner_id: i32) -> Result<Vec<InsuranceCardDto>, Error> {
        let cards = InsuranceCardRepository::new(self.db)
            .get_many_by_owner_id(owner_id)
            .await?;

        Ok(cards.into_iter().map(InsuranceCardDto::from).collect())
    }

    pub async fn create(
        &self,
        owner_id: i32,
        card: NewInsuranceCard,
    ) -> Result<InsuranceCardDto, Error> {
        let card = InsuranceCardRepository::new(self.db)
            .create(owner_id, card)
            .await?;

        Ok(card.into())
    }

    pub async fn update(
        &self,
        card: InsuranceCardModel,
        changes: InsuranceCardChanges,
    ) -> Result<InsuranceCardDto, Error> {
        let card = InsuranceCardRepository::new(self.db)
            .update(card, changes)
            .await?;

        Ok(card.into())
    }

    pub async fn delete(&self, card: InsuranceCardModel) -> Result<(), Error> {
        InsuranceCardRepository::new(self.db).delete(card.id).await?;

        Ok(())
    }
}
