use sea_orm::DatabaseConnection;

use crate::{
    model::medical_contact::{MedicalContactDto, MedicalContactPayloadDto},
    server::{
        data::medical_contact::{
            MedicalContactChanges, MedicalContactRepository, NewMedicalContact,
        },
        error::Error,
        model::db::MedicalContactModel,
        util::validate,
    },
};

impl From<MedicalContactModel> for MedicalContactDto {
    fn from(contact: MedicalContactModel) -> Self {
        Self {
            id: contact.id,
            title: contact.title,
            first_name: contact.first_name,
            last_name: contact.last_name,
            hospital: contact.hospital,
            specialty: contact.specialty,
            phone_number: contact.phone_number,
            notes: contact.notes,
        }
    }
}

fn validate_payload(dto: &MedicalContactPayloadDto, required: bool) -> Result<(), Error> {
    validate::alphanumeric(dto.first_name.as_deref(), "First name", required)?;
    validate::alphanumeric(dto.last_name.as_deref(), "Last name", required)?;
    validate::phone_number(dto.phone_number.as_deref(), required)?;

    Ok(())
}

impl TryFrom<MedicalContactPayloadDto> for NewMedicalContact {
    type Error = Error;

    fn try_from(dto: MedicalContactPayloadDto) -> Result<Self, Self::Error> {
        validate_payload(&dto, true)?;

        Ok(Self {
            title: dto.title.unwrap_or_default(),
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
            hospital: dto.hospital.unwrap_or_default(),
            specialty: dto.specialty.unwrap_or_default(),
            phone_number: dto.phone_number.unwrap_or_default(),
            notes: dto.notes.unwrap_or_default(),
        })
    }
}

impl TryFrom<MedicalContactPayloadDto> for MedicalContactChanges {
    type Error = Error;

    fn try_from(dto: MedicalContactPayloadDto) -> Result<Self, Self::Error> {
        validate_payload(&dto, false)?;

        Ok(Self {
            title: validate::present(dto.title),
            first_name: validate::present(dto.first_name),
            last_name: validate::present(dto.last_name),
            hospital: validate::present(dto.hospital),
            specialty: validate::present(dto.specialty),
            phone_number: validate::present(dto.phone_number),
            notes: validate::present(dto.notes),
        })
    }
}

pub struct MedicalContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicalContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the active medical contacts of an account
    pub async fn list(&self, owner_id: i32) -> Result<Vec<MedicalContactDto>, Error> {
        let contacts = MedicalContactRepository::new(self.db)
            .get_active_by_owner_id(owner_id)
            .await?;

        Ok(contacts.into_iter().map(MedicalContactDto::from).collect())
    }

    pub async fn create(
        &self,
        owner_id: i32,
        contact: NewMedicalContact,
    ) -> Result<MedicalContactDto, Error> {
        let contact = MedicalContactRepository::new(self.db)
            .create(owner_id, contact)
            .await?;

        Ok(contact.into())
    }

    pub async fn update(
        &self,
        contact: MedicalContactModel,
        changes: MedicalContactChanges,
    ) -> Result<MedicalContactDto, Error> {
        let contact = MedicalContactRepository::new(self.db)
            .update(contact, changes)
            .await?;

        Ok(contact.into())
    }

    pub async fn deactivate(&self, contact: MedicalContactModel) -> Result<(), Error> {
        MedicalContactRepository::new(self.db)
            .deactivate(contact)
            .await?;

        Ok(())
    }
}
