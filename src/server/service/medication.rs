use sea_orm::DatabaseConnection;

use crate::{
    model::medication::{MedicationDto, MedicationPayloadDto},
    server::{
        data::medication::{MedicationChanges, MedicationRepository, NewMedication},
        error::Error,
        model::db::MedicationModel,
        util::validate,
    },
};

impl From<MedicationModel> for MedicationDto {
    fn from(medication: MedicationModel) -> Self {
        Self {
            id: medication.id,
            name: medication.name,
            generic_name: medication.generic_name,
            dose: medication.dose,
            notes: medication.notes,
        }
    }
}

impl TryFrom<MedicationPayloadDto> for NewMedication {
    type Error = Error;

    fn try_from(dto: MedicationPayloadDto) -> Result<Self, Self::Error> {
        validate::non_empty(dto.name.as_deref(), "Name", true)?;

        Ok(Self {
            name: dto.name.unwrap_or_default(),
            generic_name: dto.generic_name.unwrap_or_default(),
            dose: dto.dose.unwrap_or_default(),
            notes: dto.notes.unwrap_or_default(),
        })
    }
}

impl TryFrom<MedicationPayloadDto> for MedicationChanges {
    type Error = Error;

    fn try_from(dto: MedicationPayloadDto) -> Result<Self, Self::Error> {
        validate::non_empty(dto.name.as_deref(), "Name", false)?;

        Ok(Self {
            name: validate::present(dto.name),
            generic_name: validate::present(dto.generic_name),
            dose: validate::present(dto.dose),
            notes: validate::present(dto.notes),
        })
    }
}

pub struct MedicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MedicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the active medications of an account
    pub async fn list(&self, owner_id: i32) -> Result<Vec<MedicationDto>, Error> {
        let medications = MedicationRepository::new(self.db)
            .get_active_by_owner_id(owner_id)
            .await?;

        Ok(medications.into_iter().map(MedicationDto::from).collect())
    }

    pub async fn create(
        &self,
        owner_id: i32,
        medication: NewMedication,
    ) -> Result<MedicationDto, Error> {
        let medication = MedicationRepository::new(self.db)
            .create(owner_id, medication)
            .await?;

        Ok(medication.into())
    }

    pub async fn update(
        &self,
        medication: MedicationModel,
        changes: MedicationChanges,
    ) -> Result<MedicationDto, Error> {
        let medication = MedicationRepository::new(self.db)
            .update(medication, changes)
            .await?;

        Ok(medication.into())
    }

    pub async fn deactivate(&self, medication: MedicationModel) -> Result<(), Error> {
        MedicationRepository::new(self.db)
            .deactivate(medication)
            .await?;

        Ok(())
    }
}
