use sea_orm::DatabaseConnection;

use crate::{
    model::entry::{Condition, EntryDto, EntryPayloadDto, EntryType},
    server::{
        data::entry::{EntryChanges, EntryRepository, NewEntry},
        error::Error,
        guard::reference::{resolve_reference, EntryReference},
        model::db::EntryModel,
        util::{time::format_date, validate},
    },
};

impl TryFrom<EntryPayloadDto> for NewEntry {
    type Error = Error;

    fn try_from(dto: EntryPayloadDto) -> Result<Self, Self::Error> {
        let entry_type = validate::entry_type(dto.entry_type.as_deref(), true)?;
        validate::non_empty(dto.detail.as_deref(), "Detail", true)?;
        let condition = validate::condition(dto.condition.as_deref(), true)?;
        let scale = validate::scale(dto.scale, true)?;
        let date = validate::date(dto.date.as_deref(), true)?;

        match (entry_type, condition, scale, date) {
            (Some(entry_type), Some(condition), Some(scale), Some(date)) => Ok(Self {
                entry_type,
                detail: dto.detail.unwrap_or_default().trim().to_string(),
                condition,
                scale,
                notes: dto.notes.unwrap_or_default(),
                date,
            }),
            _ => Err(Error::InternalError(
                "Required entry field missing after validation".to_string(),
            )),
        }
    }
}

impl TryFrom<EntryPayloadDto> for EntryChanges {
    type Error = Error;

    fn try_from(dto: EntryPayloadDto) -> Result<Self, Self::Error> {
        let entry_type = validate::entry_type(dto.entry_type.as_deref(), false)?;
        validate::non_empty(dto.detail.as_deref(), "Detail", false)?;
        let condition = validate::condition(dto.condition.as_deref(), false)?;
        let scale = validate::scale(dto.scale, false)?;
        let date = validate::date(dto.date.as_deref(), false)?;

        Ok(Self {
            entry_type,
            detail: validate::present(dto.detail).map(|detail| detail.trim().to_string()),
            condition,
            scale,
            notes: validate::present(dto.notes),
            date,
        })
    }
}

/// Type of a stored entry
pub fn stored_entry_type(entry: &EntryModel) -> Result<EntryType, Error> {
    entry.entry_type.parse::<EntryType>().map_err(|e| {
        Error::InternalError(format!("Entry ID {} has an invalid type: {}", entry.id, e))
    })
}

/// Condition of a stored entry
pub fn stored_condition(entry: &EntryModel) -> Result<Condition, Error> {
    entry.condition.parse::<Condition>().map_err(|e| {
        Error::InternalError(format!(
            "Entry ID {} has an invalid condition: {}",
            entry.id, e
        ))
    })
}

/// Type & detail an entry will have once the changes are applied
pub fn effective_reference(
    entry: &EntryModel,
    changes: &EntryChanges,
) -> Result<(EntryType, String), Error> {
    let entry_type = match changes.entry_type {
        Some(entry_type) => entry_type,
        None => stored_entry_type(entry)?,
    };
    let detail = changes
        .detail
        .clone()
        .unwrap_or_else(|| entry.detail.clone());

    Ok((entry_type, detail))
}

/// Builds the entry response, deriving the title from the referenced record
pub fn entry_dto(entry: EntryModel, reference: &EntryReference) -> Result<EntryDto, Error> {
    Ok(EntryDto {
        id: entry.id,
        entry_type: stored_entry_type(&entry)?,
        title: reference.title(&entry.detail),
        condition: stored_condition(&entry)?,
        scale: entry.scale,
        notes: entry.notes,
        date: format_date(entry.date),
        detail: entry.detail,
    })
}

pub struct EntryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the entries of an account, most recent first
    pub async fn list(&self, owner_id: i32) -> Result<Vec<EntryDto>, Error> {
        let entries = EntryRepository::new(self.db)
            .get_many_by_owner_id(owner_id)
            .await?;

        let mut dtos = Vec::with_capacity(entries.len());
        for entry in entries {
            dtos.push(self.get(entry).await?);
        }

        Ok(dtos)
    }

    pub async fn get(&self, entry: EntryModel) -> Result<EntryDto, Error> {
        let reference = resolve_reference(self.db, stored_entry_type(&entry)?, &entry.detail).await?;

        entry_dto(entry, &reference)
    }

    /// Creates an entry whose reference was already checked
    pub async fn create(
        &self,
        owner_id: i32,
        entry: NewEntry,
        reference: &EntryReference,
    ) -> Result<EntryDto, Error> {
        let entry = EntryRepository::new(self.db).create(owner_id, entry).await?;

        entry_dto(entry, reference)
    }

    /// Applies changes whose resulting reference was already checked
    pub async fn update(
        &self,
        entry: EntryModel,
        changes: EntryChanges,
        reference: &EntryReference,
    ) -> Result<EntryDto, Error> {
        let entry = EntryRepository::new(self.db).update(entry, changes).await?;

        entry_dto(entry, reference)
    }

    pub async fn delete(&self, entry: EntryModel) -> Result<(), Error> {
        EntryRepository::new(self.db).delete(entry.id).await?;

        Ok(())
    }
}
