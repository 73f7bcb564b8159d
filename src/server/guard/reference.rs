use sea_orm::ConnectionTrait;

use crate::{
    model::entry::EntryType,
    server::{
        error::{resource::ResourceError, Error},
        guard::ownership::{find_by_raw_id, OwnedEntity},
        model::{
            db::{MedicalContactModel, MedicationModel},
            session::SessionIdentity,
        },
    },
};

/// The record an entry's `detail` refers to
#[derive(Clone, Debug, PartialEq)]
pub enum EntryReference {
    MedicalContact(MedicalContactModel),
    Medication(MedicationModel),
    /// `detail` is free text
    None,
}

impl EntryReference {
    /// Display title of an entry with the provided detail
    ///
    /// Falls back to the detail itself when the entry references nothing.
    pub fn title(&self, detail: &str) -> String {
        match self {
            Self::MedicalContact(contact) => [
                contact.title.as_str(),
                contact.first_name.as_str(),
                contact.last_name.as_str(),
            ]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" "),
            Self::Medication(medication) => medication.name.clone(),
            Self::None => detail.to_string(),
        }
    }
}

/// Resolves an entry's `detail` to the record it refers to without any ownership check
///
/// Returns [`EntryReference::None`] for free text entries and for references which no longer
/// resolve.
pub async fn resolve_reference<C: ConnectionTrait>(
    db: &C,
    entry_type: EntryType,
    detail: &str,
) -> Result<EntryReference, Error> {
    let reference = match entry_type {
        EntryType::Appointment => {
            find_by_raw_id::<entity::medical_contact::Entity, C>(db, detail)
                .await?
                .map(EntryReference::MedicalContact)
        }
        EntryType::Medication => find_by_raw_id::<entity::medication::Entity, C>(db, detail)
            .await?
            .map(EntryReference::Medication),
        EntryType::Other => None,
    };

    Ok(reference.unwrap_or(EntryReference::None))
}

/// Checks that an entry's `detail` references a record owned by the session account
///
/// Appointments must reference a medical contact and medications a medication, fails with 404
/// when the record doesn't exist and 403 when another account owns it. Inactive records are
/// accepted.
pub async fn require_reference_owned<C: ConnectionTrait>(
    db: &C,
    entry_type: EntryType,
    detail: &str,
    identity: &SessionIdentity,
) -> Result<EntryReference, Error> {
    match entry_type {
        EntryType::Appointment => {
            let contact =
                require_referenced::<entity::medical_contact::Entity, C>(db, detail, identity)
                    .await?;

            Ok(EntryReference::MedicalContact(contact))
        }
        EntryType::Medication => {
            let medication =
                require_referenced::<entity::medication::Entity, C>(db, detail, identity).await?;

            Ok(EntryReference::Medication(medication))
        }
        EntryType::Other => Ok(EntryReference::None),
    }
}

async fn require_referenced<E, C>(
    db: &C,
    detail: &str,
    identity: &SessionIdentity,
) -> Result<E::Model, Error>
where
    E: OwnedEntity,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as sea_orm::PrimaryKeyTrait>::ValueType>,
{
    let model = find_by_raw_id::<E, C>(db, detail)
        .await?
        .ok_or_else(|| ResourceError::ReferenceNotFound {
            kind: E::KIND,
            id: detail.to_string(),
        })?;

    if E::owner_of(&model) != identity.account_id {
        return Err(ResourceError::ReferenceNotOwned {
            kind: E::KIND,
            id: detail.to_string(),
        }
        .into());
    }

    Ok(model)
}
