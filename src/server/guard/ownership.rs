use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

use crate::server::{
    error::{resource::ResourceError, Error},
    model::{resource::ResourceKind, session::SessionIdentity},
};

/// An entity whose records belong to a single account
pub trait OwnedEntity: EntityTrait {
    const KIND: ResourceKind;

    fn id_of(model: &Self::Model) -> i32;

    /// ID of the account owning the record
    fn owner_of(model: &Self::Model) -> i32;
}

impl OwnedEntity for entity::entry::Entity {
    const KIND: ResourceKind = ResourceKind::Entry;

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn owner_of(model: &Self::Model) -> i32 {
        model.owner_id
    }
}

impl OwnedEntity for entity::medical_contact::Entity {
    const KIND: ResourceKind = ResourceKind::MedicalContact;

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn owner_of(model: &Self::Model) -> i32 {
        model.owner_id
    }
}

impl OwnedEntity for entity::medication::Entity {
    const KIND: ResourceKind = ResourceKind::Medication;

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn owner_of(model: &Self::Model) -> i32 {
        model.owner_id
    }
}

impl OwnedEntity for entity::insurance_card::Entity {
    const KIND: ResourceKind = ResourceKind::InsuranceCard;

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }

    fn owner_of(model: &Self::Model) -> i32 {
        model.owner_id
    }
}

/// Loads the record addressed by a path id
///
/// Ids which are not integers are reported the same way as ids matching no record, with
/// [`ResourceError::NotFound`].
pub async fn require_exists<E, C>(db: &C, raw_id: &str) -> Result<E::Model, Error>
where
    E: OwnedEntity,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    find_by_raw_id::<E, C>(db, raw_id)
        .await?
        .ok_or_else(|| {
            ResourceError::NotFound {
                kind: E::KIND,
                id: raw_id.to_string(),
            }
            .into()
        })
}

/// Fails with 403 when the record belongs to another account
pub fn require_owner<E: OwnedEntity>(
    model: &E::Model,
    identity: &SessionIdentity,
) -> Result<(), Error> {
    if E::owner_of(model) != identity.account_id {
        return Err(ResourceError::NotOwner {
            kind: E::KIND,
            id: E::id_of(model).to_string(),
        }
        .into());
    }

    Ok(())
}

/// Looks up a record by an id taken from a path or entry detail
///
/// Only the canonical decimal form addresses a record, so `+5` or ` 05 ` find nothing.
pub(super) async fn find_by_raw_id<E, C>(db: &C, raw_id: &str) -> Result<Option<E::Model>, Error>
where
    E: EntityTrait,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let Some(id) = canonical_id(raw_id) else {
        return Ok(None);
    };

    Ok(E::find_by_id(id).one(db).await?)
}

fn canonical_id(raw_id: &str) -> Option<i32> {
    raw_id
        .parse::<i32>()
        .ok()
        .filter(|id| id.to_string() == raw_id)
}
