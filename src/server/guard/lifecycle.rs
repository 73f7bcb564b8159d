use crate::server::{
    error::{resource::ResourceError, Error},
    guard::ownership::OwnedEntity,
};

/// An entity which is deactivated rather than deleted
///
/// Records start active and can only move to inactive, list queries return active records only.
pub trait SoftDeletable: OwnedEntity {
    fn is_active(model: &Self::Model) -> bool;
}

impl SoftDeletable for entity::medical_contact::Entity {
    fn is_active(model: &Self::Model) -> bool {
        model.active
    }
}

impl SoftDeletable for entity::medication::Entity {
    fn is_active(model: &Self::Model) -> bool {
        model.active
    }
}

/// Fails with 409 when the record was already deactivated
pub fn require_active<E: SoftDeletable>(model: &E::Model) -> Result<(), Error> {
    if !E::is_active(model) {
        return Err(ResourceError::AlreadyDeactivated {
            kind: E::KIND,
            id: E::id_of(model).to_string(),
        }
        .into());
    }

    Ok(())
}
