//! Session data models and utilities.
//!
//! Type-safe wrappers for the identity stored in the tower-sessions session (Redis-backed in
//! production). A signed in session holds both an account id and a credential id; holding
//! only one of them is treated as signed out by the login gates.

pub mod account;
pub mod credential;

use tower_sessions::Session;

use crate::server::{
    error::Error,
    model::session::{account::SessionAccountId, credential::SessionCredentialId},
};

/// The identity of a signed in session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionIdentity {
    pub account_id: i32,
    pub credential_id: i32,
}

impl SessionIdentity {
    /// Store both ids in the session, replacing any previous identity
    pub async fn insert(session: &Session, account_id: i32, credential_id: i32) -> Result<(), Error> {
        SessionAccountId::insert(session, account_id).await?;
        SessionCredentialId::insert(session, credential_id).await?;

        Ok(())
    }

    /// Returns the identity only when both ids are present
    pub async fn get(session: &Session) -> Result<Option<Self>, Error> {
        let account_id = SessionAccountId::get(session).await?;
        let credential_id = SessionCredentialId::get(session).await?;

        Ok(match (account_id, credential_id) {
            (Some(account_id), Some(credential_id)) => Some(Self {
                account_id,
                credential_id,
            }),
            _ => None,
        })
    }

    /// Remove both ids from the session
    pub async fn clear(session: &Session) -> Result<(), Error> {
        SessionAccountId::remove(session).await?;
        SessionCredentialId::remove(session).await?;

        Ok(())
    }
}
