use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_CREDENTIAL_ID_KEY: &str = "medlog:credential:id";

/// ID of the credential the session signed in with
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionCredentialId(pub String);

impl SessionCredentialId {
    pub async fn insert(session: &Session, credential_id: i32) -> Result<(), Error> {
        session
            .insert(
                SESSION_CREDENTIAL_ID_KEY,
                SessionCredentialId(credential_id.to_string()),
            )
            .await?;

        Ok(())
    }

    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionCredentialId>(SESSION_CREDENTIAL_ID_KEY)
            .await?
            .map(|SessionCredentialId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session credential id: {}", e))
                })
            })
            .transpose()
    }

    pub async fn remove(session: &Session) -> Result<(), Error> {
        session
            .remove::<SessionCredentialId>(SESSION_CREDENTIAL_ID_KEY)
            .await?;

        Ok(())
    }
}
