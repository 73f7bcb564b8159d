use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_ACCOUNT_ID_KEY: &str = "medlog:account:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAccountId(pub String);

impl SessionAccountId {
    /// Insert account ID into session
    pub async fn insert(session: &Session, account_id: i32) -> Result<(), Error> {
        session
            .insert(
                SESSION_ACCOUNT_ID_KEY,
                SessionAccountId(account_id.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get account ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionAccountId>(SESSION_ACCOUNT_ID_KEY)
            .await?
            .map(|SessionAccountId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session account id: {}", e))
                })
            })
            .transpose()
    }

    /// Remove account ID from session
    pub async fn remove(session: &Session) -> Result<(), Error> {
        session
            .remove::<SessionAccountId>(SESSION_ACCOUNT_ID_KEY)
            .await?;

        Ok(())
    }
}
