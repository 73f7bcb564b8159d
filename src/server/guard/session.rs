use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use sea_orm::ConnectionTrait;
use tower_sessions::Session;

use crate::server::{
    data::account::{credential::CredentialRepository, AccountRepository},
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        session::{
            account::SessionAccountId, credential::SessionCredentialId, SessionIdentity,
        },
    },
};

/// Checks that the identity stored in the session still exists in the database
///
/// When an account id is stored the account must exist, and when a credential id is stored as
/// well the credential must exist and belong to that account. Otherwise the identity is
/// removed from the session and [`AuthError::SessionNotRecognized`] is returned. Anonymous
/// sessions always pass.
pub async fn reconcile_session<C: ConnectionTrait>(db: &C, session: &Session) -> Result<(), Error> {
    let stored_ids = match (
        SessionAccountId::get(session).await,
        SessionCredentialId::get(session).await,
    ) {
        (Ok(account_id), Ok(credential_id)) => Some((account_id, credential_id)),
        // Ids which don't parse can't refer to any record
        (Err(Error::ParseError(_)), _) | (_, Err(Error::ParseError(_))) => None,
        (Err(err), _) | (_, Err(err)) => return Err(err),
    };

    let consistent = match stored_ids {
        None => false,
        Some((None, _)) => true,
        Some((Some(account_id), credential_id)) => {
            match AccountRepository::new(db).get(account_id).await? {
                None => false,
                Some(account) => match credential_id {
                    None => true,
                    Some(credential_id) => CredentialRepository::new(db)
                        .get(credential_id)
                        .await?
                        .is_some_and(|credential| credential.account_id == account.id),
                },
            }
        }
    };

    if !consistent {
        SessionIdentity::clear(session).await?;

        return Err(AuthError::SessionNotRecognized.into());
    }

    Ok(())
}

/// Middleware running [`reconcile_session`] before every API route
pub async fn session_consistency(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    if let Err(err) = reconcile_session(&state.db, &session).await {
        return err.into_response();
    }

    next.run(request).await
}

/// Returns the signed in identity, failing with 401 unless both ids are in the session
pub async fn require_logged_in(session: &Session) -> Result<SessionIdentity, Error> {
    SessionIdentity::get(session)
        .await?
        .ok_or_else(|| AuthError::NotLoggedIn.into())
}

/// Fails with 403 when any part of an identity is stored in the session
pub async fn require_logged_out(session: &Session) -> Result<(), Error> {
    let account_id = SessionAccountId::get(session).await?;
    let credential_id = SessionCredentialId::get(session).await?;

    if account_id.is_some() || credential_id.is_some() {
        return Err(AuthError::AlreadyLoggedIn.into());
    }

    Ok(())
}
