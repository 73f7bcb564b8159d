use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        account::{AccountMessageDto, AccountSessionDto, CredentialDto, DeleteCredentialDto},
        api::ErrorDto,
    },
    server::{
        controller::util::json_body,
        error::Error,
        guard::session::require_logged_in,
        model::{app::AppState, session::SessionIdentity},
        service::{
            account::AccountService,
            credential::{
                validate_deleted_username, CredentialChanges, CredentialService, NewCredential,
            },
        },
    },
};

pub static CREDENTIAL_TAG: &str = "credential";

/// Add a credential to the shared account
#[utoipa::path(
    post,
    path = "/api/accounts/credentials",
    tag = CREDENTIAL_TAG,
    request_body = CredentialDto,
    responses(
        (status = 201, description = "Credential added", body = AccountMessageDto),
        (status = 400, description = "Username or password in the wrong format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 409, description = "Username already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_credential(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CredentialDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let credential = NewCredential::try_from(json_body(payload)?)?;

    let (account, credential) = CredentialService::new(&state.db)
        .add(&identity, credential)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountMessageDto {
            message: format!(
                "The credential with username {} was added successfully.",
                credential.username
            ),
            account: Some(account),
        }),
    ))
}

/// Update the username and/or password of the signed in credential
#[utoipa::path(
    patch,
    path = "/api/accounts/credentials",
    tag = CREDENTIAL_TAG,
    request_body = CredentialDto,
    responses(
        (status = 200, description = "Credential updated", body = AccountSessionDto),
        (status = 400, description = "Neither field given, or a field in the wrong format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 409, description = "Username already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_credential(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CredentialDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let changes = CredentialChanges::try_from(json_body(payload)?)?;

    let (account, credential) = CredentialService::new(&state.db)
        .update(&identity, changes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AccountSessionDto {
            message: "Your credentials were updated successfully.".to_string(),
            account,
            username: credential.username,
        }),
    ))
}

/// Delete a credential of the shared account by username
///
/// Deleting the signed in credential signs out, the response account is then null.
#[utoipa::path(
    delete,
    path = "/api/accounts/credentials",
    tag = CREDENTIAL_TAG,
    request_body = DeleteCredentialDto,
    responses(
        (status = 200, description = "Credential deleted", body = AccountMessageDto),
        (status = 400, description = "Username in the wrong format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Credential belongs to another account", body = ErrorDto),
        (status = 404, description = "No credential with the username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_credential(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<DeleteCredentialDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let username = validate_deleted_username(json_body(payload)?)?;

    let deleted = CredentialService::new(&state.db)
        .delete_by_username(&identity, &username)
        .await?;

    let account = if deleted.id == identity.credential_id {
        SessionIdentity::clear(&session).await?;

        tracing::info!("Credential ID {} deleted itself and signed out", deleted.id);

        None
    } else {
        Some(
            AccountService::new(&state.db)
                .get_account(identity.account_id)
                .await?,
        )
    };

    Ok((
        StatusCode::OK,
        Json(AccountMessageDto {
            message: format!(
                "The credential with username {} has been deleted successfully.",
                username
            ),
            account,
        }),
    ))
}
