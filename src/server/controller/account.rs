use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        account::{
            AccountDto, AccountMessageDto, AccountSessionDto, SessionInfoDto, SignInDto,
            SignUpDto, UpdateAccountDto,
        },
        api::{ErrorDto, MessageDto},
    },
    server::{
        controller::util::json_body,
        error::Error,
        guard::session::{require_logged_in, require_logged_out},
        model::{app::AppState, session::SessionIdentity},
        service::account::{validate_account_name, AccountService, SignIn, SignUp},
    },
};

pub static ACCOUNT_TAG: &str = "account";

/// Get the account & username of the current session
///
/// Both are null when nobody is signed in.
#[utoipa::path(
    get,
    path = "/api/accounts/session",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Session info, possibly anonymous", body = SessionInfoDto),
        (status = 500, description = "Session was not recognized or internal error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let identity = SessionIdentity::get(&session).await?;

    let info = AccountService::new(&state.db).session_info(identity).await?;
    let (account, username) = match info {
        Some((account, username)) => (Some(account), Some(username)),
        None => (None, None),
    };

    Ok((
        StatusCode::OK,
        Json(SessionInfoDto {
            message: "Your session info was found successfully.".to_string(),
            account,
            username,
        }),
    ))
}

/// Sign in with a username & password
#[utoipa::path(
    post,
    path = "/api/accounts/session",
    tag = ACCOUNT_TAG,
    request_body = SignInDto,
    responses(
        (status = 201, description = "Signed in", body = AccountSessionDto),
        (status = 400, description = "Username or password in the wrong format", body = ErrorDto),
        (status = 401, description = "Invalid login credentials", body = ErrorDto),
        (status = 403, description = "Already signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SignInDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_logged_out(&session).await?;
    let sign_in = SignIn::try_from(json_body(payload)?)?;

    let (account, credential) = AccountService::new(&state.db).sign_in(sign_in).await?;

    SessionIdentity::insert(&session, account.id, credential.id).await?;

    tracing::info!(
        "Credential ID {} signed in to account ID {}",
        credential.id,
        account.id
    );

    Ok((
        StatusCode::CREATED,
        Json(AccountSessionDto {
            message: "You have logged in successfully".to_string(),
            account,
            username: credential.username,
        }),
    ))
}

/// Sign out by clearing the session
#[utoipa::path(
    delete,
    path = "/api/accounts/session",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Signed out", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(session: Session) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;

    SessionIdentity::clear(&session).await?;

    tracing::info!("Credential ID {} signed out", identity.credential_id);

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "You have been logged out successfully.".to_string(),
        }),
    ))
}

/// Create a shared account with its first credential and sign in to it
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created & signed in", body = AccountSessionDto),
        (status = 400, description = "Name, username or password in the wrong format", body = ErrorDto),
        (status = 403, description = "Already signed in", body = ErrorDto),
        (status = 409, description = "Username already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<SignUpDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    require_logged_out(&session).await?;
    let sign_up = SignUp::try_from(json_body(payload)?)?;

    let (account, credential) = AccountService::new(&state.db).sign_up(sign_up).await?;

    SessionIdentity::insert(&session, account.id, credential.id).await?;

    tracing::info!("Created account ID {}", account.id);

    Ok((
        StatusCode::CREATED,
        Json(AccountSessionDto {
            message: format!(
                "Your account was created successfully. You have been logged in as {}.",
                credential.username
            ),
            account,
            username: credential.username,
        }),
    ))
}

/// Rename the shared account
#[utoipa::path(
    patch,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Account renamed", body = AccountMessageDto),
        (status = 400, description = "Name is empty or missing", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_account(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<UpdateAccountDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let name = validate_account_name(json_body(payload)?)?;

    let account: AccountDto = AccountService::new(&state.db)
        .rename(identity.account_id, name)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AccountMessageDto {
            message: "Your profile was updated successfully.".to_string(),
            account: Some(account),
        }),
    ))
}

/// Delete the shared account, its credentials and every record it owns
#[utoipa::path(
    delete,
    path = "/api/accounts",
    tag = ACCOUNT_TAG,
    responses(
        (status = 200, description = "Account deleted & signed out", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;

    AccountService::new(&state.db)
        .delete(identity.account_id)
        .await?;

    SessionIdentity::clear(&session).await?;

    tracing::info!("Deleted account ID {}", identity.account_id);

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Your account has been deleted successfully.".to_string(),
        }),
    ))
}
