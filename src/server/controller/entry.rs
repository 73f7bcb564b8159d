use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        entry::{EntryDto, EntryMessageDto, EntryPayloadDto},
    },
    server::{
        controller::util::json_body,
        data::entry::{EntryChanges, NewEntry},
        error::Error,
        guard::{
            ownership::{require_exists, require_owner},
            reference::require_reference_owned,
            session::require_logged_in,
        },
        model::app::AppState,
        service::entry::{effective_reference, EntryService},
    },
};

pub static ENTRY_TAG: &str = "entry";

type Entry = entity::entry::Entity;

/// List the log entries of the signed in account, most recent first
#[utoipa::path(
    get,
    path = "/api/entries",
    tag = ENTRY_TAG,
    responses(
        (status = 200, description = "Entries sorted by date descending", body = Vec<EntryDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_entries(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;

    let entries = EntryService::new(&state.db)
        .list(identity.account_id)
        .await?;

    Ok((StatusCode::OK, Json(entries)))
}

/// Create a log entry
///
/// Appointment entries reference a medical contact and medication entries a medication by ID
/// in `detail`, the referenced record must belong to the signed in account.
#[utoipa::path(
    post,
    path = "/api/entries",
    tag = ENTRY_TAG,
    request_body = EntryPayloadDto,
    responses(
        (status = 201, description = "Entry created", body = EntryMessageDto),
        (status = 400, description = "A field is missing or in the wrong format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Referenced record owned by another account", body = ErrorDto),
        (status = 404, description = "Referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_entry(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<EntryPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let entry = NewEntry::try_from(json_body(payload)?)?;
    let reference =
        require_reference_owned(&state.db, entry.entry_type, &entry.detail, &identity).await?;

    let entry = EntryService::new(&state.db)
        .create(identity.account_id, entry, &reference)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(EntryMessageDto {
            message: "Your entry was created successfully.".to_string(),
            entry,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/entries/{id}",
    tag = ENTRY_TAG,
    params(("id" = String, Path, description = "ID of the entry")),
    responses(
        (status = 200, description = "The entry", body = EntryDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let entry = require_exists::<Entry, _>(&state.db, &id).await?;
    require_owner::<Entry>(&entry, &identity)?;

    let entry = EntryService::new(&state.db).get(entry).await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// Update the fields given in the body, leaving the rest unchanged
///
/// The reference of the resulting type & detail is checked again even when neither changed.
#[utoipa::path(
    patch,
    path = "/api/entries/{id}",
    tag = ENTRY_TAG,
    params(("id" = String, Path, description = "ID of the entry")),
    request_body = EntryPayloadDto,
    responses(
        (status = 200, description = "Entry updated", body = EntryMessageDto),
        (status = 400, description = "A field is in the wrong format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Entry or referenced record owned by another account", body = ErrorDto),
        (status = 404, description = "Entry or referenced record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<EntryPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let entry = require_exists::<Entry, _>(&state.db, &id).await?;
    require_owner::<Entry>(&entry, &identity)?;
    let changes = EntryChanges::try_from(json_body(payload)?)?;
    let (entry_type, detail) = effective_reference(&entry, &changes)?;
    let reference = require_reference_owned(&state.db, entry_type, &detail, &identity).await?;

    let entry = EntryService::new(&state.db)
        .update(entry, changes, &reference)
        .await?;

    Ok((
        StatusCode::OK,
        Json(EntryMessageDto {
            message: "Your entry was updated successfully.".to_string(),
            entry,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/entries/{id}",
    tag = ENTRY_TAG,
    params(("id" = String, Path, description = "ID of the entry")),
    responses(
        (status = 200, description = "Entry deleted", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let entry = require_exists::<Entry, _>(&state.db, &id).await?;
    require_owner::<Entry>(&entry, &identity)?;

    EntryService::new(&state.db).delete(entry).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Your entry has been deleted successfully.".to_string(),
        }),
    ))
}
