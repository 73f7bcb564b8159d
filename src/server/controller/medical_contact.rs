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
        medical_contact::{MedicalContactDto, MedicalContactMessageDto, MedicalContactPayloadDto},
    },
    server::{
        controller::util::json_body,
        data::medical_contact::{MedicalContactChanges, NewMedicalContact},
        error::Error,
        guard::{
            lifecycle::require_active,
            ownership::{require_exists, require_owner},
            session::require_logged_in,
        },
        model::app::AppState,
        service::medical_contact::MedicalContactService,
    },
};

pub static MEDICAL_CONTACT_TAG: &str = "medical contact";

type Contact = entity::medical_contact::Entity;

/// List the active medical contacts of the signed in account
#[utoipa::path(
    get,
    path = "/api/medical-contacts",
    tag = MEDICAL_CONTACT_TAG,
    responses(
        (status = 200, description = "Active medical contacts sorted by last name", body = Vec<MedicalContactDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_medical_contacts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;

    let contacts = MedicalContactService::new(&state.db)
        .list(identity.account_id)
        .await?;

    Ok((StatusCode::OK, Json(contacts)))
}

#[utoipa::path(
    post,
    path = "/api/medical-contacts",
    tag = MEDICAL_CONTACT_TAG,
    request_body = MedicalContactPayloadDto,
    responses(
        (status = 201, description = "Medical contact created", body = MedicalContactMessageDto),
        (status = 400, description = "A field is missing or in the wrong format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_medical_contact(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<MedicalContactPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let contact = NewMedicalContact::try_from(json_body(payload)?)?;

    let medical_contact = MedicalContactService::new(&state.db)
        .create(identity.account_id, contact)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MedicalContactMessageDto {
            message: "Your medical contact was created successfully.".to_string(),
            medical_contact,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/medical-contacts/{id}",
    tag = MEDICAL_CONTACT_TAG,
    params(("id" = String, Path, description = "ID of the medical contact")),
    responses(
        (status = 200, description = "The medical contact", body = MedicalContactDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Medical contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_medical_contact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let contact = require_exists::<Contact, _>(&state.db, &id).await?;
    require_owner::<Contact>(&contact, &identity)?;

    Ok((StatusCode::OK, Json(MedicalContactDto::from(contact))))
}

/// Update the fields given in the body, leaving the rest unchanged
#[utoipa::path(
    patch,
    path = "/api/medical-contacts/{id}",
    tag = MEDICAL_CONTACT_TAG,
    params(("id" = String, Path, description = "ID of the medical contact")),
    request_body = MedicalContactPayloadDto,
    responses(
        (status = 200, description = "Medical contact updated", body = MedicalContactMessageDto),
        (status = 400, description = "A field is in the wrong format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Medical contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_medical_contact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<MedicalContactPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let contact = require_exists::<Contact, _>(&state.db, &id).await?;
    require_owner::<Contact>(&contact, &identity)?;
    let changes = MedicalContactChanges::try_from(json_body(payload)?)?;

    let medical_contact = MedicalContactService::new(&state.db)
        .update(contact, changes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MedicalContactMessageDto {
            message: "Your medical contact was updated successfully.".to_string(),
            medical_contact,
        }),
    ))
}

/// Deactivate a medical contact
///
/// Entries keep referencing deactivated contacts, they are only hidden from the list.
#[utoipa::path(
    delete,
    path = "/api/medical-contacts/{id}",
    tag = MEDICAL_CONTACT_TAG,
    params(("id" = String, Path, description = "ID of the medical contact")),
    responses(
        (status = 200, description = "Medical contact deactivated", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Medical contact not found", body = ErrorDto),
        (status = 409, description = "Medical contact already deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_medical_contact(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let contact = require_exists::<Contact, _>(&state.db, &id).await?;
    require_owner::<Contact>(&contact, &identity)?;
    require_active::<Contact>(&contact)?;

    MedicalContactService::new(&state.db)
        .deactivate(contact)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Your medical contact was deactivated successfully.".to_string(),
        }),
    ))
}
