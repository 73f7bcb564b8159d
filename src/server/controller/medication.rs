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
        medication::{MedicationDto, MedicationMessageDto, MedicationPayloadDto},
    },
    server::{
        controller::util::json_body,
        data::medication::{MedicationChanges, NewMedication},
        error::Error,
        guard::{
            lifecycle::require_active,
            ownership::{require_exists, require_owner},
            session::require_logged_in,
        },
        model::app::AppState,
        service::medication::MedicationService,
    },
};

pub static MEDICATION_TAG: &str = "medication";

type Medication = entity::medication::Entity;

/// List the active medications of the signed in account
#[utoipa::path(
    get,
    path = "/api/medications",
    tag = MEDICATION_TAG,
    responses(
        (status = 200, description = "Active medications sorted by name", body = Vec<MedicationDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_medications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;

    let medications = MedicationService::new(&state.db)
        .list(identity.account_id)
        .await?;

    Ok((StatusCode::OK, Json(medications)))
}

#[utoipa::path(
    post,
    path = "/api/medications",
    tag = MEDICATION_TAG,
    request_body = MedicationPayloadDto,
    responses(
        (status = 201, description = "Medication added", body = MedicationMessageDto),
        (status = 400, description = "Name is missing or empty", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_medication(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<MedicationPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let medication = NewMedication::try_from(json_body(payload)?)?;

    let medication = MedicationService::new(&state.db)
        .create(identity.account_id, medication)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MedicationMessageDto {
            message: "Your medication was added successfully.".to_string(),
            medication,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/medications/{id}",
    tag = MEDICATION_TAG,
    params(("id" = String, Path, description = "ID of the medication")),
    responses(
        (status = 200, description = "The medication", body = MedicationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_medication(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let medication = require_exists::<Medication, _>(&state.db, &id).await?;
    require_owner::<Medication>(&medication, &identity)?;

    Ok((StatusCode::OK, Json(MedicationDto::from(medication))))
}

#[utoipa::path(
    patch,
    path = "/api/medications/{id}",
    tag = MEDICATION_TAG,
    params(("id" = String, Path, description = "ID of the medication")),
    request_body = MedicationPayloadDto,
    responses(
        (status = 200, description = "Medication updated", body = MedicationMessageDto),
        (status = 400, description = "A field is in the wrong format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_medication(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<MedicationPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let medication = require_exists::<Medication, _>(&state.db, &id).await?;
    require_owner::<Medication>(&medication, &identity)?;
    let changes = MedicationChanges::try_from(json_body(payload)?)?;

    let medication = MedicationService::new(&state.db)
        .update(medication, changes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MedicationMessageDto {
            message: "Your medication was updated successfully.".to_string(),
            medication,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/medications/{id}",
    tag = MEDICATION_TAG,
    params(("id" = String, Path, description = "ID of the medication")),
    responses(
        (status = 200, description = "Medication deactivated", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Medication not found", body = ErrorDto),
        (status = 409, description = "Medication already deactivated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_medication(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let medication = require_exists::<Medication, _>(&state.db, &id).await?;
    require_owner::<Medication>(&medication, &identity)?;
    require_active::<Medication>(&medication)?;

    MedicationService::new(&state.db)
        .deactivate(medication)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Your medication was deactivated successfully.".to_string(),
        }),
    ))
}
