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
        insurance_card::{InsuranceCardDto, InsuranceCardMessageDto, InsuranceCardPayloadDto},
    },
    server::{
        controller::util::json_body,
        data::insurance_card::{InsuranceCardChanges, NewInsuranceCard},
        error::Error,
        guard::{
            ownership::{require_exists, require_owner},
            session::require_logged_in,
        },
        model::app::AppState,
        service::insurance_card::InsuranceCardService,
    },
};

pub static INSURANCE_CARD_TAG: &str = "insurance card";

type Card = entity::insurance_card::Entity;

#[utoipa::path(
    get,
    path = "/api/insurance-cards",
    tag = INSURANCE_CARD_TAG,
    responses(
        (status = 200, description = "Insurance cards sorted by purpose", body = Vec<InsuranceCardDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_insurance_cards(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;

    let cards = InsuranceCardService::new(&state.db)
        .list(identity.account_id)
        .await?;

    Ok((StatusCode::OK, Json(cards)))
}

#[utoipa::path(
    post,
    path = "/api/insurance-cards",
    tag = INSURANCE_CARD_TAG,
    request_body = InsuranceCardPayloadDto,
    responses(
        (status = 201, description = "Insurance card created", body = InsuranceCardMessageDto),
        (status = 400, description = "Subscriber name or purpose missing", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_insurance_card(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<InsuranceCardPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let card = NewInsuranceCard::try_from(json_body(payload)?)?;

    let insurance_card = InsuranceCardService::new(&state.db)
        .create(identity.account_id, card)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(InsuranceCardMessageDto {
            message: "Your insurance card was created successfully.".to_string(),
            insurance_card,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/insurance-cards/{id}",
    tag = INSURANCE_CARD_TAG,
    params(("id" = String, Path, description = "ID of the insurance card")),
    responses(
        (status = 200, description = "The insurance card", body = InsuranceCardDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Insurance card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insurance_card(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let card = require_exists::<Card, _>(&state.db, &id).await?;
    require_owner::<Card>(&card, &identity)?;

    Ok((StatusCode::OK, Json(InsuranceCardDto::from(card))))
}

#[utoipa::path(
    patch,
    path = "/api/insurance-cards/{id}",
    tag = INSURANCE_CARD_TAG,
    params(("id" = String, Path, description = "ID of the insurance card")),
    request_body = InsuranceCardPayloadDto,
    responses(
        (status = 200, description = "Insurance card updated", body = InsuranceCardMessageDto),
        (status = 400, description = "A field is in the wrong format", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Insurance card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_insurance_card(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    payload: Result<Json<InsuranceCardPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let card = require_exists::<Card, _>(&state.db, &id).await?;
    require_owner::<Card>(&card, &identity)?;
    let changes = InsuranceCardChanges::try_from(json_body(payload)?)?;

    let insurance_card = InsuranceCardService::new(&state.db)
        .update(card, changes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(InsuranceCardMessageDto {
            message: "Your insurance card was updated successfully.".to_string(),
            insurance_card,
        }),
    ))
}

/// Permanently delete an insurance card
#[utoipa::path(
    delete,
    path = "/api/insurance-cards/{id}",
    tag = INSURANCE_CARD_TAG,
    params(("id" = String, Path, description = "ID of the insurance card")),
    responses(
        (status = 200, description = "Insurance card deleted", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Owned by another account", body = ErrorDto),
        (status = 404, description = "Insurance card not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_insurance_card(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let card = require_exists::<Card, _>(&state.db, &id).await?;
    require_owner::<Card>(&card, &identity)?;

    InsuranceCardService::new(&state.db).delete(card).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Your insurance card was deleted successfully.".to_string(),
        }),
    ))
}
