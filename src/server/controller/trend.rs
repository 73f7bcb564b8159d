use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        trend::{TrendPointDto, TrendQuery},
    },
    server::{
        error::Error,
        guard::{
            ownership::{require_exists, require_owner},
            session::require_logged_in,
        },
        model::app::AppState,
        service::trend::TrendService,
        util::validate,
    },
};

pub static TREND_TAG: &str = "trend";

type Entry = entity::entry::Entity;

/// List the trend points of the signed in account in chronological order
#[utoipa::path(
    get,
    path = "/api/trends",
    tag = TREND_TAG,
    params(TrendQuery),
    responses(
        (status = 200, description = "Trend points derived from entries", body = Vec<TrendPointDto>),
        (status = 400, description = "Unknown condition", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trends(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TrendQuery>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let condition = validate::condition(query.condition.as_deref(), false)?;

    let points = TrendService::new(&state.db)
        .list(identity.account_id, condition)
        .await?;

    Ok((StatusCode::OK, Json(points)))
}

/// Get the trend point derived from a single entry
#[utoipa::path(
    get,
    path = "/api/trends/{id}",
    tag = TREND_TAG,
    params(("id" = String, Path, description = "ID of the entry")),
    responses(
        (status = 200, description = "The trend point", body = TrendPointDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Entry owned by another account", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trend(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let identity = require_logged_in(&session).await?;
    let entry = require_exists::<Entry, _>(&state.db, &id).await?;
    require_owner::<Entry>(&entry, &identity)?;

    let point = TrendService::new(&state.db).get(entry).await?;

    Ok((StatusCode::OK, Json(point)))
}
