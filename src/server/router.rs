//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI description, and Swagger
//! UI serves the collected document at `/api/docs`.

use axum::{middleware, Router};
use tower_sessions::{SessionManagerLayer, SessionStore};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, guard::session::session_consistency, model::app::AppState};

/// Builds the API routes and the Swagger UI
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Medlog", description = "Medlog API"), tags(
        (name = controller::account::ACCOUNT_TAG, description = "Account & session API routes"),
        (name = controller::credential::CREDENTIAL_TAG, description = "Credential API routes"),
        (name = controller::entry::ENTRY_TAG, description = "Log entry API routes"),
        (name = controller::medical_contact::MEDICAL_CONTACT_TAG, description = "Medical contact API routes"),
        (name = controller::medication::MEDICATION_TAG, description = "Medication API routes"),
        (name = controller::insurance_card::INSURANCE_CARD_TAG, description = "Insurance card API routes"),
        (name = controller::trend::TREND_TAG, description = "Trend API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::account::get_session,
            controller::account::sign_in,
            controller::account::sign_out
        ))
        .routes(routes!(
            controller::account::sign_up,
            controller::account::update_account,
            controller::account::delete_account
        ))
        .routes(routes!(
            controller::credential::add_credential,
            controller::credential::update_credential,
            controller::credential::delete_credential
        ))
        .routes(routes!(
            controller::entry::list_entries,
            controller::entry::create_entry
        ))
        .routes(routes!(
            controller::entry::get_entry,
            controller::entry::update_entry,
            controller::entry::delete_entry
        ))
        .routes(routes!(
            controller::medical_contact::list_medical_contacts,
            controller::medical_contact::create_medical_contact
        ))
        .routes(routes!(
            controller::medical_contact::get_medical_contact,
            controller::medical_contact::update_medical_contact,
            controller::medical_contact::delete_medical_contact
        ))
        .routes(routes!(
            controller::medication::list_medications,
            controller::medication::create_medication
        ))
        .routes(routes!(
            controller::medication::get_medication,
            controller::medication::update_medication,
            controller::medication::delete_medication
        ))
        .routes(routes!(
            controller::insurance_card::list_insurance_cards,
            controller::insurance_card::create_insurance_card
        ))
        .routes(routes!(
            controller::insurance_card::get_insurance_card,
            controller::insurance_card::update_insurance_card,
            controller::insurance_card::delete_insurance_card
        ))
        .routes(routes!(controller::trend::list_trends))
        .routes(routes!(controller::trend::get_trend))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application: API routes behind the session consistency check and the
/// session layer
pub fn app<S>(state: AppState, session: SessionManagerLayer<S>) -> Router
where
    S: SessionStore + Clone,
{
    routes()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_consistency,
        ))
        .layer(session)
        .with_state(state)
}
