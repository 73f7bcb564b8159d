//! HTTP controller endpoints for the medlog web API.
//!
//! Axum handlers for accounts, credentials and every medical resource. Each handler starts
//! with its guard chain as explicit `?` calls (login, existence, ownership), then reads and
//! validates the request body, then runs reference and lifecycle checks before calling a
//! service. Handlers take the JSON body as `Result<Json<_>, JsonRejection>` so that a
//! malformed body is only reported once the guards before it have passed.

pub mod account;
pub mod credential;
pub mod entry;
pub mod insurance_card;
pub mod medical_contact;
pub mod medication;
pub mod trend;
pub mod util;
