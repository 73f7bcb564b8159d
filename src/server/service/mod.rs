//! Service layer for business logic.
//!
//! Services convert validated request payloads into repository calls and repository models
//! into response DTOs. They assume the access guards already ran, the only checks they make
//! are the ones which need the database (username uniqueness, sign in credentials).

pub mod account;
pub mod credential;
pub mod entry;
pub mod insurance_card;
pub mod medical_contact;
pub mod medication;
pub mod trend;
