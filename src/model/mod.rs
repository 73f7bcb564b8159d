//! Request and response types shared by the HTTP API and its consumers.
//!
//! Request DTOs keep every field optional so that missing or malformed fields are reported by
//! the field validators with a field-specific message, after the access guards have run.

pub mod account;
pub mod api;
pub mod entry;
pub mod insurance_card;
pub mod medical_contact;
pub mod medication;
pub mod trend;
