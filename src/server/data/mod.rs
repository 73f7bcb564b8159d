//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one per table. They are
//! generic over [`sea_orm::ConnectionTrait`] so the same repository can run against a
//! connection or inside a transaction. Repositories perform no access checks; those belong to
//! the guards run by each controller.

pub mod account;
pub mod entry;
pub mod insurance_card;
pub mod medical_contact;
pub mod medication;
