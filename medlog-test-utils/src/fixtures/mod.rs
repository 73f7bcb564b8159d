//! Fixtures for inserting records during test execution.
//!
//! - `account` - Accounts and their sign in credentials
//! - `resource` - Entries, medical contacts, medications and insurance cards

pub mod account;
pub mod resource;
