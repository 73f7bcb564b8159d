//! Utility functions and helpers for server operations.
//!
//! Request field validators and date formatting shared by the services & controllers.

pub mod time;
pub mod validate;
