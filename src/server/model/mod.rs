//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, the resource kinds used by the access guards, and session data
//! structures.

pub mod app;
pub mod db;
pub mod resource;
pub mod session;
