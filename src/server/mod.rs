//! Server application core modules.
//!
//! Everything behind the HTTP API: routing, controllers, the session & ownership guards every
//! controller composes, services, database repositories and startup configuration.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod guard;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
