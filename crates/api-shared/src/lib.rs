//! # API Shared
//!
//! Shared definitions for the RRA APIs.
//!
//! Contains:
//! - JSON request/response types (`dto` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `rra` CLI so both speak the same wire format.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
