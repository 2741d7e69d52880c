//! Report identifier and sharded-path utilities.
//!
//! RRA stores each processed report in its own directory derived from a UUID. Storage
//! identifiers use a *canonical* representation: **32 lowercase hexadecimal characters** (no
//! hyphens), the same value as `Uuid::new_v4().simple().to_string()`.
//!
//! ## Sharded directory layout
//! For a canonical UUID `u`, reports live under:
//! `parent_dir/<u[0..2]>/<u[2..4]>/<u>/`
//!
//! Example:
//! `report_data/reports/55/0e/550e8400e29b41d4a716446655440000/`
//!
//! This keeps the fan-out of any single directory small as the report history grows.

mod service;

pub use service::{ShardableUuid, Uuid};

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
