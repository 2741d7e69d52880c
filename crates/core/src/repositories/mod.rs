//! Persistent storage.

pub mod reports;
