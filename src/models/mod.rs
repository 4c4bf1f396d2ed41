//! Shared types used across all modules.
//!
//! The sensitive property table lives here so the redaction and
//! resolution passes read from the same records.

pub mod property;

pub use property::{SENSITIVE_PROPERTIES, SensitiveProperty};
