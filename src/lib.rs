//! propscrub — properties file redaction (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod backup;
pub mod constants;
pub mod document;
pub mod env;
pub mod models;
pub mod pipeline;
pub mod redact;
pub mod resolve;
