//! App-wide constants.
//!
//! Centralises the tool name and file naming conventions so a rename
//! only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "propscrub";

/// Suffix appended to the original file name to form the backup path.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Prefix printed before non-fatal diagnostics.
pub const WARNING_PREFIX: &str = "Warning:";
