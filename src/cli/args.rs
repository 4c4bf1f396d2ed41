//! Clap argument types.

use clap::Parser;
use std::path::PathBuf;

/// Redact sensitive keys in a Java properties file, then fill them from the environment.
///
/// Takes exactly one argument and no flags: a leading `-` is part of the
/// file name, so `--help` names a file rather than asking for help.
#[derive(Parser, Debug)]
#[command(
    name = propscrub::constants::APP_NAME,
    disable_help_flag = true,
    disable_version_flag = true,
)]
pub struct Cli {
    /// Path to the properties file to rewrite in place.
    #[arg(value_name = "properties_file", allow_hyphen_values = true)]
    pub file: PathBuf,
}
