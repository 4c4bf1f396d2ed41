//! CLI argument parsing and user-facing output.
//!
//! Uses clap derive macros for the argument definition. Usage and
//! missing-variable warnings go to stdout; fatal errors are printed by
//! `main` on stderr.

pub mod args;

use clap::CommandFactory;
use propscrub::constants::WARNING_PREFIX;

/// The one-line usage string, e.g. `Usage: propscrub <properties_file>`.
pub fn usage() -> String {
    args::Cli::command().render_usage().to_string()
}

/// Print the usage line to stdout.
pub fn print_usage() {
    println!("{}", usage());
}

/// Print a non-fatal warning to stdout.
pub fn print_warning(message: &str) {
    use colored::Colorize;
    println!("{} {message}", WARNING_PREFIX.yellow().bold());
}
