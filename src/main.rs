//! propscrub — properties file redaction CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::Cli;
use propscrub::env::Env;
use propscrub::pipeline::Scrubber;
use propscrub::resolve;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            cli::print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let scrubber = Scrubber::new(Env::real()).context("failed to build redaction rules")?;
    let report = scrubber
        .run(&cli.file)
        .with_context(|| format!("failed to scrub {}", cli.file.display()))?;

    for property in report.missing() {
        cli::print_warning(&resolve::missing_message(property));
    }

    Ok(())
}
