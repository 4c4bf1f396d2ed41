//! The backup → redact → resolve pipeline run by the binary.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::backup;
use crate::document::FileError;
use crate::env::Env;
use crate::models::{SENSITIVE_PROPERTIES, SensitiveProperty};
use crate::redact::{Redaction, Redactor};
use crate::resolve::{self, Resolution};

/// Errors from a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("invalid property pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result of a completed run.
#[derive(Debug)]
pub struct ScrubReport {
    /// Where the untouched original was copied.
    pub backup: PathBuf,
    /// What the redaction pass rewrote.
    pub redaction: Redaction,
    /// What the resolution pass substituted, and which variables were unset.
    pub resolution: Resolution,
}

impl ScrubReport {
    /// Properties whose environment variable was unset.
    pub fn missing(&self) -> &[SensitiveProperty] {
        &self.resolution.missing
    }
}

/// Runs the three passes over a single properties file.
pub struct Scrubber {
    properties: Vec<SensitiveProperty>,
    redactor: Redactor,
    env: Env,
}

impl Scrubber {
    /// Create a scrubber over the built-in sensitive property table.
    pub fn new(env: Env) -> Result<Self, PipelineError> {
        Self::with_properties(SENSITIVE_PROPERTIES, env)
    }

    /// Create a scrubber over an explicit property table.
    pub fn with_properties(
        properties: &[SensitiveProperty],
        env: Env,
    ) -> Result<Self, PipelineError> {
        Ok(Self {
            properties: properties.to_vec(),
            redactor: Redactor::new(properties)?,
            env,
        })
    }

    /// Back up `path`, redact from the backup into `path`, then resolve
    /// `path` in place.
    ///
    /// A failure after the backup step leaves the backup on disk.
    pub fn run(&self, path: &Path) -> Result<ScrubReport, PipelineError> {
        let backup = backup::create_backup(path)?;
        let redaction = self.redactor.redact_file(&backup, path)?;
        let resolution = resolve::resolve_file(path, &self.properties, &self.env)?;

        Ok(ScrubReport {
            backup,
            redaction,
            resolution,
        })
    }
}
