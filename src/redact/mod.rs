//! Redaction pass: sensitive property lines become placeholder lines.
//!
//! Every line beginning with `key=` for a tracked key is rewritten to
//! `key=${NAME}`. Keys are matched literally and anchored at the start of
//! each line; the value runs to the end of that line. Lines that match no
//! tracked key are left byte-for-byte as they were.

use std::path::Path;

use regex::{NoExpand, Regex};

use crate::document::{self, FileError};
use crate::models::SensitiveProperty;

/// A tracked property with its pre-compiled line pattern.
#[derive(Debug, Clone)]
struct RedactionRule {
    property: SensitiveProperty,
    pattern: Regex,
    replacement: String,
}

/// How many lines a single property redacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedactedKey {
    pub property: SensitiveProperty,
    pub lines: usize,
}

/// Output of [`Redactor::redact_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    /// The rewritten document.
    pub content: String,
    /// Properties that matched at least one line, in table order.
    pub redacted: Vec<RedactedKey>,
}

impl Redaction {
    /// Total number of rewritten lines.
    pub fn line_count(&self) -> usize {
        self.redacted.iter().map(|r| r.lines).sum()
    }
}

/// Rewrites sensitive lines of a properties document.
#[derive(Debug, Clone)]
pub struct Redactor {
    rules: Vec<RedactionRule>,
}

/// Build the line pattern for `key`.
///
/// Multi-line so `^`/`$` bind to line boundaries, CRLF-aware so a `\r\n`
/// line ending is kept out of the matched value.
fn line_pattern(key: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?mR)^{}=.*$", regex::escape(key)))
}

impl Redactor {
    /// Compile one rule per property, preserving table order.
    pub fn new(properties: &[SensitiveProperty]) -> Result<Self, regex::Error> {
        let rules = properties
            .iter()
            .map(|property| {
                Ok(RedactionRule {
                    property: *property,
                    pattern: line_pattern(property.key)?,
                    replacement: property.redacted_line(),
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    /// Redact `content` in memory.
    pub fn redact_str(&self, content: &str) -> Redaction {
        let mut text = content.to_string();
        let mut redacted = Vec::new();

        for rule in &self.rules {
            let lines = rule.pattern.find_iter(&text).count();
            if lines == 0 {
                continue;
            }
            // Placeholders contain `$`, which must not be read as a group reference.
            text = rule
                .pattern
                .replace_all(&text, NoExpand(&rule.replacement))
                .into_owned();
            redacted.push(RedactedKey {
                property: rule.property,
                lines,
            });
        }

        Redaction {
            content: text,
            redacted,
        }
    }

    /// Read `input`, redact it, and write the result to `output`.
    ///
    /// `input` and `output` may be the same path.
    pub fn redact_file(&self, input: &Path, output: &Path) -> Result<Redaction, FileError> {
        let content = document::read(input)?;
        let redaction = self.redact_str(&content);
        document::write(output, &redaction.content)?;
        Ok(redaction)
    }
}
