//! Resolution pass: placeholders are filled from the environment.
//!
//! Each placeholder is replaced by plain substring substitution wherever it
//! appears in the document, not only on redacted lines. Values are inserted
//! verbatim. A placeholder whose variable is unset stays in the text and is
//! reported back to the caller as missing.

use std::path::Path;

use crate::document::{self, FileError};
use crate::env::Env;
use crate::models::SensitiveProperty;

/// Output of [`resolve_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The document with every available placeholder substituted.
    pub content: String,
    /// Properties whose environment variable was unset, in table order.
    pub missing: Vec<SensitiveProperty>,
}

/// Human-readable warning for a placeholder whose variable is unset.
pub fn missing_message(property: &SensitiveProperty) -> String {
    format!("Environment variable for {} not found", property.placeholder)
}

/// Substitute placeholders in `content` using values from `env`.
pub fn resolve_str(content: &str, properties: &[SensitiveProperty], env: &Env) -> Resolution {
    let mut text = content.to_string();
    let mut missing = Vec::new();

    for property in properties {
        match env.get(property.env_var) {
            Some(value) => text = text.replace(property.placeholder, &value),
            None => missing.push(*property),
        }
    }

    Resolution {
        content: text,
        missing,
    }
}

/// Resolve the document at `path` in place.
pub fn resolve_file(
    path: &Path,
    properties: &[SensitiveProperty],
    env: &Env,
) -> Result<Resolution, FileError> {
    let content = document::read(path)?;
    let resolution = resolve_str(&content, properties, env);
    document::write(path, &resolution.content)?;
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SENSITIVE_PROPERTIES;
    use pretty_assertions::assert_eq;

    fn no_env() -> Env {
        Env::from_vars(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn set_variable_replaces_placeholder() {
        let env = Env::from_vars([("DB_PASSWORD", "hunter2")]);
        let resolution = resolve_str(
            "spring.datasource.password=${DB_PASSWORD}\n",
            SENSITIVE_PROPERTIES,
            &env,
        );
        assert_eq!(resolution.content, "spring.datasource.password=hunter2\n");
        assert_eq!(resolution.missing.len(), SENSITIVE_PROPERTIES.len() - 1);
        assert!(resolution.missing.iter().all(|p| p.env_var != "DB_PASSWORD"));
    }

    #[test]
    fn unset_variable_keeps_placeholder_and_reports_it() {
        let resolution = resolve_str(
            "spring.datasource.password=${DB_PASSWORD}\n",
            SENSITIVE_PROPERTIES,
            &no_env(),
        );
        assert_eq!(resolution.content, "spring.datasource.password=${DB_PASSWORD}\n");
        assert!(!resolution.missing.is_empty());
        let names: Vec<_> = resolution.missing.iter().map(|p| p.env_var).collect();
        let table: Vec<_> = SENSITIVE_PROPERTIES.iter().map(|p| p.env_var).collect();
        assert_eq!(names, table);
    }

    #[test]
    fn missing_is_reported_even_when_placeholder_absent() {
        let resolution = resolve_str("server.port=8080\n", SENSITIVE_PROPERTIES, &no_env());
        assert_eq!(resolution.content, "server.port=8080\n");
        assert_eq!(resolution.missing.len(), 7);
    }

    #[test]
    fn empty_value_counts_as_present() {
        let env = Env::from_vars([("DB_USERNAME", "")]);
        let resolution = resolve_str(
            "spring.datasource.username=${DB_USERNAME}\n",
            SENSITIVE_PROPERTIES,
            &env,
        );
        assert_eq!(resolution.content, "spring.datasource.username=\n");
        assert!(resolution.missing.iter().all(|p| p.env_var != "DB_USERNAME"));
    }

    #[test]
    fn every_occurrence_is_replaced_anywhere_in_text() {
        let env = Env::from_vars([("PROJECT_ID", "acme")]);
        let content = "spring.cloud.gcp.project-id=${PROJECT_ID}\n\
                       app.banner=Running in ${PROJECT_ID} / ${PROJECT_ID}\n";
        let resolution = resolve_str(content, SENSITIVE_PROPERTIES, &env);
        assert_eq!(
            resolution.content,
            "spring.cloud.gcp.project-id=acme\napp.banner=Running in acme / acme\n"
        );
    }

    #[test]
    fn value_with_special_characters_inserted_literally() {
        let env = Env::from_vars([("JDBC_URL", r"jdbc:pg://h/db?a=$1&b=\d+${X}")]);
        let resolution = resolve_str(
            "spring.datasource.url=${JDBC_URL}\n",
            SENSITIVE_PROPERTIES,
            &env,
        );
        assert_eq!(
            resolution.content,
            "spring.datasource.url=jdbc:pg://h/db?a=$1&b=\\d+${X}\n"
        );
    }

    #[test]
    fn all_placeholders_resolved() {
        let env = Env::from_vars(
            SENSITIVE_PROPERTIES
                .iter()
                .map(|p| (p.env_var, format!("value-of-{}", p.env_var))),
        );
        let content: String = SENSITIVE_PROPERTIES
            .iter()
            .map(|p| format!("{}\n", p.redacted_line()))
            .collect();
        let resolution = resolve_str(&content, SENSITIVE_PROPERTIES, &env);
        assert!(resolution.missing.is_empty());
        assert!(!resolution.content.contains("${"));
        assert!(
            resolution
                .content
                .contains("spring.datasource.password=value-of-DB_PASSWORD\n")
        );
    }

    #[test]
    fn missing_message_names_placeholder() {
        let password = SENSITIVE_PROPERTIES[2];
        assert_eq!(
            missing_message(&password),
            "Environment variable for ${DB_PASSWORD} not found"
        );
    }

    #[test]
    fn resolve_file_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.properties");
        std::fs::write(&path, "spring.datasource.password=${DB_PASSWORD}\n").unwrap();

        let env = Env::from_vars([("DB_PASSWORD", "hunter2")]);
        let resolution = resolve_file(&path, SENSITIVE_PROPERTIES, &env).unwrap();

        assert_eq!(resolution.content, "spring.datasource.password=hunter2\n");
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "spring.datasource.password=hunter2\n"
        );
    }

    #[test]
    fn resolve_file_missing_path_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_file(&dir.path().join("gone"), SENSITIVE_PROPERTIES, &no_env())
            .unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
    }
}
