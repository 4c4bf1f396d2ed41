//! The fixed table of sensitive property keys.

use std::fmt;

/// A property whose value must not stay in the file in cleartext.
///
/// Each record ties the property key to the placeholder written in its
/// place and to the environment variable that later fills the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensitiveProperty {
    /// Dot-separated property key, matched literally at line start.
    pub key: &'static str,
    /// Placeholder token of the form `${NAME}`.
    pub placeholder: &'static str,
    /// Environment variable supplying the real value.
    pub env_var: &'static str,
}

impl SensitiveProperty {
    /// The `key=placeholder` line written by the redaction pass.
    pub fn redacted_line(&self) -> String {
        format!("{}={}", self.key, self.placeholder)
    }
}

impl fmt::Display for SensitiveProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key, self.placeholder)
    }
}

/// Sensitive properties, in the order both passes process them.
pub const SENSITIVE_PROPERTIES: &[SensitiveProperty] = &[
    SensitiveProperty {
        key: "spring.datasource.url",
        placeholder: "${JDBC_URL}",
        env_var: "JDBC_URL",
    },
    SensitiveProperty {
        key: "spring.datasource.username",
        placeholder: "${DB_USERNAME}",
        env_var: "DB_USERNAME",
    },
    SensitiveProperty {
        key: "spring.datasource.password",
        placeholder: "${DB_PASSWORD}",
        env_var: "DB_PASSWORD",
    },
    SensitiveProperty {
        key: "spring.cloud.gcp.sql.instance-connection-name",
        placeholder: "${GCP_INSTANCE_CONNECTION_NAME}",
        env_var: "GCP_INSTANCE_CONNECTION_NAME",
    },
    SensitiveProperty {
        key: "spring.cloud.gcp.sql.database-name",
        placeholder: "${GCP_DATABASE_NAME}",
        env_var: "GCP_DATABASE_NAME",
    },
    SensitiveProperty {
        key: "spring.cloud.gcp.storage.bucket-name",
        placeholder: "${GCP_BUCKET_NAME}",
        env_var: "GCP_BUCKET_NAME",
    },
    SensitiveProperty {
        key: "spring.cloud.gcp.project-id",
        placeholder: "${PROJECT_ID}",
        env_var: "PROJECT_ID",
    },
];
