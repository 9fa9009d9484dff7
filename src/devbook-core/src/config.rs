use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::ApiVersion;

pub const DEFAULT_BASE_URL: &str = "https://api.usedevbook.com";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration field: {0}")]
    MissingField(&'static str),

    #[error("invalid configuration field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    #[serde(rename = "apiVersion", default)]
    pub api_version: ApiVersion,
    #[serde(rename = "extensionID", default)]
    pub extension_id: String,
    #[serde(rename = "secretAPIKey", default)]
    pub secret_api_key: String,

    // Overridable for staging and tests
    #[serde(rename = "baseURL", default = "default_base_url")]
    pub base_url: String,

    /// Request timeout handed to the HTTP transport; none by default
    #[serde(rename = "timeoutSecs", default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    pub fn new(extension_id: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            extension_id: extension_id.into(),
            secret_api_key: secret_api_key.into(),
            ..Default::default()
        }
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Check that the fields every request depends on are present and safe
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension_id.trim().is_empty() {
            return Err(ConfigError::MissingField("extensionID"));
        }
        if self.secret_api_key.trim().is_empty() {
            return Err(ConfigError::MissingField("secretAPIKey"));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField("baseURL"));
        }
        check_path_segment(&self.extension_id)?;
        Ok(())
    }

    /// Root URL of the extension every operation is scoped to.
    ///
    /// Only meaningful after `validate()`: the extension ID is inserted as a
    /// single path segment.
    pub fn extension_url(&self) -> String {
        format!(
            "{}/{}/extension/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.extension_id
        )
    }
}

/// The extension ID must stay one path segment, or requests escape the extension
fn check_path_segment(extension_id: &str) -> Result<(), ConfigError> {
    let invalid = |reason| ConfigError::InvalidField {
        field: "extensionID",
        reason,
    };

    let reserved = |c: char| matches!(c, '/' | '\\' | '?' | '#' | '%');
    if extension_id
        .chars()
        .any(|c| reserved(c) || c.is_whitespace() || c.is_control())
    {
        return Err(invalid("must not contain '/', '\\', '?', '#', '%' or whitespace"));
    }
    if extension_id.contains("..") || extension_id == "." {
        return Err(invalid("must not be a relative path segment"));
    }
    Ok(())
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::default(),
            extension_id: String::new(),
            secret_api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

// The key must never reach logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_version", &self.api_version)
            .field("extension_id", &self.extension_id)
            .field("secret_api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
