#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::{ConfigProvider, DEFAULT_BASE_URL};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "cli")]
pub use cli::{ApiCommand, CliConfig, Command};
pub use toml_config::TomlConfig;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Connection settings of the API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            headers: HashMap::new(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for ApiConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn extra_headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.base_url)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        for (name, value) in &self.headers {
            validation::validate_header("api.headers", name, value)?;
            // The JSON content type is fixed.
            if name.eq_ignore_ascii_case("content-type") {
                return Err(ApiError::ConfigValidationError {
                    field: "api.headers".to_string(),
                    message: "Content-Type cannot be overridden".to_string(),
                });
            }
        }

        Ok(())
    }
}
