use crate::config::ApiConfig;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// On-disk configuration.
///
/// ```toml
/// [api]
/// base_url = "http://localhost:8080/api/v1"
/// timeout_seconds = 10
///
/// [api.headers]
/// X-Tenant = "${EDNA_TENANT}"
///
/// [logging]
/// verbose = false
/// format = "json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    /// `compact` (default) or `json`.
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ApiError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ApiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// The `[api]` section, which every config file must have.
    pub fn api_config(&self) -> Result<&ApiConfig> {
        self.api.as_ref().ok_or_else(|| ApiError::MissingConfigError {
            field: "api".to_string(),
        })
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.api_config()?.validate()?;

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            let valid_formats = ["compact", "json"];
            if !valid_formats.contains(&format.to_ascii_lowercase().as_str()) {
                return Err(ApiError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[api]
base_url = "https://erp.example.com/api/v1"
timeout_seconds = 5

[api.headers]
X-Tenant = "loja-1"

[logging]
verbose = true
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let api = config.api_config().unwrap();

        assert_eq!(api.base_url(), "https://erp.example.com/api/v1");
        assert_eq!(api.timeout_seconds(), Some(5));
        assert_eq!(api.extra_headers().get("X-Tenant").unwrap(), "loja-1");
        assert!(config.verbose());
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_section_defaults() {
        let config = TomlConfig::from_toml_str("[api]\n").unwrap();
        let api = config.api_config().unwrap();
        assert_eq!(api, &ApiConfig::default());
        assert!(!config.verbose());
        assert!(!config.json_logs());
    }

    #[test]
    fn test_missing_api_section() {
        let config = TomlConfig::from_toml_str("[logging]\nverbose = true\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ApiError::MissingConfigError { .. }));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EDNA_TEST_BASE_URL", "http://10.0.0.2:8080/api/v1");

        let toml_content = r#"
[api]
base_url = "${EDNA_TEST_BASE_URL}"

[api.headers]
X-Token = "${EDNA_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let api = config.api_config().unwrap();
        assert_eq!(api.base_url, "http://10.0.0.2:8080/api/v1");
        assert_eq!(api.headers["X-Token"], "${EDNA_TEST_UNSET_VAR}");

        std::env::remove_var("EDNA_TEST_BASE_URL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[api]
base_url = "invalid-url"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[api]

[logging]
format = "xml"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"http://backend:9000/api/v1\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.api_config().unwrap().base_url,
            "http://backend:9000/api/v1"
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[api\n").unwrap_err();
        assert!(matches!(err, ApiError::ConfigValidationError { .. }));
    }
}
