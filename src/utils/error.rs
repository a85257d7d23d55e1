use thiserror::Error;

/// Failures the client can produce locally.
///
/// HTTP status codes are not part of this enum: a 4xx/5xx answer from the
/// backend is still a successful call and reaches the caller as a response.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

impl ApiError {
    /// Whether the failure happened before any request was sent.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidConfigValueError { .. }
                | ApiError::MissingConfigError { .. }
                | ApiError::ConfigValidationError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::RequestError(e) if e.is_connect() => {
                "Could not connect to the backend".to_string()
            }
            ApiError::RequestError(e) if e.is_timeout() => {
                "The backend did not answer in time".to_string()
            }
            ApiError::RequestError(_) => "The request to the backend failed".to_string(),
            ApiError::IoError(_) => "Could not read a local file".to_string(),
            ApiError::SerializationError(_) => "Invalid JSON".to_string(),
            ApiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            ApiError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
            ApiError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ApiError::RequestError(_) => "Check that the backend is running and reachable",
            ApiError::InvalidConfigValueError { .. } => {
                "Check --base-url or the [api] section of the config file"
            }
            ApiError::MissingConfigError { .. } | ApiError::ConfigValidationError { .. } => {
                "Check the config file against the documented format"
            }
            ApiError::IoError(_) => "Check the file path and its permissions",
            ApiError::SerializationError(_) => "Pass the payload as a valid JSON document",
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
