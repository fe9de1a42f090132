//! Custom error types for the heat-strip application.
//!
//! The strip itself never fails; these errors cover the surrounding
//! application: configuration loading and the terminal front end.

use thiserror::Error;

/// Errors related to application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Errors related to the UI
#[derive(Debug, Error)]
pub enum UiError {
    #[error("Terminal initialization failed: {0}")]
    InitializationError(String),

    #[error("Terminal rendering failed: {0}")]
    RenderError(String),

    #[error("Input handling failed: {0}")]
    InputError(String),
}

/// Application-level errors that can wrap other error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("UI error: {0}")]
    Ui(#[from] UiError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err: AppError = ConfigError::InvalidValue {
            field: "ui.tick_rate_ms".to_string(),
            message: "must be greater than 0".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for ui.tick_rate_ms: must be greater than 0"
        );
    }

    #[test]
    fn test_read_and_serialization_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AppError = ConfigError::from(io).into();
        assert!(matches!(err, AppError::Config(ConfigError::ReadError(_))));
        assert!(err.to_string().starts_with("Configuration error: Failed to read config file"));

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
