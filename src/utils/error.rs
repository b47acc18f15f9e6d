use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObserverError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ObserverError {
    /// Short message for the operator, without the nested source chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ObserverError::CsvError(_) => "The data file could not be read as CSV".to_string(),
            ObserverError::IoError(e) => format!("File system error: {}", e),
            ObserverError::ConfigError { message } => format!("Configuration problem: {}", message),
            ObserverError::ConfigValidationError { field, .. }
            | ObserverError::InvalidConfigValueError { field, .. } => {
                format!("Configuration value '{}' is not usable", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ObserverError::CsvError(_) => {
                "Check that the data file is UTF-8 encoded, comma-separated CSV with a header row"
            }
            ObserverError::IoError(_) => {
                "Check that the report destination exists and is writable"
            }
            ObserverError::ConfigError { .. } | ObserverError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            ObserverError::InvalidConfigValueError { .. } => {
                "Fix the configuration value named above and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ObserverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: ObserverError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, ObserverError::IoError(_)));
        assert!(err.user_friendly_message().contains("denied"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = ObserverError::InvalidConfigValueError {
            field: "report_path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '' for 'report_path': Path cannot be empty"
        );
        assert_eq!(
            err.user_friendly_message(),
            "Configuration value 'report_path' is not usable"
        );
    }
}
