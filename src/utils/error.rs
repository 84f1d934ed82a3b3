use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input error at line {line}: {message}")]
    InputError { line: usize, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NameError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NameError::IoError(_) => ErrorCategory::Io,
            NameError::CsvError(_)
            | NameError::SerializationError(_)
            | NameError::InputError { .. } => ErrorCategory::Input,
            NameError::ConfigError { .. }
            | NameError::ConfigValidationError { .. }
            | NameError::InvalidConfigValueError { .. }
            | NameError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 程序結束碼：輸入錯誤 1、設定錯誤 2、系統錯誤 3
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NameError::IoError(_) => "Check that the input file exists and the output directory is writable",
            NameError::CsvError(_) => {
                "Make sure the CSV has a header row with first_name, middle_name and last_name columns"
            }
            NameError::SerializationError(_) => {
                "Make sure the input is a JSON object or an array of objects with string name fields"
            }
            NameError::InputError { .. } => "Fix the reported line; each line must be one JSON object",
            NameError::ConfigError { .. } | NameError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            NameError::InvalidConfigValueError { .. } => "Correct the value of the reported field",
            NameError::MissingConfigError { .. } => "Provide the missing field on the command line or in the config file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NameError::IoError(e) => format!("Could not read or write a file: {}", e),
            NameError::CsvError(e) => format!("The CSV input could not be parsed: {}", e),
            NameError::SerializationError(e) => format!("The JSON input could not be parsed: {}", e),
            NameError::InputError { line, message } => {
                format!("Line {} of the input is invalid: {}", line, message)
            }
            NameError::ConfigError { message } => format!("Configuration problem: {}", message),
            NameError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            NameError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            NameError::MissingConfigError { field } => format!("'{}' is required", field),
        }
    }
}

pub type Result<T> = std::result::Result<T, NameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_critical() {
        let err: NameError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_input_error_message_carries_line() {
        let err = NameError::InputError {
            line: 4,
            message: "expected value".to_string(),
        };
        assert_eq!(err.to_string(), "Input error at line 4: expected value");
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("Line 4"));
    }

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = NameError::MissingConfigError {
            field: "input".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
    }
}
