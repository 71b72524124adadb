use thiserror::Error;

/// Failure of a custom date/time conversion. Callers treat both variants the
/// same way: no conversion is shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Conversion failed: {message}")]
    InternalFailure { message: String },
}

impl ConversionError {
    pub fn invalid(field: &str, value: &str, reason: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ConversionError::InternalFailure {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ClockError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ClockError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClockError::Conversion(_) => ErrorCategory::Input,
            ClockError::ConfigValidationError { .. }
            | ClockError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ClockError::IoError(_) | ClockError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClockError::Conversion(ConversionError::InvalidInput { .. }) => ErrorSeverity::Medium,
            ClockError::Conversion(ConversionError::InternalFailure { .. }) => ErrorSeverity::High,
            ClockError::ConfigValidationError { .. }
            | ClockError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ClockError::IoError(_) | ClockError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClockError::Conversion(ConversionError::InvalidInput { field, value, .. }) => {
                format!("Could not understand {} '{}'", field, value)
            }
            ClockError::Conversion(ConversionError::InternalFailure { .. }) => {
                "That date and time could not be converted".to_string()
            }
            ClockError::IoError(e) => format!("Could not read a file: {}", e),
            ClockError::SerializationError(e) => format!("Could not produce output: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClockError::Conversion(ConversionError::InvalidInput { .. }) => {
                "Use a date like 2026-01-15 and a 24-hour time like 13:45"
            }
            ClockError::Conversion(ConversionError::InternalFailure { .. }) => {
                "Try a date closer to the present"
            }
            ClockError::IoError(_) => "Check that the config file exists and is readable",
            ClockError::SerializationError(_) => "Retry without --json",
            _ => "Check the [ticker], [display] and [conversion] sections of the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClockError>;
