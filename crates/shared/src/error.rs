//! Error types for RANGELAB

use thiserror::Error;

/// Error thrown when a request carries a malformed or missing field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error thrown when a caller's role does not match the role an operation is scoped to
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("operation reserved for role '{required_role}' denied to caller role '{caller_role}'")]
pub struct AccessDeniedError {
    pub caller_role: String,
    pub required_role: String,
}

/// General RANGELAB error type
#[derive(Debug, Error)]
pub enum RangeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    AccessDenied(#[from] AccessDeniedError),

    /// Persistence backend timed out or failed transiently. Safe to retry.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RangeError {
    /// Whether the caller may retry the operation with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RangeError::StoreUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, RangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = ValidationError::new("projectId", "must not be empty");
        assert_eq!(err.to_string(), "invalid projectId: must not be empty");
    }

    #[test]
    fn test_store_unavailable_is_retryable() {
        assert!(RangeError::StoreUnavailable("timeout".to_string()).is_retryable());
        assert!(!RangeError::Validation(ValidationError::new("role", "unknown")).is_retryable());
    }
}
