//! Error Types
//!
//! `ValidationError` is shown to the user; `StorageError` only ever reaches the log.

use thiserror::Error;

/// Rejection outcome of an add attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input field was the empty string.
    #[error("Todo cannot be empty!")]
    Empty,
}

/// Failures talking to the persisted slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No window, or local storage disabled by the host.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The host rejected a read.
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },

    /// The host rejected a write (quota, private mode, ...).
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        assert_eq!(ValidationError::Empty.to_string(), "Todo cannot be empty!");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Write {
            key: "TODOS".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(err.to_string(), "failed to write key TODOS: QuotaExceededError");
    }
}
