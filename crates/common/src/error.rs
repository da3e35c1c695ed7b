//! Error types for nsight
//!
//! The matching engine itself is total; these errors come from the edges:
//! reading catalog files and validating their contents.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NsightError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid signature '{name}': {reason}")]
    InvalidSignature { name: String, reason: String },

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl NsightError {
    pub fn invalid_signature(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSignature {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for nsight operations
pub type NsightResult<T> = Result<T, NsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_signature_message_names_signature() {
        let err = NsightError::invalid_signature("FTP", "no required ports");
        assert_eq!(err.to_string(), "Invalid signature 'FTP': no required ports");
    }

    #[test]
    fn io_errors_convert() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: NsightError = io_err.into();
        assert!(matches!(err, NsightError::Io(_)));
    }
}
