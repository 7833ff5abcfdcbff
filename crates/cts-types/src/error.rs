//! Error types for the cts tools.

use thiserror::Error;

/// Errors raised outside the tag index itself.
#[derive(Debug, Error)]
pub enum CtsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No tag file at the given path or any parent directory
    #[error("Tag file not found: {0}")]
    TagFileNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CtsError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = CtsError::TagFileNotFound("tags".to_string());
        assert_eq!(err.to_string(), "Tag file not found: tags");
    }
}
