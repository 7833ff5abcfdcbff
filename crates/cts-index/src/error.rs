//! Tag index error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a tag index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The tag file could not be read
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record line does not follow the tag file format
    #[error("Malformed tag at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl IndexError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        IndexError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
