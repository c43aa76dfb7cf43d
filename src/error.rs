//! Error types for the release version synchronizer.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for manifest patching operations.
#[derive(Error, Debug)]
pub enum ReleaseError {
    // File system errors
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Manifest content errors
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No string \"version\" field found in {0}")]
    MissingVersionField(PathBuf),

    #[error("JSON serialization error: {0}")]
    JsonSerializeError(#[from] serde_json::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// Result type alias using ReleaseError
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an I/O error tagged with the file it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a JSON parse error tagged with the offending file
    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a missing version field error
    pub fn missing_version(path: impl AsRef<Path>) -> Self {
        Self::MissingVersionField(path.as_ref().to_path_buf())
    }
}
