//! Error types for tb-vulcanize
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FlattenError, FsError};

/// Result type alias for bundling operations
pub type VulcanizeResult<T> = Result<T, VulcanizeError>;

/// Main error type for bundling operations
#[derive(Error, Debug)]
pub enum VulcanizeError {
    /// Entry document does not exist
    #[error("entry document not found: {path}")]
    EntryNotFound { path: PathBuf },

    /// Components root is missing or not a directory
    #[error("components directory not found: {path}")]
    ComponentsDirNotFound { path: PathBuf },

    /// Components root cannot be listed
    #[error("cannot read components directory {path}: {source}")]
    ComponentsDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Components root is absolute or climbs out of the project root
    #[error("invalid components_root '{value}': {reason}")]
    InvalidComponentsRoot { value: String, reason: String },

    /// Directory name cannot be used as a component name
    #[error("invalid component name '{name}': {reason}")]
    InvalidComponentName { name: String, reason: String },

    /// Two directories normalize to the same underscore-form name
    #[error("component directories '{first}' and '{second}' both normalize to '{normalized}'")]
    ComponentCollision {
        first: String,
        second: String,
        normalized: String,
    },

    /// Redirect string is not of the form `from|to`
    #[error("invalid redirect '{value}' - expected 'from|to'")]
    InvalidRedirect { value: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Flattening engine failure, passed through unchanged
    #[error(transparent)]
    Flatten(#[from] FlattenError),

    /// File system failure while writing the output
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VulcanizeError {
    /// Configuration errors are raised before the flattening engine runs.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            VulcanizeError::EntryNotFound { .. }
                | VulcanizeError::ComponentsDirNotFound { .. }
                | VulcanizeError::ComponentsDirUnreadable { .. }
                | VulcanizeError::InvalidComponentsRoot { .. }
                | VulcanizeError::InvalidComponentName { .. }
                | VulcanizeError::ComponentCollision { .. }
                | VulcanizeError::InvalidRedirect { .. }
                | VulcanizeError::Config { .. }
        )
    }
}
