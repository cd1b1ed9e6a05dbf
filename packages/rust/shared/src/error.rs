//! Error types for FilterForge.
//!
//! Library crates use [`FilterForgeError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all FilterForge operations.
#[derive(Debug, thiserror::Error)]
pub enum FilterForgeError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Transport-level error while retrieving a remote file.
    #[error("network error: {0}")]
    Network(String),

    /// A remote file request completed with a non-success status.
    #[error("failed to fetch {name}: HTTP {status}")]
    Fetch { name: String, status: u16 },

    /// A required marker phrase is absent from the base document.
    #[error("marker {marker:?} not found in base file")]
    MarkerNotFound { marker: String },

    /// A merge-level invariant violation (e.g. markers out of order).
    #[error("merge error: {message}")]
    Merge { message: String },

    /// Request validation error (unknown design or filter-block names).
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FilterForgeError>;

impl FilterForgeError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a merge error from any displayable message.
    pub fn merge(msg: impl Into<String>) -> Self {
        Self::Merge {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Create a marker-not-found error for the given marker phrase.
    pub fn marker_not_found(marker: impl Into<String>) -> Self {
        Self::MarkerNotFound {
            marker: marker.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
