//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Browser
//!
//! Every per-command failure is an `AppError`. The action dispatcher absorbs
//! them at the command boundary (log + status line); only startup failures
//! reach `main`, through `anyhow`.

use dirnav_clip::ClipError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The directory could not be enumerated. Fatal at startup, a stale
    /// listing afterwards.
    #[error("Listing unavailable for {path:?}: {source}")]
    ListingUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permissions error for file/directory access.
    #[error("Permission denied: {0:?}")]
    PermissionDenied(PathBuf),

    /// Requested file or directory does not exist.
    #[error("File or directory not found: {0:?}")]
    NotFound(PathBuf),

    /// Directory navigation errors
    #[error("Navigation failed: cannot access {path:?}: {reason}")]
    NavigationFailed { path: PathBuf, reason: String },

    /// File operation specific errors
    #[error("File operation '{operation}' failed on {path:?}: {reason}")]
    FileOperationFailed {
        operation: String,
        path: PathBuf,
        reason: String,
    },

    /// Staging or pasting failed.
    #[error("Clipboard: {0}")]
    Clipboard(#[from] ClipError),

    /// Terminal I/O or capability error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a listing failure error
    pub fn listing_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ListingUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a navigation failure error, keeping the common kinds distinct.
    pub fn navigation_failed<P: Into<PathBuf>>(path: P, source: &io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            io::ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::NavigationFailed {
                path,
                reason: source.to_string(),
            },
        }
    }

    /// Create a file operation failure error
    pub fn file_operation_failed<S1, P, S2>(operation: S1, path: P, reason: S2) -> Self
    where
        S1: Into<String>,
        P: Into<PathBuf>,
        S2: Into<String>,
    {
        Self::FileOperationFailed {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }
}
