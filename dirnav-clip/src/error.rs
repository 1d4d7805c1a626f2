//! Clipboard error types. Every variant is recoverable from the browser's
//! point of view: a failed stage or paste leaves the state as it was.

use compact_str::CompactString;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

pub type ClipResult<T> = Result<T, ClipError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipError {
    #[error("Clipboard is empty")]
    Empty,

    #[error("Invalid file path: {0}")]
    InvalidPath(CompactString),

    #[error("Source file unavailable: {path} ({kind:?})")]
    SourceUnavailable { path: CompactString, kind: ErrorKind },

    #[error("Destination already exists: {path}")]
    DestinationExists { path: CompactString },

    #[error("Failed to copy into {path}: {kind:?}")]
    CopyFailed { path: CompactString, kind: ErrorKind },

    #[error("Copied, but failed to remove source {path}: {kind:?}")]
    SourceNotRemoved { path: CompactString, kind: ErrorKind },
}

impl ClipError {
    #[inline]
    pub fn invalid_path(path: &Path) -> Self {
        Self::InvalidPath(CompactString::from(path.to_string_lossy()))
    }

    #[inline]
    pub fn source_unavailable(path: &Path, io_error: &std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: CompactString::from(path.to_string_lossy()),
            kind: io_error.kind(),
        }
    }

    #[inline]
    pub fn destination_exists(path: &Path) -> Self {
        Self::DestinationExists {
            path: CompactString::from(path.to_string_lossy()),
        }
    }

    #[inline]
    pub fn copy_failed(path: &Path, io_error: &std::io::Error) -> Self {
        Self::CopyFailed {
            path: CompactString::from(path.to_string_lossy()),
            kind: io_error.kind(),
        }
    }

    #[inline]
    pub fn source_not_removed(path: &Path, io_error: &std::io::Error) -> Self {
        Self::SourceNotRemoved {
            path: CompactString::from(path.to_string_lossy()),
            kind: io_error.kind(),
        }
    }
}
