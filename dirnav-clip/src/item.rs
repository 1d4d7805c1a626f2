use crate::error::{ClipError, ClipResult};
use compact_str::CompactString;
use std::path::{Path, PathBuf};

/// The staged file: where it lives and what paste should do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    /// Canonical absolute path of the source file.
    pub source_path: PathBuf,
    /// Base name used for the destination file.
    pub file_name: CompactString,
    pub operation: ClipboardOperation,
}

impl ClipboardItem {
    /// Resolves `path` to an absolute, symlink-free path and records its
    /// base name.
    pub fn new(path: &Path, operation: ClipboardOperation) -> ClipResult<Self> {
        let source_path = std::fs::canonicalize(path)
            .map_err(|e| ClipError::source_unavailable(path, &e))?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(CompactString::from)
            .ok_or_else(|| ClipError::invalid_path(path))?;

        Ok(Self {
            source_path,
            file_name,
            operation,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.file_name
    }

    pub fn operation_tag(&self) -> &'static str {
        match self.operation {
            ClipboardOperation::Copy => "copy",
            ClipboardOperation::Cut => "cut",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOperation {
    Copy,
    /// Copy, then remove the source once the copy is complete.
    Cut,
}

/// Kind of a directory entry as reported by the directory listing
/// (symlinks are not followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    RegularFile,
    Directory,
    Fifo,
    Symlink,
    Other,
}

impl FileType {
    pub fn from_std(file_type: std::fs::FileType) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if file_type.is_fifo() {
                return Self::Fifo;
            }
        }

        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::RegularFile
        } else {
            Self::Other
        }
    }

    /// Only regular files can be staged.
    #[inline]
    pub const fn is_stageable(self) -> bool {
        matches!(self, Self::RegularFile)
    }
}
