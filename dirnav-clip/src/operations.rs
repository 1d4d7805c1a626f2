use crate::error::{ClipError, ClipResult};
use crate::item::{ClipboardItem, ClipboardOperation};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A single paste of the staged file into one destination directory.
#[derive(Debug, Clone)]
pub struct PasteOperation {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub operation_type: ClipboardOperation,
}

/// What a successful paste did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteReport {
    pub destination_path: PathBuf,
    pub bytes_copied: u64,
    pub source_removed: bool,
}

impl PasteOperation {
    pub fn new(item: &ClipboardItem, dest_dir: &Path) -> Self {
        Self {
            source_path: item.source_path.clone(),
            destination_path: dest_dir.join(item.file_name.as_str()),
            operation_type: item.operation,
        }
    }

    /// Copies the source byte for byte under the same base name, then
    /// removes the source for a cut.
    ///
    /// The destination is opened with create-new semantics, so an existing
    /// name is never truncated even if it appears between the check and the
    /// open. A destination left half-written by a failed copy is removed.
    pub fn execute(&self) -> ClipResult<PasteReport> {
        let mut source = File::open(&self.source_path)
            .map_err(|e| ClipError::source_unavailable(&self.source_path, &e))?;

        if fs::symlink_metadata(&self.destination_path).is_ok() {
            return Err(ClipError::destination_exists(&self.destination_path));
        }

        let mut destination = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.destination_path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => {
                    ClipError::destination_exists(&self.destination_path)
                }
                _ => ClipError::copy_failed(&self.destination_path, &e),
            })?;

        let bytes_copied = match io::copy(&mut source, &mut destination) {
            Ok(bytes) => bytes,
            Err(e) => {
                drop(destination);
                if let Err(cleanup) = fs::remove_file(&self.destination_path) {
                    warn!(
                        "Failed to remove partial file {}: {}",
                        self.destination_path.display(),
                        cleanup
                    );
                }
                return Err(ClipError::copy_failed(&self.destination_path, &e));
            }
        };

        debug!(
            "Copied {} bytes from {} to {}",
            bytes_copied,
            self.source_path.display(),
            self.destination_path.display()
        );

        let source_removed = match self.operation_type {
            ClipboardOperation::Copy => false,
            ClipboardOperation::Cut => {
                fs::remove_file(&self.source_path)
                    .map_err(|e| ClipError::source_not_removed(&self.source_path, &e))?;
                true
            }
        };

        Ok(PasteReport {
            destination_path: self.destination_path.clone(),
            bytes_copied,
            source_removed,
        })
    }

    pub fn operation_name(&self) -> &'static str {
        match self.operation_type {
            ClipboardOperation::Copy => "Copy",
            ClipboardOperation::Cut => "Cut",
        }
    }
}
