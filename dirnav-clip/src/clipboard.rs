use crate::error::{ClipError, ClipResult};
use crate::item::{ClipboardItem, ClipboardOperation, FileType};
use crate::operations::{PasteOperation, PasteReport};
use std::path::Path;
use tracing::{debug, info};

/// Result of a stage request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutcome {
    Staged,
    /// The entry is not a regular file; the clipboard was left alone.
    Ignored,
}

/// Single-slot clipboard. Owned by the browser state, never persisted.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    slot: Option<ClipboardItem>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `path` for a later paste, replacing whatever was staged before.
    ///
    /// Entries that are not regular files are ignored. If the path cannot be
    /// resolved the previous record is kept.
    pub fn stage(
        &mut self,
        path: &Path,
        file_type: FileType,
        operation: ClipboardOperation,
    ) -> ClipResult<StageOutcome> {
        if !file_type.is_stageable() {
            debug!("Ignoring {:?} entry {}", file_type, path.display());
            return Ok(StageOutcome::Ignored);
        }

        let item = ClipboardItem::new(path, operation)?;
        info!(
            "Staged {} for {}",
            item.source_path.display(),
            item.operation_tag()
        );
        self.slot = Some(item);

        Ok(StageOutcome::Staged)
    }

    /// Stage a file for copy
    pub fn copy(&mut self, path: &Path, file_type: FileType) -> ClipResult<StageOutcome> {
        self.stage(path, file_type, ClipboardOperation::Copy)
    }

    /// Stage a file for cut
    pub fn cut(&mut self, path: &Path, file_type: FileType) -> ClipResult<StageOutcome> {
        self.stage(path, file_type, ClipboardOperation::Cut)
    }

    /// Paste the staged file into `dest_dir`.
    ///
    /// The staged record is kept after the paste, successful or not.
    pub fn paste_into(&self, dest_dir: &Path) -> ClipResult<PasteReport> {
        let item = self.slot.as_ref().ok_or(ClipError::Empty)?;
        let operation = PasteOperation::new(item, dest_dir);

        let report = operation.execute()?;
        info!(
            "{} {} -> {}",
            operation.operation_name(),
            operation.source_path.display(),
            report.destination_path.display()
        );

        Ok(report)
    }

    pub fn staged(&self) -> Option<&ClipboardItem> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
