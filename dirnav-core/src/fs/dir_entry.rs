//! `src/fs/dir_entry.rs`
//! ============================================================
//! One row of a directory listing. Rebuilt on every listing, never cached.

use bytesize::ByteSize;
use compact_str::CompactString;

pub use dirnav_clip::FileType as EntryKind;

/// Name of the parent-directory entry. Always present in a listing.
pub const PARENT_NAME: &str = "..";

/// Name of the self-reference entry. Never part of a listing.
pub const SELF_NAME: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: CompactString,
    pub kind: EntryKind,
    /// Byte length as seen when the listing was taken; may be stale.
    pub size: u64,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<CompactString>, kind: EntryKind, size: u64) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
        }
    }

    pub fn parent(size: u64) -> Self {
        Self::new(PARENT_NAME, EntryKind::Directory, size)
    }

    #[inline]
    pub fn is_parent_link(&self) -> bool {
        self.name == PARENT_NAME
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Name cut to at most `width` characters.
    pub fn display_name(&self, width: usize) -> CompactString {
        match self.name.char_indices().nth(width) {
            Some((end, _)) => CompactString::from(&self.name[..end]),
            None => self.name.clone(),
        }
    }
}

/// Raw byte count, or `1.2 MiB` style when `human_readable`.
pub fn format_size(size: u64, human_readable: bool) -> String {
    if human_readable {
        ByteSize::b(size).to_string()
    } else {
        size.to_string()
    }
}

/// Whether `name` belongs in a listing: everything but `.`, with `..`
/// always kept and dotfiles only when `show_hidden` is set.
pub fn is_normal_entry(name: &str, show_hidden: bool) -> bool {
    if name == SELF_NAME {
        return false;
    }
    if name == PARENT_NAME {
        return true;
    }
    show_hidden || !name.starts_with('.')
}
