//! ``src/model/nav_state.rs``
//! ============================================================================
//! # `NavState`: Cursor and Scroll Window
//!
//! Pure state: knows nothing about the filesystem. Callers pass in the entry
//! count (or the listing) they just fetched.
//!
//! `cursor_index` is 0-based among the normal entries, `scroll_top` is the
//! 1-based position of the first entry drawn. The viewport includes one
//! header row, so `viewport_height - 1` entries are visible and
//! `scroll_top <= cursor_index + 1 <= scroll_top + viewport_height - 2`
//! holds after every transition.

use compact_str::CompactString;

use crate::fs::dir_entry::{DirectoryEntry, EntryKind};

/// Header row plus at least one entry row.
pub const MIN_VIEWPORT_HEIGHT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    cursor_index: usize,
    scroll_top: usize,
    show_hidden: bool,
    viewport_height: usize,
}

/// One row of the visible window, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// 0-based index among the normal entries.
    pub index: usize,
    pub name: CompactString,
    pub kind: EntryKind,
    pub size: u64,
    pub highlighted: bool,
}

/// Entry at `index` of an already fetched listing.
#[inline]
pub fn resolve(index: usize, listing: &[DirectoryEntry]) -> Option<&DirectoryEntry> {
    listing.get(index)
}

impl NavState {
    pub fn new(viewport_height: usize, show_hidden: bool) -> Self {
        Self {
            cursor_index: 0,
            scroll_top: 1,
            show_hidden,
            viewport_height: viewport_height.max(MIN_VIEWPORT_HEIGHT),
        }
    }

    #[inline]
    pub const fn cursor_index(&self) -> usize {
        self.cursor_index
    }

    #[inline]
    pub const fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    #[inline]
    pub const fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub const fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Entry rows below the header.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.viewport_height - 1
    }

    /// Back to the first entry with the window at the top.
    pub fn reset(&mut self) {
        self.cursor_index = 0;
        self.scroll_top = 1;
    }

    /// Returns whether the cursor moved.
    pub fn move_down(&mut self, entry_count: usize) -> bool {
        if self.cursor_index + 1 >= entry_count {
            return false;
        }

        self.cursor_index += 1;
        if self.cursor_index >= self.scroll_top + self.viewport_height - 2 {
            self.scroll_top += 1;
        }
        true
    }

    /// Returns whether the cursor moved.
    pub fn move_up(&mut self) -> bool {
        if self.cursor_index == 0 {
            return false;
        }

        self.cursor_index -= 1;
        if self.cursor_index + 1 < self.scroll_top && self.scroll_top > 1 {
            self.scroll_top -= 1;
        }
        true
    }

    /// Flip dotfile visibility. The listing order changes, so the cursor
    /// goes back to the top.
    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.reset();
    }

    /// Pull the cursor back inside a listing of `entry_count` entries and
    /// keep it inside the window.
    pub fn clamp(&mut self, entry_count: usize) {
        let last = entry_count.max(1) - 1;
        if self.cursor_index > last {
            self.cursor_index = last;
        }

        let position = self.cursor_index + 1;
        if position < self.scroll_top {
            self.scroll_top = position;
        } else if position > self.scroll_top + self.rows() - 1 {
            self.scroll_top = position + 1 - self.rows();
        }

        // no blank rows at the bottom while entries are scrolled off the top
        let max_top = entry_count.max(1).saturating_sub(self.rows()) + 1;
        self.scroll_top = self.scroll_top.clamp(1, max_top);
    }

    /// Entries at positions `scroll_top ..= scroll_top + viewport_height - 2`,
    /// names cut to `name_width` characters.
    pub fn visible_window(&self, listing: &[DirectoryEntry], name_width: usize) -> Vec<VisibleRow> {
        listing
            .iter()
            .enumerate()
            .skip(self.scroll_top - 1)
            .take(self.rows())
            .map(|(index, entry)| VisibleRow {
                index,
                name: entry.display_name(name_width),
                kind: entry.kind,
                size: entry.size,
                highlighted: index == self.cursor_index,
            })
            .collect()
    }
}
