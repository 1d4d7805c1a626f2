//! ``src/model/app_state.rs``
//! ============================================================================
//! # `AppState`: The Browser's Owned State
//!
//! Working directory, navigation state, clipboard and the listing that was
//! last drawn. One value, passed by `&mut` through the event loop; every
//! transition runs to completion before the next input is read.
//!
//! Commands resolve the selected entry against `entries`, the listing the
//! user is looking at, rather than re-reading the directory. Each command
//! returns its failure; the action dispatcher decides what to do with it.

use std::path::{Path, PathBuf};

use compact_str::{CompactString, format_compact};
use dirnav_clip::{Clipboard, ClipboardItem, ClipboardOperation, StageOutcome};
use tracing::{debug, info, instrument};

use crate::error::AppError;
use crate::fs::dir_entry::DirectoryEntry;
use crate::fs::dir_scanner::DirectoryLister;
use crate::model::nav_state::{NavState, VisibleRow, resolve};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Outcome of the last command, shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: CompactString,
}

impl Notification {
    pub fn info(message: impl Into<CompactString>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<CompactString>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

pub struct AppState<L: DirectoryLister> {
    lister: L,
    cwd: PathBuf,
    nav: NavState,
    clipboard: Clipboard,
    entries: Vec<DirectoryEntry>,
    notification: Option<Notification>,
}

impl<L: DirectoryLister> AppState<L> {
    /// Take the first listing of `cwd`. Failing here is fatal for the
    /// caller: there is nothing to show.
    pub fn new(
        lister: L,
        cwd: PathBuf,
        viewport_height: usize,
        show_hidden: bool,
    ) -> Result<Self, AppError> {
        let entries = lister.list(&cwd, show_hidden)?;
        info!("Opened {} ({} entries)", cwd.display(), entries.len());

        Ok(Self {
            lister,
            cwd,
            nav: NavState::new(viewport_height, show_hidden),
            clipboard: Clipboard::new(),
            entries,
            notification: None,
        })
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn staged(&self) -> Option<&ClipboardItem> {
        self.clipboard.staged()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    pub fn selected(&self) -> Option<&DirectoryEntry> {
        resolve(self.nav.cursor_index(), &self.entries)
    }

    pub fn visible_window(&self, name_width: usize) -> Vec<VisibleRow> {
        self.nav.visible_window(&self.entries, name_width)
    }

    /// Number of normal entries in the working directory, read fresh.
    pub fn entry_count(&self) -> Result<usize, AppError> {
        Ok(self.lister.list(&self.cwd, self.nav.show_hidden())?.len())
    }

    /// Re-enumerate the working directory and pull the cursor back inside
    /// it. On failure the previous listing stays on screen.
    pub fn refresh(&mut self) -> Result<(), AppError> {
        let entries = self.lister.list(&self.cwd, self.nav.show_hidden())?;
        self.entries = entries;
        self.nav.clamp(self.entries.len());
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn move_down(&mut self) -> Result<(), AppError> {
        let count = self.entry_count()?;
        self.nav.move_down(count);
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn move_up(&mut self) {
        self.nav.move_up();
    }

    #[instrument(level = "debug", skip(self))]
    pub fn toggle_hidden(&mut self) {
        self.nav.toggle_hidden();
        debug!("show_hidden = {}", self.nav.show_hidden());
    }

    /// Enter the selected directory (`..` included). Anything that is not
    /// a directory is a no-op.
    #[instrument(level = "debug", skip(self), fields(cwd = %self.cwd.display()))]
    pub fn enter_selected(&mut self) -> Result<(), AppError> {
        let Some(entry) = self.selected() else {
            return Ok(());
        };
        if !entry.is_dir() {
            return Ok(());
        }

        let target = self.cwd.join(entry.name.as_str());
        if !self.lister.readable(&target) {
            return Err(AppError::PermissionDenied(target));
        }

        self.cwd = self.lister.change_directory(&target)?;
        self.nav.reset();
        Ok(())
    }

    /// Remove the selected entry. The parent link is never removed and
    /// non-empty directories are left alone by the lister.
    #[instrument(level = "debug", skip(self), fields(cwd = %self.cwd.display()))]
    pub fn delete_selected(&mut self) -> Result<(), AppError> {
        let Some(entry) = self.selected() else {
            return Ok(());
        };
        if entry.is_parent_link() {
            return Ok(());
        }

        let name = entry.name.clone();
        self.lister.remove(&self.cwd.join(name.as_str()), entry.kind)?;

        info!("Deleted {}", name);
        self.notify(Notification::info(format_compact!("Deleted {name}")));
        Ok(())
    }

    /// Put the selected entry in the clipboard. Only regular files are
    /// taken; any other kind leaves the clipboard as it was.
    #[instrument(level = "debug", skip(self), fields(cwd = %self.cwd.display()))]
    pub fn stage_selected(&mut self, operation: ClipboardOperation) -> Result<(), AppError> {
        let Some(entry) = self.selected() else {
            return Ok(());
        };

        let path = self.cwd.join(entry.name.as_str());
        let kind = entry.kind;
        let outcome = self.clipboard.stage(&path, kind, operation)?;

        let message = match (outcome, self.clipboard.staged()) {
            (StageOutcome::Staged, Some(item)) => Some(format_compact!(
                "{}: {}",
                item.operation_tag(),
                item.display_name()
            )),
            _ => None,
        };
        if let Some(message) = message {
            self.notify(Notification::info(message));
        }
        Ok(())
    }

    /// Paste the staged file into the working directory. The clipboard
    /// keeps its record afterwards.
    #[instrument(level = "debug", skip(self), fields(cwd = %self.cwd.display()))]
    pub fn paste(&mut self) -> Result<(), AppError> {
        let report = self.clipboard.paste_into(&self.cwd)?;

        let name = report
            .destination_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.notify(Notification::info(format_compact!(
            "Pasted {} ({} bytes)",
            name,
            report.bytes_copied
        )));
        if report.source_removed {
            debug!("Cut source removed after paste of {}", name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::dir_entry::EntryKind;
    use crate::fs::dir_scanner::test_support::MemLister;

    fn file(name: &str) -> DirectoryEntry {
        DirectoryEntry::new(name, EntryKind::RegularFile, 3)
    }

    fn dir(name: &str) -> DirectoryEntry {
        DirectoryEntry::new(name, EntryKind::Directory, 0)
    }

    fn sample_lister() -> MemLister {
        MemLister::default()
            .with_dir("/", vec![dir("a")])
            .with_dir("/a", vec![dir("b"), dir("locked")])
            .with_dir(
                "/a/b",
                vec![file("a.txt"), dir("b"), file(".env"), dir("full")],
            )
            .with_dir("/a/b/b", vec![])
            .with_dir("/a/b/full", vec![file("inner")])
            .with_dir("/a/locked", vec![])
            .deny("/a/locked")
    }

    fn state_in(path: &str) -> AppState<MemLister> {
        AppState::new(sample_lister(), PathBuf::from(path), 3, false).unwrap()
    }

    fn names(state: &AppState<MemLister>) -> Vec<&str> {
        state.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_initial_listing() {
        let state = state_in("/a/b");
        assert_eq!(names(&state), vec!["..", "a.txt", "b", "full"]);
        assert_eq!(state.nav().cursor_index(), 0);
        assert_eq!(state.nav().scroll_top(), 1);
        assert!(state.staged().is_none());
    }

    #[test]
    fn test_startup_listing_failure_is_an_error() {
        let result = AppState::new(sample_lister(), PathBuf::from("/missing"), 3, false);
        assert!(matches!(result, Err(AppError::ListingUnavailable { .. })));
    }

    #[test]
    fn test_enter_parent_resets_state() {
        let mut state = state_in("/a/b");
        state.move_down().unwrap();
        state.move_down().unwrap();
        state.move_up();
        state.move_up();
        assert!(state.selected().unwrap().is_parent_link());

        state.move_down().unwrap();
        state.move_up();
        state.enter_selected().unwrap();
        state.refresh().unwrap();

        assert_eq!(state.cwd(), Path::new("/a"));
        assert_eq!(state.nav().cursor_index(), 0);
        assert_eq!(state.nav().scroll_top(), 1);
        assert_eq!(names(&state), vec!["..", "b", "locked"]);
    }

    #[test]
    fn test_enter_directory_and_file() {
        let mut state = state_in("/a/b");
        state.move_down().unwrap();
        state.enter_selected().unwrap();
        assert_eq!(state.cwd(), Path::new("/a/b"));
        assert_eq!(state.nav().cursor_index(), 1);

        state.move_down().unwrap();
        state.enter_selected().unwrap();
        assert_eq!(state.cwd(), Path::new("/a/b/b"));
        assert_eq!(state.nav().cursor_index(), 0);
    }

    #[test]
    fn test_enter_denied_directory_leaves_state() {
        let mut state = state_in("/a");
        state.move_down().unwrap();
        state.move_down().unwrap();
        assert_eq!(state.selected().unwrap().name, "locked");

        let result = state.enter_selected();

        assert!(matches!(result, Err(AppError::PermissionDenied(_))));
        assert_eq!(state.cwd(), Path::new("/a"));
        assert_eq!(state.nav().cursor_index(), 2);
    }

    #[test]
    fn test_enter_parent_of_root_stays_at_root() {
        let mut state = state_in("/");
        state.enter_selected().unwrap();
        assert_eq!(state.cwd(), Path::new("/"));
    }

    #[test]
    fn test_toggle_hidden_shows_dotfiles() {
        let mut state = state_in("/a/b");
        state.move_down().unwrap();
        state.toggle_hidden();
        state.refresh().unwrap();

        assert!(names(&state).contains(&".env"));
        assert_eq!(state.nav().cursor_index(), 0);
        assert_eq!(state.nav().scroll_top(), 1);
    }

    #[test]
    fn test_move_down_uses_fresh_count() {
        let lister = sample_lister();
        let mut state = AppState::new(lister, PathBuf::from("/a/b/b"), 3, false).unwrap();
        assert!(state.move_down().is_ok());
        assert_eq!(state.nav().cursor_index(), 0);

        state.lister.push_entry("/a/b/b", file("new.txt"));
        state.move_down().unwrap();
        assert_eq!(state.nav().cursor_index(), 1);
    }

    #[test]
    fn test_listing_failure_skips_movement() {
        let mut state = state_in("/a/b");
        state.lister.fail_listing("/a/b");

        let result = state.move_down();

        assert!(matches!(result, Err(AppError::ListingUnavailable { .. })));
        assert_eq!(state.nav().cursor_index(), 0);
        assert!(state.refresh().is_err());
        // stale listing stays on screen
        assert_eq!(names(&state).len(), 4);
    }

    #[test]
    fn test_delete_parent_link_is_noop() {
        let mut state = state_in("/a/b");
        state.delete_selected().unwrap();
        state.refresh().unwrap();
        assert_eq!(names(&state), vec!["..", "a.txt", "b", "full"]);
    }

    #[test]
    fn test_delete_directory_only_when_empty() {
        let mut state = state_in("/a/b");
        state.move_down().unwrap();
        state.move_down().unwrap();
        state.move_down().unwrap();
        // "full" is not empty
        assert!(state.delete_selected().is_err());

        state.move_up();
        state.delete_selected().unwrap();
        state.refresh().unwrap();
        assert_eq!(names(&state), vec!["..", "a.txt", "full"]);
        assert_eq!(state.nav().cursor_index(), 2);
    }

    #[test]
    fn test_delete_then_clamp_past_end() {
        let lister = MemLister::default().with_dir("/d", vec![file("x"), file("y")]);
        let mut state = AppState::new(lister, PathBuf::from("/d"), 5, false).unwrap();
        state.move_down().unwrap();
        state.move_down().unwrap();
        assert_eq!(state.selected().unwrap().name, "y");

        state.delete_selected().unwrap();
        state.refresh().unwrap();

        assert_eq!(state.nav().cursor_index(), 1);
        assert_eq!(state.selected().unwrap().name, "x");
    }

    #[test]
    fn test_stage_parent_link_is_ignored() {
        let mut state = state_in("/a/b");
        state.stage_selected(ClipboardOperation::Copy).unwrap();
        assert!(state.staged().is_none());
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_visible_window_follows_cursor() {
        let mut state = state_in("/a/b");
        state.move_down().unwrap();
        state.move_down().unwrap();
        state.refresh().unwrap();

        let window = state.visible_window(30);
        let rows: Vec<_> = window.iter().map(|r| (r.name.as_str(), r.highlighted)).collect();
        assert_eq!(rows, vec![("a.txt", false), ("b", true)]);
    }
}
