//! ActionDispatcher: applies one `Action` to the browser state.
//!
//! This is the command boundary. A failed command is logged, reported in
//! the status bar and otherwise dropped; the caller only learns whether to
//! keep running. After every command the directory is re-enumerated so the
//! next frame draws what is on disk.

use dirnav_clip::ClipboardOperation;
use tracing::{debug, warn};

use crate::controller::actions::Action;
use crate::error::AppError;
use crate::fs::dir_scanner::DirectoryLister;
use crate::model::app_state::{AppState, Notification};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatcherStats {
    pub total_actions: u64,
    pub failed_actions: u64,
}

#[derive(Debug, Default)]
pub struct ActionDispatcher {
    stats: DispatcherStats,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `action`. Returns `false` if the application should
    /// terminate.
    pub fn handle<L: DirectoryLister>(&mut self, state: &mut AppState<L>, action: Action) -> bool {
        debug!("Dispatching action: {:?}", action);
        self.stats.total_actions += 1;

        state.clear_notification();

        let result: Result<(), AppError> = match action {
            Action::Quit => return false,
            Action::MoveSelectionUp => {
                state.move_up();
                Ok(())
            }
            Action::MoveSelectionDown => state.move_down(),
            Action::EnterSelected => state.enter_selected(),
            Action::Delete => state.delete_selected(),
            Action::Copy => state.stage_selected(ClipboardOperation::Copy),
            Action::Cut => state.stage_selected(ClipboardOperation::Cut),
            Action::Paste => state.paste(),
            Action::ToggleHidden => {
                state.toggle_hidden();
                Ok(())
            }
        };

        if let Err(e) = result {
            self.stats.failed_actions += 1;
            warn!("{:?} failed: {}", action, e);
            state.notify(Notification::error(e.to_string()));
        }

        if let Err(e) = state.refresh() {
            warn!("Keeping stale listing: {}", e);
            state.notify(Notification::error(e.to_string()));
        }

        true
    }

    pub fn get_stats(&self) -> DispatcherStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::dir_entry::{DirectoryEntry, EntryKind};
    use crate::fs::dir_scanner::test_support::MemLister;
    use crate::model::app_state::NotificationLevel;
    use std::path::PathBuf;

    fn state() -> AppState<MemLister> {
        let lister = MemLister::default()
            .with_dir(
                "/w",
                vec![
                    DirectoryEntry::new("a.txt", EntryKind::RegularFile, 1),
                    DirectoryEntry::new("sub", EntryKind::Directory, 0),
                    DirectoryEntry::new("pipe", EntryKind::Fifo, 0),
                ],
            )
            .with_dir("/w/sub", vec![DirectoryEntry::new("x", EntryKind::RegularFile, 0)]);
        AppState::new(lister, PathBuf::from("/w"), 10, false).unwrap()
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut dispatcher = ActionDispatcher::new();
        let mut state = state();
        assert!(!dispatcher.handle(&mut state, Action::Quit));
        assert!(dispatcher.handle(&mut state, Action::MoveSelectionDown));
    }

    #[test]
    fn test_failures_are_absorbed() {
        let mut dispatcher = ActionDispatcher::new();
        let mut state = state();

        // nothing staged
        assert!(dispatcher.handle(&mut state, Action::Paste));

        let stats = dispatcher.get_stats();
        assert_eq!(stats.total_actions, 1);
        assert_eq!(stats.failed_actions, 1);
        assert_eq!(
            state.notification().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
        assert_eq!(state.cwd(), std::path::Path::new("/w"));
    }

    #[test]
    fn test_notification_cleared_by_next_action() {
        let mut dispatcher = ActionDispatcher::new();
        let mut state = state();

        dispatcher.handle(&mut state, Action::Paste);
        assert!(state.notification().is_some());

        dispatcher.handle(&mut state, Action::MoveSelectionDown);
        assert!(state.notification().is_none());
    }

    #[test]
    fn test_navigation_round_trip() {
        let mut dispatcher = ActionDispatcher::new();
        let mut state = state();

        dispatcher.handle(&mut state, Action::MoveSelectionDown);
        dispatcher.handle(&mut state, Action::MoveSelectionDown);
        dispatcher.handle(&mut state, Action::EnterSelected);
        assert_eq!(state.cwd(), std::path::Path::new("/w/sub"));
        assert_eq!(state.entries().len(), 2);

        dispatcher.handle(&mut state, Action::EnterSelected);
        assert_eq!(state.cwd(), std::path::Path::new("/w"));
        assert_eq!(state.nav().cursor_index(), 0);
    }

    #[test]
    fn test_staging_a_fifo_is_silent() {
        let mut dispatcher = ActionDispatcher::new();
        let mut state = state();

        for _ in 0..3 {
            dispatcher.handle(&mut state, Action::MoveSelectionDown);
        }
        assert_eq!(state.selected().unwrap().name, "pipe");

        dispatcher.handle(&mut state, Action::Cut);
        assert!(state.staged().is_none());
        assert!(state.notification().is_none());
        assert_eq!(dispatcher.get_stats().failed_actions, 0);
    }

    #[test]
    fn test_toggle_hidden_through_dispatcher() {
        let mut dispatcher = ActionDispatcher::new();
        let mut state = state();

        dispatcher.handle(&mut state, Action::MoveSelectionDown);
        dispatcher.handle(&mut state, Action::ToggleHidden);

        assert!(state.nav().show_hidden());
        assert_eq!(state.nav().cursor_index(), 0);
        assert_eq!(state.nav().scroll_top(), 1);
    }
}
