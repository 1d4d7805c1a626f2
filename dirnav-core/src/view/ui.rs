//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Draws the whole screen from `&AppState`: the entry
//! table on top and the status bar on the last row.

use ratatui::prelude::*;
use tracing::trace;

use crate::{
    config::Config,
    fs::dir_scanner::DirectoryLister,
    model::app_state::AppState,
    view::components::{object_table::FileTable, status_bar::StatusBar},
};

pub struct UIRenderer {
    name_width: usize,
    table: FileTable,
    status_bar: StatusBar,
    frames: u64,
}

impl UIRenderer {
    pub fn new(name_width: usize, size_width: u16, human_readable_sizes: bool) -> Self {
        Self {
            name_width,
            table: FileTable::new(size_width, human_readable_sizes),
            status_bar: StatusBar::new(),
            frames: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let size_width = u16::try_from(config.size_column_width).unwrap_or(u16::MAX);
        Self::new(
            config.name_column_width,
            size_width,
            config.human_readable_sizes,
        )
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn render<L: DirectoryLister>(&mut self, frame: &mut Frame<'_>, state: &AppState<L>) {
        self.frames += 1;
        let screen = frame.area();

        // Table gets the viewport measured at startup, status bar the row below.
        let list_height = u16::try_from(state.nav().viewport_height())
            .unwrap_or(u16::MAX)
            .min(screen.height.saturating_sub(1));

        let [list_area, status_area] = Layout::vertical([
            Constraint::Length(list_height),
            Constraint::Length(1),
        ])
        .areas(screen);

        let rows = state.visible_window(self.name_width);
        trace!(frame = self.frames, rows = rows.len(), "render");

        self.table.render(frame, &rows, list_area);
        self.status_bar.render(
            frame,
            state.cwd(),
            state.notification(),
            state.staged(),
            state.nav().show_hidden(),
            status_area,
        );
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
