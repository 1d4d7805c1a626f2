//! src/view/theme.rs
//! ============================================================================
//! # Color Palette
//!
//! Basic ANSI colors only, so the browser looks the same on any terminal
//! with at least 8 colors. Highlighted rows keep their foreground and
//! switch to a cyan background.

use crossterm::style::available_color_count;
use ratatui::style::{Color, Modifier, Style};

use crate::fs::dir_entry::EntryKind;

pub const BACKGROUND: Color = Color::Black;
pub const HIGHLIGHT_BACKGROUND: Color = Color::Cyan;

pub const FILE: Color = Color::White;
pub const DIRECTORY: Color = Color::Blue;
pub const FIFO: Color = Color::Yellow;
pub const SYMLINK: Color = Color::Magenta;
pub const SIZE: Color = Color::Magenta;

pub const ERROR: Color = Color::Red;

/// Minimum color count the browser needs.
pub const REQUIRED_COLORS: u16 = 8;

/// Whether the terminal described by `TERM` / `COLORTERM` can show the
/// palette.
///
/// crossterm reports 8 colors for any terminal it does not recognize, so an
/// unset, empty or `dumb` `TERM` is rejected before asking it.
pub fn colors_supported_for(term: Option<&str>, colorterm: Option<&str>) -> bool {
    if colorterm.is_some_and(|c| !c.is_empty()) {
        return true;
    }

    match term.map(str::trim) {
        None | Some("") | Some("dumb") => false,
        Some(_) => available_color_count() >= REQUIRED_COLORS,
    }
}

/// [`colors_supported_for`] applied to the process environment.
pub fn colors_supported() -> bool {
    let term = std::env::var("TERM").ok();
    let colorterm = std::env::var("COLORTERM").ok();
    colors_supported_for(term.as_deref(), colorterm.as_deref())
}

pub fn header_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

fn background(highlighted: bool) -> Color {
    if highlighted {
        HIGHLIGHT_BACKGROUND
    } else {
        BACKGROUND
    }
}

pub fn name_style(kind: EntryKind, highlighted: bool) -> Style {
    let fg = match kind {
        EntryKind::Directory => DIRECTORY,
        EntryKind::Fifo => FIFO,
        EntryKind::Symlink => SYMLINK,
        EntryKind::RegularFile | EntryKind::Other => FILE,
    };
    Style::default().fg(fg).bg(background(highlighted))
}

pub fn size_style(highlighted: bool) -> Style {
    Style::default().fg(SIZE).bg(background(highlighted))
}

pub fn status_style() -> Style {
    Style::default().fg(Color::White).bg(BACKGROUND)
}

pub fn status_error_style() -> Style {
    Style::default()
        .fg(ERROR)
        .bg(BACKGROUND)
        .add_modifier(Modifier::BOLD)
}
