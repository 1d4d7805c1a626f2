//! src/view/components/status_bar.rs
//!
//! Bottom line: working directory and last command outcome on the left,
//! clipboard and hidden-file indicators on the right.

use crate::{
    model::app_state::{Notification, NotificationLevel},
    view::theme,
};
use dirnav_clip::ClipboardItem;
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};
use std::path::Path;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn right_text(staged: Option<&ClipboardItem>, show_hidden: bool) -> String {
        let hidden = if show_hidden { "hidden: on" } else { "hidden: off" };
        match staged {
            Some(item) => format!("[{}] {} | {hidden}", item.operation_tag(), item.display_name()),
            None => hidden.to_string(),
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        cwd: &Path,
        notification: Option<&Notification>,
        staged: Option<&ClipboardItem>,
        show_hidden: bool,
        area: Rect,
    ) {
        let right_text = Self::right_text(staged, show_hidden);
        let right_width = u16::try_from(right_text.chars().count()).unwrap_or(u16::MAX);

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(right_width),
            ])
            .split(area);

        let left = match notification {
            Some(n) => {
                let style = match n.level {
                    NotificationLevel::Info => theme::status_style(),
                    NotificationLevel::Error => theme::status_error_style(),
                };
                Line::from(vec![
                    Span::styled(format!("{} | ", cwd.display()), theme::status_style()),
                    Span::styled(n.message.as_str(), style),
                ])
            }
            None => Line::styled(cwd.display().to_string(), theme::status_style()),
        };

        Paragraph::new(left)
            .style(theme::status_style())
            .render(layout[0], frame.buffer_mut());

        Paragraph::new(right_text)
            .style(theme::status_style())
            .alignment(Alignment::Right)
            .render(layout[1], frame.buffer_mut());
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
