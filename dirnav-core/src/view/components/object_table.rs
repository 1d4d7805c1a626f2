//! src/view/components/object_table.rs
//!
//! The entry list: a header row, then one row per visible entry with the
//! name on the left and the size right-aligned in its own column.

use crate::{fs::dir_entry::format_size, model::nav_state::VisibleRow, view::theme};
use ratatui::{
    prelude::*,
    widgets::{Cell, Row, Table},
};

pub struct FileTable {
    size_width: u16,
    human_readable_sizes: bool,
}

impl FileTable {
    pub fn new(size_width: u16, human_readable_sizes: bool) -> Self {
        Self {
            size_width,
            human_readable_sizes,
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, rows: &[VisibleRow], area: Rect) {
        let header = Row::new(vec![
            Cell::from("Name"),
            Cell::from(Line::from("Size").right_aligned()),
        ])
        .style(theme::header_style());

        let body: Vec<Row> = rows
            .iter()
            .map(|row| {
                let name_style = theme::name_style(row.kind, row.highlighted);
                let size_style = theme::size_style(row.highlighted);

                let size = format_size(row.size, self.human_readable_sizes);

                Row::new(vec![
                    Cell::from(row.name.as_str()).style(name_style),
                    Cell::from(Line::from(size).right_aligned()).style(size_style),
                ])
                .style(name_style)
            })
            .collect();

        let widths = [Constraint::Fill(1), Constraint::Length(self.size_width)];

        let table = Table::new(body, widths)
            .header(header)
            .column_spacing(1)
            .style(Style::default().bg(theme::BACKGROUND));

        frame.render_widget(table, area);
    }
}
