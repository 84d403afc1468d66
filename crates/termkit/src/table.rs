use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed column width in cells.
    Fixed(u16),
    /// Shares the space left over after fixed columns.
    #[default]
    Fill,
}

#[derive(Clone, Debug)]
pub struct Column {
    pub title: String,
    pub width: ColumnWidth,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: ColumnWidth::Fill,
        }
    }

    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableAction {
    None,
    Activated(usize),
}

/// Row-oriented data table with a header, a row cursor, and
/// scroll-into-view.
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    cursor: usize,
    offset: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> TableAction {
        if self.rows.is_empty() {
            return TableAction::None;
        }
        let last = self.rows.len() - 1;
        match key.code {
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(last);
                TableAction::None
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                TableAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                TableAction::None
            }
            KeyCode::End => {
                self.cursor = last;
                TableAction::None
            }
            KeyCode::PageDown => {
                self.cursor = (self.cursor + 10).min(last);
                TableAction::None
            }
            KeyCode::PageUp => {
                self.cursor = self.cursor.saturating_sub(10);
                TableAction::None
            }
            KeyCode::Enter => TableAction::Activated(self.cursor),
            _ => TableAction::None,
        }
    }

    fn column_widths(&self, total: u16) -> Vec<u16> {
        let fixed: u16 = self
            .columns
            .iter()
            .map(|c| match c.width {
                ColumnWidth::Fixed(w) => w + 1,
                ColumnWidth::Fill => 0,
            })
            .sum();
        let fills = self
            .columns
            .iter()
            .filter(|c| c.width == ColumnWidth::Fill)
            .count() as u16;
        let leftover = total.saturating_sub(fixed);
        let fill_w = if fills == 0 { 0 } else { (leftover / fills).saturating_sub(1) };
        self.columns
            .iter()
            .map(|c| match c.width {
                ColumnWidth::Fixed(w) => w,
                ColumnWidth::Fill => fill_w,
            })
            .collect()
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.width == 0 || area.height < 2 {
            return;
        }
        let widths = self.column_widths(area.width);

        let mut x = area.x;
        for (col, w) in self.columns.iter().zip(&widths) {
            if *w == 0 {
                continue;
            }
            render::line(
                buf,
                x,
                area.y,
                *w,
                &render::truncate(&col.title, *w),
                theme
                    .text_secondary
                    .patch(Style::new().add_modifier(Modifier::BOLD)),
            );
            x += w + 1;
        }

        let body_h = (area.height - 1) as usize;
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + body_h {
            self.offset = self.cursor + 1 - body_h;
        }

        for (row_i, row) in self.rows.iter().enumerate().skip(self.offset).take(body_h) {
            let y = area.y + 1 + (row_i - self.offset) as u16;
            let style = if focused && row_i == self.cursor {
                theme.text_primary.patch(theme.highlight)
            } else {
                theme.text_primary
            };
            if focused && row_i == self.cursor {
                buf.set_style(Rect::new(area.x, y, area.width, 1), theme.highlight);
            }
            let mut x = area.x;
            for (cell, w) in row.iter().zip(&widths) {
                if *w == 0 {
                    continue;
                }
                render::line(buf, x, y, *w, &render::truncate(cell, *w), style);
                x += w + 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;

    fn table() -> Table {
        Table::new(vec![
            Column::new("Asset").width(ColumnWidth::Fixed(8)),
            Column::new("Price"),
        ])
        .rows((0..20).map(|i| vec![format!("row{i}"), format!("{i}.00")]).collect())
    }

    #[test]
    fn cursor_clamps_and_activates() {
        let mut t = table();
        t.handle_key(&key(KeyCode::End));
        assert_eq!(t.cursor(), 19);
        t.handle_key(&key(KeyCode::Down));
        assert_eq!(t.cursor(), 19);
        assert_eq!(t.handle_key(&key(KeyCode::Enter)), TableAction::Activated(19));
    }

    #[test]
    fn set_rows_clamps_a_stale_cursor() {
        let mut t = table();
        t.handle_key(&key(KeyCode::End));
        t.set_rows(vec![vec!["only".into(), "1".into()]]);
        assert_eq!(t.cursor(), 0);
    }
}
