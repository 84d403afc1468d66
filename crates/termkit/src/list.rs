use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Debug)]
pub struct ListItem {
    pub label: String,
    pub description: Option<String>,
    pub glyph: Option<String>,
    pub disabled: bool,
}

impl ListItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            glyph: None,
            disabled: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn rows(&self) -> u16 {
        if self.description.is_some() { 2 } else { 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListAction {
    None,
    Activated(usize),
}

/// Vertical item list with a cursor, scroll-into-view, and Enter
/// activation.
#[derive(Clone, Debug, Default)]
pub struct List {
    items: Vec<ListItem>,
    cursor: usize,
    offset: usize,
}

impl List {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self {
            items,
            cursor: 0,
            offset: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> ListAction {
        if self.items.is_empty() {
            return ListAction::None;
        }
        match key.code {
            KeyCode::Down => {
                self.move_cursor(1);
                ListAction::None
            }
            KeyCode::Up => {
                self.move_cursor(-1);
                ListAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                ListAction::None
            }
            KeyCode::End => {
                self.cursor = self.items.len() - 1;
                ListAction::None
            }
            KeyCode::Enter => {
                if self.items[self.cursor].disabled {
                    ListAction::None
                } else {
                    ListAction::Activated(self.cursor)
                }
            }
            _ => ListAction::None,
        }
    }

    fn move_cursor(&mut self, dir: i64) {
        let mut next = self.cursor as i64 + dir;
        while (0..self.items.len() as i64).contains(&next) {
            if !self.items[next as usize].disabled {
                self.cursor = next as usize;
                return;
            }
            next += dir;
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        // Keep the cursor row on screen, scrolling whole items.
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        loop {
            let visible_rows: u16 = self
                .items
                .iter()
                .skip(self.offset)
                .take(self.cursor + 1 - self.offset)
                .map(ListItem::rows)
                .sum();
            if visible_rows <= area.height || self.offset >= self.cursor {
                break;
            }
            self.offset += 1;
        }

        let mut y = area.y;
        for (i, item) in self.items.iter().enumerate().skip(self.offset) {
            if y >= area.bottom() {
                break;
            }
            let style = if item.disabled {
                theme.text_disabled
            } else if focused && i == self.cursor {
                theme.text_primary.patch(theme.highlight)
            } else {
                theme.text_primary
            };
            let lead = item.glyph.as_deref().unwrap_or(" ");
            let head = format!("{lead} {}", item.label);
            render::line(
                buf,
                area.x,
                y,
                area.width,
                &render::truncate(&head, area.width),
                style,
            );
            y += 1;
            if let Some(description) = &item.description {
                if y < area.bottom() {
                    let w = area.width.saturating_sub(2);
                    let style = if focused && i == self.cursor {
                        theme.text_secondary.patch(theme.highlight)
                    } else {
                        theme.text_muted
                    };
                    render::line(
                        buf,
                        area.x + 2,
                        y,
                        w,
                        &render::truncate(description, w),
                        style,
                    );
                    y += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;

    #[test]
    fn enter_activates_only_enabled_rows() {
        let mut l = List::new(vec![
            ListItem::new("a"),
            ListItem::new("b").disabled(true),
            ListItem::new("c"),
        ]);
        assert_eq!(l.handle_key(&key(KeyCode::Enter)), ListAction::Activated(0));
        l.handle_key(&key(KeyCode::Down));
        assert_eq!(l.cursor(), 2, "disabled row skipped");
        assert_eq!(l.handle_key(&key(KeyCode::Enter)), ListAction::Activated(2));
    }
}
