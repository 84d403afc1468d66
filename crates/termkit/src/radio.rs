use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Debug)]
pub struct RadioItem {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl RadioItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioAction {
    None,
    /// Selection moved to the item at this index.
    Selected(usize),
}

/// Radio group with parent-owned selection: the group holds all its items
/// and the selected index lives right here, not in shared context.
#[derive(Clone, Debug, Default)]
pub struct RadioGroup {
    items: Vec<RadioItem>,
    selected: Option<usize>,
    cursor: usize,
}

impl RadioGroup {
    pub fn new(items: Vec<RadioItem>) -> Self {
        Self {
            items,
            selected: None,
            cursor: 0,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected.map(|i| self.items[i].value.as_str())
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() && !self.items[index].disabled {
            self.selected = Some(index);
            self.cursor = index;
        }
    }

    /// Arrows move the cursor over enabled items (clamped); Space or Enter
    /// selects the item under the cursor.
    pub fn handle_key(&mut self, key: &KeyEvent) -> RadioAction {
        if self.items.is_empty() {
            return RadioAction::None;
        }
        match key.code {
            KeyCode::Down | KeyCode::Right => {
                self.move_cursor(1);
                RadioAction::None
            }
            KeyCode::Up | KeyCode::Left => {
                self.move_cursor(-1);
                RadioAction::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.items[self.cursor].disabled {
                    RadioAction::None
                } else {
                    self.selected = Some(self.cursor);
                    RadioAction::Selected(self.cursor)
                }
            }
            _ => RadioAction::None,
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

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            let is_selected = self.selected == Some(i);
            let mark = if is_selected { "(•)" } else { "( )" };
            let mark_style = if item.disabled {
                theme.text_disabled
            } else if is_selected {
                theme.accent
            } else if focused && self.cursor == i {
                theme.focus
            } else {
                theme.text_secondary
            };
            render::line(buf, area.x, y, 3, mark, mark_style);
            let label_style = if item.disabled {
                theme.text_disabled
            } else if focused && self.cursor == i {
                theme.text_primary.patch(theme.highlight)
            } else {
                theme.text_primary
            };
            let w = area.width.saturating_sub(4);
            render::line(
                buf,
                area.x + 4,
                y,
                w,
                &render::truncate(&item.label, w),
                label_style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;
    use termkit_core::input::key_char;

    fn group() -> RadioGroup {
        RadioGroup::new(vec![
            RadioItem::new("a", "Alpha"),
            RadioItem::new("b", "Beta").disabled(true),
            RadioItem::new("c", "Gamma"),
        ])
    }

    #[test]
    fn cursor_skips_disabled_items() {
        let mut g = group();
        g.handle_key(&key(KeyCode::Down));
        assert_eq!(g.handle_key(&key_char(' ')), RadioAction::Selected(2));
        assert_eq!(g.selected_value(), Some("c"));
    }

    #[test]
    fn select_refuses_disabled_indices() {
        let mut g = group();
        g.select(1);
        assert_eq!(g.selected(), None);
    }
}
