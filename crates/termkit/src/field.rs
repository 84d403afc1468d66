use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldAction {
    None,
    /// The value changed.
    Edited,
    /// Enter was pressed on the current value.
    Submitted,
}

/// Single-line text input with placeholder, helper/error text, and an
/// optional mask for secrets.
///
/// The caller owns focus and routes keys here while focused. Error text
/// wins over helper text when both are set.
#[derive(Clone, Debug, Default)]
pub struct TextField {
    value: String,
    cursor: usize,
    placeholder: Option<String>,
    label: Option<String>,
    helper: Option<String>,
    error: Option<String>,
    masked: bool,
    disabled: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            cursor: value.chars().count(),
            value,
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> FieldAction {
        if self.disabled {
            return FieldAction::None;
        }
        match key.code {
            KeyCode::Enter => FieldAction::Submitted,
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                FieldAction::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                FieldAction::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                FieldAction::None
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                FieldAction::None
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return FieldAction::None;
                }
                let idx = byte_index(&self.value, self.cursor - 1);
                self.value.remove(idx);
                self.cursor -= 1;
                FieldAction::Edited
            }
            KeyCode::Delete => {
                if self.cursor >= self.value.chars().count() {
                    return FieldAction::None;
                }
                let idx = byte_index(&self.value, self.cursor);
                self.value.remove(idx);
                FieldAction::Edited
            }
            _ => match key.text_char() {
                Some(c) => {
                    let idx = byte_index(&self.value, self.cursor);
                    self.value.insert(idx, c);
                    self.cursor += 1;
                    FieldAction::Edited
                }
                None => FieldAction::None,
            },
        }
    }

    /// Renders label, value row, and helper/error row as the area allows
    /// (one row each).
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut y = area.y;
        if let Some(label) = &self.label {
            if area.height >= 2 {
                render::line(
                    buf,
                    area.x,
                    y,
                    area.width,
                    &render::truncate(label, area.width),
                    theme.text_secondary,
                );
                y += 1;
            }
        }

        let value_style = if self.disabled {
            theme.text_disabled
        } else {
            theme.text_primary
        };
        let shown: String = if self.masked {
            self.value.chars().map(|_| '•').collect()
        } else {
            self.value.clone()
        };
        let chrome = if focused { theme.focus } else { theme.border };
        render::line(buf, area.x, y, 1, "▏", chrome);
        let text_area_x = area.x + 1;
        let text_w = area.width.saturating_sub(1);
        if shown.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                render::line(
                    buf,
                    text_area_x,
                    y,
                    text_w,
                    &render::truncate(placeholder, text_w),
                    theme.text_muted,
                );
            }
        } else {
            render::line(
                buf,
                text_area_x,
                y,
                text_w,
                &render::truncate(&shown, text_w),
                value_style,
            );
        }
        if focused && !self.disabled {
            let cursor_cols: u16 = shown
                .chars()
                .take(self.cursor)
                .map(|c| render::display_width(&c.to_string()))
                .sum();
            if cursor_cols < text_w {
                let x = text_area_x + cursor_cols;
                buf.set_style(
                    Rect::new(x, y, 1, 1),
                    Style::new().add_modifier(Modifier::REVERSED),
                );
            }
        }
        y += 1;

        let note = self.error.as_deref().or(self.helper.as_deref());
        if let Some(note) = note {
            if y < area.bottom() {
                let style = if self.error.is_some() {
                    theme.danger
                } else {
                    theme.text_muted
                };
                render::line(buf, area.x, y, area.width, &render::truncate(note, area.width), style);
            }
        }
    }
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;
    use termkit_core::input::key_char;

    #[test]
    fn typing_and_deleting_track_the_cursor() {
        let mut f = TextField::new();
        for c in "abc".chars() {
            assert_eq!(f.handle_key(&key_char(c)), FieldAction::Edited);
        }
        assert_eq!(f.value(), "abc");
        f.handle_key(&key(KeyCode::Left));
        f.handle_key(&key_char('x'));
        assert_eq!(f.value(), "abxc");
        f.handle_key(&key(KeyCode::Backspace));
        assert_eq!(f.value(), "abc");
    }

    #[test]
    fn multibyte_values_edit_on_char_boundaries() {
        let mut f = TextField::with_value("héllo");
        f.handle_key(&key(KeyCode::Home));
        f.handle_key(&key(KeyCode::Right));
        f.handle_key(&key(KeyCode::Delete));
        assert_eq!(f.value(), "hllo");
    }

    #[test]
    fn disabled_fields_ignore_keys() {
        let mut f = TextField::with_value("x").disabled(true);
        assert_eq!(f.handle_key(&key_char('y')), FieldAction::None);
        assert_eq!(f.value(), "x");
    }
}
