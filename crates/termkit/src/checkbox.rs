use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckboxAction {
    None,
    Toggled(bool),
}

#[derive(Clone, Debug, Default)]
pub struct Checkbox {
    label: String,
    checked: bool,
    disabled: bool,
}

impl Checkbox {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> CheckboxAction {
        if self.disabled {
            return CheckboxAction::None;
        }
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.checked = !self.checked;
                CheckboxAction::Toggled(self.checked)
            }
            _ => CheckboxAction::None,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let box_style = if self.disabled {
            theme.text_disabled
        } else if self.checked {
            theme.accent
        } else if focused {
            theme.focus
        } else {
            theme.text_secondary
        };
        let mark = if self.checked { "[✓]" } else { "[ ]" };
        render::line(buf, area.x, area.y, 3, mark, box_style);
        let label_style = if self.disabled {
            theme.text_disabled
        } else {
            theme.text_primary
        };
        let w = area.width.saturating_sub(4);
        render::line(
            buf,
            area.x + 4,
            area.y,
            w,
            &render::truncate(&self.label, w),
            label_style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key_char;

    #[test]
    fn space_toggles_unless_disabled() {
        let mut c = Checkbox::new("Remember me");
        assert_eq!(c.handle_key(&key_char(' ')), CheckboxAction::Toggled(true));
        assert_eq!(c.handle_key(&key_char(' ')), CheckboxAction::Toggled(false));
        let mut d = Checkbox::new("Nope").disabled(true);
        assert_eq!(d.handle_key(&key_char(' ')), CheckboxAction::None);
    }
}
