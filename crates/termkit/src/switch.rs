use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchAction {
    None,
    Toggled(bool),
}

/// On/off toggle.
#[derive(Clone, Debug, Default)]
pub struct Switch {
    label: Option<String>,
    on: bool,
    disabled: bool,
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = on;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> SwitchAction {
        if self.disabled {
            return SwitchAction::None;
        }
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.on = !self.on;
                SwitchAction::Toggled(self.on)
            }
            _ => SwitchAction::None,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let track = if self.on { "━━●" } else { "●━━" };
        let style = if self.disabled {
            theme.text_disabled
        } else if self.on {
            theme.accent
        } else {
            theme.text_muted
        };
        let style = if focused {
            style.patch(Style::new().add_modifier(Modifier::BOLD))
        } else {
            style
        };
        render::line(buf, area.x, area.y, 3, track, style);
        if let Some(label) = &self.label {
            let w = area.width.saturating_sub(4);
            render::line(
                buf,
                area.x + 4,
                area.y,
                w,
                &render::truncate(label, w),
                if self.disabled {
                    theme.text_disabled
                } else {
                    theme.text_primary
                },
            );
        }
    }
}
