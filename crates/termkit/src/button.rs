use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::component;

use crate::variant::Size;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    None,
    Pressed,
}

/// A focusable push button. The caller owns focus: render with
/// `focused = true` and route keys here while it has focus.
#[derive(Clone, Debug, Default)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: Size,
    disabled: bool,
    loading: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Loading buttons render a spinner frame in place of activation and
    /// refuse presses, like disabled ones.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    /// Rows this button occupies for its size.
    pub fn height(&self) -> u16 {
        match self.size {
            Size::Sm => component::BUTTON_HEIGHT_SM,
            Size::Md => component::BUTTON_HEIGHT_MD,
            Size::Lg => component::BUTTON_HEIGHT_LG,
        }
    }

    /// Columns needed for the label plus horizontal padding.
    pub fn width(&self) -> u16 {
        let pad = match self.size {
            Size::Sm => component::BUTTON_PAD_SM,
            Size::Md => component::BUTTON_PAD_MD,
            Size::Lg => component::BUTTON_PAD_LG,
        };
        render::display_width(&self.label) + pad * 2
    }

    pub fn handle_key(&self, key: &KeyEvent) -> ButtonAction {
        if self.is_disabled() {
            return ButtonAction::None;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => ButtonAction::Pressed,
            _ => ButtonAction::None,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = self.style(theme, focused);
        buf.set_style(area, style);

        let label = if self.loading {
            format!("{} {}", termkit_core::tokens::animation::SPINNER_FRAMES[0], self.label)
        } else {
            self.label.clone()
        };
        let text = render::truncate(&label, area.width);
        let w = render::display_width(&text);
        let x = area.x + (area.width.saturating_sub(w)) / 2;
        let y = area.y + area.height / 2;
        render::line(buf, x, y, area.width, &text, style);
    }

    fn style(&self, theme: &Theme, focused: bool) -> Style {
        if self.is_disabled() {
            return theme.text_disabled;
        }
        let base = match self.variant {
            ButtonVariant::Primary => theme
                .accent
                .patch(Style::new().add_modifier(Modifier::BOLD))
                .patch(Style::new().add_modifier(Modifier::REVERSED)),
            ButtonVariant::Secondary => theme.text_primary.patch(theme.surface_raised),
            ButtonVariant::Outline => theme.accent,
            ButtonVariant::Ghost => theme.text_secondary,
            ButtonVariant::Danger => theme
                .danger
                .patch(Style::new().add_modifier(Modifier::BOLD))
                .patch(Style::new().add_modifier(Modifier::REVERSED)),
        };
        if focused {
            base.patch(Style::new().add_modifier(Modifier::UNDERLINED))
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;
    use termkit_core::input::key_char;

    #[test]
    fn enter_and_space_press_enabled_buttons() {
        let b = Button::new("Save");
        assert_eq!(b.handle_key(&key(KeyCode::Enter)), ButtonAction::Pressed);
        assert_eq!(b.handle_key(&key_char(' ')), ButtonAction::Pressed);
        assert_eq!(b.handle_key(&key_char('x')), ButtonAction::None);
    }

    #[test]
    fn disabled_and_loading_refuse_presses() {
        let b = Button::new("Save").disabled(true);
        assert_eq!(b.handle_key(&key(KeyCode::Enter)), ButtonAction::None);
        let b = Button::new("Save").loading(true);
        assert_eq!(b.handle_key(&key(KeyCode::Enter)), ButtonAction::None);
    }

    #[test]
    fn width_includes_size_padding() {
        let sm = Button::new("Go").size(Size::Sm);
        let lg = Button::new("Go").size(Size::Lg);
        assert!(lg.width() > sm.width());
    }
}
