use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use termkit_core::input::InputEvent;
use termkit_core::input::KeyCode;
use termkit_core::render;
use termkit_core::theme::Theme;

use crate::variant::Tone;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertAction {
    None,
    Dismissed,
}

/// Inline callout with a semantic tone, optional title, and optional
/// dismissal.
#[derive(Clone, Debug, Default)]
pub struct Alert {
    tone: Tone,
    title: Option<String>,
    message: String,
    dismissible: bool,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: Tone::Info,
            ..Self::default()
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Dismissible alerts close on Escape; the caller drops the alert on
    /// [`AlertAction::Dismissed`].
    pub fn handle_event(&self, event: &InputEvent) -> AlertAction {
        if !self.dismissible {
            return AlertAction::None;
        }
        match event {
            InputEvent::Key(k) if k.code == KeyCode::Esc => AlertAction::Dismissed,
            _ => AlertAction::None,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        let tone = self.tone.style(theme);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(tone)
            .render(area, buf);

        let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);
        let mut y = inner.y;
        if let Some(title) = &self.title {
            let line = format!("{} {}", self.tone.glyph(), title);
            render::line(
                buf,
                inner.x,
                y,
                inner.width,
                &render::truncate(&line, inner.width),
                tone.patch(Style::new().add_modifier(Modifier::BOLD)),
            );
            y += 1;
        }
        if y < inner.bottom() {
            let body = if self.title.is_none() {
                format!("{} {}", self.tone.glyph(), self.message)
            } else {
                self.message.clone()
            };
            render::line(
                buf,
                inner.x,
                y,
                inner.width,
                &render::truncate(&body, inner.width),
                theme.text_secondary,
            );
        }
        if self.dismissible {
            render::line(buf, area.right().saturating_sub(3), area.y, 1, "✕", theme.text_muted);
        }
    }
}
