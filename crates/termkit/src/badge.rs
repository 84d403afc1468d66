use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::render;
use termkit_core::theme::Theme;

use crate::variant::Tone;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Solid,
    Outline,
    Soft,
}

/// Small status label, optionally led by a dot.
#[derive(Clone, Debug, Default)]
pub struct Badge {
    label: String,
    tone: Tone,
    variant: BadgeVariant,
    dot: bool,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn dot(mut self, dot: bool) -> Self {
        self.dot = dot;
        self
    }

    pub fn width(&self) -> u16 {
        let dot = if self.dot { 2 } else { 0 };
        render::display_width(&self.label) + 2 + dot
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let tone = self.tone.style(theme);
        let style = match self.variant {
            BadgeVariant::Solid => tone.patch(Style::new().add_modifier(Modifier::REVERSED)),
            BadgeVariant::Outline => tone,
            BadgeVariant::Soft => tone.patch(theme.surface_raised),
        };
        let text = if self.dot {
            format!(" • {} ", self.label)
        } else {
            format!(" {} ", self.label)
        };
        render::line(buf, area.x, area.y, area.width, &render::truncate(&text, area.width), style);
    }
}
