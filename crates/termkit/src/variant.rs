//! Prop enums shared across the catalog.

use ratatui::style::Style;
use termkit_core::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Semantic tone used by badges, alerts, toasts, and progress indicators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    pub fn style(self, theme: &Theme) -> Style {
        match self {
            Tone::Neutral => theme.text_secondary,
            Tone::Success => theme.success,
            Tone::Warning => theme.warning,
            Tone::Danger => theme.danger,
            Tone::Info => theme.info,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Tone::Neutral => "•",
            Tone::Success => "✓",
            Tone::Warning => "▲",
            Tone::Danger => "✗",
            Tone::Info => "ℹ",
        }
    }
}
