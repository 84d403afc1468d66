use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termkit_core::render;
use termkit_core::theme::Theme;

use crate::variant::Tone;

/// Determinate progress bar with an optional percentage readout.
#[derive(Clone, Debug, Default)]
pub struct ProgressBar {
    ratio: f64,
    tone: Tone,
    label: Option<String>,
    show_percent: bool,
}

impl ProgressBar {
    /// `ratio` is clamped to `[0, 1]`.
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn show_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    pub fn percent(&self) -> u8 {
        (self.ratio * 100.0).round() as u8
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut x = area.x;
        let mut width = area.width;

        if let Some(label) = &self.label {
            let text = format!("{label} ");
            let w = render::display_width(&text).min(width);
            render::line(buf, x, area.y, w, &text, theme.text_secondary);
            x += w;
            width -= w;
        }
        let readout = if self.show_percent {
            format!(" {:>3}%", self.percent())
        } else {
            String::new()
        };
        let readout_w = render::display_width(&readout);
        let track_w = width.saturating_sub(readout_w);

        let filled = ((track_w as f64) * self.ratio).round() as u16;
        let tone = self.tone.style(theme);
        for dx in 0..track_w {
            let symbol = if dx < filled { "█" } else { "░" };
            let style = if dx < filled { tone } else { theme.text_disabled };
            render::line(buf, x + dx, area.y, 1, symbol, style);
        }
        if readout_w > 0 {
            render::line(buf, x + track_w, area.y, readout_w, &readout, theme.text_muted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(ProgressBar::new(1.7).percent(), 100);
        assert_eq!(ProgressBar::new(-0.3).percent(), 0);
        assert_eq!(ProgressBar::new(0.427).percent(), 43);
    }
}
