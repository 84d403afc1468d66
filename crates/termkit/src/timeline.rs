use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termkit_core::render;
use termkit_core::theme::Theme;

use crate::variant::Tone;

#[derive(Clone, Debug)]
pub struct TimelineEntry {
    pub time: String,
    pub text: String,
    pub tone: Tone,
}

impl TimelineEntry {
    pub fn new(time: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            text: text.into(),
            tone: Tone::Neutral,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// Vertical event feed: a glyph rail with timestamped entries.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let time_w = self
            .entries
            .iter()
            .map(|e| render::display_width(&e.time))
            .max()
            .unwrap_or(0);
        for (i, entry) in self.entries.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                return;
            }
            render::line(buf, area.x, y, time_w, &entry.time, theme.text_muted);
            let glyph_x = area.x + time_w + 1;
            render::line(buf, glyph_x, y, 1, entry.tone.glyph(), entry.tone.style(theme));
            let text_x = glyph_x + 2;
            let w = area.right().saturating_sub(text_x);
            render::line(
                buf,
                text_x,
                y,
                w,
                &render::truncate(&entry.text, w),
                theme.text_primary,
            );
        }
    }
}
