use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::animation;

/// Loading placeholder: shaded bars with a shimmer frame driven by
/// [`Skeleton::tick`]. The last line is drawn short, like a ragged
/// paragraph.
#[derive(Clone, Debug)]
pub struct Skeleton {
    lines: u16,
    elapsed: Duration,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            lines: 3,
            elapsed: Duration::ZERO,
        }
    }
}

impl Skeleton {
    pub fn new(lines: u16) -> Self {
        Self {
            lines,
            elapsed: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.elapsed += elapsed;
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let frames = animation::SKELETON_FRAMES;
        let phase = (self.elapsed.as_millis() / animation::SKELETON_INTERVAL.as_millis()) as usize;
        let symbol = frames[phase % frames.len()];
        for row in 0..self.lines.min(area.height) {
            let width = if row + 1 == self.lines {
                (area.width / 3) * 2
            } else {
                area.width
            };
            let bar = Rect::new(area.x, area.y + row, width, 1);
            render::fill(buf, bar, symbol, theme.text_disabled);
        }
    }
}
