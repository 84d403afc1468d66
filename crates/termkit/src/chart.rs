use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termkit_core::render;
use termkit_core::theme::Theme;

use crate::variant::Tone;

const BLOCKS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// One-row trend line built from block glyphs.
#[derive(Clone, Debug, Default)]
pub struct Sparkline {
    points: Vec<f64>,
    tone: Tone,
}

impl Sparkline {
    pub fn new(points: Vec<f64>) -> Self {
        Self {
            points,
            tone: Tone::Neutral,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Block level `0..8` for each visible point, normalized over the
    /// min/max of the series. A flat series draws mid-height.
    fn levels(&self, cols: u16) -> Vec<usize> {
        let take = self.points.len().min(cols as usize);
        let tail = &self.points[self.points.len() - take..];
        let min = tail.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = tail.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        tail.iter()
            .map(|v| {
                if max > min {
                    (((v - min) / (max - min)) * 7.0).round() as usize
                } else {
                    3
                }
            })
            .collect()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 || self.points.is_empty() {
            return;
        }
        let style = match self.tone {
            Tone::Neutral => theme.accent,
            tone => tone.style(theme),
        };
        for (dx, level) in self.levels(area.width).into_iter().enumerate() {
            render::line(buf, area.x + dx as u16, area.y, 1, BLOCKS[level], style);
        }
    }
}

#[derive(Clone, Debug)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Horizontal bar chart: one row per datum, bars scaled to the maximum
/// value, labels right-padded to align the tracks.
#[derive(Clone, Debug, Default)]
pub struct BarChart {
    bars: Vec<Bar>,
    show_values: bool,
}

impl BarChart {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self {
            bars,
            show_values: true,
        }
    }

    pub fn show_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || self.bars.is_empty() {
            return;
        }
        let max = self
            .bars
            .iter()
            .map(|b| b.value)
            .fold(f64::NEG_INFINITY, f64::max)
            .max(f64::MIN_POSITIVE);
        let label_w = self
            .bars
            .iter()
            .map(|b| render::display_width(&b.label))
            .max()
            .unwrap_or(0)
            .min(area.width / 3);

        for (i, bar) in self.bars.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                return;
            }
            render::line(
                buf,
                area.x,
                y,
                label_w,
                &render::truncate(&bar.label, label_w),
                theme.text_secondary,
            );
            let track_x = area.x + label_w + 1;
            let value_text = if self.show_values {
                format!(" {:.0}", bar.value)
            } else {
                String::new()
            };
            let value_w = render::display_width(&value_text);
            let track_w = area
                .right()
                .saturating_sub(track_x)
                .saturating_sub(value_w);
            let filled = ((bar.value / max).clamp(0.0, 1.0) * track_w as f64).round() as u16;
            for dx in 0..filled {
                render::line(buf, track_x + dx, y, 1, "█", theme.accent);
            }
            if value_w > 0 {
                render::line(buf, track_x + filled, y, value_w, &value_text, theme.text_muted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparkline_levels_span_the_full_range() {
        let s = Sparkline::new(vec![0.0, 5.0, 10.0]);
        assert_eq!(s.levels(10), vec![0, 4, 7]);
    }

    #[test]
    fn flat_series_draws_mid_height() {
        let s = Sparkline::new(vec![2.0, 2.0, 2.0]);
        assert_eq!(s.levels(10), vec![3, 3, 3]);
    }

    #[test]
    fn sparkline_keeps_the_most_recent_points() {
        let s = Sparkline::new((0..100).map(f64::from).collect());
        let levels = s.levels(4);
        assert_eq!(levels.len(), 4);
        assert_eq!(*levels.last().unwrap(), 7);
    }
}
