use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::render;
use termkit_core::theme::Theme;

use crate::card::Card;
use crate::chart::Sparkline;

/// KPI tile: label, headline value, signed delta, optional sparkline.
#[derive(Clone, Debug, Default)]
pub struct MetricCard {
    label: String,
    value: String,
    delta: Option<f64>,
    spark: Option<Vec<f64>>,
}

impl MetricCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Percentage change shown with an up/down arrow in a semantic color.
    pub fn delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    pub fn spark(mut self, points: Vec<f64>) -> Self {
        self.spark = Some(points);
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let body = Card::new().render(area, buf, theme);
        if body.width == 0 || body.height == 0 {
            return;
        }
        render::line(
            buf,
            body.x,
            body.y,
            body.width,
            &render::truncate(&self.label, body.width),
            theme.text_muted,
        );
        if body.height >= 2 {
            render::line(
                buf,
                body.x,
                body.y + 1,
                body.width,
                &render::truncate(&self.value, body.width),
                theme.text_primary.patch(Style::new().add_modifier(Modifier::BOLD)),
            );
        }
        if body.height >= 3 {
            let mut x = body.x;
            if let Some(delta) = self.delta {
                let (arrow, style) = if delta >= 0.0 {
                    ("▲", theme.success)
                } else {
                    ("▼", theme.danger)
                };
                let text = format!("{arrow} {:.1}%", delta.abs());
                let w = render::display_width(&text).min(body.width);
                render::line(buf, x, body.y + 2, w, &text, style);
                x += w + 1;
            }
            if let Some(points) = &self.spark {
                let w = body.right().saturating_sub(x);
                if w > 0 {
                    Sparkline::new(points.clone())
                        .render(Rect::new(x, body.y + 2, w, 1), buf, theme);
                }
            }
        }
    }
}
