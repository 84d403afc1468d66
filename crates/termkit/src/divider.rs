use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DividerOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Rule line, optionally interrupted by a centered label (horizontal only).
#[derive(Clone, Debug, Default)]
pub struct Divider {
    orientation: DividerOrientation,
    label: Option<String>,
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self {
            orientation: DividerOrientation::Vertical,
            label: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.orientation {
            DividerOrientation::Vertical => {
                for y in area.top()..area.bottom() {
                    render::line(buf, area.x, y, 1, "│", theme.border);
                }
            }
            DividerOrientation::Horizontal => {
                let y = area.y;
                for x in area.left()..area.right() {
                    render::line(buf, x, y, 1, "─", theme.border);
                }
                if let Some(label) = &self.label {
                    let text = format!(" {label} ");
                    let w = render::display_width(&text).min(area.width);
                    let x = area.x + (area.width - w) / 2;
                    render::line(buf, x, y, w, &text, theme.text_muted);
                }
            }
        }
    }
}
