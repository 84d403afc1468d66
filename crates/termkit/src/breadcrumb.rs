use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::render;
use termkit_core::theme::Theme;

/// Path trail. When the full trail does not fit, middle segments collapse
/// to a single ellipsis, keeping the first and the trailing segments.
#[derive(Clone, Debug, Default)]
pub struct Breadcrumb {
    segments: Vec<String>,
    separator: String,
}

impl Breadcrumb {
    pub fn new(segments: Vec<String>) -> Self {
        Self {
            segments,
            separator: " › ".to_string(),
        }
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Segments to draw; `None` stands for the collapsed middle.
    fn visible(&self, max_cols: u16) -> Vec<Option<&str>> {
        let sep_w = render::display_width(&self.separator);
        let full: u16 = self
            .segments
            .iter()
            .map(|s| render::display_width(s))
            .sum::<u16>()
            + sep_w * self.segments.len().saturating_sub(1) as u16;
        if full <= max_cols || self.segments.len() <= 2 {
            return self.segments.iter().map(|s| Some(s.as_str())).collect();
        }

        // Keep the first segment, drop from the front of the middle until
        // the tail fits.
        let first = &self.segments[0];
        for keep_from in 1..self.segments.len() {
            let tail: u16 = self.segments[keep_from..]
                .iter()
                .map(|s| render::display_width(s) + sep_w)
                .sum();
            let width = render::display_width(first) + sep_w + 1 + tail;
            if width <= max_cols {
                let mut out = vec![Some(first.as_str()), None];
                out.extend(self.segments[keep_from..].iter().map(|s| Some(s.as_str())));
                return out;
            }
        }
        let last = self.segments.len() - 1;
        vec![Some(first.as_str()), None, Some(self.segments[last].as_str())]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 || self.segments.is_empty() {
            return;
        }
        let visible = self.visible(area.width);
        let last_index = visible.len() - 1;
        let mut x = area.x;
        for (i, segment) in visible.iter().enumerate() {
            if i > 0 {
                let w = render::display_width(&self.separator);
                render::line(buf, x, area.y, w, &self.separator, theme.text_muted);
                x += w;
            }
            let (text, style) = match segment {
                None => ("…", theme.text_muted),
                Some(s) if i == last_index => (
                    *s,
                    theme.text_primary.patch(Style::new().add_modifier(Modifier::BOLD)),
                ),
                Some(s) => (*s, theme.text_secondary),
            };
            let w = render::display_width(text).min(area.right().saturating_sub(x));
            render::line(buf, x, area.y, w, text, style);
            x += w;
            if x >= area.right() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumbs() -> Breadcrumb {
        Breadcrumb::new(vec![
            "home".into(),
            "wallets".into(),
            "ethereum".into(),
            "transactions".into(),
        ])
    }

    #[test]
    fn everything_shows_when_it_fits() {
        assert_eq!(crumbs().visible(80).iter().filter(|s| s.is_none()).count(), 0);
    }

    #[test]
    fn middle_collapses_under_pressure() {
        let b = crumbs();
        let v = b.visible(30);
        assert_eq!(v[0], Some("home"));
        assert!(v.contains(&None));
        assert_eq!(*v.last().unwrap(), Some("transactions"));
    }
}
