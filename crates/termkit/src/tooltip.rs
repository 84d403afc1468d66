use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::layout::Size;
use termkit_core::geometry;
use termkit_core::geometry::Placement;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::spacing;

/// One-line hint anchored to a trigger.
///
/// Unlike the other floating widgets, a tooltip clamps itself back into the
/// viewport after measuring its text. This is a second pass, not a
/// predictive collision algorithm.
#[derive(Clone, Debug)]
pub struct Tooltip {
    text: String,
    placement: Placement,
    offset: u16,
    visible: bool,
}

impl Tooltip {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placement: Placement::TOP,
            offset: spacing::FLOATING_OFFSET,
            visible: false,
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn offset(mut self, offset: u16) -> Self {
        self.offset = offset;
        self
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Measured size: the text plus one cell of padding each side.
    pub fn size(&self) -> Size {
        Size::new(render::display_width(&self.text) + 2, 1)
    }

    pub fn render(&self, anchor: Option<Rect>, viewport: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.visible {
            return;
        }
        let Some(anchor) = anchor else {
            return;
        };
        let size = self.size();
        let position = geometry::resolve(anchor, size, self.placement, self.offset);
        let Some(rect) = position.clamp_to(size, viewport) else {
            return;
        };
        let style = theme.text_primary.patch(theme.surface_raised);
        render::line(
            buf,
            rect.x,
            rect.y,
            rect.width,
            &format!(" {} ", self.text),
            style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_back_into_the_viewport_at_the_top_edge() {
        let mut tip = Tooltip::new("balance");
        tip.show();
        let viewport = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(viewport);
        // Anchor on the first row: top placement would resolve above the
        // screen and must be pulled back in.
        tip.render(Some(Rect::new(2, 0, 6, 1)), viewport, &mut buf, &Theme::default());
        assert_eq!(buf[(2, 0)].symbol(), "b");
    }

    #[test]
    fn hidden_or_unanchored_tooltips_draw_nothing() {
        let viewport = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(viewport);
        let mut tip = Tooltip::new("hi");
        tip.render(Some(Rect::new(5, 2, 3, 1)), viewport, &mut buf, &Theme::default());
        tip.show();
        tip.render(None, viewport, &mut buf, &Theme::default());
        assert_eq!(buf, Buffer::empty(viewport));
    }
}
