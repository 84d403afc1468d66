use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::layout::Size;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use termkit_core::floating::OutsideDismiss;
use termkit_core::geometry;
use termkit_core::geometry::Placement;
use termkit_core::input::InputEvent;
use termkit_core::input::KeyCode;
use termkit_core::theme::Theme;
use termkit_core::tokens::spacing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopoverAction {
    None,
    Opened,
    Closed,
}

/// Anchored floating panel.
///
/// The caller records the trigger rect every frame with
/// [`Popover::set_anchor`]; the panel position is recomputed from it on
/// every render, so layout changes are picked up for free and there are no
/// listeners to leak. When the anchor disappears, panel layout is skipped
/// silently.
#[derive(Clone, Debug)]
pub struct Popover {
    open: bool,
    placement: Placement,
    offset: u16,
    close_on_outside: bool,
    close_on_escape: bool,
    anchor: Option<Rect>,
    panel: Option<Rect>,
}

impl Default for Popover {
    fn default() -> Self {
        Self {
            open: false,
            placement: Placement::default(),
            offset: spacing::FLOATING_OFFSET,
            close_on_outside: true,
            close_on_escape: true,
            anchor: None,
            panel: None,
        }
    }
}

impl Popover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn offset(mut self, offset: u16) -> Self {
        self.offset = offset;
        self
    }

    pub fn close_on_outside(mut self, close: bool) -> Self {
        self.close_on_outside = close;
        self
    }

    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.panel = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Trigger rect in buffer coordinates, or `None` while unmounted.
    pub fn set_anchor(&mut self, anchor: Option<Rect>) {
        self.anchor = anchor;
    }

    pub fn anchor(&self) -> Option<Rect> {
        self.anchor
    }

    /// Last laid-out panel rect, present only while open and anchored.
    pub fn panel(&self) -> Option<Rect> {
        self.panel
    }

    /// Click on the anchor toggles; outside interaction closes according to
    /// the configured flags.
    pub fn handle_event(&mut self, event: &InputEvent) -> PopoverAction {
        match event {
            InputEvent::Mouse(m) if m.is_down() => {
                if let Some(anchor) = self.anchor {
                    if anchor.contains(ratatui::layout::Position::new(m.x, m.y)) {
                        self.toggle();
                        return if self.open {
                            PopoverAction::Opened
                        } else {
                            PopoverAction::Closed
                        };
                    }
                }
                if self.open && self.close_on_outside {
                    let watcher = OutsideDismiss::new(self.anchor, self.panel.unwrap_or_default());
                    if watcher.should_dismiss(event) {
                        self.close();
                        return PopoverAction::Closed;
                    }
                }
                PopoverAction::None
            }
            InputEvent::Key(k) if k.code == KeyCode::Esc => {
                if self.open && self.close_on_escape {
                    self.close();
                    PopoverAction::Closed
                } else {
                    PopoverAction::None
                }
            }
            _ => PopoverAction::None,
        }
    }

    /// Lays the panel out against the current anchor and hands the inner
    /// area to `content`. No-op while closed or unanchored.
    pub fn render_panel(
        &mut self,
        size: Size,
        viewport: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        content: impl FnOnce(Rect, &mut Buffer, &Theme),
    ) {
        if !self.open {
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };
        let position = geometry::resolve(anchor, size, self.placement, self.offset);
        let Some(panel) = position.rect(size, viewport) else {
            self.panel = None;
            return;
        };
        self.panel = Some(panel);

        buf.set_style(panel, theme.surface_raised);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_strong)
            .render(panel, buf);
        let inner = Rect::new(
            panel.x + 1,
            panel.y + 1,
            panel.width.saturating_sub(2),
            panel.height.saturating_sub(2),
        );
        if inner.width > 0 && inner.height > 0 {
            content(inner, buf, theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;
    use termkit_core::input::Modifiers;
    use termkit_core::input::MouseButton;
    use termkit_core::input::MouseEvent;
    use termkit_core::input::MouseKind;

    fn down(x: u16, y: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            x,
            y,
            kind: MouseKind::Down(MouseButton::Left),
            modifiers: Modifiers::NONE,
        })
    }

    fn open_popover() -> Popover {
        let mut p = Popover::new();
        p.set_anchor(Some(Rect::new(5, 5, 6, 1)));
        p.open();
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 20));
        p.render_panel(
            Size::new(20, 5),
            Rect::new(0, 0, 60, 20),
            &mut buf,
            &Theme::default(),
            |_, _, _| {},
        );
        p
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let mut p = open_popover();
        let panel = p.panel().unwrap();
        assert_eq!(
            p.handle_event(&down(panel.x + 1, panel.y + 1)),
            PopoverAction::None
        );
        assert!(p.is_open());
        assert_eq!(p.handle_event(&down(55, 18)), PopoverAction::Closed);
        assert!(!p.is_open());
    }

    #[test]
    fn anchor_click_toggles() {
        let mut p = open_popover();
        assert_eq!(p.handle_event(&down(6, 5)), PopoverAction::Closed);
        assert_eq!(p.handle_event(&down(6, 5)), PopoverAction::Opened);
    }

    #[test]
    fn escape_respects_the_flag() {
        let mut p = open_popover();
        let mut locked = open_popover().close_on_escape(false);
        assert_eq!(
            locked.handle_event(&InputEvent::Key(key(KeyCode::Esc))),
            PopoverAction::None
        );
        assert_eq!(
            p.handle_event(&InputEvent::Key(key(KeyCode::Esc))),
            PopoverAction::Closed
        );
    }

    #[test]
    fn unmounted_anchor_skips_layout_silently() {
        let mut p = Popover::new();
        p.open();
        p.set_anchor(None);
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        p.render_panel(
            Size::new(10, 3),
            Rect::new(0, 0, 40, 10),
            &mut buf,
            &Theme::default(),
            |_, _, _| panic!("content must not render without an anchor"),
        );
        assert_eq!(p.panel(), None);
    }
}
