//! Outside-interaction dismissal for floating panels.
//!
//! Two levels of machinery:
//!
//! - [`OutsideDismiss`] is the single-panel check a widget owns while its
//!   panel is open: pointer-down outside both anchor and panel, or Escape,
//!   means close.
//! - [`FloatingStack`] is the process-wide registry for apps juggling
//!   several panels at once. It replaces scattered per-widget listeners and
//!   resolves nested-panel dismissal in a deterministic,
//!   top-most-opened-first order.
//!
//! Layers must be closed (removed) in lock-step with their panel's open
//! state; a dangling layer would keep answering dismissal queries against
//! stale rects.

use ratatui::layout::Rect;

use crate::input::InputEvent;
use crate::input::KeyCode;

/// One-shot dismissal check for a widget owning a single open panel.
#[derive(Clone, Copy, Debug)]
pub struct OutsideDismiss {
    /// Trigger rect; `None` when the anchor is gone, in which case only the
    /// panel keeps the layer alive.
    pub anchor: Option<Rect>,
    pub panel: Rect,
}

impl OutsideDismiss {
    pub fn new(anchor: Option<Rect>, panel: Rect) -> Self {
        Self { anchor, panel }
    }

    /// True when `event` should close the panel: Escape, or a pointer-down
    /// that hits neither the anchor nor the panel. Fires at most once per
    /// event by construction (the caller closes and stops consulting).
    pub fn should_dismiss(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(k) => k.code == KeyCode::Esc,
            InputEvent::Mouse(m) if m.is_down() => {
                let inside_anchor = self
                    .anchor
                    .is_some_and(|a| contains(a, m.x, m.y));
                !inside_anchor && !contains(self.panel, m.x, m.y)
            }
            InputEvent::Mouse(_) => false,
        }
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.left() && x < rect.right() && y >= rect.top() && y < rect.bottom()
}

/// Handle to an open floating layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayerKind {
    /// Anchored panel: popover, dropdown, tooltip.
    #[default]
    Panel,
    /// Owns the backdrop. A pointer-down that misses the modal dismisses it
    /// and is swallowed; layers beneath never see the event.
    Modal,
}

#[derive(Clone, Copy, Debug)]
struct Layer {
    id: LayerId,
    kind: LayerKind,
    anchor: Option<Rect>,
    panel: Rect,
    priority: u8,
}

/// Registry of currently-open floating layers.
///
/// Insertion order is dismissal order: the most recently opened layer is
/// top-most and is always consulted first, which pins down the interleaving
/// that per-panel listeners leave ambiguous.
#[derive(Debug, Default)]
pub struct FloatingStack {
    layers: Vec<Layer>,
    next_id: u64,
}

impl FloatingStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an open panel and returns its handle. `priority` comes from
    /// the [`crate::tokens::layer`] scale and only orders rendering; it has
    /// no effect on dismissal order.
    pub fn open(
        &mut self,
        kind: LayerKind,
        priority: u8,
        anchor: Option<Rect>,
        panel: Rect,
    ) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push(Layer {
            id,
            kind,
            anchor,
            panel,
            priority,
        });
        id
    }

    /// Refreshes a layer's rects after a relayout. Unknown ids are ignored
    /// (the anchor may have unmounted and closed the layer meanwhile).
    pub fn update(&mut self, id: LayerId, anchor: Option<Rect>, panel: Rect) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.id == id) {
            layer.anchor = anchor;
            layer.panel = panel;
        }
    }

    /// Removes a layer. Closing an already-closed id is a no-op.
    pub fn close(&mut self, id: LayerId) {
        self.layers.retain(|l| l.id != id);
    }

    pub fn is_open(&self, id: LayerId) -> bool {
        self.layers.iter().any(|l| l.id == id)
    }

    pub fn top(&self) -> Option<LayerId> {
        self.layers.last().map(|l| l.id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer ids in render order: stack order refined by priority, stable
    /// for equal priorities.
    pub fn render_order(&self) -> Vec<LayerId> {
        let mut order: Vec<(u8, usize, LayerId)> = self
            .layers
            .iter()
            .enumerate()
            .map(|(i, l)| (l.priority, i, l.id))
            .collect();
        order.sort();
        order.into_iter().map(|(_, _, id)| id).collect()
    }

    /// Resolves a pointer-down at `(x, y)`.
    ///
    /// Walking from the top of the stack, every layer missed by the point is
    /// dismissed; the walk stops at the first layer that contains it. A
    /// modal layer always ends the walk: it either contains the point or is
    /// dismissed while swallowing the event, so nothing beneath a backdrop
    /// reacts. Returns the dismissed ids, top-most first; each id is
    /// reported exactly once and already removed from the stack.
    pub fn on_pointer_down(&mut self, x: u16, y: u16) -> Vec<LayerId> {
        let mut dismissed = Vec::new();
        while let Some(layer) = self.layers.last().copied() {
            let inside = contains(layer.panel, x, y)
                || layer.anchor.is_some_and(|a| contains(a, x, y));
            if inside {
                break;
            }
            self.layers.pop();
            dismissed.push(layer.id);
            if layer.kind == LayerKind::Modal {
                break;
            }
        }
        dismissed
    }

    /// Escape dismisses the top-most layer only.
    pub fn on_escape(&mut self) -> Option<LayerId> {
        let layer = self.layers.pop()?;
        Some(layer.id)
    }

    /// Maps an input event onto the stack. Non-dismissing events return an
    /// empty list.
    pub fn resolve(&mut self, event: &InputEvent) -> Vec<LayerId> {
        match event {
            InputEvent::Key(k) if k.code == KeyCode::Esc => {
                self.on_escape().into_iter().collect()
            }
            InputEvent::Mouse(m) if m.is_down() => self.on_pointer_down(m.x, m.y),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::key;
    use crate::input::KeyCode;
    use crate::input::Modifiers;
    use crate::input::MouseButton;
    use crate::input::MouseEvent;
    use crate::input::MouseKind;
    use crate::tokens::layer;

    fn down(x: u16, y: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            x,
            y,
            kind: MouseKind::Down(MouseButton::Left),
            modifiers: Modifiers::NONE,
        })
    }

    #[test]
    fn dismisses_outside_but_not_inside() {
        let d = OutsideDismiss::new(Some(Rect::new(0, 0, 4, 1)), Rect::new(0, 2, 10, 4));
        assert!(d.should_dismiss(&down(50, 20)));
        assert!(!d.should_dismiss(&down(1, 0)), "anchor hit");
        assert!(!d.should_dismiss(&down(5, 3)), "panel hit");
        assert!(d.should_dismiss(&InputEvent::Key(key(KeyCode::Esc))));
    }

    #[test]
    fn escape_pops_only_the_top_layer() {
        let mut stack = FloatingStack::new();
        let a = stack.open(LayerKind::Panel, layer::POPOVER, None, Rect::new(0, 0, 5, 5));
        let b = stack.open(LayerKind::Panel, layer::POPOVER, None, Rect::new(10, 0, 5, 5));
        assert_eq!(stack.on_escape(), Some(b));
        assert!(stack.is_open(a));
        assert!(!stack.is_open(b));
    }

    #[test]
    fn pointer_walk_stops_at_the_containing_layer() {
        let mut stack = FloatingStack::new();
        let bottom = stack.open(LayerKind::Panel, layer::POPOVER, None, Rect::new(0, 0, 10, 5));
        let mid = stack.open(LayerKind::Panel, layer::POPOVER, None, Rect::new(20, 0, 10, 5));
        let top = stack.open(LayerKind::Panel, layer::POPOVER, None, Rect::new(40, 0, 10, 5));

        // Click inside the bottom panel: top and mid go, bottom stays.
        let dismissed = stack.on_pointer_down(2, 2);
        assert_eq!(dismissed, vec![top, mid]);
        assert!(stack.is_open(bottom));
    }

    #[test]
    fn modal_swallows_the_backdrop_click() {
        let mut stack = FloatingStack::new();
        let below = stack.open(LayerKind::Panel, layer::POPOVER, None, Rect::new(0, 0, 10, 5));
        let modal = stack.open(LayerKind::Modal, layer::MODAL, None, Rect::new(30, 10, 20, 8));

        // Backdrop click inside the lower panel's rect: the modal is
        // dismissed, the event is swallowed, the panel survives.
        let dismissed = stack.on_pointer_down(2, 2);
        assert_eq!(dismissed, vec![modal]);
        assert!(stack.is_open(below));
    }

    #[test]
    fn anchored_layer_survives_anchor_clicks() {
        let mut stack = FloatingStack::new();
        let id = stack.open(
            LayerKind::Panel,
            layer::DROPDOWN,
            Some(Rect::new(0, 0, 6, 1)),
            Rect::new(0, 2, 12, 6),
        );
        assert!(stack.on_pointer_down(3, 0).is_empty());
        assert_eq!(stack.on_pointer_down(70, 20), vec![id]);
    }

    #[test]
    fn close_is_idempotent() {
        let mut stack = FloatingStack::new();
        let id = stack.open(LayerKind::Panel, layer::POPOVER, None, Rect::new(0, 0, 5, 5));
        stack.close(id);
        stack.close(id);
        assert!(stack.is_empty());
    }

    #[test]
    fn render_order_sorts_by_priority_then_stack() {
        let mut stack = FloatingStack::new();
        let tip = stack.open(LayerKind::Panel, layer::TOOLTIP, None, Rect::new(0, 0, 2, 1));
        let menu = stack.open(LayerKind::Panel, layer::DROPDOWN, None, Rect::new(0, 0, 2, 1));
        let pop = stack.open(LayerKind::Panel, layer::POPOVER, None, Rect::new(0, 0, 2, 1));
        assert_eq!(stack.render_order(), vec![menu, pop, tip]);
    }
}
