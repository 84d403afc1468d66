//! Floating-panel placement.
//!
//! [`resolve`] turns an anchor rect, a requested [`Placement`], and a pixel
//! (cell) offset into the panel's top-left corner. Positions are signed: a
//! panel near a screen edge may resolve partially outside the buffer, and
//! dealing with that is the caller's responsibility. Only the tooltip
//! re-clamps after measuring, via [`FloatingPosition::clamp_to`]; nothing
//! here predicts collisions or flips placements.

use std::fmt;

use ratatui::layout::Rect;
use ratatui::layout::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Cross-axis alignment against the anchor. Center when unspecified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

/// The 12-way placement of a floating panel relative to its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub side: Side,
    pub align: Align,
}

impl Default for Placement {
    fn default() -> Self {
        Placement::BOTTOM
    }
}

impl Placement {
    pub const TOP: Placement = Placement::of(Side::Top);
    pub const TOP_START: Placement = Placement::new(Side::Top, Align::Start);
    pub const TOP_END: Placement = Placement::new(Side::Top, Align::End);
    pub const BOTTOM: Placement = Placement::of(Side::Bottom);
    pub const BOTTOM_START: Placement = Placement::new(Side::Bottom, Align::Start);
    pub const BOTTOM_END: Placement = Placement::new(Side::Bottom, Align::End);
    pub const LEFT: Placement = Placement::of(Side::Left);
    pub const LEFT_START: Placement = Placement::new(Side::Left, Align::Start);
    pub const LEFT_END: Placement = Placement::new(Side::Left, Align::End);
    pub const RIGHT: Placement = Placement::of(Side::Right);
    pub const RIGHT_START: Placement = Placement::new(Side::Right, Align::Start);
    pub const RIGHT_END: Placement = Placement::new(Side::Right, Align::End);

    pub const fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }

    /// Center-aligned placement on `side`.
    pub const fn of(side: Side) -> Self {
        Self {
            side,
            align: Align::Center,
        }
    }

    /// Parses `"side"` or `"side-align"` forms, e.g. `"bottom-start"`.
    pub fn parse(s: &str) -> Option<Self> {
        let (side, align) = match s.split_once('-') {
            Some((side, align)) => (side, Some(align)),
            None => (s, None),
        };
        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return None,
        };
        let align = match align {
            None => Align::Center,
            Some("start") => Align::Start,
            Some("end") => Align::End,
            Some(_) => return None,
        };
        Some(Self { side, align })
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.side.as_str())?;
        match self.align {
            Align::Center => Ok(()),
            Align::Start => f.write_str("-start"),
            Align::End => f.write_str("-end"),
        }
    }
}

/// Resolved top-left corner of a floating panel, in buffer coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FloatingPosition {
    pub x: i32,
    pub y: i32,
}

impl FloatingPosition {
    /// The panel rect as it intersects the buffer, or `None` when the panel
    /// resolves entirely off-screen.
    pub fn rect(self, size: Size, viewport: Rect) -> Option<Rect> {
        let full = Rect {
            x: self.x.clamp(0, u16::MAX as i32) as u16,
            y: self.y.clamp(0, u16::MAX as i32) as u16,
            width: clip_span(self.x, size.width),
            height: clip_span(self.y, size.height),
        };
        let out = full.intersection(viewport);
        (out.width > 0 && out.height > 0).then_some(out)
    }

    /// Shifts the panel so it lies inside `viewport`, then intersects with
    /// it. This is the tooltip's second pass: clamp after measuring, rather
    /// than predicting overflow.
    pub fn clamp_to(self, size: Size, viewport: Rect) -> Option<Rect> {
        if viewport.width == 0 || viewport.height == 0 {
            return None;
        }
        let max_x = viewport.right() as i32 - size.width as i32;
        let max_y = viewport.bottom() as i32 - size.height as i32;
        let clamped = FloatingPosition {
            x: self.x.clamp(viewport.x as i32, max_x.max(viewport.x as i32)),
            y: self.y.clamp(viewport.y as i32, max_y.max(viewport.y as i32)),
        };
        clamped.rect(size, viewport)
    }
}

fn clip_span(start: i32, len: u16) -> u16 {
    if start >= 0 {
        len
    } else {
        let hidden = (-start) as u32;
        len.saturating_sub(hidden.min(u16::MAX as u32) as u16)
    }
}

/// Computes where a `panel`-sized floating element sits relative to
/// `anchor`: flush against the requested side, shifted by `offset`, with
/// start/end flush to the anchor's near/far cross-axis edge and center
/// splitting the difference.
pub fn resolve(anchor: Rect, panel: Size, placement: Placement, offset: u16) -> FloatingPosition {
    let ax = anchor.x as i32;
    let ay = anchor.y as i32;
    let aw = anchor.width as i32;
    let ah = anchor.height as i32;
    let pw = panel.width as i32;
    let ph = panel.height as i32;
    let off = offset as i32;

    let cross_x = match placement.align {
        Align::Start => ax,
        Align::Center => ax + (aw - pw) / 2,
        Align::End => ax + aw - pw,
    };
    let cross_y = match placement.align {
        Align::Start => ay,
        Align::Center => ay + (ah - ph) / 2,
        Align::End => ay + ah - ph,
    };

    match placement.side {
        Side::Top => FloatingPosition {
            x: cross_x,
            y: ay - off - ph,
        },
        Side::Bottom => FloatingPosition {
            x: cross_x,
            y: ay + ah + off,
        },
        Side::Left => FloatingPosition {
            x: ax - off - pw,
            y: cross_y,
        },
        Side::Right => FloatingPosition {
            x: ax + aw + off,
            y: cross_y,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Rect {
        Rect::new(10, 10, 8, 2)
    }

    #[test]
    fn bottom_start_sits_flush_below_left_edge() {
        let pos = resolve(anchor(), Size::new(12, 4), Placement::BOTTOM_START, 1);
        assert_eq!(pos.y, anchor().bottom() as i32 + 1);
        assert_eq!(pos.x, anchor().left() as i32);
    }

    #[test]
    fn top_center_is_above_and_horizontally_centered() {
        let pos = resolve(anchor(), Size::new(4, 3), Placement::TOP, 1);
        assert_eq!(pos.y, anchor().top() as i32 - 1 - 3);
        assert_eq!(pos.x, 10 + (8 - 4) / 2);
    }

    #[test]
    fn end_alignment_is_flush_with_the_far_edge() {
        let pos = resolve(anchor(), Size::new(12, 4), Placement::BOTTOM_END, 1);
        assert_eq!(pos.x + 12, anchor().right() as i32);
    }

    #[test]
    fn left_and_right_mirror_each_other() {
        let l = resolve(anchor(), Size::new(6, 2), Placement::LEFT_START, 2);
        let r = resolve(anchor(), Size::new(6, 2), Placement::RIGHT_START, 2);
        assert_eq!(l.x, 10 - 2 - 6);
        assert_eq!(r.x, anchor().right() as i32 + 2);
        assert_eq!(l.y, r.y);
    }

    #[test]
    fn placement_parse_display_round_trip() {
        for s in [
            "top",
            "top-start",
            "top-end",
            "bottom",
            "bottom-start",
            "bottom-end",
            "left",
            "left-start",
            "left-end",
            "right",
            "right-start",
            "right-end",
        ] {
            let p = Placement::parse(s).unwrap();
            assert_eq!(p.to_string(), s);
        }
        assert_eq!(Placement::parse("middle"), None);
        assert_eq!(Placement::parse("top-middle"), None);
    }

    #[test]
    fn off_screen_panel_yields_no_rect() {
        let viewport = Rect::new(0, 0, 80, 24);
        let pos = resolve(
            Rect::new(0, 0, 4, 1),
            Size::new(10, 3),
            Placement::TOP,
            1,
        );
        assert!(pos.y < 0);
        assert_eq!(pos.rect(Size::new(10, 3), viewport), None);
    }

    #[test]
    fn clamp_to_pulls_the_panel_back_inside() {
        let viewport = Rect::new(0, 0, 80, 24);
        let pos = resolve(
            Rect::new(0, 0, 4, 1),
            Size::new(10, 3),
            Placement::TOP,
            1,
        );
        let rect = pos.clamp_to(Size::new(10, 3), viewport).unwrap();
        assert_eq!(rect, Rect::new(0, 0, 10, 3));
    }
}
