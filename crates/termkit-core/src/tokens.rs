//! Design tokens: the constant tables every widget is themed from.
//!
//! A dark "glass" palette with alpha-on-black values flattened to opaque
//! grays (terminal cells carry no alpha). Spacing and component metrics
//! are expressed in cells.

use ratatui::style::Color;

/// Ratio used to derive default panel heights from widths.
pub const GOLDEN_RATIO: f64 = 1.618;

/// Cosmetic color-variant selector. Has no behavioral effect: an agent only
/// decides which accent pair a [`crate::theme::Theme`] is tinted with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Agent {
    #[default]
    BigSis,
    Bro,
    LilSis,
    Cbo,
}

impl Agent {
    pub const ALL: [Agent; 4] = [Agent::BigSis, Agent::Bro, Agent::LilSis, Agent::Cbo];

    pub const fn primary(self) -> Color {
        match self {
            Agent::BigSis => agents::BIG_SIS,
            Agent::Bro => agents::BRO,
            Agent::LilSis => agents::LIL_SIS,
            Agent::Cbo => agents::CBO,
        }
    }

    pub const fn secondary(self) -> Color {
        match self {
            Agent::BigSis => agents::BIG_SIS_DEEP,
            Agent::Bro => agents::BRO_DEEP,
            Agent::LilSis => agents::LIL_SIS_DEEP,
            Agent::Cbo => agents::CBO_DEEP,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Agent::BigSis => "bigSis",
            Agent::Bro => "bro",
            Agent::LilSis => "lilSis",
            Agent::Cbo => "cbo",
        }
    }
}

/// Agent accent pairs.
pub mod agents {
    use super::Color;

    pub const BIG_SIS: Color = Color::Rgb(0x00, 0xD4, 0xFF);
    pub const BIG_SIS_DEEP: Color = Color::Rgb(0x00, 0x51, 0xD5);
    pub const BRO: Color = Color::Rgb(0xFF, 0x95, 0x00);
    pub const BRO_DEEP: Color = Color::Rgb(0xFF, 0x6B, 0x00);
    pub const LIL_SIS: Color = Color::Rgb(0xD9, 0x46, 0xEF);
    pub const LIL_SIS_DEEP: Color = Color::Rgb(0x7B, 0x2C, 0xBF);
    pub const CBO: Color = Color::Rgb(0x30, 0xD1, 0x58);
    pub const CBO_DEEP: Color = Color::Rgb(0x00, 0xC8, 0x51);
}

/// Backgrounds, text ramp, and borders.
pub mod palette {
    use super::Color;

    pub const BG: Color = Color::Rgb(0x0a, 0x0a, 0x0a);
    pub const BG_RAISED: Color = Color::Rgb(0x1a, 0x1a, 0x1a);
    pub const BG_OVERLAY: Color = Color::Rgb(0x2a, 0x2a, 0x2a);

    // White at 90/70/60/40/30% over BG.
    pub const TEXT: Color = Color::Rgb(0xe6, 0xe6, 0xe6);
    pub const TEXT_SECONDARY: Color = Color::Rgb(0xb3, 0xb3, 0xb3);
    pub const TEXT_TERTIARY: Color = Color::Rgb(0x99, 0x99, 0x99);
    pub const TEXT_MUTED: Color = Color::Rgb(0x66, 0x66, 0x66);
    pub const TEXT_DISABLED: Color = Color::Rgb(0x4d, 0x4d, 0x4d);

    pub const BORDER_FAINT: Color = Color::Rgb(0x2e, 0x2e, 0x2e);
    pub const BORDER: Color = Color::Rgb(0x3d, 0x3d, 0x3d);
    pub const BORDER_STRONG: Color = Color::Rgb(0x52, 0x52, 0x52);
}

/// Semantic status colors, each with a light and a dark companion.
pub mod semantic {
    use super::Color;

    pub const SUCCESS: Color = Color::Rgb(0x10, 0xB9, 0x81);
    pub const SUCCESS_LIGHT: Color = Color::Rgb(0x34, 0xD3, 0x99);
    pub const SUCCESS_DARK: Color = Color::Rgb(0x05, 0x96, 0x69);
    pub const WARNING: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
    pub const WARNING_LIGHT: Color = Color::Rgb(0xFC, 0xD3, 0x4D);
    pub const WARNING_DARK: Color = Color::Rgb(0xD9, 0x77, 0x06);
    pub const ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);
    pub const ERROR_LIGHT: Color = Color::Rgb(0xF8, 0x71, 0x71);
    pub const ERROR_DARK: Color = Color::Rgb(0xDC, 0x26, 0x26);
    pub const INFO: Color = Color::Rgb(0x3B, 0x82, 0xF6);
    pub const INFO_LIGHT: Color = Color::Rgb(0x60, 0xA5, 0xFA);
    pub const INFO_DARK: Color = Color::Rgb(0x25, 0x63, 0xEB);
}

/// Spacing scale in cells, built on a 2-cell base unit.
pub mod spacing {
    pub const BASE: u16 = 2;

    pub const NONE: u16 = 0;
    pub const XS: u16 = 1;
    pub const SM: u16 = BASE;
    pub const MD: u16 = BASE * 2;
    pub const LG: u16 = BASE * 3;
    pub const XL: u16 = BASE * 4;
    pub const XXL: u16 = BASE * 6;

    /// Multiple of the base unit.
    pub const fn harmonic(multiplier: u16) -> u16 {
        BASE * multiplier
    }

    /// Default gap between an anchor and its floating panel.
    pub const FLOATING_OFFSET: u16 = 1;
}

/// Motion constants. Terminal widgets animate by being re-rendered, so these
/// drive frame advancement in `tick`-style methods rather than CSS easings.
pub mod animation {
    use std::time::Duration;

    pub const INSTANT: Duration = Duration::from_millis(140);
    pub const FAST: Duration = Duration::from_millis(210);
    pub const BASE: Duration = Duration::from_millis(280);
    pub const SMOOTH: Duration = Duration::from_millis(350);
    pub const SLOW: Duration = Duration::from_millis(420);
    pub const DELIBERATE: Duration = Duration::from_millis(560);

    pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    pub const SPINNER_INTERVAL: Duration = Duration::from_millis(70);

    pub const SKELETON_FRAMES: &[&str] = &["░", "▒", "▓", "▒"];
    pub const SKELETON_INTERVAL: Duration = BASE;

    /// Default toast lifetime before auto-dismissal.
    pub const TOAST_LIFETIME: Duration = Duration::from_millis(5000);
}

/// Layer priorities (powers of two). Consumed by the floating-layer stack
/// when deciding render order; dismissal order is always stack order.
pub mod layer {
    pub const BASE: u8 = 1;
    pub const DROPDOWN: u8 = 2;
    pub const STICKY: u8 = 4;
    pub const FIXED: u8 = 8;
    pub const MODAL: u8 = 16;
    pub const POPOVER: u8 = 32;
    pub const TOOLTIP: u8 = 64;
    pub const MAX: u8 = 128;
}

/// Per-component metrics in cells.
pub mod component {
    use super::GOLDEN_RATIO;

    pub const BUTTON_HEIGHT_SM: u16 = 1;
    pub const BUTTON_HEIGHT_MD: u16 = 1;
    pub const BUTTON_HEIGHT_LG: u16 = 3;
    pub const BUTTON_PAD_SM: u16 = 1;
    pub const BUTTON_PAD_MD: u16 = 2;
    pub const BUTTON_PAD_LG: u16 = 3;

    pub const FIELD_HEIGHT: u16 = 1;
    pub const FIELD_HEIGHT_BORDERED: u16 = 3;

    pub const CARD_PAD_X: u16 = 2;
    pub const CARD_PAD_Y: u16 = 1;

    pub const MODAL_WIDTH_SM: u16 = 40;
    pub const MODAL_WIDTH_MD: u16 = 56;
    pub const MODAL_WIDTH_LG: u16 = 72;
    pub const MODAL_WIDTH_XL: u16 = 96;

    /// Default modal height for a given width. Halved on top of the golden
    /// ratio because a cell is roughly twice as tall as it is wide.
    pub const fn modal_height(width: u16) -> u16 {
        let h = width as f64 / (GOLDEN_RATIO * 2.0);
        h as u16
    }

    /// Upper bound on rows a dropdown panel uses for options.
    pub const PANEL_MAX_ROWS: u16 = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_round_trip_names() {
        for agent in Agent::ALL {
            assert!(!agent.name().is_empty());
            assert_ne!(agent.primary(), agent.secondary());
        }
    }

    #[test]
    fn harmonic_spacing_scales_from_base() {
        assert_eq!(spacing::harmonic(0), 0);
        assert_eq!(spacing::harmonic(3), 3 * spacing::BASE);
        assert_eq!(spacing::MD, spacing::harmonic(2));
    }

    #[test]
    fn modal_height_tracks_golden_ratio() {
        let h = component::modal_height(component::MODAL_WIDTH_MD);
        assert!(h >= 16 && h <= 18, "unexpected height {h}");
    }
}
