//! `termkit-core` provides the primitives the termkit component catalog is
//! built from: design tokens, theming, an input vocabulary, floating-panel
//! geometry, outside-interaction dismissal, and list navigation.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: everything is a pure state or buffer transform.
//! - One source of truth for floating behavior: the positioning, dismissal,
//!   and keyboard-navigation logic shared by popovers, dropdowns, selects,
//!   comboboxes, date pickers, and the command palette lives here once,
//!   instead of being re-implemented per widget.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `termkit`. Use this crate
//! directly if you are building your own widgets on the same primitives.
//!
//! Useful entry points:
//! - [`tokens`]: the constant color/spacing/motion tables.
//! - [`theme::Theme`]: token-derived style roles, re-tintable per
//!   [`tokens::Agent`].
//! - [`geometry::resolve`]: anchor + placement + offset → panel position.
//! - [`floating::FloatingStack`]: deterministic outside-click/Escape
//!   dismissal across stacked panels.
//! - [`navigator::ListNav`]: the filterable option-list state machine.

pub mod theme;
pub mod tokens;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod floating;
pub mod geometry;
pub mod input;
pub mod navigator;
pub mod render;
