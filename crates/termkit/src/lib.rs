//! `termkit` is a design-token-driven component catalog for ratatui:
//! presentational widgets themed from one token table, plus the floating
//! widgets (popover, dropdown, select, combobox, date picker, command
//! palette, modal, toast) built on the shared positioning, dismissal, and
//! list-navigation primitives from [`termkit_core`].
//!
//! ## Design goals
//!
//! - One theme, every widget: components never own styles, they borrow a
//!   [`theme::Theme`] per render, so an [`tokens::Agent`] swap restyles the
//!   whole tree.
//! - One floating brain: every anchored panel resolves its rect through
//!   [`geometry::resolve`] and dismisses through the same outside-
//!   interaction rules, instead of each widget rolling its own.
//! - Event-loop agnostic: widgets consume [`input::InputEvent`] and return
//!   action enums; the app owns focus, timers, and the terminal backend
//!   (the `crossterm` feature ships an adapter).
//!
//! ## Getting started
//!
//! ```no_run
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use termkit::navigator::Choice;
//! use termkit::select::Select;
//! use termkit::theme::Theme;
//!
//! let theme = Theme::default();
//! let mut select = Select::new(vec![
//!     Choice::new("eth", "Ethereum"),
//!     Choice::new("base", "Base"),
//! ]);
//! let viewport = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(viewport);
//! select.render_field(Rect::new(2, 2, 24, 1), &mut buf, &theme, true);
//! select.render_panel(viewport, &mut buf, &theme);
//! ```

pub use termkit_core::floating;
pub use termkit_core::geometry;
pub use termkit_core::input;
pub use termkit_core::navigator;
pub use termkit_core::render;
pub use termkit_core::theme;
pub use termkit_core::tokens;

#[cfg(feature = "crossterm")]
pub use termkit_core::crossterm_input;

pub mod variant;

pub mod accordion;
pub mod alert;
pub mod avatar;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod card;
pub mod chart;
pub mod checkbox;
pub mod divider;
pub mod field;
pub mod list;
pub mod metric;
pub mod pagination;
pub mod progress;
pub mod radio;
pub mod skeleton;
pub mod spinner;
pub mod stepper;
pub mod switch;
pub mod table;
pub mod tabs;
pub mod timeline;

pub mod combobox;
pub mod command_palette;
pub mod date_picker;
pub mod dropdown;
pub mod modal;
pub mod popover;
pub mod select;
pub mod toast;
pub mod tooltip;

mod panel;
