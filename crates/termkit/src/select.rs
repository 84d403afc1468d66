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
use termkit_core::navigator::Choice;
use termkit_core::navigator::FilterMode;
use termkit_core::navigator::ListNav;
use termkit_core::navigator::NavAction;
use termkit_core::navigator::NavOptions;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::component;
use termkit_core::tokens::spacing;

use crate::panel::render_rows;
use crate::panel::PanelRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAction {
    None,
    Opened,
    Closed,
    /// The committed choice's index into the full option list.
    Changed(usize),
}

/// Closed field + floating option panel. `searchable` selects filter-as-you-
/// type over label and value; otherwise typed characters are ignored.
#[derive(Clone, Debug)]
pub struct Select {
    nav: ListNav,
    value: Option<usize>,
    placeholder: String,
    searchable: bool,
    disabled: bool,
    placement: Placement,
    offset: u16,
    anchor: Option<Rect>,
    panel: Option<Rect>,
    scroll: usize,
}

impl Select {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self::build(choices, false)
    }

    pub fn searchable(choices: Vec<Choice>) -> Self {
        Self::build(choices, true)
    }

    fn build(choices: Vec<Choice>, searchable: bool) -> Self {
        let filter = if searchable {
            FilterMode::LabelAndValue
        } else {
            FilterMode::Label
        };
        Self {
            nav: ListNav::with_options(
                choices,
                NavOptions {
                    filter,
                    ..NavOptions::default()
                },
            ),
            value: None,
            placeholder: "Select option".to_string(),
            searchable,
            disabled: false,
            placement: Placement::BOTTOM_START,
            offset: spacing::FLOATING_OFFSET,
            anchor: None,
            panel: None,
            scroll: 0,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn value(&self) -> Option<&Choice> {
        self.value.and_then(|i| self.nav.items().get(i))
    }

    pub fn set_value(&mut self, index: Option<usize>) {
        self.value = index.filter(|&i| i < self.nav.items().len());
    }

    pub fn set_anchor(&mut self, anchor: Option<Rect>) {
        self.anchor = anchor;
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> SelectAction {
        if self.disabled {
            return SelectAction::None;
        }
        match event {
            InputEvent::Key(k) => match self.nav.handle_key(k, self.searchable) {
                NavAction::Opened => SelectAction::Opened,
                NavAction::Closed => {
                    self.reset_panel();
                    SelectAction::Closed
                }
                NavAction::Committed(i) => {
                    self.value = Some(i);
                    self.reset_panel();
                    SelectAction::Changed(i)
                }
                _ => SelectAction::None,
            },
            InputEvent::Mouse(m) if m.is_down() => {
                if let Some(anchor) = self.anchor {
                    if anchor.contains(ratatui::layout::Position::new(m.x, m.y)) {
                        return if self.is_open() {
                            self.nav.close();
                            self.reset_panel();
                            SelectAction::Closed
                        } else {
                            self.nav.open();
                            SelectAction::Opened
                        };
                    }
                }
                if self.is_open() {
                    let watcher = OutsideDismiss::new(self.anchor, self.panel.unwrap_or_default());
                    if watcher.should_dismiss(event) {
                        self.nav.close();
                        self.reset_panel();
                        return SelectAction::Closed;
                    }
                }
                SelectAction::None
            }
            _ => SelectAction::None,
        }
    }

    fn reset_panel(&mut self) {
        self.panel = None;
        self.scroll = 0;
    }

    /// Draws the closed field row and records it as the anchor.
    pub fn render_field(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        self.anchor = Some(Rect::new(area.x, area.y, area.width, 1));
        let chrome = if self.disabled {
            theme.text_disabled
        } else if focused || self.is_open() {
            theme.focus
        } else {
            theme.border
        };
        render::line(buf, area.x, area.y, 1, "▏", chrome);

        let text_w = area.width.saturating_sub(3);
        let (text, style) = if self.is_open() && self.searchable && !self.nav.query().is_empty() {
            (self.nav.query().to_string(), theme.text_primary)
        } else {
            match self.value() {
                Some(choice) => (choice.label.clone(), theme.text_primary),
                None => (self.placeholder.clone(), theme.text_muted),
            }
        };
        let style = if self.disabled { theme.text_disabled } else { style };
        render::line(
            buf,
            area.x + 1,
            area.y,
            text_w,
            &render::truncate(&text, text_w),
            style,
        );
        let caret = if self.is_open() { "▴" } else { "▾" };
        render::line(buf, area.right() - 1, area.y, 1, caret, chrome);
    }

    fn panel_size(&self) -> Size {
        let anchor_w = self.anchor.map(|a| a.width).unwrap_or(0);
        let rows = (self.nav.filtered_len().max(1) as u16).min(component::PANEL_MAX_ROWS);
        Size::new(anchor_w.max(12), rows + 2)
    }

    pub fn render_panel(&mut self, viewport: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.is_open() {
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };
        let size = self.panel_size();
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

        let rows: Vec<PanelRow<'_>> = if self.nav.filtered_len() == 0 {
            vec![PanelRow::Empty("No options found")]
        } else {
            self.nav
                .filtered()
                .iter()
                .enumerate()
                .map(|(filtered_index, &item_index)| {
                    let choice = &self.nav.items()[item_index];
                    PanelRow::Option {
                        filtered_index,
                        label: &choice.label,
                        disabled: choice.disabled,
                        selected: self.value == Some(item_index),
                        danger: false,
                    }
                })
                .collect()
        };
        render_rows(inner, buf, theme, &rows, self.nav.highlight(), &mut self.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;
    use termkit_core::input::key_char;
    use termkit_core::input::KeyCode;

    fn coins() -> Vec<Choice> {
        vec![
            Choice::new("eth", "Ethereum"),
            Choice::new("base", "Base"),
            Choice::new("sol", "Solana"),
        ]
    }

    #[test]
    fn commit_updates_the_value() {
        let mut s = Select::new(coins());
        s.handle_event(&InputEvent::Key(key(KeyCode::Enter)));
        s.handle_event(&InputEvent::Key(key(KeyCode::Down)));
        s.handle_event(&InputEvent::Key(key(KeyCode::Down)));
        assert_eq!(
            s.handle_event(&InputEvent::Key(key(KeyCode::Enter))),
            SelectAction::Changed(1)
        );
        assert_eq!(s.value().unwrap().value, "base");
        assert!(!s.is_open());
    }

    #[test]
    fn searchable_select_filters_by_value_too() {
        let mut s = Select::searchable(coins());
        s.handle_event(&InputEvent::Key(key(KeyCode::Enter)));
        for c in "sol".chars() {
            s.handle_event(&InputEvent::Key(key_char(c)));
        }
        s.handle_event(&InputEvent::Key(key(KeyCode::Down)));
        assert_eq!(
            s.handle_event(&InputEvent::Key(key(KeyCode::Enter))),
            SelectAction::Changed(2)
        );
    }

    #[test]
    fn plain_select_ignores_typed_characters() {
        let mut s = Select::new(coins());
        s.handle_event(&InputEvent::Key(key(KeyCode::Enter)));
        for c in "sol".chars() {
            s.handle_event(&InputEvent::Key(key_char(c)));
        }
        assert_eq!(s.nav.filtered_len(), 3);
    }

    #[test]
    fn disabled_select_is_inert() {
        let mut s = Select::new(coins()).disabled(true);
        assert_eq!(
            s.handle_event(&InputEvent::Key(key(KeyCode::Enter))),
            SelectAction::None
        );
        assert!(!s.is_open());
    }
}
