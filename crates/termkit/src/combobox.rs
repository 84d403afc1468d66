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
use termkit_core::navigator::ListNav;
use termkit_core::navigator::NavAction;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::component;
use termkit_core::tokens::spacing;

use crate::panel::render_rows;
use crate::panel::PanelRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComboboxAction {
    None,
    Opened,
    Closed,
    /// The committed choice's index into the full option list.
    Changed(usize),
}

/// Text-input trigger whose typed text filters the option list by label.
/// Options sharing a `group` key render under a header row.
#[derive(Clone, Debug)]
pub struct Combobox {
    nav: ListNav,
    value: Option<usize>,
    placeholder: String,
    empty_message: String,
    placement: Placement,
    offset: u16,
    anchor: Option<Rect>,
    panel: Option<Rect>,
    scroll: usize,
}

impl Combobox {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self {
            nav: ListNav::new(choices),
            value: None,
            placeholder: "Select option".to_string(),
            empty_message: "No options found".to_string(),
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

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn value(&self) -> Option<&Choice> {
        self.value.and_then(|i| self.nav.items().get(i))
    }

    pub fn query(&self) -> &str {
        self.nav.query()
    }

    pub fn set_anchor(&mut self, anchor: Option<Rect>) {
        self.anchor = anchor;
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> ComboboxAction {
        match event {
            InputEvent::Key(k) => {
                // Typing while closed opens the panel and starts filtering,
                // the way the input's focus handler does upstream.
                if !self.is_open() {
                    if let Some(c) = k.text_char() {
                        if c != ' ' {
                            self.nav.open();
                            self.nav.push_query(c);
                            return ComboboxAction::Opened;
                        }
                    }
                }
                match self.nav.handle_key(k, true) {
                    NavAction::Opened => ComboboxAction::Opened,
                    NavAction::Closed => {
                        self.reset_panel();
                        ComboboxAction::Closed
                    }
                    NavAction::Committed(i) => {
                        self.value = Some(i);
                        self.reset_panel();
                        ComboboxAction::Changed(i)
                    }
                    _ => ComboboxAction::None,
                }
            }
            InputEvent::Mouse(m) if m.is_down() => {
                if let Some(anchor) = self.anchor {
                    if anchor.contains(ratatui::layout::Position::new(m.x, m.y)) {
                        return if self.is_open() {
                            self.nav.close();
                            self.reset_panel();
                            ComboboxAction::Closed
                        } else {
                            self.nav.open();
                            ComboboxAction::Opened
                        };
                    }
                }
                if self.is_open() {
                    let watcher = OutsideDismiss::new(self.anchor, self.panel.unwrap_or_default());
                    if watcher.should_dismiss(event) {
                        self.nav.close();
                        self.reset_panel();
                        return ComboboxAction::Closed;
                    }
                }
                ComboboxAction::None
            }
            _ => ComboboxAction::None,
        }
    }

    fn reset_panel(&mut self) {
        self.panel = None;
        self.scroll = 0;
    }

    /// Field row: the live query while open, the committed label otherwise.
    pub fn render_field(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        self.anchor = Some(Rect::new(area.x, area.y, area.width, 1));
        let chrome = if focused || self.is_open() {
            theme.focus
        } else {
            theme.border
        };
        render::line(buf, area.x, area.y, 1, "▏", chrome);

        let text_w = area.width.saturating_sub(3);
        let (text, style) = if self.is_open() {
            if self.nav.query().is_empty() {
                (self.placeholder.clone(), theme.text_muted)
            } else {
                (self.nav.query().to_string(), theme.text_primary)
            }
        } else {
            match self.value() {
                Some(choice) => (choice.label.clone(), theme.text_primary),
                None => (self.placeholder.clone(), theme.text_muted),
            }
        };
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

    /// Filtered rows with group headers injected at group boundaries.
    fn rows(&self) -> Vec<PanelRow<'_>> {
        if self.nav.filtered_len() == 0 {
            return vec![PanelRow::Empty(&self.empty_message)];
        }
        let mut rows = Vec::new();
        let mut current_group: Option<&str> = None;
        for (filtered_index, &item_index) in self.nav.filtered().iter().enumerate() {
            let choice = &self.nav.items()[item_index];
            if let Some(group) = choice.group.as_deref() {
                if current_group != Some(group) {
                    rows.push(PanelRow::Header(group));
                    current_group = Some(group);
                }
            }
            rows.push(PanelRow::Option {
                filtered_index,
                label: &choice.label,
                disabled: choice.disabled,
                selected: self.value == Some(item_index),
                danger: false,
            });
        }
        rows
    }

    pub fn render_panel(&mut self, viewport: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.is_open() {
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };
        let row_count = self.rows().len() as u16;
        let size = Size::new(
            anchor.width.max(12),
            row_count.min(component::PANEL_MAX_ROWS) + 2,
        );
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
        let highlight = self.nav.highlight();
        let mut scroll = self.scroll;
        let rows = self.rows();
        render_rows(inner, buf, theme, &rows, highlight, &mut scroll);
        drop(rows);
        self.scroll = scroll;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;
    use termkit_core::input::key_char;
    use termkit_core::input::KeyCode;

    fn networks() -> Vec<Choice> {
        vec![
            Choice::new("eth", "Ethereum").group("Layer 1"),
            Choice::new("sol", "Solana").group("Layer 1"),
            Choice::new("base", "Base").group("Layer 2"),
            Choice::new("arb", "Arbitrum").group("Layer 2").disabled(true),
        ]
    }

    #[test]
    fn typing_while_closed_opens_and_filters() {
        let mut c = Combobox::new(networks());
        assert_eq!(c.handle_event(&InputEvent::Key(key_char('b'))), ComboboxAction::Opened);
        assert_eq!(c.query(), "b");
        assert_eq!(c.nav.filtered_len(), 2, "Base and Arbitrum match");
    }

    #[test]
    fn commit_clears_the_query_for_the_next_open() {
        let mut c = Combobox::new(networks());
        for ch in "bas".chars() {
            c.handle_event(&InputEvent::Key(key_char(ch)));
        }
        c.handle_event(&InputEvent::Key(key(KeyCode::Down)));
        assert_eq!(
            c.handle_event(&InputEvent::Key(key(KeyCode::Enter))),
            ComboboxAction::Changed(2)
        );
        assert_eq!(c.value().unwrap().value, "base");
        c.handle_event(&InputEvent::Key(key(KeyCode::Down)));
        assert!(c.is_open());
        assert_eq!(c.nav.filtered_len(), 4);
    }

    #[test]
    fn group_headers_appear_once_per_group() {
        let mut c = Combobox::new(networks());
        c.nav.open();
        let headers = c
            .rows()
            .iter()
            .filter(|r| matches!(r, PanelRow::Header(_)))
            .count();
        assert_eq!(headers, 2);
    }
}
