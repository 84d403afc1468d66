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

#[derive(Clone, Debug)]
pub enum MenuEntry {
    Item(MenuItem),
    Separator,
}

#[derive(Clone, Debug)]
pub struct MenuItem {
    pub label: String,
    pub disabled: bool,
    pub danger: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            danger: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Destructive entries render in the danger tone.
    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownAction {
    None,
    Opened,
    Closed,
    /// Index into the entry list (separators included).
    Selected(usize),
}

/// Action menu anchored to a trigger the caller renders.
#[derive(Clone, Debug)]
pub struct Dropdown {
    entries: Vec<MenuEntry>,
    /// Navigator item index → entry index.
    item_map: Vec<usize>,
    nav: ListNav,
    placement: Placement,
    offset: u16,
    anchor: Option<Rect>,
    panel: Option<Rect>,
    scroll: usize,
}

impl Dropdown {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        let mut item_map = Vec::new();
        let mut choices = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if let MenuEntry::Item(item) = entry {
                item_map.push(i);
                choices.push(
                    Choice::new(item.label.clone(), item.label.clone()).disabled(item.disabled),
                );
            }
        }
        Self {
            entries,
            item_map,
            nav: ListNav::new(choices),
            placement: Placement::BOTTOM_START,
            offset: spacing::FLOATING_OFFSET,
            anchor: None,
            panel: None,
            scroll: 0,
        }
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn is_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn set_anchor(&mut self, anchor: Option<Rect>) {
        self.anchor = anchor;
    }

    pub fn open(&mut self) {
        self.nav.open();
    }

    pub fn close(&mut self) {
        self.nav.close();
        self.panel = None;
        self.scroll = 0;
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> DropdownAction {
        match event {
            InputEvent::Key(k) => match self.nav.handle_key(k, false) {
                NavAction::Opened => DropdownAction::Opened,
                NavAction::Closed => {
                    self.panel = None;
                    self.scroll = 0;
                    DropdownAction::Closed
                }
                NavAction::Committed(i) => {
                    self.panel = None;
                    self.scroll = 0;
                    DropdownAction::Selected(self.item_map[i])
                }
                _ => DropdownAction::None,
            },
            InputEvent::Mouse(m) if m.is_down() => {
                if let Some(anchor) = self.anchor {
                    if anchor.contains(ratatui::layout::Position::new(m.x, m.y)) {
                        return if self.is_open() {
                            self.close();
                            DropdownAction::Closed
                        } else {
                            self.open();
                            DropdownAction::Opened
                        };
                    }
                }
                if self.is_open() {
                    let watcher = OutsideDismiss::new(self.anchor, self.panel.unwrap_or_default());
                    if watcher.should_dismiss(event) {
                        self.close();
                        return DropdownAction::Closed;
                    }
                }
                DropdownAction::None
            }
            _ => DropdownAction::None,
        }
    }

    fn panel_size(&self) -> Size {
        let label_w = self
            .entries
            .iter()
            .map(|e| match e {
                MenuEntry::Item(item) => render::display_width(&item.label),
                MenuEntry::Separator => 0,
            })
            .max()
            .unwrap_or(0);
        let rows = (self.entries.len() as u16).min(component::PANEL_MAX_ROWS);
        Size::new(label_w + 6, rows + 2)
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

        let mut item_no = 0usize;
        let rows: Vec<PanelRow<'_>> = self
            .entries
            .iter()
            .map(|entry| match entry {
                MenuEntry::Separator => PanelRow::Separator,
                MenuEntry::Item(item) => {
                    let row = PanelRow::Option {
                        filtered_index: item_no,
                        label: &item.label,
                        disabled: item.disabled,
                        selected: false,
                        danger: item.danger,
                    };
                    item_no += 1;
                    row
                }
            })
            .collect();
        render_rows(inner, buf, theme, &rows, self.nav.highlight(), &mut self.scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;
    use termkit_core::input::KeyCode;

    fn menu() -> Dropdown {
        Dropdown::new(vec![
            MenuEntry::Item(MenuItem::new("Copy address")),
            MenuEntry::Item(MenuItem::new("Rename wallet")),
            MenuEntry::Separator,
            MenuEntry::Item(MenuItem::new("Disconnect").danger(true)),
        ])
    }

    #[test]
    fn selection_indices_account_for_separators() {
        let mut d = menu();
        d.handle_event(&InputEvent::Key(key(KeyCode::Enter)));
        assert!(d.is_open());
        for _ in 0..3 {
            d.handle_event(&InputEvent::Key(key(KeyCode::Down)));
        }
        assert_eq!(
            d.handle_event(&InputEvent::Key(key(KeyCode::Enter))),
            DropdownAction::Selected(3),
            "the separator does not shift the reported entry index"
        );
        assert!(!d.is_open());
    }

    #[test]
    fn escape_closes_the_menu() {
        let mut d = menu();
        d.open();
        assert_eq!(
            d.handle_event(&InputEvent::Key(key(KeyCode::Esc))),
            DropdownAction::Closed
        );
    }
}
