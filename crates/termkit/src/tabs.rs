use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Debug)]
pub struct Tab {
    pub label: String,
    pub disabled: bool,
}

impl Tab {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabsAction {
    None,
    Selected(usize),
}

/// Horizontal tab strip with parent-owned selection. Left/Right move over
/// enabled tabs, clamped at the ends.
#[derive(Clone, Debug, Default)]
pub struct Tabs {
    tabs: Vec<Tab>,
    selected: usize,
}

impl Tabs {
    pub fn new(tabs: Vec<Tab>) -> Self {
        Self { tabs, selected: 0 }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.tabs.len() && !self.tabs[index].disabled {
            self.selected = index;
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> TabsAction {
        if self.tabs.is_empty() {
            return TabsAction::None;
        }
        let dir = match key.code {
            KeyCode::Right => 1i64,
            KeyCode::Left => -1,
            _ => return TabsAction::None,
        };
        let mut next = self.selected as i64 + dir;
        while (0..self.tabs.len() as i64).contains(&next) {
            if !self.tabs[next as usize].disabled {
                self.selected = next as usize;
                return TabsAction::Selected(self.selected);
            }
            next += dir;
        }
        TabsAction::None
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut x = area.x;
        for (i, tab) in self.tabs.iter().enumerate() {
            let text = format!(" {} ", tab.label);
            let w = render::display_width(&text);
            if x + w > area.right() {
                break;
            }
            let style = if tab.disabled {
                theme.text_disabled
            } else if i == self.selected {
                theme.accent.patch(Style::new().add_modifier(Modifier::BOLD))
            } else {
                theme.text_secondary
            };
            render::line(buf, x, area.y, w, &text, style);
            if i == self.selected && area.height >= 2 {
                for dx in 0..w {
                    render::line(buf, x + dx, area.y + 1, 1, "▔", theme.accent);
                }
            }
            x += w + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;

    #[test]
    fn arrows_skip_disabled_and_clamp() {
        let mut t = Tabs::new(vec![
            Tab::new("One"),
            Tab::new("Two").disabled(true),
            Tab::new("Three"),
        ]);
        assert_eq!(t.handle_key(&key(KeyCode::Right)), TabsAction::Selected(2));
        assert_eq!(t.handle_key(&key(KeyCode::Right)), TabsAction::None);
        assert_eq!(t.handle_key(&key(KeyCode::Left)), TabsAction::Selected(0));
        assert_eq!(t.handle_key(&key(KeyCode::Left)), TabsAction::None);
    }
}
