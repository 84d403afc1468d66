use std::collections::BTreeSet;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Debug)]
pub struct AccordionItem {
    pub title: String,
    pub body: Vec<String>,
    pub disabled: bool,
}

impl AccordionItem {
    pub fn new(title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionAction {
    None,
    Toggled(usize),
}

/// Expandable sections. The widget owns the expanded set and the cursor;
/// no shared context is involved.
#[derive(Clone, Debug, Default)]
pub struct Accordion {
    items: Vec<AccordionItem>,
    expanded: BTreeSet<usize>,
    cursor: usize,
    allow_multiple: bool,
}

impl Accordion {
    pub fn new(items: Vec<AccordionItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn allow_multiple(mut self, allow: bool) -> Self {
        self.allow_multiple = allow;
        self
    }

    pub fn expanded(&self) -> &BTreeSet<usize> {
        &self.expanded
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> AccordionAction {
        if self.items.is_empty() {
            return AccordionAction::None;
        }
        match key.code {
            KeyCode::Down => {
                self.move_cursor(1);
                AccordionAction::None
            }
            KeyCode::Up => {
                self.move_cursor(-1);
                AccordionAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let i = self.cursor;
                if self.items[i].disabled {
                    return AccordionAction::None;
                }
                if self.expanded.contains(&i) {
                    self.expanded.remove(&i);
                } else {
                    if !self.allow_multiple {
                        self.expanded.clear();
                    }
                    self.expanded.insert(i);
                }
                AccordionAction::Toggled(i)
            }
            _ => AccordionAction::None,
        }
    }

    fn move_cursor(&mut self, dir: i64) {
        let mut next = self.cursor as i64 + dir;
        while (0..self.items.len() as i64).contains(&next) {
            if !self.items[next as usize].disabled {
                self.cursor = next as usize;
                return;
            }
            next += dir;
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        let mut y = area.y;
        for (i, item) in self.items.iter().enumerate() {
            if y >= area.bottom() {
                return;
            }
            let open = self.expanded.contains(&i);
            let chevron = if open { "▾" } else { "▸" };
            let header = format!("{chevron} {}", item.title);
            let style = if item.disabled {
                theme.text_disabled
            } else if focused && self.cursor == i {
                theme
                    .text_primary
                    .patch(theme.highlight)
                    .patch(Style::new().add_modifier(Modifier::BOLD))
            } else {
                theme.text_primary
            };
            render::line(
                buf,
                area.x,
                y,
                area.width,
                &render::truncate(&header, area.width),
                style,
            );
            y += 1;
            if open {
                for line in &item.body {
                    if y >= area.bottom() {
                        return;
                    }
                    let w = area.width.saturating_sub(2);
                    render::line(
                        buf,
                        area.x + 2,
                        y,
                        w,
                        &render::truncate(line, w),
                        theme.text_secondary,
                    );
                    y += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;

    fn accordion() -> Accordion {
        Accordion::new(vec![
            AccordionItem::new("One", vec!["a".into()]),
            AccordionItem::new("Two", vec!["b".into()]),
        ])
    }

    #[test]
    fn single_mode_collapses_the_previous_section() {
        let mut a = accordion();
        a.handle_key(&key(KeyCode::Enter));
        a.handle_key(&key(KeyCode::Down));
        a.handle_key(&key(KeyCode::Enter));
        assert!(!a.expanded().contains(&0));
        assert!(a.expanded().contains(&1));
    }

    #[test]
    fn multiple_mode_keeps_both_open() {
        let mut a = accordion().allow_multiple(true);
        a.handle_key(&key(KeyCode::Enter));
        a.handle_key(&key(KeyCode::Down));
        a.handle_key(&key(KeyCode::Enter));
        assert_eq!(a.expanded().len(), 2);
    }
}
