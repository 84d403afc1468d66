use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use termkit_core::input::InputEvent;
use termkit_core::input::KeyCode;
use termkit_core::navigator::Choice;
use termkit_core::navigator::ListNav;
use termkit_core::navigator::NavAction;
use termkit_core::render;
use termkit_core::theme::Theme;

use crate::panel::render_rows;
use crate::panel::PanelRow;

#[derive(Clone, Debug)]
pub struct Command {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub keywords: Vec<String>,
    pub disabled: bool,
}

impl Command {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
            category: None,
            keywords: Vec::new(),
            disabled: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn matches(&self, needle: &str) -> bool {
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(&self.label)
            || self.description.as_deref().is_some_and(hit)
            || self.keywords.iter().any(|k| hit(k))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteAction {
    None,
    Opened,
    Closed,
    /// The committed command's id.
    Executed(String),
}

/// Centered command launcher: a query row over a grouped command list.
///
/// With an empty query the palette surfaces recently executed commands (most
/// recent first); typing searches label, description, and keywords. Enter
/// takes the highlighted result, which rides along at the top of the list as
/// the filter narrows.
#[derive(Clone, Debug)]
pub struct CommandPalette {
    commands: Vec<Command>,
    recents: Vec<String>,
    max_recent: usize,
    show_recent: bool,
    open: bool,
    query: String,
    /// Indices into `commands`, in display order.
    displayed: Vec<usize>,
    nav: ListNav,
    scroll: usize,
}

impl CommandPalette {
    pub fn new(commands: Vec<Command>) -> Self {
        let mut palette = Self {
            commands,
            recents: Vec::new(),
            max_recent: 5,
            show_recent: true,
            open: false,
            query: String::new(),
            displayed: Vec::new(),
            nav: ListNav::new(Vec::new()),
            scroll: 0,
        };
        palette.rebuild();
        palette
    }

    pub fn max_recent(mut self, max: usize) -> Self {
        self.max_recent = max;
        self
    }

    pub fn show_recent(mut self, show: bool) -> Self {
        self.show_recent = show;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn recents(&self) -> &[String] {
        &self.recents
    }

    /// Opening always starts from a blank query with the first result
    /// highlighted.
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.scroll = 0;
        self.rebuild();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.scroll = 0;
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> PaletteAction {
        let InputEvent::Key(k) = event else {
            return PaletteAction::None;
        };
        if !self.open {
            // Ctrl+K summons the palette.
            if k.modifiers.ctrl && k.code == KeyCode::Char('k') {
                self.open();
                return PaletteAction::Opened;
            }
            return PaletteAction::None;
        }
        match k.code {
            KeyCode::Esc => {
                self.close();
                PaletteAction::Closed
            }
            KeyCode::Down => {
                self.nav.step(1);
                PaletteAction::None
            }
            KeyCode::Up => {
                self.nav.step(-1);
                PaletteAction::None
            }
            KeyCode::Enter => match self.nav.commit() {
                NavAction::Committed(i) => {
                    let id = self.commands[self.displayed[i]].id.clone();
                    self.remember(&id);
                    self.close();
                    PaletteAction::Executed(id)
                }
                _ => PaletteAction::None,
            },
            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    self.rebuild();
                }
                PaletteAction::None
            }
            _ => match k.text_char() {
                Some(c) => {
                    self.query.push(c);
                    self.rebuild();
                    PaletteAction::None
                }
                None => PaletteAction::None,
            },
        }
    }

    fn remember(&mut self, id: &str) {
        self.recents.retain(|r| r != id);
        self.recents.insert(0, id.to_string());
        self.recents.truncate(self.max_recent);
    }

    /// Recomputes the display list for the current query and re-seeds the
    /// navigator over it.
    fn rebuild(&mut self) {
        let needle = self.query.to_lowercase();
        self.displayed = if needle.is_empty() {
            if self.show_recent && !self.recents.is_empty() {
                self.recents
                    .iter()
                    .filter_map(|id| self.commands.iter().position(|c| &c.id == id))
                    .collect()
            } else {
                (0..self.commands.len()).collect()
            }
        } else {
            self.commands
                .iter()
                .enumerate()
                .filter(|(_, c)| c.matches(&needle))
                .map(|(i, _)| i)
                .collect()
        };
        let choices = self
            .displayed
            .iter()
            .map(|&i| {
                let c = &self.commands[i];
                Choice::new(c.id.clone(), c.label.clone()).disabled(c.disabled)
            })
            .collect();
        self.nav = ListNav::new(choices);
        if self.open {
            self.nav.open();
            self.nav.highlight_first();
        }
        self.scroll = 0;
    }

    fn rows(&self) -> Vec<PanelRow<'_>> {
        if self.displayed.is_empty() {
            return vec![PanelRow::Empty("No matching commands")];
        }
        let recents_view = self.query.is_empty() && self.show_recent && !self.recents.is_empty();
        let mut rows = Vec::new();
        let mut current_group: Option<&str> = None;
        for (filtered_index, &command_index) in self.displayed.iter().enumerate() {
            let command = &self.commands[command_index];
            let group = if recents_view {
                Some("Recent")
            } else {
                command.category.as_deref()
            };
            if let Some(group) = group {
                if current_group != Some(group) {
                    rows.push(PanelRow::Header(group));
                    current_group = Some(group);
                }
            }
            rows.push(PanelRow::Option {
                filtered_index,
                label: &command.label,
                disabled: command.disabled,
                selected: false,
                danger: false,
            });
        }
        rows
    }

    /// Renders the palette as a centered layer over `viewport`.
    pub fn render(&mut self, viewport: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.open {
            return;
        }
        let width = (viewport.width.saturating_mul(2) / 3)
            .clamp(24, 60)
            .min(viewport.width);
        let height = (self.rows().len() as u16 + 4).clamp(6, 16).min(viewport.height);
        let panel = render::centered(viewport, width, height);

        render::dim(buf, viewport, theme.overlay);
        buf.set_style(panel, theme.surface_raised);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.focus)
            .render(panel, buf);

        let inner = Rect::new(
            panel.x + 1,
            panel.y + 1,
            panel.width.saturating_sub(2),
            panel.height.saturating_sub(2),
        );
        if inner.width < 4 || inner.height < 3 {
            return;
        }
        let prompt = "› ";
        render::line(buf, inner.x, inner.y, 2, prompt, theme.accent);
        let query_w = inner.width - 2;
        if self.query.is_empty() {
            render::line(
                buf,
                inner.x + 2,
                inner.y,
                query_w,
                "Type a command…",
                theme.text_muted,
            );
        } else {
            render::line(
                buf,
                inner.x + 2,
                inner.y,
                query_w,
                &render::truncate(&self.query, query_w),
                theme.text_primary,
            );
        }
        for dx in 0..inner.width {
            render::line(buf, inner.x + dx, inner.y + 1, 1, "─", theme.border);
        }

        let list = Rect::new(inner.x, inner.y + 2, inner.width, inner.height.saturating_sub(2));
        let highlight = self.nav.highlight();
        let mut scroll = self.scroll;
        let rows = self.rows();
        render_rows(list, buf, theme, &rows, highlight, &mut scroll);
        drop(rows);
        self.scroll = scroll;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;
    use termkit_core::input::key_char;
    use termkit_core::input::key_ctrl;

    fn commands() -> Vec<Command> {
        vec![
            Command::new("wallet.connect", "Connect wallet").category("Wallet"),
            Command::new("wallet.send", "Send funds")
                .category("Wallet")
                .keywords(vec!["transfer".into()]),
            Command::new("theme.switch", "Switch theme").category("View"),
        ]
    }

    #[test]
    fn ctrl_k_opens_and_escape_closes() {
        let mut p = CommandPalette::new(commands());
        assert_eq!(p.handle_event(&InputEvent::Key(key_ctrl('k'))), PaletteAction::Opened);
        assert_eq!(
            p.handle_event(&InputEvent::Key(key(KeyCode::Esc))),
            PaletteAction::Closed
        );
    }

    #[test]
    fn enter_takes_the_top_result_after_filtering() {
        let mut p = CommandPalette::new(commands());
        p.open();
        for c in "transfer".chars() {
            p.handle_event(&InputEvent::Key(key_char(c)));
        }
        assert_eq!(
            p.handle_event(&InputEvent::Key(key(KeyCode::Enter))),
            PaletteAction::Executed("wallet.send".into()),
            "keyword search finds the command"
        );
    }

    #[test]
    fn executed_commands_surface_as_recents() {
        let mut p = CommandPalette::new(commands());
        p.open();
        for c in "switch".chars() {
            p.handle_event(&InputEvent::Key(key_char(c)));
        }
        p.handle_event(&InputEvent::Key(key(KeyCode::Enter)));
        assert_eq!(p.recents(), ["theme.switch"]);

        p.open();
        assert_eq!(p.displayed, vec![2], "blank query shows recents only");
        let rows = p.rows();
        assert!(matches!(rows[0], PanelRow::Header("Recent")));
    }

    #[test]
    fn recents_are_deduped_most_recent_first() {
        let mut p = CommandPalette::new(commands());
        for id in ["wallet.send", "theme.switch", "wallet.send"] {
            p.remember(id);
        }
        assert_eq!(p.recents(), ["wallet.send", "theme.switch"]);
    }
}
