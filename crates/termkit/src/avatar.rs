use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::Agent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AvatarStatus {
    Online,
    Offline,
    Busy,
    Away,
}

/// Identity chip: a glyph when one is provided, otherwise initials derived
/// from the name.
#[derive(Clone, Debug, Default)]
pub struct Avatar {
    name: String,
    glyph: Option<String>,
    agent: Option<Agent>,
    status: Option<AvatarStatus>,
}

impl Avatar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Explicit glyph (an emoji or symbol). When absent, initials are used.
    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    pub fn agent(mut self, agent: Agent) -> Self {
        self.agent = Some(agent);
        self
    }

    pub fn status(mut self, status: AvatarStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// First letter of the first two words, uppercased.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|w| w.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let accent = match self.agent {
            Some(agent) => Style::new().fg(agent.primary()),
            None => theme.accent,
        };
        let style = accent.patch(Style::new().add_modifier(Modifier::REVERSED));
        let body = match &self.glyph {
            Some(g) => format!(" {g} "),
            None => format!(" {} ", self.initials()),
        };
        render::line(buf, area.x, area.y, area.width, &body, style);

        if let Some(status) = self.status {
            let (glyph, s) = match status {
                AvatarStatus::Online => ("●", theme.success),
                AvatarStatus::Offline => ("○", theme.text_muted),
                AvatarStatus::Busy => ("●", theme.danger),
                AvatarStatus::Away => ("●", theme.warning),
            };
            let x = area.right().saturating_sub(1);
            render::line(buf, x, area.y, 1, glyph, s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(Avatar::new("Ada Lovelace").initials(), "AL");
        assert_eq!(Avatar::new("plato").initials(), "P");
        assert_eq!(Avatar::new("Grace Brewster Hopper").initials(), "GB");
        assert_eq!(Avatar::new("").initials(), "");
    }

    #[test]
    fn glyph_wins_over_initials() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        Avatar::new("Ada Lovelace")
            .glyph("@")
            .render(Rect::new(0, 0, 6, 1), &mut buf, &Theme::default());
        assert_eq!(buf[(1, 0)].symbol(), "@");
    }
}
