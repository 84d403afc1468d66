use ratatui::style::Style;

use crate::tokens::palette;
use crate::tokens::semantic;
use crate::tokens::Agent;

/// Style roles shared by every widget in the catalog.
///
/// Widgets never store styles: they borrow a `Theme` at render time, so one
/// theme swap restyles the whole tree on the next frame.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub text_primary: Style,
    pub text_secondary: Style,
    pub text_muted: Style,
    pub text_disabled: Style,

    pub surface: Style,
    pub surface_raised: Style,

    pub border: Style,
    pub border_strong: Style,

    pub accent: Style,
    pub accent_deep: Style,

    pub success: Style,
    pub warning: Style,
    pub danger: Style,
    pub info: Style,

    /// Row under the list cursor in dropdown panels.
    pub highlight: Style,
    /// Border/label of the focused control.
    pub focus: Style,
    /// Applied over content beneath a modal backdrop.
    pub overlay: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::agent(Agent::default())
    }
}

impl Theme {
    /// The default theme re-tinted with an agent's accent pair.
    pub fn agent(agent: Agent) -> Self {
        Self {
            text_primary: Style::new().fg(palette::TEXT),
            text_secondary: Style::new().fg(palette::TEXT_SECONDARY),
            text_muted: Style::new().fg(palette::TEXT_MUTED),
            text_disabled: Style::new().fg(palette::TEXT_DISABLED),
            surface: Style::new().bg(palette::BG),
            surface_raised: Style::new().bg(palette::BG_RAISED),
            border: Style::new().fg(palette::BORDER),
            border_strong: Style::new().fg(palette::BORDER_STRONG),
            accent: Style::new().fg(agent.primary()),
            accent_deep: Style::new().fg(agent.secondary()),
            success: Style::new().fg(semantic::SUCCESS),
            warning: Style::new().fg(semantic::WARNING),
            danger: Style::new().fg(semantic::ERROR),
            info: Style::new().fg(semantic::INFO),
            highlight: Style::new().bg(palette::BG_OVERLAY),
            focus: Style::new().fg(agent.primary()),
            overlay: Style::new().fg(palette::TEXT_DISABLED).bg(palette::BG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::agents;

    #[test]
    fn agent_theme_only_retints_accents() {
        let a = Theme::agent(Agent::BigSis);
        let b = Theme::agent(Agent::Cbo);
        assert_eq!(a.text_primary, b.text_primary);
        assert_eq!(a.border, b.border);
        assert_eq!(b.accent.fg, Some(agents::CBO));
        assert_eq!(b.focus.fg, Some(agents::CBO));
    }
}
