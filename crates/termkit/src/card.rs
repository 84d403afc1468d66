use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::component;
use termkit_core::tokens::Agent;

/// Bordered surface with an optional header and footer; the body is left to
/// the caller via the rect returned from [`Card::render`].
#[derive(Clone, Debug, Default)]
pub struct Card {
    title: Option<String>,
    footer: Option<String>,
    agent: Option<Agent>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Tints the border with the agent accent.
    pub fn agent(mut self, agent: Agent) -> Self {
        self.agent = Some(agent);
        self
    }

    /// Draws the chrome and returns the padded body area.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) -> Rect {
        if area.width < 4 || area.height < 2 {
            return Rect::default();
        }
        let border = match self.agent {
            Some(agent) => Style::new().fg(agent.secondary()),
            None => theme.border,
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .render(area, buf);

        if let Some(title) = &self.title {
            let text = render::truncate(&format!(" {title} "), area.width.saturating_sub(4));
            render::line(
                buf,
                area.x + 2,
                area.y,
                area.width.saturating_sub(4),
                &text,
                theme.text_primary.patch(Style::new().add_modifier(Modifier::BOLD)),
            );
        }
        if let Some(footer) = &self.footer {
            let text = render::truncate(&format!(" {footer} "), area.width.saturating_sub(4));
            render::line(
                buf,
                area.x + 2,
                area.bottom() - 1,
                area.width.saturating_sub(4),
                &text,
                theme.text_muted,
            );
        }

        let pad_x = component::CARD_PAD_X;
        let pad_y = component::CARD_PAD_Y;
        Rect::new(
            area.x + 1 + pad_x.min((area.width - 2) / 2),
            area.y + 1 + pad_y.min((area.height - 2) / 2),
            area.width.saturating_sub(2 + pad_x * 2),
            area.height.saturating_sub(2 + pad_y * 2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_rect_is_inset_by_border_and_padding() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        let body = Card::new()
            .title("Wallet")
            .render(Rect::new(0, 0, 40, 10), &mut buf, &Theme::default());
        assert_eq!(body, Rect::new(3, 2, 34, 6));
    }

    #[test]
    fn degenerate_areas_render_nothing() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        let body = Card::new().render(Rect::new(0, 0, 3, 1), &mut buf, &Theme::default());
        assert_eq!(body, Rect::default());
    }
}
