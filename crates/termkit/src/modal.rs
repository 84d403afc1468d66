use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use termkit_core::input::InputEvent;
use termkit_core::input::KeyCode;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::component;

use crate::button::Button;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
}

impl ModalSize {
    fn width(self) -> u16 {
        match self {
            ModalSize::Sm => component::MODAL_WIDTH_SM,
            ModalSize::Md => component::MODAL_WIDTH_MD,
            ModalSize::Lg => component::MODAL_WIDTH_LG,
            ModalSize::Xl => component::MODAL_WIDTH_XL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Dismissed,
}

/// Centered layer over a dimmed backdrop.
///
/// While open the modal owns the screen: backdrop clicks either dismiss it
/// or are swallowed, so widgets underneath never react.
#[derive(Clone, Debug, Default)]
pub struct Modal {
    open: bool,
    size: ModalSize,
    title: Option<String>,
    close_on_escape: bool,
    close_on_backdrop: bool,
    panel: Option<Rect>,
}

impl Modal {
    pub fn new() -> Self {
        Self {
            open: false,
            size: ModalSize::default(),
            title: None,
            close_on_escape: true,
            close_on_backdrop: true,
            panel: None,
        }
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.panel = None;
    }

    /// Escape or a backdrop click dismisses, by configuration; every other
    /// event is swallowed while open.
    pub fn handle_event(&mut self, event: &InputEvent) -> ModalAction {
        if !self.open {
            return ModalAction::None;
        }
        match event {
            InputEvent::Key(k) if k.code == KeyCode::Esc => {
                if self.close_on_escape {
                    self.close();
                    ModalAction::Dismissed
                } else {
                    ModalAction::None
                }
            }
            InputEvent::Mouse(m) if m.is_down() => {
                let inside = self
                    .panel
                    .is_some_and(|p| p.contains(ratatui::layout::Position::new(m.x, m.y)));
                if !inside && self.close_on_backdrop {
                    self.close();
                    ModalAction::Dismissed
                } else {
                    ModalAction::None
                }
            }
            _ => ModalAction::None,
        }
    }

    /// Dims the viewport, draws the panel, and hands the inner area to
    /// `content`.
    pub fn render(
        &mut self,
        viewport: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        content: impl FnOnce(Rect, &mut Buffer, &Theme),
    ) {
        if !self.open {
            return;
        }
        render::dim(buf, viewport, theme.overlay);

        let width = self.size.width().min(viewport.width);
        let height = (component::modal_height(width) + 2).min(viewport.height);
        let panel = render::centered(viewport, width, height);
        self.panel = Some(panel);

        buf.set_style(panel, theme.surface_raised);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_strong)
            .render(panel, buf);
        if let Some(title) = &self.title {
            let text = render::truncate(&format!(" {title} "), panel.width.saturating_sub(4));
            render::line(
                buf,
                panel.x + 2,
                panel.y,
                panel.width.saturating_sub(4),
                &text,
                theme.text_primary.patch(Style::new().add_modifier(Modifier::BOLD)),
            );
        }
        let inner = Rect::new(
            panel.x + 2,
            panel.y + 1,
            panel.width.saturating_sub(4),
            panel.height.saturating_sub(2),
        );
        if inner.width > 0 && inner.height > 0 {
            content(inner, buf, theme);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAction {
    None,
    /// A button was activated, by index.
    Button(usize),
    Cancelled,
}

/// Confirmation dialog: a modal with a message and a focus-cycled button
/// row. Tab, BackTab, and the horizontal arrows move focus; Enter
/// activates; Escape cancels.
#[derive(Clone, Debug)]
pub struct Dialog {
    modal: Modal,
    message: Vec<String>,
    buttons: Vec<Button>,
    focus: usize,
}

impl Dialog {
    pub fn new(title: impl Into<String>, message: Vec<String>, buttons: Vec<Button>) -> Self {
        Self {
            modal: Modal::new().size(ModalSize::Sm).title(title),
            message,
            buttons,
            focus: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn open(&mut self) {
        self.modal.open();
        self.focus = 0;
    }

    pub fn close(&mut self) {
        self.modal.close();
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> DialogAction {
        if !self.is_open() {
            return DialogAction::None;
        }
        if let InputEvent::Key(k) = event {
            match k.code {
                KeyCode::Tab | KeyCode::Right => {
                    if !self.buttons.is_empty() {
                        self.focus = (self.focus + 1) % self.buttons.len();
                    }
                    return DialogAction::None;
                }
                KeyCode::BackTab | KeyCode::Left => {
                    if !self.buttons.is_empty() {
                        self.focus = (self.focus + self.buttons.len() - 1) % self.buttons.len();
                    }
                    return DialogAction::None;
                }
                KeyCode::Enter => {
                    let focused = self.focus;
                    if self
                        .buttons
                        .get(focused)
                        .is_some_and(|b| !b.is_disabled())
                    {
                        self.close();
                        return DialogAction::Button(focused);
                    }
                    return DialogAction::None;
                }
                _ => {}
            }
        }
        match self.modal.handle_event(event) {
            ModalAction::Dismissed => DialogAction::Cancelled,
            ModalAction::None => DialogAction::None,
        }
    }

    pub fn render(&mut self, viewport: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.is_open() {
            return;
        }
        let message = self.message.clone();
        let buttons = self.buttons.clone();
        let focus = self.focus;
        self.modal.render(viewport, buf, theme, |inner, buf, theme| {
            let mut y = inner.y;
            for line in &message {
                if y + 1 >= inner.bottom() {
                    break;
                }
                render::line(
                    buf,
                    inner.x,
                    y,
                    inner.width,
                    &render::truncate(line, inner.width),
                    theme.text_secondary,
                );
                y += 1;
            }
            // Right-aligned button row on the last line.
            let total: u16 = buttons.iter().map(|b| b.width() + 2).sum();
            let mut x = inner.right().saturating_sub(total.min(inner.width));
            let row = inner.bottom() - 1;
            for (i, button) in buttons.iter().enumerate() {
                let w = button.width().min(inner.right().saturating_sub(x));
                if w == 0 {
                    break;
                }
                button.render(Rect::new(x, row, w, 1), buf, theme, i == focus);
                x += w + 2;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;
    use termkit_core::input::Modifiers;
    use termkit_core::input::MouseButton;
    use termkit_core::input::MouseEvent;
    use termkit_core::input::MouseKind;

    fn down(x: u16, y: u16) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            x,
            y,
            kind: MouseKind::Down(MouseButton::Left),
            modifiers: Modifiers::NONE,
        })
    }

    fn open_modal() -> Modal {
        let mut m = Modal::new();
        m.open();
        let viewport = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(viewport);
        m.render(viewport, &mut buf, &Theme::default(), |_, _, _| {});
        m
    }

    #[test]
    fn backdrop_click_dismisses_panel_click_does_not() {
        let mut m = open_modal();
        let panel = m.panel.unwrap();
        assert_eq!(m.handle_event(&down(panel.x + 2, panel.y + 1)), ModalAction::None);
        assert!(m.is_open());
        assert_eq!(m.handle_event(&down(0, 0)), ModalAction::Dismissed);
        assert!(!m.is_open());
    }

    #[test]
    fn escape_flag_is_honored() {
        let mut m = open_modal().close_on_escape(false);
        assert_eq!(
            m.handle_event(&InputEvent::Key(key(KeyCode::Esc))),
            ModalAction::None
        );
        assert!(m.is_open());
    }

    #[test]
    fn dialog_cycles_focus_and_reports_the_button() {
        let mut d = Dialog::new(
            "Disconnect wallet?",
            vec!["This clears the local session.".into()],
            vec![Button::new("Cancel"), Button::new("Disconnect")],
        );
        d.open();
        d.handle_event(&InputEvent::Key(key(KeyCode::Tab)));
        assert_eq!(d.focus(), 1);
        assert_eq!(
            d.handle_event(&InputEvent::Key(key(KeyCode::Enter))),
            DialogAction::Button(1)
        );
        assert!(!d.is_open());
    }

    #[test]
    fn dialog_escape_cancels() {
        let mut d = Dialog::new("Hm", vec![], vec![Button::new("Ok")]);
        d.open();
        assert_eq!(
            d.handle_event(&InputEvent::Key(key(KeyCode::Esc))),
            DialogAction::Cancelled
        );
    }
}
