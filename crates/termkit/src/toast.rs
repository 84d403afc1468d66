use std::time::Duration;

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
use termkit_core::tokens::animation;

use crate::variant::Tone;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl ToastPosition {
    fn is_top(self) -> bool {
        matches!(
            self,
            ToastPosition::TopLeft | ToastPosition::TopCenter | ToastPosition::TopRight
        )
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub title: Option<String>,
    pub message: String,
    pub tone: Tone,
    /// `None` uses the token default; `Some(ZERO)` never auto-dismisses.
    pub lifetime: Option<Duration>,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            tone: Tone::Neutral,
            lifetime: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    fn rows(&self) -> u16 {
        if self.title.is_some() { 4 } else { 3 }
    }
}

#[derive(Clone, Debug)]
struct ActiveToast {
    toast: Toast,
    /// Time left before auto-dismissal; `None` for sticky toasts.
    remaining: Option<Duration>,
}

/// Corner-stacked notification queue.
///
/// The app pumps [`Toasts::tick`] with elapsed wall time; each toast owns a
/// fire-once timer that manual dismissal cancels. Pushing past the visible
/// cap evicts the oldest toast.
#[derive(Clone, Debug)]
pub struct Toasts {
    active: Vec<ActiveToast>,
    position: ToastPosition,
    max_visible: usize,
}

impl Default for Toasts {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            position: ToastPosition::default(),
            max_visible: 3,
        }
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    pub fn max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn push(&mut self, toast: Toast) {
        let remaining = match toast.lifetime {
            Some(Duration::ZERO) => None,
            Some(lifetime) => Some(lifetime),
            None => Some(animation::TOAST_LIFETIME),
        };
        self.active.push(ActiveToast { toast, remaining });
        while self.active.len() > self.max_visible {
            self.active.remove(0);
        }
    }

    /// Counts down lifetimes and drops expired toasts.
    pub fn tick(&mut self, elapsed: Duration) {
        for toast in &mut self.active {
            if let Some(remaining) = toast.remaining {
                toast.remaining = Some(remaining.saturating_sub(elapsed));
            }
        }
        self.active
            .retain(|t| t.remaining.is_none_or(|r| r > Duration::ZERO));
    }

    /// Manually dismisses the toast at `index` (0 = oldest visible).
    pub fn dismiss(&mut self, index: usize) {
        if index < self.active.len() {
            self.active.remove(index);
        }
    }

    pub fn render(&self, viewport: Rect, buf: &mut Buffer, theme: &Theme) {
        if self.active.is_empty() || viewport.width < 12 || viewport.height < 4 {
            return;
        }
        let width = (viewport.width / 3).clamp(24, 44).min(viewport.width);
        let x = match self.position {
            ToastPosition::TopLeft | ToastPosition::BottomLeft => viewport.x + 1,
            ToastPosition::TopCenter | ToastPosition::BottomCenter => {
                viewport.x + (viewport.width - width) / 2
            }
            ToastPosition::TopRight | ToastPosition::BottomRight => {
                viewport.right().saturating_sub(width + 1)
            }
        };

        let mut y = if self.position.is_top() {
            viewport.y + 1
        } else {
            viewport.bottom().saturating_sub(1)
        };
        // Newest toast sits closest to the edge.
        for active in self.active.iter().rev() {
            let h = active.toast.rows();
            let top = if self.position.is_top() {
                if y + h > viewport.bottom() {
                    break;
                }
                let top = y;
                y += h;
                top
            } else {
                if y < viewport.y + h {
                    break;
                }
                y -= h;
                y
            };
            self.render_one(&active.toast, Rect::new(x, top, width, h), buf, theme);
        }
    }

    fn render_one(&self, toast: &Toast, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let tone = toast.tone.style(theme);
        buf.set_style(area, theme.surface_raised);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(tone)
            .render(area, buf);
        let inner_w = area.width.saturating_sub(4);
        let mut y = area.y + 1;
        if let Some(title) = &toast.title {
            let text = format!("{} {}", toast.tone.glyph(), title);
            render::line(
                buf,
                area.x + 2,
                y,
                inner_w,
                &render::truncate(&text, inner_w),
                tone.patch(Style::new().add_modifier(Modifier::BOLD)),
            );
            y += 1;
        }
        let body = if toast.title.is_none() {
            format!("{} {}", toast.tone.glyph(), toast.message)
        } else {
            toast.message.clone()
        };
        render::line(
            buf,
            area.x + 2,
            y,
            inner_w,
            &render::truncate(&body, inner_w),
            theme.text_primary,
        );
        render::line(buf, area.right().saturating_sub(3), area.y, 1, "✕", theme.text_muted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_on_their_own_timers() {
        let mut toasts = Toasts::new();
        toasts.push(Toast::new("saved").lifetime(Duration::from_millis(100)));
        toasts.push(Toast::new("pinned").lifetime(Duration::ZERO));
        toasts.tick(Duration::from_millis(60));
        assert_eq!(toasts.len(), 2);
        toasts.tick(Duration::from_millis(60));
        assert_eq!(toasts.len(), 1, "sticky toast survives");
    }

    #[test]
    fn pushing_past_the_cap_evicts_the_oldest() {
        let mut toasts = Toasts::new().max_visible(2);
        toasts.push(Toast::new("one"));
        toasts.push(Toast::new("two"));
        toasts.push(Toast::new("three"));
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts.active[0].toast.message, "two");
    }

    #[test]
    fn manual_dismiss_cancels_the_timer() {
        let mut toasts = Toasts::new();
        toasts.push(Toast::new("bye"));
        toasts.dismiss(0);
        assert!(toasts.is_empty());
        toasts.tick(Duration::from_secs(10));
        assert!(toasts.is_empty());
    }

    #[test]
    fn default_lifetime_comes_from_the_tokens() {
        let mut toasts = Toasts::new();
        toasts.push(Toast::new("hello"));
        toasts.tick(animation::TOAST_LIFETIME - Duration::from_millis(1));
        assert_eq!(toasts.len(), 1);
        toasts.tick(Duration::from_millis(1));
        assert!(toasts.is_empty());
    }
}
