use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::animation;

/// Indeterminate activity indicator. The app pumps [`Spinner::tick`] with
/// elapsed wall time; frames advance on the token interval.
#[derive(Clone, Debug, Default)]
pub struct Spinner {
    label: Option<String>,
    elapsed: Duration,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.elapsed += elapsed;
    }

    pub fn frame(&self) -> &'static str {
        let idx = (self.elapsed.as_millis() / animation::SPINNER_INTERVAL.as_millis()) as usize;
        animation::SPINNER_FRAMES[idx % animation::SPINNER_FRAMES.len()]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = match &self.label {
            Some(label) => format!("{} {label}", self.frame()),
            None => self.frame().to_string(),
        };
        render::line(
            buf,
            area.x,
            area.y,
            area.width,
            &render::truncate(&text, area.width),
            theme.accent,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_advance_on_the_token_interval() {
        let mut s = Spinner::new();
        let first = s.frame();
        s.tick(animation::SPINNER_INTERVAL);
        assert_ne!(s.frame(), first);
        // A full cycle returns to the start.
        let cycle = animation::SPINNER_INTERVAL * (animation::SPINNER_FRAMES.len() as u32 - 1);
        s.tick(cycle);
        assert_eq!(s.frame(), first);
    }
}
