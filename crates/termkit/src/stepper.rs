use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Complete,
    Current,
    Upcoming,
}

/// Horizontal progress-through-steps indicator.
#[derive(Clone, Debug, Default)]
pub struct Stepper {
    steps: Vec<String>,
    current: usize,
}

impl Stepper {
    pub fn new(steps: Vec<String>) -> Self {
        Self { steps, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn set_current(&mut self, step: usize) {
        self.current = step.min(self.steps.len().saturating_sub(1));
    }

    pub fn advance(&mut self) {
        self.set_current(self.current + 1);
    }

    pub fn state_of(&self, index: usize) -> StepState {
        use std::cmp::Ordering;
        match index.cmp(&self.current) {
            Ordering::Less => StepState::Complete,
            Ordering::Equal => StepState::Current,
            Ordering::Greater => StepState::Upcoming,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut x = area.x;
        for (i, step) in self.steps.iter().enumerate() {
            let (glyph, style) = match self.state_of(i) {
                StepState::Complete => ("✓".to_string(), theme.success),
                StepState::Current => (
                    format!("{}", i + 1),
                    theme.accent.patch(Style::new().add_modifier(Modifier::BOLD)),
                ),
                StepState::Upcoming => (format!("{}", i + 1), theme.text_muted),
            };
            let text = format!("({glyph}) {step}");
            let w = render::display_width(&text);
            if x + w > area.right() {
                return;
            }
            render::line(buf, x, area.y, w, &text, style);
            x += w;
            if i + 1 < self.steps.len() {
                let link_w = 4.min(area.right().saturating_sub(x));
                render::line(buf, x + 1, area.y, link_w, "──", theme.border);
                x += 4;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_partition_around_the_current_step() {
        let mut s = Stepper::new(vec!["a".into(), "b".into(), "c".into()]);
        s.advance();
        assert_eq!(s.state_of(0), StepState::Complete);
        assert_eq!(s.state_of(1), StepState::Current);
        assert_eq!(s.state_of(2), StepState::Upcoming);
        s.advance();
        s.advance();
        assert_eq!(s.current(), 2, "clamped at the last step");
    }
}
