use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::input::KeyCode;
use termkit_core::input::KeyEvent;
use termkit_core::render;
use termkit_core::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaginationAction {
    None,
    PageChanged(usize),
}

/// Page selector rendered as `‹ 1 … 4 [5] 6 … 20 ›`, with a sibling window
/// around the current page.
#[derive(Clone, Debug)]
pub struct Pagination {
    page: usize,
    pages: usize,
    siblings: usize,
}

impl Pagination {
    /// `pages` is the total count; the current page is 0-based internally
    /// and 1-based in the UI.
    pub fn new(pages: usize) -> Self {
        Self {
            page: 0,
            pages: pages.max(1),
            siblings: 1,
        }
    }

    pub fn siblings(mut self, siblings: usize) -> Self {
        self.siblings = siblings;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.pages - 1);
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> PaginationAction {
        let next = match key.code {
            KeyCode::Left => self.page.checked_sub(1),
            KeyCode::Right => (self.page + 1 < self.pages).then_some(self.page + 1),
            KeyCode::Home => (self.page != 0).then_some(0),
            KeyCode::End => (self.page != self.pages - 1).then_some(self.pages - 1),
            _ => None,
        };
        match next {
            Some(p) if p != self.page => {
                self.page = p;
                PaginationAction::PageChanged(p)
            }
            _ => PaginationAction::None,
        }
    }

    /// The 1-based page numbers to draw; `None` is an ellipsis.
    pub fn window(&self) -> Vec<Option<usize>> {
        let current = self.page + 1;
        let last = self.pages;
        let lo = current.saturating_sub(self.siblings).max(1);
        let hi = (current + self.siblings).min(last);

        let mut out = Vec::new();
        out.push(Some(1));
        if lo > 2 {
            out.push(None);
        }
        for p in lo.max(2)..=hi.min(last.saturating_sub(1)) {
            out.push(Some(p));
        }
        if hi + 1 < last {
            out.push(None);
        }
        if last > 1 {
            out.push(Some(last));
        }
        out
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut x = area.x;
        let mut put = |x: &mut u16, text: &str, style: Style| {
            let w = render::display_width(text);
            if *x + w <= area.right() {
                render::line(buf, *x, area.y, w, text, style);
                *x += w + 1;
            }
        };
        put(&mut x, "‹", theme.text_secondary);
        for entry in self.window() {
            match entry {
                None => put(&mut x, "…", theme.text_muted),
                Some(p) if p == self.page + 1 => put(
                    &mut x,
                    &format!("[{p}]"),
                    theme.accent.patch(Style::new().add_modifier(Modifier::BOLD)),
                ),
                Some(p) => put(&mut x, &p.to_string(), theme.text_secondary),
            }
        }
        put(&mut x, "›", theme.text_secondary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;

    #[test]
    fn window_collapses_the_middle() {
        let mut p = Pagination::new(20);
        p.set_page(9);
        let w = p.window();
        assert_eq!(w.first(), Some(&Some(1)));
        assert_eq!(w.last(), Some(&Some(20)));
        assert_eq!(w.iter().filter(|e| e.is_none()).count(), 2);
        assert!(w.contains(&Some(10)));
    }

    #[test]
    fn no_ellipsis_when_everything_fits() {
        let p = Pagination::new(3);
        assert_eq!(p.window(), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn arrows_clamp_at_the_ends() {
        let mut p = Pagination::new(2);
        assert_eq!(p.handle_key(&key(KeyCode::Left)), PaginationAction::None);
        assert_eq!(
            p.handle_key(&key(KeyCode::Right)),
            PaginationAction::PageChanged(1)
        );
        assert_eq!(p.handle_key(&key(KeyCode::Right)), PaginationAction::None);
    }
}
