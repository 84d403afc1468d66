use chrono::Datelike;
use chrono::Days;
use chrono::Months;
use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::layout::Size;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use termkit_core::floating::OutsideDismiss;
use termkit_core::geometry;
use termkit_core::geometry::Placement;
use termkit_core::input::InputEvent;
use termkit_core::input::KeyCode;
use termkit_core::render;
use termkit_core::theme::Theme;
use termkit_core::tokens::spacing;

const WEEKDAYS: &str = "Su Mo Tu We Th Fr Sa";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePickerAction {
    None,
    Opened,
    Closed,
    Picked(NaiveDate),
}

/// Anchored month-grid calendar. Arrows move by day and week, PageUp and
/// PageDown by month, Enter commits, Escape closes. Dates outside the
/// min/max window or in the explicit disabled set refuse the cursor the
/// same way disabled list rows refuse the highlight.
#[derive(Clone, Debug)]
pub struct DatePicker {
    open: bool,
    cursor: NaiveDate,
    value: Option<NaiveDate>,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
    disabled_dates: Vec<NaiveDate>,
    placement: Placement,
    offset: u16,
    anchor: Option<Rect>,
    panel: Option<Rect>,
}

impl DatePicker {
    pub fn new(initial: NaiveDate) -> Self {
        Self {
            open: false,
            cursor: initial,
            value: None,
            min: None,
            max: None,
            disabled_dates: Vec::new(),
            placement: Placement::BOTTOM_START,
            offset: spacing::FLOATING_OFFSET,
            anchor: None,
            panel: None,
        }
    }

    /// Starts on the local calendar's current date.
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn min(mut self, min: NaiveDate) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: NaiveDate) -> Self {
        self.max = Some(max);
        self
    }

    pub fn disable_dates(mut self, dates: Vec<NaiveDate>) -> Self {
        self.disabled_dates = dates;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn set_value(&mut self, value: Option<NaiveDate>) {
        self.value = value;
        if let Some(v) = value {
            self.cursor = v;
        }
    }

    pub fn set_anchor(&mut self, anchor: Option<Rect>) {
        self.anchor = anchor;
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        if self.min.is_some_and(|min| date < min) {
            return true;
        }
        if self.max.is_some_and(|max| date > max) {
            return true;
        }
        self.disabled_dates.contains(&date)
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> DatePickerAction {
        match event {
            InputEvent::Key(k) => {
                if !self.open {
                    return match k.code {
                        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                            self.open = true;
                            DatePickerAction::Opened
                        }
                        _ => DatePickerAction::None,
                    };
                }
                match k.code {
                    KeyCode::Left => self.step_days(-1),
                    KeyCode::Right => self.step_days(1),
                    KeyCode::Up => self.step_days(-7),
                    KeyCode::Down => self.step_days(7),
                    KeyCode::PageUp => self.step_months(-1),
                    KeyCode::PageDown => self.step_months(1),
                    KeyCode::Enter => {
                        if self.is_disabled(self.cursor) {
                            DatePickerAction::None
                        } else {
                            self.value = Some(self.cursor);
                            self.close();
                            DatePickerAction::Picked(self.cursor)
                        }
                    }
                    KeyCode::Esc => {
                        self.close();
                        DatePickerAction::Closed
                    }
                    _ => DatePickerAction::None,
                }
            }
            InputEvent::Mouse(m) if m.is_down() => {
                if let Some(anchor) = self.anchor {
                    if anchor.contains(ratatui::layout::Position::new(m.x, m.y)) {
                        return if self.open {
                            self.close();
                            DatePickerAction::Closed
                        } else {
                            self.open = true;
                            DatePickerAction::Opened
                        };
                    }
                }
                if self.open {
                    let watcher = OutsideDismiss::new(self.anchor, self.panel.unwrap_or_default());
                    if watcher.should_dismiss(event) {
                        self.close();
                        return DatePickerAction::Closed;
                    }
                }
                DatePickerAction::None
            }
            _ => DatePickerAction::None,
        }
    }

    fn close(&mut self) {
        self.open = false;
        self.panel = None;
    }

    /// Moves the cursor, stepping over explicitly disabled dates in the
    /// travel direction and refusing to leave the min/max window.
    fn step_days(&mut self, days: i64) -> DatePickerAction {
        let dir = days.signum();
        let Some(mut candidate) = add_days(self.cursor, days) else {
            return DatePickerAction::None;
        };
        while self.disabled_dates.contains(&candidate) {
            match add_days(candidate, dir) {
                Some(next) => candidate = next,
                None => return DatePickerAction::None,
            }
        }
        if self.min.is_some_and(|min| candidate < min)
            || self.max.is_some_and(|max| candidate > max)
        {
            return DatePickerAction::None;
        }
        self.cursor = candidate;
        DatePickerAction::None
    }

    fn step_months(&mut self, months: i32) -> DatePickerAction {
        let candidate = if months >= 0 {
            self.cursor.checked_add_months(Months::new(months as u32))
        } else {
            self.cursor.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(candidate) = candidate {
            if self.min.is_some_and(|min| candidate < min)
                || self.max.is_some_and(|max| candidate > max)
            {
                return DatePickerAction::None;
            }
            self.cursor = candidate;
        }
        DatePickerAction::None
    }

    /// Field row showing the committed date (`MM/DD/YYYY`) or a placeholder.
    pub fn render_field(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        self.anchor = Some(Rect::new(area.x, area.y, area.width, 1));
        let chrome = if focused || self.open {
            theme.focus
        } else {
            theme.border
        };
        render::line(buf, area.x, area.y, 1, "▏", chrome);
        let text_w = area.width.saturating_sub(3);
        let (text, style) = match self.value {
            Some(date) => (date.format("%m/%d/%Y").to_string(), theme.text_primary),
            None => ("Pick a date".to_string(), theme.text_muted),
        };
        render::line(
            buf,
            area.x + 1,
            area.y,
            text_w,
            &render::truncate(&text, text_w),
            style,
        );
        render::line(buf, area.right() - 1, area.y, 1, "▦", chrome);
    }

    pub fn render_panel(&mut self, viewport: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.open {
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };
        let size = Size::new(24, 11);
        let position = geometry::resolve(anchor, size, self.placement, self.offset);
        let Some(panel) = position.rect(size, viewport) else {
            self.panel = None;
            return;
        };
        self.panel = Some(panel);

        buf.set_style(panel, theme.surface_raised);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_strong)
            .render(panel, buf);
        let inner = Rect::new(
            panel.x + 1,
            panel.y + 1,
            panel.width.saturating_sub(2),
            panel.height.saturating_sub(2),
        );
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let header = self.cursor.format("%B %Y").to_string();
        let header_w = render::display_width(&header).min(inner.width);
        render::line(
            buf,
            inner.x + (inner.width - header_w) / 2,
            inner.y,
            header_w,
            &header,
            theme.text_primary.patch(Style::new().add_modifier(Modifier::BOLD)),
        );
        render::line(buf, inner.x + 1, inner.y + 1, inner.width, WEEKDAYS, theme.text_muted);

        let first = self.cursor.with_day(1).unwrap_or(self.cursor);
        let lead = first.weekday().num_days_from_sunday() as u16;
        let days = days_in_month(first);
        for day in 1..=days {
            let date = first.with_day(day as u32).unwrap_or(first);
            let slot = lead + day - 1;
            let row = slot / 7;
            let col = slot % 7;
            let x = inner.x + col * 3;
            let y = inner.y + 2 + row;
            if y >= inner.bottom() {
                break;
            }
            let mut style = if self.is_disabled(date) {
                theme.text_disabled
            } else {
                theme.text_primary
            };
            if self.value == Some(date) {
                style = style.patch(theme.accent).patch(Style::new().add_modifier(Modifier::BOLD));
            }
            if date == self.cursor {
                style = style.patch(theme.highlight);
            }
            render::line(buf, x, y, 3, &format!("{day:>3}"), style);
        }
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

fn days_in_month(first: NaiveDate) -> u16 {
    let next = first
        .checked_add_months(Months::new(1))
        .unwrap_or(first);
    next.signed_duration_since(first).num_days() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use termkit_core::input::key;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_picker(initial: NaiveDate) -> DatePicker {
        let mut p = DatePicker::new(initial);
        p.handle_event(&InputEvent::Key(key(KeyCode::Enter)));
        p
    }

    #[test]
    fn arrows_move_by_day_and_week() {
        let mut p = open_picker(date(2026, 8, 12));
        p.handle_event(&InputEvent::Key(key(KeyCode::Right)));
        assert_eq!(p.cursor(), date(2026, 8, 13));
        p.handle_event(&InputEvent::Key(key(KeyCode::Down)));
        assert_eq!(p.cursor(), date(2026, 8, 20));
        p.handle_event(&InputEvent::Key(key(KeyCode::Up)));
        p.handle_event(&InputEvent::Key(key(KeyCode::Left)));
        assert_eq!(p.cursor(), date(2026, 8, 12));
    }

    #[test]
    fn page_keys_move_by_month_across_year_ends() {
        let mut p = open_picker(date(2026, 12, 15));
        p.handle_event(&InputEvent::Key(key(KeyCode::PageDown)));
        assert_eq!(p.cursor(), date(2027, 1, 15));
        p.handle_event(&InputEvent::Key(key(KeyCode::PageUp)));
        assert_eq!(p.cursor(), date(2026, 12, 15));
    }

    #[test]
    fn min_max_clamp_the_cursor() {
        let mut p = DatePicker::new(date(2026, 8, 1)).min(date(2026, 8, 1)).max(date(2026, 8, 3));
        p.handle_event(&InputEvent::Key(key(KeyCode::Enter)));
        p.handle_event(&InputEvent::Key(key(KeyCode::Left)));
        assert_eq!(p.cursor(), date(2026, 8, 1), "cannot cross min");
        for _ in 0..5 {
            p.handle_event(&InputEvent::Key(key(KeyCode::Right)));
        }
        assert_eq!(p.cursor(), date(2026, 8, 3), "cannot cross max");
    }

    #[test]
    fn explicitly_disabled_dates_are_stepped_over() {
        let mut p = DatePicker::new(date(2026, 8, 10)).disable_dates(vec![date(2026, 8, 11)]);
        p.handle_event(&InputEvent::Key(key(KeyCode::Enter)));
        p.handle_event(&InputEvent::Key(key(KeyCode::Right)));
        assert_eq!(p.cursor(), date(2026, 8, 12));
    }

    #[test]
    fn enter_commits_only_enabled_dates() {
        let mut p = DatePicker::new(date(2026, 8, 10)).min(date(2026, 9, 1));
        p.handle_event(&InputEvent::Key(key(KeyCode::Enter)));
        assert_eq!(
            p.handle_event(&InputEvent::Key(key(KeyCode::Enter))),
            DatePickerAction::None,
            "cursor starts below min and cannot be committed"
        );
        assert!(p.is_open());
    }

    #[test]
    fn escape_closes_without_committing() {
        let mut p = open_picker(date(2026, 8, 12));
        assert_eq!(
            p.handle_event(&InputEvent::Key(key(KeyCode::Esc))),
            DatePickerAction::Closed
        );
        assert_eq!(p.value(), None);
    }
}
