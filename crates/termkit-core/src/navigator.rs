//! Keyboard navigation over a filterable option list.
//!
//! [`ListNav`] is the single state machine behind the dropdown, select,
//! combobox, and command-palette panels: closed / open-without-highlight /
//! open-with-highlight, arrow movement clamped to the filtered bounds,
//! Enter to commit, Escape to close and clear the filter.

use crate::input::KeyCode;
use crate::input::KeyEvent;

/// A selectable entry: value committed to the caller, label shown to the
/// user, optional group header key, and a disabled flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub group: Option<String>,
    pub disabled: bool,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            group: None,
            disabled: false,
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Which fields the query is matched against, case-insensitively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Label only (combobox).
    #[default]
    Label,
    /// Label or value (searchable select).
    LabelAndValue,
}

impl FilterMode {
    fn matches(self, choice: &Choice, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(needle);
        match self {
            FilterMode::Label => hit(&choice.label),
            FilterMode::LabelAndValue => hit(&choice.label) || hit(&choice.value),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NavOptions {
    pub filter: FilterMode,
    /// Arrow movement skips disabled rows. Disable to let the cursor rest
    /// on them (commit still refuses either way).
    pub skip_disabled: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            filter: FilterMode::default(),
            skip_disabled: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    OpenIdle,
    /// Index into the filtered list, always within `[0, len - 1]`.
    Highlighted(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    None,
    Opened,
    Closed,
    /// Highlight moved to this filtered index.
    Moved(usize),
    /// Committed the item at this index into the *unfiltered* list.
    Committed(usize),
    /// The query changed; the filtered list was rebuilt.
    FilterEdited,
}

#[derive(Clone, Debug, Default)]
pub struct ListNav {
    items: Vec<Choice>,
    options: NavOptions,
    state: NavState,
    query: String,
    filtered: Vec<usize>,
}

impl ListNav {
    pub fn new(items: Vec<Choice>) -> Self {
        Self::with_options(items, NavOptions::default())
    }

    pub fn with_options(items: Vec<Choice>, options: NavOptions) -> Self {
        let mut nav = Self {
            items,
            options,
            state: NavState::Closed,
            query: String::new(),
            filtered: Vec::new(),
        };
        nav.refilter();
        nav
    }

    pub fn items(&self) -> &[Choice] {
        &self.items
    }

    /// Replaces the option list, re-filters, and drops an out-of-range
    /// highlight back to the top.
    pub fn set_items(&mut self, items: Vec<Choice>) {
        self.items = items;
        self.refilter();
        if let NavState::Highlighted(i) = self.state {
            if i >= self.filtered.len() {
                self.state = self.reset_highlight();
            }
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != NavState::Closed
    }

    /// Highlighted index into the filtered list.
    pub fn highlight(&self) -> Option<usize> {
        match self.state {
            NavState::Highlighted(i) => Some(i),
            _ => None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Indices into [`Self::items`] surviving the current filter, in item
    /// order.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The choice at `filtered_index`.
    pub fn choice_at(&self, filtered_index: usize) -> Option<&Choice> {
        self.filtered
            .get(filtered_index)
            .and_then(|&i| self.items.get(i))
    }

    /// Opens the panel without highlighting anything.
    pub fn open(&mut self) -> NavAction {
        if self.is_open() {
            return NavAction::None;
        }
        self.state = NavState::OpenIdle;
        NavAction::Opened
    }

    /// Drops the highlight onto the first row of the filtered list, for
    /// panels where Enter should always take the top result.
    pub fn highlight_first(&mut self) -> NavAction {
        if !self.is_open() {
            return NavAction::None;
        }
        let next = self.reset_highlight();
        if next == self.state {
            return NavAction::None;
        }
        self.state = next;
        match next {
            NavState::Highlighted(i) => NavAction::Moved(i),
            _ => NavAction::None,
        }
    }

    /// Closes the panel and clears the query, so the next open shows the
    /// full list.
    pub fn close(&mut self) -> NavAction {
        if !self.is_open() {
            return NavAction::None;
        }
        self.state = NavState::Closed;
        self.clear_query();
        NavAction::Closed
    }

    /// Moves the highlight by `delta`, clamped to the filtered bounds;
    /// never wraps. From the idle state a downward step lands on the first
    /// selectable row.
    pub fn step(&mut self, delta: i32) -> NavAction {
        if !self.is_open() || self.filtered.is_empty() {
            return NavAction::None;
        }
        let last = self.filtered.len() - 1;
        let next = match self.state {
            NavState::Highlighted(cur) => self.seek(cur as i64, delta, last),
            NavState::OpenIdle if delta > 0 => self.seek(-1, delta, last),
            _ => None,
        };
        match next {
            Some(i) if self.state != NavState::Highlighted(i) => {
                self.state = NavState::Highlighted(i);
                NavAction::Moved(i)
            }
            _ => NavAction::None,
        }
    }

    /// Commits the highlighted row if it is enabled. Returns the index into
    /// the unfiltered list and resets to closed with an empty query.
    pub fn commit(&mut self) -> NavAction {
        let NavState::Highlighted(i) = self.state else {
            return NavAction::None;
        };
        let Some(&item_index) = self.filtered.get(i) else {
            return NavAction::None;
        };
        if self.items[item_index].disabled {
            return NavAction::None;
        }
        self.state = NavState::Closed;
        self.clear_query();
        NavAction::Committed(item_index)
    }

    /// Appends to the query and re-filters; the highlight resets to the top
    /// of the new filtered list.
    pub fn push_query(&mut self, c: char) -> NavAction {
        self.query.push(c);
        self.refilter();
        if self.is_open() {
            self.state = self.reset_highlight();
        }
        NavAction::FilterEdited
    }

    pub fn pop_query(&mut self) -> NavAction {
        if self.query.pop().is_none() {
            return NavAction::None;
        }
        self.refilter();
        if self.is_open() {
            self.state = self.reset_highlight();
        }
        NavAction::FilterEdited
    }

    /// Drives the machine from a key event, implementing the transition
    /// table shared by every option panel. Text keys edit the query; pass
    /// `accept_text = false` for panels without a search box (dropdown
    /// menus), which leaves characters to the caller.
    pub fn handle_key(&mut self, key: &KeyEvent, accept_text: bool) -> NavAction {
        if !self.is_open() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => self.open(),
                _ => NavAction::None,
            };
        }
        match key.code {
            KeyCode::Down => self.step(1),
            KeyCode::Up => self.step(-1),
            KeyCode::Enter => self.commit(),
            KeyCode::Esc => self.close(),
            KeyCode::Backspace if accept_text => self.pop_query(),
            _ => match key.text_char() {
                Some(c) if accept_text => self.push_query(c),
                _ => NavAction::None,
            },
        }
    }

    fn seek(&self, from: i64, delta: i32, last: usize) -> Option<usize> {
        let step = if delta > 0 { 1i64 } else { -1i64 };
        let mut remaining = delta.unsigned_abs();
        let mut cur = from;
        let mut landed = None;
        while remaining > 0 {
            let mut next = cur + step;
            if self.options.skip_disabled {
                while (0..=last as i64).contains(&next) && self.is_disabled(next as usize) {
                    next += step;
                }
            }
            if !(0..=last as i64).contains(&next) {
                break;
            }
            cur = next;
            landed = Some(cur as usize);
            remaining -= 1;
        }
        // Clamped movement may end where it started; a fresh landing spot
        // is only reported when one was reached.
        landed.or_else(|| {
            if self.options.skip_disabled {
                None
            } else {
                Some((from + step as i64).clamp(0, last as i64) as usize)
            }
        })
    }

    fn is_disabled(&self, filtered_index: usize) -> bool {
        self.choice_at(filtered_index).is_some_and(|c| c.disabled)
    }

    fn reset_highlight(&self) -> NavState {
        if self.filtered.is_empty() {
            NavState::OpenIdle
        } else {
            NavState::Highlighted(0)
        }
    }

    fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, c)| self.options.filter.matches(c, &needle))
            .map(|(i, _)| i)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::key;
    use crate::input::key_char;

    fn coins() -> Vec<Choice> {
        vec![
            Choice::new("eth", "Ethereum"),
            Choice::new("base", "Base"),
            Choice::new("sol", "Solana"),
        ]
    }

    fn open_nav(items: Vec<Choice>) -> ListNav {
        let mut nav = ListNav::new(items);
        nav.open();
        nav
    }

    #[test]
    fn closed_opens_on_enter_space_or_down() {
        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Down] {
            let mut nav = ListNav::new(coins());
            assert_eq!(nav.handle_key(&key(code), true), NavAction::Opened);
            assert_eq!(nav.state(), NavState::OpenIdle);
        }
    }

    #[test]
    fn two_downs_from_idle_land_on_index_one() {
        let mut nav = open_nav(coins());
        assert_eq!(nav.handle_key(&key(KeyCode::Down), true), NavAction::Moved(0));
        assert_eq!(nav.handle_key(&key(KeyCode::Down), true), NavAction::Moved(1));
    }

    #[test]
    fn arrows_clamp_at_both_ends() {
        let mut nav = open_nav(coins());
        for _ in 0..10 {
            nav.handle_key(&key(KeyCode::Down), true);
        }
        assert_eq!(nav.highlight(), Some(2));
        for _ in 0..10 {
            nav.handle_key(&key(KeyCode::Up), true);
        }
        assert_eq!(nav.highlight(), Some(0));
    }

    #[test]
    fn filter_narrows_and_resets_highlight() {
        let mut nav = open_nav(coins());
        nav.handle_key(&key(KeyCode::Down), true);
        nav.handle_key(&key(KeyCode::Down), true);
        for c in "bas".chars() {
            assert_eq!(nav.handle_key(&key_char(c), true), NavAction::FilterEdited);
        }
        assert_eq!(nav.filtered_len(), 1);
        assert_eq!(nav.choice_at(0).unwrap().value, "base");
        assert_eq!(nav.highlight(), Some(0));
    }

    #[test]
    fn zero_match_filter_is_inert_but_sound() {
        let mut nav = open_nav(coins());
        for c in "zzz".chars() {
            nav.handle_key(&key_char(c), true);
        }
        assert_eq!(nav.filtered_len(), 0);
        assert_eq!(nav.state(), NavState::OpenIdle);
        assert_eq!(nav.handle_key(&key(KeyCode::Down), true), NavAction::None);
        assert_eq!(nav.handle_key(&key(KeyCode::Enter), true), NavAction::None);
    }

    #[test]
    fn commit_returns_unfiltered_index_and_clears_query() {
        let mut nav = open_nav(coins());
        for c in "bas".chars() {
            nav.handle_key(&key_char(c), true);
        }
        assert_eq!(nav.handle_key(&key(KeyCode::Enter), true), NavAction::Committed(1));
        assert_eq!(nav.state(), NavState::Closed);
        assert_eq!(nav.query(), "");
        // Re-open: the full list is back.
        nav.open();
        assert_eq!(nav.filtered_len(), 3);
    }

    #[test]
    fn escape_closes_and_clears_the_filter() {
        let mut nav = open_nav(coins());
        for c in "eth".chars() {
            nav.handle_key(&key_char(c), true);
        }
        assert_eq!(nav.handle_key(&key(KeyCode::Esc), true), NavAction::Closed);
        assert_eq!(nav.query(), "");
        nav.open();
        assert_eq!(nav.filtered_len(), 3);
    }

    #[test]
    fn disabled_rows_are_skipped_in_traversal() {
        let items = vec![
            Choice::new("a", "Alpha"),
            Choice::new("b", "Beta").disabled(true),
            Choice::new("c", "Gamma"),
        ];
        let mut nav = open_nav(items);
        nav.handle_key(&key(KeyCode::Down), true);
        assert_eq!(nav.highlight(), Some(0));
        nav.handle_key(&key(KeyCode::Down), true);
        assert_eq!(nav.highlight(), Some(2), "skipped the disabled row");
        nav.handle_key(&key(KeyCode::Up), true);
        assert_eq!(nav.highlight(), Some(0));
    }

    #[test]
    fn legacy_mode_rests_on_disabled_but_refuses_commit() {
        let items = vec![
            Choice::new("a", "Alpha"),
            Choice::new("b", "Beta").disabled(true),
        ];
        let mut nav = ListNav::with_options(
            items,
            NavOptions {
                skip_disabled: false,
                ..NavOptions::default()
            },
        );
        nav.open();
        nav.handle_key(&key(KeyCode::Down), true);
        nav.handle_key(&key(KeyCode::Down), true);
        assert_eq!(nav.highlight(), Some(1));
        assert_eq!(nav.handle_key(&key(KeyCode::Enter), true), NavAction::None);
        assert!(nav.is_open());
    }

    #[test]
    fn searchable_mode_matches_values_too() {
        let mut nav = ListNav::with_options(
            coins(),
            NavOptions {
                filter: FilterMode::LabelAndValue,
                ..NavOptions::default()
            },
        );
        nav.open();
        for c in "sol".chars() {
            nav.push_query(c);
        }
        assert_eq!(nav.filtered_len(), 1);
        assert_eq!(nav.choice_at(0).unwrap().label, "Solana");
    }

    #[test]
    fn menu_mode_leaves_characters_to_the_caller() {
        let mut nav = open_nav(coins());
        assert_eq!(nav.handle_key(&key_char('x'), false), NavAction::None);
        assert_eq!(nav.query(), "");
    }

    #[test]
    fn set_items_clamps_a_stale_highlight() {
        let mut nav = open_nav(coins());
        nav.handle_key(&key(KeyCode::Down), true);
        nav.handle_key(&key(KeyCode::Down), true);
        nav.handle_key(&key(KeyCode::Down), true);
        assert_eq!(nav.highlight(), Some(2));
        nav.set_items(vec![Choice::new("one", "One")]);
        assert_eq!(nav.highlight(), Some(0));
    }
}
