//! End-to-end behavior of the floating family: placement contracts,
//! outside-interaction dismissal across stacked panels, and the
//! filter/highlight lifecycle driven through real widgets.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::layout::Size;
use termkit::combobox::Combobox;
use termkit::combobox::ComboboxAction;
use termkit::floating::FloatingStack;
use termkit::floating::LayerKind;
use termkit::geometry;
use termkit::geometry::Placement;
use termkit::input::key;
use termkit::input::key_char;
use termkit::input::InputEvent;
use termkit::input::KeyCode;
use termkit::input::Modifiers;
use termkit::input::MouseButton;
use termkit::input::MouseEvent;
use termkit::input::MouseKind;
use termkit::navigator::Choice;
use termkit::select::Select;
use termkit::select::SelectAction;
use termkit::theme::Theme;
use termkit::tokens::layer;

fn press(code: KeyCode) -> InputEvent {
    InputEvent::Key(key(code))
}

fn type_char(c: char) -> InputEvent {
    InputEvent::Key(key_char(c))
}

fn click(x: u16, y: u16) -> InputEvent {
    InputEvent::Mouse(MouseEvent {
        x,
        y,
        kind: MouseKind::Down(MouseButton::Left),
        modifiers: Modifiers::NONE,
    })
}

#[test]
fn placement_contract_bottom_start_and_top_center() {
    let anchor = Rect::new(20, 10, 10, 2);
    let panel = Size::new(16, 6);

    let pos = geometry::resolve(anchor, panel, Placement::BOTTOM_START, 2);
    assert_eq!(pos.y, anchor.bottom() as i32 + 2);
    assert_eq!(pos.x, anchor.left() as i32);

    let pos = geometry::resolve(anchor, panel, Placement::TOP, 2);
    assert_eq!(pos.y, anchor.top() as i32 - 2 - panel.height as i32);
    let panel_center = pos.x + panel.width as i32 / 2;
    let anchor_center = anchor.left() as i32 + anchor.width as i32 / 2;
    assert!((panel_center - anchor_center).abs() <= 1);
}

#[test]
fn filter_scenario_from_the_option_list() {
    // Options eth/base, filter "bas" → only base remains, highlighted at 0.
    let mut select = Select::searchable(vec![
        Choice::new("eth", "Ethereum"),
        Choice::new("base", "Base"),
    ]);
    select.handle_event(&press(KeyCode::Enter));
    for c in "bas".chars() {
        select.handle_event(&type_char(c));
    }
    assert_eq!(
        select.handle_event(&press(KeyCode::Enter)),
        SelectAction::Changed(1)
    );
    assert_eq!(select.value().unwrap().value, "base");
}

#[test]
fn escape_clears_the_filter_for_the_next_open() {
    let mut combo = Combobox::new(vec![
        Choice::new("eth", "Ethereum"),
        Choice::new("base", "Base"),
        Choice::new("sol", "Solana"),
    ]);
    for c in "zzz".chars() {
        combo.handle_event(&type_char(c));
    }
    assert_eq!(combo.handle_event(&press(KeyCode::Esc)), ComboboxAction::Closed);

    // Re-open: the full unfiltered list is back.
    assert_eq!(combo.handle_event(&press(KeyCode::Down)), ComboboxAction::Opened);
    assert_eq!(combo.query(), "");
    for _ in 0..10 {
        combo.handle_event(&press(KeyCode::Down));
    }
    // Third row is reachable again, so Enter lands on Solana.
    assert_eq!(
        combo.handle_event(&press(KeyCode::Enter)),
        ComboboxAction::Changed(2)
    );
}

#[test]
fn arrow_spam_stays_in_bounds_through_a_widget() {
    let mut select = Select::new(vec![
        Choice::new("a", "Alpha"),
        Choice::new("b", "Beta"),
        Choice::new("c", "Gamma"),
    ]);
    select.handle_event(&press(KeyCode::Enter));
    for _ in 0..50 {
        select.handle_event(&press(KeyCode::Down));
    }
    assert_eq!(
        select.handle_event(&press(KeyCode::Enter)),
        SelectAction::Changed(2),
        "cursor clamped at the last row"
    );

    let mut select = Select::new(vec![Choice::new("a", "Alpha")]);
    select.handle_event(&press(KeyCode::Enter));
    for _ in 0..50 {
        select.handle_event(&press(KeyCode::Up));
    }
    assert!(select.is_open(), "up spam never underflows or closes");
}

#[test]
fn outside_click_closes_an_open_select_exactly_once() {
    let theme = Theme::default();
    let viewport = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(viewport);

    let mut select = Select::new(vec![
        Choice::new("eth", "Ethereum"),
        Choice::new("base", "Base"),
    ]);
    select.render_field(Rect::new(4, 2, 20, 1), &mut buf, &theme, true);
    select.handle_event(&press(KeyCode::Enter));
    select.render_panel(viewport, &mut buf, &theme);

    // Click inside the panel: stays open. Click far away: closes once,
    // then further clicks are no-ops.
    assert_eq!(select.handle_event(&click(6, 5)), SelectAction::None);
    assert!(select.is_open());
    assert_eq!(select.handle_event(&click(70, 20)), SelectAction::Closed);
    assert_eq!(select.handle_event(&click(70, 20)), SelectAction::None);
}

#[test]
fn stacked_panels_dismiss_topmost_first() {
    let mut stack = FloatingStack::new();
    let select_layer = stack.open(
        LayerKind::Panel,
        layer::DROPDOWN,
        Some(Rect::new(0, 0, 10, 1)),
        Rect::new(0, 2, 20, 8),
    );
    let popover_layer = stack.open(
        LayerKind::Panel,
        layer::POPOVER,
        Some(Rect::new(30, 0, 6, 1)),
        Rect::new(28, 2, 16, 6),
    );

    // Escape only touches the most recently opened layer.
    assert_eq!(stack.on_escape(), Some(popover_layer));
    assert!(stack.is_open(select_layer));

    // A click inside the remaining panel keeps it open.
    assert!(stack.on_pointer_down(5, 4).is_empty());
    // A click in the void closes it.
    assert_eq!(stack.on_pointer_down(60, 20), vec![select_layer]);
    assert!(stack.is_empty());
}

#[test]
fn select_panel_renders_below_its_field() {
    let theme = Theme::default();
    let viewport = Rect::new(0, 0, 60, 20);
    let mut buf = Buffer::empty(viewport);

    let mut select = Select::new(vec![
        Choice::new("eth", "Ethereum"),
        Choice::new("base", "Base"),
    ]);
    select.render_field(Rect::new(2, 3, 24, 1), &mut buf, &theme, true);
    select.handle_event(&press(KeyCode::Enter));
    select.handle_event(&press(KeyCode::Down));
    select.render_panel(viewport, &mut buf, &theme);

    // Panel top border sits one row below the field (offset 1).
    assert_eq!(buf[(2, 5)].symbol(), "╭");
    // First option row carries the label.
    let row: String = (3..20).map(|x| buf[(x, 6)].symbol().to_string()).collect();
    assert!(row.contains("Ethereum"), "panel row was {row:?}");
}
