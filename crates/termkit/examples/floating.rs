use std::io;
use std::time::Duration;
use std::time::Instant;

use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use termkit::combobox::Combobox;
use termkit::command_palette::Command;
use termkit::command_palette::CommandPalette;
use termkit::command_palette::PaletteAction;
use termkit::crossterm_input::input_event_from_crossterm;
use termkit::date_picker::DatePicker;
use termkit::dropdown::Dropdown;
use termkit::dropdown::MenuEntry;
use termkit::dropdown::MenuItem;
use termkit::input::InputEvent;
use termkit::input::KeyCode;
use termkit::navigator::Choice;
use termkit::render;
use termkit::select::Select;
use termkit::theme::Theme;
use termkit::toast::Toast;
use termkit::toast::Toasts;
use termkit::variant::Tone;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, crossterm::event::EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
) -> io::Result<()> {
    let theme = Theme::default();

    let mut select = Select::searchable(vec![
        Choice::new("eth", "Ethereum"),
        Choice::new("base", "Base"),
        Choice::new("sol", "Solana"),
        Choice::new("arb", "Arbitrum").disabled(true),
    ]);
    let mut combo = Combobox::new(vec![
        Choice::new("usdc", "USD Coin").group("Stablecoins"),
        Choice::new("dai", "Dai").group("Stablecoins"),
        Choice::new("eth", "Ether").group("Gas"),
    ]);
    let mut menu = Dropdown::new(vec![
        MenuEntry::Item(MenuItem::new("Copy address")),
        MenuEntry::Item(MenuItem::new("Rename wallet")),
        MenuEntry::Separator,
        MenuEntry::Item(MenuItem::new("Disconnect").danger(true)),
    ]);
    let mut picker = DatePicker::today();
    let mut palette = CommandPalette::new(vec![
        Command::new("toast.success", "Show a success toast").category("Demo"),
        Command::new("toast.error", "Show an error toast").category("Demo"),
        Command::new("quit", "Quit").category("App"),
    ]);
    let mut toasts = Toasts::new();

    // Tab cycles which widget receives the keyboard.
    let mut focus = 0usize;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();

            let labels = ["Select", "Combobox", "Dropdown", "DatePicker"];
            render::line(
                buf,
                2,
                1,
                area.width - 4,
                &format!(
                    "focus: {}  (Tab to move, Ctrl+K palette, q quits)",
                    labels[focus]
                ),
                theme.text_muted,
            );

            select.render_field(Rect::new(2, 3, 24, 1), buf, &theme, focus == 0);
            combo.render_field(Rect::new(30, 3, 24, 1), buf, &theme, focus == 1);
            render::line(buf, 58, 3, 10, "[ menu ▾ ]", theme.text_primary);
            menu.set_anchor(Some(Rect::new(58, 3, 10, 1)));
            picker.render_field(Rect::new(2, 7, 24, 1), buf, &theme, focus == 3);

            select.render_panel(area, buf, &theme);
            combo.render_panel(area, buf, &theme);
            menu.render_panel(area, buf, &theme);
            picker.render_panel(area, buf, &theme);
            palette.render(area, buf, &theme);
            toasts.render(area, buf, &theme);
        })?;

        let elapsed = last_tick.elapsed();
        last_tick = Instant::now();
        toasts.tick(elapsed);

        if crossterm::event::poll(Duration::from_millis(50))? {
            let raw = crossterm::event::read()?;
            let Some(event) = input_event_from_crossterm(raw) else {
                continue;
            };

            if let InputEvent::Key(k) = &event {
                let any_open = select.is_open()
                    || combo.is_open()
                    || menu.is_open()
                    || picker.is_open()
                    || palette.is_open();
                match k.code {
                    KeyCode::Char('q') if !any_open => return Ok(()),
                    KeyCode::Tab if !any_open => {
                        focus = (focus + 1) % 4;
                        continue;
                    }
                    _ => {}
                }
            }

            match palette.handle_event(&event) {
                PaletteAction::Executed(id) => {
                    match id.as_str() {
                        "toast.success" => toasts.push(
                            Toast::new("Transaction confirmed").tone(Tone::Success),
                        ),
                        "toast.error" => {
                            toasts.push(Toast::new("Transaction failed").tone(Tone::Danger))
                        }
                        "quit" => return Ok(()),
                        _ => {}
                    }
                    continue;
                }
                PaletteAction::Opened | PaletteAction::Closed => continue,
                PaletteAction::None if palette.is_open() => continue,
                PaletteAction::None => {}
            }

            match focus {
                0 => {
                    select.handle_event(&event);
                }
                1 => {
                    combo.handle_event(&event);
                }
                2 => {
                    menu.handle_event(&event);
                }
                _ => {
                    picker.handle_event(&event);
                }
            }
        }
    }
}
