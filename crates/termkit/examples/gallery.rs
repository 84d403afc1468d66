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
use termkit::alert::Alert;
use termkit::avatar::Avatar;
use termkit::avatar::AvatarStatus;
use termkit::badge::Badge;
use termkit::badge::BadgeVariant;
use termkit::breadcrumb::Breadcrumb;
use termkit::button::Button;
use termkit::button::ButtonVariant;
use termkit::card::Card;
use termkit::chart::Bar;
use termkit::chart::BarChart;
use termkit::chart::Sparkline;
use termkit::crossterm_input::input_event_from_crossterm;
use termkit::divider::Divider;
use termkit::input::InputEvent;
use termkit::input::KeyCode;
use termkit::metric::MetricCard;
use termkit::progress::ProgressBar;
use termkit::skeleton::Skeleton;
use termkit::spinner::Spinner;
use termkit::stepper::Stepper;
use termkit::tabs::Tab;
use termkit::tabs::Tabs;
use termkit::theme::Theme;
use termkit::timeline::Timeline;
use termkit::timeline::TimelineEntry;
use termkit::tokens::Agent;
use termkit::variant::Size;
use termkit::variant::Tone;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
) -> io::Result<()> {
    // Cycle agents with `a` to see the accent re-tint everything.
    let mut agent_index = 0usize;
    let mut tabs = Tabs::new(vec![
        Tab::new("Overview"),
        Tab::new("Activity"),
        Tab::new("Settings").disabled(true),
        Tab::new("Help"),
    ]);
    let mut spinner = Spinner::new().label("syncing chain head");
    let mut skeleton = Skeleton::new(3);
    let mut stepper = Stepper::new(vec!["Connect".into(), "Review".into(), "Sign".into()]);
    stepper.advance();
    let mut progress = 0.0f64;
    let mut last_tick = Instant::now();

    loop {
        let agent = Agent::ALL[agent_index];
        let theme = Theme::agent(agent);

        terminal.draw(|f| {
            let area = f.area();
            let buf = f.buffer_mut();

            Breadcrumb::new(vec![
                "home".into(),
                "wallets".into(),
                "ethereum".into(),
                "activity".into(),
            ])
            .render(Rect::new(2, 0, area.width.saturating_sub(4), 1), buf, &theme);

            tabs.render(Rect::new(2, 2, area.width.saturating_sub(4), 2), buf, &theme);

            let card = Card::new()
                .title(format!("Portfolio · {}", agent.name()))
                .footer("a: agent · ←/→: tabs · q: quit");
            let body = card.render(Rect::new(2, 5, 46, 12), buf, &theme);

            Avatar::new("Ada Lovelace")
                .agent(agent)
                .status(AvatarStatus::Online)
                .render(Rect::new(body.x, body.y, 5, 1), buf, &theme);
            Badge::new("mainnet")
                .tone(Tone::Success)
                .variant(BadgeVariant::Soft)
                .dot(true)
                .render(Rect::new(body.x + 7, body.y, 14, 1), buf, &theme);

            Divider::new()
                .label("balances")
                .render(Rect::new(body.x, body.y + 1, body.width, 1), buf, &theme);

            BarChart::new(vec![
                Bar::new("ETH", 42.0),
                Bar::new("USDC", 128.0),
                Bar::new("DAI", 61.0),
            ])
            .render(Rect::new(body.x, body.y + 2, body.width, 3), buf, &theme);

            ProgressBar::new(progress)
                .label("epoch")
                .tone(Tone::Info)
                .show_percent(true)
                .render(Rect::new(body.x, body.y + 6, body.width, 1), buf, &theme);
            spinner.render(Rect::new(body.x, body.y + 7, body.width, 1), buf, &theme);
            stepper.render(Rect::new(body.x, body.y + 8, body.width, 1), buf, &theme);

            MetricCard::new("Net worth", "$12,480.22")
                .delta(3.4)
                .spark(vec![9.0, 12.0, 11.0, 14.0, 13.0, 17.0, 19.0])
                .render(Rect::new(50, 5, 28, 7), buf, &theme);

            Alert::new("Gas fees are unusually high right now.")
                .title("Network notice")
                .tone(Tone::Warning)
                .render(Rect::new(50, 13, 28, 4), buf, &theme);

            Timeline::new(vec![
                TimelineEntry::new("09:12", "Wallet connected").tone(Tone::Success),
                TimelineEntry::new("09:15", "Swap submitted").tone(Tone::Info),
                TimelineEntry::new("09:16", "Swap reverted").tone(Tone::Danger),
            ])
            .render(Rect::new(2, 18, 44, 3), buf, &theme);

            skeleton.render(Rect::new(50, 18, 28, 3), buf, &theme);

            Sparkline::new((0..30).map(|i| ((i as f64) * 0.7).sin() + 1.0).collect())
                .tone(Tone::Info)
                .render(
                    Rect::new(2, area.height.saturating_sub(2), 40, 1),
                    buf,
                    &theme,
                );

            let demo_button = Button::new("Send")
                .variant(ButtonVariant::Primary)
                .size(Size::Md);
            demo_button.render(
                Rect::new(50, area.height.saturating_sub(2), demo_button.width(), 1),
                buf,
                &theme,
                true,
            );
        })?;

        let elapsed = last_tick.elapsed();
        last_tick = Instant::now();
        spinner.tick(elapsed);
        skeleton.tick(elapsed);
        progress = (progress + elapsed.as_secs_f64() / 20.0).min(1.0);

        if crossterm::event::poll(Duration::from_millis(50))? {
            let raw = crossterm::event::read()?;
            let Some(event) = input_event_from_crossterm(raw) else {
                continue;
            };
            if let InputEvent::Key(k) = &event {
                match k.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('a') => {
                        agent_index = (agent_index + 1) % Agent::ALL.len();
                    }
                    _ => {
                        tabs.handle_key(k);
                    }
                }
            }
        }
    }
}
