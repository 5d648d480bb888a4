use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Instant,
};

use stint::{
    layout::LayoutTable,
    runtime::{CrosstermEventSource, FixedTicker, Runner, SessionEvent},
    session::{KeyInput, Session},
    ui::{cell_to_logical, Renderer},
    view,
};

/// minimal study/break countdown tui with an animated progress halo
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A single-screen countdown timer for structured study/break cycles. Durations are configured interactively; click the halo to pause."
)]
pub struct Cli {
    /// render with plain ascii glyphs instead of unicode arrows and braille dots
    #[clap(long)]
    ascii: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, cli.ascii);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, ascii: bool) -> Result<(), Box<dyn Error>> {
    let table = LayoutTable::new();
    let renderer = Renderer::new(ascii);
    let mut session = Session::new(Instant::now());
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    loop {
        match runner.step() {
            SessionEvent::Frame => session.on_frame(Instant::now()),
            SessionEvent::Resize => {}
            SessionEvent::Key(key) => {
                if should_quit(&key) {
                    break;
                }
                if let Some(input) = map_key(&key) {
                    session.handle_key(input, Instant::now());
                }
            }
            SessionEvent::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    let point = cell_to_logical(area, mouse.column, mouse.row);
                    session.handle_click(point, &table, Instant::now());
                }
            }
        }

        let list = view::draw_list(&session, &table);
        terminal.draw(|f| renderer.render(&list, f))?;
    }

    Ok(())
}

fn should_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn map_key(key: &KeyEvent) -> Option<KeyInput> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => Some(KeyInput::Digit(c)),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Enter => Some(KeyInput::Accept),
        _ => None,
    }
}
