use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyward::constants::{FRAME_INTERVAL_MS, PX_PER_COL, PX_PER_ROW};
use skyward::game::Session;
use skyward::input::{handle_key, InputResult};
use skyward::ui;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("skyward {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - Terminal Flappy-Bird Game\n");
                println!("Usage: skyward\n");
                println!("Keys:");
                println!("  Space/Up/Enter  Flap (starts or restarts a run)");
                println!("  1-3             Choose level (between runs)");
                println!("  q / Esc         Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// The frame loop: draw, poll input for the rest of the frame budget,
/// then advance the simulation with the measured delta time. The session
/// ignores frame advances unless a run is active, so nothing ticks on
/// the start or game-over screens.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut session = Session::new();
    let mut rng = rand::thread_rng();

    let size = terminal.size()?;
    session.resize(size.width as f64 * PX_PER_COL, size.height as f64 * PX_PER_ROW);

    let frame_budget = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &session))?;

        let timeout = frame_budget.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(key, &mut session) == InputResult::Quit {
                        break;
                    }
                }
                Event::Resize(cols, rows) => {
                    session.resize(cols as f64 * PX_PER_COL, rows as f64 * PX_PER_ROW);
                }
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame_budget {
            let dt = last_frame.elapsed().as_secs_f64();
            last_frame = Instant::now();
            session.advance_frame(dt, &mut rng);
        }
    }

    Ok(())
}
