//! LIFELENS - Terminal AI Life Analysis
//!
//! A terminal client that captures a few birth details, sends them to a
//! generative-language API, and renders the returned report as cards.
//! The screen flow, the single outbound call, and the best-effort JSON
//! parsing all live behind a small tick-driven event loop.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing_subscriber::EnvFilter;

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{AnalysisPipeline, App, Screen};
use infrastructure::{Config, GeminiClient};
use presentation::{render_ui, InputHandler};

/// How long the event loop waits for input before running a timer tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Entry point for the lifelens terminal application.
///
/// Loads configuration and logging first so a missing API key fails fast
/// with a readable message, then sets up the terminal interface and runs
/// the main event loop until the user quits from the landing page.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("lifelens: {}", err);
            std::process::exit(1);
        }
    };
    init_logging()?;

    let pipeline = AnalysisPipeline::new(GeminiClient::new(&config));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let res = run_app(&mut terminal, &mut app, &pipeline);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Sends diagnostics to `lifelens.log`; stdout belongs to the TUI.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = std::fs::File::create("lifelens.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Main application event loop.
///
/// Draws the UI, advances timers on every tick (marker promotion, prank
/// return, loading-message rotation, worker polling), and dispatches key
/// input. Runs until the user presses 'q' on the landing page.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    pipeline: &AnalysisPipeline,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;
        app.on_tick(Instant::now());

        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if app.view.screen == Screen::Landing => return Ok(()),
                        _ => InputHandler::handle_key_event(app, pipeline, key.code, key.modifiers),
                    }
                }
            }
        }
    }
}
