//! Terminal UI for the guessing game

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Intent, intent_for};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::games::guess::RoundId;
use crate::{CelebrationTimer, GameConfig, GameSession};

/// Run the TUI game
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting guessing game TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (expiry_tx, mut expiry_rx) = mpsc::unbounded_channel();
    let session = GameSession::random().with_celebration_delay(config.celebration_delay());
    let mut app = App::new(session, CelebrationTimer::new(expiry_tx));

    let res = run_app(&mut terminal, &mut app, &mut expiry_rx, config.tick()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Guessing game TUI closed");

    res
}

/// Event loop: draw, apply timer expiries, then wait briefly for a key.
#[instrument(skip_all, fields(tick_ms = tick.as_millis()))]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    expiry_rx: &mut mpsc::UnboundedReceiver<RoundId>,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app.session().round()))?;

        while let Ok(round) = expiry_rx.try_recv() {
            app.on_celebration_expired(round);
        }

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}
