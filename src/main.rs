//! Guessing Game - Unified CLI
//!
//! Guess-the-number with a terminal UI or a plain console loop.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use guessing_game::{GameConfig, console, tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Tui => tui::run_tui(config).await,
        Command::Console => console::run_console(),
    }
}
