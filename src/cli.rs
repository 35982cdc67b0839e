//! Command-line interface for guessing_game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Guessing Game - find the secret number between 1 and 100 in ten tries
#[derive(Parser, Debug)]
#[command(name = "guessing_game")]
#[command(about = "Guess the secret number between 1 and 100 in ten tries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "guessing_game.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Play in the terminal UI
    #[default]
    Tui,

    /// Play line by line on stdin and stdout
    Console,
}
