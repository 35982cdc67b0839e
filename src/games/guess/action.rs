//! Guess submissions and the errors that reject them.
//!
//! A guess is parsed from raw input before it touches the round, so a
//! rejected submission can never consume an attempt.

use super::{MAX_GUESS, MIN_GUESS};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Feedback shown for any input that is not a whole number in range.
pub const INVALID_GUESS_MESSAGE: &str = "Please enter a valid number between 1 and 100";

/// A validated guess within `MIN_GUESS..=MAX_GUESS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Guess(u8);

impl Guess {
    /// Parses raw input into a guess.
    ///
    /// Surrounding whitespace is ignored. Anything else that is not an
    /// integer in range is rejected.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, GuessError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(GuessError::Empty);
        }

        let value: i64 = trimmed
            .parse()
            .map_err(|_| GuessError::NotANumber(trimmed.to_string()))?;

        if !(i64::from(MIN_GUESS)..=i64::from(MAX_GUESS)).contains(&value) {
            return Err(GuessError::OutOfRange(value));
        }

        u8::try_from(value)
            .map(Self)
            .map_err(|_| GuessError::OutOfRange(value))
    }

    /// Returns the guessed value.
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Reason a submission was not counted as an attempt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Nothing but whitespace was entered.
    #[display("{}", INVALID_GUESS_MESSAGE)]
    Empty,

    /// The input is not an integer.
    #[display("{}", INVALID_GUESS_MESSAGE)]
    NotANumber(String),

    /// The integer lies outside the allowed range.
    #[display("{}", INVALID_GUESS_MESSAGE)]
    OutOfRange(i64),

    /// The round already ended; restart to keep playing.
    #[display("The round is over. Start a new one to keep guessing")]
    RoundOver,
}

impl GuessError {
    /// Returns true for the errors caused by bad input text.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, GuessError::RoundOver)
    }
}

impl std::error::Error for GuessError {}
