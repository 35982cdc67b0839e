//! Core domain types for the guessing game.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Smallest number the secret (and a valid guess) can be.
pub const MIN_GUESS: u8 = 1;

/// Largest number the secret (and a valid guess) can be.
pub const MAX_GUESS: u8 = 100;

/// Validated guesses allowed per round.
pub const MAX_ATTEMPTS: u8 = 10;

/// Identifies one round within a session.
///
/// Ids increase by one on every restart, so a deferred task can tell
/// whether the round it was scheduled for is still live.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("#{}", _0)]
pub struct RoundId(u64);

impl RoundId {
    /// Id of the first round in a session.
    pub fn first() -> Self {
        Self(1)
    }

    /// Id of the round that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Status of a round.
///
/// `Won` and `Lost` are terminal: only a restart leaves them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum RoundStatus {
    /// Guesses are being accepted.
    #[default]
    #[strum(to_string = "In progress")]
    InProgress,
    /// The secret was guessed.
    Won,
    /// The attempt budget ran out.
    Lost,
}

impl RoundStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// The number the player is trying to find.
///
/// Always within `MIN_GUESS..=MAX_GUESS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct Secret(u8);

impl Secret {
    /// Creates a secret, or `None` when the value is out of range.
    pub fn new(value: u8) -> Option<Self> {
        (MIN_GUESS..=MAX_GUESS)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Creates a secret, clamping the value into range.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(MIN_GUESS, MAX_GUESS))
    }

    /// Returns the secret value.
    pub fn value(self) -> u8 {
        self.0
    }
}
