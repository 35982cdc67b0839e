//! Game rules for the guessing game.
//!
//! Pure functions that compare a guess with the secret and derive the
//! text the player sees. Kept apart from the round so they can be
//! tested without any state.

use super::{Guess, Secret};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// Result of comparing a guess with the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// The guess is below the secret.
    TooLow,
    /// The guess is above the secret.
    TooHigh,
    /// The guess is the secret.
    Correct,
}

impl Feedback {
    /// Text shown to the player.
    pub fn message(self) -> &'static str {
        match self {
            Feedback::TooLow => "Too low!",
            Feedback::TooHigh => "Too high!",
            Feedback::Correct => "Correct!",
        }
    }

    /// Returns true when the guess matched.
    pub fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Compares a guess with the secret.
#[instrument(skip(secret))]
pub fn compare(guess: Guess, secret: Secret) -> Feedback {
    match guess.value().cmp(&secret.value()) {
        Ordering::Less => Feedback::TooLow,
        Ordering::Greater => Feedback::TooHigh,
        Ordering::Equal => Feedback::Correct,
    }
}

/// Message that replaces the feedback when the round is lost.
///
/// This is the only place the secret is shown to the player.
pub fn reveal_message(secret: Secret) -> String {
    format!("Game Over! The number was {}", secret)
}

/// Direction hint shown while a round is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Hint {
    /// The last guess was too high.
    #[strum(to_string = "Try a lower number")]
    TryLower,
    /// Anything else, including rejected input.
    #[strum(to_string = "Try a higher number")]
    TryHigher,
}

/// Derives the hint from the last feedback text.
///
/// Only the word "high" is looked for; every other message, including
/// the invalid-input one, points higher.
pub fn hint_from_feedback(feedback: &str) -> Hint {
    if feedback.contains("high") {
        Hint::TryLower
    } else {
        Hint::TryHigher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::guess::INVALID_GUESS_MESSAGE;

    fn guess(value: &str) -> Guess {
        Guess::parse(value).unwrap()
    }

    fn secret(value: u8) -> Secret {
        Secret::new(value).unwrap()
    }

    #[test]
    fn test_compare_directions() {
        assert_eq!(compare(guess("25"), secret(50)), Feedback::TooLow);
        assert_eq!(compare(guess("75"), secret(50)), Feedback::TooHigh);
        assert_eq!(compare(guess("50"), secret(50)), Feedback::Correct);
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(Feedback::TooLow.to_string(), "Too low!");
        assert_eq!(Feedback::TooHigh.to_string(), "Too high!");
        assert_eq!(Feedback::Correct.to_string(), "Correct!");
    }

    #[test]
    fn test_reveal_contains_secret() {
        assert_eq!(reveal_message(secret(7)), "Game Over! The number was 7");
    }

    #[test]
    fn test_hint_reads_feedback_text() {
        assert_eq!(hint_from_feedback("Too high!"), Hint::TryLower);
        assert_eq!(hint_from_feedback("Too low!"), Hint::TryHigher);
        assert_eq!(hint_from_feedback(INVALID_GUESS_MESSAGE), Hint::TryHigher);
        assert_eq!(Hint::TryLower.to_string(), "Try a lower number");
    }
}
