//! The live round: secret, typed input, attempts and status.

use super::action::{Guess, GuessError};
use super::invariants::assert_invariants;
use super::rules::{self, Feedback, Hint};
use super::{MAX_ATTEMPTS, RoundId, RoundStatus, Secret};
use tracing::{debug, info, instrument, warn};

/// One game from secret generation to a terminal status.
///
/// A round is never reset in place. Restarting replaces it with a new
/// `Round` carrying a fresh secret and the next id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(super) id: RoundId,
    pub(super) secret: Secret,
    pub(super) guess_text: String,
    pub(super) attempts_used: u8,
    pub(super) feedback: String,
    pub(super) status: RoundStatus,
    pub(super) celebration_active: bool,
}

impl Round {
    /// Starts a round around `secret`.
    #[instrument(skip(secret))]
    pub fn new(id: RoundId, secret: Secret) -> Self {
        debug!("Round created");
        Self {
            id,
            secret,
            guess_text: String::new(),
            attempts_used: 0,
            feedback: String::new(),
            status: RoundStatus::InProgress,
            celebration_active: false,
        }
    }

    /// Returns the round id.
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Returns the raw text typed so far.
    pub fn guess_text(&self) -> &str {
        &self.guess_text
    }

    /// Returns the number of validated guesses.
    pub fn attempts_used(&self) -> u8 {
        self.attempts_used
    }

    /// Returns the guesses left before the round is lost.
    pub fn attempts_left(&self) -> u8 {
        MAX_ATTEMPTS.saturating_sub(self.attempts_used)
    }

    /// Returns the last feedback message, empty on a fresh round.
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns true while the win celebration is showing.
    pub fn celebration_active(&self) -> bool {
        self.celebration_active
    }

    /// Returns the hint to show under the feedback, if any.
    ///
    /// Present only while the round runs and at least one guess counted.
    pub fn hint(&self) -> Option<Hint> {
        (self.status == RoundStatus::InProgress && self.attempts_used > 0)
            .then(|| rules::hint_from_feedback(&self.feedback))
    }

    /// Replaces the typed text verbatim.
    pub fn set_guess_text(&mut self, text: String) {
        self.guess_text = text;
    }

    /// Appends one character to the typed text.
    pub fn push_char(&mut self, c: char) {
        self.guess_text.push(c);
    }

    /// Removes the last typed character.
    pub fn pop_char(&mut self) {
        self.guess_text.pop();
    }

    /// Submits the typed text as a guess.
    ///
    /// Rejected input sets the invalid-input feedback and leaves the
    /// attempt count, status and typed text alone. A counted guess always
    /// clears the typed text. A correct guess wins even on the last
    /// attempt.
    #[instrument(skip(self), fields(round = %self.id, attempts = self.attempts_used))]
    pub fn submit(&mut self) -> Result<Feedback, GuessError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "Guess submitted after round ended");
            return Err(GuessError::RoundOver);
        }

        let guess = match Guess::parse(&self.guess_text) {
            Ok(guess) => guess,
            Err(e) => {
                debug!(error = ?e, "Guess rejected");
                self.feedback = e.to_string();
                return Err(e);
            }
        };

        self.attempts_used += 1;
        let feedback = rules::compare(guess, self.secret);
        self.feedback = feedback.message().to_string();

        if feedback.is_correct() {
            self.status = RoundStatus::Won;
            self.celebration_active = true;
            info!(attempts = self.attempts_used, "Round won");
        } else if self.attempts_used >= MAX_ATTEMPTS {
            self.status = RoundStatus::Lost;
            self.feedback = rules::reveal_message(self.secret);
            info!("Round lost");
        }

        self.guess_text.clear();

        assert_invariants(self);

        Ok(feedback)
    }

    /// Ends the win celebration.
    pub fn clear_celebration(&mut self) {
        self.celebration_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::guess::INVALID_GUESS_MESSAGE;

    fn round(secret: u8) -> Round {
        Round::new(RoundId::first(), Secret::new(secret).unwrap())
    }

    fn submit(round: &mut Round, text: &str) -> Result<Feedback, GuessError> {
        round.set_guess_text(text.to_string());
        round.submit()
    }

    #[test]
    fn test_fresh_round() {
        let round = round(42);
        assert_eq!(round.status(), RoundStatus::InProgress);
        assert_eq!(round.attempts_used(), 0);
        assert_eq!(round.attempts_left(), MAX_ATTEMPTS);
        assert!(round.feedback().is_empty());
        assert!(round.guess_text().is_empty());
        assert!(!round.celebration_active());
        assert_eq!(round.hint(), None);
    }

    #[test]
    fn test_counted_guess_clears_text() {
        let mut round = round(42);
        assert_eq!(submit(&mut round, "10"), Ok(Feedback::TooLow));
        assert!(round.guess_text().is_empty());
        assert_eq!(round.attempts_used(), 1);
    }

    #[test]
    fn test_rejected_guess_keeps_text() {
        let mut round = round(42);
        assert!(submit(&mut round, "4x").is_err());
        assert_eq!(round.guess_text(), "4x");
        assert_eq!(round.feedback(), INVALID_GUESS_MESSAGE);
        assert_eq!(round.attempts_used(), 0);
    }

    #[test]
    fn test_win_starts_celebration() {
        let mut round = round(42);
        assert_eq!(submit(&mut round, "42"), Ok(Feedback::Correct));
        assert_eq!(round.status(), RoundStatus::Won);
        assert!(round.celebration_active());
        assert_eq!(round.hint(), None);

        round.clear_celebration();
        assert!(!round.celebration_active());
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_submit_after_end_is_rejected() {
        let mut round = round(42);
        submit(&mut round, "42").unwrap();
        let before = round.clone();

        assert_eq!(submit(&mut round, "41"), Err(GuessError::RoundOver));
        assert_eq!(round.attempts_used(), before.attempts_used());
        assert_eq!(round.feedback(), before.feedback());
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_hint_follows_last_feedback() {
        let mut round = round(42);
        submit(&mut round, "90").unwrap();
        assert_eq!(round.hint(), Some(Hint::TryLower));

        submit(&mut round, "10").unwrap();
        assert_eq!(round.hint(), Some(Hint::TryHigher));

        // A rejected guess replaces the feedback text, which no longer says "high".
        submit(&mut round, "90").unwrap();
        let _ = submit(&mut round, "nope");
        assert_eq!(round.hint(), Some(Hint::TryHigher));
    }

    #[test]
    fn test_editing_text() {
        let mut round = round(42);
        round.push_char('4');
        round.push_char('2');
        assert_eq!(round.guess_text(), "42");
        round.pop_char();
        assert_eq!(round.guess_text(), "4");
        round.pop_char();
        round.pop_char();
        assert_eq!(round.guess_text(), "");
    }
}
