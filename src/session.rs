//! Game session: the controller that owns the live round.

use crate::games::guess::{
    Feedback, GuessError, Hint, RandomSecrets, Round, RoundId, RoundStatus, SecretSource,
};
use derive_getters::Getters;
use derive_new::new;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default time the win celebration stays on screen.
pub const DEFAULT_CELEBRATION_DELAY: Duration = Duration::from_millis(3000);

/// Request to clear the celebration of `round` after `delay`.
///
/// Returned by a winning submission; the caller owns the scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct CelebrationTicket {
    /// Round whose celebration should end.
    round: RoundId,
    /// Time to wait before ending it.
    delay: Duration,
}

/// Result of a counted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Submission {
    /// How the guess compared with the secret.
    feedback: Feedback,
    /// Round status after the guess.
    status: RoundStatus,
    /// Present when the guess won the round.
    celebration: Option<CelebrationTicket>,
}

/// A guessing game session.
///
/// Holds exactly one live [`Round`] and replaces it wholesale on restart.
/// All state changes go through the operations below.
#[derive(Debug)]
pub struct GameSession {
    round: Round,
    secrets: Box<dyn SecretSource>,
    celebration_delay: Duration,
}

impl GameSession {
    /// Creates a session whose secrets come from `secrets`.
    #[instrument(skip(secrets))]
    pub fn new(secrets: impl SecretSource + 'static) -> Self {
        let mut secrets: Box<dyn SecretSource> = Box::new(secrets);
        let round = Round::new(RoundId::first(), secrets.next_secret());
        info!(round = %round.id(), "Creating new game session");
        Self {
            round,
            secrets,
            celebration_delay: DEFAULT_CELEBRATION_DELAY,
        }
    }

    /// Creates a session with uniformly random secrets.
    pub fn random() -> Self {
        Self::new(RandomSecrets)
    }

    /// Sets how long the win celebration lasts.
    pub fn with_celebration_delay(mut self, delay: Duration) -> Self {
        self.celebration_delay = delay;
        self
    }

    /// Returns the live round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the hint for the live round, if one applies.
    pub fn hint(&self) -> Option<Hint> {
        self.round.hint()
    }

    /// Replaces the live round with a fresh one.
    ///
    /// Draws a new secret and resets input, feedback, attempts, status
    /// and celebration. Returns the new round's id.
    #[instrument(skip(self), fields(previous = %self.round.id()))]
    pub fn new_round(&mut self) -> RoundId {
        let id = self.round.id().next();
        self.round = Round::new(id, self.secrets.next_secret());
        info!(round = %id, "New round started");
        id
    }

    /// Starts over after a win or a loss.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> RoundId {
        self.new_round()
    }

    /// Stores the typed text verbatim.
    pub fn update_guess_text(&mut self, text: impl Into<String>) {
        self.round.set_guess_text(text.into());
    }

    /// Appends one typed character.
    pub fn push_char(&mut self, c: char) {
        self.round.push_char(c);
    }

    /// Removes the last typed character.
    pub fn pop_char(&mut self) {
        self.round.pop_char();
    }

    /// Submits the typed text as a guess.
    ///
    /// On a win the returned submission carries a [`CelebrationTicket`]
    /// for the caller to schedule.
    #[instrument(skip(self), fields(round = %self.round.id()))]
    pub fn submit_guess(&mut self) -> Result<Submission, GuessError> {
        let feedback = self.round.submit()?;
        let status = self.round.status();
        let celebration = feedback
            .is_correct()
            .then(|| CelebrationTicket::new(self.round.id(), self.celebration_delay));

        debug!(%feedback, %status, "Guess counted");
        Ok(Submission {
            feedback,
            status,
            celebration,
        })
    }

    /// Ends the celebration of `round` if it is still the live round.
    ///
    /// Returns false for an expiry that belongs to a replaced round.
    #[instrument(skip(self), fields(live = %self.round.id()))]
    pub fn expire_celebration(&mut self, round: RoundId) -> bool {
        if round != self.round.id() {
            debug!(%round, "Ignoring celebration expiry from a previous round");
            return false;
        }
        self.round.clear_celebration();
        true
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::guess::ScriptedSecrets;

    #[test]
    fn test_win_returns_ticket_with_delay() {
        let mut session = GameSession::new(ScriptedSecrets::new([12]))
            .with_celebration_delay(Duration::from_millis(5));
        session.update_guess_text("12");

        let submission = session.submit_guess().unwrap();
        let ticket = submission.celebration().unwrap();
        assert_eq!(*ticket.round(), session.round().id());
        assert_eq!(*ticket.delay(), Duration::from_millis(5));
    }

    #[test]
    fn test_miss_returns_no_ticket() {
        let mut session = GameSession::new(ScriptedSecrets::new([12]));
        session.update_guess_text("11");

        let submission = session.submit_guess().unwrap();
        assert_eq!(*submission.feedback(), Feedback::TooLow);
        assert_eq!(*submission.status(), RoundStatus::InProgress);
        assert!(submission.celebration().is_none());
    }

    #[test]
    fn test_new_round_advances_id() {
        let mut session = GameSession::new(ScriptedSecrets::new([12, 80]));
        let first = session.round().id();
        let second = session.new_round();
        assert_eq!(second, first.next());
        assert_eq!(session.round().id(), second);
    }

    #[test]
    fn test_expiry_for_live_round_clears_celebration() {
        let mut session = GameSession::new(ScriptedSecrets::new([12]));
        session.update_guess_text("12");
        session.submit_guess().unwrap();
        assert!(session.round().celebration_active());

        assert!(session.expire_celebration(session.round().id()));
        assert!(!session.round().celebration_active());
        assert_eq!(session.round().status(), RoundStatus::Won);
    }
}
