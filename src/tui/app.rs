//! Application state and logic.

use crossterm::event::KeyEvent;
use tracing::{debug, instrument, warn};

use super::input::{Intent, intent_for};
use crate::games::guess::RoundId;
use crate::{CelebrationTimer, GameSession};

/// Main application state.
///
/// Forwards player intents to the session and schedules the celebration
/// expiry that a winning guess asks for.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    timer: CelebrationTimer,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(session: GameSession, timer: CelebrationTimer) -> Self {
        Self {
            session,
            timer,
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let intent = intent_for(key, self.session.round().status());
        self.apply(intent);
    }

    /// Applies an intent to the session.
    #[instrument(skip(self), fields(round = %self.session.round().id()))]
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Type(c) => self.session.push_char(c),
            Intent::Erase => self.session.pop_char(),
            Intent::Submit => match self.session.submit_guess() {
                Ok(submission) => {
                    if let Some(ticket) = *submission.celebration() {
                        self.timer.schedule(ticket);
                    }
                }
                Err(e) if e.is_invalid_input() => debug!(error = ?e, "Guess not counted"),
                Err(e) => warn!(error = ?e, "Guess submitted to a finished round"),
            },
            Intent::Restart => {
                self.timer.cancel();
                self.session.restart();
            }
            Intent::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Intent::Ignore => {}
        }
    }

    /// Handles a celebration expiry delivered by the timer.
    pub fn on_celebration_expired(&mut self, round: RoundId) {
        self.session.expire_celebration(round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::guess::{RoundStatus, ScriptedSecrets};
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    fn app(secrets: &[u8]) -> (App, mpsc::UnboundedReceiver<RoundId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session = GameSession::new(ScriptedSecrets::new(secrets.to_vec()))
            .with_celebration_delay(Duration::from_millis(10));
        (App::new(session, CelebrationTimer::new(tx)), rx)
    }

    fn type_guess(app: &mut App, text: &str) {
        for c in text.chars() {
            app.apply(Intent::Type(c));
        }
        app.apply(Intent::Submit);
    }

    #[tokio::test]
    async fn test_win_celebration_expires() {
        let (mut app, mut rx) = app(&[42]);
        type_guess(&mut app, "42");
        assert!(app.session().round().celebration_active());

        let round = timeout(Duration::from_secs(2), rx.recv()).await.ok().flatten();
        let round = round.expect("celebration expiry");
        app.on_celebration_expired(round);

        assert!(!app.session().round().celebration_active());
        assert_eq!(app.session().round().status(), RoundStatus::Won);
    }

    #[tokio::test]
    async fn test_restart_cancels_celebration() {
        let (mut app, mut rx) = app(&[42, 60]);
        type_guess(&mut app, "42");
        app.apply(Intent::Restart);

        assert_eq!(app.session().round().status(), RoundStatus::InProgress);
        assert!(!app.session().round().celebration_active());
        assert!(timeout(Duration::from_millis(100), rx.recv()).await.is_err());
    }

    #[tokio::test]
    async fn test_submit_after_win_changes_nothing() {
        let (mut app, _rx) = app(&[42]);
        type_guess(&mut app, "42");
        type_guess(&mut app, "7");

        assert_eq!(app.session().round().attempts_used(), 1);
        assert_eq!(app.session().round().feedback(), "Correct!");
    }

    #[test]
    fn test_erase_and_quit() {
        let (mut app, _rx) = app(&[42]);
        app.apply(Intent::Type('4'));
        app.apply(Intent::Type('x'));
        app.apply(Intent::Erase);
        assert_eq!(app.session().round().guess_text(), "4");

        app.apply(Intent::Quit);
        assert!(app.should_quit());
    }
}
