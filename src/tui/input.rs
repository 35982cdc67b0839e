//! Key mapping for the terminal UI.

use crate::games::guess::RoundStatus;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the player asked for with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Append a character to the guess.
    Type(char),
    /// Delete the last character of the guess.
    Erase,
    /// Submit the typed guess.
    Submit,
    /// Start a new round.
    Restart,
    /// Leave the game.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Maps a key event to an intent for a round in `status`.
///
/// Enter submits while the round runs and restarts once it has ended.
/// Typing is only accepted while the round runs.
pub fn intent_for(key: KeyEvent, status: RoundStatus) -> Intent {
    if key.kind == KeyEventKind::Release {
        return Intent::Ignore;
    }

    let running = !status.is_terminal();
    match key.code {
        KeyCode::Esc => Intent::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Intent::Quit,
        KeyCode::Enter if running => Intent::Submit,
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') if !running => Intent::Restart,
        KeyCode::Backspace if running => Intent::Erase,
        KeyCode::Char(c) if running && !c.is_control() => Intent::Type(c),
        _ => Intent::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_while_running() {
        let status = RoundStatus::InProgress;
        assert_eq!(intent_for(key(KeyCode::Char('7')), status), Intent::Type('7'));
        assert_eq!(intent_for(key(KeyCode::Char('r')), status), Intent::Type('r'));
        assert_eq!(intent_for(key(KeyCode::Backspace), status), Intent::Erase);
        assert_eq!(intent_for(key(KeyCode::Enter), status), Intent::Submit);
    }

    #[test]
    fn test_restart_after_round_ends() {
        for status in [RoundStatus::Won, RoundStatus::Lost] {
            assert_eq!(intent_for(key(KeyCode::Enter), status), Intent::Restart);
            assert_eq!(intent_for(key(KeyCode::Char('r')), status), Intent::Restart);
            assert_eq!(intent_for(key(KeyCode::Char('5')), status), Intent::Ignore);
            assert_eq!(intent_for(key(KeyCode::Backspace), status), Intent::Ignore);
        }
    }

    #[test]
    fn test_quit_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(intent_for(ctrl_c, RoundStatus::InProgress), Intent::Quit);
        assert_eq!(intent_for(key(KeyCode::Esc), RoundStatus::Won), Intent::Quit);
    }

    #[test]
    fn test_release_ignored() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(intent_for(release, RoundStatus::InProgress), Intent::Ignore);
    }
}
