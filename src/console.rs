//! Line-oriented play over any reader and writer.

use crate::games::guess::{MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, RoundStatus};
use crate::GameSession;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Runs the console game on stdin and stdout.
pub fn run_console() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    info!("Starting console game");

    let mut session = GameSession::random();
    let stdin = io::stdin();
    play(&mut session, stdin.lock(), io::stdout().lock())
}

/// Plays rounds until the input ends or the player declines another.
///
/// Every line is submitted as one guess. There is no render loop to
/// time a celebration, so a win prints its banner once and ends it.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut lines = input.lines();
    write_intro(&mut output)?;

    loop {
        let round = session.round();
        write!(
            output,
            "Attempts: {}/{} ({} left)  Your guess: ",
            round.attempts_used(),
            MAX_ATTEMPTS,
            round.attempts_left()
        )?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("Input closed");
            writeln!(output)?;
            return Ok(());
        };

        session.update_guess_text(line?);
        let celebration = match session.submit_guess() {
            Ok(submission) => *submission.celebration(),
            Err(e) if e.is_invalid_input() => {
                debug!(error = ?e, "Guess not counted");
                None
            }
            Err(e) => {
                warn!(error = ?e, "Guess submitted to a finished round");
                None
            }
        };

        writeln!(output, "{}", session.round().feedback())?;
        if let Some(ticket) = celebration {
            writeln!(
                output,
                "*** You got it in {} ***",
                session.round().attempts_used()
            )?;
            session.expire_celebration(*ticket.round());
        }

        match session.round().status() {
            RoundStatus::InProgress => {
                if let Some(hint) = session.hint() {
                    writeln!(output, "Hint: {}", hint)?;
                }
            }
            _ => {
                write!(output, "Play again? [y/N] ")?;
                output.flush()?;

                let again = match lines.next() {
                    Some(answer) => answer?.trim().eq_ignore_ascii_case("y"),
                    None => false,
                };
                if !again {
                    writeln!(output, "Thanks for playing!")?;
                    return Ok(());
                }

                session.restart();
                write_intro(&mut output)?;
            }
        }
    }
}

fn write_intro<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "I'm thinking of a number between {} and {}",
        MIN_GUESS, MAX_GUESS
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::guess::ScriptedSecrets;
    use std::io::Cursor;

    fn run(secrets: &[u8], input: &str) -> (GameSession, String) {
        let mut session = GameSession::new(ScriptedSecrets::new(secrets.to_vec()));
        let mut output = Vec::new();
        play(&mut session, Cursor::new(input), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_winning_round() {
        let (session, output) = run(&[50], "25\n75\n50\nn\n");
        assert!(output.contains("Too low!"));
        assert!(output.contains("Hint: Try a higher number"));
        assert!(output.contains("Too high!"));
        assert!(output.contains("Hint: Try a lower number"));
        assert!(output.contains("Correct!"));
        assert!(output.contains("*** You got it in 3 ***"));
        assert!(output.ends_with("Thanks for playing!\n"));
        assert_eq!(session.round().status(), RoundStatus::Won);
    }

    #[test]
    fn test_win_banner_ends_celebration() {
        let (session, output) = run(&[50], "50
");
        assert_eq!(output.matches("*** You got it in 1 ***").count(), 1);
        assert_eq!(session.round().status(), RoundStatus::Won);
        assert!(!session.round().celebration_active());
    }

    #[test]
    fn test_prompt_counts_attempts_left() {
        let (_, output) = run(&[50], "10
");
        assert!(output.contains("Attempts: 0/10 (10 left)"));
        assert!(output.contains("Attempts: 1/10 (9 left)"));
    }

    #[test]
    fn test_invalid_line_is_not_counted() {
        let (session, output) = run(&[50], "abc\n");
        assert!(output.contains("Please enter a valid number between 1 and 100"));
        assert_eq!(session.round().attempts_used(), 0);
    }

    #[test]
    fn test_play_again_starts_new_round() {
        let (session, output) = run(&[50, 20], "50\ny\n20\n");
        assert_eq!(output.matches("I'm thinking of a number").count(), 2);
        assert_eq!(session.round().id().get(), 2);
        assert_eq!(session.round().status(), RoundStatus::Won);
    }
}
