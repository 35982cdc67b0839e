//! Guessing Game library - a checked guess-the-number state machine
//!
//! One secret between 1 and 100, ten tries, directional feedback.
//!
//! # Architecture
//!
//! - **Games**: the round, its rules and its invariants
//! - **Session**: the controller that owns the live round
//! - **Celebration**: the cancellable timer that ends the win celebration
//! - **TUI / Console**: presentation layers that forward player intents
//!
//! # Example
//!
//! ```
//! use guessing_game::{GameSession, RoundStatus, ScriptedSecrets};
//!
//! let mut session = GameSession::new(ScriptedSecrets::new([50]));
//! for guess in ["25", "75", "50"] {
//!     session.update_guess_text(guess);
//!     session.submit_guess().ok();
//! }
//! assert_eq!(session.round().status(), RoundStatus::Won);
//! assert_eq!(session.round().attempts_used(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod celebration;
mod config;
mod games;
mod session;

// Presentation layers
pub mod console;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use celebration::CelebrationTimer;
pub use session::{CelebrationTicket, DEFAULT_CELEBRATION_DELAY, GameSession, Submission};

// Crate-level exports - Game types
pub use games::guess::{
    AttemptsBounded, Feedback, Guess, GuessError, Hint, INVALID_GUESS_MESSAGE, Invariant,
    InvariantSet, InvariantViolation, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, RandomSecrets, Round,
    RoundId, RoundInvariants, RoundStatus, ScriptedSecrets, Secret, SecretInRange, SecretSource,
    StatusConsistent, compare, hint_from_feedback, reveal_message,
};
