//! Guess-the-number: one secret between 1 and 100, ten tries.

mod action;
mod invariants;
mod round;
mod rules;
mod secret;
mod types;

pub use action::{Guess, GuessError, INVALID_GUESS_MESSAGE};
pub use invariants::{
    AttemptsBounded, Invariant, InvariantSet, InvariantViolation, RoundInvariants, SecretInRange,
    StatusConsistent,
};
pub use round::Round;
pub use rules::{Feedback, Hint, compare, hint_from_feedback, reveal_message};
pub use secret::{RandomSecrets, ScriptedSecrets, SecretSource};
pub use types::{MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, RoundId, RoundStatus, Secret};
