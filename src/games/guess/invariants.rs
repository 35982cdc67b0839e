//! First-class invariants for a round.
//!
//! Invariants are properties that hold after every transition. They are
//! checked in debug builds after each submit and can be tested on their own.

use super::{MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, Round, RoundStatus};
use derive_more::Display;
use derive_new::new;
use tracing::{instrument, warn};

/// A logical property of a state.
pub trait Invariant<S> {
    /// True when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Rule text reported when the property fails.
    fn description() -> &'static str;
}

/// A failed invariant, named by its rule text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, new)]
#[display("{rule}")]
pub struct InvariantViolation {
    /// Rule that did not hold.
    pub rule: &'static str,
}

/// Invariants checked as one group.
///
/// Implemented for tuples of up to three [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Every member that fails for `state`, in tuple order.
    fn violations(state: &S) -> Vec<InvariantViolation>;

    /// Ok when no member fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations = Self::violations(state);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

macro_rules! tuple_invariant_set {
    ($($member:ident),+) => {
        impl<S, $($member: Invariant<S>),+> InvariantSet<S> for ($($member,)+) {
            fn violations(state: &S) -> Vec<InvariantViolation> {
                [$(
                    (!$member::holds(state))
                        .then(|| InvariantViolation::new($member::description())),
                )+]
                .into_iter()
                .flatten()
                .collect()
            }
        }
    };
}

tuple_invariant_set!(A);
tuple_invariant_set!(A, B);
tuple_invariant_set!(A, B, C);

/// Invariant: the secret is within the guessable range.
pub struct SecretInRange;

impl Invariant<Round> for SecretInRange {
    fn holds(round: &Round) -> bool {
        (MIN_GUESS..=MAX_GUESS).contains(&round.secret.value())
    }

    fn description() -> &'static str {
        "Secret lies within the guessable range"
    }
}

/// Invariant: the attempt count never exceeds the budget.
pub struct AttemptsBounded;

impl Invariant<Round> for AttemptsBounded {
    fn holds(round: &Round) -> bool {
        round.attempts_used <= MAX_ATTEMPTS
    }

    fn description() -> &'static str {
        "Attempts used never exceed the budget"
    }
}

/// Invariant: the status agrees with the attempt count and celebration.
///
/// A lost round used every attempt, a won round used at least one, and
/// only a won round celebrates.
pub struct StatusConsistent;

impl Invariant<Round> for StatusConsistent {
    fn holds(round: &Round) -> bool {
        let status_ok = match round.status {
            RoundStatus::InProgress => round.attempts_used < MAX_ATTEMPTS,
            RoundStatus::Won => round.attempts_used >= 1,
            RoundStatus::Lost => round.attempts_used == MAX_ATTEMPTS,
        };
        let celebration_ok = !round.celebration_active || round.status == RoundStatus::Won;
        status_ok && celebration_ok
    }

    fn description() -> &'static str {
        "Status agrees with attempts used and celebration"
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (SecretInRange, AttemptsBounded, StatusConsistent);

/// Asserts that all round invariants hold (panics in debug builds).
#[instrument(skip(round), fields(round = %round.id))]
pub fn assert_invariants(round: &Round) {
    if let Err(violations) = RoundInvariants::check_all(round) {
        for violation in &violations {
            warn!(%violation, "Round invariant violated");
        }
        debug_assert!(violations.is_empty(), "Round invariants violated: {:?}", violations);
    }
}
