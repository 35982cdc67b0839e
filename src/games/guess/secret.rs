//! Sources of secret numbers.

use super::{MAX_GUESS, MIN_GUESS, Secret};
use rand::Rng;
use tracing::{debug, instrument};

/// Supplies the secret for each new round.
pub trait SecretSource: std::fmt::Debug + Send {
    /// Returns the secret for the next round.
    fn next_secret(&mut self) -> Secret;
}

/// Draws secrets uniformly from `MIN_GUESS..=MAX_GUESS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSecrets;

impl SecretSource for RandomSecrets {
    #[instrument(skip(self))]
    fn next_secret(&mut self) -> Secret {
        let value = rand::rng().random_range(MIN_GUESS..=MAX_GUESS);
        Secret::clamped(value)
    }
}

/// Replays a fixed list of secrets, cycling when it runs out.
///
/// Out-of-range values are clamped. An empty script always yields the
/// lowest secret.
#[derive(Debug, Clone)]
pub struct ScriptedSecrets {
    secrets: Vec<Secret>,
    next: usize,
}

impl ScriptedSecrets {
    /// Creates a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let mut secrets: Vec<Secret> = values.into_iter().map(Secret::clamped).collect();
        if secrets.is_empty() {
            secrets.push(Secret::clamped(MIN_GUESS));
        }
        Self { secrets, next: 0 }
    }
}

impl SecretSource for ScriptedSecrets {
    #[instrument(skip(self), fields(next = self.next))]
    fn next_secret(&mut self) -> Secret {
        let secret = self.secrets[self.next % self.secrets.len()];
        self.next += 1;
        debug!("Scripted secret issued");
        secret
    }
}
