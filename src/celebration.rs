//! Deferred expiry of the win celebration.

use crate::games::guess::RoundId;
use crate::session::CelebrationTicket;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, instrument};

#[derive(Debug)]
struct Pending {
    round: RoundId,
    handle: JoinHandle<()>,
}

/// Schedules at most one celebration expiry at a time.
///
/// When the delay elapses the round id is sent on the channel; the event
/// loop hands it to [`GameSession::expire_celebration`](crate::GameSession::expire_celebration).
/// Scheduling again, cancelling, or dropping the timer aborts the pending task.
#[derive(Debug)]
pub struct CelebrationTimer {
    tx: mpsc::UnboundedSender<RoundId>,
    pending: Option<Pending>,
}

impl CelebrationTimer {
    /// Creates a timer that reports expiries on `tx`.
    pub fn new(tx: mpsc::UnboundedSender<RoundId>) -> Self {
        Self { tx, pending: None }
    }

    /// Schedules the expiry described by `ticket`, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn schedule(&mut self, ticket: CelebrationTicket) {
        self.cancel();

        let round = *ticket.round();
        let delay = *ticket.delay();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(round).is_err() {
                debug!(%round, "Celebration expiry dropped, receiver closed");
            }
        });

        debug!(%round, ?delay, "Celebration expiry scheduled");
        self.pending = Some(Pending { round, handle });
    }

    /// Aborts the pending expiry, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
            debug!(round = %pending.round, "Celebration expiry cancelled");
        }
    }
}

impl Drop for CelebrationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
