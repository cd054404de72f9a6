//! Single-assignment settlement cell.

use std::sync::OnceLock;

use tokio::sync::Notify;

use crate::init::types::InitError;

/// Write-once cell holding the barrier outcome, plus waiter wakeup.
///
/// `settle` wins at most once; every `wait` observes the stored outcome.
#[derive(Debug, Default)]
pub(crate) struct ReadyCell {
    outcome: OnceLock<Result<(), InitError>>,
    notify: Notify,
}

impl ReadyCell {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store the outcome if the cell is still unsettled.
    ///
    /// Returns true when this call performed the assignment.
    pub(crate) fn settle(&self, outcome: Result<(), InitError>) -> bool {
        let won = self.outcome.set(outcome).is_ok();
        if won {
            self.notify.notify_waiters();
        }
        won
    }

    /// The outcome if settled, without suspending.
    pub(crate) fn get(&self) -> Option<&Result<(), InitError>> {
        self.outcome.get()
    }

    /// Suspend until the cell settles, then return a clone of the outcome.
    pub(crate) async fn wait(&self) -> Result<(), InitError> {
        loop {
            if let Some(outcome) = self.outcome.get() {
                return outcome.clone();
            }
            let notified = self.notify.notified();
            tokio::pin!(notified);
            // Register before the re-check so a settlement landing in
            // between still wakes this waiter.
            notified.as_mut().enable();
            if let Some(outcome) = self.outcome.get() {
                return outcome.clone();
            }
            notified.await;
        }
    }
}
