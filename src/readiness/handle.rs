//! Awaitable handle over the readiness outcome.

use std::sync::Arc;

use crate::init::types::InitError;
use crate::readiness::cell::ReadyCell;

/// Observer handle for a barrier's readiness signal.
///
/// Cloneable; every clone observes the same single settlement. Waiting on
/// a signal whose barrier never settles pends forever.
#[derive(Debug, Clone)]
pub struct Readiness {
    cell: Arc<ReadyCell>,
}

impl Readiness {
    pub(crate) fn new(cell: Arc<ReadyCell>) -> Self {
        Self { cell }
    }

    /// Suspend until the barrier settles.
    ///
    /// Returns immediately once settled; may be called any number of
    /// times, on any number of clones.
    pub async fn wait(&self) -> Result<(), InitError> {
        self.cell.wait().await
    }

    /// The outcome if the barrier has settled, without suspending.
    pub fn try_outcome(&self) -> Option<Result<(), InitError>> {
        self.cell.get().cloned()
    }

    /// Whether the signal has settled, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.cell.get().is_some()
    }
}
