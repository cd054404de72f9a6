//! Run-once coordinator joining initializer completions.

use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Mutex;

use crate::init::initializer::Initializer;
use crate::init::types::{InitError, InitOutcome};
use crate::readiness::{Readiness, ReadyCell};

/// Runs a set of initializers exactly once and joins their completions
/// into a single readiness signal.
///
/// The host constructs the barrier during bootstrap, calls [`run`] once,
/// and from then on only reads it, through [`is_completed`] or a
/// [`Readiness`] handle.
///
/// [`run`]: InitBarrier::run
/// [`is_completed`]: InitBarrier::is_completed
pub struct InitBarrier {
    /// Initializers not yet invoked; drained by the first `run`.
    pending: Mutex<Vec<Initializer>>,
    /// True once `run` has been entered; guards re-entry.
    started: AtomicBool,
    /// True once every initializer finished successfully. Monotonic.
    completed: AtomicBool,
    /// Settlement cell shared with every `Readiness` handle.
    cell: Arc<ReadyCell>,
}

impl InitBarrier {
    /// Create a barrier over an ordered list of initializers.
    ///
    /// An empty list is valid and means "nothing to wait for": the first
    /// `run` completes immediately.
    pub fn new(initializers: Vec<Initializer>) -> Self {
        Self {
            pending: Mutex::new(initializers),
            started: AtomicBool::new(false),
            completed: AtomicBool::new(false),
            cell: Arc::new(ReadyCell::new()),
        }
    }

    /// Handle for observing the readiness outcome.
    ///
    /// Handles may be taken at any time, before or after settlement, and
    /// each one observes the single settlement.
    pub fn readiness(&self) -> Readiness {
        Readiness::new(Arc::clone(&self.cell))
    }

    /// Whether `run` has been invoked.
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Whether every initializer finished successfully.
    ///
    /// Stays false forever once any initializer has failed.
    pub fn is_completed(&self) -> bool {
        self.completed.load(Ordering::SeqCst)
    }

    /// Invoke every initializer and settle the readiness signal.
    ///
    /// Initializers run in input order, one after another. Deferred
    /// results are then awaited concurrently; their completion order is
    /// unspecified. Only the first call has any effect: later calls return
    /// immediately without touching the initializers or the signal.
    ///
    /// A barrier with no deferred results settles without suspending.
    pub async fn run(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }

        let initializers = {
            let mut pending = self.pending.lock().await;
            mem::take(&mut *pending)
        };

        let mut deferred = FuturesUnordered::new();
        for initializer in initializers {
            tracing::debug!(initializer = initializer.name(), "running initializer");
            let (name, outcome) = initializer.call();
            match outcome {
                Ok(InitOutcome::Done) => {}
                Ok(InitOutcome::Pending(fut)) => {
                    deferred.push(async move { (name, fut.await) });
                }
                Err(err) => {
                    // Synchronous failure short-circuits: initializers after
                    // this one never run, and deferred results collected so
                    // far are dropped without being awaited.
                    self.fail(InitError::new(name, err));
                    return;
                }
            }
        }

        while let Some((name, result)) = deferred.next().await {
            match result {
                Ok(()) => tracing::debug!(initializer = %name, "initializer finished"),
                Err(err) => {
                    // First failure wins; remaining deferred results are
                    // discarded.
                    self.fail(InitError::new(name, err));
                    return;
                }
            }
        }

        self.completed.store(true, Ordering::SeqCst);
        self.cell.settle(Ok(()));
        tracing::info!("initialization complete");
    }

    fn fail(&self, err: InitError) {
        tracing::error!(initializer = err.initializer(), error = %err, "initialization failed");
        self.cell.settle(Err(err));
    }
}

impl Default for InitBarrier {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
