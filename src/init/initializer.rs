//! A single unit of startup work.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::init::types::{BoxError, InitOutcome};

/// A named, zero-argument unit of startup work.
///
/// The closure runs exactly once, on the task driving
/// [`InitBarrier::run`]. It either finishes on the spot
/// ([`InitOutcome::Done`]), hands back a deferred result
/// ([`InitOutcome::Pending`]), or fails synchronously by returning an
/// error.
///
/// [`InitBarrier::run`]: crate::InitBarrier::run
pub struct Initializer {
    name: Arc<str>,
    run: Box<dyn FnOnce() -> Result<InitOutcome, BoxError> + Send>,
}

impl Initializer {
    /// Create an initializer from the raw closure form.
    pub fn new<F>(name: impl Into<Arc<str>>, run: F) -> Self
    where
        F: FnOnce() -> Result<InitOutcome, BoxError> + Send + 'static,
    {
        Self {
            name: name.into(),
            run: Box::new(run),
        }
    }

    /// An initializer that does all of its work during the call itself.
    pub fn sync<F, E>(name: impl Into<Arc<str>>, work: F) -> Self
    where
        F: FnOnce() -> Result<(), E> + Send + 'static,
        E: Into<BoxError>,
    {
        Self::new(name, move || {
            work().map_err(Into::into)?;
            Ok(InitOutcome::Done)
        })
    }

    /// An initializer whose result arrives through a future.
    ///
    /// The closure itself still runs synchronously, in sequence order; only
    /// the returned future is joined concurrently with other deferred
    /// results.
    pub fn deferred<F, Fut, E>(name: impl Into<Arc<str>>, work: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError>,
    {
        Self::new(name, move || {
            let fut = work();
            Ok(InitOutcome::Pending(Box::pin(async move {
                fut.await.map_err(Into::into)
            })))
        })
    }

    /// The initializer's name, used in logs and failure reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consume the initializer and invoke its closure.
    pub(crate) fn call(self) -> (Arc<str>, Result<InitOutcome, BoxError>) {
        let Self { name, run } = self;
        let result = run();
        (name, result)
    }
}

impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Initializer")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
