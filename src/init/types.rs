//! Shared types and error definitions for the init subsystem.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

/// Boxed error type accepted at the initializer boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Boxed future carrying a deferred initializer result.
pub type InitFuture = Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send>>;

/// What an initializer call produced.
pub enum InitOutcome {
    /// The initializer finished during the call itself.
    Done,
    /// Work continues; the result arrives through the future.
    Pending(InitFuture),
}

impl fmt::Debug for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => f.write_str("Done"),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Error produced when an initializer fails.
///
/// Cloneable so that every readiness waiter receives the one rejection.
#[derive(Debug, Clone, Error)]
#[error("initializer `{name}` failed: {source}")]
pub struct InitError {
    /// Name of the initializer that failed.
    name: Arc<str>,
    /// The underlying error, shared across waiters.
    #[source]
    source: Arc<dyn std::error::Error + Send + Sync>,
}

impl InitError {
    pub(crate) fn new(name: Arc<str>, source: BoxError) -> Self {
        Self {
            name,
            source: Arc::from(source),
        }
    }

    /// Name of the initializer that failed.
    pub fn initializer(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn init_error_display_names_the_initializer() {
        let err = InitError::new("database".into(), "connection refused".into());
        assert_eq!(
            err.to_string(),
            "initializer `database` failed: connection refused"
        );
        assert_eq!(err.initializer(), "database");
        assert!(err.source().is_some());
    }

    #[test]
    fn init_error_clones_share_the_source() {
        let err = InitError::new("cache".into(), "warmup failed".into());
        let clone = err.clone();
        assert_eq!(err.to_string(), clone.to_string());
    }
}
