//! Run-once initialization barrier.
//!
//! Joins an ordered set of startup initializers, each finishing either
//! during its own call or through a deferred result, into a single
//! readiness signal that any number of tasks can await.

pub mod init;
pub mod readiness;

pub use init::barrier::InitBarrier;
pub use init::initializer::Initializer;
pub use init::types::{BoxError, InitError, InitFuture, InitOutcome};
pub use readiness::Readiness;
