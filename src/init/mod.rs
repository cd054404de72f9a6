//! Initialization subsystem.
//!
//! # Data Flow
//! ```text
//! Host builds Vec<Initializer>
//!     → InitBarrier::new
//!     → run():
//!         invoke each initializer in input order (initializer.rs)
//!             finished during the call → done
//!             deferred result → pending set
//!         join the pending set concurrently (barrier.rs)
//!     → settle the readiness cell exactly once (crate::readiness)
//! ```
//!
//! # Design Decisions
//! - Invocation order is the input order; completion order of deferred
//!   results is unspecified
//! - First failure wins; failures from siblings are discarded
//! - No retry, no timeout, no cancellation: a result that never settles
//!   leaves readiness pending forever

pub mod barrier;
pub mod initializer;
pub mod types;
