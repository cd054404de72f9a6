//! Readiness signalling subsystem.
//!
//! # Design Decisions
//! - Single-assignment: the outcome is written exactly once
//! - Waiters may subscribe before or after settlement
//! - No timeout: an unsettled signal pends forever

pub(crate) mod cell;
pub mod handle;

pub(crate) use cell::ReadyCell;
pub use handle::Readiness;
