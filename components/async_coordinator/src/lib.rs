//! Async completion coordination for the test harness.
//!
//! This crate tracks exactly one "test finished" signal per asynchronous
//! test, independent of how many assertions ran:
//!
//! - [`Coordinator`] - Pending → Completed / TimedOut state machine with
//!   double-completion detection
//! - [`CompletionToken`] - the `$DONE`-style sentinel handed to the test
//! - [`CallbackQueue`] - ordered execution of resumed async callbacks
//!
//! # Examples
//!
//! ```
//! use async_coordinator::Coordinator;
//! use harness_types::AsyncOutcome;
//!
//! let mut coordinator = Coordinator::new();
//! let token = coordinator.begin();
//!
//! // ... test runs its callbacks, then signals exactly once:
//! coordinator.complete(&token, AsyncOutcome::Pass).unwrap();
//! assert!(!coordinator.has_pending());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod coordinator;
mod queue;

pub use coordinator::{CompletionToken, Coordinator, TokenState};
pub use queue::{Callback, CallbackQueue};
