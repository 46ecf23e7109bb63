//! Shared test harness for JavaScript conformance and regression suites.
//!
//! This crate is the facade test drivers embed: a per-test-file execution
//! context wiring the expectation DSL to the value comparator, the outcome
//! recorder, and the async completion coordinator.
//!
//! # Overview
//!
//! - [`TestContext`] - one context per test-file execution
//! - [`Host`] - the environment surface (evaluator, done notification,
//!   optional debug hooks)
//! - [`ClosureHost`] / [`NullHost`] - provided host implementations
//! - [`TestMetadata`] - YAML frontmatter the harness itself consumes
//!
//! # Examples
//!
//! ```
//! use harness::{ClosureHost, TestContext};
//! use harness_types::{Completion, TestValue};
//!
//! let host = ClosureHost::new(|source| match source {
//!     "1+1" => Completion::Normal(TestValue::Int(2)),
//!     "2" => Completion::Normal(TestValue::Int(2)),
//!     _ => Completion::Normal(TestValue::Undefined),
//! });
//! let mut ctx = TestContext::new(host);
//!
//! ctx.should_be("1+1", "2");
//! ctx.finish().unwrap();
//! assert!(ctx.render().contains("PASS 1+1 is 2"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod context;
mod dsl;
mod host;
mod metadata;

pub use context::TestContext;
pub use host::{ClosureHost, Host, NullHost};
pub use metadata::{NegativeExpectation, TestMetadata};

pub use async_coordinator::CompletionToken;
pub use recorder::{Report, ReportStatus};
