//! Integration test suite for the conformance harness.
//!
//! This crate provides end-to-end tests that verify components work
//! together correctly across component boundaries: expectation
//! evaluation, outcome recording, and async completion coordination.

/// Re-export components for test convenience
pub mod components {
    pub use async_coordinator;
    pub use comparator;
    pub use harness;
    pub use harness_types;
    pub use recorder;
}

use harness::{ClosureHost, TestContext};
use harness_types::{Completion, ErrorKind};

/// Builds a context backed by a small table of expression results,
/// mimicking the source/value pairs a script evaluator would produce.
pub fn scripted_context(table: &[(&str, Completion)]) -> TestContext {
    let entries: Vec<(String, Completion)> = table
        .iter()
        .map(|(src, completion)| (src.to_string(), completion.clone()))
        .collect();
    TestContext::new(ClosureHost::new(move |src: &str| {
        entries
            .iter()
            .find(|(key, _)| key == src)
            .map(|(_, completion)| completion.clone())
            .unwrap_or_else(|| {
                Completion::thrown_error(
                    ErrorKind::ReferenceError,
                    &format!("{src} is not defined"),
                )
            })
    }))
}
