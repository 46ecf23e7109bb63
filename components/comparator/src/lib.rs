//! Value comparator for test expectations.
//!
//! This crate decides whether an actual value "equals" an expected value
//! under test semantics rather than plain equality:
//!
//! - [`Expectation`] - one requested check (label + compare mode)
//! - [`CheckMode`] - SameValue, structural sequence, throws, type-check
//! - [`compare`] - consumes an expectation into a [`ComparisonResult`]
//! - [`stringify`] - crash-safe diagnostic rendering
//!
//! # Examples
//!
//! ```
//! use comparator::{compare, Expectation};
//! use harness_types::{Completion, ErrorKind, TestValue};
//!
//! // NaN is SameValue to NaN
//! let result = compare(Expectation::same_value(
//!     "Math.sqrt(-1)",
//!     TestValue::Double(f64::NAN),
//!     TestValue::Double(f64::NAN),
//! ));
//! assert!(result.passed);
//!
//! // Throws mode: no throw is a distinct failure from a wrong throw
//! let result = compare(Expectation::throws("null.x", ErrorKind::TypeError, || {
//!     Completion::thrown_error(ErrorKind::TypeError, "null is not an object")
//! }));
//! assert!(result.passed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod compare;
mod render;

pub use compare::{compare, CheckMode, ComparisonResult, Expectation, Thunk};
pub use render::{format_match, format_mismatch, stringify};
