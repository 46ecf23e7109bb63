//! Core value and error types for the test harness.
//!
//! This crate provides the foundational types the harness components share:
//! the JavaScript value model tests assert about, thrown-error records, the
//! harness's own misuse taxonomy, and tagged completion results.
//!
//! # Overview
//!
//! - [`TestValue`] - Tagged representation of JavaScript values
//! - [`SymbolRef`] / [`ObjectRef`] - Identity handles for exotic values
//! - [`ScriptError`] / [`ErrorKind`] - Thrown JavaScript errors
//! - [`HarnessError`] - Assertion failures and harness misuse
//! - [`Completion`] - Normal-or-thrown result of an evaluation
//! - [`AsyncOutcome`] - `$DONE`-style async finish signal
//!
//! # Examples
//!
//! ```
//! use harness_types::{Completion, ErrorKind, TestValue};
//!
//! // SameValue semantics differ from strict equality
//! let nan = TestValue::Double(f64::NAN);
//! assert!(nan.same_value(&TestValue::Double(f64::NAN)));
//! assert!(!TestValue::Int(0).same_value(&TestValue::Double(-0.0)));
//!
//! // Thrown values carry their class for throws-mode matching
//! let thrown = Completion::thrown_error(ErrorKind::TypeError, "bad");
//! assert_eq!(thrown.class_name(), Some("TypeError"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod completion;
mod error;
mod value;

pub use completion::{AsyncOutcome, Completion, HarnessResult};
pub use error::{ErrorKind, HarnessError, ScriptError};
pub use value::{ObjectRef, SymbolRef, TestValue};
