//! Error models: thrown JavaScript errors and harness-misuse errors.
//!
//! Two distinct families live here. [`ScriptError`] models an error value
//! thrown by the code under test; it is data the comparator inspects.
//! [`HarnessError`] is the harness's own error taxonomy: assertion
//! failures, double completion, and the other authoring mistakes the
//! harness must surface rather than swallow.

use crate::value::TestValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The kind of JavaScript error, by constructor.
///
/// These correspond to the error constructors conformance tests throw and
/// match against. `Custom` covers user-defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Syntax error in JavaScript code
    SyntaxError,
    /// Type error (e.g., calling a non-function)
    TypeError,
    /// Reference to an undefined variable
    ReferenceError,
    /// Value out of allowed range
    RangeError,
    /// Error in eval() handling
    EvalError,
    /// Error in URI handling functions
    URIError,
    /// The test262 harness's own error constructor
    Test262Error,
    /// A user-defined error constructor, by name
    Custom(String),
}

impl ErrorKind {
    /// Returns the constructor name for this kind.
    pub fn name(&self) -> &str {
        match self {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::URIError => "URIError",
            ErrorKind::Test262Error => "Test262Error",
            ErrorKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An error value thrown by the code under test.
///
/// # Examples
///
/// ```
/// use harness_types::{ErrorKind, ScriptError};
///
/// let error = ScriptError::new(ErrorKind::TypeError, "null is not an object");
/// assert_eq!(error.to_string(), "TypeError: null is not an object");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptError {
    /// The error constructor
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl ScriptError {
    /// Creates a new script error.
    pub fn new(kind: ErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }

    /// Captures any thrown value as a reportable error record.
    ///
    /// Tests throw non-Error values too (strings, plain objects, numbers);
    /// those are recorded under their class name with their rendered form
    /// as the message.
    pub fn from_thrown(value: &TestValue) -> Self {
        let class = value.class_name();
        let kind = match class {
            Some(name) => ErrorKind::Custom(name.to_string()),
            None => ErrorKind::Custom(value.type_of().to_string()),
        };
        let rendered = value
            .try_display()
            .unwrap_or_else(|_| format!("[object {}]", class.unwrap_or("Object")));
        // Error objects render as "Kind: message"; keep the bare message so
        // Display does not repeat the class name.
        let message = match class {
            Some(name) => rendered
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix(": "))
                .unwrap_or(&rendered)
                .to_string(),
            None => rendered,
        };
        Self { kind, message }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.message)
    }
}

/// Harness-misuse and assertion errors.
///
/// These indicate either a failed check (which aborts the synchronous
/// remainder of a test body for the `assert` family) or an authoring bug
/// in a test file: double completion, recording into a finalized report,
/// or declaring an async test on a host without completion support. All
/// of them are surfaced, never silently ignored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HarnessError {
    /// An assertion failed; carries the rendered diagnostic.
    #[error("assertion failed: {0}")]
    AssertionFailed(String),

    /// The report was finalized a second time.
    #[error("test already completed")]
    AlreadyFinalized,

    /// A completion token was completed after reaching a terminal state.
    #[error("async test completed more than once")]
    DoubleCompletion,

    /// A result arrived after the report was finalized.
    #[error("result recorded after test completion: {0}")]
    RecordAfterFinalize(String),

    /// An async test was declared but the host has no completion hook.
    #[error("async test requires host completion support")]
    AsyncUnsupported,

    /// A completion token that this coordinator never issued.
    #[error("unknown completion token")]
    UnknownToken,
}
