//! Tagged completion records for evaluated thunks and expressions.

use crate::error::{ErrorKind, ScriptError, HarnessError};
use crate::value::{ObjectRef, TestValue};
use std::fmt;

/// The result of evaluating a thunk or a source-text expression.
///
/// Thrown values need not be Error objects; the corpus throws strings,
/// plain objects, and numbers. The comparator inspects the carried value's
/// class rather than assuming a common Error base.
///
/// # Examples
///
/// ```
/// use harness_types::{Completion, ErrorKind, TestValue};
///
/// let normal = Completion::Normal(TestValue::Int(2));
/// let abrupt = Completion::thrown_error(ErrorKind::TypeError, "null is not an object");
///
/// assert!(!normal.is_abrupt());
/// assert!(abrupt.is_abrupt());
/// assert_eq!(abrupt.class_name(), Some("TypeError"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Evaluation produced a value.
    Normal(TestValue),
    /// Evaluation threw; carries the thrown value as-is.
    Thrown(TestValue),
}

impl Completion {
    /// Builds an abrupt completion carrying an Error object of the given
    /// kind. The object renders as `"Kind: message"`, matching engine
    /// output.
    pub fn thrown_error(kind: ErrorKind, message: &str) -> Self {
        let rendered = format!("{}: {}", kind.name(), message);
        let object = ObjectRef::with_display(kind.name(), move || Ok(rendered.clone()));
        Completion::Thrown(TestValue::Object(object))
    }

    /// Returns whether this completion is abrupt (a throw).
    pub fn is_abrupt(&self) -> bool {
        matches!(self, Completion::Thrown(_))
    }

    /// Returns the carried value, normal or thrown.
    pub fn value(&self) -> &TestValue {
        match self {
            Completion::Normal(v) | Completion::Thrown(v) => v,
        }
    }

    /// Returns the class name of the carried value, if it has one.
    pub fn class_name(&self) -> Option<&str> {
        self.value().class_name()
    }

    /// Captures an abrupt completion as a [`ScriptError`] record.
    ///
    /// Returns `None` for normal completions.
    pub fn to_script_error(&self) -> Option<ScriptError> {
        match self {
            Completion::Thrown(v) => Some(ScriptError::from_thrown(v)),
            Completion::Normal(_) => None,
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Normal(v) => write!(f, "{}", v),
            Completion::Thrown(v) => write!(f, "threw {}", v),
        }
    }
}

/// How an asynchronous test reported its finish, mirroring `$DONE(error?)`:
/// no argument is a pass, any argument is a failure with that diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncOutcome {
    /// The async test finished successfully.
    Pass,
    /// The async test finished with an error diagnostic.
    Fail(String),
}

impl AsyncOutcome {
    /// Builds the outcome from an optional error value, the `$DONE` shape.
    pub fn from_done_argument(error: Option<&TestValue>) -> Self {
        match error {
            None => AsyncOutcome::Pass,
            Some(value) => AsyncOutcome::Fail(
                value
                    .try_display()
                    .unwrap_or_else(|_| "[unrenderable error]".to_string()),
            ),
        }
    }
}

/// Result alias for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
