//! The value comparator: expectations, compare modes, and results.

use crate::render::{format_match, format_mismatch, stringify};
use harness_types::{Completion, ErrorKind, ScriptError, TestValue};
use serde::{Deserialize, Serialize};

/// A deferred computation that may complete normally or throw.
pub type Thunk = Box<dyn FnOnce() -> Completion>;

/// The outcome of one expectation.
///
/// Created by [`compare`]; owned by the outcome recorder afterwards and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Whether the expectation held.
    pub passed: bool,
    /// Rendered diagnostic, suitable for one report line.
    pub message: String,
    /// The captured thrown value, when the check observed a throw.
    pub thrown: Option<ScriptError>,
}

impl ComparisonResult {
    /// A passing result with the given message.
    pub fn pass(message: String) -> Self {
        Self {
            passed: true,
            message,
            thrown: None,
        }
    }

    /// A failing result with the given message.
    pub fn fail(message: String) -> Self {
        Self {
            passed: false,
            message,
            thrown: None,
        }
    }

    /// Attaches a captured thrown value to this result.
    pub fn with_thrown(mut self, thrown: ScriptError) -> Self {
        self.thrown = Some(thrown);
        self
    }
}

/// How an expectation compares its actual side to its expected side.
pub enum CheckMode {
    /// ECMAScript SameValue identity: `NaN` equals `NaN`, `+0` and `-0`
    /// are distinct.
    SameValue {
        /// The computed value.
        actual: TestValue,
        /// The value it must be.
        expected: TestValue,
    },
    /// Structural comparison of ordered sequences: equal length and
    /// element-wise SameValue.
    Sequence {
        /// The computed sequence.
        actual: Vec<TestValue>,
        /// The sequence it must equal.
        expected: Vec<TestValue>,
    },
    /// The thunk must throw, and the thrown value's class must match the
    /// expected error constructor exactly.
    Throws {
        /// The expected error constructor.
        expected: ErrorKind,
        /// Zero-argument computation expected to throw.
        thunk: Thunk,
    },
    /// Legacy stringified-throw check: the thrown value's rendered form
    /// must equal the expected string exactly.
    ThrowsMessage {
        /// The expected rendering of the thrown value.
        expected: String,
        /// Zero-argument computation expected to throw.
        thunk: Thunk,
    },
    /// Type-check mode: pass/fail is the predicate's boolean result.
    Predicate {
        /// The value under test.
        value: TestValue,
        /// The predicate deciding the check.
        predicate: Box<dyn FnOnce(&TestValue) -> bool>,
    },
}

/// One requested check: a description label plus a compare mode.
///
/// Expectations are created by the DSL at call time, are immutable, and are
/// consumed immediately by [`compare`].
///
/// # Examples
///
/// ```
/// use comparator::{compare, Expectation};
/// use harness_types::TestValue;
///
/// let result = compare(Expectation::same_value(
///     "1 + 1",
///     TestValue::Int(2),
///     TestValue::Int(2),
/// ));
/// assert!(result.passed);
/// assert_eq!(result.message, "1 + 1 is 2");
/// ```
pub struct Expectation {
    label: String,
    mode: CheckMode,
}

impl Expectation {
    /// A SameValue-mode expectation.
    pub fn same_value(label: &str, actual: TestValue, expected: TestValue) -> Self {
        Self {
            label: label.to_string(),
            mode: CheckMode::SameValue { actual, expected },
        }
    }

    /// A structural sequence expectation ("compare-array").
    pub fn sequence(label: &str, actual: Vec<TestValue>, expected: Vec<TestValue>) -> Self {
        Self {
            label: label.to_string(),
            mode: CheckMode::Sequence { actual, expected },
        }
    }

    /// A throws-mode expectation matching the thrown value's class.
    pub fn throws<F>(label: &str, expected: ErrorKind, thunk: F) -> Self
    where
        F: FnOnce() -> Completion + 'static,
    {
        Self {
            label: label.to_string(),
            mode: CheckMode::Throws {
                expected,
                thunk: Box::new(thunk),
            },
        }
    }

    /// A legacy throws-mode expectation matching the stringified throw.
    pub fn throws_message<F>(label: &str, expected: &str, thunk: F) -> Self
    where
        F: FnOnce() -> Completion + 'static,
    {
        Self {
            label: label.to_string(),
            mode: CheckMode::ThrowsMessage {
                expected: expected.to_string(),
                thunk: Box::new(thunk),
            },
        }
    }

    /// A type-check expectation decided by a predicate.
    pub fn predicate<F>(label: &str, value: TestValue, predicate: F) -> Self
    where
        F: FnOnce(&TestValue) -> bool + 'static,
    {
        Self {
            label: label.to_string(),
            mode: CheckMode::Predicate {
                value,
                predicate: Box::new(predicate),
            },
        }
    }

    /// The expectation's description label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Decides one expectation, consuming it.
///
/// Exceptions raised by thunks are captured into the result, never
/// re-thrown, regardless of the thrown value's type.
pub fn compare(expectation: Expectation) -> ComparisonResult {
    let label = expectation.label;
    match expectation.mode {
        CheckMode::SameValue { actual, expected } => {
            if actual.same_value(&expected) {
                ComparisonResult::pass(format_match(&label, &expected))
            } else {
                ComparisonResult::fail(format_mismatch(&label, &actual, &expected))
            }
        }
        CheckMode::Sequence { actual, expected } => compare_sequence(&label, &actual, &expected),
        CheckMode::Throws { expected, thunk } => compare_throws(&label, &expected, thunk),
        CheckMode::ThrowsMessage { expected, thunk } => {
            compare_throws_message(&label, &expected, thunk)
        }
        CheckMode::Predicate { value, predicate } => {
            if predicate(&value) {
                ComparisonResult::pass(label)
            } else {
                ComparisonResult::fail(format!("{} (was {})", label, stringify(&value)))
            }
        }
    }
}

fn render_sequence(values: &[TestValue]) -> String {
    let rendered: Vec<String> = values.iter().map(stringify).collect();
    format!("[{}]", rendered.join(","))
}

fn compare_sequence(
    label: &str,
    actual: &[TestValue],
    expected: &[TestValue],
) -> ComparisonResult {
    if actual.len() != expected.len() {
        return ComparisonResult::fail(format!(
            "{} should have length {}. Was {}.",
            label,
            expected.len(),
            actual.len()
        ));
    }
    for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if !a.same_value(e) {
            return ComparisonResult::fail(format!(
                "{} should be {}. Was {} (differs at index {}).",
                label,
                render_sequence(expected),
                render_sequence(actual),
                index
            ));
        }
    }
    ComparisonResult::pass(format!("{} is {}", label, render_sequence(expected)))
}

fn compare_throws(label: &str, expected: &ErrorKind, thunk: Thunk) -> ComparisonResult {
    match thunk() {
        Completion::Normal(_) => ComparisonResult::fail(format!(
            "{} should have thrown {} but did not throw",
            label,
            expected.name()
        )),
        Completion::Thrown(value) => {
            let captured = ScriptError::from_thrown(&value);
            let matches = value.class_name() == Some(expected.name());
            if matches {
                ComparisonResult::pass(format!("{} threw {}", label, expected.name()))
                    .with_thrown(captured)
            } else {
                ComparisonResult::fail(format!(
                    "{} should have thrown {} but threw {}",
                    label,
                    expected.name(),
                    stringify(&value)
                ))
                .with_thrown(captured)
            }
        }
    }
}

fn compare_throws_message(label: &str, expected: &str, thunk: Thunk) -> ComparisonResult {
    match thunk() {
        Completion::Normal(_) => ComparisonResult::fail(format!(
            "{} should have thrown {} but did not throw",
            label, expected
        )),
        Completion::Thrown(value) => {
            let rendered = stringify(&value);
            let captured = ScriptError::from_thrown(&value);
            if rendered == expected {
                ComparisonResult::pass(format!("{} threw {}", label, expected))
                    .with_thrown(captured)
            } else {
                ComparisonResult::fail(format!(
                    "{} should have thrown {}. Threw {}.",
                    label, expected, rendered
                ))
                .with_thrown(captured)
            }
        }
    }
}
