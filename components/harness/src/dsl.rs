//! The expectation DSL: the assertion surface test bodies call.
//!
//! Two failure policies coexist, matching the two harness families in the
//! corpus. The `assert` family records the result and then returns a
//! distinguished [`HarnessError::AssertionFailed`], aborting the remainder
//! of a synchronous test body. The `should_*` family is diagnostic-first:
//! evaluation errors and mismatches become FAIL lines and the script
//! continues.

use crate::context::TestContext;
use comparator::{compare, stringify, ComparisonResult, Expectation};
use harness_types::{Completion, ErrorKind, HarnessError, HarnessResult, TestValue};

impl TestContext {
    /// Records an expectation's result; failures become the distinguished
    /// assertion-failure error for the caller to propagate.
    ///
    /// A caller-supplied message stands on its own as the PASS line; the
    /// comparator's `label is value` rendering is for default labels and
    /// source-text labels, where the value half carries the information.
    fn check(&mut self, expectation: Expectation, pass_message: Option<&str>) -> HarnessResult<()> {
        let mut result = compare(expectation);
        if result.passed {
            if let Some(message) = pass_message {
                result.message = message.to_string();
            }
        }
        let passed = result.passed;
        let message = result.message.clone();
        self.record(result)?;
        if passed {
            Ok(())
        } else {
            Err(HarnessError::AssertionFailed(message))
        }
    }

    /// `assert(cond, message?)` — fails if the value is falsy.
    pub fn assert_true(
        &mut self,
        condition: impl Into<TestValue>,
        message: Option<&str>,
    ) -> HarnessResult<()> {
        let label = message.unwrap_or("assertion").to_string();
        self.check(
            Expectation::predicate(&label, condition.into(), |value| value.is_truthy()),
            None,
        )
    }

    /// `assert.sameValue(actual, expected, message?)` — SameValue
    /// semantics: `NaN` equals `NaN`, `+0` and `-0` are distinct.
    pub fn assert_same_value(
        &mut self,
        actual: TestValue,
        expected: TestValue,
        message: Option<&str>,
    ) -> HarnessResult<()> {
        let label = message.unwrap_or("value");
        self.check(Expectation::same_value(label, actual, expected), message)
    }

    /// `assert.throws(ErrorCtor, thunk, message?)` — the thunk must throw
    /// and the thrown value's class must match the expected constructor.
    pub fn assert_throws<F>(
        &mut self,
        expected: ErrorKind,
        thunk: F,
        message: Option<&str>,
    ) -> HarnessResult<()>
    where
        F: FnOnce() -> Completion + 'static,
    {
        let label = message.unwrap_or("thunk");
        self.check(Expectation::throws(label, expected, thunk), None)
    }

    /// `assert.compareArray(actual, expected, message?)` — structural
    /// comparison: equal length, element-wise SameValue.
    pub fn assert_array_equals(
        &mut self,
        actual: Vec<TestValue>,
        expected: Vec<TestValue>,
        message: Option<&str>,
    ) -> HarnessResult<()> {
        let label = message.unwrap_or("array");
        self.check(Expectation::sequence(label, actual, expected), message)
    }

    /// Type-check assertion: pass/fail is the predicate's boolean result.
    pub fn assert_predicate<F>(
        &mut self,
        value: TestValue,
        predicate: F,
        message: &str,
    ) -> HarnessResult<()>
    where
        F: FnOnce(&TestValue) -> bool + 'static,
    {
        self.check(Expectation::predicate(message, value, predicate), None)
    }

    /// `shouldBe(actualExprText, expectedExprText)` — deferred-expression
    /// mode.
    ///
    /// Both sides are source text, evaluated once each through the host
    /// evaluator. An evaluation failure is reported as the FAIL message
    /// rather than propagated, so the remaining test body keeps reporting;
    /// nothing in this method ever returns an error to the caller.
    pub fn should_be(&mut self, actual_src: &str, expected_src: &str) {
        let actual = self.eval(actual_src);
        let expected = self.eval(expected_src);

        let result = match (actual, expected) {
            (_, Completion::Thrown(value)) => ComparisonResult::fail(format!(
                "{} should be {}. Expected expression threw exception {}",
                actual_src,
                expected_src,
                stringify(&value)
            )),
            (Completion::Thrown(value), Completion::Normal(expected_value)) => {
                ComparisonResult::fail(format!(
                    "{} should be {}. Threw exception {}",
                    actual_src,
                    stringify(&expected_value),
                    stringify(&value)
                ))
            }
            (Completion::Normal(actual_value), Completion::Normal(expected_value)) => {
                if actual_value.same_value(&expected_value) {
                    // The PASS line echoes the expected source text, the
                    // form the corpus' expected files contain.
                    ComparisonResult::pass(format!("{} is {}", actual_src, expected_src))
                } else {
                    compare(Expectation::same_value(
                        actual_src,
                        actual_value,
                        expected_value,
                    ))
                }
            }
        };
        // Recording after finalize leaves the misuse note in the report.
        let _ = self.record(result);
    }

    /// `shouldThrow(exprText, expectedText?)` — deferred-expression throw
    /// check under the same non-fatal boundary as [`should_be`].
    ///
    /// With an expected string the thrown value's rendered form must match
    /// exactly (the legacy stringified check); without one any throw
    /// passes.
    ///
    /// [`should_be`]: TestContext::should_be
    pub fn should_throw(&mut self, src: &str, expected: Option<&str>) {
        let result = match self.eval(src) {
            Completion::Normal(value) => ComparisonResult::fail(format!(
                "{} should have thrown. Was {}.",
                src,
                stringify(&value)
            )),
            Completion::Thrown(value) => {
                let rendered = stringify(&value);
                match expected {
                    None => {
                        ComparisonResult::pass(format!("{} threw exception {}", src, rendered))
                    }
                    Some(expected) if rendered == expected => {
                        ComparisonResult::pass(format!("{} threw exception {}", src, rendered))
                    }
                    Some(expected) => ComparisonResult::fail(format!(
                        "{} should have thrown {}. Threw {}.",
                        src, expected, rendered
                    )),
                }
            }
        };
        let _ = self.record(result);
    }
}
