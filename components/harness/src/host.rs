//! The host environment surface the harness consumes.
//!
//! A host provides synchronous script evaluation, a "test done"
//! notification channel, and optionally async completion support and
//! engine-probing debug hooks. Hooks the host does not provide are silent
//! no-ops so the same test files run on engines without them.

use harness_types::{Completion, ErrorKind, TestValue};
use recorder::ReportStatus;
use std::cell::RefCell;
use std::rc::Rc;

/// Host-provided capabilities for one test-file execution.
pub trait Host {
    /// Evaluates a source-text expression in the current test scope.
    ///
    /// This is the explicit evaluation boundary deferred-expression checks
    /// route through; a throw during evaluation is returned as an abrupt
    /// completion, never propagated.
    fn eval(&mut self, source: &str) -> Completion;

    /// Notifies the host runner of the finalized test status.
    ///
    /// The test context calls this exactly once per execution.
    fn done(&mut self, status: &ReportStatus);

    /// Whether the host exposes an async completion hook (`$DONE`).
    fn supports_async(&self) -> bool {
        false
    }

    /// Invokes an optional engine-probing hook (`noInline`, `$vm`, ...).
    ///
    /// The default is a silent no-op: many tests must run identically on
    /// engines without debug hooks.
    fn debug_hook(&mut self, name: &str, args: &[TestValue]) -> Option<TestValue> {
        let _ = (name, args);
        None
    }
}

/// A host backed by a closure evaluator, for embedders and tests.
///
/// Done notifications are recorded into a shared log so the caller can
/// observe them after handing the host to a test context.
///
/// # Examples
///
/// ```
/// use harness::{ClosureHost, Host};
/// use harness_types::{Completion, TestValue};
///
/// let mut host = ClosureHost::new(|source| match source {
///     "1+1" => Completion::Normal(TestValue::Int(2)),
///     _ => Completion::Normal(TestValue::Undefined),
/// });
/// assert_eq!(host.eval("1+1"), Completion::Normal(TestValue::Int(2)));
/// ```
pub struct ClosureHost<E>
where
    E: FnMut(&str) -> Completion,
{
    evaluator: E,
    async_support: bool,
    notifications: Rc<RefCell<Vec<ReportStatus>>>,
}

impl<E> ClosureHost<E>
where
    E: FnMut(&str) -> Completion,
{
    /// Creates a host evaluating expressions through the given closure.
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            async_support: false,
            notifications: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Enables async completion support (`$DONE` available).
    pub fn with_async(mut self) -> Self {
        self.async_support = true;
        self
    }

    /// Returns a shared handle to the done-notification log.
    pub fn notifications(&self) -> Rc<RefCell<Vec<ReportStatus>>> {
        Rc::clone(&self.notifications)
    }
}

impl<E> Host for ClosureHost<E>
where
    E: FnMut(&str) -> Completion,
{
    fn eval(&mut self, source: &str) -> Completion {
        (self.evaluator)(source)
    }

    fn done(&mut self, status: &ReportStatus) {
        self.notifications.borrow_mut().push(*status);
    }

    fn supports_async(&self) -> bool {
        self.async_support
    }
}

/// A host with no evaluator and no async support.
///
/// Every evaluation completes abruptly with a `ReferenceError`, so
/// deferred-expression checks report a failure instead of crashing; done
/// notifications are discarded.
#[derive(Debug, Default)]
pub struct NullHost;

impl Host for NullHost {
    fn eval(&mut self, source: &str) -> Completion {
        Completion::thrown_error(
            ErrorKind::ReferenceError,
            &format!("no evaluator available for `{}`", source),
        )
    }

    fn done(&mut self, _status: &ReportStatus) {}
}
