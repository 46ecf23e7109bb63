//! The per-test-file execution context.
//!
//! One `TestContext` exists per test-file execution. It owns the report,
//! the async completion coordinator, and the boxed host; it is never a
//! process-wide singleton, which keeps runs composable under an outer
//! runner.

use crate::host::Host;
use crate::metadata::TestMetadata;
use async_coordinator::{Callback, CallbackQueue, CompletionToken, Coordinator};
use comparator::ComparisonResult;
use harness_types::{AsyncOutcome, HarnessError, HarnessResult, ScriptError, TestValue};
use recorder::{Report, ReportStatus};
use std::time::Duration;

/// Execution context for one test file.
///
/// Synchronous tests record expectations and call [`TestContext::finish`]
/// at end of script. Asynchronous tests register an entry point with
/// [`TestContext::async_test`] and finalize through
/// [`TestContext::complete`], the single path by which an async test's
/// report is finalized.
///
/// # Examples
///
/// ```
/// use harness::{NullHost, TestContext};
/// use harness_types::TestValue;
/// use recorder::ReportStatus;
///
/// let mut ctx = TestContext::new(NullHost);
/// ctx.assert_same_value(TestValue::Int(2), TestValue::Int(2), Some("2 is 2"))
///     .unwrap();
/// let status = ctx.finish().unwrap();
/// assert_eq!(status, ReportStatus::Success);
/// ```
pub struct TestContext {
    report: Report,
    coordinator: Coordinator,
    callbacks: CallbackQueue<TestContext>,
    host: Box<dyn Host>,
    async_flag: Option<bool>,
}

impl TestContext {
    /// Creates a context for one test-file execution.
    pub fn new<H: Host + 'static>(host: H) -> Self {
        Self {
            report: Report::new(),
            coordinator: Coordinator::new(),
            callbacks: CallbackQueue::new(),
            host: Box::new(host),
            async_flag: None,
        }
    }

    /// Creates a context seeded from parsed test metadata: the description
    /// and whether the file declared the async flag.
    pub fn with_metadata<H: Host + 'static>(host: H, metadata: &TestMetadata) -> Self {
        let mut ctx = Self::new(host);
        if !metadata.description.is_empty() {
            ctx.report.describe(&metadata.description);
        }
        ctx.async_flag = Some(metadata.is_async());
        ctx
    }

    /// Sets the description line of the report.
    pub fn description(&mut self, message: &str) {
        self.report.describe(message);
    }

    /// Read access to the accumulated report.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Renders the report in its current state.
    pub fn render(&self) -> String {
        self.report.render()
    }

    /// Forwards to the host's optional debug hook (`noInline`, `$vm`, ...).
    /// Absent hooks are silent no-ops.
    pub fn debug_hook(&mut self, name: &str, args: &[TestValue]) -> Option<TestValue> {
        self.host.debug_hook(name, args)
    }

    pub(crate) fn eval(&mut self, source: &str) -> harness_types::Completion {
        self.host.eval(source)
    }

    pub(crate) fn record(&mut self, result: ComparisonResult) -> HarnessResult<()> {
        self.report.record(result)
    }

    fn finalize_with(&mut self, status: ReportStatus) -> HarnessResult<()> {
        self.report.finalize(status)?;
        self.host.done(&status);
        Ok(())
    }

    /// Synchronous end-of-script finalization.
    ///
    /// The terminal status derives from the recorded results; the host is
    /// notified exactly once.
    pub fn finish(&mut self) -> HarnessResult<ReportStatus> {
        let status = self.report.derived_status();
        self.finalize_with(status)?;
        Ok(status)
    }

    /// Uncaught-exception path: records the exception, finalizes the
    /// report as crashed, and notifies the host.
    pub fn crash(&mut self, error: &ScriptError) -> HarnessResult<()> {
        let _ = self
            .report
            .record(ComparisonResult::fail(format!("Uncaught exception: {}", error)));
        self.finalize_with(ReportStatus::Crashed)
    }

    /// Registers `entry` as the asynchronous entry point of this test.
    ///
    /// Returns [`HarnessError::AsyncUnsupported`] synchronously when the
    /// host exposes no completion hook, or when parsed metadata says the
    /// file never declared the async flag. The entry point receives the
    /// completion token it must eventually pass to
    /// [`TestContext::complete`].
    pub fn async_test<F>(&mut self, entry: F) -> HarnessResult<CompletionToken>
    where
        F: FnOnce(&mut TestContext, CompletionToken) -> Result<(), ScriptError> + 'static,
    {
        if self.async_flag == Some(false) || !self.host.supports_async() {
            return Err(HarnessError::AsyncUnsupported);
        }
        let token = self.coordinator.begin();
        self.callbacks
            .enqueue(Callback::new(move |ctx: &mut TestContext| entry(ctx, token)));
        Ok(token)
    }

    /// Schedules a resumed callback (a promise reaction or timer firing).
    ///
    /// Callbacks run in the order they were scheduled, which is the order
    /// their results land in the report.
    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce(&mut TestContext) -> Result<(), ScriptError> + 'static,
    {
        self.callbacks.enqueue(Callback::new(callback));
    }

    /// Arms the async timeout for pending completions.
    pub fn timeout(&mut self, duration: Duration) {
        self.coordinator.timeout(duration);
    }

    /// Signals async completion, the single finalization path for async
    /// tests.
    ///
    /// A `Pass` outcome finalizes with the status derived from recorded
    /// results; a `Fail` outcome records the diagnostic and finalizes as
    /// failure. A second signal on the same token surfaces
    /// [`HarnessError::DoubleCompletion`] and is retained in the rendered
    /// report; a completion after the report was already finalized (for
    /// example by an uncaught exception) surfaces
    /// [`HarnessError::AlreadyFinalized`].
    pub fn complete(
        &mut self,
        token: &CompletionToken,
        outcome: AsyncOutcome,
    ) -> HarnessResult<()> {
        match self.coordinator.complete(token, outcome) {
            Ok(AsyncOutcome::Pass) => {
                let status = self.report.derived_status();
                self.finalize_with(status)
            }
            Ok(AsyncOutcome::Fail(message)) => {
                let _ = self.report.record(ComparisonResult::fail(message));
                self.finalize_with(ReportStatus::Failure)
            }
            Err(error) => {
                self.report.note_misuse(&error.to_string());
                Err(error)
            }
        }
    }

    /// Drains scheduled callbacks until the report finalizes, the timeout
    /// expires, or the queue empties.
    ///
    /// An abrupt callback (a rejecting chain) finalizes the test as a
    /// failure rather than leaving it hung. Returns whether the report was
    /// finalized by the time this call returned.
    pub fn run_async(&mut self) -> bool {
        while !self.report.is_finalized() {
            if let Some(callback) = self.callbacks.dequeue() {
                if let Err(thrown) = callback.run(self) {
                    let _ = self.report.record(ComparisonResult::fail(format!(
                        "Uncaught exception: {}",
                        thrown
                    )));
                    if !self.report.is_finalized() {
                        let _ = self.finalize_with(ReportStatus::Failure);
                    }
                    break;
                }
                continue;
            }
            // Idle: the timeout is the only thing that can still fire.
            if self.coordinator.poll_expired() {
                let _ = self
                    .report
                    .record(ComparisonResult::fail("async test timed out".to_string()));
                let _ = self.finalize_with(ReportStatus::Failure);
            }
            break;
        }
        self.report.is_finalized()
    }
}
