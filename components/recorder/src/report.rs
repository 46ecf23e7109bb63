//! The outcome report for one test-file execution.

use comparator::ComparisonResult;
use harness_types::HarnessError;
use serde::{Deserialize, Serialize};

/// Terminal status of a test-file execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Every recorded expectation passed.
    Success,
    /// At least one expectation failed, or the async test reported an error.
    Failure,
    /// An uncaught exception or unrecoverable harness condition ended the
    /// test before it could finish normally.
    Crashed,
}

impl ReportStatus {
    /// Returns the report-line rendering of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Success => "success",
            ReportStatus::Failure => "failure",
            ReportStatus::Crashed => "crashed",
        }
    }
}

/// Ordered log of outcomes for one test-file execution.
///
/// One report belongs to exactly one execution; it is created empty at
/// test-file start, appended to by every expectation in call order, and
/// finalized exactly once. Finalization is terminal: later appends and
/// repeat finalizations are surfaced as harness misuse, retained so the
/// rendered report shows them, and never crash the process.
///
/// # Examples
///
/// ```
/// use comparator::ComparisonResult;
/// use recorder::{Report, ReportStatus};
///
/// let mut report = Report::new();
/// report.record(ComparisonResult::pass("1 + 1 is 2".to_string())).unwrap();
/// report.finalize(ReportStatus::Success).unwrap();
///
/// let rendered = report.render();
/// assert!(rendered.contains("PASS 1 + 1 is 2"));
/// assert!(rendered.contains("1 tests ran, 1 passed"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Report {
    /// Optional description printed at the top of the rendered report
    description: Option<String>,
    /// Results in call order
    results: Vec<ComparisonResult>,
    /// Terminal status, set exactly once by `finalize`
    status: Option<ReportStatus>,
    /// Harness-misuse conditions observed after finalization
    misuse: Vec<String>,
}

impl Report {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the test description shown at the top of the rendered report.
    pub fn describe(&mut self, description: &str) {
        self.description = Some(description.to_string());
    }

    /// Appends one comparison result in call order.
    ///
    /// Recording after finalization is a programming error: the result is
    /// not appended, the condition is retained for rendering, and
    /// [`HarnessError::RecordAfterFinalize`] is returned.
    pub fn record(&mut self, result: ComparisonResult) -> Result<(), HarnessError> {
        if self.status.is_some() {
            let error = HarnessError::RecordAfterFinalize(result.message.clone());
            self.misuse.push(error.to_string());
            return Err(error);
        }
        self.results.push(result);
        Ok(())
    }

    /// Finalizes the report with a terminal status.
    ///
    /// Idempotent-guarded: a second call returns
    /// [`HarnessError::AlreadyFinalized`], retains the misuse note, and
    /// leaves the first status untouched.
    pub fn finalize(&mut self, status: ReportStatus) -> Result<(), HarnessError> {
        if self.status.is_some() {
            let error = HarnessError::AlreadyFinalized;
            self.misuse.push(error.to_string());
            return Err(error);
        }
        self.status = Some(status);
        Ok(())
    }

    /// Retains a harness-misuse condition for rendering.
    ///
    /// Used for conditions detected outside the report itself, such as a
    /// double completion signalled through the async coordinator.
    pub fn note_misuse(&mut self, note: &str) {
        self.misuse.push(note.to_string());
    }

    /// Returns the terminal status, if finalized.
    pub fn status(&self) -> Option<ReportStatus> {
        self.status
    }

    /// Returns whether the report has been finalized.
    pub fn is_finalized(&self) -> bool {
        self.status.is_some()
    }

    /// Number of recorded expectations.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of passing expectations.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of failing expectations.
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed).count()
    }

    /// Whether every recorded expectation passed and no misuse occurred.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0 && self.misuse.is_empty()
    }

    /// The recorded results, in call order.
    pub fn results(&self) -> &[ComparisonResult] {
        &self.results
    }

    /// Harness-misuse conditions observed so far.
    pub fn misuse(&self) -> &[String] {
        &self.misuse
    }

    /// The terminal status a synchronous end-of-script finalization should
    /// use, derived from the recorded results.
    pub fn derived_status(&self) -> ReportStatus {
        if self.is_success() {
            ReportStatus::Success
        } else {
            ReportStatus::Failure
        }
    }

    /// Renders the deterministic line-oriented text report.
    ///
    /// One line per expectation in call order with a `PASS `/`FAIL `
    /// prefix, `HARNESS ERROR: ` lines for recorded misuse, a trailing
    /// summary line, and the terminal status when finalized. Downstream
    /// tooling greps this output; the shape is load-bearing.
    pub fn render(&self) -> String {
        let mut output = String::new();
        if let Some(description) = &self.description {
            output.push_str(description);
            output.push('\n');
        }
        for result in &self.results {
            let marker = if result.passed { "PASS" } else { "FAIL" };
            output.push_str(&format!("{} {}\n", marker, result.message));
        }
        for note in &self.misuse {
            output.push_str(&format!("HARNESS ERROR: {}\n", note));
        }
        output.push_str(&format!(
            "{} tests ran, {} passed\n",
            self.total(),
            self.passed_count()
        ));
        if let Some(status) = self.status {
            output.push_str(&format!("Result: {}\n", status.as_str()));
        }
        output
    }

    /// Export report as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
