//! Outcome recorder: the ordered report of one test-file execution.
//!
//! This crate accumulates pass/fail events in call order and produces the
//! line-oriented text report downstream tooling parses, plus a
//! machine-readable JSON export.
//!
//! - [`Report`] - call-ordered result log with guarded finalization
//! - [`ReportStatus`] - terminal success / failure / crashed status
//!
//! # Examples
//!
//! ```
//! use comparator::ComparisonResult;
//! use recorder::{Report, ReportStatus};
//!
//! let mut report = Report::new();
//! report.describe("Tests logical assignment.");
//! report.record(ComparisonResult::pass("x is 42".to_string())).unwrap();
//! report.record(ComparisonResult::fail("y should be 1. Was 2.".to_string())).unwrap();
//! report.finalize(report.derived_status()).unwrap();
//!
//! assert_eq!(report.status(), Some(ReportStatus::Failure));
//! assert!(report.render().ends_with("Result: failure\n"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod report;

pub use report::{Report, ReportStatus};
