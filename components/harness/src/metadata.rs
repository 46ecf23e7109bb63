//! Test-file metadata parsed from YAML frontmatter.
//!
//! test262-style files carry metadata between `/*---` and `---*/`. The
//! harness needs the subset that changes its own behavior: the async flag
//! (which requires host completion support), the expected-error clause for
//! negative tests, and the description. Test selection stays with the
//! outer runner.

use harness_types::ErrorKind;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Expected error for a negative test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NegativeExpectation {
    /// Phase where the error is expected: "parse", "resolution", or
    /// "runtime"
    pub phase: String,
    /// Error constructor expected (e.g., "SyntaxError", "TypeError")
    #[serde(rename = "type")]
    pub error_type: String,
}

/// Test metadata parsed from YAML frontmatter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct TestMetadata {
    /// Human-readable description of what the test verifies
    pub description: String,
    /// Expected error for negative tests
    pub negative: Option<NegativeExpectation>,
    /// Helper files that must be loaded before the test
    pub includes: Vec<String>,
    /// Test execution flags (e.g., "onlyStrict", "module", "async")
    pub flags: HashSet<String>,
    /// ECMAScript features required by this test
    pub features: Vec<String>,
    /// ES section identifier
    pub esid: Option<String>,
}

impl TestMetadata {
    /// Parses YAML frontmatter from test file source.
    pub fn parse(source: &str) -> Result<Self, String> {
        let re = Regex::new(r"(?s)/\*---\n(.+?)\n---\*/")
            .map_err(|e| format!("Failed to compile regex: {}", e))?;

        let yaml = re
            .captures(source)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .ok_or("No YAML frontmatter found in test file")?;

        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse YAML frontmatter: {}", e))
    }

    /// Whether the file declared itself asynchronous.
    ///
    /// Async tests require the host to expose a completion hook; the
    /// context refuses `async_test` registration otherwise.
    pub fn is_async(&self) -> bool {
        self.flags.contains("async")
    }

    /// Whether this is a negative test (an error is the expected result).
    pub fn is_negative(&self) -> bool {
        self.negative.is_some()
    }

    /// The expected error constructor for a negative test.
    pub fn expected_error(&self) -> Option<ErrorKind> {
        self.negative.as_ref().map(|n| match n.error_type.as_str() {
            "SyntaxError" => ErrorKind::SyntaxError,
            "TypeError" => ErrorKind::TypeError,
            "ReferenceError" => ErrorKind::ReferenceError,
            "RangeError" => ErrorKind::RangeError,
            "EvalError" => ErrorKind::EvalError,
            "URIError" => ErrorKind::URIError,
            "Test262Error" => ErrorKind::Test262Error,
            other => ErrorKind::Custom(other.to_string()),
        })
    }

    /// Whether the test runs in strict mode only.
    pub fn is_strict_only(&self) -> bool {
        self.flags.contains("onlyStrict")
    }

    /// Whether the test is an ES module test.
    pub fn is_module(&self) -> bool {
        self.flags.contains("module")
    }
}
