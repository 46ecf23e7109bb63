//! Unit tests for the deferred-expression (shouldBe / shouldThrow) surface

use harness::{ClosureHost, TestContext};
use harness_types::{Completion, ErrorKind, TestValue};

/// A tiny expression table standing in for the host's evaluator.
fn arithmetic_host() -> ClosureHost<impl FnMut(&str) -> Completion> {
    ClosureHost::new(|source| match source {
        "1+1" => Completion::Normal(TestValue::Int(2)),
        "2" => Completion::Normal(TestValue::Int(2)),
        "3" => Completion::Normal(TestValue::Int(3)),
        "null.x" => Completion::thrown_error(ErrorKind::TypeError, "null is not an object"),
        other => Completion::thrown_error(
            ErrorKind::ReferenceError,
            &format!("{} is not defined", other),
        ),
    })
}

#[test]
fn test_should_be_pass_line() {
    let mut ctx = TestContext::new(arithmetic_host());
    ctx.should_be("1+1", "2");
    let rendered = ctx.render();
    assert!(rendered.contains("PASS 1+1 is 2"));
    assert_eq!(ctx.report().failed_count(), 0);
}

#[test]
fn test_should_be_mismatch_renders_all_three() {
    // The FAIL line must contain the source text, the computed value, and
    // the expected value.
    let mut ctx = TestContext::new(arithmetic_host());
    ctx.should_be("1+1", "3");
    let rendered = ctx.render();
    assert!(rendered.contains("FAIL 1+1 should be 3. Was 2."));
}

#[test]
fn test_should_be_does_not_abort_script() {
    // A failing shouldBe keeps the script reporting; contrast with the
    // assert family.
    let mut ctx = TestContext::new(arithmetic_host());
    ctx.should_be("1+1", "3");
    ctx.should_be("1+1", "2");
    assert_eq!(ctx.report().total(), 2);
    assert_eq!(ctx.report().passed_count(), 1);
}

#[test]
fn test_should_be_actual_evaluation_failure_is_reported() {
    let mut ctx = TestContext::new(arithmetic_host());
    ctx.should_be("null.x", "2");
    let rendered = ctx.render();
    assert!(rendered.contains("FAIL null.x should be 2."));
    assert!(rendered.contains("Threw exception TypeError: null is not an object"));
}

#[test]
fn test_should_be_expected_evaluation_failure_is_reported() {
    let mut ctx = TestContext::new(arithmetic_host());
    ctx.should_be("1+1", "undeclared");
    let rendered = ctx.render();
    assert!(rendered.contains("FAIL"));
    assert!(rendered.contains("Expected expression threw exception"));
}

#[test]
fn test_should_throw_without_expected() {
    let mut ctx = TestContext::new(arithmetic_host());
    ctx.should_throw("null.x", None);
    assert!(ctx
        .render()
        .contains("PASS null.x threw exception TypeError: null is not an object"));
}

#[test]
fn test_should_throw_exact_message_match() {
    let mut ctx = TestContext::new(arithmetic_host());
    ctx.should_throw("null.x", Some("TypeError: null is not an object"));
    assert_eq!(ctx.report().passed_count(), 1);

    ctx.should_throw("null.x", Some("TypeError: something else"));
    assert_eq!(ctx.report().failed_count(), 1);
}

#[test]
fn test_should_throw_no_throw_fails() {
    let mut ctx = TestContext::new(arithmetic_host());
    ctx.should_throw("1+1", None);
    assert!(ctx.render().contains("FAIL 1+1 should have thrown. Was 2."));
}

#[test]
fn test_description_appears_before_results() {
    let mut ctx = TestContext::new(arithmetic_host());
    ctx.description("This tests deferred evaluation.");
    ctx.should_be("1+1", "2");
    let rendered = ctx.render();
    let description_at = rendered.find("This tests deferred evaluation.").unwrap();
    let pass_at = rendered.find("PASS").unwrap();
    assert!(description_at < pass_at);
}
