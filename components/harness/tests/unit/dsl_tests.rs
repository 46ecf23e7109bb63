//! Unit tests for the assert-family DSL

use harness::{NullHost, ReportStatus, TestContext};
use harness_types::{Completion, ErrorKind, HarnessError, TestValue};

#[test]
fn test_assert_true_passes_on_truthy() {
    let mut ctx = TestContext::new(NullHost);
    ctx.assert_true(true, None).unwrap();
    ctx.assert_true(TestValue::Int(1), None).unwrap();
    ctx.assert_true(TestValue::String("x".to_string()), None).unwrap();
    assert_eq!(ctx.report().passed_count(), 3);
}

#[test]
fn test_assert_true_fails_on_falsy() {
    let mut ctx = TestContext::new(NullHost);
    let err = ctx.assert_true(false, Some("flag should be set")).unwrap_err();
    assert!(matches!(err, HarnessError::AssertionFailed(_)));
    // The failure is recorded before the error is raised
    assert_eq!(ctx.report().failed_count(), 1);
}

#[test]
fn test_assertion_failure_aborts_remaining_script() {
    // A failing assert makes the test body return early through `?`; the
    // checks after it never record.
    fn test_body(ctx: &mut TestContext) -> Result<(), HarnessError> {
        ctx.assert_same_value(TestValue::Int(1), TestValue::Int(1), None)?;
        ctx.assert_same_value(TestValue::Int(2), TestValue::Int(3), None)?;
        ctx.assert_same_value(TestValue::Int(4), TestValue::Int(4), None)?;
        Ok(())
    }

    let mut ctx = TestContext::new(NullHost);
    assert!(test_body(&mut ctx).is_err());
    assert_eq!(ctx.report().total(), 2);
    assert_eq!(ctx.finish().unwrap(), ReportStatus::Failure);
}

#[test]
fn test_assert_same_value_nan() {
    let mut ctx = TestContext::new(NullHost);
    ctx.assert_same_value(
        TestValue::Double(f64::NAN),
        TestValue::Double(f64::NAN),
        None,
    )
    .unwrap();
}

#[test]
fn test_assert_same_value_signed_zero() {
    let mut ctx = TestContext::new(NullHost);
    let err = ctx
        .assert_same_value(TestValue::Int(0), TestValue::Double(-0.0), None)
        .unwrap_err();
    assert!(matches!(err, HarnessError::AssertionFailed(_)));
}

#[test]
fn test_caller_message_is_the_pass_line() {
    // A caller-supplied message is already a full sentence; it must not be
    // re-rendered into the `label is value` shape.
    let mut ctx = TestContext::new(NullHost);
    ctx.assert_same_value(
        TestValue::Double(f64::NAN),
        TestValue::Double(f64::NAN),
        Some("NaN is NaN"),
    )
    .unwrap();
    ctx.assert_same_value(TestValue::Int(1), TestValue::Int(1), Some("ready"))
        .unwrap();
    ctx.assert_array_equals(
        vec![TestValue::Int(1)],
        vec![TestValue::Int(1)],
        Some("elements survive"),
    )
    .unwrap();

    let rendered = ctx.render();
    assert!(rendered.contains("PASS NaN is NaN\n"));
    assert!(rendered.contains("PASS ready\n"));
    assert!(rendered.contains("PASS elements survive\n"));
}

#[test]
fn test_default_label_pass_line_names_the_value() {
    let mut ctx = TestContext::new(NullHost);
    ctx.assert_same_value(TestValue::Int(2), TestValue::Int(2), None)
        .unwrap();
    assert!(ctx.render().contains("PASS value is 2\n"));
}

#[test]
fn test_caller_message_still_labels_the_failure() {
    let mut ctx = TestContext::new(NullHost);
    let err = ctx
        .assert_same_value(TestValue::Int(3), TestValue::Int(2), Some("x"))
        .unwrap_err();
    assert_eq!(err.to_string(), "assertion failed: x should be 2. Was 3.");
    assert!(ctx.render().contains("FAIL x should be 2. Was 3.\n"));
}

#[test]
fn test_assert_throws_matching() {
    let mut ctx = TestContext::new(NullHost);
    ctx.assert_throws(
        ErrorKind::TypeError,
        || Completion::thrown_error(ErrorKind::TypeError, "null is not an object"),
        Some("null.x"),
    )
    .unwrap();
}

#[test]
fn test_assert_throws_no_throw_fails() {
    let mut ctx = TestContext::new(NullHost);
    let err = ctx
        .assert_throws(
            ErrorKind::TypeError,
            || Completion::Normal(TestValue::Undefined),
            None,
        )
        .unwrap_err();
    assert!(err.to_string().contains("did not throw"));
}

#[test]
fn test_assert_throws_wrong_kind_fails() {
    let mut ctx = TestContext::new(NullHost);
    assert!(ctx
        .assert_throws(
            ErrorKind::TypeError,
            || Completion::thrown_error(ErrorKind::RangeError, "wrong"),
            None,
        )
        .is_err());
}

#[test]
fn test_assert_array_equals() {
    let mut ctx = TestContext::new(NullHost);
    ctx.assert_array_equals(
        vec![TestValue::Int(1), TestValue::Int(2)],
        vec![TestValue::Int(1), TestValue::Int(2)],
        None,
    )
    .unwrap();

    let err = ctx
        .assert_array_equals(
            vec![TestValue::Int(1)],
            vec![TestValue::Int(1), TestValue::Int(2)],
            None,
        )
        .unwrap_err();
    assert!(err.to_string().contains("length"));
}

#[test]
fn test_assert_predicate_type_check() {
    let mut ctx = TestContext::new(NullHost);
    ctx.assert_predicate(
        TestValue::Int(7),
        |v| v.type_of() == "number",
        "typeof x is \"number\"",
    )
    .unwrap();
}

#[test]
fn test_finish_success_when_all_pass() {
    let mut ctx = TestContext::new(NullHost);
    ctx.assert_true(true, None).unwrap();
    assert_eq!(ctx.finish().unwrap(), ReportStatus::Success);
    assert!(ctx.render().ends_with("Result: success\n"));
}

#[test]
fn test_debug_hook_absent_is_noop() {
    let mut ctx = TestContext::new(NullHost);
    assert_eq!(ctx.debug_hook("noInline", &[TestValue::Undefined]), None);
    // The report is unaffected
    assert_eq!(ctx.report().total(), 0);
}
