//! Unit tests for completion records

use harness_types::{AsyncOutcome, Completion, ErrorKind, ObjectRef, TestValue};

#[test]
fn test_normal_completion_value() {
    let c = Completion::Normal(TestValue::Int(5));
    assert!(!c.is_abrupt());
    assert_eq!(c.value(), &TestValue::Int(5));
}

#[test]
fn test_thrown_error_class() {
    let c = Completion::thrown_error(ErrorKind::RangeError, "too big");
    assert_eq!(c.class_name(), Some("RangeError"));
    assert_eq!(c.to_string(), "threw RangeError: too big");
}

#[test]
fn test_thrown_string_is_preserved() {
    // Throwing a bare string is legal JavaScript and occurs in the corpus.
    let c = Completion::Thrown(TestValue::String("bare".to_string()));
    assert_eq!(c.class_name(), Some("String"));
    let err = c.to_script_error().unwrap();
    assert_eq!(err.message, "bare");
}

#[test]
fn test_thrown_plain_object() {
    let c = Completion::Thrown(TestValue::Object(ObjectRef::new("Object")));
    assert_eq!(c.class_name(), Some("Object"));
}

#[test]
fn test_async_outcome_pass_and_fail() {
    assert_eq!(AsyncOutcome::from_done_argument(None), AsyncOutcome::Pass);
    let value = TestValue::String("expected 1 but got 2".to_string());
    assert_eq!(
        AsyncOutcome::from_done_argument(Some(&value)),
        AsyncOutcome::Fail("expected 1 but got 2".to_string())
    );
}
