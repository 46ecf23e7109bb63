//! Unit tests for SameValue and predicate compare modes

use comparator::{compare, Expectation};
use harness_types::{ObjectRef, SymbolRef, TestValue};

#[test]
fn test_nan_passes() {
    let result = compare(Expectation::same_value(
        "0 / 0",
        TestValue::Double(f64::NAN),
        TestValue::Double(f64::NAN),
    ));
    assert!(result.passed);
}

#[test]
fn test_zero_against_negative_zero_fails() {
    let result = compare(Expectation::same_value(
        "x",
        TestValue::Double(0.0),
        TestValue::Double(-0.0),
    ));
    assert!(!result.passed);
    // The diagnostic must make the two zeros distinguishable
    assert_eq!(result.message, "x should be -0. Was 0.");
}

#[test]
fn test_reflexive_for_object_identity() {
    let obj = TestValue::Object(ObjectRef::new("Object"));
    let result = compare(Expectation::same_value("obj", obj.clone(), obj));
    assert!(result.passed);
}

#[test]
fn test_distinct_objects_fail() {
    let result = compare(Expectation::same_value(
        "obj",
        TestValue::Object(ObjectRef::new("Object")),
        TestValue::Object(ObjectRef::new("Object")),
    ));
    assert!(!result.passed);
}

#[test]
fn test_symbols_compared_by_identity_only() {
    let sym = SymbolRef::new(Some("tag"));
    let same = compare(Expectation::same_value(
        "sym",
        TestValue::Symbol(sym.clone()),
        TestValue::Symbol(sym),
    ));
    assert!(same.passed);

    let different = compare(Expectation::same_value(
        "sym",
        TestValue::Symbol(SymbolRef::new(Some("tag"))),
        TestValue::Symbol(SymbolRef::new(Some("tag"))),
    ));
    assert!(!different.passed);
}

#[test]
fn test_cross_type_mismatch_mentions_types() {
    let result = compare(Expectation::same_value(
        "x",
        TestValue::String("2".to_string()),
        TestValue::Int(2),
    ));
    assert!(!result.passed);
    assert!(result.message.contains("(of type number)"));
    assert!(result.message.contains("(of type string)"));
}

#[test]
fn test_pass_message_shape() {
    let result = compare(Expectation::same_value(
        "1 + 1",
        TestValue::Int(2),
        TestValue::Int(2),
    ));
    assert_eq!(result.message, "1 + 1 is 2");
}

#[test]
fn test_predicate_type_check() {
    let f = TestValue::Object(ObjectRef::function("f"));
    let result = compare(Expectation::predicate(
        "typeof f is \"function\"",
        f,
        |v| v.type_of() == "function",
    ));
    assert!(result.passed);

    let result = compare(Expectation::predicate(
        "typeof x is \"function\"",
        TestValue::Int(1),
        |v| v.type_of() == "function",
    ));
    assert!(!result.passed);
    assert!(result.message.contains("(was 1)"));
}
