//! The rendered report and its JSON export are consumed by outer
//! tooling; these tests pin the exact shapes down.

use comparator::ComparisonResult;
use harness_types::{Completion, TestValue};
use integration_tests::scripted_context;
use recorder::{Report, ReportStatus};

#[test]
fn test_full_render_shape() {
    let mut ctx = scripted_context(&[
        ("a", Completion::Normal(TestValue::Int(1))),
        ("1", Completion::Normal(TestValue::Int(1))),
        ("b", Completion::Normal(TestValue::Int(2))),
        ("3", Completion::Normal(TestValue::Int(3))),
    ]);
    ctx.description("Tests arithmetic on locals.");
    ctx.should_be("a", "1");
    ctx.should_be("b", "3");
    ctx.finish().unwrap();

    let expected = "Tests arithmetic on locals.\n\
                    PASS a is 1\n\
                    FAIL b should be 3. Was 2.\n\
                    2 tests ran, 1 passed\n\
                    Result: failure\n";
    assert_eq!(ctx.render(), expected);
}

#[test]
fn test_render_without_description_or_status() {
    let mut report = Report::new();
    report
        .record(ComparisonResult::pass("x is 1".to_string()))
        .unwrap();
    assert_eq!(report.render(), "PASS x is 1\n1 tests ran, 1 passed\n");
}

#[test]
fn test_status_strings_are_stable() {
    assert_eq!(ReportStatus::Success.as_str(), "success");
    assert_eq!(ReportStatus::Failure.as_str(), "failure");
    assert_eq!(ReportStatus::Crashed.as_str(), "crashed");
}

#[test]
fn test_json_round_trip_preserves_everything() {
    let mut report = Report::new();
    report.describe("JSON export");
    report
        .record(ComparisonResult::pass("first".to_string()))
        .unwrap();
    report
        .record(ComparisonResult::fail("second".to_string()))
        .unwrap();
    report.finalize(ReportStatus::Failure).unwrap();

    let json = report.to_json().unwrap();
    let back = Report::from_json(&json).unwrap();
    assert_eq!(back.total(), 2);
    assert_eq!(back.passed_count(), 1);
    assert_eq!(back.status(), Some(ReportStatus::Failure));
    assert_eq!(back.render(), report.render());
}

#[test]
fn test_negative_zero_renders_with_sign() {
    let mut ctx = scripted_context(&[
        ("-x", Completion::Normal(TestValue::Double(-0.0))),
        ("0", Completion::Normal(TestValue::Int(0))),
    ]);
    ctx.should_be("-x", "0");
    ctx.finish().unwrap();
    assert!(ctx.render().contains("FAIL -x should be 0. Was -0.\n"));
}

#[test]
fn test_type_qualifier_appears_when_renderings_collide() {
    let mut ctx = scripted_context(&[
        ("s", Completion::Normal(TestValue::String("1".to_string()))),
        ("1", Completion::Normal(TestValue::Int(1))),
    ]);
    ctx.should_be("s", "1");
    ctx.finish().unwrap();
    assert!(ctx
        .render()
        .contains("FAIL s should be 1 (of type number). Was 1 (of type string).\n"));
}
