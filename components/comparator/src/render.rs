//! Diagnostic rendering of values and mismatch messages.
//!
//! Rendering must never crash the harness: a value whose display hook
//! throws degrades to a placeholder token instead.

use harness_types::TestValue;

/// Renders a value for a diagnostic message.
///
/// Negative zero gets the explicit token `-0`, since the default number
/// conversion cannot distinguish it from `0`. A failing display hook
/// degrades to `[unrenderable Class]`.
///
/// # Examples
///
/// ```
/// use comparator::stringify;
/// use harness_types::TestValue;
///
/// assert_eq!(stringify(&TestValue::Double(-0.0)), "-0");
/// assert_eq!(stringify(&TestValue::Double(f64::NAN)), "NaN");
/// assert_eq!(stringify(&TestValue::String("hi".to_string())), "hi");
/// ```
pub fn stringify(value: &TestValue) -> String {
    if let Some(n) = value.as_number() {
        if n == 0.0 && n.is_sign_negative() {
            return "-0".to_string();
        }
    }
    match value.try_display() {
        Ok(rendered) => rendered,
        Err(_) => format!(
            "[unrenderable {}]",
            value.class_name().unwrap_or("value")
        ),
    }
}

/// Renders the PASS-side message for a matched expectation.
pub fn format_match(label: &str, expected: &TestValue) -> String {
    format!("{} is {}", label, stringify(expected))
}

/// Renders the FAIL-side message for a mismatched expectation.
///
/// When the two sides have different types the message calls that out,
/// since `"2"` versus `2` is otherwise invisible in the rendered forms.
pub fn format_mismatch(label: &str, actual: &TestValue, expected: &TestValue) -> String {
    if actual.type_of() == expected.type_of() {
        format!(
            "{} should be {}. Was {}.",
            label,
            stringify(expected),
            stringify(actual)
        )
    } else {
        format!(
            "{} should be {} (of type {}). Was {} (of type {}).",
            label,
            stringify(expected),
            expected.type_of(),
            stringify(actual),
            actual.type_of()
        )
    }
}
