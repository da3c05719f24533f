//! Unit tests for the safe coercion guards.

#![cfg(feature = "safe")]

use lambdascript::safe::{self, EMPTY, Fallback};
use lambdascript::value::Value;
use rstest::rstest;

// =============================================================================
// safe::str
// =============================================================================

#[rstest]
fn str_returns_string_value() {
    let value = Value::from("test string");
    assert_eq!(safe::str(&value, Fallback::default()), value);
}

#[rstest]
fn str_returns_literal_placeholder() {
    assert_eq!(
        safe::str(&Value::from(123), "default value"),
        Value::from("default value")
    );
}

#[rstest]
fn str_returns_producer_output() {
    let describe = Fallback::produce(|value| Value::from(format!("Value is: {value}")));
    assert_eq!(safe::str(&Value::Null, describe), Value::from("Value is: null"));
}

#[rstest]
fn str_returns_empty_when_producer_output_is_not_string() {
    let echo = Fallback::produce(Value::clone);
    assert_eq!(safe::str(&Value::object::<&str, _>([]), echo), EMPTY);
}

// =============================================================================
// safe::numeric
// =============================================================================

#[rstest]
fn numeric_returns_number() {
    assert_eq!(safe::numeric(&Value::from(2.5), 0), Value::from(2.5));
}

#[rstest]
#[case(Value::from("not a number"))]
#[case(Value::NAN)]
#[case(Value::bigint(1))]
fn numeric_returns_literal_placeholder(#[case] value: Value) {
    assert_eq!(safe::numeric(&value, 0), Value::from(0));
}

#[rstest]
fn numeric_returns_producer_output() {
    let double_flag = Fallback::produce(|value| match value {
        Value::Boolean(flag) => Value::from(if *flag { 2 } else { 0 }),
        _ => Value::NAN,
    });
    assert_eq!(safe::numeric(&Value::from(true), double_flag), Value::from(2));
}

#[rstest]
#[case(Fallback::produce(|_| Value::from("not a number")))]
#[case(Fallback::produce(|_| Value::NAN))]
fn numeric_returns_empty_when_producer_output_is_invalid(#[case] fallback: Fallback) {
    assert_eq!(safe::numeric(&Value::object::<&str, _>([]), fallback), EMPTY);
}

// =============================================================================
// safe::int
// =============================================================================

#[rstest]
fn int_returns_integer() {
    assert_eq!(safe::int(&Value::from(10), Fallback::default()), Value::from(10));
}

#[rstest]
fn int_returns_literal_placeholder() {
    assert_eq!(safe::int(&Value::from(2.5), 0), Value::from(0));
}

#[rstest]
fn int_returns_parsed_producer_output() {
    let parse = Fallback::produce(|value| {
        value
            .as_str()
            .and_then(|text| text.parse::<i32>().ok())
            .map_or(Value::NAN, Value::from)
    });
    assert_eq!(safe::int(&Value::from("5"), parse), Value::from(5));
}

#[rstest]
fn int_returns_empty_when_producer_output_is_not_integer() {
    let render = Fallback::produce(|value| Value::from(value.to_string()));
    assert_eq!(safe::int(&Value::object::<&str, _>([]), render), EMPTY);
}

#[rstest]
fn literal_placeholder_is_returned_without_check() {
    assert_eq!(safe::int(&Value::Null, Value::NAN).as_number().map(f64::is_nan), Some(true));
}
