//! Lenient field extraction from decoded JSON objects.
//!
//! A field is "present" when its key exists and the value is truthy. Absent
//! fields and values of an unexpected type fall back to zero values, so
//! building a model from any JSON value never fails.

use chrono::{DateTime, Utc};
use serde_json::Value;

fn present<'a>(values: &'a Value, key: &str) -> Option<&'a Value> {
    values.get(key).filter(|value| is_truthy(value))
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn as_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

pub(crate) fn string_value(values: &Value, key: &str) -> String {
    present(values, key).map(as_string).unwrap_or_default()
}

pub(crate) fn int_value(values: &Value, key: &str) -> i64 {
    present(values, key).and_then(as_int).unwrap_or(0)
}

pub(crate) fn bool_value(values: &Value, key: &str) -> bool {
    present(values, key).is_some()
}

pub(crate) fn string_list(values: &Value, key: &str) -> Vec<String> {
    values
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(as_string).collect())
        .unwrap_or_default()
}

pub(crate) fn object_list<T>(values: &Value, key: &str) -> Vec<T>
where
    T: for<'a> From<&'a Value>,
{
    values
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().map(T::from).collect())
        .unwrap_or_default()
}

pub(crate) fn nested<T>(values: &Value, key: &str) -> Option<T>
where
    T: for<'a> From<&'a Value>,
{
    values.get(key).filter(|value| value.is_object()).map(T::from)
}

/// Milliseconds since the epoch, given as a number or a numeric string
pub(crate) fn millis_value(values: &Value, key: &str) -> Option<DateTime<Utc>> {
    present(values, key)
        .and_then(as_int)
        .and_then(DateTime::from_timestamp_millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_value() {
        let values = json!({"a": "text", "b": 12, "c": "", "d": null, "e": false});
        assert_eq!(string_value(&values, "a"), "text");
        assert_eq!(string_value(&values, "b"), "12");
        assert_eq!(string_value(&values, "c"), "");
        assert_eq!(string_value(&values, "d"), "");
        assert_eq!(string_value(&values, "e"), "");
        assert_eq!(string_value(&values, "missing"), "");
    }

    #[test]
    fn test_int_value() {
        let values = json!({"a": 7, "b": "42", "c": 3.9, "d": "nope", "e": null, "f": true});
        assert_eq!(int_value(&values, "a"), 7);
        assert_eq!(int_value(&values, "b"), 42);
        assert_eq!(int_value(&values, "c"), 3);
        assert_eq!(int_value(&values, "d"), 0);
        assert_eq!(int_value(&values, "e"), 0);
        assert_eq!(int_value(&values, "f"), 1);
        assert_eq!(int_value(&values, "missing"), 0);
    }

    #[test]
    fn test_bool_value() {
        let values = json!({"yes": true, "no": false, "one": 1, "empty": ""});
        assert!(bool_value(&values, "yes"));
        assert!(!bool_value(&values, "no"));
        assert!(bool_value(&values, "one"));
        assert!(!bool_value(&values, "empty"));
        assert!(!bool_value(&values, "missing"));
    }

    #[test]
    fn test_lists_require_arrays() {
        let values = json!({"list": ["a", "b"], "scalar": "a"});
        assert_eq!(string_list(&values, "list"), vec!["a", "b"]);
        assert!(string_list(&values, "scalar").is_empty());
        assert!(string_list(&values, "missing").is_empty());
    }

    #[test]
    fn test_millis_value() {
        let values = json!({"n": 1641985855887_i64, "s": "1642158864782", "bad": "x", "zero": 0});
        assert_eq!(
            millis_value(&values, "n").unwrap().timestamp_millis(),
            1641985855887
        );
        assert_eq!(
            millis_value(&values, "s").unwrap().timestamp_millis(),
            1642158864782
        );
        assert!(millis_value(&values, "bad").is_none());
        assert!(millis_value(&values, "zero").is_none());
        assert!(millis_value(&values, "missing").is_none());
    }

    #[test]
    fn test_non_object_input() {
        let values = json!("just a string");
        assert_eq!(string_value(&values, "a"), "");
        assert_eq!(int_value(&values, "a"), 0);
        assert!(string_list(&values, "a").is_empty());
    }
}
