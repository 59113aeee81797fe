//! Lenient field access over untyped ad records.

use serde_json::{Number, Value};

/// Returns the field when it is present and not `null`.
pub(super) fn present<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !v.is_null())
}

/// Returns the field as a string slice when it holds a JSON string.
pub(super) fn str_field<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// Returns the field as a non-empty string slice.
pub(super) fn non_empty_str<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    str_field(record, key).filter(|s| !s.is_empty())
}

/// First non-null value among `keys`, read as a string.
///
/// Mirrors `a ?? b`: a non-null `a` of the wrong type still shadows `b`.
pub(super) fn first_present_str<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| present(record, key))
        .and_then(Value::as_str)
}

/// Loose truthiness: `false`, `0`, `""` and `null` are false.
pub(super) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a number the way the storefront shows raw numbers: integers
/// without a fractional part, other values in shortest round-trip form.
pub(super) fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| format!("{f}")).unwrap_or_default()
    }
}

/// Coerces any JSON value into its display string.
pub(super) fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
