//! Display labels for listing fields. Every formatter is total.

use serde_json::Value;

use super::value::{non_empty_str, number_to_string, value_to_string};

pub const PRICE_ON_REQUEST: &str = "Price on request";
pub const SIZE_UNAVAILABLE: &str = "Size unavailable";
pub const LOCATION_UNAVAILABLE: &str = "Location unavailable";
pub const DEFAULT_CURRENCY: &str = "NGN";

const LOCATION_FIELDS: [&str; 4] = ["address", "city", "state", "country"];

/// Turns an enum-like code into a title-cased label: `VACANT_LAND` -> `Vacant Land`.
///
/// Empty or absent input yields an empty string, so callers can supply
/// their own placeholder.
#[must_use]
pub fn format_label(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v
            .to_lowercase()
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}

fn capitalize(chunk: &str) -> String {
    let mut chars = chunk.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a price with `en-NG` digit grouping, prefixed by the currency.
///
/// Numeric strings are grouped like numbers; any other string is shown as
/// is. Missing, `null`, empty and non-scalar prices read "Price on request".
#[must_use]
pub fn format_price_label(price: Option<&Value>, currency: Option<&Value>) -> String {
    let amount = match price {
        Some(Value::Number(n)) => n.as_f64().map_or_else(|| number_to_string(n), group_digits),
        Some(Value::String(s)) if !s.is_empty() => match parse_numeric(s) {
            Some(f) => group_digits(f),
            None => s.clone(),
        },
        _ => return PRICE_ON_REQUEST.to_string(),
    };
    let currency = currency.and_then(Value::as_str).unwrap_or(DEFAULT_CURRENCY);
    format!("{currency} {amount}")
}

/// Formats a land size with its title-cased unit, e.g. `2 Acres`.
#[must_use]
pub fn format_size_label(size: Option<&Value>, unit: Option<&Value>) -> String {
    let size = match size {
        None | Some(Value::Null) => return SIZE_UNAVAILABLE.to_string(),
        Some(Value::String(s)) if s.is_empty() => return SIZE_UNAVAILABLE.to_string(),
        Some(v) => value_to_string(v),
    };
    let unit = format_label(unit.and_then(Value::as_str));
    if unit.is_empty() {
        size
    } else {
        format!("{size} {unit}")
    }
}

/// Joins the non-empty address parts of a record with `", "`.
#[must_use]
pub fn format_location_label(record: &Value) -> String {
    let parts: Vec<&str> = LOCATION_FIELDS
        .iter()
        .filter_map(|key| non_empty_str(record, key))
        .collect();
    if parts.is_empty() {
        LOCATION_UNAVAILABLE.to_string()
    } else {
        parts.join(", ")
    }
}

/// Parses a price string the lenient way the storefront does: surrounding
/// whitespace is ignored and a blank string counts as zero.
fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Groups the integer part in threes and keeps at most three fraction digits.
fn group_digits(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn label_title_cases_each_word() {
        assert_eq!(format_label(Some("VACANT_LAND")), "Vacant Land");
        assert_eq!(format_label(Some("MIXED_USE")), "Mixed Use");
        assert_eq!(format_label(Some("ACTIVE")), "Active");
        assert_eq!(format_label(Some("certificate_of_occupancy")), "Certificate Of Occupancy");
    }

    #[test]
    fn label_of_nothing_is_empty() {
        assert_eq!(format_label(None), "");
        assert_eq!(format_label(Some("")), "");
    }

    #[test]
    fn price_missing_is_on_request() {
        assert_eq!(format_price_label(None, Some(&json!("NGN"))), PRICE_ON_REQUEST);
        assert_eq!(format_price_label(Some(&json!(null)), None), PRICE_ON_REQUEST);
        assert_eq!(format_price_label(Some(&json!("")), None), PRICE_ON_REQUEST);
        assert_eq!(format_price_label(Some(&json!({"amount": 1})), None), PRICE_ON_REQUEST);
    }

    #[test]
    fn price_numbers_are_grouped() {
        assert_eq!(
            format_price_label(Some(&json!(15_000_000)), Some(&json!("NGN"))),
            "NGN 15,000,000"
        );
        assert_eq!(format_price_label(Some(&json!(999)), None), "NGN 999");
        assert_eq!(format_price_label(Some(&json!(1234.5678)), None), "NGN 1,234.568");
        assert_eq!(format_price_label(Some(&json!(-2500)), None), "NGN -2,500");
    }

    #[test]
    fn price_numeric_strings_are_grouped() {
        assert_eq!(
            format_price_label(Some(&json!("2500000")), Some(&json!("USD"))),
            "USD 2,500,000"
        );
        assert_eq!(format_price_label(Some(&json!(" 1000 ")), None), "NGN 1,000");
    }

    #[test]
    fn price_free_text_is_kept() {
        assert_eq!(format_price_label(Some(&json!("Negotiable")), None), "NGN Negotiable");
    }

    #[test]
    fn price_defaults_currency_when_absent_or_null() {
        assert_eq!(format_price_label(Some(&json!(10)), Some(&json!(null))), "NGN 10");
    }

    #[test]
    fn size_missing_is_unavailable() {
        assert_eq!(format_size_label(Some(&json!(null)), Some(&json!("ACRES"))), SIZE_UNAVAILABLE);
        assert_eq!(format_size_label(None, None), SIZE_UNAVAILABLE);
        assert_eq!(format_size_label(Some(&json!("")), None), SIZE_UNAVAILABLE);
    }

    #[test]
    fn size_with_and_without_unit() {
        assert_eq!(format_size_label(Some(&json!(2)), Some(&json!("ACRES"))), "2 Acres");
        assert_eq!(
            format_size_label(Some(&json!("650")), Some(&json!("SQUARE_METERS"))),
            "650 Square Meters"
        );
        assert_eq!(format_size_label(Some(&json!(1.5)), None), "1.5");
    }

    #[test]
    fn location_joins_available_parts() {
        let record = json!({ "address": "12 Admiralty Way", "city": "Lekki", "state": "Lagos", "country": "" });
        assert_eq!(format_location_label(&record), "12 Admiralty Way, Lekki, Lagos");
    }

    #[test]
    fn location_missing_is_unavailable() {
        assert_eq!(format_location_label(&json!({})), LOCATION_UNAVAILABLE);
        assert_eq!(format_location_label(&json!({ "city": null })), LOCATION_UNAVAILABLE);
    }

    #[test]
    fn group_digits_handles_small_and_fractional_values() {
        assert_eq!(group_digits(0.0), "0");
        assert_eq!(group_digits(100.0), "100");
        assert_eq!(group_digits(1000.0), "1,000");
        assert_eq!(group_digits(0.5), "0.5");
        assert_eq!(group_digits(123_456.7), "123,456.7");
    }
}
