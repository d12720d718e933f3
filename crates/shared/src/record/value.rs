use serde_json::{Map, Value};

/// First value present under any of `keys`, front to back. An explicit
/// JSON `null` counts as absent, so a later alias can still win.
pub fn first_present<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

/// Permissive numeric coercion. Numbers pass through, strings are parsed
/// after trimming (an empty string reads as zero), booleans map to 1/0.
/// Anything else, or a non-finite result, yields `fallback`. Callers must
/// not rely on this to reject bad input; validation happens at the write
/// boundary, not here.
pub fn to_number(value: &Value, fallback: f64) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => n,
        _ => fallback,
    }
}

/// Identity coercion: integers and integral strings resolve to an id,
/// everything else to `None`.
pub fn parse_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn first_present_skips_null_and_respects_order() {
        let rec = record(json!({"price": null, "unit_price": 7, "unitPrice": 9}));

        let hit = first_present(&rec, &["price", "unitPrice", "unit_price"]);
        assert_eq!(hit, Some(&json!(9)));
    }

    #[test]
    fn first_present_absent_when_all_missing() {
        let rec = record(json!({"other": 1}));
        assert_eq!(first_present(&rec, &["price", "unit_price"]), None);
    }

    #[test]
    fn to_number_coerces_strings_and_bools() {
        assert_eq!(to_number(&json!("12.5"), 0.0), 12.5);
        assert_eq!(to_number(&json!("  3 "), 0.0), 3.0);
        assert_eq!(to_number(&json!(""), 99.0), 0.0);
        assert_eq!(to_number(&json!(true), 0.0), 1.0);
    }

    #[test]
    fn to_number_falls_back_on_garbage() {
        assert_eq!(to_number(&json!("abc"), 0.0), 0.0);
        assert_eq!(to_number(&json!({"nested": 1}), 0.0), 0.0);
        assert_eq!(to_number(&json!([1]), 5.0), 5.0);
    }

    #[test]
    fn parse_id_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_id(&json!(42)), Some(42));
        assert_eq!(parse_id(&json!("17")), Some(17));
        assert_eq!(parse_id(&json!("x9")), None);
        assert_eq!(parse_id(&json!(null)), None);
    }
}
