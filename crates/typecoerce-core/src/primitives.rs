//! Per-origin primitive coercers.
//!
//! Each coercer turns any value into its target kind with deterministic
//! fallbacks. Only [`to_integer`] can fail, when a parsed number has no
//! `i64` representation.

use std::collections::{BTreeMap, BTreeSet};

use typecoerce_types::{parse_text, to_text as serialize, TextStyle, Value};

use crate::error::CoercionError;

/// Anything into an ordered sequence.
pub fn to_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::List(items) | Value::Tuple(items) => items,
        Value::Set(items) => items.into_iter().collect(),
        Value::Map(entries) => entries
            .into_iter()
            .map(|(k, v)| Value::pair(k, v))
            .collect(),
        Value::Str(text) => {
            let trimmed = text.trim();
            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                if let Ok(Value::List(items)) = parse_text(trimmed) {
                    return items;
                }
            }
            vec![Value::Str(trimmed.to_string())]
        }
        other => vec![other],
    }
}

/// Anything into a mapping.
pub fn to_mapping(value: Value) -> BTreeMap<Value, Value> {
    match value {
        Value::Str(text) => match parse_text(&text) {
            Ok(Value::Map(entries)) => entries,
            Ok(parsed) => wrap_value(parsed),
            Err(_) => wrap_value(Value::Str(text)),
        },
        Value::List(items) | Value::Tuple(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Value::Int(i as i64), v))
            .collect(),
        Value::Map(entries) => entries,
        other => wrap_value(other),
    }
}

fn wrap_value(value: Value) -> BTreeMap<Value, Value> {
    BTreeMap::from([(Value::from("value"), value)])
}

fn characters(text: &str) -> impl Iterator<Item = Value> + '_ {
    text.chars().map(|c| Value::Str(c.to_string()))
}

/// Anything into a fixed-size sequence.
pub fn to_fixed_sequence(value: Value) -> Vec<Value> {
    match value {
        Value::Str(text) => characters(&text).collect(),
        Value::List(items) | Value::Tuple(items) => items,
        Value::Set(items) => items.into_iter().collect(),
        Value::Map(entries) => entries
            .into_iter()
            .map(|(k, v)| Value::pair(k, v))
            .collect(),
        other => vec![other],
    }
}

/// Anything into a set. Duplicates collapse.
pub fn to_set(value: Value) -> BTreeSet<Value> {
    match value {
        Value::Str(text) => characters(&text).collect(),
        Value::List(items) | Value::Tuple(items) => items.into_iter().collect(),
        Value::Map(entries) => entries
            .into_iter()
            .map(|(k, v)| Value::pair(k, v))
            .collect(),
        Value::Set(items) => items,
        other => BTreeSet::from([other]),
    }
}

/// Text stays text; everything else is serialized.
pub fn to_text(value: Value, style: TextStyle) -> String {
    match value {
        Value::Str(text) => text,
        other => serialize(&other, style),
    }
}

/// Real-number reading of a scalar. Text is trimmed and parsed.
fn parse_real(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        Value::Str(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// 2^63, the exclusive upper bound of `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Containers count as their size; integer text is read exactly; otherwise
/// parse as a real number and truncate, with zero as the fallback.
pub fn to_integer(value: Value) -> Result<i64, CoercionError> {
    if let Some(len) = value.len() {
        return Ok(len as i64);
    }
    match &value {
        Value::Int(n) => return Ok(*n),
        Value::Str(s) => {
            if let Ok(n) = s.trim().parse::<i64>() {
                return Ok(n);
            }
        }
        _ => {}
    }
    let parsed = match parse_real(&value) {
        Some(f) if !f.is_nan() => f,
        _ => return Ok(0),
    };
    let truncated = parsed.trunc();
    if (-I64_BOUND..I64_BOUND).contains(&truncated) {
        Ok(truncated as i64)
    } else {
        Err(CoercionError::IntegerOverflow { value, parsed })
    }
}

/// Containers count as their size; otherwise parse, with zero as the
/// fallback.
pub fn to_real(value: Value) -> f64 {
    if let Some(len) = value.len() {
        return len as f64;
    }
    parse_real(&value).unwrap_or(0.0)
}

/// `"true"` and `"1"` (any case) are the only true texts; everything else
/// uses truthiness.
pub fn to_boolean(value: Value) -> bool {
    match value {
        Value::Bool(b) => b,
        Value::Str(s) => {
            let lowered = s.to_lowercase();
            lowered == "true" || lowered == "1"
        }
        other => other.is_truthy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from_json(json)
    }

    #[test]
    fn test_to_sequence() {
        assert_eq!(
            to_sequence(v(json!("[1, 2, 3]"))),
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
        assert_eq!(to_sequence(v(json!("  hello "))), vec![Value::from("hello")]);
        // Bracketed but not JSON.
        assert_eq!(to_sequence(v(json!(" [a, b] "))), vec![Value::from("[a, b]")]);
        assert_eq!(to_sequence(Value::Int(4)), vec![Value::Int(4)]);
        assert_eq!(
            to_sequence(v(json!({"a": 1}))),
            vec![Value::pair(Value::from("a"), Value::Int(1))]
        );
    }

    #[test]
    fn test_to_mapping() {
        assert_eq!(
            to_mapping(v(json!("{\"a\": 1}"))),
            BTreeMap::from([(Value::from("a"), Value::Int(1))])
        );
        assert_eq!(
            to_mapping(v(json!("[1]"))),
            BTreeMap::from([(Value::from("value"), v(json!([1])))])
        );
        assert_eq!(
            to_mapping(v(json!("nope"))),
            BTreeMap::from([(Value::from("value"), Value::from("nope"))])
        );
        assert_eq!(
            to_mapping(v(json!(["x", "y"]))),
            BTreeMap::from([
                (Value::Int(0), Value::from("x")),
                (Value::Int(1), Value::from("y"))
            ])
        );
        let set = Value::Set(BTreeSet::from([Value::Int(1)]));
        assert_eq!(to_mapping(set.clone()), BTreeMap::from([(Value::from("value"), set)]));
    }

    #[test]
    fn test_to_fixed_sequence_and_set_split_text() {
        assert_eq!(
            to_fixed_sequence(Value::from("ab")),
            vec![Value::from("a"), Value::from("b")]
        );
        assert_eq!(to_fixed_sequence(Value::Float(2.5)), vec![Value::Float(2.5)]);
        assert_eq!(to_fixed_sequence(Value::Null), vec![Value::Null]);
        assert_eq!(
            to_set(Value::from("aab")),
            BTreeSet::from([Value::from("a"), Value::from("b")])
        );
        assert_eq!(to_set(v(json!([1, 1, 2]))).len(), 2);
        assert_eq!(to_set(v(json!([0.0, -0.0]))).len(), 1);
        assert_eq!(to_set(Value::Bool(true)), BTreeSet::from([Value::Bool(true)]));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(Value::from("raw"), TextStyle::Spaced), "raw");
        assert_eq!(to_text(Value::Null, TextStyle::Spaced), "null");
        assert_eq!(to_text(v(json!([1, "a"])), TextStyle::Spaced), "[1, \"a\"]");
        assert_eq!(to_text(Value::Float(1.0), TextStyle::Spaced), "1.0");
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(to_integer(v(json!([1, 2, 3]))).unwrap(), 3);
        assert_eq!(to_integer(Value::from(" 42 ")).unwrap(), 42);
        assert_eq!(to_integer(Value::from("3.9")).unwrap(), 3);
        assert_eq!(to_integer(Value::from("-3.9")).unwrap(), -3);
        assert_eq!(to_integer(Value::from("abc")).unwrap(), 0);
        assert_eq!(to_integer(Value::from("nan")).unwrap(), 0);
        assert_eq!(to_integer(Value::Null).unwrap(), 0);
        assert_eq!(to_integer(Value::Bool(true)).unwrap(), 1);
        assert_eq!(to_integer(Value::Float(1e18)).unwrap(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_to_integer_reads_integer_text_exactly() {
        assert_eq!(to_integer(Value::from("9007199254740993")).unwrap(), 9_007_199_254_740_993);
        assert_eq!(to_integer(Value::from(" 9223372036854775807")).unwrap(), i64::MAX);
        assert_eq!(to_integer(Value::from("-9223372036854775808")).unwrap(), i64::MIN);
        assert_eq!(to_integer(Value::from("+12")).unwrap(), 12);
    }

    #[test]
    fn test_to_integer_overflow_is_a_fault() {
        let err = to_integer(Value::from("inf")).unwrap_err();
        assert!(matches!(err, CoercionError::IntegerOverflow { .. }));
        assert!(to_integer(Value::Float(1e19)).is_err());
    }

    #[test]
    fn test_to_real() {
        assert_eq!(to_real(v(json!({"a": 1, "b": 2}))), 2.0);
        assert_eq!(to_real(Value::Int(3)), 3.0);
        assert_eq!(to_real(Value::from("1e3")), 1000.0);
        assert_eq!(to_real(Value::from("x")), 0.0);
        assert!(to_real(Value::from("inf")).is_infinite());
    }

    #[test]
    fn test_to_boolean() {
        assert!(to_boolean(Value::from("TRUE")));
        assert!(to_boolean(Value::from("1")));
        assert!(!to_boolean(Value::from("yes")));
        assert!(!to_boolean(Value::from(" true")));
        assert!(to_boolean(Value::Int(-1)));
        assert!(!to_boolean(Value::List(vec![])));
        assert!(!to_boolean(Value::Null));
    }
}
