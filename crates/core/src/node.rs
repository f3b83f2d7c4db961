//! Node helpers: kind names and the two equality strategies
//!
//! Duplicate detection deliberately comes in two flavours and they are NOT
//! interchangeable: [`loose_eq`] is coercive across numeric representations
//! and numeric strings, [`strict_eq`] is type-and-value (deep structural for
//! containers). `append_array` deduplicates loosely, `append_unique` and
//! remove-by-value compare strictly.

use serde_json::Value;

/// Human-readable kind name for a node, for diagnostics
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coercive equality.
///
/// Numbers compare by numeric value regardless of representation, a numeric
/// string compares equal to its numeric value, and containers compare
/// element-wise loosely. Everything else falls back to [`strict_eq`].
///
/// # Examples
///
/// ```
/// use pathtree_core::node::loose_eq;
/// use serde_json::json;
///
/// assert!(loose_eq(&json!(5), &json!(5.0)));
/// assert!(loose_eq(&json!("5"), &json!(5)));
/// assert!(!loose_eq(&json!("5a"), &json!(5)));
/// ```
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => a == b,
        },
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            match (s.trim().parse::<f64>(), n.as_f64()) {
                (Ok(parsed), Some(numeric)) => parsed == numeric,
                _ => false,
            }
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| loose_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).map_or(false, |y| loose_eq(x, y)))
        }
        _ => strict_eq(a, b),
    }
}

/// Type-and-value equality; deep structural comparison for containers.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    a == b
}
