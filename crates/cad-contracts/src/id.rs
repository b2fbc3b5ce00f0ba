//! Identifier parsing
//!
//! Identifiers arrive either as JSON values (update body) or as query-string
//! text (delete). Both resolve to a positive integer or nothing.

use cad_core::traits::Id;
use serde_json::Value;

/// Resolve a JSON number or numeric string to a positive id
pub fn parse_id_value(value: &Value) -> Option<Id> {
    match value {
        Value::Number(n) => {
            if let Some(id) = n.as_i64() {
                positive(id)
            } else {
                n.as_f64().and_then(integral)
            }
        }
        Value::String(s) => parse_id_str(s),
        _ => None,
    }
}

/// Resolve query-string text to a positive id.
///
/// Surrounding whitespace is ignored; `"7.0"` resolves to 7.
pub fn parse_id_str(raw: &str) -> Option<Id> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<Id>() {
        Ok(id) => positive(id),
        Err(_) => raw.parse::<f64>().ok().and_then(integral),
    }
}

fn positive(id: Id) -> Option<Id> {
    (id > 0).then_some(id)
}

fn integral(f: f64) -> Option<Id> {
    if f.is_finite() && f.fract() == 0.0 && f >= 1.0 && f <= Id::MAX as f64 {
        Some(f as Id)
    } else {
        None
    }
}
