//! Display values for notation characters
//!
//! Callers may map a notation character to the value a stream actually
//! emitted. The renderer only needs a short label for each one.

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Longest label drawn for a structured value, in characters
pub const MAX_STRUCTURED_LABEL_CHARS: usize = 12;

/// Mapping from notation character to display value
pub type ValueMap = BTreeMap<String, DisplayValue>;

/// A caller-supplied value attached to a notation character
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum DisplayValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    /// Arrays and objects
    Structured(serde_json::Value),
}

impl DisplayValue {
    /// Label drawn inside a marble
    pub fn label(&self) -> String {
        match self {
            DisplayValue::Null => "null".to_string(),
            DisplayValue::Bool(b) => b.to_string(),
            DisplayValue::Number(n) => number_label(n),
            DisplayValue::Text(s) => s.clone(),
            DisplayValue::Structured(v) => shorten(&v.to_string(), MAX_STRUCTURED_LABEL_CHARS),
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<serde_json::Value> for DisplayValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => DisplayValue::Null,
            serde_json::Value::Bool(b) => DisplayValue::Bool(b),
            serde_json::Value::Number(n) => DisplayValue::Number(n),
            serde_json::Value::String(s) => DisplayValue::Text(s),
            other => DisplayValue::Structured(other),
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        DisplayValue::Text(value.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        DisplayValue::Text(value)
    }
}

impl From<bool> for DisplayValue {
    fn from(value: bool) -> Self {
        DisplayValue::Bool(value)
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        DisplayValue::Number(value.into())
    }
}

impl From<f64> for DisplayValue {
    /// Non-finite floats have no JSON form and fall back to text
    fn from(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(n) => DisplayValue::Number(n),
            None => DisplayValue::Text(value.to_string()),
        }
    }
}

/// JavaScript prints integral floats without a fraction (`3`, not `3.0`)
fn number_label(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_labels() {
        assert_eq!(DisplayValue::Null.label(), "null");
        assert_eq!(DisplayValue::from(true).label(), "true");
        assert_eq!(DisplayValue::from(42i64).label(), "42");
        assert_eq!(DisplayValue::from(2.5).label(), "2.5");
        assert_eq!(DisplayValue::from(3.0).label(), "3");
        assert_eq!(DisplayValue::from(-3i64).label(), "-3");
        assert_eq!(DisplayValue::from("hi").label(), "hi");
    }

    #[test]
    fn test_non_finite_float_does_not_fail() {
        assert_eq!(DisplayValue::from(f64::NAN).label(), "NaN");
        assert_eq!(DisplayValue::from(f64::INFINITY).label(), "inf");
    }

    #[test]
    fn test_structured_labels_are_compact_and_short() {
        assert_eq!(DisplayValue::from(json!([1, 2])).label(), "[1,2]");
        assert_eq!(DisplayValue::from(json!({"id": 1})).label(), r#"{"id":1}"#);

        let long = DisplayValue::from(json!({"name": "alice", "age": 30}));
        let label = long.label();
        assert_eq!(label.chars().count(), MAX_STRUCTURED_LABEL_CHARS);
        assert!(label.ends_with('…'));
        assert!(label.starts_with(r#"{"age":30"#));
    }

    #[test]
    fn test_untagged_deserialization() {
        let map: ValueMap = serde_json::from_str(
            r#"{"a":1,"b":"two","c":false,"d":null,"e":{"x":[1]}}"#,
        )
        .unwrap();
        assert_eq!(map["a"], DisplayValue::from(1i64));
        assert_eq!(map["b"], DisplayValue::from("two"));
        assert_eq!(map["c"], DisplayValue::Bool(false));
        assert_eq!(map["d"], DisplayValue::Null);
        assert!(matches!(map["e"], DisplayValue::Structured(_)));
    }
}
