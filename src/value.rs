//! Decoded JSON tree and type classification.

use indexmap::IndexMap;
use regex::Regex;
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// A number matches an optional leading `-`, digits, and an optional
/// fractional part. Exponent forms are outside the literal grammar.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// A string literal is delimited by a matching pair of double quotes.
static STRING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"^".*"$"#).unwrap());

/// One decoded JSON node.
///
/// Object keys keep their insertion order (comparison itself is
/// order-independent, but diagnostics are reported in decode order).
/// Numbers are normalized to `f64` regardless of their textual form.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Object(IndexMap<String, JsonValue>),
    Array(Vec<JsonValue>),
}

/// The six semantic kinds a JSON node can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Object,
    Array,
}

impl JsonType {
    /// Classifies raw (trimmed) JSON text without decoding it.
    ///
    /// Objects and arrays are recognized structurally from the first and last
    /// character; null, booleans, numbers, and strings by literal matching.
    /// Returns `None` for text the literal grammar does not cover.
    ///
    /// Must agree with [`JsonValue::json_type`] for every text it accepts.
    pub fn classify(text: &str) -> Option<JsonType> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if text.starts_with('{') && text.ends_with('}') {
            return Some(JsonType::Object);
        }
        if text.starts_with('[') && text.ends_with(']') {
            return Some(JsonType::Array);
        }
        match text {
            "null" => Some(JsonType::Null),
            "true" | "false" => Some(JsonType::Boolean),
            _ if NUMBER_RE.is_match(text) => Some(JsonType::Number),
            _ if STRING_RE.is_match(text) => Some(JsonType::String),
            _ => None,
        }
    }

    /// Lowercase type name, e.g. `"object"`.
    pub fn name(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Object => "object",
            JsonType::Array => "array",
        }
    }

    /// Type name with its indefinite article, as used in mismatch messages
    /// ("a number", "an object"). `null` takes no article.
    pub fn with_article(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Boolean => "a boolean",
            JsonType::Number => "a number",
            JsonType::String => "a string",
            JsonType::Object => "an object",
            JsonType::Array => "an array",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl JsonValue {
    /// Classifies an already-decoded value by its tag.
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Boolean,
            JsonValue::Number(_) => JsonType::Number,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Object(_) => JsonType::Object,
            JsonValue::Array(_) => JsonType::Array,
        }
    }

    /// Checks if two values are semantically equal (ignores key ordering,
    /// uses epsilon for floats).
    pub fn semantic_equals(&self, other: &JsonValue) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
            (JsonValue::String(a), JsonValue::String(b)) => a == b,
            (JsonValue::Number(a), JsonValue::Number(b)) => {
                const EPSILON: f64 = 1e-10;
                (a - b).abs() < EPSILON
            }
            (JsonValue::Object(a), JsonValue::Object(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                a.iter()
                    .all(|(key, value)| b.get(key).is_some_and(|v| value.semantic_equals(v)))
            }
            (JsonValue::Array(a), JsonValue::Array(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|(item_a, item_b)| item_a.semantic_equals(item_b))
            }
            _ => false,
        }
    }
}

/// Renders a number the way it would appear in a JSON document: integral
/// values without a trailing `.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(items) => serializer.collect_seq(items.iter()),
            JsonValue::Object(map) => serializer.collect_map(map.iter()),
        }
    }
}

/// Canonical text rendering: strings quoted and escaped, integral numbers
/// without a trailing `.0`, containers as compact JSON.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(b) => write!(f, "{}", b),
            JsonValue::Number(n) => f.write_str(&format_number(*n)),
            JsonValue::String(_) | JsonValue::Object(_) | JsonValue::Array(_) => {
                let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_containers() {
        assert_eq!(JsonType::classify("{}"), Some(JsonType::Object));
        assert_eq!(JsonType::classify(r#"{"a": 1}"#), Some(JsonType::Object));
        assert_eq!(JsonType::classify("[]"), Some(JsonType::Array));
        assert_eq!(JsonType::classify("  [1, 2]  "), Some(JsonType::Array));
    }

    #[test]
    fn test_classify_literals() {
        assert_eq!(JsonType::classify("null"), Some(JsonType::Null));
        assert_eq!(JsonType::classify("true"), Some(JsonType::Boolean));
        assert_eq!(JsonType::classify("false"), Some(JsonType::Boolean));
        assert_eq!(JsonType::classify("42"), Some(JsonType::Number));
        assert_eq!(JsonType::classify("-3.15"), Some(JsonType::Number));
        assert_eq!(JsonType::classify(r#""hello""#), Some(JsonType::String));
    }

    #[test]
    fn test_classify_rejects_malformed_literals() {
        assert_eq!(JsonType::classify("--1"), None);
        assert_eq!(JsonType::classify("1.2.3"), None);
        assert_eq!(JsonType::classify("1."), None);
        assert_eq!(JsonType::classify(r#"""#), None);
        assert_eq!(JsonType::classify("hello"), None);
        assert_eq!(JsonType::classify(""), None);
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(JsonType::Object.name(), "object");
        assert_eq!(JsonType::Object.with_article(), "an object");
        assert_eq!(JsonType::Number.with_article(), "a number");
        assert_eq!(JsonType::Null.with_article(), "null");
    }

    #[test]
    fn test_semantic_equals_numbers() {
        let a = JsonValue::Number(0.1 + 0.2);
        let b = JsonValue::Number(0.3);
        assert!(a.semantic_equals(&b));
        assert!(!JsonValue::Number(1.0).semantic_equals(&JsonValue::Number(2.0)));
    }

    #[test]
    fn test_semantic_equals_objects_ignore_key_order() {
        let mut a = IndexMap::new();
        a.insert("x".to_string(), JsonValue::Number(1.0));
        a.insert("y".to_string(), JsonValue::Number(2.0));

        let mut b = IndexMap::new();
        b.insert("y".to_string(), JsonValue::Number(2.0));
        b.insert("x".to_string(), JsonValue::Number(1.0));

        assert!(JsonValue::Object(a).semantic_equals(&JsonValue::Object(b)));
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(JsonValue::Null.to_string(), "null");
        assert_eq!(JsonValue::Bool(true).to_string(), "true");
        assert_eq!(JsonValue::Number(42.0).to_string(), "42");
        assert_eq!(JsonValue::Number(3.5).to_string(), "3.5");
        assert_eq!(
            JsonValue::String("hello".to_string()).to_string(),
            "\"hello\""
        );
    }

    #[test]
    fn test_display_containers_compact() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), JsonValue::Number(1.0));
        let obj = JsonValue::Object(map);
        assert_eq!(obj.to_string(), r#"{"a":1}"#);

        let arr = JsonValue::Array(vec![JsonValue::Bool(false), JsonValue::Null]);
        assert_eq!(arr.to_string(), "[false,null]");
    }
}
