//! JSON decoding behind a pluggable parser interface.
//!
//! The comparator only needs a generic value tree, so the concrete JSON
//! library sits behind the [`JsonParser`] trait. Hosts wire in a backend
//! explicitly (or let [`select_parser`] pick the first available candidate
//! from an ordered list); [`default_parser`] returns the serde_json-backed
//! implementation this crate ships.
//!
//! # Examples
//!
//! ```
//! use jsoncmp_rs::parser::{default_parser, JsonParser};
//!
//! let value = default_parser().parse(r#"{"name": "Alice"}"#).unwrap();
//! let map = default_parser().parse_object(r#"{"name": "Alice"}"#).unwrap();
//! assert_eq!(map.len(), 1);
//! # drop(value);
//! ```

use crate::error::ParseError;
use crate::value::{JsonType, JsonValue};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// A JSON decoding backend.
///
/// Implementations must be stateless and thread-safe: one instance is
/// commonly shared across an entire test suite.
pub trait JsonParser: Send + Sync {
    /// Backend name, for diagnostics and selection.
    fn name(&self) -> &'static str;

    /// Whether this backend can be used in the current build/host.
    fn available(&self) -> bool {
        true
    }

    /// Decodes a JSON text into a value tree.
    ///
    /// Numbers are normalized to `f64`; `null` decodes to an explicit null
    /// marker, never to an absent key. Object key order is preserved.
    fn parse(&self, text: &str) -> Result<JsonValue, ParseError>;

    /// Decodes a JSON text whose root must be an object.
    fn parse_object(&self, text: &str) -> Result<IndexMap<String, JsonValue>, ParseError> {
        match self.parse(text)? {
            JsonValue::Object(map) => Ok(map),
            other => Err(ParseError::unexpected_root(
                JsonType::Object,
                other.json_type(),
            )),
        }
    }

    /// Decodes a JSON text whose root must be an array.
    fn parse_array(&self, text: &str) -> Result<Vec<JsonValue>, ParseError> {
        match self.parse(text)? {
            JsonValue::Array(items) => Ok(items),
            other => Err(ParseError::unexpected_root(
                JsonType::Array,
                other.json_type(),
            )),
        }
    }
}

/// The serde_json-backed parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeParser;

impl JsonParser for SerdeParser {
    fn name(&self) -> &'static str {
        "serde_json"
    }

    fn parse(&self, text: &str) -> Result<JsonValue, ParseError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(ParseError::malformed_json)?;
        Ok(decode(value))
    }
}

/// Converts a serde_json value into the comparator's tree.
///
/// serde_json is built with `preserve_order`, so object iteration here is
/// insertion order and carries through to the `IndexMap`.
fn decode(value: serde_json::Value) -> JsonValue {
    match value {
        serde_json::Value::Null => JsonValue::Null,
        serde_json::Value::Bool(b) => JsonValue::Bool(b),
        serde_json::Value::Number(n) => JsonValue::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => JsonValue::String(s),
        serde_json::Value::Array(items) => {
            JsonValue::Array(items.into_iter().map(decode).collect())
        }
        serde_json::Value::Object(map) => {
            let decoded: IndexMap<String, JsonValue> =
                map.into_iter().map(|(k, v)| (k, decode(v))).collect();
            JsonValue::Object(decoded)
        }
    }
}

/// Picks the first available backend from an ordered candidate list.
///
/// This replaces any notion of probing the environment at runtime: the
/// caller states its preference order and the outcome is testable.
pub fn select_parser<'a>(candidates: &[&'a dyn JsonParser]) -> Option<&'a dyn JsonParser> {
    candidates.iter().copied().find(|parser| parser.available())
}

/// The backend used when the host does not wire one in.
pub fn default_parser() -> &'static dyn JsonParser {
    static DEFAULT: SerdeParser = SerdeParser;
    &DEFAULT
}

/// Reads a document from disk, distinguishing a missing file from an
/// unreadable one.
pub fn read_file(path: &Path) -> Result<String, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitives() {
        let parser = SerdeParser;
        assert_eq!(parser.parse("null").unwrap(), JsonValue::Null);
        assert_eq!(parser.parse("true").unwrap(), JsonValue::Bool(true));
        assert_eq!(parser.parse("42").unwrap(), JsonValue::Number(42.0));
        assert_eq!(parser.parse("3.15").unwrap(), JsonValue::Number(3.15));
        assert_eq!(
            parser.parse(r#""hello""#).unwrap(),
            JsonValue::String("hello".to_string())
        );
    }

    #[test]
    fn test_parse_preserves_key_order() {
        let parser = SerdeParser;
        let map = parser
            .parse_object(r#"{"z": 1, "a": 2, "m": 3}"#)
            .unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_malformed() {
        let parser = SerdeParser;
        let err = parser.parse("{invalid json}").unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson { .. }));
    }

    #[test]
    fn test_parse_object_rejects_array_root() {
        let parser = SerdeParser;
        let err = parser.parse_object("[1, 2]").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedRoot {
                expected: JsonType::Object,
                actual: JsonType::Array,
            }
        ));
    }

    #[test]
    fn test_select_parser_skips_unavailable() {
        struct Unavailable;
        impl JsonParser for Unavailable {
            fn name(&self) -> &'static str {
                "unavailable"
            }
            fn available(&self) -> bool {
                false
            }
            fn parse(&self, _text: &str) -> Result<JsonValue, ParseError> {
                unreachable!("never selected")
            }
        }

        let fallback = SerdeParser;
        let selected = select_parser(&[&Unavailable, &fallback]).unwrap();
        assert_eq!(selected.name(), "serde_json");
        assert!(select_parser(&[&Unavailable]).is_none());
    }
}
