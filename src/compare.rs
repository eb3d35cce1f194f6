//! The structural comparison engine.
//!
//! Walks an "actual" and an "expected" JSON document in lock-step,
//! depth-first, and collects every mismatch as a [`ComparisonError`]. The
//! walk never stops at the first difference: one call surfaces every
//! mismatch at every level, so a failing test reports everything at once.
//!
//! All per-call state (the path context and the accumulated error list)
//! lives in a [`Walker`] created for the call, so one comparator can be
//! invoked concurrently from any number of threads.
//!
//! # Examples
//!
//! ```
//! use jsoncmp_rs::{compare, ComparatorOptions};
//!
//! let errors = compare(
//!     r#"{"user": {"age": 30}}"#,
//!     r#"{"user": {"age": 31}}"#,
//!     &ComparatorOptions::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].path(), Some("user.age"));
//! ```

use crate::error::ParseError;
use crate::options::ComparatorOptions;
use crate::parser::{default_parser, JsonParser};
use crate::path::PathContext;
use crate::report::ComparisonError;
use crate::value::JsonValue;
use indexmap::IndexMap;

/// Compares two JSON texts with the default parser.
///
/// Returns the ordered list of mismatches; an empty list means the
/// documents are equivalent. Malformed input is fatal and aborts the call
/// before any comparison happens.
pub fn compare(
    actual: &str,
    expected: &str,
    options: &ComparatorOptions,
) -> Result<Vec<ComparisonError>, ParseError> {
    compare_with(default_parser(), actual, expected, options)
}

/// Compares two JSON texts with an explicitly chosen parser backend.
pub fn compare_with(
    parser: &dyn JsonParser,
    actual: &str,
    expected: &str,
    options: &ComparatorOptions,
) -> Result<Vec<ComparisonError>, ParseError> {
    let actual = actual.trim();
    let expected = expected.trim();

    // A blank document takes part in the comparison as an explicit null.
    let actual_value = if actual.is_empty() {
        JsonValue::Null
    } else {
        parser.parse(actual)?
    };
    let expected_value = if expected.is_empty() {
        JsonValue::Null
    } else {
        parser.parse(expected)?
    };

    let mut walker = Walker {
        path: PathContext::new(actual, expected),
        errors: Vec::new(),
        options,
    };
    walker.compare_roots(&actual_value, &expected_value);

    // Descents and returns must pair up over the whole walk.
    debug_assert_eq!(walker.path.depth(), 0);

    Ok(walker.errors)
}

/// Per-call traversal state: the current path and the errors found so far.
struct Walker<'a> {
    path: PathContext<'a>,
    errors: Vec<ComparisonError>,
    options: &'a ComparatorOptions,
}

impl Walker<'_> {
    /// Root comparison. Container shape mismatches short-circuit with a
    /// single error instead of attempting element-wise comparison across
    /// incompatible shapes; scalar roots go through the ordinary entry
    /// machinery.
    fn compare_roots(&mut self, actual: &JsonValue, expected: &JsonValue) {
        match (expected, actual) {
            (JsonValue::Object(expected_map), JsonValue::Object(actual_map)) => {
                self.compare_objects(actual_map, expected_map);
            }
            (JsonValue::Array(expected_items), JsonValue::Array(actual_items)) => {
                self.compare_arrays(actual_items, expected_items);
            }
            (JsonValue::Object(_), other) => {
                self.errors.push(ComparisonError::ShouldBeAnObject {
                    actual_type: other.json_type(),
                });
            }
            (JsonValue::Array(_), other) => {
                self.errors.push(ComparisonError::ShouldBeAnArray {
                    actual_type: other.json_type(),
                });
            }
            _ => self.compare_values("", actual, expected),
        }
    }

    /// Object comparison: missing keys, unexpected keys, then recursion
    /// into the keys both sides share. Nothing short-circuits.
    fn compare_objects(
        &mut self,
        actual: &IndexMap<String, JsonValue>,
        expected: &IndexMap<String, JsonValue>,
    ) {
        for key in expected.keys() {
            if actual.contains_key(key) {
                continue;
            }
            let path = self.path.to_path(key);
            if self.options.is_ignored(&path) {
                continue;
            }
            self.errors.push(ComparisonError::ShouldHaveEntry { path });
        }

        for key in actual.keys() {
            if expected.contains_key(key) {
                continue;
            }
            let path = self.path.to_path(key);
            if self.options.is_ignored(&path) {
                continue;
            }
            self.errors
                .push(ComparisonError::ShouldNotHaveEntry { path });
        }

        for (key, actual_value) in actual {
            if let Some(expected_value) = expected.get(key) {
                self.compare_values(key, actual_value, expected_value);
            }
        }
    }

    /// Compares one shared entry. A type mismatch is terminal for the
    /// branch; matching containers descend with the entry pushed onto the
    /// path; null equals null; scalars compare structurally.
    fn compare_values(&mut self, key: &str, actual: &JsonValue, expected: &JsonValue) {
        let path = self.path.to_path(key);
        if self.options.is_ignored(&path) {
            return;
        }

        let actual_type = actual.json_type();
        let expected_type = expected.json_type();
        if actual_type != expected_type {
            self.errors.push(ComparisonError::ShouldBeEntryOf {
                path,
                actual_type,
                expected_type,
            });
            return;
        }

        match (actual, expected) {
            (JsonValue::Object(actual_map), JsonValue::Object(expected_map)) => {
                self.path.append(key);
                self.compare_objects(actual_map, expected_map);
                self.path.remove();
            }
            (JsonValue::Array(actual_items), JsonValue::Array(expected_items)) => {
                self.path.append(key);
                self.compare_arrays(actual_items, expected_items);
                self.path.remove();
            }
            (JsonValue::Null, JsonValue::Null) => {}
            _ => {
                if !actual.semantic_equals(expected) {
                    self.errors.push(ComparisonError::ShouldHaveEntryEqualTo {
                        path,
                        actual: actual.clone(),
                        expected: expected.clone(),
                    });
                }
            }
        }
    }

    /// Positional array comparison. A length mismatch is reported but does
    /// not suppress element-wise comparison over the common prefix.
    fn compare_arrays(&mut self, actual: &[JsonValue], expected: &[JsonValue]) {
        if actual.len() != expected.len() {
            self.errors.push(ComparisonError::ShouldHaveEntryWithSize {
                path: self.path.to_path(""),
                actual_size: actual.len(),
                expected_size: expected.len(),
            });
        }

        let common = actual.len().min(expected.len());
        for i in 0..common {
            self.compare_values(&format!("[{}]", i), &actual[i], &expected[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::JsonType;

    fn run(actual: &str, expected: &str) -> Vec<ComparisonError> {
        compare(actual, expected, &ComparatorOptions::default()).unwrap()
    }

    #[test]
    fn test_equivalent_documents() {
        assert!(run(r#"{"a": 1}"#, r#"{"a": 1}"#).is_empty());
        assert!(run("[1, 2, 3]", "[1,2,3]").is_empty());
        assert!(run("null", "null").is_empty());
    }

    #[test]
    fn test_key_order_is_irrelevant() {
        assert!(run(r#"{"a": 1, "b": 2}"#, r#"{"b": 2, "a": 1}"#).is_empty());
    }

    #[test]
    fn test_scalar_root_mismatch() {
        let errors = run("1", "2");
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ComparisonError::ShouldHaveEntryEqualTo { path, .. } if path == "(root)"
        ));
    }

    #[test]
    fn test_scalar_root_against_object() {
        let errors = run("42", r#"{"a": 1}"#);
        assert_eq!(
            errors,
            vec![ComparisonError::ShouldBeAnObject {
                actual_type: JsonType::Number
            }]
        );
    }

    #[test]
    fn test_blank_documents() {
        assert!(run("", "").is_empty());
        assert!(run("   ", "").is_empty());

        let errors = run("", r#"{"a": 1}"#);
        assert_eq!(
            errors,
            vec![ComparisonError::ShouldBeAnObject {
                actual_type: JsonType::Null
            }]
        );
    }

    #[test]
    fn test_malformed_input_is_fatal() {
        let err = compare("{oops", "{}", &ComparatorOptions::default()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson { .. }));
    }

    #[test]
    fn test_path_stack_balanced_after_errors() {
        // Deep mismatches on several branches; a leaked segment would skew
        // later paths, so check two independent branches both render right.
        let errors = run(
            r#"{"a": {"x": 1}, "b": {"y": 1}}"#,
            r#"{"a": {"x": 2}, "b": {"y": 2}}"#,
        );
        let paths: Vec<_> = errors.iter().filter_map(|e| e.path()).collect();
        assert_eq!(paths, vec!["a.x", "b.y"]);
    }
}
