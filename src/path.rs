//! Traversal path tracking for mismatch diagnostics.
//!
//! While the comparator descends into nested objects and arrays it keeps the
//! current location in a [`PathContext`] so every mismatch can name its exact
//! entry. Paths are rendered dotted for object keys and bracketed for array
//! indices: `user.roles[0].name`. The context also carries the two root
//! documents being compared, so error records can quote them when needed.

use std::fmt;

/// Stack of path segments plus the two documents under comparison.
///
/// Stack discipline: every `append` during descent is matched by exactly one
/// `remove` on return. A comparison call starts and ends at depth 0.
#[derive(Debug)]
pub struct PathContext<'a> {
    segments: Vec<String>,
    actual: &'a str,
    expected: &'a str,
}

impl<'a> PathContext<'a> {
    pub fn new(actual: &'a str, expected: &'a str) -> Self {
        Self {
            segments: Vec::new(),
            actual,
            expected,
        }
    }

    /// Pushes a segment before descending into a nested value.
    pub fn append(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Pops the most recently pushed segment.
    ///
    /// Panics when the stack is empty: an unmatched `remove` is a bug in the
    /// caller, not a property of the data being compared.
    pub fn remove(&mut self) -> String {
        self.segments
            .pop()
            .expect("path context underflow: remove() without a matching append()")
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The actual document this comparison started from.
    pub fn actual_document(&self) -> &str {
        self.actual
    }

    /// The expected document this comparison started from.
    pub fn expected_document(&self) -> &str {
        self.expected
    }

    /// Renders the full path down to `last`.
    ///
    /// Segments are joined with `.`, except that the separator is suppressed
    /// immediately before an array-index segment: `foo[0]`, not `foo.[0]`.
    /// An entirely empty path renders as `(root)`.
    pub fn to_path(&self, last: &str) -> String {
        let mut rendered = String::new();
        let segments = self
            .segments
            .iter()
            .map(String::as_str)
            .chain((!last.is_empty()).then_some(last));

        for segment in segments {
            if !rendered.is_empty() && !segment.starts_with('[') {
                rendered.push('.');
            }
            rendered.push_str(segment);
        }

        if rendered.is_empty() {
            rendered.push_str("(root)");
        }
        rendered
    }
}

impl fmt::Display for PathContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path(""))
    }
}
