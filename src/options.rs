//! Comparison options.
//!
//! The only tunable today is the set of entry paths excluded from
//! comparison. An ignored path suppresses detection entirely for that entry
//! and everything beneath it: no missing/unexpected report, no descent.
//!
//! Paths are fully qualified, in the same dotted/bracketed syntax the
//! mismatch reports use: `metadata.timestamp`, `items[2].id`.
//!
//! # Examples
//!
//! ```
//! use jsoncmp_rs::ComparatorOptions;
//!
//! let options = ComparatorOptions::new()
//!     .ignore_key("metadata.timestamp")
//!     .ignore_key("items[0].id");
//! assert!(options.is_ignored("metadata.timestamp"));
//! assert!(!options.is_ignored("metadata"));
//! ```

use std::collections::HashSet;

/// Immutable set of ignored entry paths, built fluently.
///
/// Duplicate keys collapse; insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparatorOptions {
    ignored: HashSet<String>,
}

impl ComparatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one fully qualified path to ignore.
    pub fn ignore_key(mut self, path: impl Into<String>) -> Self {
        self.ignored.insert(path.into());
        self
    }

    /// Adds several paths at once.
    pub fn ignore_keys<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Whether the given fully qualified path is excluded from comparison.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignored.contains(path)
    }

    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }
}
