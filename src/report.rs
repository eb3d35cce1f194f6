//! Mismatch records, message templates, and report formatting.
//!
//! Every mismatch the comparator finds becomes one [`ComparisonError`]: a
//! closed set of variants carrying a kind tag, the offending path, and typed
//! arguments. Message text is assembled in one place from an expectation
//! clause plus an optional mismatch clause ("Expecting json entry %s to be
//! equal to %s" / "but was %s"), so formatting and argument flattening are
//! not duplicated per kind.
//!
//! [`CompositeError`] aggregates many records into a single report, one
//! entry per line, for surfacing through a test framework as one failure.
//!
//! # Examples
//!
//! ```
//! use jsoncmp_rs::{compare, ComparatorOptions};
//!
//! let errors = compare(r#"{"a": "x"}"#, r#"{"a": "y"}"#, &ComparatorOptions::default()).unwrap();
//! assert_eq!(
//!     errors[0].build_message(),
//!     r#"Expecting json entry "a" to be equal to "y" but was "x""#
//! );
//! ```

use crate::error::OutputError;
use crate::value::{JsonType, JsonValue};
use colored::*;
use std::fmt;

/// One typed placeholder argument.
///
/// Rendering is canonical: strings are quoted, types carry their article
/// ("an object"), values print as compact JSON, sizes as decimals.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageArg {
    Str(String),
    Type(JsonType),
    Value(JsonValue),
    Size(usize),
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageArg::Str(s) => write!(f, "\"{}\"", s),
            MessageArg::Type(t) => f.write_str(t.with_article()),
            MessageArg::Value(v) => write!(f, "{}", v),
            MessageArg::Size(n) => write!(f, "{}", n),
        }
    }
}

/// A message template with `%s` placeholders plus its arguments.
///
/// Building substitutes arguments left-to-right; concatenation joins
/// templates and appends arguments, so a combined message still builds
/// correctly in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    template: String,
    args: Vec<MessageArg>,
}

impl Message {
    pub fn new(template: impl Into<String>, args: Vec<MessageArg>) -> Self {
        Self {
            template: template.into(),
            args,
        }
    }

    /// The unformatted template, placeholders intact.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Arguments in substitution order.
    pub fn args(&self) -> &[MessageArg] {
        &self.args
    }

    /// Joins two messages into one, keeping argument order left-to-right.
    pub fn concat(mut self, other: Message, separator: &str) -> Message {
        self.template.push_str(separator);
        self.template.push_str(&other.template);
        self.args.extend(other.args);
        self
    }

    /// Substitutes each `%s` with the next argument's canonical rendering.
    pub fn build(&self) -> String {
        let mut out = String::new();
        let mut args = self.args.iter();
        let mut rest = self.template.as_str();
        while let Some(idx) = rest.find("%s") {
            out.push_str(&rest[..idx]);
            match args.next() {
                Some(arg) => out.push_str(&arg.to_string()),
                None => out.push_str("%s"),
            }
            rest = &rest[idx + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// One structured mismatch found by the comparator.
///
/// Immutable once created; never merged with other errors except through
/// explicit aggregation in [`CompositeError`].
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonError {
    /// Expected root is an object, actual root is something else.
    ShouldBeAnObject { actual_type: JsonType },
    /// Expected root is an array, actual root is something else.
    ShouldBeAnArray { actual_type: JsonType },
    /// Expected key absent from actual.
    ShouldHaveEntry { path: String },
    /// Actual has a key not present in expected.
    ShouldNotHaveEntry { path: String },
    /// Type mismatch at a shared key/index.
    ShouldBeEntryOf {
        path: String,
        actual_type: JsonType,
        expected_type: JsonType,
    },
    /// Scalar value mismatch.
    ShouldHaveEntryEqualTo {
        path: String,
        actual: JsonValue,
        expected: JsonValue,
    },
    /// Array length mismatch. Element-wise comparison still ran over the
    /// common prefix.
    ShouldHaveEntryWithSize {
        path: String,
        actual_size: usize,
        expected_size: usize,
    },
}

impl ComparisonError {
    /// Stable snake_case tag for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            ComparisonError::ShouldBeAnObject { .. } => "should_be_an_object",
            ComparisonError::ShouldBeAnArray { .. } => "should_be_an_array",
            ComparisonError::ShouldHaveEntry { .. } => "should_have_entry",
            ComparisonError::ShouldNotHaveEntry { .. } => "should_not_have_entry",
            ComparisonError::ShouldBeEntryOf { .. } => "should_be_entry_of",
            ComparisonError::ShouldHaveEntryEqualTo { .. } => "should_have_entry_equal_to",
            ComparisonError::ShouldHaveEntryWithSize { .. } => "should_have_entry_with_size",
        }
    }

    /// The offending entry path; `None` for root-level shape errors.
    pub fn path(&self) -> Option<&str> {
        match self {
            ComparisonError::ShouldBeAnObject { .. } | ComparisonError::ShouldBeAnArray { .. } => {
                None
            }
            ComparisonError::ShouldHaveEntry { path }
            | ComparisonError::ShouldNotHaveEntry { path }
            | ComparisonError::ShouldBeEntryOf { path, .. }
            | ComparisonError::ShouldHaveEntryEqualTo { path, .. }
            | ComparisonError::ShouldHaveEntryWithSize { path, .. } => Some(path),
        }
    }

    fn expectation(&self) -> Message {
        match self {
            ComparisonError::ShouldBeAnObject { .. } => {
                Message::new("Expecting json to be an object", vec![])
            }
            ComparisonError::ShouldBeAnArray { .. } => {
                Message::new("Expecting json to be an array", vec![])
            }
            ComparisonError::ShouldHaveEntry { path } => Message::new(
                "Expecting json to contain entry %s",
                vec![MessageArg::Str(path.clone())],
            ),
            ComparisonError::ShouldNotHaveEntry { path } => Message::new(
                "Expecting json not to contain entry %s",
                vec![MessageArg::Str(path.clone())],
            ),
            ComparisonError::ShouldBeEntryOf {
                path,
                expected_type,
                ..
            } => Message::new(
                "Expecting json entry %s to be %s",
                vec![MessageArg::Str(path.clone()), MessageArg::Type(*expected_type)],
            ),
            ComparisonError::ShouldHaveEntryEqualTo { path, expected, .. } => Message::new(
                "Expecting json entry %s to be equal to %s",
                vec![
                    MessageArg::Str(path.clone()),
                    MessageArg::Value(expected.clone()),
                ],
            ),
            ComparisonError::ShouldHaveEntryWithSize {
                path,
                expected_size,
                ..
            } => Message::new(
                "Expecting json entry %s to have size %s",
                vec![MessageArg::Str(path.clone()), MessageArg::Size(*expected_size)],
            ),
        }
    }

    fn mismatch(&self) -> Option<Message> {
        match self {
            ComparisonError::ShouldBeAnObject { actual_type }
            | ComparisonError::ShouldBeAnArray { actual_type } => Some(Message::new(
                "but was %s",
                vec![MessageArg::Type(*actual_type)],
            )),
            ComparisonError::ShouldHaveEntry { .. }
            | ComparisonError::ShouldNotHaveEntry { .. } => None,
            ComparisonError::ShouldBeEntryOf { actual_type, .. } => Some(Message::new(
                "but was %s",
                vec![MessageArg::Type(*actual_type)],
            )),
            ComparisonError::ShouldHaveEntryEqualTo { actual, .. } => Some(Message::new(
                "but was %s",
                vec![MessageArg::Value(actual.clone())],
            )),
            ComparisonError::ShouldHaveEntryWithSize { actual_size, .. } => Some(Message::new(
                "but was %s",
                vec![MessageArg::Size(*actual_size)],
            )),
        }
    }

    /// The full message: expectation clause plus mismatch clause, arguments
    /// flattened expectation-first.
    pub fn message(&self) -> Message {
        let expectation = self.expectation();
        match self.mismatch() {
            Some(mismatch) => expectation.concat(mismatch, " "),
            None => expectation,
        }
    }

    /// The human-readable line for this mismatch.
    pub fn build_message(&self) -> String {
        self.message().build()
    }
}

/// Ordered aggregation of comparison errors, rendered one entry per line.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeError {
    errors: Vec<ComparisonError>,
}

impl CompositeError {
    pub fn new(errors: Vec<ComparisonError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[ComparisonError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Component messages joined with `",\n"`, arguments flattened
    /// left-to-right.
    pub fn message(&self) -> Message {
        let mut parts = self.errors.iter().map(ComparisonError::message);
        let first = match parts.next() {
            Some(message) => message,
            None => return Message::new("", vec![]),
        };
        parts.fold(first, |acc, message| acc.concat(message, ",\n"))
    }

    pub fn build_message(&self) -> String {
        self.message().build()
    }
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build_message())
    }
}

impl std::error::Error for CompositeError {}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Colored terminal output with ANSI escape codes.
    Terminal,
    /// Machine-readable JSON.
    Json,
    /// Plain text, no colors (suitable for piping).
    Plain,
}

/// Options for controlling report formatting.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Append a trailing summary line with per-kind counts.
    pub summary: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { summary: true }
    }
}

/// Formats a list of comparison errors for display.
pub fn format_report(
    errors: &[ComparisonError],
    format: &ReportFormat,
    options: &ReportOptions,
) -> Result<String, OutputError> {
    match format {
        ReportFormat::Terminal => Ok(format_terminal(errors, options)),
        ReportFormat::Json => format_json(errors),
        ReportFormat::Plain => Ok(format_plain(errors, options)),
    }
}

fn format_terminal(errors: &[ComparisonError], options: &ReportOptions) -> String {
    if errors.is_empty() {
        return "Documents are equivalent.".dimmed().to_string();
    }

    let mut output = String::new();
    for error in errors {
        let message = error.build_message();
        let line = match error {
            ComparisonError::ShouldHaveEntry { .. } => {
                format!("{} {}", "-".bright_red(), message.red())
            }
            ComparisonError::ShouldNotHaveEntry { .. } => {
                format!("{} {}", "+".bright_green(), message.green())
            }
            _ => format!("{} {}", "•".bright_yellow(), message.yellow()),
        };
        output.push_str(&line);
        output.push('\n');
    }

    if options.summary {
        output.push('\n');
        output.push_str(&format_summary(errors));
    }
    output
}

fn format_plain(errors: &[ComparisonError], options: &ReportOptions) -> String {
    if errors.is_empty() {
        return "Documents are equivalent.".to_string();
    }

    let mut output = String::new();
    for error in errors {
        let symbol = match error {
            ComparisonError::ShouldHaveEntry { .. } => '-',
            ComparisonError::ShouldNotHaveEntry { .. } => '+',
            _ => '•',
        };
        output.push(symbol);
        output.push(' ');
        output.push_str(&error.build_message());
        output.push('\n');
    }

    if options.summary {
        output.push('\n');
        output.push_str(&format_summary(errors));
    }
    output
}

fn format_json(errors: &[ComparisonError]) -> Result<String, OutputError> {
    use serde_json::json;

    let entries: Vec<serde_json::Value> = errors
        .iter()
        .map(|error| {
            json!({
                "kind": error.kind(),
                "path": error.path(),
                "message": error.build_message(),
            })
        })
        .collect();

    let output = json!({
        "mismatches": entries,
        "count": errors.len(),
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn format_summary(errors: &[ComparisonError]) -> String {
    if errors.is_empty() {
        return "Summary: No mismatches".to_string();
    }

    let missing = errors
        .iter()
        .filter(|e| matches!(e, ComparisonError::ShouldHaveEntry { .. }))
        .count();
    let unexpected = errors
        .iter()
        .filter(|e| matches!(e, ComparisonError::ShouldNotHaveEntry { .. }))
        .count();
    let mismatched = errors.len() - missing - unexpected;

    let mut parts = Vec::new();
    if missing > 0 {
        parts.push(format!("{} missing", missing));
    }
    if unexpected > 0 {
        parts.push(format!("{} unexpected", unexpected));
    }
    if mismatched > 0 {
        parts.push(format!("{} mismatched", mismatched));
    }

    format!("Summary: {}", parts.join(", "))
}
