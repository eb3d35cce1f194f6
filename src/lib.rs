//! JSONCMP - Structural JSON comparison for test suites.
//!
//! This library compares an "actual" JSON document against an "expected" one
//! and reports every mismatch with a precise dotted/bracketed path
//! (`user.roles[0].name`), instead of stopping at the first difference.
//! Formatting, whitespace, and object key ordering never count as
//! differences; array order does.
//!
//! # Example
//!
//! ```
//! use jsoncmp_rs::{compare, ComparatorOptions};
//!
//! let errors = compare(
//!     r#"{"name": "Alice", "age": 30}"#,
//!     r#"{"name": "Alice", "age": 31}"#,
//!     &ComparatorOptions::default(),
//! )?;
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     errors[0].build_message(),
//!     "Expecting json entry \"age\" to be equal to 31 but was 30"
//! );
//! # Ok::<(), jsoncmp_rs::ParseError>(())
//! ```

pub mod assertion;
pub mod compare;
pub mod error;
pub mod options;
pub mod parser;
pub mod path;
pub mod report;
pub mod value;

// Re-export commonly used types for convenience
pub use assertion::{assert_json_eq, verify, AssertionError};
pub use compare::{compare, compare_with};
pub use error::{OutputError, ParseError};
pub use options::ComparatorOptions;
pub use parser::{default_parser, select_parser, JsonParser, SerdeParser};
pub use path::PathContext;
pub use report::{
    format_report, ComparisonError, CompositeError, Message, MessageArg, ReportFormat,
    ReportOptions,
};
pub use value::{JsonType, JsonValue};
