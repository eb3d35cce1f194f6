//! Assertion entry points for test suites.
//!
//! The boundary a test framework needs: a comparison that either succeeds
//! or yields one composite failure carrying every mismatch.

use crate::compare::compare;
use crate::error::ParseError;
use crate::options::ComparatorOptions;
use crate::report::CompositeError;

#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Mismatch(CompositeError),
}

/// Compares two documents, collapsing all mismatches into one error.
///
/// # Examples
///
/// ```
/// use jsoncmp_rs::assertion::verify;
/// use jsoncmp_rs::ComparatorOptions;
///
/// let options = ComparatorOptions::new().ignore_key("generated_at");
/// verify(
///     r#"{"status": "ok", "generated_at": "2024-01-01"}"#,
///     r#"{"status": "ok"}"#,
///     &options,
/// )
/// .unwrap();
/// ```
pub fn verify(
    actual: &str,
    expected: &str,
    options: &ComparatorOptions,
) -> Result<(), AssertionError> {
    let errors = compare(actual, expected, options)?;
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AssertionError::Mismatch(CompositeError::new(errors)))
    }
}

/// Panicking variant for direct use inside test functions.
///
/// The panic message is the composite report, one mismatch per line.
#[track_caller]
pub fn assert_json_eq(actual: &str, expected: &str) {
    if let Err(err) = verify(actual, expected, &ComparatorOptions::default()) {
        panic!("{}", err);
    }
}
