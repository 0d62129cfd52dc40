/*!
 * Error Types
 * Checked-invariant failures of the conformance harness, with thiserror and miette
 *
 * The hint layer itself has no failure surface; only the harness can report
 * an error, when a hint-annotated computation disagrees with its expected value.
 */

use miette::Diagnostic;
use std::fmt::Debug;
use std::io;
use thiserror::Error;

/// Conformance harness errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConformanceError {
    #[error("Check '{check}' failed: expected {expected}, got {actual}")]
    #[diagnostic(
        code(conformance::invariant_violated),
        help("A hint changed program semantics. Rebuild with --features portable-fallback and compare.")
    )]
    InvariantViolated {
        check: &'static str,
        expected: String,
        actual: String,
    },

    #[error("Failed to write trace output: {0}")]
    #[diagnostic(
        code(conformance::output),
        help("Standard output may be closed. Check the pipe the harness writes to.")
    )]
    Output(#[from] io::Error),
}

/// Result type for conformance operations
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Fail with [`ConformanceError::InvariantViolated`] unless `actual == expected`
pub fn ensure_eq<T>(check: &'static str, expected: T, actual: T) -> ConformanceResult<()>
where
    T: PartialEq + Debug,
{
    if actual == expected {
        return Ok(());
    }

    Err(ConformanceError::InvariantViolated {
        check,
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_eq_passes() {
        assert!(ensure_eq("sum", 21, 21).is_ok());
        assert!(ensure_eq("list", [1, 2], [1, 2]).is_ok());
    }

    #[test]
    fn test_ensure_eq_reports_values() {
        let err = ensure_eq("sum", 21, 20).unwrap_err();
        match &err {
            ConformanceError::InvariantViolated {
                check,
                expected,
                actual,
            } => {
                assert_eq!(*check, "sum");
                assert_eq!(expected, "21");
                assert_eq!(actual, "20");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "Check 'sum' failed: expected 21, got 20");
    }

    #[test]
    fn test_io_error_converts() {
        let err: ConformanceError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ConformanceError::Output(_)));
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("conformance::output".to_string())
        );
    }
}
