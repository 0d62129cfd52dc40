/*!
 * Conformance Harness
 * Fixed sequence of hint exercises with checked results
 */

use super::demo::{self, BranchOutcome};
use crate::core::errors::{ensure_eq, ConformanceResult};
use crate::core::hints::{black_box, HintCapabilities, Restrict, RestrictMut, CAPABILITIES};
use std::io::Write;
use tracing::{debug, error, info, instrument};

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConformanceReport {
    pub checks_passed: usize,
    pub capabilities: HintCapabilities,
}

/// Runs every hint once and checks each computed value
///
/// Trace lines go to `out`; diagnostics go through `tracing`.
pub struct ConformanceHarness<W: Write> {
    out: W,
    checks_passed: usize,
}

impl<W: Write> ConformanceHarness<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            checks_passed: 0,
        }
    }

    /// Run the full sequence, stopping at the first failed check or write
    #[instrument(skip(self), fields(capabilities = %CAPABILITIES))]
    pub fn run(&mut self) -> ConformanceResult<ConformanceReport> {
        info!("Running hint conformance checks");

        demo::forbidden_inline_call(&mut self.out)?;
        debug!(hint = "forbid_inline", "Exercised");

        let sum = demo::always_inline_add(black_box(2), black_box(3));
        self.check("force_inline add(2, 3)", 5, sum)?;

        for (input, expected) in [
            (1, BranchOutcome::Likely),
            (-1, BranchOutcome::Unlikely),
            (0, BranchOutcome::Neither),
        ] {
            let outcome = demo::branch_outcome(black_box(input), &mut self.out)?;
            self.check("branch hint outcome", expected, outcome)?;
        }

        let values = [1, 2, 3, 4, 5];
        let printed = demo::prefetch_print(&values, &mut self.out)?;
        self.check("prefetch print count", values.len(), printed)?;

        demo::hot_call(&mut self.out)?;
        debug!(hint = "hot", "Exercised");
        demo::cold_call(&mut self.out)?;
        debug!(hint = "cold", "Exercised");

        let a = [1, 2, 3];
        let b = [4, 5, 6];
        // SAFETY: both arrays are live, hold 3 elements and are only read
        let total = unsafe { demo::restrict_sum_raw(a.as_ptr(), b.as_ptr(), a.len()) };
        self.check("restrict sum", 21, total)?;

        let mut scaled = [0; 3];
        let written =
            demo::restrict_scale_into(RestrictMut::new(&mut scaled), Restrict::new(&a), 2);
        self.check("restrict scale count", 3, written)?;
        self.check("restrict scale values", [2, 4, 6], scaled)?;

        writeln!(self.out, "All perf hint checks passed.")?;
        self.out.flush()?;

        let report = ConformanceReport {
            checks_passed: self.checks_passed,
            capabilities: CAPABILITIES,
        };
        info!(checks_passed = report.checks_passed, "Conformance run complete");
        Ok(report)
    }

    /// Consume the harness, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn check<T>(&mut self, check: &'static str, expected: T, actual: T) -> ConformanceResult<()>
    where
        T: PartialEq + std::fmt::Debug,
    {
        if let Err(err) = ensure_eq(check, expected, actual) {
            error!(check, error = %err, "Checked invariant violated");
            return Err(err);
        }
        self.checks_passed += 1;
        debug!(check, "Check passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ConformanceError;

    #[test]
    fn test_run_counts_checks() {
        let mut harness = ConformanceHarness::new(Vec::new());
        let report = harness.run().unwrap();
        assert_eq!(report.checks_passed, 8);
        assert_eq!(report.capabilities, CAPABILITIES);
    }

    #[test]
    fn test_check_stops_on_mismatch() {
        let mut harness = ConformanceHarness::new(Vec::new());
        assert!(harness.check("ok", 1, 1).is_ok());
        let err = harness.check("bad", 1, 2).unwrap_err();
        assert!(matches!(
            err,
            ConformanceError::InvariantViolated { check: "bad", .. }
        ));
        assert_eq!(harness.checks_passed, 1);
    }
}
