/*!
 * Perf Hints Conformance Check - Main Entry Point
 *
 * Exercises every hint once and checks the computed values.
 * Exits with status 0 when all checks pass, non-zero on the first violation.
 */

use std::io;
use tracing::info;

use perf_hints::{init_tracing, ActiveToolchain, ConformanceHarness, Toolchain, CAPABILITIES};

fn main() -> miette::Result<()> {
    // Initialize structured tracing
    init_tracing();

    let toolchain = <ActiveToolchain as Toolchain>::NAME;
    info!(
        toolchain,
        supported = CAPABILITIES.supported_count(),
        capabilities = %CAPABILITIES,
        "Hint layer resolved"
    );

    let stdout = io::stdout();
    let mut harness = ConformanceHarness::new(stdout.lock());
    let report = harness.run()?;

    info!(checks_passed = report.checks_passed, "All checks passed");
    Ok(())
}
