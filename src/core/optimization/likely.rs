/*!
 * Branch Prediction Hints
 * Help the code generator lay out predictable branches
 */

use super::toolchain::{ActiveToolchain, Toolchain};

/// Annotate `b` as probably equal to `expected`
///
/// Always returns `b` unchanged; only code layout may differ.
///
/// # Example
///
/// ```
/// use perf_hints::branch_hint;
///
/// let x = 3;
/// if branch_hint(x > 0, true) {
///     // fast path
/// }
/// assert!(!branch_hint(false, true));
/// ```
#[inline(always)]
#[must_use]
pub fn branch_hint(b: bool, expected: bool) -> bool {
    ActiveToolchain::expect(b, expected)
}

/// Hint that this branch is likely to be taken
///
/// # Performance
///
/// - **No effect** on unpredictable branches
/// - **Use sparingly**: Only for hot paths with >90% predictability
///
/// # Example
///
/// ```ignore
/// if likely(cache.contains(&key)) {
///     return cache.get(&key); // Fast path, usually taken
/// }
/// slow_lookup(key) // Cold path, rarely taken
/// ```
#[inline(always)]
#[must_use]
pub fn likely(b: bool) -> bool {
    branch_hint(b, true)
}

/// Hint that this branch is unlikely to be taken
///
/// # Example
///
/// ```ignore
/// if unlikely(error.is_some()) {
///     return Err(error.unwrap()); // Cold path, rarely taken
/// }
/// continue_processing() // Fast path, usually taken
/// ```
#[inline(always)]
#[must_use]
pub fn unlikely(b: bool) -> bool {
    branch_hint(b, false)
}

/// Mark the enclosing branch body as rarely executed
///
/// For whole functions prefer [`cold!`](crate::cold).
///
/// ```ignore
/// match value {
///     Some(x) => process(x),
///     None => {
///         cold_path();
///         report_missing();
///     }
/// }
/// ```
#[inline(always)]
pub fn cold_path() {
    ActiveToolchain::cold_path();
}
