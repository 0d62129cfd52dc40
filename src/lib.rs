/*!
 * Perf Hints Library
 * Portable compiler performance hints that degrade to no-ops
 *
 * Six hints, each resolved once at build time to either a toolchain construct
 * or a semantically transparent fallback:
 *
 * | Hint | Surface |
 * |---|---|
 * | Forbid inlining | [`forbid_inline!`] |
 * | Force inlining | [`force_inline!`] |
 * | Branch prediction | [`likely`], [`unlikely`], [`branch_hint`] |
 * | Prefetch | [`prefetch`], [`prefetch_with`], [`PrefetchExt`] |
 * | Hot/cold regions | [`hot!`], [`cold!`], [`cold_path`] |
 * | Aliasing restriction | [`Restrict`], [`RestrictMut`], [`restrict_ptr`] |
 *
 * Cargo features select the backend: `nightly` enables core intrinsics and
 * `#[optimize]`, `portable-fallback` turns every hint into a pass-through.
 */

#![cfg_attr(
    feature = "nightly",
    feature(core_intrinsics, optimize_attribute),
    allow(internal_features)
)]

pub mod conformance;
pub mod core;
pub mod monitoring;

// Re-exports
pub use crate::core::errors::{ensure_eq, ConformanceError, ConformanceResult};
pub use crate::core::hints::black_box;
pub use crate::core::optimization::*;
pub use conformance::{BranchOutcome, ConformanceHarness, ConformanceReport};
pub use monitoring::init_tracing;
