/*!
 * Compiler Optimization Hints
 * Flat import surface for annotated code
 *
 * ```
 * use perf_hints::core::hints::*;
 *
 * if likely(CAPABILITIES.supported_count() <= 8) {
 *     prefetch(std::ptr::null::<u8>());
 * }
 * ```
 */

pub use super::optimization::{
    branch_hint, cold_path, likely, prefetch, prefetch_with, restrict_ptr, restrict_ptr_mut,
    unlikely, Access, HintCapabilities, Locality, PrefetchExt, Restrict, RestrictMut,
    CAPABILITIES,
};

/// Prevent the compiler from optimizing away or const-folding a value
///
/// Useful for benchmarking and ensuring certain operations aren't eliminated
pub use std::hint::black_box;
