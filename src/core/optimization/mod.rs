/*!
 * Optimization Utilities
 *
 * Portable compiler performance hints for performance-critical code:
 * - Inlining control (`forbid_inline!`, `force_inline!`)
 * - Branch prediction hints (`likely`/`unlikely`, `branch_hint`)
 * - Prefetch hints for cache-aware loops
 * - Code-layout markers (`hot!`, `cold!`, `cold_path`)
 * - Aliasing restriction (`Restrict`, `RestrictMut`)
 *
 * # Fallback
 *
 * Every hint resolves, once at build time, either to a toolchain construct or
 * to an inert pass-through. Which one is described by [`CAPABILITIES`].
 * Enabling or disabling a hint never changes observable behavior.
 */

mod attributes;
mod capability;
mod likely;
mod prefetch;
mod restrict;
mod toolchain;

// Re-export all optimization utilities
pub use capability::{HintCapabilities, CAPABILITIES};
pub use likely::{branch_hint, cold_path, likely, unlikely};
pub use prefetch::{
    prefetch, prefetch_range, prefetch_read, prefetch_slice_ahead, prefetch_with, prefetch_write,
    Access, Locality, PrefetchExt, PrefetchIter,
};
pub use restrict::{restrict_ptr, restrict_ptr_mut, Restrict, RestrictIter, RestrictMut};
#[cfg(feature = "nightly")]
pub use toolchain::Nightly;
pub use toolchain::{ActiveToolchain, Portable, Rustc, Toolchain};
