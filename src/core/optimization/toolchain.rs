/*!
 * Toolchain Backends
 * One implementation per toolchain family, selected once at build time
 *
 * Precedence: `portable-fallback` > `nightly` > stable rustc.
 */

use super::capability::HintCapabilities;
use super::prefetch::{arch_prefetch, Access, Locality, ARCH_PREFETCH};

/// Expansion of each runtime hint for one toolchain family
///
/// The attribute hints (`force_inline!`, `cold!`, ...) are macros and cannot
/// dispatch through a trait; they are defined under the same `cfg` branches
/// that pick [`ActiveToolchain`], so `CAPABILITIES` always describes them.
pub trait Toolchain {
    /// Short name used in diagnostics
    const NAME: &'static str;

    /// Which hints this backend honors
    const CAPABILITIES: HintCapabilities;

    /// Return `b` unchanged, annotated as probably equal to `expected`
    fn expect(b: bool, expected: bool) -> bool;

    /// Marker for a rarely executed path
    fn cold_path();

    /// Advisory prefetch. Must never dereference `ptr`.
    fn prefetch(ptr: *const u8, access: Access, locality: Locality);
}

#[cold]
#[inline]
fn cold_marker() {}

/// Stable rustc: `#[cold]` call weighting, arch prefetch intrinsics, `noalias` references
pub struct Rustc;

impl Toolchain for Rustc {
    const NAME: &'static str = "rustc";

    const CAPABILITIES: HintCapabilities = HintCapabilities {
        forbid_inline: true,
        force_inline: true,
        branch_hints: true,
        prefetch: ARCH_PREFETCH,
        hot_regions: false,
        cold_regions: true,
        restrict: true,
        optimize_level: false,
    };

    #[inline(always)]
    fn expect(b: bool, expected: bool) -> bool {
        // A call to a #[cold] function makes LLVM weight this side as unlikely
        if b != expected {
            cold_marker();
        }
        b
    }

    #[inline(always)]
    fn cold_path() {
        cold_marker();
    }

    #[inline(always)]
    fn prefetch(ptr: *const u8, access: Access, locality: Locality) {
        arch_prefetch(ptr, access, locality);
    }
}

/// Nightly rustc: `core::intrinsics` branch weights and `#[optimize]`
#[cfg(feature = "nightly")]
pub struct Nightly;

#[cfg(feature = "nightly")]
impl Toolchain for Nightly {
    const NAME: &'static str = "rustc-nightly";

    const CAPABILITIES: HintCapabilities = HintCapabilities {
        hot_regions: true,
        optimize_level: true,
        ..Rustc::CAPABILITIES
    };

    #[inline(always)]
    fn expect(b: bool, expected: bool) -> bool {
        if expected {
            ::core::intrinsics::likely(b)
        } else {
            ::core::intrinsics::unlikely(b)
        }
    }

    #[inline(always)]
    fn cold_path() {
        cold_marker();
    }

    #[inline(always)]
    fn prefetch(ptr: *const u8, access: Access, locality: Locality) {
        arch_prefetch(ptr, access, locality);
    }
}

/// Inert fallback: every hint is pass-through
pub struct Portable;

impl Toolchain for Portable {
    const NAME: &'static str = "portable";

    const CAPABILITIES: HintCapabilities = HintCapabilities::NONE;

    #[inline(always)]
    fn expect(b: bool, _expected: bool) -> bool {
        b
    }

    #[inline(always)]
    fn cold_path() {}

    #[inline(always)]
    fn prefetch(_ptr: *const u8, _access: Access, _locality: Locality) {}
}

/// Backend chosen by the build configuration
#[cfg(feature = "portable-fallback")]
pub type ActiveToolchain = Portable;

/// Backend chosen by the build configuration
#[cfg(all(feature = "nightly", not(feature = "portable-fallback")))]
pub type ActiveToolchain = Nightly;

/// Backend chosen by the build configuration
#[cfg(not(any(feature = "nightly", feature = "portable-fallback")))]
pub type ActiveToolchain = Rustc;
