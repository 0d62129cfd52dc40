/*!
 * Hint Capabilities
 * Compile-time description of which hints the active toolchain honors
 */

use super::toolchain::{ActiveToolchain, Toolchain};
use std::fmt;

/// Which performance hints the active toolchain turns into real constructs
///
/// Every flag is resolved from build configuration alone (cargo features and
/// `cfg!(target_arch)`); nothing is probed at runtime. A `false` flag means the
/// hint still compiles, but expands to its semantically transparent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HintCapabilities {
    /// `forbid_inline!` emits `#[inline(never)]`
    pub forbid_inline: bool,
    /// `force_inline!` emits `#[inline(always)]` instead of `#[inline]`
    pub force_inline: bool,
    /// `likely`/`unlikely` carry branch weights to the code generator
    pub branch_hints: bool,
    /// `prefetch` issues a hardware prefetch instruction
    pub prefetch: bool,
    /// `hot!` changes per-function code generation
    pub hot_regions: bool,
    /// `cold!` and `cold_path` emit `#[cold]`
    pub cold_regions: bool,
    /// `Restrict` views carry `noalias` references
    pub restrict: bool,
    /// `optimize_for!` emits `#[optimize(..)]`
    pub optimize_level: bool,
}

impl HintCapabilities {
    /// Every hint resolved to its inert fallback
    pub const NONE: Self = Self {
        forbid_inline: false,
        force_inline: false,
        branch_hints: false,
        prefetch: false,
        hot_regions: false,
        cold_regions: false,
        restrict: false,
        optimize_level: false,
    };

    /// Capabilities of the toolchain selected for this build
    pub const fn detect() -> Self {
        <ActiveToolchain as Toolchain>::CAPABILITIES
    }

    /// Number of hints that resolve to a real toolchain construct
    pub const fn supported_count(&self) -> usize {
        self.forbid_inline as usize
            + self.force_inline as usize
            + self.branch_hints as usize
            + self.prefetch as usize
            + self.hot_regions as usize
            + self.cold_regions as usize
            + self.restrict as usize
            + self.optimize_level as usize
    }

    /// True when no hint is honored and every annotation is pass-through
    pub const fn is_fallback(&self) -> bool {
        self.supported_count() == 0
    }

    /// Flag name paired with its value, in declaration order
    pub fn flags(&self) -> [(&'static str, bool); 8] {
        [
            ("forbid_inline", self.forbid_inline),
            ("force_inline", self.force_inline),
            ("branch_hints", self.branch_hints),
            ("prefetch", self.prefetch),
            ("hot_regions", self.hot_regions),
            ("cold_regions", self.cold_regions),
            ("restrict", self.restrict),
            ("optimize_level", self.optimize_level),
        ]
    }
}

impl Default for HintCapabilities {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for HintCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fallback() {
            return f.write_str("fallback (no hints honored)");
        }

        let mut first = true;
        for (name, enabled) in self.flags() {
            if !enabled {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// Capabilities of the current build
pub const CAPABILITIES: HintCapabilities = HintCapabilities::detect();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_fallback() {
        assert!(HintCapabilities::NONE.is_fallback());
        assert_eq!(HintCapabilities::NONE.supported_count(), 0);
        assert_eq!(
            HintCapabilities::NONE.to_string(),
            "fallback (no hints honored)"
        );
    }

    #[test]
    fn test_detect_matches_constant() {
        assert_eq!(HintCapabilities::detect(), CAPABILITIES);
        assert_eq!(HintCapabilities::default(), CAPABILITIES);
    }

    #[test]
    fn test_display_lists_enabled_flags() {
        let caps = HintCapabilities {
            cold_regions: true,
            restrict: true,
            ..HintCapabilities::NONE
        };
        assert_eq!(caps.supported_count(), 2);
        assert_eq!(caps.to_string(), "cold_regions, restrict");
    }

    #[cfg(feature = "portable-fallback")]
    #[test]
    fn test_fallback_feature_disables_everything() {
        assert_eq!(CAPABILITIES, HintCapabilities::NONE);
    }

    #[cfg(not(feature = "portable-fallback"))]
    #[test]
    fn test_stable_constructs_available() {
        assert!(CAPABILITIES.forbid_inline);
        assert!(CAPABILITIES.force_inline);
        assert!(CAPABILITIES.branch_hints);
        assert!(CAPABILITIES.cold_regions);
        assert!(CAPABILITIES.restrict);
    }
}
