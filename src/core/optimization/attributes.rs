/*!
 * Function Attribute Hints
 * Item macros that attach inlining and code-layout attributes to functions
 *
 * Each macro takes one or more function items and re-emits them with the
 * attribute the active toolchain understands, or unchanged in the fallback.
 * Every macro is defined once per `cfg` branch, mirroring `ActiveToolchain`.
 *
 * ```
 * perf_hints::force_inline! {
 *     pub fn add(a: i32, b: i32) -> i32 {
 *         a + b
 *     }
 * }
 *
 * perf_hints::cold! {
 *     fn report(code: u32) -> String {
 *         format!("error {code}")
 *     }
 * }
 *
 * assert_eq!(add(2, 3), 5);
 * assert_eq!(report(7), "error 7");
 * ```
 *
 * `hot!` and `optimize_for!` emit `#[optimize(..)]` under the `nightly`
 * feature; crates using them on nightly must enable `optimize_attribute`.
 */

/// Keep the function out of line at every call site
#[cfg(not(feature = "portable-fallback"))]
#[macro_export]
macro_rules! forbid_inline {
    ($($item:item)*) => {
        $( #[inline(never)] $item )*
    };
}

/// Keep the function out of line at every call site
#[cfg(feature = "portable-fallback")]
#[macro_export]
macro_rules! forbid_inline {
    ($($item:item)*) => {
        $( $item )*
    };
}

/// Inline the function at every call site
///
/// Degrades to an ordinary `#[inline]` suggestion in the fallback.
#[cfg(not(feature = "portable-fallback"))]
#[macro_export]
macro_rules! force_inline {
    ($($item:item)*) => {
        $( #[inline(always)] $item )*
    };
}

/// Inline the function at every call site
///
/// Degrades to an ordinary `#[inline]` suggestion in the fallback.
#[cfg(feature = "portable-fallback")]
#[macro_export]
macro_rules! force_inline {
    ($($item:item)*) => {
        $( #[inline] $item )*
    };
}

/// Mark the function as rarely called
#[cfg(not(feature = "portable-fallback"))]
#[macro_export]
macro_rules! cold {
    ($($item:item)*) => {
        $( #[cold] $item )*
    };
}

/// Mark the function as rarely called
#[cfg(feature = "portable-fallback")]
#[macro_export]
macro_rules! cold {
    ($($item:item)*) => {
        $( $item )*
    };
}

/// Mark the function as frequently called
///
/// Stable rustc has no hot attribute, so only nightly changes code generation.
#[cfg(all(feature = "nightly", not(feature = "portable-fallback")))]
#[macro_export]
macro_rules! hot {
    ($($item:item)*) => {
        $( #[optimize(speed)] $item )*
    };
}

/// Mark the function as frequently called
///
/// Stable rustc has no hot attribute, so only nightly changes code generation.
#[cfg(not(all(feature = "nightly", not(feature = "portable-fallback"))))]
#[macro_export]
macro_rules! hot {
    ($($item:item)*) => {
        $( $item )*
    };
}

/// Request a per-function optimization goal: `speed` or `size`
#[cfg(all(feature = "nightly", not(feature = "portable-fallback")))]
#[macro_export]
macro_rules! optimize_for {
    (speed => $($item:item)*) => {
        $( #[optimize(speed)] $item )*
    };
    (size => $($item:item)*) => {
        $( #[optimize(size)] $item )*
    };
}

/// Request a per-function optimization goal: `speed` or `size`
#[cfg(not(all(feature = "nightly", not(feature = "portable-fallback"))))]
#[macro_export]
macro_rules! optimize_for {
    (speed => $($item:item)*) => {
        $( $item )*
    };
    (size => $($item:item)*) => {
        $( $item )*
    };
}

#[cfg(test)]
mod tests {
    crate::forbid_inline! {
        fn outlined(x: u32) -> u32 {
            x * 3
        }
    }

    crate::force_inline! {
        fn mul(a: i64, b: i64) -> i64 {
            a * b
        }

        fn negate(a: i64) -> i64 {
            -a
        }
    }

    crate::hot! {
        fn hot_square(x: u64) -> u64 {
            x * x
        }
    }

    crate::cold! {
        fn cold_describe(code: i32) -> String {
            format!("code={code}")
        }
    }

    crate::optimize_for! { size =>
        fn small_sum(values: &[u8]) -> u32 {
            values.iter().map(|&v| v as u32).sum()
        }
    }

    #[test]
    fn test_forbid_inline_stays_addressable() {
        let f: fn(u32) -> u32 = outlined;
        assert_eq!(f(7), 21);
        assert_eq!(outlined(0), 0);
    }

    #[test]
    fn test_force_inline_multiple_items() {
        assert_eq!(mul(6, 7), 42);
        assert_eq!(negate(mul(2, 3)), -6);

        let f: fn(i64, i64) -> i64 = mul;
        assert_eq!(f(-4, 5), -20);
    }

    #[test]
    fn test_hot_and_cold_keep_results() {
        for _ in 0..3 {
            assert_eq!(hot_square(12), 144);
            assert_eq!(cold_describe(-1), "code=-1");
        }
    }

    #[test]
    fn test_optimize_for_keeps_results() {
        assert_eq!(small_sum(&[1, 2, 250]), 253);
        assert_eq!(small_sum(&[]), 0);
    }
}
