/*!
 * Annotated Demo Functions
 * One representative use of each hint, writing its trace line to `out`
 */

use crate::core::hints::{likely, prefetch, restrict_ptr, unlikely, Restrict, RestrictMut};
use std::fmt;
use std::io::{self, Write};

/// Which arm of the hinted `if` chain ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    Likely,
    Unlikely,
    Neither,
}

impl fmt::Display for BranchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchOutcome::Likely => write!(f, "likely"),
            BranchOutcome::Unlikely => write!(f, "unlikely"),
            BranchOutcome::Neither => write!(f, "neither"),
        }
    }
}

crate::forbid_inline! {
    pub fn forbidden_inline_call<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "forbid_inline function called.")
    }
}

crate::force_inline! {
    pub fn always_inline_add(a: i32, b: i32) -> i32 {
        a + b
    }
}

/// Classify `x` through a `likely`/`unlikely` chain
pub fn branch_outcome<W: Write>(x: i32, out: &mut W) -> io::Result<BranchOutcome> {
    let outcome = if likely(x > 0) {
        BranchOutcome::Likely
    } else if unlikely(x < 0) {
        BranchOutcome::Unlikely
    } else {
        BranchOutcome::Neither
    };

    writeln!(out, "{outcome} branch taken.")?;
    Ok(outcome)
}

/// Print `values` on one line, prefetching the next element each step
///
/// The last step prefetches one past the end.
pub fn prefetch_print<W: Write>(values: &[i32], out: &mut W) -> io::Result<usize> {
    let mut printed = 0;
    for (i, value) in values.iter().enumerate() {
        prefetch(values.as_ptr().wrapping_add(i + 1));
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{value}")?;
        printed += 1;
    }
    writeln!(out)?;
    Ok(printed)
}

crate::hot! {
    pub fn hot_call<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "hot function called.")
    }
}

crate::cold! {
    pub fn cold_call<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "cold function called.")
    }
}

/// Sum of `a[i] + b[i]` over the first `n` positions both views cover
pub fn restrict_sum(a: Restrict<'_, i32>, b: Restrict<'_, i32>, n: usize) -> i32 {
    a.iter().zip(b.iter()).take(n).map(|(x, y)| x + y).sum()
}

/// [`restrict_sum`] over raw pointer parameters
///
/// # Safety
///
/// `a` and `b` must each be valid for `n` reads, and neither range may be
/// written by anyone during the call.
pub unsafe fn restrict_sum_raw(a: *const i32, b: *const i32, n: usize) -> i32 {
    unsafe { restrict_sum(restrict_ptr(a, n), restrict_ptr(b, n), n) }
}

/// Write `src[i] * k` into `dst[i]`; returns how many slots were written
pub fn restrict_scale_into(mut dst: RestrictMut<'_, i32>, src: Restrict<'_, i32>, k: i32) -> usize {
    let mut written = 0;
    for (i, value) in src.iter().enumerate() {
        if !dst.set(i, value * k) {
            break;
        }
        written += 1;
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(buf).lines().map(str::to_string).collect()
    }

    #[test]
    fn test_always_inline_add() {
        assert_eq!(always_inline_add(2, 3), 5);
        assert_eq!(always_inline_add(-7, 7), 0);
    }

    #[test]
    fn test_branch_outcomes() {
        let mut out = Vec::new();
        assert_eq!(branch_outcome(1, &mut out).unwrap(), BranchOutcome::Likely);
        assert_eq!(branch_outcome(-1, &mut out).unwrap(), BranchOutcome::Unlikely);
        assert_eq!(branch_outcome(0, &mut out).unwrap(), BranchOutcome::Neither);
        assert_eq!(
            lines(&out),
            vec![
                "likely branch taken.",
                "unlikely branch taken.",
                "neither branch taken."
            ]
        );
    }

    #[test]
    fn test_prefetch_print_past_end() {
        let mut out = Vec::new();
        assert_eq!(prefetch_print(&[1, 2, 3, 4, 5], &mut out).unwrap(), 5);
        assert_eq!(lines(&out), vec!["1 2 3 4 5"]);

        let mut empty = Vec::new();
        assert_eq!(prefetch_print(&[], &mut empty).unwrap(), 0);
        assert_eq!(empty, b"\n");
    }

    #[test]
    fn test_hot_cold_once_per_call() {
        let mut out = Vec::new();
        hot_call(&mut out).unwrap();
        cold_call(&mut out).unwrap();
        hot_call(&mut out).unwrap();
        assert_eq!(
            lines(&out),
            vec![
                "hot function called.",
                "cold function called.",
                "hot function called."
            ]
        );
    }

    #[test]
    fn test_restrict_sum() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        assert_eq!(restrict_sum(Restrict::new(&a), Restrict::new(&b), 3), 21);
        assert_eq!(restrict_sum(Restrict::new(&a), Restrict::new(&b), 2), 12);
        assert_eq!(unsafe { restrict_sum_raw(a.as_ptr(), b.as_ptr(), 3) }, 21);
    }

    #[test]
    fn test_restrict_scale_into_short_dst() {
        let src = [1, 2, 3];
        let mut dst = [0; 2];
        let written = restrict_scale_into(RestrictMut::new(&mut dst), Restrict::new(&src), 10);
        assert_eq!(written, 2);
        assert_eq!(dst, [10, 20]);
    }
}
