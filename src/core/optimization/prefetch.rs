/*!
 * Software Prefetching Utilities
 * Hint CPU to load data before it's needed
 */

use super::toolchain::{ActiveToolchain, Toolchain};
use crate::core::limits::{CACHE_LINE_SIZE, DEFAULT_PREFETCH_DISTANCE};

/// Whether this target has a prefetch instruction we can emit
pub(crate) const ARCH_PREFETCH: bool = cfg!(any(
    target_arch = "x86_64",
    all(target_arch = "x86", target_feature = "sse"),
    target_arch = "aarch64"
));

/// Intended use of the prefetched line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Read,
    /// Fetch in exclusive state, ready for modification
    Write,
}

/// Cache level the line should land in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locality {
    L1,
    L2,
    L3,
    /// Touched once; avoid polluting the cache hierarchy
    NonTemporal,
}

/// Issue the hardware prefetch for `ptr`
///
/// Prefetch instructions never fault, so any address is accepted, including
/// null, dangling and one-past-the-end pointers.
#[inline(always)]
pub(crate) fn arch_prefetch(ptr: *const u8, access: Access, locality: Locality) {
    #[cfg(any(target_arch = "x86_64", all(target_arch = "x86", target_feature = "sse")))]
    unsafe {
        #[cfg(target_arch = "x86")]
        use std::arch::x86::*;
        #[cfg(target_arch = "x86_64")]
        use std::arch::x86_64::*;

        let p = ptr as *const i8;
        match (access, locality) {
            (_, Locality::NonTemporal) => _mm_prefetch::<_MM_HINT_NTA>(p),
            (Access::Read, Locality::L1) => _mm_prefetch::<_MM_HINT_T0>(p),
            (Access::Read, Locality::L2) => _mm_prefetch::<_MM_HINT_T1>(p),
            (Access::Read, Locality::L3) => _mm_prefetch::<_MM_HINT_T2>(p),
            (Access::Write, Locality::L1) => _mm_prefetch::<_MM_HINT_ET0>(p),
            (Access::Write, _) => _mm_prefetch::<_MM_HINT_ET1>(p),
        }
    }

    #[cfg(target_arch = "aarch64")]
    unsafe {
        use std::arch::asm;

        // PRFM is a hint; it does not fault on unmapped addresses
        match (access, locality) {
            (Access::Read, Locality::L1) => {
                asm!("prfm pldl1keep, [{p}]", p = in(reg) ptr, options(nostack, preserves_flags, readonly))
            }
            (Access::Read, Locality::L2) => {
                asm!("prfm pldl2keep, [{p}]", p = in(reg) ptr, options(nostack, preserves_flags, readonly))
            }
            (Access::Read, Locality::L3) => {
                asm!("prfm pldl3keep, [{p}]", p = in(reg) ptr, options(nostack, preserves_flags, readonly))
            }
            (Access::Read, Locality::NonTemporal) => {
                asm!("prfm pldl1strm, [{p}]", p = in(reg) ptr, options(nostack, preserves_flags, readonly))
            }
            (Access::Write, Locality::L1) => {
                asm!("prfm pstl1keep, [{p}]", p = in(reg) ptr, options(nostack, preserves_flags, readonly))
            }
            (Access::Write, Locality::L2) => {
                asm!("prfm pstl2keep, [{p}]", p = in(reg) ptr, options(nostack, preserves_flags, readonly))
            }
            (Access::Write, Locality::L3) => {
                asm!("prfm pstl3keep, [{p}]", p = in(reg) ptr, options(nostack, preserves_flags, readonly))
            }
            (Access::Write, Locality::NonTemporal) => {
                asm!("prfm pstl1strm, [{p}]", p = in(reg) ptr, options(nostack, preserves_flags, readonly))
            }
        }
    }

    #[cfg(not(any(
        target_arch = "x86_64",
        all(target_arch = "x86", target_feature = "sse"),
        target_arch = "aarch64"
    )))]
    {
        // No-op on other architectures
        let _ = (ptr, access, locality);
    }
}

/// Prefetch data for reading into L1 cache
///
/// # Performance
///
/// - **Best for**: Sequential access patterns with a predictable next element
/// - **No effect** on program semantics; the address is never dereferenced
///
/// # Safety
///
/// This is always safe - prefetch is a hint that can be ignored.
/// Invalid pointers are silently ignored by hardware.
///
/// # Example
///
/// ```
/// use perf_hints::prefetch;
///
/// let data = [1, 2, 3];
/// // One past the end is the usual idiom in a scan loop
/// prefetch(data.as_ptr().wrapping_add(data.len()));
/// ```
#[inline(always)]
pub fn prefetch<T>(ptr: *const T) {
    prefetch_with(ptr, Access::Read, Locality::L1);
}

/// Prefetch with an explicit access kind and target cache level
#[inline(always)]
pub fn prefetch_with<T>(ptr: *const T, access: Access, locality: Locality) {
    ActiveToolchain::prefetch(ptr.cast::<u8>(), access, locality);
}

/// Prefetch data for reading (temporal locality)
#[inline(always)]
pub fn prefetch_read<T>(ptr: *const T) {
    prefetch_with(ptr, Access::Read, Locality::L1);
}

/// Prefetch data for writing (prepare for modification)
#[inline(always)]
pub fn prefetch_write<T>(ptr: *const T) {
    prefetch_with(ptr, Access::Write, Locality::L1);
}

/// Prefetch the element `distance` slots after `index`
///
/// The target may lie past the end of `slice`; the address is computed with
/// wrapping arithmetic and never read.
#[inline(always)]
pub fn prefetch_slice_ahead<T>(slice: &[T], index: usize, distance: usize) {
    prefetch(slice.as_ptr().wrapping_add(index.saturating_add(distance)));
}

/// Prefetch every cache line covered by `data`
///
/// A slice that starts mid-line still gets its first and last lines.
#[inline]
pub fn prefetch_range<T>(data: &[T]) {
    let base = data.as_ptr().cast::<u8>();
    let addr = base as usize;
    let first_line = base.wrapping_sub(addr % CACHE_LINE_SIZE);

    for offset in line_offsets(addr, std::mem::size_of_val(data)) {
        prefetch(first_line.wrapping_add(offset));
    }
}

/// Offsets from the line containing `addr` of each line `[addr, addr + bytes)` touches
#[inline]
fn line_offsets(addr: usize, bytes: usize) -> std::iter::StepBy<std::ops::Range<usize>> {
    let span = if bytes == 0 {
        0
    } else {
        (addr % CACHE_LINE_SIZE).saturating_add(bytes)
    };
    (0..span).step_by(CACHE_LINE_SIZE)
}

/// Slice iterator that prefetches a fixed distance ahead of the cursor
///
/// # Example
///
/// ```
/// use perf_hints::PrefetchExt;
///
/// let data = vec![1, 2, 3, 4];
/// let total: i32 = data.with_prefetch(2).sum();
/// assert_eq!(total, 10);
/// ```
#[derive(Debug, Clone)]
pub struct PrefetchIter<'a, T> {
    slice: &'a [T],
    index: usize,
    distance: usize,
}

impl<'a, T> PrefetchIter<'a, T> {
    /// Iterate `slice`, prefetching `distance` elements ahead of the cursor
    pub fn new(slice: &'a [T], distance: usize) -> Self {
        Self {
            slice,
            index: 0,
            distance,
        }
    }

    /// How far ahead of the cursor lines are requested
    pub fn distance(&self) -> usize {
        self.distance
    }
}

impl<'a, T> Iterator for PrefetchIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.slice.get(self.index)?;
        prefetch_slice_ahead(self.slice, self.index, self.distance);
        self.index += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slice.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PrefetchIter<'_, T> {}

impl<T> std::iter::FusedIterator for PrefetchIter<'_, T> {}

/// Extension trait for slices to enable prefetching iteration
pub trait PrefetchExt<T> {
    /// Iterate, prefetching `distance` elements ahead (typically 2-8)
    fn with_prefetch(&self, distance: usize) -> PrefetchIter<'_, T>;

    /// Iterate with the default prefetch distance
    fn iter_prefetched(&self) -> PrefetchIter<'_, T> {
        self.with_prefetch(DEFAULT_PREFETCH_DISTANCE)
    }
}

impl<T> PrefetchExt<T> for [T] {
    fn with_prefetch(&self, distance: usize) -> PrefetchIter<'_, T> {
        PrefetchIter::new(self, distance)
    }
}
