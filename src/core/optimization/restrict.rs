/*!
 * Aliasing Restriction
 * Non-aliasing pointer views
 *
 * With hints enabled a view holds a `&[T]` / `&mut [T]` reborrow, so rustc
 * attaches `noalias` to it when passed by value. In the fallback it holds the
 * raw pointer and length, and every access goes through the raw pointer, so
 * nothing is assumed about aliasing. Both representations read and write the
 * same memory in the same order.
 *
 * The non-aliasing promise itself is never checked: it is the `# Safety`
 * precondition of the raw constructors.
 */

use std::fmt;
#[cfg(feature = "portable-fallback")]
use std::marker::PhantomData;

/// Read-only view over `len` elements that no other pointer mutates
pub struct Restrict<'a, T> {
    #[cfg(not(feature = "portable-fallback"))]
    slice: &'a [T],
    #[cfg(feature = "portable-fallback")]
    ptr: *const T,
    #[cfg(feature = "portable-fallback")]
    len: usize,
    #[cfg(feature = "portable-fallback")]
    _marker: PhantomData<&'a [T]>,
}

// The raw representation is only ever a stand-in for `&'a [T]`
#[cfg(feature = "portable-fallback")]
unsafe impl<T: Sync> Send for Restrict<'_, T> {}
#[cfg(feature = "portable-fallback")]
unsafe impl<T: Sync> Sync for Restrict<'_, T> {}

impl<'a, T> Restrict<'a, T> {
    /// View over an existing slice
    #[inline(always)]
    pub fn new(slice: &'a [T]) -> Self {
        #[cfg(not(feature = "portable-fallback"))]
        {
            Self { slice }
        }
        #[cfg(feature = "portable-fallback")]
        {
            Self {
                ptr: slice.as_ptr(),
                len: slice.len(),
                _marker: PhantomData,
            }
        }
    }

    /// View over `len` elements starting at `ptr`
    ///
    /// # Safety
    ///
    /// - If `len > 0`, `ptr` must be non-null, aligned and valid for reads of
    ///   `len` elements for the whole of `'a`
    /// - For the whole of `'a`, no memory in the range may be written through
    ///   any other pointer or reference
    ///
    /// Violations are undefined behavior and are not detected.
    #[inline(always)]
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        #[cfg(not(feature = "portable-fallback"))]
        {
            let slice: &'a [T] = if len == 0 {
                <&[T]>::default()
            } else {
                unsafe { std::slice::from_raw_parts(ptr, len) }
            };
            Self { slice }
        }
        #[cfg(feature = "portable-fallback")]
        {
            Self {
                ptr,
                len,
                _marker: PhantomData,
            }
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        #[cfg(not(feature = "portable-fallback"))]
        {
            self.slice.len()
        }
        #[cfg(feature = "portable-fallback")]
        {
            self.len
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        #[cfg(not(feature = "portable-fallback"))]
        {
            self.slice.as_ptr()
        }
        #[cfg(feature = "portable-fallback")]
        {
            self.ptr
        }
    }

    /// Element at `index`, or `None` past the end
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Copy,
    {
        #[cfg(not(feature = "portable-fallback"))]
        {
            self.slice.get(index).copied()
        }
        #[cfg(feature = "portable-fallback")]
        {
            if index < self.len {
                Some(unsafe { self.ptr.add(index).read() })
            } else {
                None
            }
        }
    }

    /// Elements in order, by value
    #[inline]
    pub fn iter(&self) -> RestrictIter<'_, 'a, T>
    where
        T: Copy,
    {
        RestrictIter {
            view: self,
            index: 0,
        }
    }
}

impl<T> Clone for Restrict<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Restrict<'_, T> {}

impl<'a, T> From<&'a [T]> for Restrict<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<T> fmt::Debug for Restrict<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Restrict")
            .field("ptr", &self.as_ptr())
            .field("len", &self.len())
            .finish()
    }
}

/// By-value iterator over a [`Restrict`] view
pub struct RestrictIter<'r, 'a, T> {
    view: &'r Restrict<'a, T>,
    index: usize,
}

impl<T: Copy> Iterator for RestrictIter<'_, '_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let value = self.view.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: Copy> ExactSizeIterator for RestrictIter<'_, '_, T> {}

/// Mutable view over `len` elements that nothing else accesses
pub struct RestrictMut<'a, T> {
    #[cfg(not(feature = "portable-fallback"))]
    slice: &'a mut [T],
    #[cfg(feature = "portable-fallback")]
    ptr: *mut T,
    #[cfg(feature = "portable-fallback")]
    len: usize,
    #[cfg(feature = "portable-fallback")]
    _marker: PhantomData<&'a mut [T]>,
}

#[cfg(feature = "portable-fallback")]
unsafe impl<T: Send> Send for RestrictMut<'_, T> {}
#[cfg(feature = "portable-fallback")]
unsafe impl<T: Sync> Sync for RestrictMut<'_, T> {}

impl<'a, T> RestrictMut<'a, T> {
    /// View over an existing mutable slice
    #[inline(always)]
    pub fn new(slice: &'a mut [T]) -> Self {
        #[cfg(not(feature = "portable-fallback"))]
        {
            Self { slice }
        }
        #[cfg(feature = "portable-fallback")]
        {
            Self {
                ptr: slice.as_mut_ptr(),
                len: slice.len(),
                _marker: PhantomData,
            }
        }
    }

    /// Mutable view over `len` elements starting at `ptr`
    ///
    /// # Safety
    ///
    /// - If `len > 0`, `ptr` must be non-null, aligned and valid for reads and
    ///   writes of `len` elements for the whole of `'a`
    /// - For the whole of `'a`, no memory in the range may be read or written
    ///   through any other pointer or reference
    ///
    /// Violations are undefined behavior and are not detected.
    #[inline(always)]
    pub unsafe fn from_raw_parts(ptr: *mut T, len: usize) -> Self {
        #[cfg(not(feature = "portable-fallback"))]
        {
            let slice: &'a mut [T] = if len == 0 {
                <&mut [T]>::default()
            } else {
                unsafe { std::slice::from_raw_parts_mut(ptr, len) }
            };
            Self { slice }
        }
        #[cfg(feature = "portable-fallback")]
        {
            Self {
                ptr,
                len,
                _marker: PhantomData,
            }
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        #[cfg(not(feature = "portable-fallback"))]
        {
            self.slice.len()
        }
        #[cfg(feature = "portable-fallback")]
        {
            self.len
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        #[cfg(not(feature = "portable-fallback"))]
        {
            self.slice.as_ptr()
        }
        #[cfg(feature = "portable-fallback")]
        {
            self.ptr
        }
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        #[cfg(not(feature = "portable-fallback"))]
        {
            self.slice.as_mut_ptr()
        }
        #[cfg(feature = "portable-fallback")]
        {
            self.ptr
        }
    }

    /// Element at `index`, or `None` past the end
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Copy,
    {
        #[cfg(not(feature = "portable-fallback"))]
        {
            self.slice.get(index).copied()
        }
        #[cfg(feature = "portable-fallback")]
        {
            if index < self.len {
                Some(unsafe { self.ptr.add(index).read() })
            } else {
                None
            }
        }
    }

    /// Store `value` at `index`; returns `false` past the end
    #[inline(always)]
    pub fn set(&mut self, index: usize, value: T) -> bool {
        #[cfg(not(feature = "portable-fallback"))]
        {
            match self.slice.get_mut(index) {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => false,
            }
        }
        #[cfg(feature = "portable-fallback")]
        {
            if index < self.len {
                unsafe { *self.ptr.add(index) = value };
                true
            } else {
                false
            }
        }
    }
}

impl<'a, T> From<&'a mut [T]> for RestrictMut<'a, T> {
    fn from(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<T> fmt::Debug for RestrictMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestrictMut")
            .field("ptr", &self.as_ptr())
            .field("len", &self.len())
            .finish()
    }
}

/// Declare `ptr` as a non-aliasing read-only parameter of `len` elements
///
/// # Safety
///
/// Same contract as [`Restrict::from_raw_parts`]; the caller, not this layer,
/// guarantees that nothing else writes the range while the view is alive.
#[inline(always)]
pub unsafe fn restrict_ptr<'a, T>(ptr: *const T, len: usize) -> Restrict<'a, T> {
    unsafe { Restrict::from_raw_parts(ptr, len) }
}

/// Declare `ptr` as a non-aliasing mutable parameter of `len` elements
///
/// # Safety
///
/// Same contract as [`RestrictMut::from_raw_parts`].
#[inline(always)]
pub unsafe fn restrict_ptr_mut<'a, T>(ptr: *mut T, len: usize) -> RestrictMut<'a, T> {
    unsafe { RestrictMut::from_raw_parts(ptr, len) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restrict_reads_in_order() {
        let data = [4, 5, 6];
        let view = Restrict::new(&data);

        assert_eq!(view.len(), 3);
        assert!(!view.is_empty());
        assert_eq!(view.get(0), Some(4));
        assert_eq!(view.get(2), Some(6));
        assert_eq!(view.get(3), None);
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(view.iter().len(), 3);
    }

    #[test]
    fn test_restrict_ptr_zero_len_accepts_null() {
        let view = unsafe { restrict_ptr::<u32>(std::ptr::null(), 0) };
        assert!(view.is_empty());
        assert_eq!(view.get(0), None);
        assert_eq!(view.iter().count(), 0);

        let mut_view = unsafe { restrict_ptr_mut::<u32>(std::ptr::null_mut(), 0) };
        assert!(mut_view.is_empty());
    }

    #[test]
    fn test_restrict_mut_set_and_get() {
        let mut data = [0i32; 4];
        {
            let mut view = RestrictMut::new(&mut data);
            assert!(view.set(1, 10));
            assert!(view.set(3, -2));
            assert!(!view.set(4, 99));
            assert_eq!(view.get(1), Some(10));
            assert_eq!(view.get(4), None);
        }
        assert_eq!(data, [0, 10, 0, -2]);
    }

    #[test]
    fn test_restrict_ptr_views_raw_memory() {
        let data = vec![1u8, 2, 3];
        let view = unsafe { restrict_ptr(data.as_ptr(), data.len()) };
        assert_eq!(view.as_ptr(), data.as_ptr());
        assert_eq!(view.iter().map(u32::from).sum::<u32>(), 6);
    }

    #[test]
    fn test_restrict_is_copy() {
        let data = [1, 2];
        let a = Restrict::from(&data[..]);
        let b = a;
        assert_eq!(a.get(1), b.get(1));
        assert!(format!("{a:?}").contains("len: 2"));
    }
}
