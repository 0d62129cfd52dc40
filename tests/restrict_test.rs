/*!
 * Aliasing Restriction Tests
 * Restrict views read and write exactly like plain slices
 */

use perf_hints::conformance::demo::{restrict_scale_into, restrict_sum, restrict_sum_raw};
use perf_hints::{restrict_ptr, restrict_ptr_mut, Restrict, RestrictMut};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_restrict_sum_example() {
    let a = [1, 2, 3];
    let b = [4, 5, 6];
    assert_eq!(restrict_sum(Restrict::new(&a), Restrict::new(&b), 3), 21);
    assert_eq!(unsafe { restrict_sum_raw(a.as_ptr(), b.as_ptr(), 3) }, 21);
}

#[test]
fn test_restrict_sum_zero_len_null() {
    let total = unsafe { restrict_sum_raw(std::ptr::null(), std::ptr::null(), 0) };
    assert_eq!(total, 0);
}

#[test]
fn test_restrict_ptr_mut_writes_through() {
    let mut dst = vec![0i32; 4];
    let src = vec![3, 1, 4, 1];
    let written = unsafe {
        restrict_scale_into(
            restrict_ptr_mut(dst.as_mut_ptr(), dst.len()),
            restrict_ptr(src.as_ptr(), src.len()),
            -1,
        )
    };
    assert_eq!(written, 4);
    assert_eq!(dst, vec![-3, -1, -4, -1]);
}

#[test]
fn test_restrict_mut_pointer_accessors() {
    let mut data = [5u16; 3];
    let base = data.as_mut_ptr();
    let mut view = RestrictMut::from(&mut data[..]);
    assert_eq!(view.as_mut_ptr(), base);
    assert_eq!(view.as_ptr(), base as *const u16);
    assert_eq!(view.len(), 3);
}

proptest! {
    #[test]
    fn test_restrict_sum_matches_elementwise(
        pairs in proptest::collection::vec((-10_000i32..10_000, -10_000i32..10_000), 0..64),
    ) {
        let a: Vec<i32> = pairs.iter().map(|p| p.0).collect();
        let b: Vec<i32> = pairs.iter().map(|p| p.1).collect();
        let expected: i32 = a.iter().zip(&b).map(|(x, y)| x + y).sum();

        prop_assert_eq!(restrict_sum(Restrict::new(&a), Restrict::new(&b), a.len()), expected);
        let raw = unsafe { restrict_sum_raw(a.as_ptr(), b.as_ptr(), a.len()) };
        prop_assert_eq!(raw, expected);
    }

    #[test]
    fn test_restrict_iter_matches_slice(data in proptest::collection::vec(any::<u32>(), 0..64)) {
        let view = Restrict::new(&data);
        prop_assert_eq!(view.iter().collect::<Vec<_>>(), data.clone());
        for (i, value) in data.iter().enumerate() {
            prop_assert_eq!(view.get(i), Some(*value));
        }
        prop_assert_eq!(view.get(data.len()), None);
    }
}
