//! Bubble sort with the early-exit pass optimization.

use std::cmp::Ordering;

use crate::error::Error;
use crate::scalar::Scalar;

pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, T::cmp);
}

/// Sorts `v` in place with repeated adjacent-pair passes over the unsorted
/// prefix, shrinking the pass length by one each iteration. A pass that
/// performs zero swaps terminates the sort early, which makes the
/// already-sorted case `O(n)` comparisons.
///
/// Equal elements are never swapped, so the sort is stable.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    for pass in 0..len {
        let mut swapped = false;
        for i in 0..len - pass - 1 {
            if compare(&v[i], &v[i + 1]) == Ordering::Greater {
                v.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Dynamically-kinded variant. Unlike [`insertion`] and [`selection`], this
/// one does not pre-validate the sequence; the first cross-kind comparison
/// surfaces [`Error::TypeMismatch`] naturally, with no guarantee about the
/// partial order of elements touched before that point.
///
/// Returns the same slice, sorted, for chaining.
///
/// [`insertion`]: crate::sorts::insertion
/// [`selection`]: crate::sorts::selection
pub fn try_sort(v: &mut [Scalar]) -> Result<&mut [Scalar], Error> {
    let len = v.len();
    for pass in 0..len {
        let mut swapped = false;
        for i in 0..len - pass - 1 {
            if v[i].try_cmp(&v[i + 1])? == Ordering::Greater {
                v.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(v)
}
