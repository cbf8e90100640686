//! Insertion sort.

use std::cmp::Ordering;

use crate::error::Error;
use crate::scalar::{ensure_uniform_kind, Scalar};

pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, T::cmp);
}

/// Sorts `v` in place by walking left to right from index 1 and shifting
/// each element backward past every strictly greater predecessor. The
/// backward scan stops at the first non-greater predecessor, so an
/// already-sorted input costs `O(n)` comparisons.
///
/// Equal elements are never moved past each other, so the sort is stable.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut pos = i;
        while pos > 0 && compare(&v[pos - 1], &v[pos]) == Ordering::Greater {
            v.swap(pos - 1, pos);
            pos -= 1;
        }
    }
}

/// Dynamically-kinded variant. Validates that the whole sequence shares one
/// comparable kind before any element moves; a mixed sequence surfaces
/// [`Error::TypeMismatch`] with the input untouched.
///
/// Returns the same slice, sorted, for chaining.
pub fn try_sort(v: &mut [Scalar]) -> Result<&mut [Scalar], Error> {
    ensure_uniform_kind(v)?;
    for i in 1..v.len() {
        let mut pos = i;
        while pos > 0 && v[pos - 1].try_cmp(&v[pos])? == Ordering::Greater {
            v.swap(pos - 1, pos);
            pos -= 1;
        }
    }
    Ok(v)
}
