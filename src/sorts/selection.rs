//! Selection sort.

use std::cmp::Ordering;

use crate::error::Error;
use crate::scalar::{ensure_uniform_kind, Scalar};

pub fn sort<T: Ord>(v: &mut [T]) {
    sort_by(v, T::cmp);
}

/// Sorts `v` in place by scanning the unsorted suffix for its minimum and
/// swapping it into the current position, one position at a time. The suffix
/// scan never shortens early, so the comparison count is `O(n²)` in every
/// case; at most one swap happens per outer iteration (a no-op swap when the
/// minimum is already in place).
///
/// The minimum is swapped into place regardless of where it came from, so
/// this sort is not stable.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    for i in 0..len {
        let mut min = i;
        for j in i + 1..len {
            if compare(&v[j], &v[min]) == Ordering::Less {
                min = j;
            }
        }
        v.swap(i, min);
    }
}

/// Dynamically-kinded variant. Validates that the whole sequence shares one
/// comparable kind before any element moves; a mixed sequence surfaces
/// [`Error::TypeMismatch`] with the input untouched.
///
/// Returns the same slice, sorted, for chaining.
pub fn try_sort(v: &mut [Scalar]) -> Result<&mut [Scalar], Error> {
    ensure_uniform_kind(v)?;
    let len = v.len();
    for i in 0..len {
        let mut min = i;
        for j in i + 1..len {
            if v[j].try_cmp(&v[min])? == Ordering::Less {
                min = j;
            }
        }
        v.swap(i, min);
    }
    Ok(v)
}
