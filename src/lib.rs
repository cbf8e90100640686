//! Classic quadratic comparison sorts plus a small benchmarking harness.
//!
//! The three algorithms (bubble, insertion, selection) share one contract:
//! they reorder a caller-owned mutable sequence in place into non-decreasing
//! order. The generic `sort`/`sort_by` entry points are statically checked
//! via `T: Ord`; the [`scalar::Scalar`] entry points preserve the
//! dynamically-kinded sequence contract, where mixing kinds inside one
//! sequence is a [`Error::TypeMismatch`].
//!
//! [`bench`] drives repeated randomized trials across a set of input sizes
//! and [`report`] persists the resulting table as text and as an SVG chart.

use std::cmp::Ordering;

pub mod bench;
pub mod error;
pub mod host;
pub mod report;
pub mod scalar;
pub mod sorts;

pub use error::Error;
pub use scalar::{Kind, Scalar};

/// Uniform contract over the interchangeable sort implementations.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}
