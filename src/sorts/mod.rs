pub mod bubble;
pub mod insertion;
pub mod selection;

use std::cmp::Ordering;

use crate::Sort;

pub struct BubbleSort;

impl Sort for BubbleSort {
    fn name() -> String {
        "Bubble Sort".into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        bubble::sort(v);
    }

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        bubble::sort_by(v, compare);
    }
}

pub struct InsertionSort;

impl Sort for InsertionSort {
    fn name() -> String {
        "Insertion Sort".into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        insertion::sort(v);
    }

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        insertion::sort_by(v, compare);
    }
}

pub struct SelectionSort;

impl Sort for SelectionSort {
    fn name() -> String {
        "Selection Sort".into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        selection::sort(v);
    }

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        selection::sort_by(v, compare);
    }
}
