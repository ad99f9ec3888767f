//! Sorting utilities.
//!
//! Provides a stable merge sort for ranking, where ties must keep the order an
//! earlier pass produced.

mod merge;

pub use merge::{merge_sort_by, merge_sort_by_key};
