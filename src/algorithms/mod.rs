//! Sorting algorithms used by the containers
//!
//! Containers sort through the [`Sorter`] trait so the algorithm can be
//! swapped out; [`QuickSorter`] is the default.

pub mod quick_sort;

pub use quick_sort::{QuickSorter, Sorter};
