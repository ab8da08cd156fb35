//! Container types
//!
//! - **`DynamicArray<T, S>`** - growable array with index-based insert/remove
//!   and sorting through a pluggable [`Sorter`](crate::algorithms::Sorter)

mod dynamic_array;

pub use dynamic_array::{DynamicArray, DEFAULT_CAPACITY, MIN_CAPACITY};
