//! # dynarray: growable array with a pluggable randomized quicksort
//!
//! [`DynamicArray`] keeps its elements in one contiguous buffer and supports
//! bounds-checked access, insertion and removal at any live index, and
//! in-place sorting through a [`Sorter`] strategy.
//!
//! ## Key Features
//!
//! - **Predictable growth**: the first reallocation uses the capacity hint,
//!   later ones grow the target capacity by a factor of 1.5
//! - **Index-based editing**: `insert` and `remove_at` shift the tail by one
//!   slot with a single overlapping move
//! - **Pluggable sorting**: [`QuickSorter`] by default, seedable for
//!   reproducible runs
//! - **Configuration**: environment variables and JSON files via
//!   [`config::DynamicArrayConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use dynarray::{DynamicArray, QuickSorter};
//!
//! let mut array = DynamicArray::with_sorter(5, QuickSorter::seeded(42));
//! for value in [22, 14, 27, 11, 6] {
//!     array.append(value);
//! }
//!
//! array.insert(33, 0).unwrap();
//! assert_eq!(array.remove_at(1).unwrap(), 22);
//!
//! array.sort_by(|a, b| a.cmp(b));
//! assert_eq!(array.as_slice(), &[6, 11, 14, 27, 33]);
//! assert!(array.get(array.size()).is_err());
//! ```
//!
//! The array performs no internal synchronization; callers sharing one
//! across threads must lock around it.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod algorithms;
pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use algorithms::{QuickSorter, Sorter};
pub use config::{Config, DynamicArrayConfig};
pub use containers::{DynamicArray, DEFAULT_CAPACITY, MIN_CAPACITY};
pub use error::{DynArrayError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing dynarray v{}", VERSION);
}
