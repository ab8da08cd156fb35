//! DynamicArray: growable array with index-based insert/remove
//!
//! Storage is a boxed slice of possibly-uninitialized slots. Only the prefix
//! `[0, size)` is initialized; the rest of the buffer owns nothing. Growth
//! reallocates to a precomputed target capacity which then advances by a factor
//! of 1.5, or by one slot while it is still at the minimum.

use crate::algorithms::{QuickSorter, Sorter};
use crate::config::{Config, DynamicArrayConfig};
use crate::error::{check_bounds, Result};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem::MaybeUninit;
use std::ops::Index;
use std::ptr;
use std::slice;

/// Capacity hint used by [`DynamicArray::new`]
pub const DEFAULT_CAPACITY: usize = 10;

/// Smallest target capacity; smaller hints are clamped to it
pub const MIN_CAPACITY: usize = 1;

const EXTENSION_FACTOR: f64 = 1.5;

/// Growable array with bounds-checked access and a pluggable sorter
///
/// `insert` and `remove_at` shift the tail of the array by one slot, so they
/// cost O(size - index). `append` is amortized O(1). Sorting is delegated to
/// the held [`Sorter`], [`QuickSorter`] unless another one is injected.
///
/// Indices accepted by [`get`](Self::get), [`insert`](Self::insert) and
/// [`remove_at`](Self::remove_at) must address a live element: inserting at
/// `size()` is rejected, use [`append`](Self::append) instead.
///
/// # Examples
///
/// ```rust
/// use dynarray::DynamicArray;
///
/// let mut array = DynamicArray::with_capacity(5);
/// array.append(22);
/// array.append(14);
/// array.insert(33, 0).unwrap();
/// assert_eq!(array.as_slice(), &[33, 22, 14]);
///
/// assert_eq!(array.remove_at(1).unwrap(), 22);
/// assert!(array.get(2).is_err());
/// ```
pub struct DynamicArray<T, S = QuickSorter> {
    storage: Box<[MaybeUninit<T>]>,
    size: usize,
    target_capacity: usize,
    sorter: S,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default capacity hint
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array whose first growth allocates `capacity` slots
    ///
    /// A hint of zero is clamped to [`MIN_CAPACITY`]. No buffer is allocated
    /// until the first element is appended.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_sorter(capacity, QuickSorter::new())
    }

    /// Create an empty array from a validated configuration
    pub fn from_config(config: &DynamicArrayConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "Creating dynamic array with initial capacity {} (sort seed: {:?})",
            config.initial_capacity,
            config.sort_seed
        );

        let sorter = config
            .sort_seed
            .map_or_else(QuickSorter::new, QuickSorter::seeded);
        Ok(Self::with_sorter(config.initial_capacity, sorter))
    }
}

impl<T, S> DynamicArray<T, S> {
    /// Create an empty array that sorts through `sorter`
    pub fn with_sorter(capacity: usize, sorter: S) -> Self {
        Self {
            storage: Box::new([]),
            size: 0,
            target_capacity: capacity.max(MIN_CAPACITY),
            sorter,
        }
    }

    /// Number of live elements
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the array holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Length of the current backing buffer
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Length of the buffer the next growth will allocate
    #[inline]
    pub fn target_capacity(&self) -> usize {
        self.target_capacity
    }

    /// The sorting strategy in use
    #[inline]
    pub fn sorter(&self) -> &S {
        &self.sorter
    }

    /// View of the live elements
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, size) are initialized.
        unsafe { slice::from_raw_parts(self.storage.as_ptr() as *const T, self.size) }
    }

    /// Get a reference to the element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        check_bounds(index, self.size)?;
        Ok(&self.as_slice()[index])
    }

    /// Append an element after the last live one
    pub fn append(&mut self, value: T) {
        if self.storage.len() == self.size {
            self.grow();
        }

        self.storage[self.size].write(value);
        self.size += 1;
    }

    /// Insert `value` before the element currently at `index`
    ///
    /// `index` must be a live index; on error nothing is modified.
    pub fn insert(&mut self, value: T, index: usize) -> Result<()> {
        check_bounds(index, self.size)?;

        if self.storage.len() == self.size {
            self.grow();
        }

        self.shift_up(index);
        self.storage[index].write(value);
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.size)?;

        // SAFETY: `index` is live; its bits are overwritten by the shift below
        // before anything else can observe them.
        let value = unsafe { self.storage[index].as_ptr().read() };
        self.shift_down(index + 1);
        self.size -= 1;
        self.storage[self.size] = MaybeUninit::uninit();
        Ok(value)
    }

    /// Drop every live element, keeping the buffer and target capacity
    pub fn clear(&mut self) {
        let live = self.size;
        // Zero the size first so a panicking destructor leaks instead of
        // dropping twice.
        self.size = 0;
        // SAFETY: slots [0, live) were initialized and are no longer tracked.
        unsafe {
            ptr::drop_in_place(live_slice_mut(&mut self.storage, live));
        }
    }

    /// Sort the live elements with `compare` through the held sorter
    pub fn sort_by<F>(&mut self, compare: F)
    where
        S: Sorter,
        F: FnMut(&T, &T) -> Ordering,
    {
        let size = self.size;
        // SAFETY: slots [0, size) are initialized.
        let live = unsafe { live_slice_mut(&mut self.storage, size) };
        self.sorter.sort_by(live, size, compare);
    }

    /// Sort the live elements in ascending order
    pub fn sort(&mut self)
    where
        S: Sorter,
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Order-sensitive hash of the live elements
    ///
    /// Starts at 1 and folds every element as `acc * 31 + hash(element)`.
    /// Capacity does not contribute, so equal arrays hash identically.
    pub fn content_hash(&self) -> u64
    where
        T: Hash,
    {
        self.as_slice().iter().fold(1u64, |acc, element| {
            let mut hasher = DefaultHasher::new();
            element.hash(&mut hasher);
            acc.wrapping_mul(31).wrapping_add(hasher.finish())
        })
    }

    fn grow(&mut self) {
        debug_assert!(self.target_capacity > self.size);

        let mut storage = allocate_slots(self.target_capacity);
        // SAFETY: the new buffer is longer than `size`, the regions are
        // distinct allocations, and the old slots are never read again.
        unsafe {
            ptr::copy_nonoverlapping(self.storage.as_ptr(), storage.as_mut_ptr(), self.size);
        }
        log::trace!(
            "Growing dynamic array storage from {} to {} slots",
            self.storage.len(),
            storage.len()
        );
        self.storage = storage;

        self.target_capacity = if self.target_capacity > MIN_CAPACITY {
            (self.target_capacity as f64 * EXTENSION_FACTOR) as usize
        } else {
            self.target_capacity + 1
        };
    }

    /// Move `[first, size)` one slot up. Requires a free slot at `size`.
    fn shift_up(&mut self, first: usize) {
        debug_assert!(self.size < self.storage.len());
        // SAFETY: source and destination both lie within the buffer;
        // `ptr::copy` handles the overlap.
        unsafe {
            let base = self.storage.as_mut_ptr();
            ptr::copy(base.add(first), base.add(first + 1), self.size - first);
        }
    }

    /// Move `[first, size)` one slot down, overwriting `first - 1`.
    fn shift_down(&mut self, first: usize) {
        debug_assert!(first >= 1 && first <= self.size);
        // SAFETY: as for `shift_up`.
        unsafe {
            let base = self.storage.as_mut_ptr();
            ptr::copy(base.add(first), base.add(first - 1), self.size - first);
        }
    }
}

fn allocate_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    iter::repeat_with(MaybeUninit::uninit).take(capacity).collect()
}

/// # Safety
///
/// `storage[..len]` must be initialized.
unsafe fn live_slice_mut<T>(storage: &mut [MaybeUninit<T>], len: usize) -> &mut [T] {
    debug_assert!(len <= storage.len());
    unsafe { slice::from_raw_parts_mut(storage.as_mut_ptr() as *mut T, len) }
}

impl<T, S: Default> Default for DynamicArray<T, S> {
    fn default() -> Self {
        Self::with_sorter(DEFAULT_CAPACITY, S::default())
    }
}

impl<T, S> Drop for DynamicArray<T, S> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, S> Index<usize> for DynamicArray<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: fmt::Debug, S> fmt::Debug for DynamicArray<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq, S, S2> PartialEq<DynamicArray<T, S2>> for DynamicArray<T, S> {
    fn eq(&self, other: &DynamicArray<T, S2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, S> Eq for DynamicArray<T, S> {}

impl<T: Hash, S> Hash for DynamicArray<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Clone, S: Clone> Clone for DynamicArray<T, S> {
    fn clone(&self) -> Self {
        let mut cloned = Self {
            storage: allocate_slots(self.storage.len()),
            size: 0,
            target_capacity: self.target_capacity,
            sorter: self.sorter.clone(),
        };
        for element in self.as_slice() {
            cloned.storage[cloned.size].write(element.clone());
            cloned.size += 1;
        }
        cloned
    }
}
