//! Randomized in-place quicksort behind a pluggable sorting strategy
//!
//! [`Sorter`] is the seam containers sort through. [`QuickSorter`] is the
//! default strategy: a Hoare-partition quicksort with a uniformly random pivot.
//! The random source is seedable so that a sort can be replayed exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::mem;

/// Strategy for sorting a prefix of a slice with a caller-supplied ordering
pub trait Sorter {
    /// Sort `elements[..len]` in place according to `compare`.
    ///
    /// A `len` larger than the slice is clamped to the slice length. The
    /// sorter must not keep any reference to `elements` after returning.
    fn sort_by<T, F>(&self, elements: &mut [T], len: usize, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// Randomized-pivot quicksort with Hoare-style partitioning
///
/// The sort is unstable and uses O(log n) stack: the smaller partition is
/// recursed into, the larger one is handled by the enclosing loop.
///
/// # Examples
///
/// ```rust
/// use dynarray::{QuickSorter, Sorter};
///
/// let mut data = [9, -5, 6, 8, 7];
/// QuickSorter::seeded(7).sort_by(&mut data, 5, |a, b| a.cmp(b));
/// assert_eq!(data, [-5, 6, 7, 8, 9]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickSorter {
    seed: Option<u64>,
}

impl QuickSorter {
    /// Sorter drawing pivots from an entropy-seeded generator on every call
    #[inline]
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Sorter whose pivot sequence is fully determined by `seed`
    #[inline]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// The fixed seed, if any
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Sorter for QuickSorter {
    fn sort_by<T, F>(&self, elements: &mut [T], len: usize, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = len.min(elements.len());
        if len < 2 {
            return;
        }
        let mut rng = self.rng();
        quick_sort(&mut elements[..len], &mut rng, &mut compare);
    }
}

fn quick_sort<T, F, R>(mut v: &mut [T], rng: &mut R, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    while v.len() > 1 {
        let (lower_end, upper_start) = partition(v, rng, compare);
        let (lower, rest) = mem::take(&mut v).split_at_mut(lower_end);
        let upper = &mut rest[upper_start - lower_end..];

        if lower.len() < upper.len() {
            quick_sort(lower, rng, compare);
            v = upper;
        } else {
            quick_sort(upper, rng, compare);
            v = lower;
        }
    }
}

/// Partition `v` around a random pivot.
///
/// Returns `(lower_end, upper_start)`: `v[..lower_end]` holds elements not
/// greater than the pivot and `v[upper_start..]` elements not less than it.
/// Both parts are strictly shorter than `v`, whatever `compare` answers.
fn partition<T, F, R>(v: &mut [T], rng: &mut R, compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    let len = v.len();
    debug_assert!(len > 1);

    let mut pivot = rng.gen_range(0..len);
    // `right` is kept one past the right cursor so it never underflows.
    let mut left = 0;
    let mut right = len;

    while left < right {
        while left < right && compare(&v[left], &v[pivot]) == Ordering::Less {
            left += 1;
        }
        while left < right && compare(&v[right - 1], &v[pivot]) == Ordering::Greater {
            right -= 1;
        }
        if left < right {
            let r = right - 1;
            v.swap(left, r);
            // The pivot value moves with the swap.
            if pivot == left {
                pivot = r;
            } else if pivot == r {
                pivot = left;
            }
            left += 1;
            right -= 1;
        }
    }

    (right.min(len - 1), left.max(1))
}
