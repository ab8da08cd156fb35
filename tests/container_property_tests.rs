//! Property-based testing for DynamicArray and QuickSorter
//!
//! Operation sequences are replayed against `Vec` as a reference model.

use proptest::prelude::*;
use std::collections::HashMap;

use dynarray::{DynamicArray, QuickSorter, Sorter};

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

#[derive(Debug, Clone)]
enum ArrayOp {
    Append(i32),
    Insert(i32, usize),
    RemoveAt(usize),
    Clear,
}

fn array_ops_strategy() -> impl Strategy<Value = Vec<ArrayOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => any::<i32>().prop_map(ArrayOp::Append),
            3 => (any::<i32>(), 0usize..64).prop_map(|(v, i)| ArrayOp::Insert(v, i)),
            3 => (0usize..64).prop_map(ArrayOp::RemoveAt),
            1 => Just(ArrayOp::Clear),
        ],
        0..300,
    )
}

fn build(capacity: usize, values: &[i32]) -> DynamicArray<i32> {
    let mut array = DynamicArray::with_capacity(capacity);
    for &value in values {
        array.append(value);
    }
    array
}

fn multiset<T: std::hash::Hash + Eq + Clone>(values: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// DYNAMIC ARRAY PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_vec_model(
        capacity in 0usize..16,
        ops in array_ops_strategy()
    ) {
        let mut array = DynamicArray::with_capacity(capacity);
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                ArrayOp::Append(value) => {
                    array.append(value);
                    model.push(value);
                }
                ArrayOp::Insert(value, index) => {
                    let result = array.insert(value, index);
                    if index < model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, value);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                ArrayOp::RemoveAt(index) => {
                    let result = array.remove_at(index);
                    if index < model.len() {
                        prop_assert_eq!(result.ok(), Some(model.remove(index)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                ArrayOp::Clear => {
                    array.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(array.size(), model.len());
            prop_assert!(array.size() <= array.capacity());
            prop_assert!(array.target_capacity() > array.capacity());
        }

        prop_assert_eq!(array.as_slice(), model.as_slice());
        for (i, expected) in model.iter().enumerate() {
            prop_assert_eq!(array.get(i).ok(), Some(expected));
        }
        prop_assert!(array.get(model.len()).is_err());
    }

    #[test]
    fn prop_insert_then_remove_is_noop(
        elements in prop::collection::vec(any::<i32>(), 1..200),
        value in any::<i32>(),
        index_seed in any::<prop::sample::Index>()
    ) {
        let mut array = build(3, &elements);
        let index = index_seed.index(elements.len());

        array.insert(value, index).unwrap();
        prop_assert_eq!(array.remove_at(index).unwrap(), value);
        prop_assert_eq!(array.as_slice(), elements.as_slice());
    }

    #[test]
    fn prop_equality_ignores_growth_history(
        elements in prop::collection::vec(any::<i16>(), 0..200),
        small_hint in 1usize..4,
        large_hint in 200usize..400
    ) {
        let mut small = DynamicArray::with_capacity(small_hint);
        let mut large = DynamicArray::with_capacity(large_hint);
        for &element in &elements {
            small.append(element);
            large.append(element);
        }

        prop_assert_eq!(&small, &large);
        prop_assert_eq!(&large, &small);
        prop_assert_eq!(small.content_hash(), large.content_hash());
    }

    #[test]
    fn prop_sort_orders_and_permutes(
        elements in prop::collection::vec(any::<i32>(), 0..500),
        seed in any::<u64>()
    ) {
        let mut array = DynamicArray::with_sorter(8, QuickSorter::seeded(seed));
        for &element in &elements {
            array.append(element);
        }
        array.sort_by(|a, b| a.cmp(b));

        let sorted = array.as_slice();
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(multiset(sorted), multiset(&elements));
    }

    #[test]
    fn prop_seeded_sort_is_deterministic(
        keys in prop::collection::vec(0u8..8, 0..300),
        seed in any::<u64>()
    ) {
        let tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let sorter = QuickSorter::seeded(seed);

        let mut first = tagged.clone();
        sorter.sort_by(&mut first, tagged.len(), |a, b| a.0.cmp(&b.0));
        let mut second = tagged.clone();
        sorter.sort_by(&mut second, tagged.len(), |a, b| a.0.cmp(&b.0));

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_sort_only_touches_prefix(
        elements in prop::collection::vec(any::<i32>(), 0..200),
        len_seed in any::<prop::sample::Index>()
    ) {
        let mut data = elements.clone();
        let len = if elements.is_empty() { 0 } else { len_seed.index(elements.len() + 1) };

        QuickSorter::new().sort_by(&mut data, len, |a, b| a.cmp(b));

        let mut expected_prefix = elements[..len].to_vec();
        expected_prefix.sort_unstable();
        prop_assert_eq!(&data[..len], expected_prefix.as_slice());
        prop_assert_eq!(&data[len..], &elements[len..]);
    }
}
