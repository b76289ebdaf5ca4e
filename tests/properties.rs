use std::iter::FromIterator;

use dsa_kit::cursor::{distance, Forward};
use dsa_kit::search::{binary_search, linear_search, search_insert_position, SearchStrategy};
use dsa_kit::sort::{insertion_sort, is_sorted, selection_sort, InsertionStrategy, SelectionStrategy};
use dsa_kit::traits::{Basic, Traverse, TraverseMut};
use dsa_kit::{CircularList, DoublyLinkedList, DynamicArray, SinglyLinkedList, StaticArray, Stats};
use proptest::prelude::*;

fn insertion_sorted<C>(mut container: C, strategy: InsertionStrategy) -> (Vec<i32>, Stats)
where
    C: TraverseMut<Item = i32>,
{
    let mut stats = Stats::new();
    {
        let (begin, end) = container.range_mut();
        insertion_sort(&begin, &end, i32::cmp, strategy, Some(&mut stats)).unwrap();
    }
    (container.take_all(), stats)
}

fn selection_sorted_array(values: &[i32], strategy: SelectionStrategy) -> Vec<i32> {
    let mut array = DynamicArray::from_iter(values.iter().copied());
    {
        let (begin, end) = array.range_mut();
        selection_sort(&begin, &end, i32::cmp, strategy, None).unwrap();
    }
    array.take_all()
}

fn selection_sorted_list(values: &[i32], strategy: SelectionStrategy) -> Vec<i32> {
    let mut list = DoublyLinkedList::from_iter(values.iter().copied());
    {
        let (begin, end) = list.range_mut();
        selection_sort(&begin, &end, i32::cmp, strategy, None).unwrap();
    }
    list.take_all()
}

fn check_end_is_idempotent<C: Forward>(begin: &C, end: &C, steps: usize) {
    let mut cursor = end.clone();
    cursor.move_next();
    assert!(cursor == *end);
    assert!(end.advanced(steps) == *end);
    assert!(begin.advanced(steps + distance(begin, end)) == *end);
    assert!(cursor.get().is_none());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256, ..ProptestConfig::default()
    })]

    #[test]
    fn every_sort_agrees_with_std(values in prop::collection::vec(-50i32..50, 0..40)) {
        let mut expected = values.clone();
        expected.sort();

        for strategy in [InsertionStrategy::Linear, InsertionStrategy::Binary] {
            prop_assert_eq!(&insertion_sorted(DynamicArray::from_iter(values.iter().copied()), strategy).0, &expected);
            prop_assert_eq!(&insertion_sorted(DoublyLinkedList::from_iter(values.iter().copied()), strategy).0, &expected);
            prop_assert_eq!(&insertion_sorted(SinglyLinkedList::from_iter(values.iter().copied()), strategy).0, &expected);
            prop_assert_eq!(&insertion_sorted(CircularList::from_iter(values.iter().copied()), strategy).0, &expected);
        }
        for strategy in [SelectionStrategy::Linear, SelectionStrategy::Bubble] {
            prop_assert_eq!(&selection_sorted_array(&values, strategy), &expected);
            prop_assert_eq!(&selection_sorted_list(&values, strategy), &expected);
        }
    }

    #[test]
    fn insertion_strategies_agree(values in prop::collection::vec(any::<i32>(), 0..60)) {
        let (linear, linear_stats) = insertion_sorted(DoublyLinkedList::from_iter(values.iter().copied()), InsertionStrategy::Linear);
        let (binary, binary_stats) = insertion_sorted(DoublyLinkedList::from_iter(values.iter().copied()), InsertionStrategy::Binary);
        prop_assert_eq!(linear, binary);
        // Both strategies move each element by the same number of slots.
        prop_assert_eq!(linear_stats.swaps, binary_stats.swaps);
        prop_assert_eq!(linear_stats.element_count, values.len());
    }

    #[test]
    fn sorted_input_is_left_alone(mut values in prop::collection::vec(-20i32..20, 0..40)) {
        values.sort();
        let (sorted, stats) = insertion_sorted(DynamicArray::from_iter(values.iter().copied()), InsertionStrategy::Linear);
        prop_assert_eq!(&sorted, &values);
        prop_assert_eq!(stats.swaps, 0);

        let mut array = DynamicArray::from_iter(values.iter().copied());
        let mut stats = Stats::new();
        {
            let (begin, end) = array.range_mut();
            selection_sort(&begin, &end, i32::cmp, SelectionStrategy::Linear, Some(&mut stats)).unwrap();
            prop_assert!(is_sorted(&begin, &end, i32::cmp));
        }
        prop_assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn insertion_sort_is_stable(keys in prop::collection::vec(0u8..5, 0..40)) {
        let tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0);

        for strategy in [InsertionStrategy::Linear, InsertionStrategy::Binary] {
            let mut list = SinglyLinkedList::from_iter(tagged.iter().copied());
            {
                let (begin, end) = list.range_mut();
                insertion_sort(&begin, &end, by_key, strategy, None).unwrap();
            }
            let sorted = list.take_all();
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].0 < pair[1].0 || (pair[0].0 == pair[1].0 && pair[0].1 < pair[1].1));
            }
        }
    }

    #[test]
    fn binary_and_linear_search_agree(
        set in prop::collection::btree_set(-100i32..100, 0..40),
        target in -110i32..110,
    ) {
        let values = Vec::from_iter(set.iter().copied());
        let array = DynamicArray::from_iter(values.iter().copied());
        let list = DoublyLinkedList::from_iter(values.iter().copied());

        let (begin, end) = array.range();
        let binary = binary_search(&begin, &end, &target, i32::cmp, None);
        let linear = linear_search(&begin, &end, &target, i32::cmp, None);
        prop_assert_eq!(binary.get() == Some(&target), set.contains(&target));
        prop_assert!(binary == linear);
        if !set.contains(&target) {
            prop_assert!(binary == end);
        }

        let (begin, end) = list.range();
        let binary = binary_search(&begin, &end, &target, i32::cmp, None);
        let linear = linear_search(&begin, &end, &target, i32::cmp, None);
        prop_assert_eq!(binary.index(), values.binary_search(&target).unwrap_or(values.len()));
        prop_assert!(binary == linear);
    }

    #[test]
    fn insert_positions_agree(
        mut values in prop::collection::vec(-20i32..20, 0..40),
        target in -25i32..25,
    ) {
        values.sort();
        let expected = values.partition_point(|v| *v <= target);
        let array = DynamicArray::from_iter(values.iter().copied());
        let (begin, end) = array.range();
        for strategy in SearchStrategy::ALL {
            let position = search_insert_position(strategy, &begin, &end, &target, i32::cmp, None);
            prop_assert_eq!(position.index(), expected);
        }
    }

    #[test]
    fn distance_matches_len(values in prop::collection::vec(any::<u16>(), 0..50), skip in 0usize..60) {
        let array = DynamicArray::from_iter(values.iter().copied());
        let doubly = DoublyLinkedList::from_iter(values.iter().copied());
        let singly = SinglyLinkedList::from_iter(values.iter().copied());
        let circular = CircularList::from_iter(values.iter().copied());
        let rest = values.len().saturating_sub(skip);

        let (begin, end) = array.range();
        prop_assert_eq!(distance(&begin, &end), array.len());
        prop_assert_eq!(distance(&begin.advanced(skip), &end), rest);
        let (begin, end) = doubly.range();
        prop_assert_eq!(distance(&begin, &end), doubly.len());
        prop_assert_eq!(distance(&begin.advanced(skip), &end), rest);
        let (begin, end) = singly.range();
        prop_assert_eq!(distance(&begin, &end), singly.len());
        prop_assert_eq!(distance(&begin.advanced(skip), &end), rest);
        let (begin, end) = circular.range();
        prop_assert_eq!(distance(&begin, &end), circular.len());
        prop_assert_eq!(distance(&begin.advanced(skip), &end), rest);
    }

    #[test]
    fn end_is_idempotent(values in prop::collection::vec(any::<i8>(), 0..20), steps in 0usize..30) {
        let mut fixed = StaticArray::<i8, 20>::new();
        fixed.try_extend(values.iter().copied()).unwrap();
        let (begin, end) = fixed.range();
        check_end_is_idempotent(&begin, &end, steps);

        let doubly = DoublyLinkedList::from_iter(values.iter().copied());
        let (begin, end) = doubly.range();
        check_end_is_idempotent(&begin, &end, steps);

        let circular = CircularList::from_iter(values.iter().copied());
        let (begin, end) = circular.range();
        check_end_is_idempotent(&begin, &end, steps);

        let mut singly = SinglyLinkedList::from_iter(values.iter().copied());
        let (begin, end) = singly.range_mut();
        check_end_is_idempotent(&begin, &end, steps);
    }
}
