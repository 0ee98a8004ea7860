//! Unit tests for `LinkedList`.
//!
//! These tests verify the correctness of the `LinkedList` implementation,
//! covering chain bookkeeping, positional access, and every index-aware
//! combinator.

use catena::list::LinkedList;
use rstest::rstest;

const NUM_ELEMENTS: usize = 201;

fn sequential_list(length: usize) -> LinkedList<usize> {
    (0..length).collect()
}

// =============================================================================
// Construction and emptiness
// =============================================================================

#[rstest]
fn test_empty_list_has_no_elements() {
    let mut list: LinkedList<usize> = LinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.get(0), None);
    assert_eq!(list.get(7), None);
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);
    assert_eq!(list.middle(), None);
    assert_eq!(list.pop(), None);
}

#[rstest]
fn test_from_iterator_appends_in_order() {
    let list = sequential_list(5);
    let collected: Vec<&usize> = list.iter().collect();
    assert_eq!(collected, vec![&0, &1, &2, &3, &4]);
}

// =============================================================================
// Append and positional access
// =============================================================================

#[rstest]
fn test_append_get_round_trip() {
    let list = sequential_list(NUM_ELEMENTS);
    assert_eq!(list.len(), NUM_ELEMENTS);
    for index in 0..NUM_ELEMENTS {
        assert_eq!(list.get(index), Some(&index));
    }
    assert_eq!(list.get(NUM_ELEMENTS), None);
}

#[rstest]
fn test_first_and_last_track_the_ends() {
    let mut list = LinkedList::new();
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);

    list.append(String::from("abc"));
    assert_eq!(list.first().map(String::as_str), Some("abc"));
    assert_eq!(list.last().map(String::as_str), Some("abc"));

    list.append(String::from("def"));
    assert_eq!(list.first().map(String::as_str), Some("abc"));
    assert_eq!(list.last().map(String::as_str), Some("def"));

    assert_eq!(list.pop().as_deref(), Some("abc"));
    assert_eq!(list.first().map(String::as_str), Some("def"));
    assert_eq!(list.last().map(String::as_str), Some("def"));

    assert_eq!(list.pop().as_deref(), Some("def"));
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);
}

// =============================================================================
// Pop
// =============================================================================

#[rstest]
fn test_pop_returns_values_in_insertion_order() {
    let mut list = sequential_list(NUM_ELEMENTS);
    for expected in 0..NUM_ELEMENTS {
        assert_eq!(list.len(), NUM_ELEMENTS - expected);
        assert_eq!(list.pop(), Some(expected));
    }
    assert_eq!(list.len(), 0);
    assert_eq!(list.pop(), None);
}

// =============================================================================
// Middle
// =============================================================================

#[rstest]
#[case::empty(0, None)]
#[case::one_element(1, Some(0))]
#[case::two_elements(2, Some(1))]
#[case::three_elements(3, Some(1))]
fn test_middle_by_length(#[case] length: usize, #[case] expected: Option<usize>) {
    let list = sequential_list(length);
    assert_eq!(list.middle().copied(), expected);
}

#[rstest]
fn test_middle_is_the_element_at_half_length() {
    let list = sequential_list(NUM_ELEMENTS);
    assert_eq!(list.middle(), list.get(NUM_ELEMENTS / 2));
    assert_eq!(list.middle(), Some(&(NUM_ELEMENTS / 2)));
}

// =============================================================================
// Reverse
// =============================================================================

#[rstest]
fn test_reverse_mirrors_indexing() {
    let mut list = sequential_list(NUM_ELEMENTS);
    list.reverse();
    assert_eq!(list.len(), NUM_ELEMENTS);
    for index in 0..NUM_ELEMENTS {
        assert_eq!(list.get(index), Some(&(NUM_ELEMENTS - 1 - index)));
    }
}

#[rstest]
fn test_reverse_twice_restores_the_original_order() {
    let mut list = sequential_list(NUM_ELEMENTS);
    list.reverse();
    list.reverse();
    assert_eq!(list, sequential_list(NUM_ELEMENTS));
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_identically_built_lists_are_equal() {
    let list1 = sequential_list(NUM_ELEMENTS);
    let list2 = sequential_list(NUM_ELEMENTS);
    assert_eq!(list1, list2);

    let shifted = list1.map(|_, element| element + 1);
    assert_ne!(list1, shifted);
}

#[rstest]
fn test_lists_of_different_lengths_are_not_equal() {
    let list1 = sequential_list(3);
    let list2 = sequential_list(4);
    assert_ne!(list1, list2);
}

// =============================================================================
// Append-list
// =============================================================================

#[rstest]
fn test_append_list_concatenates_copies() {
    let mut list = sequential_list(2);
    let other = sequential_list(4);

    list.append_list(&other);

    let collected: Vec<&usize> = list.iter().collect();
    assert_eq!(collected, vec![&0, &1, &0, &1, &2, &3]);
    assert_eq!(other, sequential_list(4));
}

#[rstest]
fn test_append_list_onto_empty_copies_everything() {
    let mut list = LinkedList::new();
    let other = sequential_list(3);
    list.append_list(&other);
    assert_eq!(list, other);
}

#[rstest]
fn test_append_list_of_empty_is_a_no_op() {
    let mut list = sequential_list(3);
    let empty = LinkedList::new();
    list.append_list(&empty);
    assert_eq!(list, sequential_list(3));
}

// =============================================================================
// Replace
// =============================================================================

#[rstest]
fn test_replace_returns_previous_contents() {
    let mut list = sequential_list(NUM_ELEMENTS);
    let other = sequential_list(NUM_ELEMENTS * 2);

    let previous = list.replace(&other);

    assert_eq!(previous, sequential_list(NUM_ELEMENTS));
    assert_eq!(list, other);
    assert_eq!(other.len(), NUM_ELEMENTS * 2);
}

#[rstest]
fn test_replace_result_is_independent_of_both_lists() {
    let mut list = sequential_list(3);
    let other = sequential_list(5);

    let mut previous = list.replace(&other);
    previous.append(99);
    list.pop();

    assert_eq!(previous.len(), 4);
    assert_eq!(list.len(), 4);
    assert_eq!(other, sequential_list(5));
}

// =============================================================================
// Rest
// =============================================================================

#[rstest]
fn test_rest_drops_the_first_element() {
    let list = sequential_list(5);
    let rest = list.rest();
    let expected: LinkedList<usize> = (1..5).collect();
    assert_eq!(rest, Some(expected));
    assert_eq!(list.len(), 5);
}

#[rstest]
fn test_rest_of_single_element_list_is_an_empty_list() {
    let list = sequential_list(1);
    assert_eq!(list.rest(), Some(LinkedList::new()));
}

#[rstest]
fn test_rest_of_empty_list_is_none() {
    let list: LinkedList<usize> = LinkedList::new();
    assert_eq!(list.rest(), None);
}

// =============================================================================
// Clone
// =============================================================================

#[rstest]
fn test_clone_matches_the_original() {
    let list = sequential_list(NUM_ELEMENTS);
    let copy = list.clone();
    assert_eq!(copy, list);
}

#[rstest]
fn test_clone_is_independent_of_the_original() {
    let mut list = sequential_list(4);
    let copy = list.clone();

    list.pop();
    list.append(77);

    assert_eq!(copy, sequential_list(4));
    assert_ne!(copy, list);
}

// =============================================================================
// for_each
// =============================================================================

#[rstest]
fn test_for_each_visits_every_element_in_order() {
    let list = sequential_list(5);
    let mut seen = Vec::new();
    list.for_each(|index, element| seen.push((index, *element)));
    assert_eq!(seen, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
}

#[rstest]
fn test_for_each_on_empty_list_never_calls_back() {
    let list: LinkedList<usize> = LinkedList::new();
    let mut calls = 0;
    list.for_each(|_, _| calls += 1);
    assert_eq!(calls, 0);
}

// =============================================================================
// find
// =============================================================================

#[rstest]
fn test_find_returns_the_first_match() {
    let list = sequential_list(10);
    assert_eq!(list.find(|_, element| *element > 6), Some(&7));
    assert_eq!(list.find(|index, _| index == 3), Some(&3));
    assert_eq!(list.find(|_, element| *element > 100), None);
}

#[rstest]
fn test_find_short_circuits_at_the_first_match() {
    let list: LinkedList<i32> = vec![1, 2, 3, 2].into_iter().collect();
    let mut calls = 0;
    let found = list.find(|_, element| {
        calls += 1;
        *element == 2
    });
    assert_eq!(found, Some(&2));
    assert_eq!(calls, 2);
}

// =============================================================================
// filter
// =============================================================================

#[rstest]
fn test_filter_keeps_matching_elements_in_order() {
    let list = sequential_list(10);
    let even = list.filter(|_, element| element % 2 == 0);
    let collected: Vec<&usize> = even.iter().collect();
    assert_eq!(collected, vec![&0, &2, &4, &6, &8]);
    assert_eq!(list.len(), 10);
}

#[rstest]
fn test_filter_passes_receiver_indices() {
    let list: LinkedList<i32> = vec![10, 20, 30, 40].into_iter().collect();
    let at_odd_indices = list.filter(|index, _| index % 2 == 1);
    let collected: Vec<&i32> = at_odd_indices.iter().collect();
    assert_eq!(collected, vec![&20, &40]);
}

#[rstest]
fn test_filter_with_no_matches_is_empty() {
    let list = sequential_list(5);
    let none = list.filter(|_, _| false);
    assert!(none.is_empty());
}

// =============================================================================
// partition
// =============================================================================

#[rstest]
fn test_partition_splits_by_predicate() {
    let list = sequential_list(10);
    let (even, odd) = list.partition(|_, element| element % 2 == 0);

    assert_eq!(even, list.filter(|_, element| element % 2 == 0));
    assert_eq!(odd, list.filter(|_, element| element % 2 == 1));
    assert_eq!(even.len() + odd.len(), list.len());
}

#[rstest]
fn test_partition_of_empty_list_yields_two_empty_lists() {
    let list: LinkedList<usize> = LinkedList::new();
    let (matching, rest) = list.partition(|_, _| true);
    assert!(matching.is_empty());
    assert!(rest.is_empty());
}

// =============================================================================
// map
// =============================================================================

#[rstest]
fn test_map_preserves_length_and_order() {
    let list = sequential_list(NUM_ELEMENTS);
    let doubled = list.map(|_, element| element * 2);
    assert_eq!(doubled.len(), NUM_ELEMENTS);
    for index in 0..NUM_ELEMENTS {
        assert_eq!(doubled.get(index), Some(&(index * 2)));
    }
}

#[rstest]
fn test_map_passes_receiver_indices() {
    let list: LinkedList<usize> = vec![5, 5, 5].into_iter().collect();
    let offsets = list.map(|index, element| index + element);
    let collected: Vec<&usize> = offsets.iter().collect();
    assert_eq!(collected, vec![&5, &6, &7]);
}

#[rstest]
fn test_map_changes_the_element_type() {
    let list: LinkedList<i32> = (1..=3).collect();
    let rendered = list.map(|index, element| format!("{index}:{element}"));
    let collected: Vec<String> = rendered.into_iter().collect();
    assert_eq!(collected, vec!["0:1", "1:2", "2:3"]);
}

// =============================================================================
// flat_map
// =============================================================================

#[rstest]
fn test_flat_map_concatenates_sublists_in_order() {
    let list = sequential_list(4);
    let expanded = list.flat_map(|index, _| sequential_list(index));
    let collected: Vec<&usize> = expanded.iter().collect();
    assert_eq!(collected, vec![&0, &0, &1, &0, &1, &2]);
    assert_eq!(expanded.len(), 6);
}

#[rstest]
fn test_flat_map_on_empty_list_is_empty() {
    let list: LinkedList<usize> = LinkedList::new();
    let expanded = list.flat_map(|index, _| sequential_list(index));
    assert!(expanded.is_empty());
}

// =============================================================================
// reduce
// =============================================================================

#[rstest]
fn test_reduce_concatenates_indices_and_values() {
    let list = sequential_list(2);
    let trace = list.reduce(String::new(), |index, accumulator, element| {
        format!("{accumulator}{index}{element}")
    });
    assert_eq!(trace, "0011");
}

#[rstest]
fn test_reduce_folds_from_the_left() {
    let list = sequential_list(NUM_ELEMENTS);
    let sum = list.reduce(0, |_, accumulator, element| accumulator + element);
    assert_eq!(sum, NUM_ELEMENTS * (NUM_ELEMENTS - 1) / 2);
}

#[rstest]
fn test_reduce_on_empty_list_returns_the_initial_value() {
    let list: LinkedList<usize> = LinkedList::new();
    let result = list.reduce(42, |_, accumulator, element| accumulator + element);
    assert_eq!(result, 42);
}

// =============================================================================
// zip
// =============================================================================

#[rstest]
fn test_zip_interleaves_starting_with_the_receiver() {
    let first: LinkedList<usize> = (0..2).collect();
    let second: LinkedList<usize> = (1..=3).collect();

    let interleaved = first.zip(&second);
    let collected: Vec<usize> = interleaved.into_iter().collect();
    assert_eq!(collected, vec![0, 1, 1, 2, 3]);

    let swapped = second.zip(&first);
    let collected: Vec<usize> = swapped.into_iter().collect();
    assert_eq!(collected, vec![1, 0, 2, 1, 3]);
}

#[rstest]
fn test_zip_with_empty_returns_a_copy_of_the_other_side() {
    let list = sequential_list(3);
    let empty = LinkedList::new();

    assert_eq!(list.zip(&empty), list);
    assert_eq!(empty.zip(&list), list);
}

#[rstest]
fn test_zip_leaves_both_operands_untouched() {
    let first = sequential_list(2);
    let second = sequential_list(5);

    let interleaved = first.zip(&second);

    assert_eq!(interleaved.len(), 7);
    assert_eq!(first, sequential_list(2));
    assert_eq!(second, sequential_list(5));
}

// =============================================================================
// Iteration and conversion
// =============================================================================

#[rstest]
fn test_iter_walks_head_to_tail() {
    let list = sequential_list(NUM_ELEMENTS);
    for (index, element) in list.iter().enumerate() {
        assert_eq!(*element, index);
    }
    assert_eq!(list.iter().count(), NUM_ELEMENTS);
}

#[rstest]
fn test_into_iter_drains_by_value() {
    let list: LinkedList<String> = ["a", "b"].into_iter().map(String::from).collect();
    let collected: Vec<String> = list.into_iter().collect();
    assert_eq!(collected, vec!["a", "b"]);
}

#[rstest]
fn test_extend_appends_at_the_tail() {
    let mut list: LinkedList<i32> = (1..=2).collect();
    list.extend(3..=4);
    let collected: Vec<i32> = list.into_iter().collect();
    assert_eq!(collected, vec![1, 2, 3, 4]);
}
