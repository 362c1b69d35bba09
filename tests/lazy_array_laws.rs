#![cfg(feature = "sequence")]
//! Property-based tests for `LazyArray`.
//!
//! Every operation is checked against the same operation on a `Vec`, and
//! against the memoization guarantees shared by all views of a sequence.

use lazy_array::sequence::{LazyArray, Step, from_fn};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

fn generated(elements: Vec<i32>) -> LazyArray<i32> {
    let mut remaining = elements.into_iter().peekable();
    LazyArray::from_source(from_fn(move || match remaining.next() {
        None => Step::Exhausted(None),
        Some(last) if remaining.peek().is_none() => Step::Exhausted(Some(last)),
        Some(element) => Step::Produced(element),
    }))
}

// =============================================================================
// Construction Laws
// =============================================================================

proptest! {
    /// Building from a vector and collecting back yields the same vector
    #[test]
    fn prop_to_vec_roundtrip(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let array = LazyArray::from(elements.clone());
        prop_assert_eq!(array.to_vec(), elements);
    }
}

proptest! {
    /// A trailing value on exhaustion is the last element, not an extra one
    #[test]
    fn prop_generator_matches_vector(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let array = generated(elements.clone());
        prop_assert_eq!(array.len(), elements.len());
        prop_assert_eq!(array, LazyArray::from(elements));
    }
}

proptest! {
    /// len equals the number of elements, and the tail is one shorter
    #[test]
    fn prop_len(elements in prop::collection::vec(any::<i32>(), 1..50)) {
        let array = LazyArray::from(elements.clone());
        prop_assert_eq!(array.len(), elements.len());
        prop_assert_eq!(array.tail().len(), elements.len() - 1);
    }
}

proptest! {
    /// iter visits the same elements as to_vec
    #[test]
    fn prop_iter_matches_to_vec(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let array = LazyArray::from(elements.clone());
        let collected: Vec<i32> = array.iter().copied().collect();
        prop_assert_eq!(collected, elements);
    }
}

// =============================================================================
// Transformation Laws
// =============================================================================

proptest! {
    /// map agrees with Iterator::map over enumerated elements
    #[test]
    fn prop_map(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let array = LazyArray::from(elements.clone());
        let mapped = array.map(|value, index| i64::from(*value) * 2 + index as i64);
        let expected: Vec<i64> = elements
            .iter()
            .enumerate()
            .map(|(index, value)| i64::from(*value) * 2 + index as i64)
            .collect();
        prop_assert_eq!(mapped.to_vec(), expected);
    }
}

proptest! {
    /// filter agrees with Iterator::filter over enumerated elements
    #[test]
    fn prop_filter(elements in prop::collection::vec(any::<i32>(), 0..50), modulus in 1_i32..5) {
        let array = LazyArray::from(elements.clone());
        let filtered = array.filter(move |value, index| (value % modulus == 0) != (index % 3 == 0));
        let expected: Vec<i32> = elements
            .iter()
            .enumerate()
            .filter(|(index, value)| (*value % modulus == 0) != (index % 3 == 0))
            .map(|(_, value)| *value)
            .collect();
        prop_assert_eq!(filtered.to_vec(), expected);
    }
}

proptest! {
    /// take_while agrees with Iterator::take_while
    #[test]
    fn prop_take_while(elements in prop::collection::vec(-20_i32..20, 0..50)) {
        let array = LazyArray::from(elements.clone());
        let taken = array.take_while(|value, _| *value > -15);
        let expected: Vec<i32> = elements.iter().copied().take_while(|value| *value > -15).collect();
        prop_assert_eq!(taken.to_vec(), expected);
    }
}

proptest! {
    /// take agrees with Iterator::take
    #[test]
    fn prop_take(elements in prop::collection::vec(any::<i32>(), 0..50), count in 0_usize..60) {
        let array = LazyArray::from(elements.clone());
        let expected: Vec<i32> = elements.into_iter().take(count).collect();
        prop_assert_eq!(array.take(count).to_vec(), expected);
    }
}

proptest! {
    /// prepend and append agree with inserting at either end of a vector
    #[test]
    fn prop_prepend_and_append(elements in prop::collection::vec(any::<i32>(), 0..50), first in any::<i32>(), last in any::<i32>()) {
        let array = LazyArray::from(elements.clone());

        let mut expected = vec![first];
        expected.extend(elements.iter().copied());
        prop_assert_eq!(array.prepend(first).to_vec(), expected);

        let mut expected = elements;
        expected.push(last);
        prop_assert_eq!(array.append(last).to_vec(), expected);
    }
}

// =============================================================================
// Query Laws
// =============================================================================

proptest! {
    /// some and every agree with Iterator::any and Iterator::all
    #[test]
    fn prop_some_and_every(elements in prop::collection::vec(-10_i32..10, 0..50), threshold in -10_i32..10) {
        let array = LazyArray::from(elements.clone());
        prop_assert_eq!(
            array.some(move |value, _| *value > threshold),
            elements.iter().any(|value| *value > threshold)
        );
        prop_assert_eq!(
            array.every(move |value, _| *value > threshold),
            elements.iter().all(|value| *value > threshold)
        );
    }
}

proptest! {
    /// index_of agrees with Iterator::position
    #[test]
    fn prop_index_of(elements in prop::collection::vec(0_i32..10, 0..50), needle in 0_i32..12) {
        let array = LazyArray::from(elements.clone());
        prop_assert_eq!(
            array.index_of(&needle),
            elements.iter().position(|value| *value == needle)
        );
    }
}

proptest! {
    /// reduce_right with a forcing combiner agrees with a right fold
    #[test]
    fn prop_reduce_right(elements in prop::collection::vec(-100_i64..100, 0..30)) {
        let array = LazyArray::from(elements.clone());
        let folded = array.reduce_right(
            |accumulator, element, index| accumulator.force() * 3 + element.get() - index as i64,
            7_i64,
        );
        let expected = elements
            .iter()
            .enumerate()
            .rev()
            .fold(7, |accumulator, (index, value)| accumulator * 3 + value - index as i64);
        prop_assert_eq!(folded, expected);
    }
}

// =============================================================================
// Memoization Laws
// =============================================================================

proptest! {
    /// Every mapped element is computed at most once across all views
    #[test]
    fn prop_views_compute_each_element_once(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        count in 0_usize..60
    ) {
        let calls = Rc::new(Cell::new(0_usize));
        let counter = Rc::clone(&calls);
        let mapped = LazyArray::from(elements.clone()).map(move |value, _| {
            counter.set(counter.get() + 1);
            value.wrapping_neg()
        });

        let prefix = mapped.take(count).to_vec();
        let everything = mapped.filter(|_, _| true).to_vec();
        let again = mapped.to_vec();

        prop_assert_eq!(prefix.len(), count.min(elements.len()));
        prop_assert_eq!(&everything, &again);
        prop_assert_eq!(calls.get(), elements.len());
    }
}

proptest! {
    /// len forces no head
    #[test]
    fn prop_len_forces_no_head(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let calls = Rc::new(Cell::new(0_usize));
        let counter = Rc::clone(&calls);
        let mapped = LazyArray::from(elements.clone()).map(move |value, _| {
            counter.set(counter.get() + 1);
            *value
        });

        prop_assert_eq!(mapped.len(), elements.len());
        prop_assert_eq!(calls.get(), 0);
    }
}
