//! Assertion helpers for tests over collections.
//!
//! These compare a [`Collection`] against expected entries, values, or keys
//! and panic with a detailed message on mismatch. They are used by this
//! crate's own test suite and exported for downstream tests.

use crate::collection::Collection;
use crate::key::Key;
use std::fmt::Debug;

/// Assert that a collection holds exactly `expected` entries, in order.
///
/// # Panics
///
/// Panics if the entry sequences differ in length or content.
///
/// # Example
///
/// ```
/// use seqmap::testing::assert_entries_equal;
/// use seqmap::{collection, Key};
///
/// let items = collection! { "a" => 1, "b" => 2 };
/// assert_entries_equal(&items, &[(Key::from("a"), 1), (Key::from("b"), 2)]);
/// ```
pub fn assert_entries_equal<V: Debug + PartialEq>(actual: &Collection<V>, expected: &[(Key, V)]) {
    let actual_entries: Vec<(&Key, &V)> = actual.iter().collect();
    assert_eq!(
        actual_entries.len(),
        expected.len(),
        "Entry count mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual_entries:?}",
        expected.len(),
        actual_entries.len()
    );

    for (i, ((ak, av), (ek, ev))) in actual_entries.iter().zip(expected.iter()).enumerate() {
        assert!(
            *ak == ek && *av == ev,
            "Entry mismatch at position {i}:\n  Expected: ({ek:?}, {ev:?})\n  Actual: ({ak:?}, {av:?})"
        );
    }
}

/// Assert that a collection's values equal `expected`, in order, ignoring
/// keys.
///
/// # Panics
///
/// Panics if the value sequences differ.
pub fn assert_values_equal<V: Debug + PartialEq>(actual: &Collection<V>, expected: &[V]) {
    let actual_values: Vec<&V> = actual.values().collect();
    assert_eq!(
        actual_values.len(),
        expected.len(),
        "Value count mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual_values:?}",
        expected.len(),
        actual_values.len()
    );

    for (i, (a, e)) in actual_values.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            *a, e,
            "Value mismatch at position {i}:\n  Expected: {e:?}\n  Actual: {a:?}"
        );
    }
}

/// Assert that a collection's keys equal `expected`, in order.
///
/// # Panics
///
/// Panics if the key sequences differ.
pub fn assert_keys_equal<V>(actual: &Collection<V>, expected: &[Key]) {
    let actual_keys: Vec<&Key> = actual.keys().collect();
    assert_eq!(
        actual_keys.len(),
        expected.len(),
        "Key count mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual_keys:?}",
        expected.len(),
        actual_keys.len()
    );

    for (i, (a, e)) in actual_keys.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            *a, e,
            "Key mismatch at position {i}:\n  Expected: {e:?}\n  Actual: {a:?}"
        );
    }
}

/// Assert that a collection has the expected number of entries.
///
/// # Panics
///
/// Panics if the length doesn't match.
pub fn assert_len<V>(actual: &Collection<V>, expected: usize) {
    assert_eq!(
        actual.len(),
        expected,
        "Collection length mismatch:\n  Expected: {expected}\n  Actual: {}",
        actual.len()
    );
}
