//! Lookup and in-place removal: `first`, `head`, `has`, `only`, `except`,
//! `remove`, `remove_key`, `pull`, `reindex`.
//!
//! Absent data is always resolved through a caller-supplied default, never
//! an error. The mutating functions take the collection by exclusive
//! reference and complete in one call frame.

use crate::callback::Callback;
use crate::collection::Collection;
use crate::key::Key;

/// Return the first value satisfying the callback, or `default`.
///
/// Scans in iteration order and stops at the first match.
pub fn first<V, C>(items: &Collection<V>, callback: C, default: V) -> V
where
    V: Clone,
    C: Callback<V, Out = bool>,
{
    for (key, value) in items {
        if callback.call(key, value) {
            return value.clone();
        }
    }

    default
}

/// Return the first value regardless of any predicate, or `default` when the
/// collection is empty.
pub fn head<V: Clone>(items: &Collection<V>, default: V) -> V {
    items.values().next().cloned().unwrap_or(default)
}

/// True iff every listed key exists in the collection.
pub fn has<V>(items: &Collection<V>, keys: &[Key]) -> bool {
    keys.iter().all(|key| items.contains_key(key))
}

/// Restrict to the listed keys, preserving original associations and order.
///
/// # Example
///
/// ```
/// use seqmap::{collection, lookup::only, Key};
///
/// let items = collection! { "a" => 1, "b" => 2, "c" => 3 };
/// let picked = only(&items, &[Key::from("c"), Key::from("a")]);
///
/// assert_eq!(picked, collection! { "a" => 1, "c" => 3 });
/// ```
pub fn only<V: Clone>(items: &Collection<V>, keys: &[Key]) -> Collection<V> {
    let mut result = Collection::new();
    for (key, value) in items {
        if keys.contains(key) {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}

/// Exclude the listed keys, preserving original associations and order.
pub fn except<V: Clone>(items: &Collection<V>, keys: &[Key]) -> Collection<V> {
    let mut result = Collection::new();
    for (key, value) in items {
        if !keys.contains(key) {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}

/// Remove every occurrence of each listed element, comparing by equality.
///
/// Keys are not renumbered, so integer keys may be left with gaps; call
/// [`reindex`] to close them. Returns the number of removed elements.
pub fn remove<V: PartialEq>(set: &mut Collection<V>, elements: &[V]) -> usize {
    let removed = 0;
    for element in elements {
        let matching: Vec<Key> = set
            .iter()
            .filter(|(_, value)| *value == element)
            .map(|(key, _)| key.clone())
            .collect();
        for key in matching {
            set.shift_remove(&key);
        }
    }

    removed
}

/// Remove entries by key, returning how many were actually present.
pub fn remove_key<V>(set: &mut Collection<V>, keys: &[Key]) -> usize {
    let mut removed = 0;
    for key in keys {
        if set.shift_remove(key).is_some() {
            removed += 1;
        }
    }

    removed
}

/// Take the value at `key` out of the collection.
///
/// Returns the removed value, or `default` when the key is absent (the
/// collection is left unchanged in that case).
///
/// # Example
///
/// ```
/// use seqmap::{collection, lookup::pull, Key};
///
/// let mut items = collection! { "a" => 10, "b" => 20 };
///
/// assert_eq!(pull(&mut items, &Key::from("a"), 0), 10);
/// assert_eq!(pull(&mut items, &Key::from("a"), 0), 0);
/// assert_eq!(items.len(), 1);
/// ```
pub fn pull<V>(set: &mut Collection<V>, key: &Key, default: V) -> V {
    set.shift_remove(key).unwrap_or(default)
}

/// Renumber all keys to contiguous 0-based indices in iteration order.
pub fn reindex<V>(items: &mut Collection<V>) {
    let drained = std::mem::take(items);
    for (_, value) in drained {
        items.push(value);
    }
}
