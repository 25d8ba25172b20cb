//! Transformation helpers: `map`, `accept`, `reject`, `group_by`, `column`.

use crate::callback::Callback;
use crate::collection::Collection;
use crate::key::Key;
use crate::path::Node;

/// Apply the callback to every entry, keeping keys and replacing values.
///
/// # Example
///
/// ```
/// use seqmap::{by_value, collection, transform::map, Key};
///
/// let items = collection! { "a" => 2, "b" => 3 };
/// let doubled = map(&items, by_value(|v: &i32| v * 2));
///
/// assert_eq!(doubled.get(&Key::from("b")), Some(&6));
/// ```
pub fn map<V, C>(items: &Collection<V>, callback: C) -> Collection<C::Out>
where
    C: Callback<V>,
{
    let mut result = Collection::with_capacity(items.len());
    for (key, value) in items {
        result.insert(key.clone(), callback.call(key, value));
    }

    result
}

/// Keep only the entries the callback accepts, preserving keys.
pub fn accept<V, C>(items: &Collection<V>, callback: C) -> Collection<V>
where
    V: Clone,
    C: Callback<V, Out = bool>,
{
    let mut result = Collection::new();
    for (key, value) in items {
        if callback.call(key, value) {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}

/// Drop the entries the callback accepts, preserving keys—the complement of
/// [`accept`].
pub fn reject<V, C>(items: &Collection<V>, callback: C) -> Collection<V>
where
    V: Clone,
    C: Callback<V, Out = bool>,
{
    let mut result = Collection::new();
    for (key, value) in items {
        if !callback.call(key, value) {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}

/// Partition values into buckets named by the callback's output.
///
/// Buckets appear in first-seen order; within a bucket the values keep
/// their original relative order. Original keys are discarded.
///
/// # Example
///
/// ```
/// use seqmap::{by_value, collection, transform::group_by, Key};
///
/// let items = collection![1, 2, 3, 4, 5];
/// let groups = group_by(&items, by_value(|v: &i32| {
///     if v % 2 == 0 { "even" } else { "odd" }
/// }));
///
/// assert_eq!(groups.get(&Key::from("odd")), Some(&vec![1, 3, 5]));
/// assert_eq!(groups.get(&Key::from("even")), Some(&vec![2, 4]));
/// ```
pub fn group_by<V, C>(items: &Collection<V>, callback: C) -> Collection<Vec<V>>
where
    V: Clone,
    C: Callback<V>,
    C::Out: Into<Key>,
{
    let mut groups: Collection<Vec<V>> = Collection::new();
    for (key, value) in items {
        let bucket: Key = callback.call(key, value).into();
        match groups.get_mut(&bucket) {
            Some(members) => members.push(value.clone()),
            None => {
                groups.insert(bucket, vec![value.clone()]);
            }
        }
    }

    groups
}

/// Collect `record[field]` from every record that is a map containing
/// `field`.
///
/// Leaf records and records without the field are skipped silently. The
/// result is positional (keyed `0, 1, 2, ..`).
pub fn column<T>(records: &Collection<Node<T>>, field: &Key) -> Collection<Node<T>>
where
    T: Clone,
{
    let mut result = Collection::new();
    for record in records.values() {
        if let Node::Map(fields) = record {
            if let Some(value) = fields.get(field) {
                result.push(value.clone());
            }
        }
    }

    result
}
