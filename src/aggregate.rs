//! Numeric reduction: `sum_values`, `count_values`, `max_value`,
//! `min_value`.

use crate::callback::Callback;
use crate::collection::Collection;
use std::ops::Add;

/// Sum the callback's output over every entry.
///
/// # Example
///
/// ```
/// use seqmap::{aggregate::sum_values, by_value, collection};
///
/// let items = collection![1, 2, 3, 4];
/// assert_eq!(sum_values(&items, by_value(|v: &i64| v * 10)), 100);
/// ```
pub fn sum_values<V, C>(items: &Collection<V>, callback: C) -> C::Out
where
    C: Callback<V>,
    C::Out: Add<Output = C::Out> + Default,
{
    let mut sum = C::Out::default();
    for (key, value) in items {
        sum = sum + callback.call(key, value);
    }

    sum
}

/// Count the entries satisfying the callback.
pub fn count_values<V, C>(items: &Collection<V>, callback: C) -> usize
where
    C: Callback<V, Out = bool>,
{
    let mut count = 0;
    for (key, value) in items {
        if callback.call(key, value) {
            count += 1;
        }
    }

    count
}

/// Return the element whose callback output is greatest.
///
/// The element itself is returned, not the projection. Ties keep the
/// first-seen element; an empty collection yields `None`.
pub fn max_value<V, C>(items: &Collection<V>, callback: C) -> Option<V>
where
    V: Clone,
    C: Callback<V>,
    C::Out: Ord,
{
    let mut best: Option<(C::Out, &V)> = None;
    for (key, value) in items {
        let projected = callback.call(key, value);
        match &best {
            Some((current, _)) if projected <= *current => {}
            _ => best = Some((projected, value)),
        }
    }

    best.map(|(_, value)| value.clone())
}

/// Return the element whose callback output is smallest.
///
/// Ties keep the first-seen element; an empty collection yields `None`.
pub fn min_value<V, C>(items: &Collection<V>, callback: C) -> Option<V>
where
    V: Clone,
    C: Callback<V>,
    C::Out: Ord,
{
    let mut best: Option<(C::Out, &V)> = None;
    for (key, value) in items {
        let projected = callback.call(key, value);
        match &best {
            Some((current, _)) if projected >= *current => {}
            _ => best = Some((projected, value)),
        }
    }

    best.map(|(_, value)| value.clone())
}
