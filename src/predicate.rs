//! Predicate aggregation: `all`, `some`, `none`, `at_least`, `at_most`,
//! `exactly`.
//!
//! Each function evaluates a boolean [`Callback`] against every entry and
//! aggregates the results, short-circuiting as soon as the outcome is
//! decided.

use crate::callback::Callback;
use crate::collection::Collection;

/// True iff every entry satisfies the callback.
///
/// An empty collection yields `empty_is_valid` rather than vacuous truth or
/// falsity being hard-coded.
///
/// # Example
///
/// ```
/// use seqmap::{by_value, collection, predicate::all, Collection};
///
/// let items = collection![2, 4, 6];
/// assert!(all(&items, by_value(|v: &i32| v % 2 == 0), true));
///
/// let empty: Collection<i32> = collection![];
/// assert!(all(&empty, by_value(|v: &i32| v % 2 == 0), true));
/// assert!(!all(&empty, by_value(|v: &i32| v % 2 == 0), false));
/// ```
pub fn all<V, C>(items: &Collection<V>, callback: C, empty_is_valid: bool) -> bool
where
    C: Callback<V, Out = bool>,
{
    let mut count = 0usize;
    for (key, value) in items {
        count += 1;
        if !callback.call(key, value) {
            return false;
        }
    }

    empty_is_valid || count > 0
}

/// True iff at least one entry satisfies the callback.
pub fn some<V, C>(items: &Collection<V>, callback: C) -> bool
where
    C: Callback<V, Out = bool>,
{
    at_least(1, items, callback)
}

/// True iff no entry satisfies the callback.
pub fn none<V, C>(items: &Collection<V>, callback: C) -> bool
where
    C: Callback<V, Out = bool>,
{
    !some(items, callback)
}

/// True iff at least `n` entries satisfy the callback.
///
/// Returns as soon as the count reaches `n`.
pub fn at_least<V, C>(n: usize, items: &Collection<V>, callback: C) -> bool
where
    C: Callback<V, Out = bool>,
{
    let mut count = 0usize;
    for (key, value) in items {
        if callback.call(key, value) {
            count += 1;
            if count >= n {
                return true;
            }
        }
    }

    count >= n
}

/// True iff at most `n` entries satisfy the callback.
///
/// Returns false the moment the count exceeds `n`.
pub fn at_most<V, C>(n: usize, items: &Collection<V>, callback: C) -> bool
where
    C: Callback<V, Out = bool>,
{
    let mut count = 0usize;
    for (key, value) in items {
        if callback.call(key, value) {
            count += 1;
            if count > n {
                return false;
            }
        }
    }

    count <= n
}

/// True iff exactly `n` entries satisfy the callback.
///
/// Returns false the moment the count exceeds `n`; otherwise the whole
/// collection is scanned and the final count compared.
pub fn exactly<V, C>(n: usize, items: &Collection<V>, callback: C) -> bool
where
    C: Callback<V, Out = bool>,
{
    let mut count = 0usize;
    for (key, value) in items {
        if callback.call(key, value) {
            count += 1;
            if count > n {
                return false;
            }
        }
    }

    count == n
}
