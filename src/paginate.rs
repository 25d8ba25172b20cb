//! Pagination over ordered collections.

use crate::collection::Collection;
use crate::key::Key;

/// Return the entries for a 1-indexed `page` of size `per_page`.
///
/// The offset is `(page - 1) * per_page`, floored at zero, so page 0 and
/// page 1 coincide. Out-of-range pages yield an empty collection, never an
/// error. With `preserve_keys` false, integer keys are renumbered
/// sequentially from 0 in result order while string keys are kept.
///
/// # Example
///
/// ```
/// use seqmap::{collection, paginate::paginate};
///
/// let items = collection![1, 2, 3, 4, 5];
///
/// let page = paginate(&items, 2, 2, false);
/// assert_eq!(page, collection![3, 4]);
///
/// let past_end = paginate(&items, 5, 2, false);
/// assert!(past_end.is_empty());
/// ```
pub fn paginate<V: Clone>(
    items: &Collection<V>,
    page: usize,
    per_page: usize,
    preserve_keys: bool,
) -> Collection<V> {
    let offset = page.saturating_sub(1).saturating_mul(per_page);

    let mut result = Collection::new();
    for (key, value) in items.iter().skip(offset).take(per_page) {
        if !preserve_keys && matches!(key, Key::Index(_)) {
            result.push(value.clone());
        } else {
            result.insert(key.clone(), value.clone());
        }
    }

    result
}
