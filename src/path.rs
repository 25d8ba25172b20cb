//! Nested path access: `get_path`, `set_path`, `unset_path`, `has_path`,
//! `flatten`, `expand`.
//!
//! Nested data is modeled as a [`Node`] tree—each node is either a leaf
//! value or a map of child nodes—and addressed by delimiter-separated path
//! strings. Missing data short-circuits to the caller's default; the only
//! error the family can produce is a [`PathConflict`] when a write would
//! have to pass through an existing leaf.
//!
//! # Example
//!
//! ```
//! use seqmap::path::{get_path, set_path, Node};
//! use seqmap::Collection;
//!
//! let mut config: Collection<Node<i64>> = Collection::new();
//! set_path(&mut config, "server.port", Node::leaf(8080), ".").unwrap();
//!
//! let port = get_path(&config, "server.port", Node::leaf(0), ".");
//! assert_eq!(port.as_leaf(), Some(&8080));
//! ```

use crate::collection::Collection;
use crate::key::Key;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in a nested container: a leaf value or a map of child nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node<T> {
    /// A terminal value.
    Leaf(T),
    /// A nested ordered map of child nodes.
    Map(Collection<Node<T>>),
}

impl<T> Node<T> {
    /// Wrap a value as a leaf node.
    pub fn leaf(value: T) -> Self {
        Node::Leaf(value)
    }

    /// An empty map node.
    pub fn empty_map() -> Self {
        Node::Map(Collection::new())
    }

    /// True when this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// True when this node is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    /// The leaf value, if any.
    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Map(_) => None,
        }
    }

    /// The child map, if any.
    pub fn as_map(&self) -> Option<&Collection<Node<T>>> {
        match self {
            Node::Leaf(_) => None,
            Node::Map(children) => Some(children),
        }
    }

    /// The child map, mutably, if any.
    pub fn as_map_mut(&mut self) -> Option<&mut Collection<Node<T>>> {
        match self {
            Node::Leaf(_) => None,
            Node::Map(children) => Some(children),
        }
    }

    /// Unwrap into the child map, if any.
    pub fn into_map(self) -> Option<Collection<Node<T>>> {
        match self {
            Node::Leaf(_) => None,
            Node::Map(children) => Some(children),
        }
    }
}

/// A write tried to pass through an existing non-map value.
///
/// Raised by [`set_path`] (and therefore [`expand`]) instead of silently
/// overwriting the value in the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConflict {
    /// The full path being written.
    pub path: String,
    /// The segment where a leaf blocked the walk.
    pub segment: String,
}

impl PathConflict {
    fn new(path: &str, segment: &Key) -> Self {
        Self {
            path: path.to_string(),
            segment: segment.to_string(),
        }
    }
}

impl fmt::Display for PathConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "path `{}` hits a non-map value at segment `{}`",
            self.path, self.segment
        )
    }
}

impl std::error::Error for PathConflict {}

/// Split a path into segment keys.
///
/// Leading/trailing separator occurrences are trimmed first; an empty
/// separator disables splitting. `None` means the path was empty.
fn split_path(path: &str, separator: &str) -> Option<Vec<Key>> {
    if separator.is_empty() {
        if path.is_empty() {
            return None;
        }
        return Some(vec![Key::from_segment(path)]);
    }

    let mut trimmed = path;
    while let Some(rest) = trimmed.strip_prefix(separator) {
        trimmed = rest;
    }
    while let Some(rest) = trimmed.strip_suffix(separator) {
        trimmed = rest;
    }
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.split(separator).map(Key::from_segment).collect())
}

/// Walk `segments` from `items`, returning the node at the final segment.
fn walk<'a, T>(items: &'a Collection<Node<T>>, segments: &[Key]) -> Option<&'a Node<T>> {
    let (segment, rest) = segments.split_first()?;
    let node = items.get(segment)?;
    if rest.is_empty() {
        return Some(node);
    }
    match node {
        Node::Map(children) => walk(children, rest),
        Node::Leaf(_) => None,
    }
}

/// Read the node at `path`, or `default` when any step fails.
///
/// Every step but the last must land on a map containing the next segment;
/// an empty path also yields the default.
///
/// # Example
///
/// ```
/// use seqmap::path::{get_path, Node};
/// use seqmap::Collection;
///
/// let empty: Collection<Node<&str>> = Collection::new();
/// let fallback = get_path(&empty, "a.b.c", Node::leaf("X"), ".");
/// assert_eq!(fallback.as_leaf(), Some(&"X"));
/// ```
pub fn get_path<T: Clone>(
    items: &Collection<Node<T>>,
    path: &str,
    default: Node<T>,
    separator: &str,
) -> Node<T> {
    match split_path(path, separator) {
        Some(segments) => walk(items, &segments).cloned().unwrap_or(default),
        None => default,
    }
}

/// True iff the full path resolves. An empty path is always false.
pub fn has_path<T>(items: &Collection<Node<T>>, path: &str, separator: &str) -> bool {
    match split_path(path, separator) {
        Some(segments) => walk(items, &segments).is_some(),
        None => false,
    }
}

/// Write `value` at `path`, creating missing intermediate maps.
///
/// An empty path is a no-op. When an intermediate segment holds an existing
/// leaf, the write is refused with [`PathConflict`] rather than silently
/// replacing the value in the way.
pub fn set_path<T>(
    items: &mut Collection<Node<T>>,
    path: &str,
    value: Node<T>,
    separator: &str,
) -> Result<(), PathConflict> {
    let Some(segments) = split_path(path, separator) else {
        return Ok(());
    };
    let Some((last, parents)) = segments.split_last() else {
        return Ok(());
    };

    let mut current = items;
    for segment in parents {
        if !current.contains_key(segment) {
            current.insert(segment.clone(), Node::empty_map());
        }
        match current.get_mut(segment) {
            Some(Node::Map(children)) => current = children,
            _ => return Err(PathConflict::new(path, segment)),
        }
    }

    current.insert(last.clone(), value);
    Ok(())
}

/// Remove the binding at `path`.
///
/// A no-op when the path is empty, when any parent segment is missing, or
/// when a parent holds a leaf instead of a map.
pub fn unset_path<T>(items: &mut Collection<Node<T>>, path: &str, separator: &str) {
    let Some(segments) = split_path(path, separator) else {
        return;
    };
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = items;
    for segment in parents {
        match current.get_mut(segment) {
            Some(Node::Map(children)) => current = children,
            _ => return,
        }
    }

    current.shift_remove(last);
}

/// Flatten a node tree into a single-level collection of leaf values.
///
/// With `Some(separator)`, each leaf is keyed by its ancestor key chain
/// joined with the separator; with `None` (or an empty separator) leaves
/// are appended positionally in depth-first order. Empty map nodes
/// contribute nothing.
///
/// # Example
///
/// ```
/// use seqmap::path::{flatten, set_path, Node};
/// use seqmap::{Collection, Key};
///
/// let mut tree: Collection<Node<i32>> = Collection::new();
/// set_path(&mut tree, "a.b", Node::leaf(1), ".").unwrap();
/// set_path(&mut tree, "c", Node::leaf(2), ".").unwrap();
///
/// let flat = flatten(&tree, Some("."));
/// assert_eq!(flat.get(&Key::from("a.b")), Some(&1));
/// assert_eq!(flat.get(&Key::from("c")), Some(&2));
/// ```
pub fn flatten<T: Clone>(items: &Collection<Node<T>>, separator: Option<&str>) -> Collection<T> {
    let separator = separator.filter(|s| !s.is_empty());
    let mut result = Collection::new();
    let mut trail = Vec::new();
    flatten_into(items, separator, &mut trail, &mut result);
    result
}

fn flatten_into<T: Clone>(
    items: &Collection<Node<T>>,
    separator: Option<&str>,
    trail: &mut Vec<String>,
    out: &mut Collection<T>,
) {
    for (key, node) in items {
        trail.push(key.to_string());
        match node {
            Node::Leaf(value) => match separator {
                Some(sep) => {
                    out.insert(Key::from_segment(&trail.join(sep)), value.clone());
                }
                None => out.push(value.clone()),
            },
            Node::Map(children) => flatten_into(children, separator, trail, out),
        }
        trail.pop();
    }
}

/// Rebuild a nested tree from a flat collection of delimited paths.
///
/// Every top-level key's display form is treated as a path and written via
/// [`set_path`], so conflicting entries (a prefix of one path bound to a
/// leaf by another) surface as [`PathConflict`].
pub fn expand<T: Clone>(
    items: &Collection<T>,
    separator: &str,
) -> Result<Collection<Node<T>>, PathConflict> {
    let mut result = Collection::new();
    for (key, value) in items {
        set_path(&mut result, &key.to_string(), Node::Leaf(value.clone()), separator)?;
    }

    Ok(result)
}
