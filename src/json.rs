//! Conversions between [`serde_json::Value`] trees and [`Node`] trees.
//!
//! JSON objects become name-keyed map nodes, JSON arrays become index-keyed
//! map nodes, and scalars become leaves holding the bare
//! [`serde_json::Value`]. Useful for feeding the path family from parsed
//! JSON documents (and for building nested fixtures with the `json!`
//! macro).
//!
//! # Example
//!
//! ```
//! use seqmap::json::{collection_from_value, to_value};
//! use seqmap::path::{get_path, Node};
//! use serde_json::json;
//!
//! let doc = json!({"server": {"hosts": ["a", "b"], "port": 8080}});
//! let tree = collection_from_value(&doc).unwrap();
//!
//! let port = get_path(&tree, "server.port", Node::leaf(json!(null)), ".");
//! assert_eq!(port.as_leaf(), Some(&json!(8080)));
//!
//! let host = get_path(&tree, "server.hosts.1", Node::leaf(json!(null)), ".");
//! assert_eq!(host.as_leaf(), Some(&json!("b")));
//! ```

use crate::collection::Collection;
use crate::key::Key;
use crate::path::Node;
use serde_json::Value;

/// Convert a JSON value into a node tree.
///
/// Object keys go through [`Key::from_segment`], so `"0"` becomes an
/// integer key; array elements are keyed by their position.
pub fn from_value(value: &Value) -> Node<Value> {
    match value {
        Value::Object(fields) => {
            let mut children = Collection::with_capacity(fields.len());
            for (name, field) in fields {
                children.insert(Key::from_segment(name), from_value(field));
            }
            Node::Map(children)
        }
        Value::Array(elements) => {
            let mut children = Collection::with_capacity(elements.len());
            for element in elements {
                children.push(from_value(element));
            }
            Node::Map(children)
        }
        scalar => Node::Leaf(scalar.clone()),
    }
}

/// Convert a JSON object or array into a root collection.
///
/// Returns `None` for scalar documents, which have no entries to address.
pub fn collection_from_value(value: &Value) -> Option<Collection<Node<Value>>> {
    from_value(value).into_map()
}

/// Convert a node tree back into a JSON value.
///
/// A map node whose keys are exactly `0..n` renders as a JSON array (an
/// empty map also renders as an array); any other map renders as an object
/// with stringified keys.
pub fn to_value(node: &Node<Value>) -> Value {
    match node {
        Node::Leaf(value) => value.clone(),
        Node::Map(children) => {
            if is_sequential(children) {
                Value::Array(children.values().map(to_value).collect())
            } else {
                Value::Object(
                    children
                        .iter()
                        .map(|(key, child)| (key.to_string(), to_value(child)))
                        .collect(),
                )
            }
        }
    }
}

fn is_sequential<T>(children: &Collection<Node<T>>) -> bool {
    children
        .keys()
        .enumerate()
        .all(|(position, key)| key.as_index() == Some(position as i64))
}
