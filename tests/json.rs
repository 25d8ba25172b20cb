#![cfg(feature = "json")]

use seqmap::json::{collection_from_value, from_value, to_value};
use seqmap::path::{Node, flatten, get_path, has_path, set_path};
use seqmap::testing::*;
use seqmap::{Key, by_value, collection, transform};
use serde_json::{Value, json};

#[test]
fn objects_become_name_keyed_maps() {
    let tree = collection_from_value(&json!({"a": 1, "b": {"c": true}})).unwrap();

    assert!(has_path(&tree, "a", "."));
    assert!(has_path(&tree, "b.c", "."));
    let c = get_path(&tree, "b.c", Node::leaf(json!(null)), ".");
    assert_eq!(c.as_leaf(), Some(&json!(true)));
}

#[test]
fn arrays_become_index_keyed_maps() {
    let tree = collection_from_value(&json!({"hosts": ["a", "b", "c"]})).unwrap();

    let second = get_path(&tree, "hosts.1", Node::leaf(json!(null)), ".");
    assert_eq!(second.as_leaf(), Some(&json!("b")));

    let hosts = get_path(&tree, "hosts", Node::leaf(json!(null)), ".");
    assert_keys_equal(
        hosts.as_map().unwrap(),
        &[Key::from(0), Key::from(1), Key::from(2)],
    );
}

#[test]
fn scalar_documents_have_no_root_collection() {
    assert!(collection_from_value(&json!(42)).is_none());
    assert!(collection_from_value(&json!("plain")).is_none());
    assert!(from_value(&json!(42)).is_leaf());
}

#[test]
fn integer_like_object_keys_become_indices() {
    let tree = collection_from_value(&json!({"0": "zero", "07": "padded"})).unwrap();
    assert!(tree.contains_key(&Key::from(0)));
    assert!(tree.contains_key(&Key::from("07")));
}

#[test]
fn to_value_round_trips_documents() {
    let doc = json!({
        "name": "cache",
        "limits": {"entries": 1024, "bytes": 65536},
        "tags": ["hot", "lru"],
    });

    let node = from_value(&doc);
    assert_eq!(to_value(&node), doc);
}

#[test]
fn to_value_renders_broken_sequences_as_objects() {
    let mut tree = collection_from_value(&json!(["a", "b", "c"])).unwrap();
    tree.shift_remove(&Key::from(0));

    // Keys 1, 2 no longer start at 0, so the result is an object.
    assert_eq!(to_value(&Node::Map(tree)), json!({"1": "b", "2": "c"}));
}

#[test]
fn json_trees_flow_through_the_other_families() -> anyhow::Result<()> {
    let mut tree =
        collection_from_value(&json!({"feature": {"flags": {"beta": true}}})).unwrap();
    set_path(&mut tree, "feature.flags.gamma", Node::leaf(json!(false)), ".")?;

    let flags = flatten(&tree, Some("."));
    assert_entries_equal(
        &flags,
        &[
            (Key::from("feature.flags.beta"), json!(true)),
            (Key::from("feature.flags.gamma"), json!(false)),
        ],
    );

    let enabled = transform::accept(
        &flags,
        by_value(|v: &Value| v.as_bool() == Some(true)),
    );
    assert_len(&enabled, 1);
    Ok(())
}
