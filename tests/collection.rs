use seqmap::testing::*;
use seqmap::{Collection, Key, collection};

#[test]
fn macro_builds_keyed_and_sequential_forms() {
    let keyed = collection! { "a" => 1, "b" => 2 };
    assert_entries_equal(&keyed, &[(Key::from("a"), 1), (Key::from("b"), 2)]);

    let listed = collection![10, 20, 30];
    assert_entries_equal(
        &listed,
        &[
            (Key::from(0), 10),
            (Key::from(1), 20),
            (Key::from(2), 30),
        ],
    );

    let empty: Collection<i32> = collection![];
    assert!(empty.is_empty());
}

#[test]
fn push_appends_after_largest_integer_key() {
    let mut items = collection! { 10 => "a", "name" => "b" };
    items.push("c");
    assert_keys_equal(
        &items,
        &[Key::from(10), Key::from("name"), Key::from(11)],
    );
}

#[test]
fn push_index_survives_removal_of_largest_key() {
    let mut items = collection![1, 2, 3];
    items.shift_remove(&Key::from(2));
    items.push(4);
    // The auto-append index never goes backwards.
    assert_keys_equal(&items, &[Key::from(0), Key::from(1), Key::from(3)]);
}

#[test]
fn insert_replaces_in_place() {
    let mut items = collection! { "a" => 1, "b" => 2, "c" => 3 };
    let old = items.insert("b", 20);
    assert_eq!(old, Some(2));
    assert_entries_equal(
        &items,
        &[
            (Key::from("a"), 1),
            (Key::from("b"), 20),
            (Key::from("c"), 3),
        ],
    );
}

#[test]
fn shift_remove_keeps_order_and_gaps() {
    let mut items = collection![1, 2, 3, 4];
    assert_eq!(items.shift_remove(&Key::from(1)), Some(2));
    assert_eq!(items.shift_remove(&Key::from(1)), None);
    assert_keys_equal(&items, &[Key::from(0), Key::from(2), Key::from(3)]);
    assert_values_equal(&items, &[1, 3, 4]);
}

#[test]
fn equality_is_order_sensitive() {
    let ab = collection! { "a" => 1, "b" => 2 };
    let ba = collection! { "b" => 2, "a" => 1 };
    assert_ne!(ab, ba);
    assert_eq!(ab, collection! { "a" => 1, "b" => 2 });
}

#[test]
fn collects_from_pairs_and_vecs() {
    let from_pairs: Collection<i32> = vec![("a", 1), ("b", 2)].into_iter().collect();
    assert_values_equal(&from_pairs, &[1, 2]);

    let from_vec = Collection::from(vec!["x", "y"]);
    assert_keys_equal(&from_vec, &[Key::from(0), Key::from(1)]);
}

#[test]
fn segment_parsing_distinguishes_canonical_integers() {
    assert_eq!(Key::from_segment("12"), Key::Index(12));
    assert_eq!(Key::from_segment("0"), Key::Index(0));
    assert_eq!(Key::from_segment("-4"), Key::Index(-4));
    assert_eq!(Key::from_segment("012"), Key::Name("012".into()));
    assert_eq!(Key::from_segment("-0"), Key::Name("-0".into()));
    assert_eq!(Key::from_segment("1.5"), Key::Name("1.5".into()));
    assert_eq!(Key::from_segment(""), Key::Name("".into()));
}

#[test]
fn serde_round_trip_preserves_order_and_key_shapes() -> anyhow::Result<()> {
    let items = collection! { "a" => 1, 0 => 2, "z" => 3 };
    let encoded = serde_json::to_string(&items)?;
    assert_eq!(encoded, r#"{"a":1,"0":2,"z":3}"#);

    let decoded: Collection<i32> = serde_json::from_str(&encoded)?;
    assert_eq!(decoded, items);

    // Integer keys come back as integers, and appends continue after them.
    let mut decoded = decoded;
    decoded.push(4);
    assert!(decoded.contains_key(&Key::from(1)));
    Ok(())
}
