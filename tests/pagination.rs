use seqmap::paginate::paginate;
use seqmap::pipe::pipe;
use seqmap::testing::*;
use seqmap::{Key, collection};

#[test]
fn pages_are_one_indexed() {
    let items = collection![1, 2, 3, 4, 5];

    assert_values_equal(&paginate(&items, 1, 2, false), &[1, 2]);
    assert_values_equal(&paginate(&items, 2, 2, false), &[3, 4]);
    assert_values_equal(&paginate(&items, 3, 2, false), &[5]);
}

#[test]
fn page_zero_clamps_to_the_first_page() {
    let items = collection![1, 2, 3];
    assert_values_equal(&paginate(&items, 0, 2, false), &[1, 2]);
}

#[test]
fn out_of_range_pages_are_empty_not_errors() {
    let items = collection![1, 2, 3];
    assert!(paginate(&items, 5, 2, false).is_empty());
    assert!(paginate(&items, 2, 0, false).is_empty());
}

#[test]
fn preserve_keys_keeps_original_integer_keys() {
    let items = collection![10, 20, 30, 40];
    let page = paginate(&items, 2, 2, true);
    assert_entries_equal(&page, &[(Key::from(2), 30), (Key::from(3), 40)]);
}

#[test]
fn renumbering_touches_integer_keys_but_not_names() {
    let items = collection! { 0 => "a", "x" => "b", 5 => "c", 9 => "d" };

    let page = paginate(&items, 1, 3, false);
    assert_entries_equal(
        &page,
        &[
            (Key::from(0), "a"),
            (Key::from("x"), "b"),
            (Key::from(1), "c"),
        ],
    );
}

#[test]
fn pipe_threads_the_payload_through_each_stage() {
    let result = pipe(3).then(|x| x + 1).then(|x| x * 2).finish();
    assert_eq!(result, 8);
}

#[test]
fn pipe_stages_may_change_the_payload_type() {
    let label = pipe(21)
        .then(|n| n * 2)
        .then(|n| format!("answer={n}"))
        .finish();
    assert_eq!(label, "answer=42");
}

#[test]
fn pipe_with_no_stages_returns_the_payload() {
    assert_eq!(pipe("untouched").finish(), "untouched");
}
