use ordered_float::OrderedFloat;
use seqmap::aggregate::{count_values, max_value, min_value, sum_values};
use seqmap::{Collection, by_key_value, by_value, collection};

#[test]
fn sum_values_totals_the_projection() {
    let items = collection![1, 2, 3, 4];
    assert_eq!(sum_values(&items, by_value(|v: &i32| *v)), 10);
    assert_eq!(sum_values(&items, by_value(|v: &i32| v * 10)), 100);

    let empty: Collection<i32> = collection![];
    assert_eq!(sum_values(&empty, by_value(|v: &i32| *v)), 0);
}

#[test]
fn sum_values_can_project_keys() {
    let items = collection! { 1 => "a", 10 => "b", 100 => "c" };
    let key_total = sum_values(
        &items,
        by_key_value(|k, _: &&str| k.as_index().unwrap_or(0)),
    );
    assert_eq!(key_total, 111);
}

#[test]
fn count_values_counts_matches() {
    let items = collection![1, 2, 3, 4, 5];
    assert_eq!(count_values(&items, by_value(|v: &i32| v % 2 == 1)), 3);
    assert_eq!(count_values(&items, by_value(|_: &i32| false)), 0);
}

#[test]
fn max_and_min_return_the_element_not_the_projection() {
    let readings = collection![("probe-a", 12), ("probe-b", 31), ("probe-c", 4)];

    let hottest = max_value(&readings, by_value(|r: &(&str, i32)| r.1));
    assert_eq!(hottest, Some(("probe-b", 31)));

    let coldest = min_value(&readings, by_value(|r: &(&str, i32)| r.1));
    assert_eq!(coldest, Some(("probe-c", 4)));
}

#[test]
fn ties_keep_the_first_seen_element() {
    let readings = collection![("a", 3), ("b", 1), ("c", 3), ("d", 1)];

    assert_eq!(
        max_value(&readings, by_value(|r: &(&str, i32)| r.1)),
        Some(("a", 3))
    );
    assert_eq!(
        min_value(&readings, by_value(|r: &(&str, i32)| r.1)),
        Some(("b", 1))
    );
}

#[test]
fn empty_input_has_no_extremes() {
    let empty: Collection<i32> = collection![];
    assert_eq!(max_value(&empty, by_value(|v: &i32| *v)), None);
    assert_eq!(min_value(&empty, by_value(|v: &i32| *v)), None);
}

#[test]
fn float_projections_order_through_ordered_float() {
    let samples = collection![("x", 1.5_f64), ("y", -0.25), ("z", 7.75)];

    let max = max_value(&samples, by_value(|s: &(&str, f64)| OrderedFloat(s.1)));
    assert_eq!(max, Some(("z", 7.75)));

    let min = min_value(&samples, by_value(|s: &(&str, f64)| OrderedFloat(s.1)));
    assert_eq!(min, Some(("y", -0.25)));
}
