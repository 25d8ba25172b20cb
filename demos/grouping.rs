//! Grouping, filtering, and paginating a record set.
//!
//! Run with: cargo run --example grouping

use seqmap::aggregate::{max_value, sum_values};
use seqmap::paginate::paginate;
use seqmap::transform::{accept, group_by};
use seqmap::{Collection, by_value, collection};

#[derive(Debug, Clone, PartialEq)]
struct Order {
    customer: &'static str,
    region: &'static str,
    total_cents: i64,
}

fn order(customer: &'static str, region: &'static str, total_cents: i64) -> Order {
    Order {
        customer,
        region,
        total_cents,
    }
}

fn main() {
    let orders: Collection<Order> = collection![
        order("ada", "eu", 1250),
        order("bob", "us", 300),
        order("cyn", "eu", 8900),
        order("dee", "us", 4100),
        order("eli", "apac", 770),
        order("fay", "eu", 300),
    ];

    let big = accept(&orders, by_value(|o: &Order| o.total_cents >= 1000));
    println!("{} of {} orders are >= $10", big.len(), orders.len());

    let by_region = group_by(&orders, by_value(|o: &Order| o.region));
    for (region, members) in &by_region {
        let cents: i64 = members.iter().map(|o| o.total_cents).sum();
        println!("{region}: {} orders, {} cents", members.len(), cents);
    }

    let revenue = sum_values(&orders, by_value(|o: &Order| o.total_cents));
    let largest = max_value(&orders, by_value(|o: &Order| o.total_cents));
    println!("revenue: {revenue} cents, largest: {largest:?}");

    for page in 1..=3 {
        let chunk = paginate(&orders, page, 2, false);
        let customers: Vec<_> = chunk.values().map(|o| o.customer).collect();
        println!("page {page}: {customers:?}");
    }
}
