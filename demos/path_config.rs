//! Nested configuration handling with the path family.
//!
//! Loads a JSON config document into a node tree, reads settings with
//! defaults, applies overrides from flat `key.path=value` pairs, and prints
//! the flattened result.
//!
//! Run with: cargo run --example path_config

use anyhow::Result;
use seqmap::json::{collection_from_value, to_value};
use seqmap::path::{Node, flatten, get_path, set_path, unset_path};
use serde_json::json;

fn main() -> Result<()> {
    let document = json!({
        "server": {
            "host": "127.0.0.1",
            "port": 8080,
            "tls": {"enabled": false}
        },
        "log": {"level": "info"}
    });

    let mut config = collection_from_value(&document).expect("document is an object");

    // Reads fall back to a default instead of failing.
    let port = get_path(&config, "server.port", Node::leaf(json!(3000)), ".");
    let workers = get_path(&config, "server.workers", Node::leaf(json!(4)), ".");
    println!("port = {}, workers = {}", to_value(&port), to_value(&workers));

    // Overrides arrive as flat delimited paths; intermediate maps are
    // created on demand.
    let overrides = [
        ("server.tls.enabled", json!(true)),
        ("server.tls.cert", json!("/etc/ssl/demo.pem")),
        ("log.level", json!("debug")),
    ];
    for (path, value) in overrides {
        set_path(&mut config, path, Node::leaf(value), ".")?;
    }

    // Writing through an existing scalar is refused, not silently applied.
    let conflict = set_path(&mut config, "log.level.color", Node::leaf(json!(true)), ".");
    println!("conflicting override: {}", conflict.unwrap_err());

    unset_path(&mut config, "server.host", ".");

    println!("\neffective settings:");
    for (path, value) in &flatten(&config, Some(".")) {
        println!("  {path} = {value}");
    }

    Ok(())
}
