//! # Seqmap
//!
//! **Ordered key/value collection helpers** for Rust: predicate
//! aggregation, transformation, lookup, nested path access, and pagination
//! over a single insertion-ordered container type.
//!
//! ## Key Features
//!
//! - **One container** - [`Collection<V>`] maps integer or string [`Key`]s
//!   to values while preserving insertion order
//! - **Predicate aggregation** - `all`, `some`, `none`, `at_least`,
//!   `at_most`, `exactly`, all short-circuiting
//! - **Transformation** - `map`, `accept`, `reject`, `group_by`, `column`
//! - **Lookup & removal** - `first`, `head`, `has`, `only`, `except`,
//!   `remove`, `remove_key`, `pull`, `reindex`
//! - **Nested path access** - `get_path`, `set_path`, `unset_path`,
//!   `has_path`, plus `flatten`/`expand` between trees and flat maps
//! - **Pagination & reduction** - `paginate`, `sum_values`, `count_values`,
//!   `max_value`, `min_value`, and a typed [`pipe`](pipe::pipe) chain
//! - **Two callback modes** - every callback-driven helper accepts either a
//!   value-only or a key-and-value closure, chosen explicitly at the call
//!   site
//!
//! ## Quick Start
//!
//! ```
//! use seqmap::{by_value, collection, predicate, transform, Key};
//!
//! let ages = collection! { "ada" => 36, "grace" => 85, "linus" => 31 };
//!
//! // Aggregate with short-circuiting predicates.
//! assert!(predicate::all(&ages, by_value(|age: &i64| *age >= 18), true));
//! assert!(predicate::exactly(1, &ages, by_value(|age: &i64| *age > 50)));
//!
//! // Transform while keeping keys.
//! let next_year = transform::map(&ages, by_value(|age: &i64| age + 1));
//! assert_eq!(next_year.get(&Key::from("ada")), Some(&37));
//! ```
//!
//! ## Core Concepts
//!
//! ### Collection
//!
//! A [`Collection<V>`] is an insertion-ordered mapping from [`Key`] (an
//! integer index or a string name) to `V`. It plays both the "list" and the
//! "map" role: `push` appends under the next integer index, `insert` binds
//! any key. Removal never renumbers keys, so integer keys can be left with
//! gaps; [`lookup::reindex`] restores contiguous 0-based indices. The
//! [`collection!`] macro builds literals in either style.
//!
//! ### Callbacks and invocation modes
//!
//! Helpers never interpret caller logic—they call it. A callback is wrapped
//! in one of two adapters selecting its call shape:
//! [`by_value`](callback::by_value) for `Fn(&V) -> R`, or
//! [`by_key_value`](callback::by_key_value) for `Fn(&Key, &V) -> R`.
//! Predicates require `R = bool`, so only genuine booleans count as
//! matches. Errors raised inside a callback propagate unmodified.
//!
//! ### Nested trees and paths
//!
//! The path family works on [`Node<T>`](path::Node) trees: each node is a
//! leaf value or a map of child nodes. Paths are strings split on a
//! separator (conventionally `"."`); reads fall back to a caller default on
//! any missing step, writes auto-create missing intermediate maps, and a
//! write through an existing leaf is refused with
//! [`PathConflict`](path::PathConflict):
//!
//! ```
//! use seqmap::path::{get_path, has_path, set_path, Node};
//! use seqmap::Collection;
//!
//! let mut config: Collection<Node<i64>> = Collection::new();
//! set_path(&mut config, "db.pool.size", Node::leaf(16), ".").unwrap();
//!
//! assert!(has_path(&config, "db.pool", "."));
//! let size = get_path(&config, "db.pool.size", Node::leaf(0), ".");
//! assert_eq!(size.as_leaf(), Some(&16));
//! ```
//!
//! ### Flatten and expand
//!
//! [`path::flatten`] walks a tree depth-first and produces a single-level
//! collection—keyed by joined ancestor paths when a separator is given,
//! positional otherwise. [`path::expand`] is its inverse, re-parsing
//! delimited keys back into nesting.
//!
//! ## Error Handling
//!
//! Absent data is resolved through caller-supplied defaults, never an
//! error. Walks that hit a value of the wrong shape short-circuit to the
//! default or to `false`. The single library error is
//! [`PathConflict`](path::PathConflict), returned by `set_path`/`expand`
//! when a write would have to pass through an existing leaf.
//!
//! ## Feature Flags
//!
//! - `json` *(default)* - [`json`] module converting between
//!   `serde_json::Value` documents and [`Node`](path::Node) trees
//!
//! ## Module Overview
//!
//! - [`collection`] - the [`Collection`] container and [`collection!`]
//! - [`key`] - integer-or-string [`Key`]
//! - [`callback`] - callback trait and the two invocation-mode adapters
//! - [`predicate`] - boolean aggregation
//! - [`transform`] - key-preserving map/filter, grouping, column extraction
//! - [`lookup`] - lookup with defaults, key-set restriction, in-place
//!   removal
//! - [`path`] - nested trees, path reads/writes, flatten/expand
//! - [`aggregate`] - sum/count/argmax/argmin reductions
//! - [`paginate`] - page slicing
//! - [`pipe`] - typed value-threading chain
//! - [`testing`] - assertion helpers for collection-valued results

pub mod aggregate;
pub mod callback;
pub mod collection;
pub mod key;
pub mod lookup;
pub mod paginate;
pub mod path;
pub mod pipe;
pub mod predicate;
pub mod testing;
pub mod transform;

// Gated modules
#[cfg(feature = "json")]
pub mod json;

// General re-exports
pub use callback::{ByKeyValue, ByValue, Callback, by_key_value, by_value};
pub use collection::Collection;
pub use key::Key;
pub use path::{Node, PathConflict};
pub use pipe::Pipe;
