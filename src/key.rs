//! Container keys: integer indices or string names.
//!
//! A [`Collection`](crate::Collection) maps keys to values while preserving
//! insertion order. Keys come in two shapes—a numeric [`Key::Index`] for
//! list-like data and a [`Key::Name`] for map-like data—and both can live in
//! the same collection.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A collection key: either an integer index or a string name.
///
/// # Example
///
/// ```
/// use seqmap::Key;
///
/// assert_eq!(Key::from(3).to_string(), "3");
/// assert_eq!(Key::from("score").to_string(), "score");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// A numeric index.
    Index(i64),
    /// A string name.
    Name(String),
}

impl Key {
    /// Parse a path segment into a key.
    ///
    /// A segment that spells a canonical decimal integer (an optional leading
    /// `-`, no leading zeros other than `"0"` itself) becomes [`Key::Index`];
    /// everything else becomes [`Key::Name`]. This is what lets
    /// [`expand`](crate::path::expand) restore integer keys that
    /// [`flatten`](crate::path::flatten) rendered into a joined path.
    ///
    /// ```
    /// use seqmap::Key;
    ///
    /// assert_eq!(Key::from_segment("5"), Key::Index(5));
    /// assert_eq!(Key::from_segment("-2"), Key::Index(-2));
    /// assert_eq!(Key::from_segment("007"), Key::Name("007".into()));
    /// assert_eq!(Key::from_segment("b"), Key::Name("b".into()));
    /// ```
    pub fn from_segment(segment: &str) -> Self {
        if Self::is_canonical_int(segment) {
            if let Ok(n) = segment.parse::<i64>() {
                return Key::Index(n);
            }
        }
        Key::Name(segment.to_string())
    }

    /// True for decimal spellings that round-trip through `i64` display.
    fn is_canonical_int(s: &str) -> bool {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        // "0" is canonical; "00", "07", and "-0" are not.
        if digits.len() > 1 && digits.starts_with('0') {
            return false;
        }
        !(s.starts_with('-') && digits == "0")
    }

    /// Return the index value if this is an integer key.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(n) => Some(*n),
            Key::Name(_) => None,
        }
    }

    /// Return the name if this is a string key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(s) => Some(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(n) => write!(f, "{n}"),
            Key::Name(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Index(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Index(n as i64)
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Index(n as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

// Keys serialize as their display form so collections survive formats whose
// map keys must be strings; deserialization re-applies segment parsing.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Key, E> {
                Ok(Key::from_segment(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Key, E> {
                Ok(Key::Index(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Key, E> {
                i64::try_from(v)
                    .map(Key::Index)
                    .map_err(|_| E::custom("integer key out of range"))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
