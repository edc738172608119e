//! The bencode value tree.
//!
//! Every decoded element and every encodable element is a [`Value`]. The type is
//! closed: the decoder's lead-byte dispatch and the encoder's variant dispatch
//! are both exhaustive matches over it.

use std::collections::HashMap;
use std::fmt;

/// Dictionary payload. Keys are the raw bytes of the key string.
///
/// A `HashMap` has no meaningful iteration order; the encoder sorts keys itself,
/// so two dictionaries with the same entries always encode identically.
pub type Dictionary = HashMap<Vec<u8>, Value>;

/// A bencode element. Trees only: each list or dictionary owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    /// Raw bytes; not guaranteed to be UTF-8.
    ByteString(Vec<u8>),
    List(Vec<Value>),
    Dictionary(Dictionary),
}

/// Variant tag of a [`Value`], used in cast diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer,
    ByteString,
    List,
    Dictionary,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Integer => "integer",
            Kind::ByteString => "byte string",
            Kind::List => "list",
            Kind::Dictionary => "dictionary",
        })
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::ByteString(_) => Kind::ByteString,
            Value::List(_) => Kind::List,
            Value::Dictionary(_) => Kind::Dictionary,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::ByteString(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The byte string as text, if it is one and is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(map) => Some(map),
            _ => None,
        }
    }

    /// Look up `key` if this is a dictionary.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict().and_then(|map| map.get(key.as_bytes()))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::ByteString(s.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::ByteString(s.into_bytes())
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::ByteString(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::ByteString(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Dictionary> for Value {
    fn from(map: Dictionary) -> Self {
        Value::Dictionary(map)
    }
}

impl<K: Into<Vec<u8>>> FromIterator<(K, Value)> for Value {
    /// Collects pairs into a dictionary. Later duplicates overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Dictionary(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
