//! Typed decoding: decode one element, then check it has the shape the caller
//! expects.
//!
//! Most consumers know statically what they are reading ("the outermost
//! element is a dictionary"), so [`decode_as`] hands back a typed result and
//! reports a mismatch as [`BencodeError::CastFailure`] carrying both the actual
//! variant and the expected shape.
//!
//! ```
//! use bencode_core::{decode_as, SliceCursor};
//! let mut cursor = SliceCursor::new(b"li1ei2ei3ee");
//! let numbers: Vec<i64> = decode_as(&mut cursor).unwrap();
//! assert_eq!(numbers, [1, 2, 3]);
//! ```

use crate::cursor::ByteCursor;
use crate::decoder::decode;
use crate::error::{BencodeError, Result};
use crate::value::{Kind, Value};
use std::collections::HashMap;

/// Conversion from a decoded [`Value`] into a statically known shape.
pub trait FromValue: Sized {
    /// Human-readable name of the shape, reported in cast failures.
    const EXPECTED: &'static str;

    fn from_value(value: Value) -> Result<Self>;
}

/// Decode one element and convert it to `T`.
pub fn decode_as<T: FromValue, C: ByteCursor>(cursor: &mut C) -> Result<T> {
    T::from_value(decode(cursor)?)
}

fn cast_failure<T: FromValue>(actual: &Value) -> BencodeError {
    BencodeError::CastFailure {
        actual: actual.kind(),
        expected: T::EXPECTED,
    }
}

impl FromValue for Value {
    const EXPECTED: &'static str = "any value";

    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Integer(n) => Ok(n),
            other => Err(cast_failure::<Self>(&other)),
        }
    }
}

impl FromValue for Vec<u8> {
    const EXPECTED: &'static str = "byte string";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::ByteString(bytes) => Ok(bytes),
            other => Err(cast_failure::<Self>(&other)),
        }
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "UTF-8 byte string";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::ByteString(bytes) => String::from_utf8(bytes).map_err(|_| {
                BencodeError::CastFailure {
                    actual: Kind::ByteString,
                    expected: Self::EXPECTED,
                }
            }),
            other => Err(cast_failure::<Self>(&other)),
        }
    }
}

/// Lists convert element-wise; the first element that fails aborts the cast.
impl<T: FromValue> FromValue for Vec<T> {
    const EXPECTED: &'static str = "list";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(cast_failure::<Self>(&other)),
        }
    }
}

/// Dictionaries convert value-wise; keys stay raw bytes.
impl<T: FromValue> FromValue for HashMap<Vec<u8>, T> {
    const EXPECTED: &'static str = "dictionary";

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Dictionary(map) => map
                .into_iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
                .collect(),
            other => Err(cast_failure::<Self>(&other)),
        }
    }
}
