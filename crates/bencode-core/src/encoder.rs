//! Bencode encoder: serializes a [`Value`] tree into canonical bytes.
//!
//! - **Integers**: `i<decimal>e`
//! - **Byte strings**: `<len>:<bytes>`; an empty byte string emits nothing at all
//! - **Lists**: `l<items>e`, items in their original order
//! - **Dictionaries**: `d<key><value>...e`, keys in ascending unsigned byte order
//!
//! Because dictionary keys are sorted here rather than relying on the map's
//! iteration order, equal values always produce identical output.
//!
//! The empty byte string case is not canonical bencode (`0:` would be), and
//! its output does not decode back: an empty input yields `EndOfInput`.
//!
//! # Example
//! ```
//! use bencode_core::{encode, Value};
//! let value: Value = [("spam", Value::from("eggs")), ("cow", Value::from("moo"))]
//!     .into_iter()
//!     .collect();
//! assert_eq!(encode(&value).unwrap(), b"d3:cow3:moo4:spam4:eggse");
//! ```

use crate::error::Result;
use crate::value::{Dictionary, Value};
use std::io::Write;

/// Encode `value` into a new buffer.
///
/// On error nothing is returned; partial output is discarded with the buffer.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_to(value, &mut out)?;
    Ok(out)
}

/// Encode `value` directly into `writer`.
///
/// A failing writer aborts the encode with [`BencodeError::Io`]; whatever was
/// already written stays written.
///
/// [`BencodeError::Io`]: crate::BencodeError::Io
pub fn encode_to<W: Write + ?Sized>(value: &Value, writer: &mut W) -> Result<()> {
    match value {
        Value::Integer(n) => encode_integer(*n, writer),
        Value::ByteString(bytes) => encode_byte_string(bytes, writer),
        Value::List(items) => encode_list(items, writer),
        Value::Dictionary(map) => encode_dictionary(map, writer),
    }
}

fn encode_integer<W: Write + ?Sized>(n: i64, writer: &mut W) -> Result<()> {
    write!(writer, "i{}e", n)?;
    Ok(())
}

fn encode_byte_string<W: Write + ?Sized>(bytes: &[u8], writer: &mut W) -> Result<()> {
    if bytes.is_empty() {
        return Ok(());
    }
    write!(writer, "{}:", bytes.len())?;
    writer.write_all(bytes)?;
    Ok(())
}

fn encode_list<W: Write + ?Sized>(items: &[Value], writer: &mut W) -> Result<()> {
    writer.write_all(b"l")?;
    for item in items {
        encode_to(item, writer)?;
    }
    writer.write_all(b"e")?;
    Ok(())
}

fn encode_dictionary<W: Write + ?Sized>(map: &Dictionary, writer: &mut W) -> Result<()> {
    writer.write_all(b"d")?;
    for (key, value) in sorted_entries(map) {
        encode_byte_string(key, writer)?;
        encode_to(value, writer)?;
    }
    writer.write_all(b"e")?;
    Ok(())
}

/// Dictionary entries ordered by raw key bytes (`[u8]` compares unsigned,
/// lexicographically, shorter prefix first).
pub(crate) fn sorted_entries(map: &Dictionary) -> Vec<(&[u8], &Value)> {
    let mut entries: Vec<(&[u8], &Value)> = map.iter().map(|(k, v)| (k.as_slice(), v)).collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}
