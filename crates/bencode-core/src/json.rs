//! Bridge between bencode values and `serde_json::Value`.
//!
//! Bencode has no null, boolean or floating-point type, so only part of JSON
//! maps onto it. Going from JSON, anything outside that subset is rejected with
//! [`BencodeError::UnsupportedType`]. Going to JSON, byte strings become JSON
//! strings; bytes that are not valid UTF-8 are replaced with U+FFFD, so binary
//! payloads (e.g. torrent piece hashes) are display-only in JSON form.

use crate::decoder::decode_bytes;
use crate::encoder::{encode, sorted_entries};
use crate::error::{BencodeError, Result};
use crate::value::{Dictionary, Value};
use serde_json::{Map, Number, Value as Json};

/// Convert a bencode value to JSON. Dictionary keys come out in byte order.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Integer(n) => Json::Number(Number::from(*n)),
        Value::ByteString(bytes) => Json::String(String::from_utf8_lossy(bytes).into_owned()),
        Value::List(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Dictionary(map) => {
            let mut obj = Map::new();
            for (key, val) in sorted_entries(map) {
                obj.insert(String::from_utf8_lossy(key).into_owned(), to_json(val));
            }
            Json::Object(obj)
        }
    }
}

/// Convert JSON to a bencode value.
pub fn from_json(json: &Json) -> Result<Value> {
    match json {
        Json::Number(n) => n
            .as_i64()
            .map(Value::Integer)
            .ok_or_else(|| BencodeError::UnsupportedType(json.clone())),
        Json::String(s) => Ok(Value::ByteString(s.as_bytes().to_vec())),
        Json::Array(items) => items
            .iter()
            .map(from_json)
            .collect::<Result<Vec<_>>>()
            .map(Value::List),
        Json::Object(obj) => {
            let mut map = Dictionary::with_capacity(obj.len());
            for (key, val) in obj {
                map.insert(key.as_bytes().to_vec(), from_json(val)?);
            }
            Ok(Value::Dictionary(map))
        }
        Json::Null | Json::Bool(_) => Err(BencodeError::UnsupportedType(json.clone())),
    }
}

/// Parse a JSON string and encode it as bencode.
pub fn encode_json(json: &str) -> Result<Vec<u8>> {
    let parsed: Json = serde_json::from_str(json)?;
    encode(&from_json(&parsed)?)
}

/// Decode the first bencode element in `data` and render it as compact JSON.
///
/// Use `serde_json::to_string_pretty` on [`to_json`] for human-readable output.
pub fn decode_json(data: &[u8]) -> Result<String> {
    let value = decode_bytes(data)?;
    Ok(serde_json::to_string(&to_json(&value))?)
}
