//! # bencode-core
//!
//! Pure-Rust decoder and canonical encoder for **bencode**, the length-prefixed
//! serialization format used by BitTorrent metainfo files and tracker responses.
//!
//! Four kinds of element exist: integers (`i42e`), byte strings (`4:spam`),
//! lists (`l...e`) and dictionaries with byte-string keys (`d...e`). Decoding
//! materializes one complete [`Value`] tree per call; encoding always emits
//! dictionary keys in ascending byte order, so the output is deterministic.
//!
//! ## Quick start
//!
//! ```rust
//! use bencode_core::{decode_bytes, encode, Value};
//!
//! let value = decode_bytes(b"d4:spam4:eggs3:cow3:mooe").unwrap();
//! assert_eq!(value.get("cow").and_then(Value::as_str), Some("moo"));
//!
//! // Re-encoding sorts the keys
//! assert_eq!(encode(&value).unwrap(), b"d3:cow3:moo4:spam4:eggse");
//! ```
//!
//! ## Modules
//!
//! - [`cursor`]: byte sources with one byte of pushback
//! - [`decoder`]: bytes → [`Value`]
//! - [`encoder`]: [`Value`] → canonical bytes
//! - [`typed`]: decode straight into an expected shape
//! - [`json`]: conversion to and from `serde_json::Value`
//! - [`error`]: error taxonomy shared by all of the above
//! - [`value`]: the value tree

pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod json;
pub mod typed;
pub mod value;

pub use cursor::{ByteCursor, ReaderCursor, SliceCursor};
pub use decoder::{decode, decode_bytes, DecodeOptions, Decoder};
pub use encoder::{encode, encode_to};
pub use error::{BencodeError, Result};
pub use json::{decode_json, encode_json, from_json, to_json};
pub use typed::{decode_as, FromValue};
pub use value::{Dictionary, Kind, Value};
