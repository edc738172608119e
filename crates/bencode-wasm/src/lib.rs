//! WASM bindings for bencode-core.
//!
//! Exposes the JSON bridge as `#[wasm_bindgen]` functions callable from
//! JavaScript/TypeScript. Bencode output crosses the boundary as a
//! `Uint8Array`, since byte strings are not guaranteed to be valid UTF-8.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p bencode-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/bencode-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/bencode_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Encode a JSON string as bencode.
///
/// Throws a JS error if the input is not valid JSON or contains a value with
/// no bencode counterpart (null, booleans, non-integral numbers).
#[wasm_bindgen]
pub fn encode(json: &str) -> std::result::Result<Vec<u8>, JsValue> {
    bencode_core::encode_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode the first bencode element in `data` into compact JSON.
///
/// Throws a JS error if the input is not valid bencode.
#[wasm_bindgen]
pub fn decode(data: &[u8]) -> std::result::Result<String, JsValue> {
    bencode_core::decode_json(data).map_err(|e| JsValue::from_str(&e.to_string()))
}
