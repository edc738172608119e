//! Error types for bencode decoding, encoding and typed conversion.

use crate::value::{Kind, Value};
use thiserror::Error;

/// Errors that can occur while decoding, encoding or casting bencode values.
///
/// No variant is ever wrapped in another as it travels up the recursion: the
/// first failure hit by a production is the one the caller sees.
#[derive(Error, Debug)]
pub enum BencodeError {
    /// The byte source ran dry before the current element was complete.
    #[error("unexpected end of input")]
    EndOfInput,

    /// The lead byte of an element is not a digit, `i`, `l` or `d`.
    #[error("invalid element: unexpected byte 0x{0:02x}")]
    InvalidElement(u8),

    /// The length prefix of a byte string is not a valid decimal length.
    #[error("invalid byte string length: {0:?}")]
    LengthParseError(String),

    /// The integer literal passed validation but does not fit an `i64`.
    #[error("invalid integer literal: {0:?}")]
    IntegerParseError(String),

    /// The integer literal is exactly `-0`.
    #[error("-0 is not a valid integer")]
    MinusZeroInteger,

    /// The integer literal carries a leading zero. Holds the original literal.
    #[error("an integer with a leading 0 is not valid: {0:?}")]
    LeadingZeroInteger(String),

    /// A dictionary key decoded to something other than a byte string.
    #[error("a dictionary key must be a byte string, got {}", .0.kind())]
    NonStringKey(Box<Value>),

    /// The typed-decode adapter found a different shape than requested.
    #[error("cannot cast {actual} to {expected}")]
    CastFailure { actual: Kind, expected: &'static str },

    /// A JSON value with no bencode counterpart (null, bool, float, or an
    /// integer outside the `i64` range) was handed to the encoder.
    #[error("unsupported type for bencode: {0}")]
    UnsupportedType(serde_json::Value),

    /// Lists and dictionaries were nested deeper than the decoder allows.
    #[error("nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),

    /// The underlying reader or writer failed for a reason other than EOF.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input string was not valid JSON (JSON bridge only).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout bencode-core.
pub type Result<T> = std::result::Result<T, BencodeError>;
