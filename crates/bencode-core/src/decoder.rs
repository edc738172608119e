//! Bencode decoder: recursive descent from a byte cursor to a [`Value`] tree.
//!
//! One call decodes exactly one element. Dispatch is on the lead byte:
//!
//! - ASCII digit → byte string `<len>:<bytes>` (the digit is pushed back first)
//! - `i` → integer `i<literal>e`
//! - `l` → list `l<elements>e`
//! - `d` → dictionary `d<key><value>...e`
//!
//! The decoder is lenient in one respect: dictionary keys are not required to
//! arrive in sorted order, and a repeated key silently replaces the earlier one.
//! Bytes following the element are left in the cursor; callers that want to
//! reject trailing data check the cursor themselves.
//!
//! # Example
//! ```
//! use bencode_core::{decode_bytes, Value};
//! let value = decode_bytes(b"l4:spam4:eggse").unwrap();
//! assert_eq!(value, Value::List(vec!["spam".into(), "eggs".into()]));
//! ```

use crate::cursor::{ByteCursor, SliceCursor};
use crate::error::{BencodeError, Result};
use crate::value::{Dictionary, Value};

/// Default maximum nesting of lists and dictionaries.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Decoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest allowed nesting of lists/dictionaries. The top-level container
    /// counts as depth 1.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decode one element from `cursor` with default options.
pub fn decode<C: ByteCursor>(cursor: &mut C) -> Result<Value> {
    Decoder::new(cursor).decode_next()
}

/// Decode one element from the start of `data`. Trailing bytes are ignored.
pub fn decode_bytes(data: &[u8]) -> Result<Value> {
    decode(&mut SliceCursor::new(data))
}

/// A decoder bound to one cursor.
///
/// The cursor is owned for the decoder's lifetime; pass `&mut cursor` to keep
/// access to it afterwards (e.g. to inspect the unread remainder).
#[derive(Debug)]
pub struct Decoder<C> {
    cursor: C,
    options: DecodeOptions,
    depth: usize,
}

impl<C: ByteCursor> Decoder<C> {
    pub fn new(cursor: C) -> Self {
        Self::with_options(cursor, DecodeOptions::default())
    }

    pub fn with_options(cursor: C, options: DecodeOptions) -> Self {
        Self {
            cursor,
            options,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }

    /// Read one lead byte and dispatch to the matching production.
    pub fn decode_next(&mut self) -> Result<Value> {
        let b = self.cursor.next_byte()?;
        match b {
            b'0'..=b'9' => {
                self.cursor.push_back();
                self.decode_byte_string().map(Value::ByteString)
            }
            b'i' => self.decode_integer().map(Value::Integer),
            b'l' => self.nested(Self::decode_list).map(Value::List),
            b'd' => self.nested(Self::decode_dictionary).map(Value::Dictionary),
            other => Err(BencodeError::InvalidElement(other)),
        }
    }

    /// Run a container production one level deeper, enforcing the depth limit.
    fn nested<T>(&mut self, production: fn(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.options.max_depth {
            return Err(BencodeError::DepthLimitExceeded(self.options.max_depth));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// `<len>:<bytes>`: the length field is parsed as-is, leading zeros included.
    fn decode_byte_string(&mut self) -> Result<Vec<u8>> {
        let raw_len = self.read_until(b':')?;
        let len = std::str::from_utf8(&raw_len)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| {
                BencodeError::LengthParseError(String::from_utf8_lossy(&raw_len).into_owned())
            })?;
        self.cursor.read_exact(len)
    }

    /// `i<literal>e`: rejects `-0` and leading zeros before parsing.
    fn decode_integer(&mut self) -> Result<i64> {
        let raw = self.read_until(b'e')?;
        let literal = match String::from_utf8(raw) {
            Ok(s) => s,
            Err(e) => {
                let lossy = String::from_utf8_lossy(e.as_bytes()).into_owned();
                return Err(BencodeError::IntegerParseError(lossy));
            }
        };

        if literal == "-0" {
            return Err(BencodeError::MinusZeroInteger);
        }
        // Every '-' is stripped, not only a leading one: "-03" and "0-3" are
        // both caught here rather than by the parser.
        let unsigned = literal.replace('-', "");
        if !unsigned.is_empty() && literal.len() > 1 && unsigned.starts_with('0') {
            return Err(BencodeError::LeadingZeroInteger(literal));
        }

        literal
            .parse::<i64>()
            .map_err(|_| BencodeError::IntegerParseError(literal))
    }

    fn decode_list(&mut self) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        while !self.at_end_marker()? {
            items.push(self.decode_next()?);
        }
        Ok(items)
    }

    fn decode_dictionary(&mut self) -> Result<Dictionary> {
        let mut map = Dictionary::new();
        while !self.at_end_marker()? {
            let key = match self.decode_next()? {
                Value::ByteString(key) => key,
                other => return Err(BencodeError::NonStringKey(Box::new(other))),
            };
            let value = self.decode_next()?;
            map.insert(key, value);
        }
        Ok(map)
    }

    /// Consume the next byte if it is the `e` terminator; otherwise push it back.
    fn at_end_marker(&mut self) -> Result<bool> {
        if self.cursor.next_byte()? == b'e' {
            return Ok(true);
        }
        self.cursor.push_back();
        Ok(false)
    }

    /// Collect bytes up to (not including) `delimiter`, consuming the delimiter.
    fn read_until(&mut self, delimiter: u8) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        loop {
            let b = self.cursor.next_byte()?;
            if b == delimiter {
                return Ok(buf);
            }
            buf.push(b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_limit_counts_containers_only() {
        let opts = DecodeOptions { max_depth: 2 };
        let mut ok = SliceCursor::new(b"lli1eee");
        assert!(Decoder::with_options(&mut ok, opts).decode_next().is_ok());

        let mut deep = SliceCursor::new(b"llli1eeee");
        let err = Decoder::with_options(&mut deep, opts)
            .decode_next()
            .unwrap_err();
        assert!(matches!(err, BencodeError::DepthLimitExceeded(2)));
    }

    #[test]
    fn depth_resets_between_siblings() {
        let opts = DecodeOptions { max_depth: 2 };
        let mut c = SliceCursor::new(b"llelelee");
        let value = Decoder::with_options(&mut c, opts).decode_next().unwrap();
        assert_eq!(value.as_list().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn decoder_leaves_trailing_bytes_unread() {
        let mut c = SliceCursor::new(b"i1ei2e");
        let mut decoder = Decoder::new(&mut c);
        assert_eq!(decoder.decode_next().unwrap(), Value::Integer(1));
        assert_eq!(decoder.decode_next().unwrap(), Value::Integer(2));
        assert!(c.is_empty());
    }

    #[test]
    fn default_depth_rejects_hostile_nesting() {
        let mut input = vec![b'l'; DEFAULT_MAX_DEPTH + 1];
        input.extend(std::iter::repeat(b'e').take(DEFAULT_MAX_DEPTH + 1));
        assert!(matches!(
            decode_bytes(&input),
            Err(BencodeError::DepthLimitExceeded(DEFAULT_MAX_DEPTH))
        ));
    }
}
