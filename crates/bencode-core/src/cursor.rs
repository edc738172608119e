//! Byte sources for the decoder.
//!
//! The decoder only ever needs two primitives: take the next byte, and give the
//! most recently taken byte back. Two sources are provided:
//!
//! - [`SliceCursor`]: index over an in-memory buffer
//! - [`ReaderCursor`]: wraps any [`io::Read`], remembering one byte for pushback

use crate::error::{BencodeError, Result};
use std::io;

/// Upper bound on the up-front allocation for a byte-string payload. A forged
/// length prefix must not be able to reserve gigabytes before any byte arrives.
const MAX_PREALLOC: usize = 0x1000;

/// A byte source with one byte of pushback.
pub trait ByteCursor {
    /// Return the next byte and advance, or `EndOfInput` when exhausted.
    fn next_byte(&mut self) -> Result<u8>;

    /// Return the most recently consumed byte to the front of the stream.
    ///
    /// Only one byte can be un-consumed at a time; calling this twice without
    /// an intervening `next_byte` has the same effect as calling it once.
    fn push_back(&mut self);

    /// Read exactly `len` bytes verbatim.
    fn read_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));
        for _ in 0..len {
            buf.push(self.next_byte()?);
        }
        Ok(buf)
    }
}

impl<C: ByteCursor + ?Sized> ByteCursor for &mut C {
    fn next_byte(&mut self) -> Result<u8> {
        (**self).next_byte()
    }

    fn push_back(&mut self) {
        (**self).push_back()
    }

    fn read_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        (**self).read_exact(len)
    }
}

/// Index-based cursor over an in-memory buffer.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a> {
    data: &'a [u8],
    pos: usize,
    can_push_back: bool,
}

impl<'a> SliceCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            can_push_back: false,
        }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }
}

impl ByteCursor for SliceCursor<'_> {
    fn next_byte(&mut self) -> Result<u8> {
        let b = *self.data.get(self.pos).ok_or(BencodeError::EndOfInput)?;
        self.pos += 1;
        self.can_push_back = true;
        Ok(b)
    }

    fn push_back(&mut self) {
        if self.can_push_back {
            self.pos -= 1;
            self.can_push_back = false;
        }
    }

    fn read_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        let end = self.pos.checked_add(len).ok_or(BencodeError::EndOfInput)?;
        let out = self
            .data
            .get(self.pos..end)
            .ok_or(BencodeError::EndOfInput)?;
        self.pos = end;
        self.can_push_back = false;
        Ok(out.to_vec())
    }
}

/// Streaming cursor over an [`io::Read`].
///
/// Reads one byte per call, so wrap unbuffered sources (files, sockets) in a
/// [`io::BufReader`] first.
#[derive(Debug)]
pub struct ReaderCursor<R> {
    inner: R,
    last: Option<u8>,
    pushed_back: bool,
}

impl<R: io::Read> ReaderCursor<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            last: None,
            pushed_back: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: io::Read> ByteCursor for ReaderCursor<R> {
    fn next_byte(&mut self) -> Result<u8> {
        if self.pushed_back {
            self.pushed_back = false;
            if let Some(b) = self.last {
                return Ok(b);
            }
        }

        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Err(BencodeError::EndOfInput),
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    return Err(BencodeError::EndOfInput)
                }
                Err(e) => return Err(BencodeError::Io(e)),
            }
        }
        self.last = Some(buf[0]);
        Ok(buf[0])
    }

    fn push_back(&mut self) {
        if self.last.is_some() {
            self.pushed_back = true;
        }
    }
}
