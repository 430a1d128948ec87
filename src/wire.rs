// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Read and write length-prefixed chunks for both codec directions.
// Author: Lukas Bower

//! Length-prefixed chunk framing shared by the encoder and decoder.
//!
//! A chunk is an 8-byte little-endian signed length followed by that many
//! content bytes. Exhaustion (fewer than eight bytes left in a buffer) is a
//! clean terminal signal surfaced as `None`, never an error: variable-length
//! collections use it to stop, while fixed-count callers convert it to
//! [`CodecError::Truncated`] via [`Chunks::next_required`].

use crate::CodecError;

/// Width of the signed little-endian length prefix in bytes.
pub const LEN_PREFIX: usize = 8;

/// Reserve space for a chunk's length prefix and return the patch offset.
pub fn begin_chunk(out: &mut Vec<u8>) -> usize {
    let start = out.len();
    out.extend_from_slice(&[0u8; LEN_PREFIX]);
    start
}

/// Back-patch the length prefix reserved by [`begin_chunk`] once the
/// chunk's content has been appended after it.
pub fn finish_chunk(out: &mut Vec<u8>, start: usize) -> Result<(), CodecError> {
    let content_len = out.len() - start - LEN_PREFIX;
    let declared =
        i64::try_from(content_len).map_err(|_| CodecError::LengthOverflow(content_len))?;
    out[start..start + LEN_PREFIX].copy_from_slice(&declared.to_le_bytes());
    Ok(())
}

/// Append a ready payload as one framed chunk.
pub fn put_chunk(out: &mut Vec<u8>, content: &[u8]) -> Result<(), CodecError> {
    let declared =
        i64::try_from(content.len()).map_err(|_| CodecError::LengthOverflow(content.len()))?;
    out.extend_from_slice(&declared.to_le_bytes());
    out.extend_from_slice(content);
    Ok(())
}

/// Read one chunk from the front of `buf`, returning its content and the
/// unread remainder.
///
/// Returns `Ok(None)` when fewer than [`LEN_PREFIX`] bytes remain. A
/// declared length that is negative or unaddressable is
/// [`CodecError::InvalidLength`]; fewer content bytes than declared is
/// [`CodecError::Truncated`].
pub fn read_chunk(buf: &[u8]) -> Result<Option<(&[u8], &[u8])>, CodecError> {
    if buf.len() < LEN_PREFIX {
        return Ok(None);
    }
    let declared = i64::from_le_bytes(buf[..LEN_PREFIX].try_into().expect("prefix width checked"));
    let content_len =
        usize::try_from(declared).map_err(|_| CodecError::InvalidLength(declared))?;
    let rest = &buf[LEN_PREFIX..];
    if rest.len() < content_len {
        return Err(CodecError::Truncated);
    }
    Ok(Some(rest.split_at(content_len)))
}

/// Iterator over the consecutive chunks of a buffer.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    buf: &'a [u8],
}

impl<'a> Chunks<'a> {
    /// Iterate over the chunks contained in `buf`.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Pull the next chunk, treating clean exhaustion as truncation.
    ///
    /// Records, fixed arrays, and map values use this form: at those
    /// positions a missing chunk is malformed input, not a clean stop.
    pub fn next_required(&mut self) -> Result<&'a [u8], CodecError> {
        self.next().unwrap_or(Err(CodecError::Truncated))
    }

    /// Bytes not yet consumed by the iterator.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.buf
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Result<&'a [u8], CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        match read_chunk(self.buf) {
            Ok(Some((content, rest))) => {
                self.buf = rest;
                Some(Ok(content))
            }
            Ok(None) => None,
            Err(err) => {
                self.buf = &[];
                Some(Err(err))
            }
        }
    }
}
