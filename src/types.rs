// Author: Lukas Bower
// Purpose: Define the codec error taxonomy and the raw byte-sequence type.
#![allow(clippy::module_name_repetitions)]

//! Shared data model definitions for the framed object codec.

/// Possible errors produced while encoding or decoding framed values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    /// Buffer ended before a mandatory read completed: a missing record
    /// field, array element, map value, or scalar payload byte.
    #[error("truncated stream")]
    Truncated,
    /// A chunk declared a negative length or one this platform cannot
    /// address.
    #[error("invalid chunk length {0}")]
    InvalidLength(i64),
    /// Content length cannot be represented in the 8-byte signed prefix.
    #[error("chunk length overflow: {0} bytes")]
    LengthOverflow(usize),
    /// String chunk content was not valid UTF-8.
    #[error("invalid utf8 in string chunk")]
    InvalidUtf8,
}

/// Raw byte sequence framed verbatim as a single chunk.
///
/// `Vec<u8>` is a growable sequence like any other: each byte becomes its
/// own widened 8-byte chunk. `Bytes` is the compact alternative whose chunk
/// content is the bytes themselves, mirroring how strings are framed.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    /// Construct an empty byte sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Borrow the underlying bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper and return the owned bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
