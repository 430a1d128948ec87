// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Decode length-framed byte streams back into value shapes.
// Author: Lukas Bower

//! Decoding half of the codec.
//!
//! Fixed-shape kinds (records, fixed arrays, scalars) consume an exact
//! number of chunks or payload bytes, turning exhaustion into
//! [`CodecError::Truncated`]. Variable-length kinds (sequences, maps) pull
//! chunks until the buffer is cleanly exhausted. Scalar narrowing truncates,
//! mirroring the widened 64-bit wire form.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use num_complex::Complex;

use crate::types::{Bytes, CodecError};
use crate::wire::{self, Chunks};

/// Values that can be reconstructed from a chunk's content.
pub trait Decode: Sized {
    /// Rebuild a value from the raw content of its chunk.
    fn decode_content(content: &[u8]) -> Result<Self, CodecError>;
}

/// Deserialize one top-level chunk into `dest`.
///
/// `dest` is left untouched when an error is returned: the value is built
/// from scratch and assigned only after the whole stream parsed
/// successfully. Bytes trailing the top-level chunk are ignored; use
/// [`decode_next`] to walk a stream of concatenated values.
pub fn decode<T: Decode>(bytes: &[u8], dest: &mut T) -> Result<(), CodecError> {
    let (value, _rest) = decode_next(bytes)?;
    *dest = value;
    Ok(())
}

/// Deserialize one top-level chunk and return the unread remainder.
pub fn decode_next<T: Decode>(bytes: &[u8]) -> Result<(T, &[u8]), CodecError> {
    match wire::read_chunk(bytes)? {
        Some((content, rest)) => Ok((T::decode_content(content)?, rest)),
        None => Err(CodecError::Truncated),
    }
}

/// Read the fixed-width scalar payload from the front of a chunk's content.
/// Trailing content bytes are ignored, matching the encoder's widened form.
fn fixed<const N: usize>(content: &[u8]) -> Result<[u8; N], CodecError> {
    content
        .get(..N)
        .and_then(|head| head.try_into().ok())
        .ok_or(CodecError::Truncated)
}

impl<T: Decode> Decode for Box<T> {
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        T::decode_content(content).map(Box::new)
    }
}

macro_rules! impl_decode_widened {
    ($($ty:ty),+ => $wide:ty) => {
        $(
            impl Decode for $ty {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                #[allow(clippy::cast_sign_loss, clippy::unnecessary_cast)]
                fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
                    Ok(<$wide>::from_le_bytes(fixed::<8>(content)?) as $ty)
                }
            }
        )+
    };
}

impl_decode_widened!(i8, i16, i32, i64, isize => i64);
impl_decode_widened!(u8, u16, u32, u64, usize => u64);
impl_decode_widened!(f32, f64 => f64);

impl Decode for bool {
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        Ok(fixed::<1>(content)?[0] != 0)
    }
}

impl Decode for Complex<f64> {
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        let raw = fixed::<16>(content)?;
        let re = f64::from_le_bytes(raw[..8].try_into().expect("width checked"));
        let im = f64::from_le_bytes(raw[8..].try_into().expect("width checked"));
        Ok(Complex::new(re, im))
    }
}

impl Decode for Complex<f32> {
    #[allow(clippy::cast_possible_truncation)]
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        let wide = Complex::<f64>::decode_content(content)?;
        Ok(Complex::new(wide.re as f32, wide.im as f32))
    }
}

impl Decode for String {
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        std::str::from_utf8(content)
            .map(str::to_owned)
            .map_err(|_| CodecError::InvalidUtf8)
    }
}

impl Decode for Bytes {
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        Ok(Bytes::from(content))
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        let mut items = Vec::new();
        for chunk in Chunks::new(content) {
            items.push(T::decode_content(chunk?)?);
        }
        Ok(items)
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        let mut chunks = Chunks::new(content);
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::decode_content(chunks.next_required()?)?);
        }
        Ok(items
            .try_into()
            .unwrap_or_else(|_| unreachable!("exactly N elements were collected")))
    }
}

impl<K: Decode + Ord, V: Decode> Decode for BTreeMap<K, V> {
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        let mut chunks = Chunks::new(content);
        let mut map = BTreeMap::new();
        while let Some(key_chunk) = chunks.next() {
            let key = K::decode_content(key_chunk?)?;
            // A key with no following value chunk is malformed.
            let value = V::decode_content(chunks.next_required()?)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<K, V, S> Decode for HashMap<K, V, S>
where
    K: Decode + Eq + Hash,
    V: Decode,
    S: BuildHasher + Default,
{
    fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
        let mut chunks = Chunks::new(content);
        let mut map = HashMap::with_hasher(S::default());
        while let Some(key_chunk) = chunks.next() {
            let key = K::decode_content(key_chunk?)?;
            let value = V::decode_content(chunks.next_required()?)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}
