// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Encode supported value shapes into length-framed byte streams.
// Author: Lukas Bower

//! Encoding half of the codec: a structural recursion over value shapes.
//!
//! Scalars widen to their 64-bit form and frame the fixed-width payload;
//! strings and [`Bytes`] frame their raw bytes; composites frame the
//! concatenation of their children's chunks. References and boxes delegate
//! without adding a frame of their own.

use std::collections::{BTreeMap, HashMap};

use num_complex::Complex;

use crate::types::{Bytes, CodecError};
use crate::wire;

/// Values that can be serialized as one length-framed chunk.
pub trait Encode {
    /// Append this value's raw chunk content, without the length prefix.
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError>;

    /// Append this value as a complete length-prefixed chunk.
    fn encode_chunk(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        let start = wire::begin_chunk(out);
        self.encode_content(out)?;
        wire::finish_chunk(out, start)
    }
}

/// Serialize `value` into a single top-level chunk.
pub fn encode<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(64);
    value.encode_chunk(&mut out)?;
    Ok(out)
}

// Indirections are transparent: both methods delegate so the referent's
// chunk is the only frame emitted.
impl<T: Encode + ?Sized> Encode for &T {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        (**self).encode_content(out)
    }

    fn encode_chunk(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        (**self).encode_chunk(out)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        self.as_ref().encode_content(out)
    }

    fn encode_chunk(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        self.as_ref().encode_chunk(out)
    }
}

macro_rules! impl_encode_widened {
    ($($ty:ty),+ => $wide:ty) => {
        $(
            impl Encode for $ty {
                #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
                fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
                    out.extend_from_slice(&(*self as $wide).to_le_bytes());
                    Ok(())
                }
            }
        )+
    };
}

impl_encode_widened!(i8, i16, i32, i64, isize => i64);
impl_encode_widened!(u8, u16, u32, u64, usize => u64);
impl_encode_widened!(f32, f64 => f64);

impl Encode for bool {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.push(u8::from(*self));
        Ok(())
    }
}

impl Encode for Complex<f64> {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.extend_from_slice(&self.re.to_le_bytes());
        out.extend_from_slice(&self.im.to_le_bytes());
        Ok(())
    }
}

impl Encode for Complex<f32> {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        Complex::new(f64::from(self.re), f64::from(self.im)).encode_content(out)
    }
}

impl Encode for str {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl Encode for String {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        self.as_str().encode_content(out)
    }
}

impl Encode for Bytes {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.extend_from_slice(self.as_slice());
        Ok(())
    }
}

impl<T: Encode> Encode for [T] {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        for item in self {
            item.encode_chunk(out)?;
        }
        Ok(())
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        self.as_slice().encode_content(out)
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        self.as_slice().encode_content(out)
    }
}

// Map pairs are emitted in the host map's enumeration order: sorted and
// byte-stable for BTreeMap, unspecified for HashMap. Only value equality
// round-trips for HashMap.
impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        for (key, value) in self {
            key.encode_chunk(out)?;
            value.encode_chunk(out)?;
        }
        Ok(())
    }
}

impl<K: Encode, V: Encode, S> Encode for HashMap<K, V, S> {
    fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
        for (key, value) in self {
            key.encode_chunk(out)?;
            value.encode_chunk(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::LEN_PREFIX;

    #[test]
    fn integers_widen_to_eight_bytes() {
        let frame = encode(&-2i8).expect("encode i8");
        assert_eq!(&frame[..LEN_PREFIX], &8i64.to_le_bytes());
        assert_eq!(&frame[LEN_PREFIX..], &(-2i64).to_le_bytes());
    }

    #[test]
    fn floats_widen_to_f64() {
        let frame = encode(&1.5f32).expect("encode f32");
        assert_eq!(&frame[..LEN_PREFIX], &8i64.to_le_bytes());
        assert_eq!(&frame[LEN_PREFIX..], &1.5f64.to_le_bytes());
    }

    #[test]
    fn complex_is_a_double_pair() {
        let frame = encode(&Complex::new(1.0f32, -2.0f32)).expect("encode complex");
        assert_eq!(&frame[..LEN_PREFIX], &16i64.to_le_bytes());
        assert_eq!(&frame[LEN_PREFIX..LEN_PREFIX + 8], &1.0f64.to_le_bytes());
        assert_eq!(&frame[LEN_PREFIX + 8..], &(-2.0f64).to_le_bytes());
    }

    #[test]
    fn strings_frame_raw_bytes() {
        let frame = encode("hi").expect("encode str");
        assert_eq!(&frame[..LEN_PREFIX], &2i64.to_le_bytes());
        assert_eq!(&frame[LEN_PREFIX..], b"hi");
    }

    #[test]
    fn empty_sequence_is_a_zero_length_chunk() {
        let frame = encode(&Vec::<u64>::new()).expect("encode empty vec");
        assert_eq!(frame, 0i64.to_le_bytes());
    }

    #[test]
    fn indirection_adds_no_frame() {
        let value = 7u32;
        let direct = encode(&value).expect("encode value");
        let boxed = encode(&Box::new(value)).expect("encode box");
        let referenced = encode(&&value).expect("encode reference");
        assert_eq!(direct, boxed);
        assert_eq!(direct, referenced);
    }

    #[test]
    fn sequence_nests_element_chunks() {
        let frame = encode(&vec![true, false]).expect("encode vec");
        // Outer content: two one-byte bool chunks of 9 bytes each.
        assert_eq!(&frame[..LEN_PREFIX], &18i64.to_le_bytes());
        assert_eq!(&frame[LEN_PREFIX..LEN_PREFIX + 8], &1i64.to_le_bytes());
        assert_eq!(frame[LEN_PREFIX + 8], 1);
        assert_eq!(frame[frame.len() - 1], 0);
    }

    #[test]
    fn btreemap_output_is_byte_stable() {
        let mut forward = BTreeMap::new();
        forward.insert("b".to_string(), 2i32);
        forward.insert("a".to_string(), 1i32);
        let mut reversed = BTreeMap::new();
        reversed.insert("a".to_string(), 1i32);
        reversed.insert("b".to_string(), 2i32);
        assert_eq!(
            encode(&forward).expect("encode map"),
            encode(&reversed).expect("encode map")
        );
    }
}
