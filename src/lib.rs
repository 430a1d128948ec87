// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide the framed object codec traits and framing primitives.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Self-describing binary object codec built on length-prefixed chunks.
//!
//! Every supported value serializes to exactly one *chunk*: an 8-byte
//! little-endian signed length followed by that many content bytes.
//! Composite kinds (records, fixed arrays, growable sequences, maps) nest
//! their children's chunks inside their own content; scalar kinds carry a
//! fixed-width little-endian payload (1 byte bool, 8 bytes integer/float
//! widened to 64 bits, 16 bytes complex as a pair of `f64`); strings and
//! [`Bytes`] carry their raw bytes verbatim. References and boxes are
//! followed transparently and never contribute a frame of their own.
//!
//! There is no schema artifact: the shape of the value itself is the
//! schema. Encode and decode sites must agree on that shape field-by-field
//! and kind-by-kind; the codec cannot detect a reordered or retyped field.
//!
//! Both directions recurse structurally, so call depth is proportional to
//! value nesting depth. On decode every nesting level consumes at least
//! eight prefix bytes, bounding depth by `input.len() / 8`; callers that
//! accept untrusted input should cap input size accordingly.

mod decode;
mod encode;
pub mod fuzz;
mod record;
mod types;
pub mod wire;

pub use decode::{decode, decode_next, Decode};
pub use encode::{encode, Encode};
pub use types::{Bytes, CodecError};
