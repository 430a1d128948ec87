// Author: Lukas Bower
// Purpose: Derive record codec impls for named-field structs and tuples.

//! Record kinds: named-field structs defined through [`record!`] and plain
//! tuples as anonymous records. Fields are framed one chunk each, in
//! declaration order; that order is part of the implicit schema.

use crate::wire::Chunks;
use crate::{CodecError, Decode, Encode};

/// Define a named-field record struct together with its codec impls.
///
/// The macro emits the struct itself plus [`Encode`] and [`Decode`] impls
/// that frame one chunk per field in declaration order, so the wire order
/// can never drift from the type definition.
///
/// ```
/// objcodec::record! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct Point {
///         pub x: i64,
///         pub y: i64,
///     }
/// }
///
/// let frame = objcodec::encode(&Point { x: 1, y: 2 }).unwrap();
/// let mut decoded = Point::default();
/// objcodec::decode(&frame, &mut decoded).unwrap();
/// assert_eq!(decoded, Point { x: 1, y: 2 });
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )+
        }

        impl $crate::Encode for $name {
            fn encode_content(
                &self,
                out: &mut ::std::vec::Vec<u8>,
            ) -> ::core::result::Result<(), $crate::CodecError> {
                $( $crate::Encode::encode_chunk(&self.$field, out)?; )+
                ::core::result::Result::Ok(())
            }
        }

        impl $crate::Decode for $name {
            fn decode_content(
                content: &[u8],
            ) -> ::core::result::Result<Self, $crate::CodecError> {
                let mut chunks = $crate::wire::Chunks::new(content);
                ::core::result::Result::Ok(Self {
                    $( $field: $crate::Decode::decode_content(chunks.next_required()?)?, )+
                })
            }
        }
    };
}

macro_rules! impl_tuple_record {
    ($( $ty:ident : $idx:tt ),+) => {
        impl<$( $ty: Encode ),+> Encode for ($( $ty, )+) {
            fn encode_content(&self, out: &mut Vec<u8>) -> Result<(), CodecError> {
                $( self.$idx.encode_chunk(out)?; )+
                Ok(())
            }
        }

        impl<$( $ty: Decode ),+> Decode for ($( $ty, )+) {
            fn decode_content(content: &[u8]) -> Result<Self, CodecError> {
                let mut chunks = Chunks::new(content);
                Ok(($( <$ty as Decode>::decode_content(chunks.next_required()?)?, )+))
            }
        }
    };
}

impl_tuple_record!(A: 0);
impl_tuple_record!(A: 0, B: 1);
impl_tuple_record!(A: 0, B: 1, C: 2);
impl_tuple_record!(A: 0, B: 1, C: 2, D: 3);
impl_tuple_record!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_tuple_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_tuple_record!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
