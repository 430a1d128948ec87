// CLASSIFICATION: COMMUNITY
// Filename: framing.rs v0.1
// Author: Lukas Bower
// Date Modified: 2025-08-19

use objcodec::{decode, decode_next, encode, wire, Bytes};

objcodec::record! {
    #[derive(Debug, Default, PartialEq)]
    struct Payload {
        body: Bytes,
        note: String,
    }
}

// The byte-exact layout contract: an outer chunk whose length is the sum of
// the inner chunks, a 3-byte raw chunk, then an 11-byte string chunk.
#[test]
fn record_layout_is_byte_exact() {
    let value = Payload {
        body: Bytes::from(vec![1, 2, 3]),
        note: "hello world".to_string(),
    };
    let frame = encode(&value).expect("encode payload");

    assert_eq!(frame.len(), 8 + 30);
    assert_eq!(&frame[..8], &30i64.to_le_bytes());
    assert_eq!(&frame[8..16], &3i64.to_le_bytes());
    assert_eq!(&frame[16..19], &[1, 2, 3]);
    assert_eq!(&frame[19..27], &11i64.to_le_bytes());
    assert_eq!(&frame[27..], b"hello world");

    let mut decoded = Payload::default();
    decode(&frame, &mut decoded).expect("decode payload");
    assert_eq!(decoded, value);
}

#[test]
fn empty_sequence_is_a_lone_zero_length_chunk() {
    let frame = encode(&Vec::<i64>::new()).expect("encode empty vec");
    assert_eq!(frame, 0i64.to_le_bytes());
    let mut decoded = vec![1i64];
    decode(&frame, &mut decoded).expect("decode empty vec");
    assert!(decoded.is_empty());
}

#[test]
fn whole_chunk_spans_exactly_prefix_plus_length() {
    let frame = encode("abcdef").expect("encode str");
    let (content, rest) = wire::read_chunk(&frame)
        .expect("read chunk")
        .expect("one chunk");
    assert_eq!(content.len() + wire::LEN_PREFIX, frame.len());
    assert!(rest.is_empty());
}

// Two independently encoded top-level values decode in order from their
// concatenation.
#[test]
fn concatenated_streams_decode_sequentially() {
    let mut stream = encode(&42u64).expect("encode first");
    stream.extend_from_slice(&encode("second").expect("encode second"));

    let (first, rest) = decode_next::<u64>(&stream).expect("decode first");
    assert_eq!(first, 42);
    let (second, rest) = decode_next::<String>(rest).expect("decode second");
    assert_eq!(second, "second");
    assert!(rest.is_empty());
}
