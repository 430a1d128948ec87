// Author: Lukas Bower
// Purpose: Provide a fuzz corpus harness for framed value decoding.

//! Fuzz corpus harnesses for framed value decoding.

use std::collections::BTreeMap;

use crate::types::Bytes;
use crate::decode_next;

/// Exercise decoder paths across the kind taxonomy on arbitrary corpus
/// bytes. Every outcome other than a clean error return is a finding.
pub fn fuzz_decode(bytes: &[u8]) {
    let _ = decode_next::<bool>(bytes);
    let _ = decode_next::<i64>(bytes);
    let _ = decode_next::<f64>(bytes);
    let _ = decode_next::<String>(bytes);
    let _ = decode_next::<Bytes>(bytes);
    let _ = decode_next::<Vec<u64>>(bytes);
    let _ = decode_next::<[i32; 4]>(bytes);
    let _ = decode_next::<BTreeMap<String, Vec<i32>>>(bytes);
    let _ = decode_next::<Box<(String, Bytes)>>(bytes);
}
