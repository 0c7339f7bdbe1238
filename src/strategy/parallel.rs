//! Parallel Batch Decoding
//!
//! Uses Rayon to decode many independent inputs at once. The decoder and
//! its table are read-only, so workers share them without locking.

use rayon::prelude::*;

use crate::core::decoder::Decoder;

/// Decode every input in parallel, preserving order
pub fn decode_parallel<S: AsRef<str> + Sync>(decoder: &Decoder<'_>, inputs: &[S]) -> Vec<String> {
    inputs
        .par_iter()
        .map(|input| decoder.decode(input.as_ref()).into_owned())
        .collect()
}
