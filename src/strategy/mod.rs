//! Decoding Strategy Module
//!
//! - Sequential: [`Decoder::decode`](crate::Decoder::decode), one input at a time
//! - Parallel: many independent inputs across the Rayon pool

pub mod parallel;

pub use parallel::decode_parallel;
