//! Core character reference primitives
//!
//! - Reference: `(name, value)` pair and the name grammar
//! - Table: sorted reference table with longest-prefix lookup
//! - Builder: single-use table accumulator and declaration parser
//! - Dialect: minimal-XML / HTML4 / HTML5 rule switches, C1 remap table
//! - Scanner: memchr-backed byte scanner for reference tokens
//! - Decoder: single-pass reference resolution
//! - Error: table construction errors

pub mod builder;
pub mod decoder;
pub mod dialect;
pub mod error;
pub mod reference;
pub mod scanner;
pub mod table;
