//! charref - Character reference decoding for XML and HTML text
//!
//! Resolves named (`&eacute;`), decimal (`&#233;`) and hexadecimal
//! (`&#xE9;`) references under one of three rule sets:
//! - MinimalXml: the five predefined XML entities, strict syntax
//! - Html4: HTML 4.01 entities, strict syntax
//! - Html5: WHATWG names, missing `;`, U+FFFD and Windows-1252 recovery
//!
//! Tables are built once by the caller and shared by reference:
//!
//! ```
//! use charref::{Decoder, Dialect};
//!
//! let table = Dialect::Html5.builtin_table().unwrap();
//! let decoder = Decoder::new(Dialect::Html5, &table);
//! assert_eq!(decoder.decode("caf&eacute; &#x2615;"), "caf\u{e9} \u{2615}");
//! ```
//!
//! With the `nif` feature the decoder is also exported to the BEAM as
//! `Elixir.CharRef.Native`.

pub mod core;
pub mod strategy;
pub mod tables;

#[cfg(feature = "nif")]
mod nif;
#[cfg(feature = "nif")]
mod resource;

pub use crate::core::builder::TableBuilder;
pub use crate::core::decoder::Decoder;
pub use crate::core::dialect::{Dialect, ParseDialectError};
pub use crate::core::error::TableError;
pub use crate::core::reference::Reference;
pub use crate::core::table::ReferenceTable;
pub use crate::strategy::decode_parallel;

/// Decode `input` with the given dialect and table
pub fn decode(input: &str, dialect: Dialect, table: &ReferenceTable) -> String {
    Decoder::new(dialect, table).decode(input).into_owned()
}
