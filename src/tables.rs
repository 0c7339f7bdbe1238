//! Built-in reference tables
//!
//! - minimal XML: the five predefined entities of XML 1.0
//! - HTML4: the 252 entities of HTML 4.01 (Latin-1, symbols, special)
//! - HTML5: the WHATWG named character references
//!
//! The HTML sets are embedded as entity declaration files and parsed by
//! [`TableBuilder`]. Nothing is cached here; build once and share.

use crate::core::builder::TableBuilder;
use crate::core::error::TableError;
use crate::core::reference::Reference;
use crate::core::table::ReferenceTable;

const HTML4_DECLARATIONS: &str = include_str!("../data/html4.ent");
const HTML5_DECLARATIONS: &str = include_str!("../data/html5.ent");

pub const HTML4_LEN: usize = 252;
pub const HTML5_LEN: usize = 2125;

const PREDEFINED_XML: [(&str, &str); 5] = [
    ("amp", "&"),
    ("apos", "'"),
    ("gt", ">"),
    ("lt", "<"),
    ("quot", "\""),
];

/// `&amp;`, `&apos;`, `&gt;`, `&lt;`, `&quot;`
pub fn minimal_xml() -> ReferenceTable {
    ReferenceTable::from_unique(
        PREDEFINED_XML
            .iter()
            .map(|(name, value)| Reference::predefined(name, value))
            .collect(),
    )
}

/// HTML 4.01 character entities
pub fn html4() -> Result<ReferenceTable, TableError> {
    let mut builder = TableBuilder::with_expected_len(HTML4_LEN);
    builder.add_declarations(HTML4_DECLARATIONS)?;
    Ok(builder.build())
}

/// HTML5 named character references
pub fn html5() -> Result<ReferenceTable, TableError> {
    let mut builder = TableBuilder::with_expected_len(HTML5_LEN);
    builder.add_declarations(HTML5_DECLARATIONS)?;
    Ok(builder.build())
}
