//! Table construction errors
//!
//! Decoding never fails; only building a table can. Every variant here is
//! fatal for the table being built.

use std::io;
use thiserror::Error;

/// Errors raised while assembling a [`ReferenceTable`](crate::ReferenceTable)
#[derive(Debug, Error)]
pub enum TableError {
    /// Name does not match `[A-Za-z][A-Za-z0-9.-]*`
    #[error("invalid reference name {name:?}")]
    InvalidName { name: String },

    /// Same name inserted twice without an explicit override
    #[error("duplicate reference name {name:?}")]
    DuplicateName { name: String },

    /// Line starts like a declaration but is not `<!ENTITY name "value">`
    #[error("malformed entity declaration on line {line}: {text}")]
    MalformedDeclaration { line: usize, text: String },

    /// The declaration source could not be read
    #[error("failed to read entity declarations")]
    Io {
        #[from]
        source: io::Error,
    },
}
