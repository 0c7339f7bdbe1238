//! Reference Table Builder
//!
//! Single-use accumulator for named references. Entries come from direct
//! inserts or from entity declaration records, one per line:
//!
//! ```text
//! <!ENTITY eacute "&#233;">
//! <!ENTITY amp "&#38;#38;">
//! ```
//!
//! Record values are unescaped with the predefined XML entities. A value
//! that still starts with `&` afterwards was double-escaped (`&#38;#38;`)
//! and is unescaped once more. Lines that are not declarations are ignored.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use memchr::memchr;
use tracing::{debug, warn};

use super::decoder::Decoder;
use super::dialect::Dialect;
use super::error::TableError;
use super::reference::Reference;
use super::table::ReferenceTable;
use crate::tables;

const DECLARATION_PREFIX: &str = "<!ENTITY ";

/// Accumulates references and produces a [`ReferenceTable`]
#[derive(Debug, Default)]
pub struct TableBuilder {
    entries: Vec<Reference>,
    /// name -> index into `entries`
    index: HashMap<String, usize>,
    expected_len: Option<usize>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-sized for `expected` entries.
    ///
    /// The hint is checked on [`build`](Self::build); a mismatch only logs a
    /// warning.
    pub fn with_expected_len(expected: usize) -> Self {
        TableBuilder {
            entries: Vec::with_capacity(expected),
            index: HashMap::with_capacity(expected),
            expected_len: Some(expected),
        }
    }

    /// Number of entries accumulated so far
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a reference. A name seen before is an error.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), TableError> {
        let reference = Reference::new(name, value)?;
        if self.index.contains_key(reference.name()) {
            return Err(TableError::DuplicateName {
                name: reference.name().to_string(),
            });
        }
        self.push(reference);
        Ok(())
    }

    /// Add a reference, replacing any earlier value for the same name
    pub fn insert_override(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), TableError> {
        let reference = Reference::new(name, value)?;
        match self.index.get(reference.name()).copied() {
            Some(i) => self.entries[i] = reference,
            None => self.push(reference),
        }
        Ok(())
    }

    fn push(&mut self, reference: Reference) {
        self.index
            .insert(reference.name().to_string(), self.entries.len());
        self.entries.push(reference);
    }

    /// Parse declaration records from text. Returns the number added.
    ///
    /// On error nothing from `source` is added.
    pub fn add_declarations(&mut self, source: &str) -> Result<usize, TableError> {
        self.add_reader(source.as_bytes())
    }

    /// Parse declaration records from any line source.
    ///
    /// Records are staged and committed only once the whole source has
    /// parsed, so a failure leaves the builder as it was.
    pub fn add_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, TableError> {
        let predefined = tables::minimal_xml();
        let unescaper = Decoder::new(Dialect::MinimalXml, &predefined);

        let mut staged = Vec::new();
        let mut staged_names = HashSet::new();
        for (i, line) in reader.lines().enumerate() {
            let Some(reference) = parse_line(&unescaper, i + 1, &line?)? else {
                continue;
            };
            if self.index.contains_key(reference.name())
                || !staged_names.insert(reference.name().to_string())
            {
                return Err(TableError::DuplicateName {
                    name: reference.name().to_string(),
                });
            }
            staged.push(reference);
        }

        let added = staged.len();
        for reference in staged {
            self.push(reference);
        }
        Ok(added)
    }

    /// Parse declaration records from a file
    pub fn add_path(&mut self, path: impl AsRef<Path>) -> Result<usize, TableError> {
        let file = File::open(path.as_ref())?;
        self.add_reader(BufReader::new(file))
    }

    /// Finish building. Consumes the builder.
    pub fn build(self) -> ReferenceTable {
        if let Some(expected) = self.expected_len {
            if expected != self.entries.len() {
                warn!(
                    expected,
                    actual = self.entries.len(),
                    "reference table size hint does not match"
                );
            }
        }

        let table = ReferenceTable::from_unique(self.entries);
        debug!(
            entries = table.len(),
            max_name_len = table.max_name_len(),
            "built reference table"
        );
        table
    }
}

/// Parse one record line. `None` for lines that are not declarations.
fn parse_line(
    unescaper: &Decoder<'_>,
    line_no: usize,
    line: &str,
) -> Result<Option<Reference>, TableError> {
    let Some(declaration) = line.trim_start().strip_prefix(DECLARATION_PREFIX) else {
        return Ok(None);
    };

    let (name, raw_value) =
        parse_declaration(declaration).ok_or_else(|| TableError::MalformedDeclaration {
            line: line_no,
            text: line.to_string(),
        })?;

    // Legacy sources put one space before the value
    let raw_value = raw_value.strip_prefix(' ').unwrap_or(raw_value);

    let mut value = unescaper.decode(raw_value).into_owned();
    if value.starts_with('&') {
        value = unescaper.decode(&value).into_owned();
    }

    Reference::new(name, value).map(Some)
}

/// Split `name "value">` (the text after `<!ENTITY `) into its parts
fn parse_declaration(rest: &str) -> Option<(&str, &str)> {
    let rest = rest.trim_start();
    let name_end = rest.find(|c: char| c.is_ascii_whitespace())?;
    let (name, rest) = rest.split_at(name_end);

    let rest = rest.trim_start().strip_prefix('"')?;
    let close = memchr(b'"', rest.as_bytes())?;
    let (value, tail) = rest.split_at(close);

    let tail = tail[1..].trim_start();
    if !tail.starts_with('>') {
        return None;
    }
    Some((name, value))
}
