//! Character Reference Decoding
//!
//! Single pass over the input:
//! - text between references is copied through untouched
//! - `&name;` resolves through the [`ReferenceTable`]
//! - `&#123;` / `&#x7B;` resolve to a code point
//!
//! Anything that fails to resolve is copied exactly as consumed, and
//! scanning resumes right after it. Decoding never fails.
//!
//! Uses Cow for zero-copy when nothing was decoded.

use std::borrow::Cow;

use memchr::memchr;

use super::dialect::{remap_c1, Dialect};
use super::scanner::Scanner;
use super::table::ReferenceTable;

const REPLACEMENT: char = '\u{FFFD}';

/// Outcome of one resolved token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolved<'t> {
    Char(char),
    Text(&'t str),
}

impl Resolved<'_> {
    #[inline]
    fn push_into(self, out: &mut String) {
        match self {
            Resolved::Char(c) => out.push(c),
            Resolved::Text(s) => out.push_str(s),
        }
    }
}

/// Stateless decoder bound to a dialect and a table
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    dialect: Dialect,
    table: &'t ReferenceTable,
}

impl<'t> Decoder<'t> {
    pub fn new(dialect: Dialect, table: &'t ReferenceTable) -> Self {
        Decoder { dialect, table }
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[inline]
    pub fn table(&self) -> &'t ReferenceTable {
        self.table
    }

    /// Decode all character references in `input`.
    ///
    /// Returns Borrowed if nothing was resolved, Owned otherwise. The output
    /// buffer is only allocated once the first reference resolves.
    pub fn decode<'a>(&self, input: &'a str) -> Cow<'a, str> {
        // Fast path: no '&' means nothing to do
        if memchr(b'&', input.as_bytes()).is_none() {
            return Cow::Borrowed(input);
        }

        let mut scanner = Scanner::new(input.as_bytes());
        let mut out: Option<String> = None;
        // Start of text not yet copied to `out`
        let mut pending = 0;

        while let Some(amp) = scanner.find_reference_start() {
            scanner.set_position(amp);
            if let Some(resolved) = self.resolve(&mut scanner) {
                let out = out.get_or_insert_with(|| String::with_capacity(input.len()));
                out.push_str(&input[pending..amp]);
                resolved.push_into(out);
                pending = scanner.position();
            }
            // Unresolved tokens stay in the pending literal run
        }

        match out {
            Some(mut out) => {
                out.push_str(&input[pending..]);
                Cow::Owned(out)
            }
            None => Cow::Borrowed(input),
        }
    }

    /// Decode `input`, appending the result to `out`
    pub fn decode_to(&self, input: &str, out: &mut String) {
        out.push_str(&self.decode(input));
    }

    /// Resolve the token at the scanner's '&'.
    ///
    /// Always consumes at least the '&'; on return the scanner sits right
    /// after the consumed span.
    fn resolve(&self, scanner: &mut Scanner<'_>) -> Option<Resolved<'t>> {
        scanner.advance(1);
        if scanner.eat(b'#') {
            self.resolve_numeric(scanner)
        } else {
            self.resolve_named(scanner)
        }
    }

    fn resolve_named(&self, scanner: &mut Scanner<'_>) -> Option<Resolved<'t>> {
        let start = scanner.position();
        let name = scanner.read_name()?;

        if scanner.peek() == Some(b';') {
            if let Some(value) = self.table.lookup_bytes(name) {
                scanner.advance(1);
                return Some(Resolved::Text(value));
            }
        }

        if self.dialect.allows_missing_semicolon() {
            // Longest known name at the start of the span; the rest is text
            if let Some(reference) = self.table.longest_prefix_bytes(name) {
                scanner.set_position(start + reference.name().len());
                return Some(Resolved::Text(reference.value()));
            }
        }

        scanner.eat(b';');
        None
    }

    fn resolve_numeric(&self, scanner: &mut Scanner<'_>) -> Option<Resolved<'t>> {
        let radix = match scanner.peek() {
            Some(b'x' | b'X') => {
                scanner.advance(1);
                16
            }
            _ => 10,
        };

        let digits = scanner.read_digits(radix);
        if digits.len == 0 {
            return None;
        }

        if !scanner.eat(b';') && !self.dialect.allows_missing_semicolon() {
            return None;
        }

        self.resolve_code_point(digits.value)
    }

    fn resolve_code_point(&self, codepoint: u32) -> Option<Resolved<'t>> {
        let replace = self.dialect.replaces_invalid_code_points();

        match codepoint {
            0 if replace => Some(Resolved::Char(REPLACEMENT)),
            0xD800..=0xDFFF | 0x11_0000..=u32::MAX => {
                // Passed through literally outside HTML5
                replace.then_some(Resolved::Char(REPLACEMENT))
            }
            0x80..=0x9F if self.dialect.remaps_c1_controls() => remap_c1(codepoint)
                .or_else(|| char::from_u32(codepoint))
                .map(Resolved::Char),
            _ => char::from_u32(codepoint).map(Resolved::Char),
        }
    }
}
