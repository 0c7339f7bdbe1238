//! Decoding dialects
//!
//! The three rule sets differ only in a handful of outcomes:
//!
//! | rule                               | MinimalXml | Html4 | Html5 |
//! |------------------------------------|------------|-------|-------|
//! | `;` may be omitted                 | no         | no    | yes   |
//! | invalid code point -> U+FFFD       | no         | no    | yes   |
//! | C1 controls remapped (cp1252)      | no         | no    | yes   |
//! | built-in names                     | 5          | 252   | 2125  |
//!
//! Where a dialect does not replace an invalid code point, the token is
//! passed through unchanged.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::error::TableError;
use super::table::ReferenceTable;
use crate::tables;

/// Character reference rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// XML 1.0 predefined entities, strict syntax
    MinimalXml,
    /// HTML 4.01 entity set, strict syntax
    Html4,
    /// WHATWG HTML named character references and error recovery
    Html5,
}

impl Dialect {
    /// Whether a reference may end without `;`
    #[inline]
    pub fn allows_missing_semicolon(self) -> bool {
        matches!(self, Dialect::Html5)
    }

    /// Whether zero, surrogate and out-of-range code points become U+FFFD
    #[inline]
    pub fn replaces_invalid_code_points(self) -> bool {
        matches!(self, Dialect::Html5)
    }

    /// Whether 0x80-0x9F is reinterpreted as Windows-1252
    #[inline]
    pub fn remaps_c1_controls(self) -> bool {
        matches!(self, Dialect::Html5)
    }

    /// Build the named-reference table this dialect implies.
    ///
    /// Not cached: callers build it once and share it.
    pub fn builtin_table(self) -> Result<ReferenceTable, TableError> {
        match self {
            Dialect::MinimalXml => Ok(tables::minimal_xml()),
            Dialect::Html4 => tables::html4(),
            Dialect::Html5 => tables::html5(),
        }
    }

    /// Canonical configuration name
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::MinimalXml => "xml",
            Dialect::Html4 => "html4",
            Dialect::Html5 => "html5",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown dialect name in configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect {0:?} (expected xml, html4 or html5)")]
pub struct ParseDialectError(pub String);

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" | "minimal-xml" => Ok(Dialect::MinimalXml),
            "html4" => Ok(Dialect::Html4),
            "html5" => Ok(Dialect::Html5),
            _ => Err(ParseDialectError(s.to_string())),
        }
    }
}

/// Windows-1252 interpretation of C1 code points 0x80-0x9F.
///
/// `None` marks 0x81, 0x8D, 0x8F, 0x90 and 0x9D, which stay as-is.
const WINDOWS_1252_C1: [Option<char>; 32] = [
    Some('\u{20AC}'), // 0x80 EURO SIGN
    None,             // 0x81
    Some('\u{201A}'), // 0x82 SINGLE LOW-9 QUOTATION MARK
    Some('\u{0192}'), // 0x83 LATIN SMALL LETTER F WITH HOOK
    Some('\u{201E}'), // 0x84 DOUBLE LOW-9 QUOTATION MARK
    Some('\u{2026}'), // 0x85 HORIZONTAL ELLIPSIS
    Some('\u{2020}'), // 0x86 DAGGER
    Some('\u{2021}'), // 0x87 DOUBLE DAGGER
    Some('\u{02C6}'), // 0x88 MODIFIER LETTER CIRCUMFLEX ACCENT
    Some('\u{2030}'), // 0x89 PER MILLE SIGN
    Some('\u{0160}'), // 0x8A LATIN CAPITAL LETTER S WITH CARON
    Some('\u{2039}'), // 0x8B SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    Some('\u{0152}'), // 0x8C LATIN CAPITAL LIGATURE OE
    None,             // 0x8D
    Some('\u{017D}'), // 0x8E LATIN CAPITAL LETTER Z WITH CARON
    None,             // 0x8F
    None,             // 0x90
    Some('\u{2018}'), // 0x91 LEFT SINGLE QUOTATION MARK
    Some('\u{2019}'), // 0x92 RIGHT SINGLE QUOTATION MARK
    Some('\u{201C}'), // 0x93 LEFT DOUBLE QUOTATION MARK
    Some('\u{201D}'), // 0x94 RIGHT DOUBLE QUOTATION MARK
    Some('\u{2022}'), // 0x95 BULLET
    Some('\u{2013}'), // 0x96 EN DASH
    Some('\u{2014}'), // 0x97 EM DASH
    Some('\u{02DC}'), // 0x98 SMALL TILDE
    Some('\u{2122}'), // 0x99 TRADE MARK SIGN
    Some('\u{0161}'), // 0x9A LATIN SMALL LETTER S WITH CARON
    Some('\u{203A}'), // 0x9B SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    Some('\u{0153}'), // 0x9C LATIN SMALL LIGATURE OE
    None,             // 0x9D
    Some('\u{017E}'), // 0x9E LATIN SMALL LETTER Z WITH CARON
    Some('\u{0178}'), // 0x9F LATIN CAPITAL LETTER Y WITH DIAERESIS
];

/// Windows-1252 replacement for a C1 code point, if one exists
#[inline]
pub fn remap_c1(codepoint: u32) -> Option<char> {
    match codepoint {
        0x80..=0x9F => WINDOWS_1252_C1[(codepoint - 0x80) as usize],
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_switches() {
        assert!(!Dialect::MinimalXml.allows_missing_semicolon());
        assert!(!Dialect::Html4.allows_missing_semicolon());
        assert!(Dialect::Html5.allows_missing_semicolon());
        assert!(!Dialect::Html4.replaces_invalid_code_points());
        assert!(Dialect::Html5.replaces_invalid_code_points());
        assert!(!Dialect::MinimalXml.remaps_c1_controls());
        assert!(Dialect::Html5.remaps_c1_controls());
    }

    #[test]
    fn test_parse_dialect() {
        assert_eq!("xml".parse::<Dialect>(), Ok(Dialect::MinimalXml));
        assert_eq!("Minimal-XML".parse::<Dialect>(), Ok(Dialect::MinimalXml));
        assert_eq!("HTML4".parse::<Dialect>(), Ok(Dialect::Html4));
        assert_eq!("html5".parse::<Dialect>(), Ok(Dialect::Html5));
        assert_eq!(
            "sgml".parse::<Dialect>(),
            Err(ParseDialectError("sgml".to_string()))
        );
    }

    #[test]
    fn test_parse_dialect_rejects_other_spellings() {
        for name in ["html", "minimal_xml", "minimalxml", "html 5"] {
            assert_eq!(
                name.parse::<Dialect>(),
                Err(ParseDialectError(name.to_string()))
            );
        }
    }

    #[test]
    fn test_display_round_trips() {
        for d in [Dialect::MinimalXml, Dialect::Html4, Dialect::Html5] {
            assert_eq!(d.to_string().parse::<Dialect>(), Ok(d));
        }
    }

    #[test]
    fn test_remap_c1() {
        assert_eq!(remap_c1(0x80), Some('\u{20AC}'));
        assert_eq!(remap_c1(0x96), Some('\u{2013}'));
        assert_eq!(remap_c1(0x9F), Some('\u{0178}'));
        for unmapped in [0x81, 0x8D, 0x8F, 0x90, 0x9D] {
            assert_eq!(remap_c1(unmapped), None);
        }
        assert_eq!(remap_c1(0x7F), None);
        assert_eq!(remap_c1(0xA0), None);
    }
}
