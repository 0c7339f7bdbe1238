//! Named character references
//!
//! A reference is an immutable `(name, value)` pair. Names follow a small
//! grammar: an ASCII letter, then ASCII letters, digits, `.` or `-`. The dot
//! and hyphen admit legacy ISO names such as `b.alpha`.

use std::fmt;

use super::error::TableError;

/// A named reference and its replacement text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    name: Box<str>,
    value: Box<str>,
}

impl Reference {
    /// Create a reference, validating the name grammar
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, TableError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(TableError::InvalidName { name });
        }
        Ok(Reference {
            name: name.into_boxed_str(),
            value: value.into().into_boxed_str(),
        })
    }

    /// Built-in references whose names are known to be valid
    pub(crate) fn predefined(name: &str, value: &str) -> Self {
        debug_assert!(is_valid_name(name));
        Reference {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Bare name, without `&` or `;`
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replacement text (may be empty or span several code points)
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{};", self.name)
    }
}

/// Check a whole name against the reference grammar
pub fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    match bytes.split_first() {
        Some((&first, rest)) => is_name_start_byte(first) && rest.iter().all(|&b| is_name_byte(b)),
        None => false,
    }
}

/// First byte of a name: ASCII letter
#[inline]
pub fn is_name_start_byte(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Subsequent name bytes: ASCII letter, digit, dot or hyphen
#[inline]
pub fn is_name_byte(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-')
}
