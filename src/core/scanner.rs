//! SIMD-accelerated reference scanning using memchr
//!
//! The scanner walks raw UTF-8 bytes. Every position it stops at is either
//! an ASCII byte or the end of input, so positions are always valid `str`
//! boundaries for the caller.

use memchr::memchr;

use super::reference::{is_name_byte, is_name_start_byte};

/// Values at or above this are not code points; accumulation clamps here.
pub const CODE_POINT_LIMIT: u32 = 0x11_0000;

/// A run of digits read by [`Scanner::read_digits`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    /// Number of digit bytes consumed
    pub len: usize,
    /// Accumulated value, clamped to [`CODE_POINT_LIMIT`]
    pub value: u32,
}

/// Byte scanner for character reference tokens
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the current position
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Peek at current byte without advancing
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance by n bytes
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consume `byte` if it is next
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Find next reference start '&' using SIMD
    #[inline]
    pub fn find_reference_start(&self) -> Option<usize> {
        memchr(b'&', &self.input[self.pos..]).map(|i| self.pos + i)
    }

    /// Read a reference name: ASCII letter, then letters/digits/dots/hyphens.
    ///
    /// Leaves the position untouched when no name starts here.
    pub fn read_name(&mut self) -> Option<&'a [u8]> {
        let start = self.pos;
        match self.input.get(start) {
            Some(&b) if is_name_start_byte(b) => {}
            _ => return None,
        }

        self.pos += 1;
        while self.pos < self.input.len() && is_name_byte(self.input[self.pos]) {
            self.pos += 1;
        }

        Some(&self.input[start..self.pos])
    }

    /// Read decimal (radix 10) or hexadecimal (radix 16) digits.
    ///
    /// Consumes the whole run however long it is. The value saturates at
    /// [`CODE_POINT_LIMIT`], so oversized references still end at the right
    /// byte and never overflow.
    pub fn read_digits(&mut self, radix: u32) -> Digits {
        let start = self.pos;
        let mut value: u32 = 0;

        while let Some(digit) = self.peek().and_then(|b| (b as char).to_digit(radix)) {
            value = (value * radix + digit).min(CODE_POINT_LIMIT);
            self.pos += 1;
        }

        Digits {
            len: self.pos - start,
            value,
        }
    }
}
