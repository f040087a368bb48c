// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Alphabet abstraction shared by every matcher.
//!
//! Texts and patterns are plain slices of symbols. A symbol only needs
//! equality, hashing (for automaton edges) and a numeric code, which is used
//! to bucket symbols in the bad-character table and to feed the rolling hash.

use std::fmt::Debug;
use std::hash::Hash;

/// A single unit of a text or pattern.
pub trait Symbol: Copy + Eq + Hash + Debug + Send + Sync {
    /// Numeric code of the symbol.
    fn code(self) -> u32;
}

impl Symbol for u8 {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}

impl Symbol for u16 {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}

impl Symbol for u32 {
    #[inline]
    fn code(self) -> u32 {
        self
    }
}

impl Symbol for char {
    #[inline]
    fn code(self) -> u32 {
        u32::from(self)
    }
}

/// Splits a string into Unicode scalar values, the symbol unit used when
/// matching positions should count characters rather than bytes.
pub fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(b'a'.code(), 97);
        assert_eq!('a'.code(), 97);
        assert_eq!('é'.code(), 0xE9);
        assert_eq!(0x1F600u32.code(), 0x1F600);
    }

    #[test]
    fn test_chars_counts_scalar_values() {
        let symbols = chars("café");
        assert_eq!(symbols.len(), 4);
        assert_eq!(symbols[3], 'é');
    }
}
