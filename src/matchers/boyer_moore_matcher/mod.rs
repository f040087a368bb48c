// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore Pattern Matcher for efficient string searching.
//!
//! This module provides an implementation of the Boyer-Moore string search
//! algorithm, which is particularly efficient for longer patterns over large
//! alphabets. Two shift strategies are available:
//!
//! - [`Heuristic::BadCharacter`]: shift by the rightmost occurrence of the
//!   mismatched text symbol
//! - [`Heuristic::BadCharacterGoodSuffix`]: take the larger of the bad
//!   character shift and the good suffix shift
//!
//! # Example
//!
//! ```
//! use mauka_match_lib::matchers::boyer_moore_matcher::{BoyerMooreMatcher, Heuristic, MatcherOptions};
//!
//! let matcher = BoyerMooreMatcher::new(b"needle").unwrap();
//! let text = b"Finding a needle in a haystack is hard, but finding another needle is easier.";
//! let matches = matcher.find_all(text).collect::<Vec<_>>();
//! assert_eq!(matches, vec![10, 60]);
//!
//! let options = MatcherOptions::new().heuristic(Heuristic::BadCharacter);
//! let matcher = BoyerMooreMatcher::with_options(b"needle", options).unwrap();
//! assert_eq!(matcher.search(text).matches, 2);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m + σ) where m is the pattern length and σ is the alphabet size
//! - Space complexity: O(m + σ)
//! - Best case: O(n/m) comparisons (where n is the text length)
//! - Worst case: O(n*m) comparisons
//!
//! Both variants try every alignment up to and including `n - m`.

mod matcher;
mod preprocess;
mod tables;

#[cfg(test)]
mod tests;

pub use matcher::{
    boyer_moore_search, boyer_moore_suffix_search, BoyerMooreMatcher, Heuristic, MatchIterator,
    MatcherOptions, DEFAULT_ALPHABET_SIZE, MAX_PATTERN_LENGTH,
};
pub use preprocess::PreprocessedPattern;
pub use tables::{BadCharTable, GoodSuffixTable};
