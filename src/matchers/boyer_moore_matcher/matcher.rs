// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore string matching algorithm implementation.
//!
//! This module contains the matcher itself and the iterator that walks the
//! text window by window, yielding every occurrence of the pattern.

use std::iter::FusedIterator;

use super::preprocess::PreprocessedPattern;
use crate::matchers::{Result, SearchStats, Symbol};

/// Default number of buckets for the bad character table.
pub const DEFAULT_ALPHABET_SIZE: usize = 256;

/// Maximum allowed pattern length to prevent excessive memory usage
pub const MAX_PATTERN_LENGTH: usize = 1024 * 32;

/// Which shift rules the scan combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Bad character rule alone
    BadCharacter,

    /// Maximum of the bad character and good suffix rules
    #[default]
    BadCharacterGoodSuffix,
}

/// Options for configuring the Boyer-Moore matcher behavior.
#[derive(Debug, Clone)]
pub struct MatcherOptions {
    /// Shift rules used on mismatch and after a match
    pub heuristic: Heuristic,

    /// Number of buckets symbols are reduced into for the bad character table
    pub alphabet_size: usize,

    /// Longest pattern accepted by preprocessing
    pub max_pattern_length: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            alphabet_size: DEFAULT_ALPHABET_SIZE,
            max_pattern_length: MAX_PATTERN_LENGTH,
        }
    }
}

impl MatcherOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shift rules.
    pub fn heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets the number of bad character buckets.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    pub fn alphabet_size(mut self, value: usize) -> Self {
        if value == 0 {
            panic!("Alphabet size must be greater than 0");
        }
        self.alphabet_size = value;
        self
    }

    /// Sets the longest accepted pattern.
    pub fn max_pattern_length(mut self, value: usize) -> Self {
        self.max_pattern_length = value;
        self
    }
}

/// Iterator over match positions in a text.
///
/// Comparisons spent so far are available through
/// [`MatchIterator::comparisons`], so a full pass doubles as a search.
#[derive(Debug)]
pub struct MatchIterator<'a, S: Symbol> {
    /// The matcher instance
    matcher: &'a BoyerMooreMatcher<S>,

    /// The text being searched
    text: &'a [S],

    /// Alignment of the pattern's first symbol in the text
    shift: usize,

    /// Symbol probes spent so far
    comparisons: usize,
}

impl<S: Symbol> MatchIterator<'_, S> {
    /// Symbol probes spent so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

impl<S: Symbol> Iterator for MatchIterator<'_, S> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.matcher.pattern.pattern_len();
        if m > self.text.len() {
            return None;
        }

        // The last valid alignment is included.
        while self.shift <= self.text.len() - m {
            let window = self.matcher.probe_window(self.text, self.shift);
            self.comparisons += window.comparisons;
            let start = self.shift;
            self.shift += window.advance;
            if window.matched {
                return Some(start);
            }
        }
        None
    }
}

impl<S: Symbol> FusedIterator for MatchIterator<'_, S> {}

/// What happened at one alignment of the pattern.
struct Window {
    matched: bool,
    advance: usize,
    comparisons: usize,
}

/// Boyer-Moore pattern matcher for efficient string searching.
#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher<S: Symbol> {
    /// The preprocessed pattern
    pattern: PreprocessedPattern<S>,

    /// Matcher options
    options: MatcherOptions,
}

impl<S: Symbol> BoyerMooreMatcher<S> {
    /// Creates a new Boyer-Moore matcher with default options, using both
    /// shift rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or too long.
    pub fn new(pattern: &[S]) -> Result<Self> {
        Self::with_options(pattern, MatcherOptions::default())
    }

    /// Creates a new Boyer-Moore matcher with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or too long.
    pub fn with_options(pattern: &[S], options: MatcherOptions) -> Result<Self> {
        let pattern = PreprocessedPattern::new(pattern, &options)?;
        Ok(Self { pattern, options })
    }

    /// The options this matcher was built with.
    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    /// Counts occurrences of the pattern and the comparisons spent.
    ///
    /// Every successful symbol comparison is counted. With the good suffix
    /// rule enabled the probe that ends each window, mismatch or completed
    /// match, is counted as well.
    pub fn search(&self, text: &[S]) -> SearchStats {
        let mut iter = self.find_all(text);
        let matches = iter.by_ref().count();
        SearchStats::new(matches, iter.comparisons())
    }

    /// Finds the first occurrence of the pattern in the text.
    pub fn find_first(&self, text: &[S]) -> Option<usize> {
        self.find_all(text).next()
    }

    /// Returns an iterator over all occurrences of the pattern in the text,
    /// overlapping ones included.
    pub fn find_all<'a>(&'a self, text: &'a [S]) -> MatchIterator<'a, S> {
        MatchIterator {
            matcher: self,
            text,
            shift: 0,
            comparisons: 0,
        }
    }

    /// Compares the pattern against `text[shift..shift + m]` right to left
    /// and decides how far to move.
    fn probe_window(&self, text: &[S], shift: usize) -> Window {
        let pattern = &self.pattern.pattern;
        let m = pattern.len();
        let bad_char = &self.pattern.bad_char_table;

        let mut comparisons = 0;
        let mut remaining = m;
        while remaining > 0 && pattern[remaining - 1] == text[shift + remaining - 1] {
            comparisons += 1;
            remaining -= 1;
        }

        match &self.pattern.good_suffix_table {
            None => {
                let advance = if remaining == 0 {
                    match text.get(shift + m) {
                        Some(&next) => bad_char.window_shift(next, m),
                        None => 1,
                    }
                } else {
                    let pos = remaining - 1;
                    bad_char.mismatch_shift(text[shift + pos], pos)
                };
                Window {
                    matched: remaining == 0,
                    advance,
                    comparisons,
                }
            }
            Some(good_suffix) => {
                let advance = if remaining == 0 {
                    good_suffix.get_shift(0)
                } else {
                    let pos = remaining - 1;
                    let bad_char_shift = bad_char.mismatch_shift(text[shift + pos], pos);
                    bad_char_shift.max(good_suffix.get_shift(pos))
                };
                Window {
                    matched: remaining == 0,
                    advance,
                    comparisons: comparisons + 1,
                }
            }
        }
    }
}

/// Counts occurrences of `pattern` in `text` with the bad character rule only.
///
/// No pattern length cap applies here; [`MAX_PATTERN_LENGTH`] only bounds
/// matchers built with default [`MatcherOptions`].
///
/// # Errors
///
/// Returns an error if the pattern is empty.
pub fn boyer_moore_search<S: Symbol>(text: &[S], pattern: &[S]) -> Result<SearchStats> {
    let options = MatcherOptions::new()
        .heuristic(Heuristic::BadCharacter)
        .max_pattern_length(usize::MAX);
    Ok(BoyerMooreMatcher::with_options(pattern, options)?.search(text))
}

/// Counts occurrences of `pattern` in `text` with both the bad character and
/// good suffix rules.
///
/// Returns `(0, 0)` right away when either input is empty. Patterns of any
/// length are accepted.
pub fn boyer_moore_suffix_search<S: Symbol>(text: &[S], pattern: &[S]) -> Result<SearchStats> {
    if text.is_empty() || pattern.is_empty() {
        return Ok(SearchStats::default());
    }
    let options = MatcherOptions::new().max_pattern_length(usize::MAX);
    Ok(BoyerMooreMatcher::with_options(pattern, options)?.search(text))
}
