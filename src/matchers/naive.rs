// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Brute-force matcher.
//!
//! Tries every alignment and compares left to right until the first
//! mismatch. It has no preprocessing, which makes it the reference the other
//! algorithms are checked against.

use super::{ensure_pattern, Result, SearchStats, Symbol};

/// Brute-force matcher over a fixed pattern.
#[derive(Debug, Clone)]
pub struct NaiveMatcher<S: Symbol> {
    pattern: Vec<S>,
}

impl<S: Symbol> NaiveMatcher<S> {
    /// Creates a matcher for `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`super::SearchError::InvalidPattern`] if the pattern is empty.
    pub fn new(pattern: &[S]) -> Result<Self> {
        ensure_pattern(pattern)?;
        Ok(Self {
            pattern: pattern.to_vec(),
        })
    }

    /// Counts occurrences of the pattern. Every symbol comparison, successful
    /// or not, is counted.
    pub fn search(&self, text: &[S]) -> SearchStats {
        let mut matches = 0;
        let comparisons = self.scan(text, |_| matches += 1);
        SearchStats::new(matches, comparisons)
    }

    /// Returns the start position of every occurrence, in increasing order.
    pub fn find_all(&self, text: &[S]) -> Vec<usize> {
        let mut positions = Vec::new();
        self.scan(text, |pos| positions.push(pos));
        positions
    }

    fn scan<F: FnMut(usize)>(&self, text: &[S], mut on_match: F) -> usize {
        let m = self.pattern.len();
        if m > text.len() {
            return 0;
        }

        let mut comparisons = 0;
        for start in 0..=text.len() - m {
            let mut matched = true;
            for (offset, &symbol) in self.pattern.iter().enumerate() {
                comparisons += 1;
                if text[start + offset] != symbol {
                    matched = false;
                    break;
                }
            }
            if matched {
                on_match(start);
            }
        }
        comparisons
    }
}

/// Counts occurrences of `pattern` in `text` by brute force.
///
/// # Errors
///
/// Returns [`super::SearchError::InvalidPattern`] if the pattern is empty.
pub fn naive_search<S: Symbol>(text: &[S], pattern: &[S]) -> Result<SearchStats> {
    Ok(NaiveMatcher::new(pattern)?.search(text))
}
