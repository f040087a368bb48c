// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! KMP scan over a text.

use super::prefix_table::PrefixTable;
use crate::matchers::{Result, SearchStats, Symbol};

/// Knuth-Morris-Pratt matcher for a fixed pattern.
#[derive(Debug, Clone)]
pub struct KmpMatcher<S: Symbol> {
    /// The pattern being searched for
    pattern: Vec<S>,

    /// Prefix table of the pattern
    table: PrefixTable,
}

impl<S: Symbol> KmpMatcher<S> {
    /// Creates a matcher, building the prefix table up front.
    ///
    /// # Errors
    ///
    /// Returns [`crate::matchers::SearchError::InvalidPattern`] if the
    /// pattern is empty.
    pub fn new(pattern: &[S]) -> Result<Self> {
        let table = PrefixTable::new(pattern)?;
        Ok(Self {
            pattern: pattern.to_vec(),
            table,
        })
    }

    /// The prefix table backing this matcher.
    pub fn table(&self) -> &PrefixTable {
        &self.table
    }

    /// Counts occurrences of the pattern, overlapping ones included.
    ///
    /// Comparisons are counted once per table fallback, once per successful
    /// symbol match and once per completed occurrence.
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

    /// Returns the start of the first occurrence.
    pub fn find_first(&self, text: &[S]) -> Option<usize> {
        self.find_all(text).into_iter().next()
    }

    fn scan<F: FnMut(usize)>(&self, text: &[S], mut on_match: F) -> usize {
        let m = self.pattern.len();
        if m > text.len() {
            return 0;
        }

        let mut comparisons = 0;
        let mut compare_index = 0;
        for (i, &symbol) in text.iter().enumerate() {
            while compare_index > 0 && symbol != self.pattern[compare_index] {
                compare_index = self.table[compare_index - 1];
                comparisons += 1;
            }

            if symbol == self.pattern[compare_index] {
                compare_index += 1;
                comparisons += 1;
            }

            if compare_index == m {
                comparisons += 1;
                on_match(i + 1 - m);
                // Resume from the border so overlapping occurrences are found.
                compare_index = self.table[m - 1];
            }
        }
        comparisons
    }
}

/// Counts occurrences of `pattern` in `text` with KMP.
///
/// # Errors
///
/// Returns [`crate::matchers::SearchError::InvalidPattern`] if the pattern
/// is empty.
pub fn kmp_search<S: Symbol>(text: &[S], pattern: &[S]) -> Result<SearchStats> {
    Ok(KmpMatcher::new(pattern)?.search(text))
}
