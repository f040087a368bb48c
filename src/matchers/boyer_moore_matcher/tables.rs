// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tables for the Boyer-Moore string matching algorithm.
//!
//! This module contains the lookup tables used by the Boyer-Moore algorithm:
//!
//! 1. Bad Character Table: the last index of every symbol in the pattern,
//!    used to line the mismatched text symbol up with its rightmost
//!    occurrence in the pattern.
//!
//! 2. Good Suffix Table: for every mismatch position, the shift that lines
//!    the already matched suffix up with its next occurrence in the pattern
//!    (or with the longest pattern prefix that is also a suffix).
//!
//! Both tables are built once per pattern and never change afterwards.

use crate::matchers::Symbol;

/// Last occurrence index of each symbol bucket in the pattern.
///
/// Symbols are bucketed by `code % alphabet_size`. When several pattern
/// symbols share a bucket the table keeps the largest index, which can only
/// make shifts shorter, never skip a real occurrence.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    /// Last index per bucket, -1 if no pattern symbol falls in it
    last: Vec<isize>,
}

impl BadCharTable {
    /// Creates a new bad character table for the given pattern.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to create the table for.
    /// * `alphabet_size` - Number of buckets symbols are reduced into.
    pub fn new<S: Symbol>(pattern: &[S], alphabet_size: usize) -> Self {
        let mut last = vec![-1; alphabet_size];
        for (i, symbol) in pattern.iter().enumerate() {
            last[bucket(*symbol, alphabet_size)] = i as isize;
        }
        Self { last }
    }

    /// Number of buckets in the table.
    pub fn alphabet_size(&self) -> usize {
        self.last.len()
    }

    /// Last pattern index of `symbol`, or -1 if it does not occur.
    pub fn last_index<S: Symbol>(&self, symbol: S) -> isize {
        self.last[bucket(symbol, self.last.len())]
    }

    /// Shift after a mismatch against `symbol` at pattern index `pos`.
    ///
    /// Never less than 1.
    pub fn mismatch_shift<S: Symbol>(&self, symbol: S, pos: usize) -> usize {
        let shift = pos as isize - self.last_index(symbol);
        shift.max(1) as usize
    }

    /// Shift after a full match, given the text symbol right after the
    /// matched window.
    pub fn window_shift<S: Symbol>(&self, next: S, pattern_len: usize) -> usize {
        (pattern_len as isize - self.last_index(next)) as usize
    }
}

#[inline]
fn bucket<S: Symbol>(symbol: S, alphabet_size: usize) -> usize {
    symbol.code() as usize % alphabet_size
}

/// Good suffix shifts for every pattern position.
#[derive(Debug, Clone)]
pub struct GoodSuffixTable {
    /// Shift distances for each position in the pattern
    shift: Vec<usize>,
    /// Longest suffix of `pattern[..=i]` that is also a pattern suffix
    suffix: Vec<usize>,
}

impl GoodSuffixTable {
    /// Creates a new good suffix table for the given, non-empty pattern.
    pub fn new<S: Symbol>(pattern: &[S]) -> Self {
        let suffix = Self::compute_suffixes(pattern);
        let shift = Self::compute_shift(&suffix);
        Self { shift, suffix }
    }

    /// Computes the suffix lengths with a single right-to-left sweep.
    ///
    /// `[g, f]` is the rightmost window known to match a suffix of the
    /// pattern; positions inside it reuse earlier results when possible.
    fn compute_suffixes<S: Symbol>(pattern: &[S]) -> Vec<usize> {
        let m = pattern.len();
        let mut suffix = vec![0; m];
        if m == 0 {
            return suffix;
        }
        suffix[m - 1] = m;

        let last = m as isize - 1;
        let mut g = last;
        let mut f = last;
        for i in (0..last).rev() {
            let mirrored = (i + last - f) as usize;
            if i > g && (suffix[mirrored] as isize) < i - g {
                suffix[i as usize] = suffix[mirrored];
            } else {
                g = g.min(i);
                f = i;
                while g >= 0 && pattern[g as usize] == pattern[(g + last - f) as usize] {
                    g -= 1;
                }
                suffix[i as usize] = (f - g) as usize;
            }
        }
        suffix
    }

    /// Derives the shift table from the suffix lengths in three passes.
    fn compute_shift(suffix: &[usize]) -> Vec<usize> {
        let m = suffix.len();

        // No recurrence of the matched suffix: shift past the whole pattern.
        let mut shift = vec![m; m];

        // A pattern prefix is also a suffix. The fill cursor carries over
        // between iterations so each entry takes the longest such prefix.
        let mut j = 0;
        for i in (0..m).rev() {
            if suffix[i] == i + 1 {
                while j < m - 1 - i {
                    if shift[j] == m {
                        shift[j] = m - 1 - i;
                    }
                    j += 1;
                }
            }
        }

        // The matched suffix recurs inside the pattern.
        for i in 0..m.saturating_sub(1) {
            shift[m - 1 - suffix[i]] = m - 1 - i;
        }

        shift
    }

    /// Gets the shift distance for a mismatch at `pos`.
    pub fn get_shift(&self, pos: usize) -> usize {
        self.shift[pos]
    }

    /// All shift distances, one per pattern position.
    pub fn shifts(&self) -> &[usize] {
        &self.shift
    }

    /// All suffix lengths, one per pattern position.
    pub fn suffixes(&self) -> &[usize] {
        &self.suffix
    }
}
