// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Prefix table (prefix function) construction.

use std::ops::Index;

use crate::matchers::{ensure_pattern, Result, Symbol};

/// Longest proper prefix-suffix lengths for every prefix of a pattern.
///
/// `table[i]` is the length of the longest proper prefix of
/// `pattern[0..=i]` that is also a suffix of it, so `table[0] == 0` and
/// `table[i] <= i` always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    lps: Vec<usize>,
}

impl PrefixTable {
    /// Builds the table in O(m).
    ///
    /// # Errors
    ///
    /// Returns [`crate::matchers::SearchError::InvalidPattern`] if the
    /// pattern is empty.
    pub fn new<S: Symbol>(pattern: &[S]) -> Result<Self> {
        ensure_pattern(pattern)?;

        let mut lps = vec![0; pattern.len()];
        let mut prefix_len = 0;
        for i in 1..pattern.len() {
            while prefix_len > 0 && pattern[i] != pattern[prefix_len] {
                prefix_len = lps[prefix_len - 1];
            }
            if pattern[i] == pattern[prefix_len] {
                prefix_len += 1;
            }
            lps[i] = prefix_len;
        }

        tracing::debug!(pattern_len = pattern.len(), "built prefix table");
        Ok(Self { lps })
    }

    /// Number of entries, equal to the pattern length.
    pub fn len(&self) -> usize {
        self.lps.len()
    }

    /// Always `false` for a successfully built table.
    pub fn is_empty(&self) -> bool {
        self.lps.is_empty()
    }

    /// Raw table values.
    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }
}

impl Index<usize> for PrefixTable {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.lps[index]
    }
}

/// Computes the prefix table of `pattern`.
///
/// # Errors
///
/// Returns [`crate::matchers::SearchError::InvalidPattern`] if the pattern
/// is empty.
pub fn build_prefix_table<S: Symbol>(pattern: &[S]) -> Result<PrefixTable> {
    PrefixTable::new(pattern)
}
