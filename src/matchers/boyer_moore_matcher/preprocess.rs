// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pattern preprocessing for the Boyer-Moore algorithm.
//!
//! The preprocessing step analyzes the pattern once and produces the lookup
//! tables the scan consults on every mismatch. Nothing here depends on the
//! text, so a preprocessed pattern can be shared by any number of scans.

use super::matcher::{Heuristic, MatcherOptions};
use super::tables::{BadCharTable, GoodSuffixTable};
use crate::matchers::{ensure_pattern, Result, SearchError, Symbol};

/// Result of the preprocessing step containing all necessary lookup tables.
#[derive(Debug, Clone)]
pub struct PreprocessedPattern<S: Symbol> {
    /// The pattern being searched for
    pub pattern: Vec<S>,

    /// Bad character rule table
    pub bad_char_table: BadCharTable,

    /// Good suffix rule table, only built when the heuristic uses it
    pub good_suffix_table: Option<GoodSuffixTable>,
}

impl<S: Symbol> PreprocessedPattern<S> {
    /// Preprocesses a pattern for use in the Boyer-Moore algorithm.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or exceeds the maximum
    /// allowed length.
    pub fn new(pattern: &[S], options: &MatcherOptions) -> Result<Self> {
        ensure_pattern(pattern)?;

        if pattern.len() > options.max_pattern_length {
            return Err(SearchError::PatternTooLarge {
                length: pattern.len(),
                max: options.max_pattern_length,
            });
        }

        let bad_char_table = BadCharTable::new(pattern, options.alphabet_size);
        let good_suffix_table = match options.heuristic {
            Heuristic::BadCharacter => None,
            Heuristic::BadCharacterGoodSuffix => Some(GoodSuffixTable::new(pattern)),
        };

        tracing::debug!(
            pattern_len = pattern.len(),
            alphabet_size = options.alphabet_size,
            heuristic = ?options.heuristic,
            "preprocessed Boyer-Moore pattern"
        );

        Ok(Self {
            pattern: pattern.to_vec(),
            bad_char_table,
            good_suffix_table,
        })
    }

    /// The length of the pattern in symbols.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }
}
