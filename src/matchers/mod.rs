// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact string matching algorithms.
//!
//! This module groups four families of exact matchers that share one
//! contract: tables are built once from the pattern(s), are immutable
//! afterwards, and can be reused across any number of texts and threads.
//!
//! - [`kmp`]: prefix-function (Knuth-Morris-Pratt) matcher
//! - [`boyer_moore_matcher`]: Boyer-Moore with bad-character and good-suffix rules
//! - [`rabin_karp`]: polynomial rolling hash with collision verification
//! - [`aho_corasick`]: multi-pattern automaton with failure links
//! - [`naive`]: brute-force double loop, used as the correctness oracle
//!
//! Single-pattern matchers report a [`SearchStats`]: the number of matches
//! plus the number of symbol probes the algorithm spent. The probe counts
//! follow one convention per algorithm and are meant for comparing
//! algorithms against each other on the same input.
//!
//! # Example
//!
//! ```
//! use mauka_match_lib::matchers::{automaton_search, build_automaton, kmp_search, Automaton};
//!
//! let stats = kmp_search(b"abcabcabc", b"abc").unwrap();
//! assert_eq!(stats.matches, 3);
//!
//! let automaton: Automaton<u8> = build_automaton(&["he", "she", "his", "hers"]).unwrap();
//! let found: Vec<(usize, usize)> = automaton_search(b"ushers", &automaton)
//!     .iter()
//!     .map(|m| (m.position, m.pattern_id))
//!     .collect();
//! assert_eq!(found, vec![(1, 1), (2, 0), (2, 3)]);
//! ```

use serde::Serialize;

pub mod aho_corasick;
pub mod boyer_moore_matcher;
mod error;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;
mod symbol;

pub use aho_corasick::{automaton_search, build_automaton, Automaton, AutomatonMatch};
pub use boyer_moore_matcher::{
    boyer_moore_search, boyer_moore_suffix_search, BoyerMooreMatcher, Heuristic, MatcherOptions,
};
pub use error::{Result, SearchError};
pub use kmp::{build_prefix_table, kmp_search, KmpMatcher, PrefixTable};
pub use naive::{naive_search, NaiveMatcher};
pub use rabin_karp::{rabin_karp_search, RabinKarpMatcher, RollingHashParams};
pub use symbol::{chars, Symbol};

/// Outcome of a single-pattern search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Number of occurrences found, overlapping ones included
    pub matches: usize,

    /// Number of symbol probes spent by the algorithm
    pub comparisons: usize,
}

impl SearchStats {
    /// Creates a new stats value.
    pub fn new(matches: usize, comparisons: usize) -> Self {
        Self {
            matches,
            comparisons,
        }
    }

    /// Returns `(matches, comparisons)`.
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.matches, self.comparisons)
    }
}

/// Rejects empty patterns, the one input no builder accepts.
pub(crate) fn ensure_pattern<S>(pattern: &[S]) -> Result<()> {
    if pattern.is_empty() {
        return Err(SearchError::empty_pattern());
    }
    Ok(())
}
