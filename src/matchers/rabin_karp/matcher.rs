// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rabin-Karp scan over a text.

use super::rolling_hash::{RollingHash, RollingHashParams};
use crate::matchers::{ensure_pattern, Result, SearchStats, Symbol};

/// Rabin-Karp matcher for a fixed pattern.
#[derive(Debug, Clone)]
pub struct RabinKarpMatcher<S: Symbol> {
    /// The pattern being searched for
    pattern: Vec<S>,

    /// Hash polynomial parameters
    params: RollingHashParams,

    /// Hash of the whole pattern
    pattern_hash: u64,
}

impl<S: Symbol> RabinKarpMatcher<S> {
    /// Creates a matcher with the default base and modulus.
    ///
    /// # Errors
    ///
    /// Returns [`crate::matchers::SearchError::InvalidPattern`] if the
    /// pattern is empty.
    pub fn new(pattern: &[S]) -> Result<Self> {
        Self::with_params(pattern, RollingHashParams::default())
    }

    /// Creates a matcher with explicit hash parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or the parameters are invalid.
    pub fn with_params(pattern: &[S], params: RollingHashParams) -> Result<Self> {
        ensure_pattern(pattern)?;
        params.validate()?;

        let pattern_hash =
            RollingHash::from_codes(params, pattern.len(), pattern.iter().map(|s| s.code()))
                .value();

        tracing::debug!(
            pattern_len = pattern.len(),
            base = params.base,
            modulus = params.modulus,
            "hashed Rabin-Karp pattern"
        );

        Ok(Self {
            pattern: pattern.to_vec(),
            params,
            pattern_hash,
        })
    }

    /// Hash parameters of this matcher.
    pub fn params(&self) -> RollingHashParams {
        self.params
    }

    /// Counts occurrences of the pattern.
    ///
    /// Comparisons are the symbol probes spent confirming windows whose hash
    /// equals the pattern hash.
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
        let n = text.len();
        if m > n {
            return 0;
        }

        let mut window =
            RollingHash::from_codes(self.params, m, text[..m].iter().map(|s| s.code()));
        let mut comparisons = 0;
        for start in 0..=n - m {
            if window.value() == self.pattern_hash {
                let (equal, probes) = self.verify(&text[start..start + m]);
                comparisons += probes;
                if equal {
                    on_match(start);
                }
            }
            if start < n - m {
                window.roll(text[start].code(), text[start + m].code());
            }
        }
        comparisons
    }

    /// Symbol-by-symbol confirmation of a candidate window.
    fn verify(&self, window: &[S]) -> (bool, usize) {
        let mut probes = 0;
        for (a, b) in self.pattern.iter().zip(window) {
            probes += 1;
            if a != b {
                return (false, probes);
            }
        }
        (true, probes)
    }
}

/// Counts occurrences of `pattern` in `text` with the given hash parameters.
///
/// # Errors
///
/// Returns an error if the pattern is empty or the parameters are invalid.
pub fn rabin_karp_search<S: Symbol>(
    text: &[S],
    pattern: &[S],
    base: u64,
    modulus: u64,
) -> Result<usize> {
    let params = RollingHashParams::new(base, modulus)?;
    Ok(RabinKarpMatcher::with_params(pattern, params)?.search(text).matches)
}
