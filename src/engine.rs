//! Configuration-driven search facade.
//!
//! [`SearchEngine`] picks a matcher by [`SearchAlgorithm`], applies the
//! configured limits and table sizes, times each run, and fans multi-pattern
//! scans over many texts out to a bounded set of scoped worker threads that
//! share one automaton.

use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize, Serializer};
use tracing::info;

use crate::config::{ConfigResult, SearchConfig, Validate};
use crate::matchers::{
    ensure_pattern, Automaton, AutomatonMatch, BoyerMooreMatcher, Heuristic, KmpMatcher,
    MatcherOptions, NaiveMatcher, RabinKarpMatcher, Result, SearchError, SearchStats, Symbol,
};

/// Single-pattern algorithms the engine can run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// Brute-force double loop
    Naive,

    /// Knuth-Morris-Pratt
    Kmp,

    /// Boyer-Moore with the bad character rule alone
    BoyerMoore,

    /// Boyer-Moore with the bad character and good suffix rules
    #[default]
    BoyerMooreSuffix,

    /// Rabin-Karp rolling hash
    RabinKarp,
}

impl SearchAlgorithm {
    /// Every algorithm, in the order `compare` reports them.
    pub const ALL: [SearchAlgorithm; 5] = [
        SearchAlgorithm::Naive,
        SearchAlgorithm::Kmp,
        SearchAlgorithm::BoyerMoore,
        SearchAlgorithm::BoyerMooreSuffix,
        SearchAlgorithm::RabinKarp,
    ];

    /// Stable name used in configuration files and reports.
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Naive => "naive",
            SearchAlgorithm::Kmp => "kmp",
            SearchAlgorithm::BoyerMoore => "boyer-moore",
            SearchAlgorithm::BoyerMooreSuffix => "boyer-moore-suffix",
            SearchAlgorithm::RabinKarp => "rabin-karp",
        }
    }
}

impl Display for SearchAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one timed engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    /// Algorithm that produced the counts
    pub algorithm: SearchAlgorithm,

    /// Number of occurrences found
    pub matches: usize,

    /// Symbol probes spent, by the algorithm's own convention
    pub comparisons: usize,

    /// Wall time for preprocessing plus scanning
    #[serde(rename = "elapsed_us", serialize_with = "serialize_micros")]
    pub elapsed: Duration,
}

impl SearchReport {
    /// Match and comparison counts without the timing.
    pub fn stats(&self) -> SearchStats {
        SearchStats::new(self.matches, self.comparisons)
    }
}

fn serialize_micros<Z: Serializer>(
    elapsed: &Duration,
    serializer: Z,
) -> std::result::Result<Z::Ok, Z::Error> {
    serializer.serialize_u64(elapsed.as_micros() as u64)
}

/// Search facade built from a [`SearchConfig`].
///
/// The engine holds no per-search state; one instance can serve any number
/// of searches, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    /// Creates an engine from a configuration section.
    ///
    /// # Errors
    ///
    /// Returns the validation error if the configuration is invalid.
    pub fn from_config(config: &SearchConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
        })
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs one algorithm and reports counts and timing.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is empty or longer than the configured
    /// maximum.
    pub fn run<S: Symbol>(
        &self,
        algorithm: SearchAlgorithm,
        text: &[S],
        pattern: &[S],
    ) -> Result<SearchReport> {
        self.check_pattern(pattern)?;

        let start = Instant::now();
        let stats = match algorithm {
            SearchAlgorithm::Naive => NaiveMatcher::new(pattern)?.search(text),
            SearchAlgorithm::Kmp => KmpMatcher::new(pattern)?.search(text),
            SearchAlgorithm::BoyerMoore => BoyerMooreMatcher::with_options(
                pattern,
                self.matcher_options(Heuristic::BadCharacter),
            )?
            .search(text),
            SearchAlgorithm::BoyerMooreSuffix => BoyerMooreMatcher::with_options(
                pattern,
                self.matcher_options(Heuristic::BadCharacterGoodSuffix),
            )?
            .search(text),
            SearchAlgorithm::RabinKarp => {
                RabinKarpMatcher::with_params(pattern, self.config.rolling_hash)?.search(text)
            }
        };
        let elapsed = start.elapsed();

        info!(
            algorithm = %algorithm,
            text_len = text.len(),
            pattern_len = pattern.len(),
            matches = stats.matches,
            comparisons = stats.comparisons,
            elapsed_us = elapsed.as_micros() as u64,
            "search finished"
        );

        Ok(SearchReport {
            algorithm,
            matches: stats.matches,
            comparisons: stats.comparisons,
            elapsed,
        })
    }

    /// Runs the default algorithm.
    ///
    /// # Errors
    ///
    /// Same as [`SearchEngine::run`].
    pub fn run_default<S: Symbol>(&self, text: &[S], pattern: &[S]) -> Result<SearchReport> {
        self.run(self.config.default_algorithm, text, pattern)
    }

    /// Start positions of every occurrence, in increasing order.
    ///
    /// # Errors
    ///
    /// Same as [`SearchEngine::run`].
    pub fn positions<S: Symbol>(
        &self,
        algorithm: SearchAlgorithm,
        text: &[S],
        pattern: &[S],
    ) -> Result<Vec<usize>> {
        self.check_pattern(pattern)?;

        let positions = match algorithm {
            SearchAlgorithm::Naive => NaiveMatcher::new(pattern)?.find_all(text),
            SearchAlgorithm::Kmp => KmpMatcher::new(pattern)?.find_all(text),
            SearchAlgorithm::BoyerMoore => BoyerMooreMatcher::with_options(
                pattern,
                self.matcher_options(Heuristic::BadCharacter),
            )?
            .find_all(text)
            .collect(),
            SearchAlgorithm::BoyerMooreSuffix => BoyerMooreMatcher::with_options(
                pattern,
                self.matcher_options(Heuristic::BadCharacterGoodSuffix),
            )?
            .find_all(text)
            .collect(),
            SearchAlgorithm::RabinKarp => {
                RabinKarpMatcher::with_params(pattern, self.config.rolling_hash)?.find_all(text)
            }
        };
        Ok(positions)
    }

    /// Runs every algorithm on the same input, in [`SearchAlgorithm::ALL`]
    /// order.
    ///
    /// # Errors
    ///
    /// Same as [`SearchEngine::run`].
    pub fn compare<S: Symbol>(&self, text: &[S], pattern: &[S]) -> Result<Vec<SearchReport>> {
        SearchAlgorithm::ALL
            .iter()
            .map(|&algorithm| self.run(algorithm, text, pattern))
            .collect()
    }

    /// Builds an automaton after checking every pattern against the
    /// configured maximum length.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is empty or too long.
    pub fn build_automaton<S: Symbol, P: AsRef<[S]>>(
        &self,
        patterns: &[P],
    ) -> Result<Automaton<S>> {
        for pattern in patterns {
            self.check_length(pattern.as_ref())?;
        }
        Automaton::new(patterns)
    }

    /// Reports every occurrence of every pattern in one text.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is empty or too long.
    pub fn scan<S: Symbol, P: AsRef<[S]>>(
        &self,
        text: &[S],
        patterns: &[P],
    ) -> Result<Vec<AutomatonMatch>> {
        let automaton = self.build_automaton(patterns)?;
        Ok(automaton.search(text))
    }

    /// Scans many texts with one shared automaton.
    ///
    /// Results are returned in the order of `texts`, whatever the number of
    /// workers.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is empty or too long.
    pub fn scan_batch<S, T, P>(
        &self,
        texts: &[T],
        patterns: &[P],
    ) -> Result<Vec<Vec<AutomatonMatch>>>
    where
        S: Symbol,
        T: AsRef<[S]> + Sync,
        P: AsRef<[S]>,
    {
        let automaton = self.build_automaton(patterns)?;
        Ok(self.scan_texts(&automaton, texts))
    }

    /// Scans many texts with an already built automaton, splitting them into
    /// contiguous chunks over at most `worker_threads` scoped threads.
    pub fn scan_texts<S, T>(
        &self,
        automaton: &Automaton<S>,
        texts: &[T],
    ) -> Vec<Vec<AutomatonMatch>>
    where
        S: Symbol,
        T: AsRef<[S]> + Sync,
    {
        if texts.is_empty() {
            return Vec::new();
        }

        let workers = self.config.worker_threads.clamp(1, texts.len());
        let chunk_size = (texts.len() + workers - 1) / workers;
        let start = Instant::now();

        let results: Vec<Vec<AutomatonMatch>> = std::thread::scope(|scope| {
            let handles: Vec<_> = texts
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|text| automaton.search(text.as_ref()))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        });

        info!(
            texts = texts.len(),
            patterns = automaton.pattern_count(),
            workers,
            matches = results.iter().map(Vec::len).sum::<usize>(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "batch scan finished"
        );
        results
    }

    fn matcher_options(&self, heuristic: Heuristic) -> MatcherOptions {
        MatcherOptions::new()
            .heuristic(heuristic)
            .alphabet_size(self.config.alphabet_size)
            .max_pattern_length(self.config.max_pattern_length)
    }

    fn check_pattern<S>(&self, pattern: &[S]) -> Result<()> {
        ensure_pattern(pattern)?;
        self.check_length(pattern)
    }

    fn check_length<S>(&self, pattern: &[S]) -> Result<()> {
        if pattern.len() > self.config.max_pattern_length {
            return Err(SearchError::PatternTooLarge {
                length: pattern.len(),
                max: self.config.max_pattern_length,
            });
        }
        Ok(())
    }
}
