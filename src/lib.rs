//! Mauka string matching library.
//!
//! This library contains exact string matching engines (Knuth-Morris-Pratt,
//! Boyer-Moore, Rabin-Karp and the Aho-Corasick multi-pattern automaton),
//! a configuration-driven search facade, and the configuration and error
//! layers shared with the `mauka_match` binary.
//!
//! # Architecture
//!
//! - Matchers preprocess their pattern(s) once into immutable tables
//! - Scans never fail and never mutate shared state
//! - Built matchers are `Send + Sync` and can be shared across threads
//! - Every preprocessing failure is an explicit, typed error

pub mod config;
pub mod engine;
pub mod error;
pub mod matchers;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and loads configuration from the
/// optional file plus `MAUKA_MATCH__*` environment variables, falling back
/// to defaults when the file is missing.
pub fn init(config_path: Option<&std::path::Path>) -> error::MaukaResult<config::MatchConfig> {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));

    let loader = config::ConfigLoader::new(config_path, config::ENV_PREFIX);
    Ok(loader.load_or_default()?)
}
