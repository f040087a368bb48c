//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, MaukaError, MaukaResult,
    TracingErrorReporter,
};
use crate::matchers::{kmp_search, SearchError};

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = MaukaError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let mauka_error = MaukaError::Io(io_error);

    let error_string = format!("{mauka_error}");
    assert!(error_string.contains("file not found"));
}

/// Test that search errors convert with `?`.
#[test]
fn test_search_error_conversion() {
    fn run() -> MaukaResult<usize> {
        Ok(kmp_search::<u8>(b"abc", b"")?.matches)
    }

    let err = run().unwrap_err();
    assert!(matches!(err, MaukaError::Search(SearchError::InvalidPattern(_))));
    assert_eq!(
        err.to_string(),
        "Search error: Invalid pattern: pattern cannot be empty"
    );
}

/// Test that configuration errors convert with `?`.
#[test]
fn test_config_error_conversion() {
    let err: MaukaError =
        ConfigError::ValidationError("worker_threads must be greater than 0".into()).into();
    assert_eq!(
        err.to_string(),
        "Configuration error: Configuration validation error: worker_threads must be greater than 0"
    );
}

/// Test the pattern-size message.
#[test]
fn test_pattern_too_large_message() {
    let err = SearchError::PatternTooLarge {
        length: 10,
        max: 4,
    };
    assert_eq!(
        err.to_string(),
        "Pattern of 10 symbols exceeds maximum allowed length of 4"
    );
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
///
/// The reporter can be installed only once per process, so this is the only
/// test that installs one.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    assert!(set_error_reporter(reporter.clone()));
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));

    let error = MaukaError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = MaukaError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
