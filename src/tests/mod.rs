//! Test modules for the Mauka string matcher.
//!
//! This module contains the crate-wide testing infrastructure:
//! - Property-based tests checking every matcher against the naive oracle
//! - Configuration loading and validation tests
//! - Error conversion and reporting tests
//! - Shared proptest strategies

pub mod error_tests;
pub mod matcher_properties;
pub mod test_utils;
