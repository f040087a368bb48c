//! Test utilities and fixtures for the Mauka string matcher.
//!
//! Strategies draw from a three-letter alphabet so random patterns actually
//! occur in random texts, often overlapping, which is where the shift rules
//! and failure links get exercised.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Alphabet used by the small-alphabet strategies.
const SMALL_ALPHABET: &[u8] = b"abc";

/// Longest generated pattern.
const MAX_PATTERN_LENGTH: usize = 6;

/// Longest generated text.
const MAX_TEXT_LENGTH: usize = 60;

fn small_alphabet_symbol() -> impl Strategy<Value = u8> {
    proptest::sample::select(SMALL_ALPHABET)
}

/// Non-empty patterns over `abc`.
pub fn small_alphabet_pattern() -> BoxedStrategy<Vec<u8>> {
    proptest::collection::vec(small_alphabet_symbol(), 1..=MAX_PATTERN_LENGTH).boxed()
}

/// Texts over `abc`, possibly empty.
pub fn small_alphabet_text() -> BoxedStrategy<Vec<u8>> {
    proptest::collection::vec(small_alphabet_symbol(), 0..=MAX_TEXT_LENGTH).boxed()
}

/// Between one and five non-empty patterns over `abc`.
pub fn small_alphabet_pattern_set() -> BoxedStrategy<Vec<Vec<u8>>> {
    proptest::collection::vec(small_alphabet_pattern(), 1..=5).boxed()
}

/// Short strings over a few Cyrillic and Latin letters, as `char` symbols.
pub fn unicode_text(max_len: usize) -> BoxedStrategy<Vec<char>> {
    proptest::collection::vec(proptest::sample::select(vec!['д', 'у', 'б', 'a']), 0..=max_len)
        .boxed()
}

/// Test fixture for tests that write configuration files.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write a file with the given name inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        name: &str,
        contents: C,
    ) -> std::io::Result<std::path::PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
