// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Scanning a text with a built automaton.

use serde::Serialize;

use super::automaton::Automaton;
use super::node::ROOT;
use crate::matchers::Symbol;

/// One occurrence of one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AutomatonMatch {
    /// Start position of the occurrence in the text
    pub position: usize,

    /// Identifier of the pattern that occurred
    pub pattern_id: usize,

    /// Length of the pattern in symbols
    pub length: usize,
}

impl AutomatonMatch {
    /// Position one past the last symbol of the occurrence.
    pub fn end(&self) -> usize {
        self.position + self.length
    }
}

impl<S: Symbol> Automaton<S> {
    /// Reports every occurrence of every pattern.
    ///
    /// Matches come out ordered by ending position; matches ending at the
    /// same position come out longest first, following the output closure.
    pub fn search(&self, text: &[S]) -> Vec<AutomatonMatch> {
        let mut matches = Vec::new();
        self.scan(text, |m| matches.push(m));
        matches
    }

    /// Counts occurrences of all patterns without collecting them.
    pub fn count(&self, text: &[S]) -> usize {
        let mut count = 0;
        self.scan(text, |_| count += 1);
        count
    }

    fn scan<F: FnMut(AutomatonMatch)>(&self, text: &[S], mut on_match: F) {
        let mut current = ROOT;
        for (i, &symbol) in text.iter().enumerate() {
            current = self.step(current, symbol);
            for &pattern_id in &self.node(current).outputs {
                let length = self.pattern(pattern_id).len();
                on_match(AutomatonMatch {
                    position: i + 1 - length,
                    pattern_id,
                    length,
                });
            }
        }
    }
}

/// Reports every occurrence of every pattern of `automaton` in `text`.
pub fn automaton_search<S: Symbol>(text: &[S], automaton: &Automaton<S>) -> Vec<AutomatonMatch> {
    automaton.search(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::build_automaton;

    fn resolved<'a>(automaton: &'a Automaton<u8>, text: &[u8]) -> Vec<(usize, &'a [u8])> {
        automaton_search(text, automaton)
            .into_iter()
            .map(|m| (m.position, automaton.pattern(m.pattern_id)))
            .collect()
    }

    #[test]
    fn test_ushers() {
        let automaton = build_automaton(&["he", "she", "his", "hers"]).unwrap();
        assert_eq!(
            resolved(&automaton, b"ushers"),
            vec![
                (1, b"she".as_slice()),
                (2, b"he".as_slice()),
                (2, b"hers".as_slice())
            ]
        );
    }

    #[test]
    fn test_overlapping_and_nested() {
        let automaton = build_automaton(&["a", "aa", "aaa"]).unwrap();
        let matches = automaton.search(b"aaa");
        let pairs: Vec<(usize, usize)> = matches.iter().map(|m| (m.position, m.pattern_id)).collect();
        assert_eq!(
            pairs,
            vec![(0, 0), (0, 1), (1, 0), (0, 2), (1, 1), (2, 0)]
        );
        assert_eq!(automaton.count(b"aaa"), 6);
        assert_eq!(matches[3].end(), 3);
    }

    #[test]
    fn test_failure_chain_on_mismatch() {
        let automaton = build_automaton(&["abcd", "bce"]).unwrap();
        assert_eq!(resolved(&automaton, b"abce"), vec![(1, b"bce".as_slice())]);
    }

    #[test]
    fn test_unicode_symbols() {
        let patterns: Vec<Vec<char>> = ["дуб", "уб"].iter().map(|p| p.chars().collect()).collect();
        let automaton = build_automaton(&patterns).unwrap();
        let text: Vec<char> = "дубы".chars().collect();
        let pairs: Vec<(usize, usize)> = automaton
            .search(&text)
            .iter()
            .map(|m| (m.position, m.pattern_id))
            .collect();
        assert_eq!(pairs, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_empty_text() {
        let automaton = build_automaton(&["x"]).unwrap();
        assert!(automaton_search(b"", &automaton).is_empty());
    }
}
