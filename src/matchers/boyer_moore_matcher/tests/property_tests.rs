// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for Boyer-Moore Pattern Matcher.

use proptest::prelude::*;

use crate::matchers::boyer_moore_matcher::{
    BoyerMooreMatcher, GoodSuffixTable, Heuristic, MatcherOptions,
};
use crate::matchers::NaiveMatcher;
use crate::tests::test_utils::{small_alphabet_pattern, small_alphabet_text};

// Strategy for generating options
fn options_strategy() -> impl Strategy<Value = MatcherOptions> {
    (
        prop_oneof![
            Just(Heuristic::BadCharacter),
            Just(Heuristic::BadCharacterGoodSuffix)
        ],
        1usize..=256,
    )
        .prop_map(|(heuristic, alphabet_size)| {
            MatcherOptions::new()
                .heuristic(heuristic)
                .alphabet_size(alphabet_size)
        })
}

proptest! {
    // Property: every reported position holds the pattern
    #[test]
    fn prop_find_first_valid_position(
        pattern in small_alphabet_pattern(),
        text in small_alphabet_text(),
    ) {
        let matcher = BoyerMooreMatcher::new(&pattern).unwrap();

        if let Some(pos) = matcher.find_first(&text) {
            prop_assert_eq!(&text[pos..pos + pattern.len()], pattern.as_slice());
        }
    }

    // Property: positions agree with the brute-force oracle for every option set
    #[test]
    fn prop_matches_oracle(
        pattern in small_alphabet_pattern(),
        text in small_alphabet_text(),
        options in options_strategy(),
    ) {
        let matcher = BoyerMooreMatcher::with_options(&pattern, options).unwrap();
        let oracle = NaiveMatcher::new(&pattern).unwrap();

        let ours: Vec<usize> = matcher.find_all(&text).collect();
        prop_assert_eq!(ours, oracle.find_all(&text));
    }

    // Property: find_all should find every planted occurrence
    #[test]
    fn prop_find_all_finds_planted_occurrences(
        pattern in "[a-z]{3,8}",
        fragments in prop::collection::vec("[0-9 ]{1,20}", 1..10),
    ) {
        let text = fragments.join(&pattern);
        let text = text.as_bytes();

        let mut expected_positions = Vec::new();
        let mut pos = 0;
        for fragment in &fragments[..fragments.len() - 1] {
            pos += fragment.len();
            expected_positions.push(pos);
            pos += pattern.len();
        }

        let matcher = BoyerMooreMatcher::new(pattern.as_bytes()).unwrap();
        let found: Vec<usize> = matcher.find_all(text).collect();
        prop_assert_eq!(found, expected_positions);
    }

    // Property: good suffix shifts stay within 1..=m
    #[test]
    fn prop_good_suffix_shift_bounds(pattern in small_alphabet_pattern()) {
        let table = GoodSuffixTable::new(&pattern);
        for &shift in table.shifts() {
            prop_assert!(shift >= 1);
            prop_assert!(shift <= pattern.len());
        }
    }
}
