//! Property-based tests across all matchers.
//!
//! The naive matcher is the oracle: every other algorithm must report the
//! same positions for the same input.

use proptest::prelude::*;

use crate::matchers::{
    automaton_search, boyer_moore_search, boyer_moore_suffix_search, build_automaton,
    build_prefix_table, kmp_search, rabin_karp_search, Automaton, BoyerMooreMatcher, Heuristic,
    KmpMatcher, MatcherOptions, NaiveMatcher, RabinKarpMatcher, RollingHashParams,
};
use crate::tests::test_utils::{
    small_alphabet_pattern, small_alphabet_pattern_set, small_alphabet_text, unicode_text,
};

/// `(position, pattern_id, length)` triples, sorted, from per-pattern searches.
fn expected_automaton_matches(text: &[u8], patterns: &[Vec<u8>]) -> Vec<(usize, usize, usize)> {
    let mut expected = Vec::new();
    for (id, pattern) in patterns.iter().enumerate() {
        let oracle = NaiveMatcher::new(pattern).unwrap();
        for position in oracle.find_all(text) {
            expected.push((position, id, pattern.len()));
        }
    }
    expected.sort_unstable();
    expected
}

fn automaton_triples(automaton: &Automaton<u8>, text: &[u8]) -> Vec<(usize, usize, usize)> {
    automaton_search(text, automaton)
        .into_iter()
        .map(|m| (m.position, m.pattern_id, m.length))
        .collect()
}

proptest! {
    // Property: every single-pattern algorithm agrees with the oracle on count
    #[test]
    fn prop_match_counts_agree(
        pattern in small_alphabet_pattern(),
        text in small_alphabet_text(),
    ) {
        let expected = NaiveMatcher::new(&pattern).unwrap().search(&text).matches;

        prop_assert_eq!(kmp_search(&text, &pattern).unwrap().matches, expected);
        prop_assert_eq!(boyer_moore_search(&text, &pattern).unwrap().matches, expected);
        prop_assert_eq!(boyer_moore_suffix_search(&text, &pattern).unwrap().matches, expected);
        prop_assert_eq!(rabin_karp_search(&text, &pattern, 256, 9973).unwrap(), expected);
    }

    // Property: every single-pattern algorithm reports the oracle's positions
    #[test]
    fn prop_positions_agree(
        pattern in small_alphabet_pattern(),
        text in small_alphabet_text(),
    ) {
        let expected = NaiveMatcher::new(&pattern).unwrap().find_all(&text);

        prop_assert_eq!(&KmpMatcher::new(&pattern).unwrap().find_all(&text), &expected);
        let bm: Vec<usize> = BoyerMooreMatcher::new(&pattern).unwrap().find_all(&text).collect();
        prop_assert_eq!(&bm, &expected);
        prop_assert_eq!(&RabinKarpMatcher::new(&pattern).unwrap().find_all(&text), &expected);
    }

    // Property: hash collisions never leak into the results
    #[test]
    fn prop_rabin_karp_tiny_modulus(
        pattern in small_alphabet_pattern(),
        text in small_alphabet_text(),
        modulus in prop::sample::select(vec![2u64, 3, 5, 7]),
    ) {
        let params = RollingHashParams::new(1, modulus).unwrap();
        let matcher = RabinKarpMatcher::with_params(&pattern, params).unwrap();
        let expected = NaiveMatcher::new(&pattern).unwrap().find_all(&text);
        prop_assert_eq!(matcher.find_all(&text), expected);
    }

    // Property: agreement also holds for char symbols
    #[test]
    fn prop_unicode_agrees(
        pattern in unicode_text(3).prop_filter("non-empty", |p| !p.is_empty()),
        text in unicode_text(40),
    ) {
        let expected = NaiveMatcher::new(&pattern).unwrap().find_all(&text);

        prop_assert_eq!(&KmpMatcher::new(&pattern).unwrap().find_all(&text), &expected);
        let bm: Vec<usize> = BoyerMooreMatcher::new(&pattern).unwrap().find_all(&text).collect();
        prop_assert_eq!(&bm, &expected);
        prop_assert_eq!(&RabinKarpMatcher::new(&pattern).unwrap().find_all(&text), &expected);
    }

    // Property: prefix table entries are proper borders
    #[test]
    fn prop_prefix_table_invariants(pattern in small_alphabet_pattern()) {
        let table = build_prefix_table(&pattern).unwrap();
        prop_assert_eq!(table.len(), pattern.len());
        prop_assert_eq!(table[0], 0);
        for i in 0..pattern.len() {
            let border = table[i];
            prop_assert!(border <= i);
            prop_assert_eq!(&pattern[..border], &pattern[i + 1 - border..=i]);
            // No longer proper border exists.
            for longer in border + 1..=i {
                prop_assert_ne!(&pattern[..longer], &pattern[i + 1 - longer..=i]);
            }
        }
    }

    // Property: the automaton reports exactly the union of per-pattern matches
    #[test]
    fn prop_automaton_is_union_of_single_searches(
        patterns in small_alphabet_pattern_set(),
        text in small_alphabet_text(),
    ) {
        let automaton: Automaton<u8> = build_automaton(&patterns).unwrap();
        let mut found = automaton_triples(&automaton, &text);
        found.sort_unstable();
        prop_assert_eq!(found, expected_automaton_matches(&text, &patterns));
    }

    // Property: matches come out ordered by ending position
    #[test]
    fn prop_automaton_orders_by_end(
        patterns in small_alphabet_pattern_set(),
        text in small_alphabet_text(),
    ) {
        let automaton: Automaton<u8> = build_automaton(&patterns).unwrap();
        let ends: Vec<usize> = automaton_search(&text, &automaton).iter().map(|m| m.end()).collect();
        prop_assert!(ends.windows(2).all(|w| w[0] <= w[1]));
    }

    // Property: insertion order does not change the reported match set
    #[test]
    fn prop_automaton_order_independent(
        patterns in small_alphabet_pattern_set(),
        text in small_alphabet_text(),
    ) {
        let forward: Automaton<u8> = build_automaton(&patterns).unwrap();
        let reversed_patterns: Vec<Vec<u8>> = patterns.iter().rev().cloned().collect();
        let reversed: Automaton<u8> = build_automaton(&reversed_patterns).unwrap();

        let resolve = |automaton: &Automaton<u8>| {
            let mut pairs: Vec<(usize, Vec<u8>)> = automaton_search(&text, automaton)
                .into_iter()
                .map(|m| (m.position, automaton.pattern(m.pattern_id).to_vec()))
                .collect();
            pairs.sort_unstable();
            pairs
        };
        prop_assert_eq!(resolve(&forward), resolve(&reversed));
    }

    // Property: repeated runs over the same input give identical results
    #[test]
    fn prop_idempotent(
        pattern in small_alphabet_pattern(),
        text in small_alphabet_text(),
    ) {
        let kmp = KmpMatcher::new(&pattern).unwrap();
        prop_assert_eq!(kmp.search(&text), kmp.search(&text));

        let bm = BoyerMooreMatcher::new(&pattern).unwrap();
        prop_assert_eq!(bm.search(&text), bm.search(&text));

        let bad_char_only = BoyerMooreMatcher::with_options(
            &pattern,
            MatcherOptions::new().heuristic(Heuristic::BadCharacter),
        )
        .unwrap();
        prop_assert_eq!(bad_char_only.search(&text), bad_char_only.search(&text));
        prop_assert_eq!(
            boyer_moore_search(&text, &pattern).unwrap(),
            boyer_moore_search(&text, &pattern).unwrap()
        );

        let rk = RabinKarpMatcher::new(&pattern).unwrap();
        prop_assert_eq!(rk.search(&text), rk.search(&text));
        prop_assert_eq!(
            rabin_karp_search(&text, &pattern, 256, 9973).unwrap(),
            rabin_karp_search(&text, &pattern, 256, 9973).unwrap()
        );

        let automaton: Automaton<u8> = build_automaton(&[pattern.clone()]).unwrap();
        prop_assert_eq!(
            automaton_search(&text, &automaton),
            automaton_search(&text, &automaton)
        );
    }
}
