//! Benchmarking support.
//!
//! Deterministic input generators shared by the criterion benchmarks, so
//! every algorithm is measured on identical texts.

/// Generates `len` random bytes drawn from the first `alphabet` lowercase
/// letters.
///
/// The same `seed` always yields the same text.
///
/// # Panics
///
/// Panics if `alphabet` is not in `1..=26`.
pub fn generate_benchmark_text(len: usize, alphabet: u8, seed: u64) -> Vec<u8> {
    assert!(
        (1..=26).contains(&alphabet),
        "alphabet must be between 1 and 26 letters"
    );
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| b'a' + rng.u8(0..alphabet)).collect()
}

/// Copies `pattern` into `text` at every multiple of `stride`, so searches
/// have a known minimum number of matches.
pub fn plant_pattern(text: &mut [u8], pattern: &[u8], stride: usize) {
    if pattern.is_empty() || stride == 0 || pattern.len() > text.len() {
        return;
    }
    let mut start = 0;
    while start + pattern.len() <= text.len() {
        text[start..start + pattern.len()].copy_from_slice(pattern);
        start += stride;
    }
}

/// Draws `count` random substrings of `text`, each at most `max_len` long.
pub fn sample_patterns(text: &[u8], count: usize, max_len: usize, seed: u64) -> Vec<Vec<u8>> {
    if text.is_empty() || max_len == 0 {
        return Vec::new();
    }
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let len = rng.usize(1..=max_len.min(text.len()));
            let start = rng.usize(0..=text.len() - len);
            text[start..start + len].to_vec()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::naive_search;

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_benchmark_text(1000, 4, 7);
        let b = generate_benchmark_text(1000, 4, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|&c| (b'a'..=b'd').contains(&c)));
    }

    #[test]
    fn test_planted_patterns_are_found() {
        let mut text = generate_benchmark_text(1000, 2, 1);
        plant_pattern(&mut text, b"xyz", 100);
        assert!(naive_search(&text, b"xyz").unwrap().matches >= 10);
    }

    #[test]
    fn test_sampled_patterns_occur() {
        let text = generate_benchmark_text(500, 3, 9);
        for pattern in sample_patterns(&text, 20, 8, 3) {
            assert!(naive_search(&text, &pattern).unwrap().matches >= 1);
        }
    }
}
