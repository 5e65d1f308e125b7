//! Character-level similarity ratio.

use similar::TextDiff;

/// Similarity of two strings in `0.0..=1.0`.
///
/// Computed as `2 * M / (len(a) + len(b))` where `M` is the number of
/// characters left unchanged by a minimal character diff. Identical strings
/// score 1.0, strings with no characters in common score 0.0, and two empty
/// strings are considered identical.
pub fn ratio(a: &str, b: &str) -> f32 {
    if a == b {
        return 1.0;
    }
    TextDiff::from_chars(a, b).ratio()
}

/// Best-scoring candidate for `query`, if it reaches `cutoff` (inclusive).
///
/// Candidates are scanned in order and only a strictly higher score replaces
/// the current best, so the first candidate reaching the maximum wins ties.
pub fn best_match<'a, I>(query: &str, candidates: I, cutoff: f32) -> Option<(&'a str, f32)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, f32)> = None;
    for candidate in candidates {
        let score = ratio(query, candidate);
        let better = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((candidate, score));
        }
    }
    best.filter(|&(_, score)| score >= cutoff)
}
