//! String similarity based on Levenshtein edit distance.
//!
//! Used for "did you mean" suggestions when a command is not found.

/// Levenshtein distance between two strings, counted in characters.
///
/// Insertions, deletions and substitutions each cost 1. Comparison is exact;
/// callers that want case-insensitive distance must fold case first.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the DP table are enough.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Normalized similarity in `[0, 1]`; `1.0` means identical ignoring case.
///
/// The distance is measured on the lower-cased strings while the normalizing
/// length is taken from the strings as given. Two empty strings score `1.0`.
pub fn calculate_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(&a.to_lowercase(), &b.to_lowercase());
    1.0 - distance as f64 / max_len as f64
}

/// Candidates scoring at least `threshold` against `input`, best first.
///
/// Equal scores keep their order from `candidates`. At most `max_suggestions`
/// entries are returned.
pub fn find_similar_strings<S: AsRef<str>>(
    input: &str,
    candidates: &[S],
    threshold: f64,
    max_suggestions: usize,
) -> Vec<String> {
    let mut scored: Vec<(&str, f64)> = candidates
        .iter()
        .map(|c| (c.as_ref(), calculate_similarity(input, c.as_ref())))
        .filter(|(_, score)| *score >= threshold)
        .collect();

    // sort_by is stable, so ties stay in candidate order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(max_suggestions)
        .map(|(text, _)| text.to_string())
        .collect()
}
