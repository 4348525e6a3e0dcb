use std::cmp::min;

use crate::domain::{MaskedToken, RankedMatch};

/// How many matches a token gets when the caller does not say otherwise.
pub const DEFAULT_LIMIT: usize = 5;

/// Pick the `limit` candidates closest to the token, best first.
///
/// Ties keep the candidate order the dictionary returned them in. A zero
/// limit is coerced to the default rather than rejected so the pipeline
/// stays total on bad input.
pub fn rank(token: &MaskedToken, candidates: &[String], limit: usize) -> RankedMatch {
    let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };

    let mut scored: Vec<(f64, &str)> = candidates
        .iter()
        .map(|candidate| (normalized_similarity(token.as_str(), candidate), candidate.as_str()))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    RankedMatch::new(
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect(),
    )
}

/// Similarity in `[0, 1]` based on character-level edit distance,
/// case-insensitive. Two empty strings count as identical.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(&a, &b) as f64 / longest as f64
}

fn levenshtein_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            current[j + 1] = min(
                min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + cost,
            );
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
