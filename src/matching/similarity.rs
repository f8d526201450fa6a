//! Sørensen–Dice bigram similarity.

use std::collections::HashMap;

/// Similarity of two strings in `[0, 1]`.
///
/// Both strings are split into overlapping character bigrams, counted with
/// multiplicity. The score is `2 * |A ∩ B| / (|A| + |B|)`.
///
/// Strings too short to have bigrams score 1.0 when identical and 0.0
/// otherwise, which also makes two empty strings score 1.0.
///
/// Works on `char`s, so `"mädchen"` has six bigrams, not seven.
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let a_bigrams = bigrams(a);
    let b_bigrams = bigrams(b);
    let a_total: usize = a_bigrams.values().sum();
    let b_total: usize = b_bigrams.values().sum();

    if a_total == 0 || b_total == 0 {
        return 0.0;
    }

    let shared: usize = a_bigrams
        .iter()
        .map(|(bigram, count)| b_bigrams.get(bigram).map_or(0, |other| (*count).min(*other)))
        .sum();

    (2 * shared) as f64 / (a_total + b_total) as f64
}

fn bigrams(s: &str) -> HashMap<(char, char), usize> {
    let chars: Vec<char> = s.chars().collect();
    let mut counts = HashMap::with_capacity(chars.len().saturating_sub(1));
    for pair in chars.windows(2) {
        *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}
