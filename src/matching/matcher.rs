//! Best-match scan over a vocabulary table.

use tracing::{debug, trace};

use crate::vocabulary::VocabularyTable;

use super::similarity::dice_coefficient;
use super::types::MatchResult;

/// Minimum similarity for an answer to count as a spelling of a category.
pub const MATCH_THRESHOLD: f64 = 0.8;

/// Resolve `input` to the canonical label of the best-matching category.
///
/// Every accepted spelling of every category is scored against `input`. A
/// single best `(label, score)` is tracked across the whole table; a candidate
/// replaces it only if it scores at least [`MATCH_THRESHOLD`] and strictly
/// more than the current best. Ties therefore go to the earlier category (and
/// the earlier spelling within it).
///
/// Comparison is case-sensitive and does not trim `input`.
///
/// # Example
/// ```
/// use surveybot::matching::best_match;
/// use surveybot::vocabulary::yes_no;
///
/// let result = best_match("ja", yes_no());
/// assert_eq!(result.label(), Some("Ja"));
/// assert_eq!(result.score(), Some(1.0));
/// ```
pub fn best_match(input: &str, vocabulary: &VocabularyTable) -> MatchResult {
    let mut best: Option<(&str, f64)> = None;

    for category in vocabulary.categories() {
        for spelling in &category.accepted {
            let score = dice_coefficient(input, spelling);
            let current = best.map_or(0.0, |(_, s)| s);
            if score >= MATCH_THRESHOLD && score > current {
                trace!(input, spelling = %spelling, label = %category.label, score, "new best match");
                best = Some((category.label.as_str(), score));
            }
        }
    }

    match best {
        Some((label, score)) => {
            debug!(input, label, score, "matched answer");
            MatchResult::Found {
                label: label.to_string(),
                score,
            }
        }
        None => {
            debug!(input, "answer did not match any category");
            MatchResult::NotFound
        }
    }
}
