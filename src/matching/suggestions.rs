//! "Meintest du?" suggestions for answers that did not match.

use crate::vocabulary::VocabularyTable;

use super::similarity::dice_coefficient;
use super::types::Suggestion;

/// Categories scoring below this are too far off to offer back.
pub const SUGGESTION_FLOOR: f64 = 0.4;

/// Rank categories by how close `input` came to any of their spellings.
///
/// Each category contributes its best-scoring spelling once. Categories below
/// [`SUGGESTION_FLOOR`] are dropped. Results are sorted by descending score,
/// with ties kept in table order, and truncated to `limit`.
pub fn suggest(input: &str, vocabulary: &VocabularyTable, limit: usize) -> Vec<Suggestion> {
    let mut ranked: Vec<Suggestion> = vocabulary
        .categories()
        .iter()
        .filter_map(|category| {
            let score = category
                .accepted
                .iter()
                .map(|spelling| dice_coefficient(input, spelling))
                .fold(0.0_f64, f64::max);
            (score >= SUGGESTION_FLOOR).then(|| Suggestion {
                label: category.label.clone(),
                score,
            })
        })
        .collect();

    // Stable sort keeps table order among equal scores
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Format a re-prompt hint for `input`, or `None` if nothing is close.
///
/// # Example
/// ```
/// use surveybot::matching::did_you_mean;
/// use surveybot::vocabulary::genders;
///
/// let hint = did_you_mean("weibich", genders(), 1);
/// assert_eq!(hint.as_deref(), Some("Meintest du: weiblich?"));
/// ```
pub fn did_you_mean(input: &str, vocabulary: &VocabularyTable, limit: usize) -> Option<String> {
    let suggestions = suggest(input, vocabulary, limit);
    match suggestions.as_slice() {
        [] => None,
        [only] => Some(format!("Meintest du: {}?", only.label)),
        many => {
            let labels: Vec<&str> = many.iter().map(|s| s.label.as_str()).collect();
            Some(format!("Meintest du eines von: {}?", labels.join(", ")))
        }
    }
}
