//! Fuzzy categorical matching of free-text answers.
//!
//! Resolves what a subject typed ("masterr", "jap", "weibl") to the canonical
//! label of a [`VocabularyTable`](crate::vocabulary::VocabularyTable) entry,
//! tolerating misspellings, abbreviations and synonyms.
//!
//! **Similarity**: Sørensen–Dice coefficient over character bigrams. The
//! acceptance threshold [`MATCH_THRESHOLD`] is calibrated against this metric,
//! so it must not be swapped for an edit distance.
//!
//! **Scan**: A single running best is kept across every category and every
//! accepted spelling. A candidate replaces the best only when its score is at
//! least the threshold and strictly greater than the current best, so the
//! first category in table order wins ties.
//!
//! **Case**: Comparison is case-sensitive and untrimmed. The built-in tables
//! list case variants explicitly (`"Abitur"`, `"abitur"`) to compensate.
//!
//! When nothing clears the threshold, [`suggest`] and [`did_you_mean`] rank
//! near misses for a re-prompt.

mod matcher;
mod similarity;
mod suggestions;
mod types;

#[cfg(test)]
mod tests;

pub use matcher::{best_match, MATCH_THRESHOLD};
pub use similarity::dice_coefficient;
pub use suggestions::{did_you_mean, suggest, SUGGESTION_FLOOR};
pub use types::{MatchResult, Suggestion};
