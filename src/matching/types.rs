//! Result types for vocabulary matching.

/// Outcome of matching one answer against a vocabulary table.
///
/// `NotFound` is the normal "please rephrase" outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// A spelling cleared the acceptance threshold
    Found {
        /// Canonical label of the winning category
        label: String,
        /// Similarity of the winning spelling, in `[MATCH_THRESHOLD, 1]`
        score: f64,
    },
    /// Nothing cleared the threshold
    NotFound,
}

impl MatchResult {
    /// The matched label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            MatchResult::Found { label, .. } => Some(label),
            MatchResult::NotFound => None,
        }
    }

    /// The winning score, if any.
    pub fn score(&self) -> Option<f64> {
        match self {
            MatchResult::Found { score, .. } => Some(*score),
            MatchResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }

    /// Consume the result, keeping only the label.
    pub fn into_label(self) -> Option<String> {
        match self {
            MatchResult::Found { label, .. } => Some(label),
            MatchResult::NotFound => None,
        }
    }
}

/// A near-miss category offered back to the subject
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Canonical label of the category
    pub label: String,
    /// Best similarity among the category's spellings
    pub score: f64,
}
