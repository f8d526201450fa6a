//! Vocabulary validation errors.

use std::fmt;

/// A vocabulary table that violates its construction invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// The table has no categories
    EmptyTable,

    /// Two categories share a key
    DuplicateKey(String),

    /// A category has an empty canonical label
    EmptyLabel(String),

    /// A category accepts no spellings
    NoAcceptedSpellings(String),
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyError::EmptyTable => write!(f, "vocabulary table has no categories"),
            VocabularyError::DuplicateKey(key) => {
                write!(f, "duplicate category key '{}'", key)
            }
            VocabularyError::EmptyLabel(key) => {
                write!(f, "category '{}' has an empty label", key)
            }
            VocabularyError::NoAcceptedSpellings(key) => {
                write!(f, "category '{}' accepts no spellings", key)
            }
        }
    }
}

impl std::error::Error for VocabularyError {}
