//! Vocabulary tables for categorical survey answers.
//!
//! A [`VocabularyTable`] is a closed, ordered set of categories. Each category
//! has an internal key, a canonical label that gets persisted, and a list of
//! accepted spellings the subject might type instead.
//!
//! Tables are immutable once built. Construction validates the table, so a
//! malformed vocabulary fails at load time and never mid-conversation:
//! - the table has at least one category
//! - keys are unique
//! - every label is non-empty
//! - every category accepts at least one spelling
//!
//! ## TOML Format
//!
//! ```toml
//! categories = [
//!     { key = "yes", label = "Ja", accepted = ["ja", "jap", "klar"] },
//!     { key = "no", label = "Nein", accepted = ["nein", "nö"] },
//! ]
//! ```
//!
//! Spellings may repeat across categories. The matcher resolves such
//! ambiguity by table order.

mod builtin;
mod error;


use serde::Deserialize;

pub use builtin::{builtin, educations, genders, majors, yes_no, BUILTIN_NAMES};
pub use error::VocabularyError;

/// One category of a vocabulary table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Internal key, unique within its table (e.g. `"bachelor"`).
    pub key: String,
    /// Canonical label returned on a match (e.g. `"Bachelor"`).
    pub label: String,
    /// Accepted spellings, compared in order.
    pub accepted: Vec<String>,
}

impl Category {
    /// Create a category from borrowed parts.
    pub fn new<S: AsRef<str>>(key: &str, label: &str, accepted: &[S]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            accepted: accepted.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

/// Closed, ordered set of categories.
///
/// Insertion order is significant: it is the scan order of the matcher and
/// therefore its tie-break order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct VocabularyTable {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct RawTable {
    categories: Vec<Category>,
}

impl TryFrom<RawTable> for VocabularyTable {
    type Error = VocabularyError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Self::new(raw.categories)
    }
}

impl VocabularyTable {
    /// Build a validated table from categories in scan order.
    pub fn new(categories: Vec<Category>) -> Result<Self, VocabularyError> {
        if categories.is_empty() {
            return Err(VocabularyError::EmptyTable);
        }

        for (i, category) in categories.iter().enumerate() {
            if categories[..i].iter().any(|c| c.key == category.key) {
                return Err(VocabularyError::DuplicateKey(category.key.clone()));
            }
            if category.label.is_empty() {
                return Err(VocabularyError::EmptyLabel(category.key.clone()));
            }
            if category.accepted.is_empty() {
                return Err(VocabularyError::NoAcceptedSpellings(category.key.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// Parse a table from TOML content.
    ///
    /// Validation errors surface as TOML deserialization errors.
    pub fn parse_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Categories in scan order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by its internal key.
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Canonical labels in scan order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.label.as_str())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a constructed table; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
