//! Surveybot - answer matching and reply pacing for scripted survey dialogs
//!
//! This library holds the logic behind a conversational experiment bot that
//! walks subjects through profile questions, a Holt & Laury lottery task and
//! an investment decision. The chat transport, card rendering and dialog
//! sequencing live in the embedding application; they call into this crate
//! with plain strings and numbers.
//!
//! # Architecture
//!
//! 1. **Answer Matching** (`matching` + `vocabulary` modules)
//!    - Resolves free-text answers to canonical labels of a closed vocabulary
//!    - Sørensen–Dice bigram similarity with a fixed 0.8 acceptance threshold
//!    - Built-in German tables for education, major, gender and yes/no
//!
//! 2. **Reply Pacing** (`pacing` module)
//!    - Zero, fixed or complexity-scaled delays before each bot message
//!    - Flesch–Kincaid grade of the previous and the outgoing text
//!
//! 3. **Experiment Logic** (`config`, `profile`, `risk`, `investment`)
//!    - Treatment flags loaded from TOML and passed in explicitly
//!    - Age recognition, risk classification and payout computation
//!
//! # Example
//!
//! ```rust
//! use surveybot::matching::best_match;
//! use surveybot::pacing::{estimate_delay, DelayMode};
//! use surveybot::vocabulary::educations;
//!
//! let answer = best_match("masterr", educations());
//! assert_eq!(answer.label(), Some("Master"));
//!
//! let delay = estimate_delay(Some("masterr"), "Danke!", DelayMode::Fixed);
//! assert_eq!(delay, 2300);
//! ```
//!
//! # Logging
//!
//! Diagnostics go through `tracing`. The library never installs a
//! subscriber.

pub mod config;
pub mod investment;
pub mod matching;
pub mod pacing;
pub mod profile;
pub mod risk;
pub mod vocabulary;

pub use config::{ConfigError, ExperimentConfig, Treatment};
pub use matching::{best_match, MatchResult};
pub use pacing::{estimate_delay, DelayMode, Pacer};
pub use vocabulary::{Category, VocabularyError, VocabularyTable};
