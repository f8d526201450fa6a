//! Experiment configuration.
//!
//! Which experimental treatment is active is decided per deployment and
//! handed to the dialog layer at construction time. Nothing here is a global.
//!
//! ## TOML Format (`surveybot.toml`)
//!
//! ```toml
//! [treatment]
//! response_time_var = true
//! self_reference = true
//! remember_name = true
//!
//! [dialogs]
//! advisory = false
//! payout = true
//!
//! [vocabularies.industry]
//! categories = [
//!     { key = "auto", label = "Automobil", accepted = ["auto", "automobil"] },
//! ]
//! ```
//!
//! Every field is optional and defaults to off. Custom vocabularies are
//! validated while loading, so a broken table stops startup instead of
//! failing in the middle of a conversation.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::pacing::DelayMode;
use crate::vocabulary::{self, VocabularyTable};

/// Conversational cues switched on or off for one experimental arm.
///
/// Every cue is off by default except [`initiation`](Treatment::initiation).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Treatment {
    /// Hold replies back by a constant time.
    pub response_time_fix: bool,
    /// Hold replies back by a complexity-dependent time.
    pub response_time_var: bool,
    /// Bot introduces itself.
    pub introduction: bool,
    /// Bot refers to itself in first person ("Es tut mir leid, ich ...").
    pub self_reference: bool,
    /// Polite phrasing.
    pub civility: bool,
    /// Bot addresses the subject by name.
    pub remember_name: bool,
    /// Bot opens the conversation.
    pub initiation: bool,
    pub small_talk: bool,
    /// Bot apologizes for losses and praises gains.
    pub apologize_praise: bool,
    /// Bot presents with a gender.
    pub gender: bool,
}

impl Default for Treatment {
    fn default() -> Self {
        Self {
            response_time_fix: false,
            response_time_var: false,
            introduction: false,
            self_reference: false,
            civility: false,
            remember_name: false,
            initiation: true,
            small_talk: false,
            apologize_praise: false,
            gender: false,
        }
    }
}

impl Treatment {
    /// Delay mode implied by the response-time flags.
    ///
    /// `response_time_fix` takes precedence over `response_time_var`.
    pub fn delay_mode(&self) -> DelayMode {
        if self.response_time_fix {
            DelayMode::Fixed
        } else if self.response_time_var {
            DelayMode::Dynamic
        } else {
            DelayMode::Zero
        }
    }
}

/// Optional dialogs that are split across experiment sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DialogToggles {
    /// Investment advisory dialog.
    pub advisory: bool,
    /// Payout display dialog.
    pub payout: bool,
    /// Allow every dialog to be selected from the main menu.
    pub testing: bool,
}

/// Complete configuration of one experiment deployment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Active treatment.
    pub treatment: Treatment,

    /// Optional dialogs.
    pub dialogs: DialogToggles,

    /// Additional or overriding vocabularies, by name.
    pub vocabularies: BTreeMap<String, VocabularyTable>,
}

impl ExperimentConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_toml(&content)
    }

    /// Parse a configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if config.treatment.response_time_fix && config.treatment.response_time_var {
            warn!("both response_time_fix and response_time_var are set; using fixed delay");
        }

        Ok(config)
    }

    /// Delay mode for this deployment.
    pub fn delay_mode(&self) -> DelayMode {
        self.treatment.delay_mode()
    }

    /// Look up a vocabulary by name, preferring configured tables over the
    /// built-in ones.
    pub fn vocabulary(&self, name: &str) -> Option<&VocabularyTable> {
        self.vocabularies
            .get(name)
            .or_else(|| vocabulary::builtin(name))
    }
}

/// Errors from loading an [`ExperimentConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The content is not valid TOML or fails validation
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
        }
    }
}
