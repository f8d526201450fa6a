//! Holt & Laury (2002) risk elicitation.
//!
//! The subject is shown up to ten lottery pairs in sequence and picks either
//! the safe lottery `A` or the risky lottery `B`. The task ends at the first
//! `B` or after the tenth round. The number of safe choices made before that
//! point classifies the subject's risk attitude.

use std::fmt;
use std::str::FromStr;

/// Number of lottery pairs in the task.
pub const ROUNDS: usize = 10;

/// One lottery pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LotteryChoice {
    /// Safe lottery
    A,
    /// Risky lottery
    B,
}

impl FromStr for LotteryChoice {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(LotteryChoice::A),
            "B" | "b" => Ok(LotteryChoice::B),
            other => Err(RiskError::UnknownChoice(other.to_string())),
        }
    }
}

impl fmt::Display for LotteryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LotteryChoice::A => write!(f, "A"),
            LotteryChoice::B => write!(f, "B"),
        }
    }
}

/// Risk attitude derived from the number of safe choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskProfile {
    HighlyRiskLoving,
    VeryRiskLoving,
    RiskLoving,
    RiskNeutral,
    SlightlyRiskAverse,
    RiskAverse,
    VeryRiskAverse,
    HighlyRiskAverse,
    /// Safe choices even where the risky lottery clearly dominates
    StayInBed,
}

impl RiskProfile {
    /// Classify by the number of safe choices (0..=10).
    pub fn from_safe_choices(safe_choices: usize) -> Self {
        match safe_choices {
            0 | 1 => RiskProfile::HighlyRiskLoving,
            2 => RiskProfile::VeryRiskLoving,
            3 => RiskProfile::RiskLoving,
            4 => RiskProfile::RiskNeutral,
            5 => RiskProfile::SlightlyRiskAverse,
            6 => RiskProfile::RiskAverse,
            7 => RiskProfile::VeryRiskAverse,
            8 => RiskProfile::HighlyRiskAverse,
            _ => RiskProfile::StayInBed,
        }
    }

    /// German description shown to the subject.
    pub fn description(&self) -> &'static str {
        match self {
            RiskProfile::HighlyRiskLoving => "höchst risikoliebend",
            RiskProfile::VeryRiskLoving => "sehr risikoliebend",
            RiskProfile::RiskLoving => "risikoliebend",
            RiskProfile::RiskNeutral => "risikoneutral",
            RiskProfile::SlightlyRiskAverse => "leicht risikoavers",
            RiskProfile::RiskAverse => "risikoavers",
            RiskProfile::VeryRiskAverse => "sehr risikoavers",
            RiskProfile::HighlyRiskAverse => "höchst risikoavers",
            RiskProfile::StayInBed => "bleib besser im Bett",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// State of the task after recording a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Present the next round (1-based)
    NextRound(usize),
    /// Task finished with this classification
    Complete(RiskProfile),
}

/// Misuse of a [`RiskAssessment`] or an unreadable choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    /// A choice was recorded after the task ended
    AlreadyComplete,
    /// A choice other than `A` or `B`
    UnknownChoice(String),
}

impl fmt::Display for RiskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskError::AlreadyComplete => write!(f, "risk assessment is already complete"),
            RiskError::UnknownChoice(s) => write!(f, "unknown lottery choice '{}'", s),
        }
    }
}

impl std::error::Error for RiskError {}

/// Recorder for one run of the lottery task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RiskAssessment {
    choices: Vec<LotteryChoice>,
    profile: Option<RiskProfile>,
}

impl RiskAssessment {
    pub fn new() -> Self {
        Self::default()
    }

    /// The round about to be played (1-based).
    pub fn current_round(&self) -> usize {
        self.choices.len() + 1
    }

    /// Record the choice for the current round.
    pub fn record(&mut self, choice: LotteryChoice) -> Result<Progress, RiskError> {
        if self.profile.is_some() {
            return Err(RiskError::AlreadyComplete);
        }

        self.choices.push(choice);
        let played = self.choices.len();

        if choice == LotteryChoice::A && played < ROUNDS {
            return Ok(Progress::NextRound(played + 1));
        }

        let profile = RiskProfile::from_safe_choices(played - 1);
        self.profile = Some(profile);
        Ok(Progress::Complete(profile))
    }

    /// Classification, once the task is complete.
    pub fn profile(&self) -> Option<RiskProfile> {
        self.profile
    }

    pub fn is_complete(&self) -> bool {
        self.profile.is_some()
    }

    /// Choices made so far.
    pub fn choices(&self) -> &[LotteryChoice] {
        &self.choices
    }

    /// Choices padded with `B` to [`ROUNDS`] entries, for export.
    pub fn padded_choices(&self) -> [LotteryChoice; ROUNDS] {
        let mut padded = [LotteryChoice::B; ROUNDS];
        for (slot, choice) in padded.iter_mut().zip(&self.choices) {
            *slot = *choice;
        }
        padded
    }
}
