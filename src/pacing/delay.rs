//! Delay modes and the reading/typing time model.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use super::readability::complexity;

/// Delay used by [`DelayMode::Fixed`], in milliseconds.
pub const FIXED_DELAY_MS: u64 = 2300;

/// How long a reply is held back before it is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayMode {
    /// Send immediately
    #[default]
    Zero,
    /// Always wait [`FIXED_DELAY_MS`]
    #[serde(alias = "fix")]
    Fixed,
    /// Wait for simulated reading plus typing time
    #[serde(alias = "var")]
    Dynamic,
}

impl DelayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DelayMode::Zero => "zero",
            DelayMode::Fixed => "fixed",
            DelayMode::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for DelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown delay mode name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDelayModeError(String);

impl fmt::Display for ParseDelayModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown delay mode '{}' (expected zero, fixed or dynamic)",
            self.0
        )
    }
}

impl std::error::Error for ParseDelayModeError {}

impl FromStr for DelayMode {
    type Err = ParseDelayModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(DelayMode::Zero),
            "fixed" | "fix" => Ok(DelayMode::Fixed),
            "dynamic" | "var" => Ok(DelayMode::Dynamic),
            _ => Err(ParseDelayModeError(s.to_string())),
        }
    }
}

/// Reading and typing components of a dynamic delay, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DelayEstimate {
    /// Time to read the previous turn
    pub reading_ms: f64,
    /// Time to type the outgoing message
    pub typing_ms: f64,
}

impl DelayEstimate {
    /// Sum of both components, rounded and clamped to zero.
    pub fn total_ms(&self) -> u64 {
        let total = self.reading_ms + self.typing_ms;
        if total.is_finite() && total > 0.0 {
            total.round() as u64
        } else {
            0
        }
    }
}

/// Milliseconds a person needs to process text of the given complexity.
///
/// `750 * (ln(complexity + 0.5) + 1.5)`, or 0 for non-positive complexity.
fn processing_ms(complexity: f64) -> f64 {
    if complexity.is_nan() || complexity <= 0.0 {
        return 0.0;
    }
    1000.0 * 0.75 * ((complexity + 0.5).ln() + 1.5)
}

/// Reading plus typing time for a dynamic delay.
///
/// An absent or empty `previous` contributes no reading time.
pub fn estimate_dynamic(previous: Option<&str>, next: &str) -> DelayEstimate {
    let reading_ms = match previous {
        Some(text) if !text.is_empty() => processing_ms(complexity(text)),
        _ => 0.0,
    };
    let typing_ms = processing_ms(complexity(next));

    DelayEstimate {
        reading_ms,
        typing_ms,
    }
}

/// Milliseconds to hold back `next`, having just seen `previous`.
///
/// `next` may be anything printable; it is stringified before analysis.
/// The result is never negative and the call never panics on text input.
///
/// # Example
/// ```
/// use surveybot::pacing::{estimate_delay, DelayMode};
///
/// assert_eq!(estimate_delay(Some("x"), "y", DelayMode::Fixed), 2300);
/// assert_eq!(estimate_delay(None, "Wie alt bist du?", DelayMode::Zero), 0);
/// ```
pub fn estimate_delay<N>(previous: Option<&str>, next: &N, mode: DelayMode) -> u64
where
    N: fmt::Display + ?Sized,
{
    match mode {
        DelayMode::Zero => 0,
        DelayMode::Fixed => FIXED_DELAY_MS,
        DelayMode::Dynamic => {
            let next = next.to_string();
            let estimate = estimate_dynamic(previous, &next);
            let total = estimate.total_ms();
            debug!(
                reading_ms = estimate.reading_ms,
                typing_ms = estimate.typing_ms,
                total_ms = total,
                "estimated reply delay"
            );
            total
        }
    }
}
