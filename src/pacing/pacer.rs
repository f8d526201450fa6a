//! Applying reply delays.

use std::fmt;
use std::time::Duration;

use crate::config::Treatment;

use super::delay::{estimate_delay, DelayMode};

/// Holds outgoing messages back according to a [`DelayMode`].
///
/// One pacer is built per conversation from the active treatment and shared
/// by every message it sends. It carries no other state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pacer {
    mode: DelayMode,
}

impl Pacer {
    pub fn new(mode: DelayMode) -> Self {
        Self { mode }
    }

    /// Create a pacer for the delay mode selected by `treatment`.
    pub fn from_treatment(treatment: &Treatment) -> Self {
        Self::new(treatment.delay_mode())
    }

    pub fn mode(&self) -> DelayMode {
        self.mode
    }

    /// How long to hold back `next` after `previous` was received.
    pub fn delay_for<N>(&self, previous: Option<&str>, next: &N) -> Duration
    where
        N: fmt::Display + ?Sized,
    {
        Duration::from_millis(estimate_delay(previous, next, self.mode))
    }

    /// Wait as long as a person would before sending `next`.
    ///
    /// Returns the delay that was applied. Cancelling the returned future
    /// cancels the wait.
    #[cfg(feature = "async")]
    pub async fn pace<N>(&self, previous: Option<&str>, next: &N) -> Duration
    where
        N: fmt::Display + ?Sized,
    {
        let delay = self.delay_for(previous, next);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        delay
    }
}
