//! Human-like reply pacing.
//!
//! Scripted replies that arrive instantly feel mechanical. This module
//! computes how long a person would plausibly need to read the previous turn
//! and type the next one, so the dialog layer can hold each message back by
//! that amount.
//!
//! Three interchangeable [`DelayMode`]s exist so that timing can be varied
//! between experimental treatments:
//! - `Zero`: no artificial delay
//! - `Fixed`: a constant [`FIXED_DELAY_MS`]
//! - `Dynamic`: scaled by the Flesch–Kincaid grade of both texts
//!
//! Everything here is a pure function of its inputs except [`Pacer::pace`],
//! which additionally sleeps for the computed duration.

mod delay;
mod pacer;
mod readability;

#[cfg(test)]
mod tests;

pub use delay::{
    estimate_delay, estimate_dynamic, DelayEstimate, DelayMode, ParseDelayModeError,
    FIXED_DELAY_MS,
};
pub use pacer::Pacer;
pub use readability::{
    complexity, count_sentences, count_syllables, count_words, flesch_kincaid_grade,
};
