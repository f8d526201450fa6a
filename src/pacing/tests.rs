//! Tests for reply pacing.

use std::time::Duration;

use super::*;
use crate::config::Treatment;

const LONG_SENTENCE: &str =
    "Ein sehr langer, komplizierter Satz mit vielen Nebensätzen und Fachbegriffen.";

fn processing_ms(complexity: f64) -> f64 {
    750.0 * ((complexity + 0.5).ln() + 1.5)
}

// ============================================================
// Readability counts
// ============================================================

#[test]
fn test_count_sentences() {
    assert_eq!(count_sentences("Hallo."), 1);
    assert_eq!(count_sentences("Hallo"), 1);
    assert_eq!(count_sentences(""), 1);
    assert_eq!(count_sentences("Hallo. Wie geht's? Gut! Danke"), 4);
    // Trailing break still yields an (empty) segment
    assert_eq!(count_sentences("Hallo. "), 2);
    // Punctuation without a following space does not split
    assert_eq!(count_sentences("Ende.Kein Leerzeichen"), 1);
}

#[test]
fn test_count_words() {
    assert_eq!(count_words("Wie alt bist du?"), 4);
    assert_eq!(count_words("Bachelor-of-Science (B.Sc.)"), 5);
    assert_eq!(count_words("\"Ja\", sagte sie;   dann  nichts"), 5);
    assert_eq!(count_words(""), 0);
    assert_eq!(count_words("  ...  !?  "), 0);
}

#[test]
fn test_count_syllables() {
    assert_eq!(count_syllables("Hallo"), 2);
    assert_eq!(count_syllables("Haus"), 1);
    assert_eq!(count_syllables("Mädchen"), 2);
    assert_eq!(count_syllables("Straße"), 2);
    assert_eq!(count_syllables("Wie alt bist du?"), 4);
    assert_eq!(count_syllables("2023"), 0);
    assert_eq!(count_syllables(""), 0);
    // Words without vowels still have one syllable
    assert_eq!(count_syllables("Pst"), 1);
}

#[test]
fn test_long_sentence_counts() {
    assert_eq!(count_sentences(LONG_SENTENCE), 1);
    assert_eq!(count_words(LONG_SENTENCE), 10);
    assert_eq!(count_syllables(LONG_SENTENCE), 21);
}

#[test]
fn test_flesch_kincaid_coefficients() {
    let grade = flesch_kincaid_grade(2, 10, 20);
    assert!((grade - (0.39 * 5.0 + 11.8 * 2.0 - 15.59)).abs() < 1e-12);
}

#[test]
fn test_complexity_uses_counts() {
    assert_eq!(complexity("Hallo."), flesch_kincaid_grade(1, 1, 2));
    assert!(complexity("Hallo.") > 0.0);
    assert!(complexity("Wie alt bist du?") < 0.0);
}

#[test]
fn test_complexity_of_empty_text_is_zero() {
    assert_eq!(complexity(""), 0.0);
    assert_eq!(complexity("?!"), 0.0);
}

#[test]
fn test_complexity_of_numbers_substitutes_one_syllable() {
    assert_eq!(complexity("42"), flesch_kincaid_grade(1, 1, 1));
    assert!(complexity("42").is_finite());
}

// ============================================================
// Delay modes
// ============================================================

#[test]
fn test_zero_mode_is_always_zero() {
    for (prev, next) in [(None, "Hallo"), (Some(LONG_SENTENCE), LONG_SENTENCE)] {
        assert_eq!(estimate_delay(prev, next, DelayMode::Zero), 0);
    }
}

#[test]
fn test_fixed_mode_is_constant() {
    assert_eq!(estimate_delay(Some("x"), "y", DelayMode::Fixed), 2300);
    assert_eq!(estimate_delay(None, LONG_SENTENCE, DelayMode::Fixed), FIXED_DELAY_MS);
}

#[test]
fn test_dynamic_reading_only() {
    // "Hallo." has two syllables in one word (grade 8.41); "Wie alt bist du?"
    // grades below zero and needs no typing time
    let delay = estimate_delay(Some("Hallo."), "Wie alt bist du?", DelayMode::Dynamic);
    let expected = processing_ms(flesch_kincaid_grade(1, 1, 2)).round() as u64;
    assert_eq!(delay, expected);

    let estimate = estimate_dynamic(Some("Hallo."), "Wie alt bist du?");
    assert_eq!(estimate.typing_ms, 0.0);
    assert!(estimate.reading_ms > 0.0);
}

#[test]
fn test_dynamic_typing_only_without_previous() {
    let delay = estimate_delay(None, LONG_SENTENCE, DelayMode::Dynamic);
    let expected = processing_ms(flesch_kincaid_grade(1, 10, 21)).round() as u64;
    assert_eq!(delay, expected);
    assert!(delay > 0);
}

#[test]
fn test_empty_previous_has_no_reading_time() {
    let none = estimate_dynamic(None, LONG_SENTENCE);
    let empty = estimate_dynamic(Some(""), LONG_SENTENCE);
    assert_eq!(none, empty);
    assert_eq!(none.reading_ms, 0.0);
    assert_eq!(
        estimate_delay(None, LONG_SENTENCE, DelayMode::Dynamic),
        estimate_delay(Some(""), LONG_SENTENCE, DelayMode::Dynamic)
    );
}

#[test]
fn test_dynamic_sums_both_components() {
    let estimate = estimate_dynamic(Some(LONG_SENTENCE), LONG_SENTENCE);
    assert_eq!(estimate.reading_ms, estimate.typing_ms);
    assert_eq!(
        estimate_delay(Some(LONG_SENTENCE), LONG_SENTENCE, DelayMode::Dynamic),
        (estimate.reading_ms * 2.0).round() as u64
    );
}

#[test]
fn test_dynamic_grows_with_complexity() {
    let short = estimate_delay(None, "Das ist gut.", DelayMode::Dynamic);
    let long = estimate_delay(None, LONG_SENTENCE, DelayMode::Dynamic);
    assert!(long > short);
}

#[test]
fn test_dynamic_stringifies_non_text() {
    // 42 has complexity 0.39 + 11.8 - 15.59 < 0
    assert_eq!(estimate_delay(None, &42, DelayMode::Dynamic), 0);
    assert_eq!(
        estimate_delay(None, &LONG_SENTENCE.to_string(), DelayMode::Dynamic),
        estimate_delay(None, LONG_SENTENCE, DelayMode::Dynamic)
    );
}

#[test]
fn test_dynamic_handles_degenerate_text() {
    for text in ["", " ", "...", "🙂", "1. 2. 3. ", "a"] {
        let estimate = estimate_dynamic(Some(text), text);
        assert_eq!(
            estimate_delay(Some(text), text, DelayMode::Dynamic),
            estimate.total_ms(),
            "text {:?}",
            text
        );
        assert!(estimate.total_ms() < 60_000);
    }
}

#[test]
fn test_total_is_clamped() {
    let negative = DelayEstimate {
        reading_ms: -500.0,
        typing_ms: 100.0,
    };
    assert_eq!(negative.total_ms(), 0);

    let nan = DelayEstimate {
        reading_ms: f64::NAN,
        typing_ms: 100.0,
    };
    assert_eq!(nan.total_ms(), 0);
}

#[test]
fn test_delay_is_deterministic() {
    let a = estimate_delay(Some("Hallo, wie geht es dir?"), LONG_SENTENCE, DelayMode::Dynamic);
    let b = estimate_delay(Some("Hallo, wie geht es dir?"), LONG_SENTENCE, DelayMode::Dynamic);
    assert_eq!(a, b);
}

#[test]
fn test_parse_delay_mode() {
    assert_eq!("zero".parse::<DelayMode>(), Ok(DelayMode::Zero));
    assert_eq!("fix".parse::<DelayMode>(), Ok(DelayMode::Fixed));
    assert_eq!("Fixed".parse::<DelayMode>(), Ok(DelayMode::Fixed));
    assert_eq!("VAR".parse::<DelayMode>(), Ok(DelayMode::Dynamic));
    assert_eq!(" dynamic ".parse::<DelayMode>(), Ok(DelayMode::Dynamic));

    let err = "slow".parse::<DelayMode>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown delay mode 'slow' (expected zero, fixed or dynamic)"
    );
}

#[test]
fn test_delay_mode_display_roundtrip() {
    for mode in [DelayMode::Zero, DelayMode::Fixed, DelayMode::Dynamic] {
        assert_eq!(mode.to_string().parse::<DelayMode>(), Ok(mode));
    }
}

// ============================================================
// Pacer
// ============================================================

#[test]
fn test_pacer_from_treatment() {
    let treatment = Treatment {
        response_time_var: true,
        ..Treatment::default()
    };
    assert_eq!(Pacer::from_treatment(&treatment).mode(), DelayMode::Dynamic);
    assert_eq!(Pacer::default().mode(), DelayMode::Zero);
}

#[test]
fn test_pacer_delay_for() {
    let pacer = Pacer::new(DelayMode::Fixed);
    assert_eq!(pacer.delay_for(None, "Hallo"), Duration::from_millis(2300));
    assert_eq!(Pacer::new(DelayMode::Zero).delay_for(None, "Hallo"), Duration::ZERO);
}

#[cfg(feature = "async")]
#[tokio::test(start_paused = true)]
async fn test_pace_sleeps_for_delay() {
    let pacer = Pacer::new(DelayMode::Fixed);
    let start = tokio::time::Instant::now();

    let applied = pacer.pace(Some("Hallo"), "Wie heißt du?").await;

    assert_eq!(applied, Duration::from_millis(2300));
    assert!(start.elapsed() >= Duration::from_millis(2300));
}

#[cfg(feature = "async")]
#[tokio::test(start_paused = true)]
async fn test_pace_zero_returns_immediately() {
    let pacer = Pacer::new(DelayMode::Zero);
    let start = tokio::time::Instant::now();

    let applied = pacer.pace(None, LONG_SENTENCE).await;

    assert_eq!(applied, Duration::ZERO);
    assert_eq!(start.elapsed(), Duration::ZERO);
}
