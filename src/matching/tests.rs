//! Tests for vocabulary matching.

use super::*;
use crate::vocabulary::{educations, genders, majors, yes_no, Category, VocabularyTable};

fn table(entries: &[(&str, &str, &[&str])]) -> VocabularyTable {
    VocabularyTable::new(
        entries
            .iter()
            .map(|(key, label, accepted)| Category::new(key, label, *accepted))
            .collect(),
    )
    .expect("valid test table")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

// ============================================================
// Dice coefficient
// ============================================================

#[test]
fn test_dice_identical_is_one() {
    assert_close(dice_coefficient("master", "master"), 1.0);
    assert_close(dice_coefficient("m", "m"), 1.0);
    assert_close(dice_coefficient("", ""), 1.0);
}

#[test]
fn test_dice_disjoint_is_zero() {
    assert_close(dice_coefficient("abc", "xyz"), 0.0);
    assert_close(dice_coefficient("a", "b"), 0.0);
}

#[test]
fn test_dice_short_strings_have_no_bigrams() {
    assert_close(dice_coefficient("a", "ab"), 0.0);
    assert_close(dice_coefficient("", "ja"), 0.0);
}

#[test]
fn test_dice_partial_overlap() {
    // ni ig gh ht vs na ac ch ht: one shared bigram of eight
    assert_close(dice_coefficient("night", "nacht"), 0.25);
    // masterr has one extra bigram
    assert_close(dice_coefficient("masterr", "master"), 10.0 / 11.0);
}

#[test]
fn test_dice_counts_repeated_bigrams() {
    // "aa" has one aa bigram, "aaa" has two; only one is shared
    assert_close(dice_coefficient("aa", "aaa"), 2.0 / 3.0);
}

#[test]
fn test_dice_is_symmetric_and_bounded() {
    let words = ["männlich", "mannlich", "weibl", "B. Sc.", "bsc", "", "x", "nö"];
    for a in words {
        for b in words {
            let ab = dice_coefficient(a, b);
            assert_close(ab, dice_coefficient(b, a));
            assert!((0.0..=1.0).contains(&ab), "{} vs {} out of range: {}", a, b, ab);
        }
    }
}

#[test]
fn test_dice_is_case_sensitive() {
    assert!(dice_coefficient("Master", "master") < 1.0);
}

// ============================================================
// best_match
// ============================================================

#[test]
fn test_misspelled_master() {
    let result = best_match("masterr", educations());
    assert_eq!(result.label(), Some("Master"));
    assert_close(result.score().unwrap(), 10.0 / 11.0);
}

#[test]
fn test_gibberish_does_not_match() {
    assert_eq!(best_match("xyz123", yes_no()), MatchResult::NotFound);
}

#[test]
fn test_exact_yes() {
    let result = best_match("ja", yes_no());
    assert_eq!(
        result,
        MatchResult::Found {
            label: "Ja".to_string(),
            score: 1.0
        }
    );
}

#[test]
fn test_exact_spelling_always_scores_one() {
    for table in [educations(), majors(), genders(), yes_no()] {
        for category in table.categories() {
            for spelling in &category.accepted {
                let result = best_match(spelling, table);
                assert_eq!(result.score(), Some(1.0), "spelling {:?}", spelling);
            }
        }
    }
}

#[test]
fn test_exact_spelling_returns_its_own_category_when_unique() {
    assert_eq!(best_match("nö", yes_no()).label(), Some("Nein"));
    assert_eq!(best_match("w", genders()).label(), Some("weiblich"));
    assert_eq!(best_match("m", genders()).label(), Some("männlich"));
    assert_eq!(best_match("maschbau", majors()).label(), Some("Maschinenbau"));
    assert_eq!(best_match("Abitur", educations()).label(), Some("Abitur"));
}

#[test]
fn test_empty_input_does_not_match() {
    for table in [educations(), majors(), genders(), yes_no()] {
        assert_eq!(best_match("", table), MatchResult::NotFound);
    }
}

#[test]
fn test_matching_is_case_sensitive() {
    // None of the yes/no spellings are upper case
    assert_eq!(best_match("JA", yes_no()), MatchResult::NotFound);
    assert_eq!(best_match("NEIN", yes_no()), MatchResult::NotFound);
}

#[test]
fn test_input_is_not_trimmed() {
    // " ja" shares one of its two bigrams with "ja": 2/3
    assert_eq!(best_match(" ja", yes_no()), MatchResult::NotFound);
}

#[test]
fn test_tie_goes_to_first_category() {
    let t = table(&[("a", "Erste", &["same"]), ("b", "Zweite", &["same"])]);
    assert_eq!(best_match("same", &t).label(), Some("Erste"));
}

#[test]
fn test_equal_partial_scores_keep_first_category() {
    // abc vs abcx and abc vs abcy both score exactly 0.8
    let t = table(&[("x", "X", &["abcx"]), ("y", "Y", &["abcy"])]);
    let result = best_match("abc", &t);
    assert_eq!(result.label(), Some("X"));
    assert_close(result.score().unwrap(), 0.8);
}

#[test]
fn test_later_category_wins_with_strictly_higher_score() {
    let t = table(&[("x", "X", &["abcx"]), ("y", "Y", &["abc"])]);
    assert_eq!(best_match("abc", &t).label(), Some("Y"));
}

#[test]
fn test_best_is_tracked_across_the_whole_table() {
    // First category clears the threshold, second scores higher
    let t = table(&[("x", "X", &["masterrr"]), ("y", "Y", &["masterr"])]);
    assert_eq!(best_match("masterr", &t).label(), Some("Y"));
}

#[test]
fn test_below_threshold_is_not_found() {
    // 2 * 2 / (3 + 4) ≈ 0.57
    let t = table(&[("x", "X", &["abcde"])]);
    assert_eq!(best_match("abcx", &t), MatchResult::NotFound);
}

#[test]
fn test_matching_is_deterministic() {
    for input in ["bachlor", "Wirtschaftsmathe", "msc", "klaro", "frau"] {
        let first = best_match(input, educations());
        let second = best_match(input, educations());
        assert_eq!(first, second);
    }
}

#[test]
fn test_match_result_accessors() {
    let found = MatchResult::Found {
        label: "Ja".into(),
        score: 0.9,
    };
    assert!(found.is_found());
    assert_eq!(found.label(), Some("Ja"));
    assert_eq!(found.clone().into_label(), Some("Ja".to_string()));

    assert!(!MatchResult::NotFound.is_found());
    assert_eq!(MatchResult::NotFound.score(), None);
    assert_eq!(MatchResult::NotFound.into_label(), None);
}

// ============================================================
// Suggestions
// ============================================================

#[test]
fn test_suggest_ranks_near_misses() {
    let suggestions = suggest("weibich", genders(), 3);
    assert!(!suggestions.is_empty());
    assert_eq!(suggestions[0].label, "weiblich");
    assert!(suggestions[0].score < MATCH_THRESHOLD);
    assert!(suggestions.iter().all(|s| s.score >= SUGGESTION_FLOOR));
}

#[test]
fn test_suggest_respects_limit() {
    let t = table(&[("h", "Haus", &["haus"]), ("m", "Maus", &["maus"])]);
    assert_eq!(suggest("laus", &t, 1).len(), 1);
    assert_eq!(suggest("laus", &t, 0).len(), 0);
}

#[test]
fn test_did_you_mean_single() {
    assert_eq!(
        did_you_mean("weibich", genders(), 1),
        Some("Meintest du: weiblich?".to_string())
    );
}

#[test]
fn test_did_you_mean_multiple_in_table_order() {
    let t = table(&[("h", "Haus", &["haus"]), ("m", "Maus", &["maus"])]);
    assert_eq!(
        did_you_mean("laus", &t, 3),
        Some("Meintest du eines von: Haus, Maus?".to_string())
    );
}

#[test]
fn test_did_you_mean_nothing_close() {
    assert_eq!(did_you_mean("xyz123", yes_no(), 3), None);
}
