//! Readability counts and the Flesch–Kincaid grade.

use std::sync::OnceLock;

use regex::Regex;

/// Characters treated as word separators in addition to whitespace.
const WORD_PUNCTUATION: [char; 10] = ['.', ',', '?', '!', ';', '(', ')', '"', '\'', '-'];

fn sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\. |\? |! ").expect("sentence break pattern is valid"))
}

/// Number of sentences in `text`.
///
/// Sentences end at a period, question mark or exclamation mark that is
/// immediately followed by a space. Final punctuation without a trailing
/// space does not start a new sentence, so `"Hallo."` is one sentence and
/// `"Hallo. "` is two.
pub fn count_sentences(text: &str) -> usize {
    sentence_break().find_iter(text).count() + 1
}

/// Number of words in `text`, ignoring punctuation.
pub fn count_words(text: &str) -> usize {
    text.split(|c: char| c.is_whitespace() || WORD_PUNCTUATION.contains(&c))
        .filter(|word| !word.is_empty())
        .count()
}

/// Estimated number of syllables in `text`.
///
/// Each alphabetic run counts its groups of consecutive vowels (including
/// umlauts and `y`), with at least one syllable per run. German diphthongs
/// like `ei`, `au`, `eu` and `ie` form a single group. Digits and symbols
/// contribute nothing, so purely numeric text yields 0.
pub fn count_syllables(text: &str) -> usize {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(word_syllables)
        .sum()
}

fn word_syllables(word: &str) -> usize {
    let mut groups = 0;
    let mut in_vowel = false;
    for c in word.chars().flat_map(char::to_lowercase) {
        let vowel = is_vowel(c);
        if vowel && !in_vowel {
            groups += 1;
        }
        in_vowel = vowel;
    }
    groups.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e'
            | 'i'
            | 'o'
            | 'u'
            | 'y'
            | 'ä'
            | 'ö'
            | 'ü'
            | 'à'
            | 'á'
            | 'â'
            | 'è'
            | 'é'
            | 'ê'
            | 'î'
            | 'ô'
            | 'û'
    )
}

/// Flesch–Kincaid grade level from raw counts.
///
/// `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
///
/// Callers must pass non-zero `sentences` and `words`.
pub fn flesch_kincaid_grade(sentences: usize, words: usize, syllables: usize) -> f64 {
    0.39 * (words as f64 / sentences as f64) + 11.8 * (syllables as f64 / words as f64) - 15.59
}

/// Readability complexity of `text` as a Flesch–Kincaid grade.
///
/// Text without words has complexity 0. A syllable count of 0 (numbers,
/// emoji) is replaced by 1 so the grade stays defined.
pub fn complexity(text: &str) -> f64 {
    let words = count_words(text);
    if words == 0 {
        return 0.0;
    }

    let sentences = count_sentences(text);
    let syllables = count_syllables(text).max(1);
    flesch_kincaid_grade(sentences, words, syllables)
}
