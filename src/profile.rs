//! Subject profile answers that need more than vocabulary matching.
//!
//! Currently only the age prompt: subjects answer with digits ("23"), with a
//! sentence ("ich bin 23"), or spell the number out ("dreiundzwanzig").

use std::fmt;

/// Youngest admissible subject.
pub const MIN_AGE: u32 = 16;
/// Oldest admissible subject.
pub const MAX_AGE: u32 = 80;

/// Why an age answer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeError {
    /// No number could be recognized in the answer
    Unrecognized,
    /// Below [`MIN_AGE`]
    TooYoung { min: u32 },
    /// Above [`MAX_AGE`]
    TooOld { max: u32 },
}

impl AgeError {
    /// Reply shown to the subject.
    ///
    /// With `self_reference` the bot apologizes in first person when it could
    /// not read the answer.
    pub fn reply(&self, self_reference: bool) -> String {
        match self {
            AgeError::Unrecognized if self_reference => {
                "Es tut mir leid, ich habe dein Alter leider nicht verstanden.".to_string()
            }
            AgeError::Unrecognized => "Die Eingabe deines Alters wurde nicht erkannt.".to_string(),
            AgeError::TooYoung { min } => format!(
                "Für die Teilnahme am Experiment musst du **{} Jahre oder älter** sein.",
                min
            ),
            AgeError::TooOld { max } => format!(
                "Für die Teilnahme am Experiment musst du **{} Jahre oder jünger** sein.",
                max
            ),
        }
    }
}

impl fmt::Display for AgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeError::Unrecognized => write!(f, "age not recognized"),
            AgeError::TooYoung { min } => write!(f, "age below minimum of {}", min),
            AgeError::TooOld { max } => write!(f, "age above maximum of {}", max),
        }
    }
}

impl std::error::Error for AgeError {}

/// Recognize an age in a free-text answer.
///
/// The first run of ASCII digits wins. Without digits, each word is tried as
/// a German number word between 0 and 99.
pub fn parse_age(input: &str) -> Option<u32> {
    if let Some(digits) = input
        .split(|c: char| !c.is_ascii_digit())
        .find(|run| !run.is_empty())
    {
        return digits.parse().ok();
    }

    input
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .find_map(|word| german_number(&word.to_lowercase()))
}

/// Recognize and range-check an age answer.
pub fn validate_age(input: &str) -> Result<u32, AgeError> {
    let age = parse_age(input).ok_or(AgeError::Unrecognized)?;
    if age < MIN_AGE {
        return Err(AgeError::TooYoung { min: MIN_AGE });
    }
    if age > MAX_AGE {
        return Err(AgeError::TooOld { max: MAX_AGE });
    }
    Ok(age)
}

fn german_units(word: &str) -> Option<u32> {
    let value = match word {
        "null" => 0,
        "eins" | "ein" | "eine" => 1,
        "zwei" => 2,
        "drei" => 3,
        "vier" => 4,
        "fünf" | "fuenf" => 5,
        "sechs" => 6,
        "sieben" => 7,
        "acht" => 8,
        "neun" => 9,
        _ => return None,
    };
    Some(value)
}

fn german_tens(word: &str) -> Option<u32> {
    let value = match word {
        "zwanzig" => 20,
        "dreißig" | "dreissig" => 30,
        "vierzig" => 40,
        "fünfzig" | "fuenfzig" => 50,
        "sechzig" => 60,
        "siebzig" => 70,
        "achtzig" => 80,
        "neunzig" => 90,
        _ => return None,
    };
    Some(value)
}

fn german_teens(word: &str) -> Option<u32> {
    let value = match word {
        "zehn" => 10,
        "elf" => 11,
        "zwölf" | "zwoelf" => 12,
        "dreizehn" => 13,
        "vierzehn" => 14,
        "fünfzehn" | "fuenfzehn" => 15,
        "sechzehn" => 16,
        "siebzehn" => 17,
        "achtzehn" => 18,
        "neunzehn" => 19,
        _ => return None,
    };
    Some(value)
}

/// Value of a lowercase German number word below 100.
fn german_number(word: &str) -> Option<u32> {
    // "eins" is only valid standalone; compounds use "ein"
    if word == "ein" || word == "eine" {
        return None;
    }
    if let Some(value) = german_units(word)
        .or_else(|| german_teens(word))
        .or_else(|| german_tens(word))
    {
        return Some(value);
    }

    let (units, tens) = word.split_once("und")?;
    if units == "eins" {
        return None;
    }
    Some(german_units(units)? + german_tens(tens)?)
}
