//! Built-in German vocabularies used by the profile and confirmation prompts.
//!
//! Spellings are kept exactly as collected during piloting, including the
//! mixed-case duplicates (`"Abitur"` and `"abitur"`). The matcher compares
//! case-sensitively, so both forms are needed.

use std::sync::OnceLock;

use super::{Category, VocabularyTable};

/// Names under which [`builtin`] resolves the shipped tables.
pub const BUILTIN_NAMES: [&str; 4] = ["education", "major", "gender", "yes_no"];

/// Look up a built-in table by name.
pub fn builtin(name: &str) -> Option<&'static VocabularyTable> {
    match name {
        "education" => Some(educations()),
        "major" => Some(majors()),
        "gender" => Some(genders()),
        "yes_no" => Some(yes_no()),
        _ => None,
    }
}

// Built-in data is checked by `builtin_tables_are_valid`, so it skips
// `VocabularyTable::new`.
fn table(categories: Vec<Category>) -> VocabularyTable {
    VocabularyTable { categories }
}

/// Highest completed education.
pub fn educations() -> &'static VocabularyTable {
    static TABLE: OnceLock<VocabularyTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        table(vec![
            Category::new("none", "Kein Schulabschluss", &["keinen", "kein", "kein abschluss"]),
            Category::new(
                "elementary",
                "Grund-/Hauptschulabschluss",
                &["Grundschule", "Hauptschule", "Hauptschulabschluss", "haupt"],
            ),
            Category::new(
                "real",
                "Realschulabschluss",
                &["real", "realschule", "realschulabschluss", "mittlere reife", "real"],
            ),
            Category::new(
                "abi",
                "Abitur",
                &[
                    "Abitur",
                    "abitur",
                    "abi",
                    "matura",
                    "allgemeinbildendes abitur",
                    "fachliches abitur",
                    "fachabi",
                    "gymi",
                ],
            ),
            Category::new(
                "bachelor",
                "Bachelor",
                &[
                    "bachelor",
                    "Bachelor",
                    "bachelor of science",
                    "bachelor of arts",
                    "bachelor of engineering",
                    "B.Sc.",
                    "B. Sc.",
                    "b sc",
                    "b.sc.",
                    "bsc",
                    "b.sc",
                ],
            ),
            Category::new(
                "master",
                "Master",
                &[
                    "master",
                    "Master",
                    "master of science",
                    "master of arts",
                    "master of engineering",
                    "M.Sc.",
                    "M. Sc.",
                    "m sc",
                    "m.sc.",
                    "msc",
                    "m.sc",
                ],
            ),
            Category::new(
                "diplom",
                "Diplom",
                &[
                    "diplom",
                    "dipl.",
                    "dipl",
                    "diplom-",
                    "diplomgrad",
                    "diplomingenieur",
                    "dipl-ing.",
                    "diplom ing",
                ],
            ),
            Category::new(
                "staatsexamen",
                "Staatsexamen",
                &[
                    "stex",
                    "erstes staatsexamen",
                    "1. staatsexamen",
                    "zweites staatsexamen",
                    "2. staatsexamen",
                    "erstes stex",
                    "zweites stex",
                    "1. stex",
                    "2. stex",
                ],
            ),
            Category::new(
                "phd",
                "Ph.D.",
                &["doktor", "dr.", "promotion", "phd", "promoviert", "dokter", "dr"],
            ),
        ])
    })
}

/// Field of study.
pub fn majors() -> &'static VocabularyTable {
    static TABLE: OnceLock<VocabularyTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        table(vec![
            Category::new(
                "wiwi",
                "WING / INWI / TVWL",
                &[
                    "wing",
                    "wirtschaftsingenieurwesen",
                    "wirtschaftsingenieur",
                    "wiwi",
                    "wing",
                    "tvwl",
                    "inwi",
                    "informationswirtschaft",
                    "technische vwl",
                    "technische volkswirtschaftslehre",
                    "wirting",
                ],
            ),
            Category::new("maschinenbau", "Maschinenbau", &["maschinenbau", "maschbau"]),
            Category::new("informatik", "Informatik", &["info", "informatik"]),
            Category::new(
                "mathe",
                "(Wirtschafts-)Mathematik",
                &["mathe", "mathematik", "wima", "Wirtschaftsmathe", "Wirtschaftsmathematik"],
            ),
            Category::new(
                "etec",
                "Elektrotechnik",
                &["elektrotechnik", "etec", "etechnik", "etech"],
            ),
            Category::new("physik", "Physik", &["Physik", "phys"]),
            Category::new("archi", "Architektur", &["Architektur", "archi"]),
            Category::new(
                "sonstiges",
                "Sonstiges",
                &["Sonstiges", "sonstig", "nicht dabei", "anders"],
            ),
        ])
    })
}

/// Gender.
pub fn genders() -> &'static VocabularyTable {
    static TABLE: OnceLock<VocabularyTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        table(vec![
            Category::new(
                "male",
                "männlich",
                &["männlich", "männl", "mann", "junge", "m", "männlihc", "mannlich", "mannlihc"],
            ),
            Category::new(
                "female",
                "weiblich",
                &["weiblich", "weibl", "frau", "mädchen", "w", "weiblihc"],
            ),
            Category::new("diverse", "divers", &["divers"]),
        ])
    })
}

/// Yes/no confirmations.
pub fn yes_no() -> &'static VocabularyTable {
    static TABLE: OnceLock<VocabularyTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        table(vec![
            Category::new(
                "yes",
                "Ja",
                &[
                    "jip", "ok", "okay", "oki", "oke", "jib", "jap", "yep", "ja", "yes", "jop",
                    "jupp", "jup", "klar", "si", "oui", "klaro", "jaha", "jaa", "ya", "yup",
                    "yas", "jo",
                ],
            ),
            Category::new(
                "no",
                "Nein",
                &[
                    "nein",
                    "nö",
                    "nop",
                    "nope",
                    "no",
                    "auf keinen fall",
                    "ne",
                    "nee",
                    "niemals",
                    "nöp",
                ],
            ),
        ])
    })
}
