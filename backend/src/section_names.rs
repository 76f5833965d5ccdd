//! Display names of the Septuagint books, keyed by the three character
//! abbreviation used in the Swete versification table.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encoding::read_text_file;

/// Book names for one abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[String; 3]", into = "[String; 3]")]
pub struct SectionName {
    pub english: String,
    pub greek: String,
    pub transliterated: String,
}

impl From<[String; 3]> for SectionName {
    fn from([english, greek, transliterated]: [String; 3]) -> Self {
        SectionName { english, greek, transliterated }
    }
}

impl From<SectionName> for [String; 3] {
    fn from(n: SectionName) -> Self {
        [n.english, n.greek, n.transliterated]
    }
}

impl SectionName {
    pub fn in_language(&self, language: NameLanguage) -> &str {
        match language {
            NameLanguage::English => &self.english,
            NameLanguage::Greek => &self.greek,
            NameLanguage::Transliterated => &self.transliterated,
        }
    }
}

/// Which of the three names is shown in the book banners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameLanguage {
    #[default]
    English,
    Greek,
    Transliterated,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid NameLanguage value: {0}")]
pub struct ParseNameLanguageError(String);

impl FromStr for NameLanguage {
    type Err = ParseNameLanguageError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "english" | "en" => Ok(NameLanguage::English),
            "greek" | "grc" => Ok(NameLanguage::Greek),
            "transliterated" => Ok(NameLanguage::Transliterated),
            _ => Err(ParseNameLanguageError(s.to_string())),
        }
    }
}

impl std::fmt::Display for NameLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NameLanguage::English => "english",
            NameLanguage::Greek => "greek",
            NameLanguage::Transliterated => "transliterated",
        };
        write!(f, "{}", s)
    }
}

/// (abbreviation, English, Greek, transliterated)
const SWETE_SECTION_NAMES: &[(&str, &str, &str, &str)] = &[
    ("Gen", "Genesis", "Γένεσις", "Genesis"),
    ("Exo", "Exodus", "Ἔξοδος", "Exodos"),
    ("Lev", "Leviticus", "Λευιτικόν", "Levitikon"),
    ("Num", "Numbers", "Ἀριθμοί", "Arithmoi"),
    ("Deu", "Deuteronomy", "Δευτερονόμιον", "Deuteronomion"),
    ("Jos", "Joshua", "Ἰησοῦς Ναυῆ", "Iesous Naue"),
    ("Jdg", "Judges", "Κριταί", "Kritai"),
    ("Rut", "Ruth", "Ῥούθ", "Ruth"),
    ("1Sa", "1 Samuel", "1 Σαμουήλ", "1 Samouel"),
    ("2Sa", "2 Samuel", "2 Σαμουήλ", "2 Samouel"),
    ("1Ki", "1 Kings", "1 Βασιλειῶν", "1 Basileion"),
    ("2Ki", "2 Kings", "2 Βασιλειῶν", "2 Basileion"),
    ("1Ch", "1 Chronicles", "1 Παραλειπομένων", "1 Paraleipomenon"),
    ("2Ch", "2 Chronicles", "2 Παραλειπομένων", "2 Paraleipomenon"),
    ("1Es", "1 Esdras", "1 Ἔσδρας", "1 Esdras"),
    ("Ezr", "Ezra", "Ἔσδρας", "Esdras"),
    ("Neh", "Nehemiah", "Νεεμίας", "Nehemias"),
    ("Psa", "Psalms", "Ψαλμοί", "Psalmoi"),
    ("Pro", "Proverbs", "Παροιμίαι", "Paroimiai"),
    ("Ecc", "Ecclesiastes", "Ἐκκλησιαστής", "Ekklisiastes"),
    ("Sol", "Song of Solomon", "Ἰάκωβος Σολομώντος", "Iakobos Solomontos"),
    ("Job", "Job", "Ἰώβ", "Iov"),
    ("Wis", "Wisdom of Solomon", "Σοφία Σολομώντος", "Sophia Solomontos"),
    ("Sip", "Sirach", "Σοφία Σιράχ", "Sophia Sirach"),
    ("Sir", "Sirach (1-51)", "Σοφία Σιράχ (1-51)", "Sophia Sirach (1-51)"),
    ("Est", "Esther", "Ἐσθήρ", "Esther"),
    ("Jdt", "Judith", "Ἰουδίθ", "Ioudith"),
    ("Tob", "Tobit", "Τοβίτ", "Tobit"),
    ("Tbs", "Tobias", "Τοβίας", "Tobias"),
    ("Hos", "Hosea", "Ὡσηέ", "Hosea"),
    ("Amo", "Amos", "Ἀμώς", "Amos"),
    ("Mic", "Micah", "Μιχαίας", "Michaia"),
    ("Joe", "Joel", "Ἰωήλ", "Ioel"),
    ("Oba", "Obadiah", "Ὀβαδιού", "Obadiou"),
    ("Jon", "Jonah", "Ἰωνᾶς", "Ionas"),
    ("Nah", "Nahum", "Ναούμ", "Naoum"),
    ("Hab", "Habakkuk", "Ἀμβακοὺκ", "Ambakouk"),
    ("Zep", "Zephaniah", "Σοφονίας", "Zephania"),
    ("Hag", "Haggai", "Ἀγγαῖος", "Aggaios"),
    ("Zec", "Zechariah", "Ζαχαρίας", "Zacharias"),
    ("Mal", "Malachi", "Μαλαχίας", "Malachias"),
    ("Isa", "Isaiah", "Ἠσαΐας", "Esaias"),
    ("Jer", "Jeremiah", "Ἰερεμίας", "Ieremias"),
    ("Bar", "Baruch", "Βαρούχ", "Barouch"),
    ("Lam", "Lamentations", "Θρῆνοι", "Threnoi"),
    ("Epj", "Epistle of Jeremiah", "Ἐπιστολὴ Ἰερεμίου", "Epistole Ieremiou"),
    ("Eze", "Ezekiel", "Ἰεζεκιήλ", "Iezekiil"),
    ("Dan", "Daniel", "Δανιήλ", "Daniel"),
    ("Dat", "Daniel (Additions)", "Δανιήλ (Προσαρτήματα)", "Daniel (Prosartimata)"),
    ("Sus", "Susanna", "Σουσάννα", "Sousanna"),
    ("Sut", "Susanna (Additions)", "Σουσάννα (Προσαρτήματα)", "Sousanna (Prosartimata)"),
    ("Bel", "Bel and the Dragon", "Βελ καὶ ὁ Δράκων", "Bel kai ho Drakon"),
    ("Bet", "Bel and the Dragon (Additions)", "Βελ καὶ ὁ Δράκων (Προσαρτήματα)", "Bel kai ho Drakon (Prosartimata)"),
    ("1Ma", "1 Maccabees", "1 Μακκαβαίων", "1 Makkabaion"),
    ("2Ma", "2 Maccabees", "2 Μακκαβαίων", "2 Makkabaion"),
    ("3Ma", "3 Maccabees", "3 Μακκαβαίων", "3 Makkabaion"),
    ("4Ma", "4 Maccabees", "4 Μακκαβαίων", "4 Makkabaion"),
    ("Pss", "Psalms of Solomon", "Ψαλμοί Σολομώντος", "Psalmoi Solomontos"),
    ("1En", "1 Enoch", "1 Ἐνώχ", "1 Henoch"),
    ("Ode", "Odes of Solomon", "ᾎδαι Σολομώντος", "Adai Solomontos"),
];

/// Abbreviation to book names. Built once and passed to the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionNames {
    names: HashMap<String, SectionName>,
}

impl SectionNames {
    /// The books of the Swete edition.
    pub fn swete() -> Self {
        let names = SWETE_SECTION_NAMES
            .iter()
            .map(|(abbrev, english, greek, transliterated)| {
                (abbrev.to_string(), SectionName {
                    english: english.to_string(),
                    greek: greek.to_string(),
                    transliterated: transliterated.to_string(),
                })
            })
            .collect();
        SectionNames { names }
    }

    /// Parse a table in the form `{"Gen": ["Genesis", "Γένεσις", "Genesis"], ...}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let names: HashMap<String, SectionName> = serde_json::from_str(json)
            .context("Failed to parse section names JSON")?;
        Ok(SectionNames { names })
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = read_text_file(path)?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid section names file: {:?}", path))
    }

    /// The book name to display, or the abbreviation itself for unknown books.
    pub fn display_name<'a>(&'a self, abbrev: &'a str, language: NameLanguage) -> &'a str {
        match self.names.get(abbrev) {
            Some(name) => name.in_language(language),
            None => abbrev,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
