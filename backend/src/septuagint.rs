//! Plain text of the Swete Septuagint from its versification and word tables.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::section_names::{NameLanguage, SectionNames};
use crate::tabular::Record;
use crate::types::ParseError;
use crate::verse_ref::parse_verse_reference;

pub const BANNER: &str = "====================";

/// Where the word text is in a word table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextColumn {
    Index(usize),
    /// Header name, for tables loaded with a header row.
    Name(String),
}

impl TextColumn {
    pub fn text<'a>(&self, record: &'a Record) -> Option<&'a str> {
        match self {
            TextColumn::Index(i) => record.field(*i),
            TextColumn::Name(name) => record.get(name),
        }
    }
}

impl Default for TextColumn {
    fn default() -> Self {
        TextColumn::Index(1)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Empty text column")]
pub struct ParseTextColumnError;

/// A number is a column index, anything else a header name.
impl FromStr for TextColumn {
    type Err = ParseTextColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseTextColumnError);
        }
        match s.parse::<usize>() {
            Ok(i) => Ok(TextColumn::Index(i)),
            Err(_) => Ok(TextColumn::Name(s.to_string())),
        }
    }
}

impl fmt::Display for TextColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextColumn::Index(i) => write!(f, "{}", i),
            TextColumn::Name(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweteOptions {
    pub language: NameLanguage,
    pub text_column: TextColumn,
}

fn start_index(record: &Record) -> Result<usize, ParseError> {
    let value = record.field(0).unwrap_or_default();
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseError::WordIndex(value.to_string()))
}

/// Format the whole text, one line per verse.
///
/// Each versification row gives the index of the first word of a verse, the
/// verse runs up to the word before the next row's start, the last verse to
/// the end of the word table. A banner with the book name and chapter is
/// printed whenever that changes.
pub fn format_swete(
    versification: &[Record],
    words: &[Record],
    names: &SectionNames,
    options: &SweteOptions,
) -> Result<String, ParseError> {
    let mut out = String::new();
    let mut current_book: Option<String> = None;

    for (i, row) in versification.iter().enumerate() {
        let verse = parse_verse_reference(row.field(1).unwrap_or_default())?;

        let first_word = start_index(row)?;
        let last_word = match versification.get(i + 1) {
            Some(next) => start_index(next)?.checked_sub(1),
            None => words.len().checked_sub(1),
        };

        let book_base = names.display_name(&verse.book, options.language);
        let book = format!("{} {}", book_base, verse.chapter);

        if current_book.as_deref() != Some(book.as_str()) {
            out.push('\n');
            for line in [BANNER, book.as_str(), BANNER] {
                out.push_str(line);
                out.push('\n');
            }
        }
        current_book = Some(book);

        out.push_str(&verse_text(words, first_word, last_word, &options.text_column));
        out.push('\n');
    }

    Ok(out)
}

/// Words `first..=last` joined with single spaces. Out of range indexes are
/// clamped to the table, and an end before the start gives an empty line.
fn verse_text(words: &[Record], first: usize, last: Option<usize>, text_column: &TextColumn) -> String {
    let Some(last) = last else {
        return String::new();
    };
    if words.is_empty() || first > last || first >= words.len() {
        return String::new();
    }
    let last = last.min(words.len() - 1);

    words[first..=last]
        .iter()
        .map(|w| text_column.text(w).unwrap_or_default())
        .collect::<Vec<&str>>()
        .join(" ")
}
