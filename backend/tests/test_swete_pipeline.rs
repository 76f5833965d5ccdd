mod helpers;

use koine_backend::section_names::{NameLanguage, SectionNames};
use koine_backend::septuagint::{format_swete, SweteOptions, TextColumn, BANNER};
use koine_backend::tabular::load_tsv;
use koine_backend::types::ParseError;

use helpers::{fixture_path, missing_path, write_fixture};

const VERSIFICATION: &str = "0\tGen.1:1\n3\tGen.1:2\n5\tExo.1:1\n";
const WORDS: &str = "w1\tἘν\nw2\tἀρχῇ\nw3\tἐποίησεν\nw4\tὁ\nw5\tθεὸς\nw6\tΤαῦτα\nw7\t\"τὰ ὀνόματα\"\n";

#[test]
fn test_swete_from_files() {
    let dir = write_fixture(&[
        ("00-Swete_versification.csv", VERSIFICATION),
        ("01-Swete_word_with_punctuations.csv", WORDS),
    ]);

    let versification = load_tsv(&fixture_path(&dir, "00-Swete_versification.csv"), false);
    let words = load_tsv(&fixture_path(&dir, "01-Swete_word_with_punctuations.csv"), false);
    assert_eq!(versification.len(), 3);
    assert_eq!(words.len(), 7);

    let text = format_swete(&versification, &words, &SectionNames::swete(), &SweteOptions::default()).unwrap();

    let expected = format!(
        "\n{b}\nGenesis 1\n{b}\nἘν ἀρχῇ ἐποίησεν\nὁ θεὸς\n\n{b}\nExodus 1\n{b}\nΤαῦτα τὰ ὀνόματα\n",
        b = BANNER
    );
    assert_eq!(text, expected);
}

#[test]
fn test_swete_words_with_headers() {
    let dir = write_fixture(&[
        ("versification.csv", "0\tPss.1:1\n"),
        ("words.csv", "id\ttranslit\tword\nw1\tmakarios\tμακάριος\nw2\taner\tἀνήρ\n"),
    ]);

    let versification = load_tsv(&fixture_path(&dir, "versification.csv"), false);
    let words = load_tsv(&fixture_path(&dir, "words.csv"), true);
    let options = SweteOptions {
        language: NameLanguage::Transliterated,
        text_column: TextColumn::Name("translit".to_string()),
    };

    let text = format_swete(&versification, &words, &SectionNames::swete(), &options).unwrap();
    assert!(text.contains("\nPsalmoi Solomontos 1\n"));
    assert!(text.ends_with("makarios aner\n"));

    let options = SweteOptions { text_column: TextColumn::Name("word".to_string()), ..Default::default() };
    let text = format_swete(&versification, &words, &SectionNames::swete(), &options).unwrap();
    assert!(text.ends_with("μακάριος ἀνήρ\n"));
}

#[test]
fn test_swete_missing_word_table_degrades() {
    let dir = write_fixture(&[("versification.csv", VERSIFICATION)]);

    let versification = load_tsv(&fixture_path(&dir, "versification.csv"), false);
    let words = load_tsv(&missing_path(&dir), false);
    assert!(words.is_empty());

    let text = format_swete(&versification, &words, &SectionNames::swete(), &SweteOptions::default()).unwrap();
    assert_eq!(text.matches("Genesis 1").count(), 1);
    assert_eq!(text.matches("Exodus 1").count(), 1);
}

#[test]
fn test_swete_malformed_reference_aborts() {
    let dir = write_fixture(&[
        ("versification.csv", "0\tGen.1:1\n2\tGen 1 3\n"),
        ("words.csv", WORDS),
    ]);

    let versification = load_tsv(&fixture_path(&dir, "versification.csv"), false);
    let words = load_tsv(&fixture_path(&dir, "words.csv"), false);

    let err = format_swete(&versification, &words, &SectionNames::swete(), &SweteOptions::default()).unwrap_err();
    assert_eq!(err, ParseError::VerseReference("Gen 1 3".to_string()));
}

#[test]
fn test_swete_runs_are_identical() {
    let dir = write_fixture(&[("v.csv", VERSIFICATION), ("w.csv", WORDS)]);

    let run = || {
        let versification = load_tsv(&fixture_path(&dir, "v.csv"), false);
        let words = load_tsv(&fixture_path(&dir, "w.csv"), false);
        format_swete(&versification, &words, &SectionNames::swete(), &SweteOptions::default()).unwrap()
    };

    assert_eq!(run(), run());
}
