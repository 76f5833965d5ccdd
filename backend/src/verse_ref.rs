use regex::Regex;
use lazy_static::lazy_static;

use crate::types::ParseError;

lazy_static! {
    // Gen.1:1; 1Sa.17:4; Sip.51:30
    static ref RE_VERSE_REF: Regex = Regex::new(r"([^.]+)\.([0-9]+):([0-9]+)").unwrap();

    // verse.1.5 → 5; Matt.1.23 → 23
    static ref RE_TRAILING_NUMBER: Regex = Regex::new(r"[0-9]+$").unwrap();
}

/// A book / chapter / verse reference, e.g. `Gen.1:1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseReference {
    /// Book abbreviation, usually three characters (`Gen`, `1Sa`).
    pub book: String,
    pub chapter: String,
    pub verse: String,
}

/// Extract the reference from a versification field.
///
/// The pattern can match anywhere in the text. Text without a reference is a
/// malformed table, not a condition to skip over.
pub fn parse_verse_reference(text: &str) -> Result<VerseReference, ParseError> {
    let caps = RE_VERSE_REF
        .captures(text)
        .ok_or_else(|| ParseError::VerseReference(text.to_string()))?;

    Ok(VerseReference {
        book: caps[1].to_string(),
        chapter: caps[2].to_string(),
        verse: caps[3].to_string(),
    })
}

/// The digits at the end of a milestone id.
pub fn trailing_number(id: &str) -> Result<&str, ParseError> {
    RE_TRAILING_NUMBER
        .find(id)
        .map(|m| m.as_str())
        .ok_or_else(|| ParseError::MilestoneId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verse_reference() {
        let r = parse_verse_reference("Gen.1:1").unwrap();
        assert_eq!(r.book, "Gen");
        assert_eq!(r.chapter, "1");
        assert_eq!(r.verse, "1");
    }

    #[test]
    fn test_parse_numbered_book() {
        let r = parse_verse_reference("1Sa.17:40").unwrap();
        assert_eq!(r.book, "1Sa");
        assert_eq!(r.chapter, "17");
        assert_eq!(r.verse, "40");
    }

    #[test]
    fn test_parse_verse_reference_failure() {
        assert_eq!(
            parse_verse_reference("Gen 1:1"),
            Err(ParseError::VerseReference("Gen 1:1".to_string()))
        );
        assert!(parse_verse_reference("").is_err());
        assert!(parse_verse_reference("Gen.1").is_err());
    }

    #[test]
    fn test_trailing_number() {
        assert_eq!(trailing_number("verse.1.5"), Ok("5"));
        assert_eq!(trailing_number("Matt.1.23"), Ok("23"));
        assert_eq!(trailing_number("12"), Ok("12"));
        assert_eq!(
            trailing_number("verse.1.a"),
            Err(ParseError::MilestoneId("verse.1.a".to_string()))
        );
    }
}
