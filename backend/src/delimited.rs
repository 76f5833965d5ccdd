//! Splitting one line of delimited text into fields.
//!
//! Fields may be quoted with `'` or `"`. Inside a quoted span the delimiter is
//! literal, and the active quote character doubled (`''` or `""`) stands for
//! one literal quote. The other quote character has no special meaning while a
//! span is open.

use crate::types::Row;

pub const TAB: char = '\t';

/// Fields of a line, plus whether the line ended with a quoted span still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub fields: Row,
    pub unbalanced: bool,
}

/// Split `line` on `delimiter` outside of quotes. Always returns at least one field.
pub fn parse_row(line: &str, delimiter: char) -> Row {
    parse_row_checked(line, delimiter).fields
}

/// Same as [`parse_row`], also reporting an unterminated quoted span.
///
/// An unterminated span is not an error: the rest of the line is kept in the
/// last field.
pub fn parse_row_checked(line: &str, delimiter: char) -> ParsedRow {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quote_char: Option<char> = None;

    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match quote_char {
            Some(q) if c == q => {
                if chars.peek() == Some(&q) {
                    // Doubled quote inside a span
                    current.push(q);
                    chars.next();
                } else {
                    quote_char = None;
                }
            }
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => quote_char = Some(c),
            None if c == delimiter => fields.push(std::mem::take(&mut current)),
            None => current.push(c),
        }
    }

    fields.push(current);

    ParsedRow {
        fields,
        unbalanced: quote_char.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unquoted_line_splits_on_tab() {
        let lines = ["0\tGen.1:1", "a\tb\tc", "single", "", "\t", "a\t\tb\t"];
        for line in lines {
            let expected: Row = line.split('\t').map(|s| s.to_string()).collect();
            assert_eq!(parse_row(line, TAB), expected, "line: {:?}", line);
        }
    }

    #[test]
    fn test_empty_line_is_one_empty_field() {
        assert_eq!(parse_row("", TAB), row(&[""]));
    }

    #[test]
    fn test_quoted_tab_is_literal() {
        assert_eq!(parse_row("\"a\tb\"\tc", TAB), row(&["a\tb", "c"]));
        assert_eq!(parse_row("'a\tb'\tc", TAB), row(&["a\tb", "c"]));
    }

    #[test]
    fn test_doubled_quote_is_one_literal_quote() {
        assert_eq!(parse_row("\"say \"\"hi\"\"\"\tx", TAB), row(&["say \"hi\"", "x"]));
        assert_eq!(parse_row("'it''s'\tx", TAB), row(&["it's", "x"]));
    }

    #[test]
    fn test_other_quote_inside_span_is_literal() {
        assert_eq!(parse_row("\"it's\"\tx", TAB), row(&["it's", "x"]));
        assert_eq!(parse_row("'a \"b\" c'", TAB), row(&["a \"b\" c"]));
    }

    #[test]
    fn test_quotes_are_removed_mid_field() {
        assert_eq!(parse_row("ab'cd'ef", TAB), row(&["abcdef"]));
    }

    #[test]
    fn test_greek_text_passes_through() {
        assert_eq!(
            parse_row("w1\tἘν\tἀρχῇ", TAB),
            row(&["w1", "Ἐν", "ἀρχῇ"])
        );
    }

    #[test]
    fn test_unbalanced_quote_runs_to_end_of_line() {
        let parsed = parse_row_checked("a\t\"b\tc", TAB);
        assert_eq!(parsed.fields, row(&["a", "b\tc"]));
        assert!(parsed.unbalanced);

        let parsed = parse_row_checked("a\t\"b\"\tc", TAB);
        assert!(!parsed.unbalanced);
    }

    #[test]
    fn test_other_delimiter() {
        assert_eq!(parse_row("a,'b,c',d", ','), row(&["a", "b,c", "d"]));
    }
}
