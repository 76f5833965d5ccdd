//! Loading tab-delimited tables into records.

use std::path::Path;

use crate::delimited::{parse_row_checked, TAB};
use crate::encoding::read_text_file;
use crate::logger;
use crate::types::Row;

/// One data row, either as positional fields or keyed by the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Positional(Row),
    /// Values paired with the header row by position. Fields beyond the header
    /// count are dropped; headers beyond the field count have no value.
    Keyed { headers: Row, values: Row },
}

impl Record {
    /// Positional access, for either variant.
    pub fn field(&self, index: usize) -> Option<&str> {
        match self {
            Record::Positional(fields) => fields.get(index).map(|s| s.as_str()),
            Record::Keyed { values, .. } => values.get(index).map(|s| s.as_str()),
        }
    }

    /// Keyed access. Always None for positional records. With a repeated
    /// header name the last column of that name wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        match self {
            Record::Positional(_) => None,
            Record::Keyed { headers, values } => headers
                .iter()
                .take(values.len())
                .rposition(|h| h == name)
                .map(|i| values[i].as_str()),
        }
    }

    /// The values in order, regardless of representation.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Record::Positional(fields) => fields.iter().map(|s| s.as_str()).collect(),
            Record::Keyed { values, .. } => values.iter().map(|s| s.as_str()).collect(),
        }
    }
}

/// Parse the text of a whole table.
///
/// The content is trimmed before splitting on `\n`, so leading and trailing
/// blank lines don't produce records. Line numbers in warnings count from the
/// start of the untrimmed content.
pub fn records_from_str(content: &str, has_headers: bool) -> Vec<Record> {
    let first_line = first_line_number(content);

    let mut rows = Vec::new();

    for (line_idx, line) in content.trim().split('\n').enumerate() {
        let parsed = parse_row_checked(line, TAB);
        if parsed.unbalanced {
            logger::warn(&format!("Line {}: quoted field is not closed", first_line + line_idx));
        }
        rows.push(parsed.fields);
    }

    if !has_headers {
        return rows.into_iter().map(Record::Positional).collect();
    }

    let mut rows = rows.into_iter();
    let headers = match rows.next() {
        Some(h) => h,
        None => return Vec::new(),
    };

    rows.map(|mut values| {
        values.truncate(headers.len());
        Record::Keyed { headers: headers.clone(), values }
    })
    .collect()
}

/// Line number, counting from 1, of the first line left after trimming.
fn first_line_number(content: &str) -> usize {
    let leading = &content[..content.len() - content.trim_start().len()];
    leading.matches('\n').count() + 1
}

/// Load a tab-delimited file.
///
/// A file which can't be read is logged and gives an empty table, the caller
/// carries on with whatever data it has.
pub fn load_tsv(path: &Path, has_headers: bool) -> Vec<Record> {
    match read_text_file(path) {
        Ok(content) => {
            let records = records_from_str(&content, has_headers);
            logger::info(&format!("Loaded {} records from {:?}", records.len(), path));
            records
        }
        Err(e) => {
            logger::error(&format!("Error loading CSV file: {:#}", e));
            Vec::new()
        }
    }
}
