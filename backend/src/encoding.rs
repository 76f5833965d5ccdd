// Character encoding detection for the source text files.
// Both the tab-delimited tables and the XML books go through here.

use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_16LE, UTF_16BE, UTF_8};
use std::fs;
use std::path::Path;

use crate::logger;

/// Reads a text file, honours a byte order mark if there is one, and returns
/// UTF-8 text with Unix line endings.
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;

    Ok(decode_text(&bytes, path))
}

fn decode_text(bytes: &[u8], path: &Path) -> String {
    let (encoding, bom_len) = detect_encoding(bytes);

    logger::debug(&format!(
        "File: {:?}, Encoding: {}, BOM: {}",
        path.file_name().unwrap_or_default(),
        encoding.name(),
        bom_len > 0
    ));

    let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);

    if had_errors {
        logger::warn(&format!("Encoding errors detected while decoding {:?}", path));
    }

    decoded.replace("\r\n", "\n")
}

/// Detects the encoding from the BOM. Returns the encoding and the BOM length in bytes.
fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, usize) {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return (UTF_16LE, 2);
    }

    if bytes.starts_with(&[0xFE, 0xFF]) {
        return (UTF_16BE, 2);
    }

    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return (UTF_8, 3);
    }

    (UTF_8, 0)
}
