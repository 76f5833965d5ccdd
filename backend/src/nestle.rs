//! Plain text of the Nestle 1904 Greek New Testament from its XML edition.
//!
//! The root document lists the books with `<xi:include href="..."/>`. Each
//! book file is walked in document order, and titles, milestones and words
//! are written out as text.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::encoding::read_text_file;
use crate::logger;
use crate::types::ParseError;
use crate::verse_ref::trailing_number;
use crate::xml_tree::{parse_xml_tree, XmlNode};

/// Put between a milestone number and the previous one of the same unit.
pub const MILESTONE_SEPARATOR: &str = "  ";

/// `01-matthew.xml` → `matthew`, `mark.xml` → `mark`
pub fn book_short_name(file_name: &str) -> String {
    let stem = file_name.split('.').next().unwrap_or_default();
    match stem.split_once('-') {
        Some((_, name)) => name.to_string(),
        None => stem.to_string(),
    }
}

/// The `href` of every `xi:include` under the root element, in order.
pub fn toc_from_document(document: &XmlNode) -> Vec<String> {
    let Some(root) = document.first_child() else {
        return Vec::new();
    };

    root.children
        .iter()
        .filter(|n| n.name == "xi:include")
        .filter_map(|n| n.attr("href"))
        .map(|href| href.to_string())
        .collect()
}

pub fn format_table_of_contents(book_names: &[String]) -> String {
    let mut out = String::from("Table Of Contents\n");
    for name in book_names {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out.push('\n');
    out
}

struct BookFormatter<'a> {
    book_name: &'a str,
    out: String,
    /// Milestones seen so far, per unit.
    milestones: HashMap<String, usize>,
}

impl<'a> BookFormatter<'a> {
    fn new(book_name: &'a str) -> Self {
        BookFormatter {
            book_name,
            out: String::new(),
            milestones: HashMap::new(),
        }
    }

    fn traverse(&mut self, node: Option<&XmlNode>) -> Result<(), ParseError> {
        let Some(node) = node else {
            return Ok(());
        };

        self.format_node(node)?;

        for child in node.children.iter() {
            self.traverse(Some(child))?;
        }

        Ok(())
    }

    fn format_node(&mut self, n: &XmlNode) -> Result<(), ParseError> {
        match n.name.as_str() {
            "title" if n.attr("type") == Some("main") => {
                self.out.push_str("\n\n\n\n");
                self.out.push_str(&format!("-=[ {} ({}) ]=-", n.text, self.book_name));
                self.out.push('\n');
            }

            "title" if n.attr("type").is_none() => {
                self.out.push_str("\n\n");
                self.out.push_str(&n.text);
                self.out.push('\n');
            }

            "milestone"
                if n.attr("unit") == Some("tc")
                    && matches!(n.attr("type"), Some("start") | Some("end")) =>
            {
                self.out.push_str(n.attr("display").unwrap_or_default());
            }

            "milestone" if n.attr("id").is_some_and(|id| !id.is_empty()) => {
                let id = n.attr("id").unwrap_or_default();
                let number = trailing_number(id)?;

                let unit = n
                    .attr("unit")
                    .unwrap_or_else(|| id.split('.').next().unwrap_or_default())
                    .to_string();

                let seen = self.milestones.entry(unit).or_insert(0);
                if *seen > 0 {
                    self.out.push_str(MILESTONE_SEPARATOR);
                }
                *seen += 1;

                self.out.push_str(number);
                self.out.push('.');
            }

            "w" => {
                self.out.push(' ');
                self.out.push_str(&n.text);
            }

            _ => {}
        }

        Ok(())
    }
}

/// Text of one book. `node` is usually the parsed document of the book file.
pub fn format_book(node: Option<&XmlNode>, book_name: &str) -> Result<String, ParseError> {
    let mut formatter = BookFormatter::new(book_name);
    formatter.traverse(node)?;
    Ok(formatter.out)
}

/// Table of contents followed by the text of every book it lists.
///
/// Book files are resolved relative to the directory of the root document.
/// A root document or book file which can't be read is logged and skipped.
/// Malformed XML and milestone ids without a number stop the run.
pub fn build_nestle(root_document: &Path) -> Result<String> {
    let toc = match read_text_file(root_document) {
        Ok(content) => {
            let document = parse_xml_tree(&content)
                .with_context(|| format!("Failed to parse {:?}", root_document))?;
            toc_from_document(&document)
        }
        Err(e) => {
            logger::error(&format!("Error loading root document: {:#}", e));
            Vec::new()
        }
    };

    let book_names: Vec<String> = toc.iter().map(|href| book_short_name(href)).collect();
    let base_dir = root_document.parent().unwrap_or_else(|| Path::new("."));

    let mut fulltext = format_table_of_contents(&book_names);

    for (href, book_name) in toc.iter().zip(book_names.iter()) {
        let book_path = base_dir.join(href);

        let content = match read_text_file(&book_path) {
            Ok(c) => c,
            Err(e) => {
                logger::error(&format!("Error loading book {}: {:#}", book_name, e));
                continue;
            }
        };

        let document = parse_xml_tree(&content)
            .with_context(|| format!("Failed to parse {:?}", book_path))?;

        let text = format_book(Some(&document), book_name)
            .with_context(|| format!("In book {}", book_name))?;

        logger::info(&format!("Formatted {} ({} bytes)", book_name, text.len()));
        fulltext.push_str(&text);
    }

    Ok(fulltext)
}
