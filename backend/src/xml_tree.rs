//! A small element tree on top of quick-xml.
//!
//! The formatters only need the element name, the attributes, the text and
//! the child elements of each node, so that's all this keeps.

use anyhow::{anyhow, bail, Result};
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    /// Qualified element name, e.g. `w` or `xi:include`. Empty for the document node.
    pub name: String,
    pub attributes: IndexMap<String, String>,
    /// Character data of this node and all of its descendants, in document order.
    pub text: String,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(name: &str) -> Self {
        XmlNode {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }

    /// First child element, the root element when called on a document node.
    pub fn first_child(&self) -> Option<&XmlNode> {
        self.children.first()
    }
}

fn node_from_start(e: &BytesStart) -> Result<XmlNode> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut node = XmlNode::new(&name);

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.to_string();
        node.attributes.insert(key, value);
    }

    Ok(node)
}

/// Parse a whole document.
///
/// Returns a document node with an empty name, whose children are the
/// top-level elements.
pub fn parse_xml_tree(content: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(content);

    // The document node is always at the bottom of the stack.
    let mut stack: Vec<XmlNode> = vec![XmlNode::default()];
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                stack.push(node_from_start(e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let node = node_from_start(e)?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(node);
                }
            }
            Ok(Event::End(ref e)) => {
                if stack.len() < 2 {
                    bail!(
                        "Unexpected closing tag </{}> at position {}",
                        String::from_utf8_lossy(e.name().as_ref()),
                        reader.buffer_position()
                    );
                }
                if let Some(node) = stack.pop()
                    && let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&node.text);
                    parent.children.push(node);
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape()?;
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                let data = e.into_inner();
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow!("XML parse error at position {}: {:?}", reader.buffer_position(), e)),
            _ => {}
        }

        buf.clear();
    }

    if stack.len() != 1 {
        let open: Vec<&str> = stack.iter().skip(1).map(|n| n.name.as_str()).collect();
        bail!("Unclosed elements at end of document: {}", open.join(", "));
    }

    stack.pop().ok_or_else(|| anyhow!("Empty document stack"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_elements_and_attributes() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<book>
  <title type="main">Matthew</title>
  <milestone unit="verse" id="Matt.1.1"/>
  <w lemma="βίβλος">Βίβλος</w>
</book>"#;

        let doc = parse_xml_tree(xml).unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.children.len(), 1);

        let book = doc.first_child().unwrap();
        assert_eq!(book.name, "book");
        assert_eq!(book.children.len(), 3);

        let title = &book.children[0];
        assert_eq!(title.attr("type"), Some("main"));
        assert_eq!(title.text, "Matthew");

        let milestone = &book.children[1];
        assert_eq!(milestone.name, "milestone");
        assert_eq!(milestone.attr("id"), Some("Matt.1.1"));
        assert_eq!(milestone.text, "");
        assert!(milestone.children.is_empty());

        assert_eq!(book.children[2].text, "Βίβλος");
        assert_eq!(book.children[2].attr("lemma"), Some("βίβλος"));
    }

    #[test]
    fn test_text_includes_descendants_in_order() {
        let doc = parse_xml_tree("<p>a<b>x<i>y</i></b>c</p>").unwrap();
        let p = doc.first_child().unwrap();
        assert_eq!(p.text, "axyc");
        assert_eq!(p.children[0].text, "xy");
        assert_eq!(p.children[0].children[0].text, "y");
    }

    #[test]
    fn test_entities_and_cdata() {
        let doc = parse_xml_tree(r#"<r a="x &amp; y">&lt;1&gt;<![CDATA[<raw>]]></r>"#).unwrap();
        let r = doc.first_child().unwrap();
        assert_eq!(r.attr("a"), Some("x & y"));
        assert_eq!(r.text, "<1><raw>");
    }

    #[test]
    fn test_qualified_names() {
        let xml = r#"<book xmlns:xi="http://www.w3.org/2001/XInclude"><xi:include href="01-matthew.xml"/></book>"#;
        let doc = parse_xml_tree(xml).unwrap();
        let include = &doc.first_child().unwrap().children[0];
        assert_eq!(include.name, "xi:include");
        assert_eq!(include.attr("href"), Some("01-matthew.xml"));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(parse_xml_tree("<a><b></a>").is_err());
        assert!(parse_xml_tree("<a><b>").is_err());
        assert!(parse_xml_tree("</a>").is_err());
    }

    #[test]
    fn test_builder() {
        let node = XmlNode::new("title").with_attr("type", "main").with_text("Mark");
        assert_eq!(node.attr("type"), Some("main"));
        assert_eq!(node.attr("unit"), None);
        assert_eq!(node.text, "Mark");
    }
}
