// XML <-> tree. Parsing keeps attributes under `@attributes`; rendering emits
// plain nested elements only, so attributes do not survive a trip back to XML.
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::config::ToolboxOptions;
use crate::convert::tree::{insert_child, Node};
use crate::convert::Format;
use crate::error::{Result, ToolError};

/// Synthetic key holding an element's attributes.
pub const ATTRIBUTES_KEY: &str = "@attributes";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

fn xml_error(msg: impl std::fmt::Display) -> ToolError {
    ToolError::parse(Format::Xml, msg)
}

/// Parses an XML document into a tree rooted at the document element's content.
pub fn parse(input: &str) -> Result<Node> {
    let mut reader = Reader::from_str(input);
    reader.trim_text(true);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<Node> = None;
    loop {
        let event = reader
            .read_event()
            .map_err(|err| xml_error(format!("{err} at byte {}", reader.buffer_position())))?;
        match event {
            Event::Start(tag) => {
                ensure_single_root(&stack, &root)?;
                stack.push(XmlElement::open(&tag)?);
            }
            Event::Empty(tag) => {
                ensure_single_root(&stack, &root)?;
                let element = XmlElement::open(&tag)?;
                attach(element, &mut stack, &mut root);
            }
            Event::End(tag) => {
                let element = stack.pop().ok_or_else(|| {
                    xml_error(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(tag.name().as_ref())
                    ))
                })?;
                attach(element, &mut stack, &mut root);
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(xml_error)?;
                match stack.last_mut() {
                    Some(current) => current.keep_text(&text),
                    None if text.trim().is_empty() => {}
                    None => return Err(xml_error("text found outside the root element")),
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current.keep_text(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    if let Some(open) = stack.last() {
        return Err(xml_error(format!("unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| xml_error("document has no root element"))
}

fn ensure_single_root(stack: &[XmlElement], root: &Option<Node>) -> Result<()> {
    if stack.is_empty() && root.is_some() {
        return Err(xml_error("document has more than one root element"));
    }
    Ok(())
}

fn attach(element: XmlElement, stack: &mut [XmlElement], root: &mut Option<Node>) {
    let name = element.name.clone();
    let node = element.into_node();
    match stack.last_mut() {
        Some(parent) => {
            insert_child(&mut parent.fields, name, node);
        }
        None => *root = Some(node),
    }
}

#[derive(Debug)]
struct XmlElement {
    name: String,
    text: String,
    fields: IndexMap<String, Node>,
}

impl XmlElement {
    fn open(tag: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(tag.name().as_ref()).trim().to_string();
        let mut fields = IndexMap::new();
        let mut attributes = IndexMap::new();
        for attr in tag.attributes() {
            let attr = attr.map_err(xml_error)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(xml_error)?.into_owned();
            attributes.insert(key, Node::string(value));
        }
        if !attributes.is_empty() {
            fields.insert(ATTRIBUTES_KEY.to_string(), Node::Mapping(attributes));
        }
        Ok(Self {
            name,
            text: String::new(),
            fields,
        })
    }

    /// Mixed content keeps only the first non-blank text run.
    fn keep_text(&mut self, text: &str) {
        if self.text.is_empty() {
            self.text = text.trim().to_string();
        }
    }

    /// Text content wins over attributes and children, as in a DOM text lookup.
    fn into_node(self) -> Node {
        let text = self.text.trim();
        if !text.is_empty() {
            return Node::string(text);
        }
        Node::Mapping(self.fields)
    }
}

/// Renders a tree as an indented XML document wrapped in `options.xml_root`.
pub fn serialize(node: &Node, options: &ToolboxOptions) -> String {
    let mut out = String::from(XML_DECLARATION);
    let root = element_name(&options.xml_root);
    let item = element_name(&options.xml_item);
    build_xml(&mut out, &root, node, 0, &item);
    out
}

fn build_xml(buf: &mut String, name: &str, node: &Node, depth: usize, item: &str) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Null => buf.push_str(&format!("{indent}<{name}/>\n")),
        Node::Scalar(scalar) => {
            let text = xml_escape(&scalar.to_text());
            buf.push_str(&format!("{indent}<{name}>{text}</{name}>\n"));
        }
        Node::Sequence(items) if items.is_empty() => buf.push_str(&format!("{indent}<{name}/>\n")),
        Node::Sequence(items) => {
            buf.push_str(&format!("{indent}<{name}>\n"));
            for child in items {
                build_xml(buf, item, child, depth + 1, item);
            }
            buf.push_str(&format!("{indent}</{name}>\n"));
        }
        Node::Mapping(map) if map.is_empty() => buf.push_str(&format!("{indent}<{name}/>\n")),
        Node::Mapping(map) => {
            buf.push_str(&format!("{indent}<{name}>\n"));
            for (key, child) in map {
                build_xml(buf, &element_name(key), child, depth + 1, item);
            }
            buf.push_str(&format!("{indent}</{name}>\n"));
        }
    }
}

fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Coerces an arbitrary key into a well-formed element name.
fn element_name(key: &str) -> String {
    let mut name: String = key
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || matches!(ch, '_' | '-' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    match name.chars().next() {
        None => name.push('_'),
        Some(first) if !(first.is_alphabetic() || first == '_') => name.insert(0, '_'),
        Some(_) => {}
    }
    name
}
