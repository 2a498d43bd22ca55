//! Structural format conversion between JSON, YAML and XML.
//!
//! Every conversion parses into a [`Node`] tree and serializes that tree into
//! the target format. JSON and YAML round-trip losslessly through the tree;
//! XML does not: a single repeated element is indistinguishable from a plain
//! child, and `@attributes` collected while parsing are rendered as ordinary
//! child elements rather than attributes.
//!
//! # Examples
//!
//! ```rust
//! use toolbox_core::convert::convert_formats;
//! use toolbox_core::config::ToolboxOptions;
//!
//! let json = convert_formats("YAML", "JSON", "name: John\nage: 30", &ToolboxOptions::default())?;
//! assert_eq!(json, "{\n  \"name\": \"John\",\n  \"age\": 30\n}");
//! # Ok::<(), toolbox_core::error::ToolError>(())
//! ```
use std::fmt;
use std::str::FromStr;

use crate::config::ToolboxOptions;
use crate::error::{Result, ToolError};

pub mod json;
pub mod tree;
pub mod xml;
pub mod yaml;

pub use tree::{insert_child, Node, Promotion, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Xml,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Xml => "XML",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "xml" => Ok(Format::Xml),
            other => Err(ToolError::validation(format!("unsupported format: {other}"))),
        }
    }
}

/// Parses `input` in the given format into a fresh tree.
pub fn parse(input: &str, format: Format) -> Result<Node> {
    match format {
        Format::Json => json::parse(input),
        Format::Yaml => yaml::parse(input),
        Format::Xml => xml::parse(input),
    }
}

/// Serializes a tree with the default options.
pub fn serialize(tree: &Node, format: Format) -> Result<String> {
    serialize_with(tree, format, &ToolboxOptions::default())
}

pub fn serialize_with(tree: &Node, format: Format, options: &ToolboxOptions) -> Result<String> {
    match format {
        Format::Json => json::serialize(tree),
        Format::Yaml => yaml::serialize(tree),
        Format::Xml => Ok(xml::serialize(tree, options)),
    }
}

/// Converts a document between formats named by the UI ("JSON", "yaml", ...).
///
/// Converting to the same format still parses and re-serializes, so the call
/// doubles as a validating pretty-printer.
pub fn convert_formats(from: &str, to: &str, input: &str, options: &ToolboxOptions) -> Result<String> {
    let from: Format = from.parse()?;
    let to: Format = to.parse()?;
    if input.trim().is_empty() {
        return Err(ToolError::validation("input is empty"));
    }
    let tree = parse(input, from).inspect_err(|err| {
        tracing::warn!(%from, %to, "conversion rejected: {err}");
    })?;
    let output = serialize_with(&tree, to, options)?;
    tracing::debug!(%from, %to, bytes = output.len(), "converted document");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
        assert_eq!(" Xml ".parse::<Format>().unwrap(), Format::Xml);
        assert!(matches!(
            "toml".parse::<Format>().unwrap_err(),
            ToolError::Validation(_)
        ));
    }

    #[test]
    fn yaml_to_json_keeps_order_and_numbers() {
        let tree = parse("name: John\nage: 30", Format::Yaml).unwrap();
        let json = serialize(&tree, Format::Json).unwrap();
        assert_eq!(json, "{\n  \"name\": \"John\",\n  \"age\": 30\n}");
    }

    #[test]
    fn json_round_trip_is_structurally_equal() {
        let doc = r#"{"b":[1,2.5,{"z":null,"a":false}],"a":"text","n":-12}"#;
        let tree = parse(doc, Format::Json).unwrap();
        let again = parse(&serialize(&tree, Format::Json).unwrap(), Format::Json).unwrap();
        assert_eq!(again, tree);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse("{invalid", Format::Json).unwrap_err();
        assert!(matches!(err, ToolError::Parse { format: Format::Json, .. }));
    }

    #[test]
    fn xml_shape_depends_on_sibling_count() {
        let two = parse("<root><item>JavaScript</item><item>Python</item></root>", Format::Xml)
            .unwrap();
        let one = parse("<root><item>JavaScript</item></root>", Format::Xml).unwrap();
        assert!(matches!(two.get("item"), Some(Node::Sequence(items)) if items.len() == 2));
        assert!(matches!(one.get("item"), Some(Node::Scalar(Scalar::String(s))) if s == "JavaScript"));
        assert_ne!(
            std::mem::discriminant(two.get("item").unwrap()),
            std::mem::discriminant(one.get("item").unwrap())
        );
    }

    #[test]
    fn xml_to_json_keeps_values_as_strings() {
        let json = convert_formats(
            "XML",
            "JSON",
            "<root><name>John Doe</name><age>30</age></root>",
            &ToolboxOptions::default(),
        )
        .unwrap();
        assert_eq!(json, "{\n  \"name\": \"John Doe\",\n  \"age\": \"30\"\n}");
    }

    #[test]
    fn same_format_conversion_reformats() {
        let out = convert_formats("json", "json", "{\"a\":[1,2]}", &ToolboxOptions::default())
            .unwrap();
        assert_eq!(out, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn empty_input_and_bad_selectors_are_rejected() {
        let opts = ToolboxOptions::default();
        assert!(matches!(
            convert_formats("json", "yaml", "   ", &opts).unwrap_err(),
            ToolError::Validation(_)
        ));
        assert!(matches!(
            convert_formats("csv", "yaml", "a,b", &opts).unwrap_err(),
            ToolError::Validation(_)
        ));
    }
}
