// JSON <-> tree, keeping object key order.
use serde_json::Value;

use crate::convert::tree::{Node, Scalar};
use crate::convert::Format;
use crate::error::{Result, ToolError};

/// Parses JSON text; errors keep serde_json's line/column message.
pub fn parse(input: &str) -> Result<Node> {
    let value: Value = serde_json::from_str(input).map_err(|err| ToolError::parse(Format::Json, err))?;
    Ok(Node::from(value))
}

/// Pretty-prints with two-space indentation.
pub fn serialize(node: &Node) -> Result<String> {
    serde_json::to_string_pretty(node).map_err(|err| ToolError::parse(Format::Json, err))
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(Scalar::Number(n)),
            Value::String(s) => Node::Scalar(Scalar::String(s)),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}
