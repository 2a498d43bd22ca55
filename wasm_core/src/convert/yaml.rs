// YAML <-> tree. Tagged values are unwrapped and non-string keys stringified.
use serde_json::Number;
use serde_yaml::Value;

use crate::convert::tree::{Node, Scalar};
use crate::convert::Format;
use crate::error::{Result, ToolError};

/// Parses YAML text, resolving `<<` merge keys before building the tree.
pub fn parse(input: &str) -> Result<Node> {
    let mut value: Value =
        serde_yaml::from_str(input).map_err(|err| ToolError::parse(Format::Yaml, err))?;
    value
        .apply_merge()
        .map_err(|err| ToolError::parse(Format::Yaml, err))?;
    Ok(yaml_to_node(value))
}

/// Emits block YAML with sequences indented under their keys.
pub fn serialize(node: &Node) -> Result<String> {
    let text = serde_yaml::to_string(node).map_err(|err| ToolError::parse(Format::Yaml, err))?;
    Ok(indent_sequences(&text))
}

/// serde_yaml writes `key:\n- a`; shift each such sequence block two columns right.
fn indent_sequences(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    // Original indents of the sequences currently being shifted.
    let mut open: Vec<usize> = Vec::new();
    // Key column of the previous line when it was a bare `key:` line.
    let mut pending_key: Option<usize> = None;
    // Lines indented past this column belong to a block scalar.
    let mut scalar_block: Option<usize> = None;

    for line in text.lines() {
        let indent = line.len() - line.trim_start_matches(' ').len();
        let content = &line[indent..];

        if let Some(col) = scalar_block {
            if content.is_empty() || indent > col {
                push_shifted(&mut out, line, 2 * open.len());
                continue;
            }
            scalar_block = None;
        }

        let is_item = content == "-" || content.starts_with("- ");
        while let Some(&base) = open.last() {
            if indent < base || (indent == base && !is_item) {
                open.pop();
            } else {
                break;
            }
        }
        if is_item && pending_key == Some(indent) {
            open.push(indent);
        }
        push_shifted(&mut out, line, 2 * open.len());

        let (key_col, body) = strip_item_markers(indent, content);
        pending_key = (body.ends_with(':') && !body.starts_with('-')).then_some(key_col);
        let indicator = body.rsplit(' ').next().unwrap_or_default();
        if is_block_indicator(indicator) {
            // A bare `- |` item nests its text under the dash, not a key.
            let owner = if indicator.len() == body.len() {
                key_col.saturating_sub(2)
            } else {
                key_col
            };
            scalar_block = Some(owner);
        }
    }
    out
}

/// `|`, `>`, optionally followed by an indentation digit and a chomping sign.
fn is_block_indicator(token: &str) -> bool {
    let mut chars = token.chars();
    if !matches!(chars.next(), Some('|' | '>')) {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    match rest.as_slice() {
        [] => true,
        [a] => a.is_ascii_digit() || matches!(a, '-' | '+'),
        [a, b] => {
            (a.is_ascii_digit() && matches!(b, '-' | '+'))
                || (matches!(a, '-' | '+') && b.is_ascii_digit())
        }
        _ => false,
    }
}

fn strip_item_markers(mut col: usize, mut body: &str) -> (usize, &str) {
    while let Some(rest) = body.strip_prefix("- ") {
        body = rest;
        col += 2;
    }
    (col, body)
}

fn push_shifted(out: &mut String, line: &str, shift: usize) {
    if !line.is_empty() {
        out.extend(std::iter::repeat(' ').take(shift));
    }
    out.push_str(line);
    out.push('\n');
}

fn yaml_to_node(value: Value) -> Node {
    match value {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
        Value::Number(num) => {
            let number = if let Some(i) = num.as_i64() {
                Some(Number::from(i))
            } else if let Some(u) = num.as_u64() {
                Some(Number::from(u))
            } else {
                num.as_f64().and_then(Number::from_f64)
            };
            // .nan and .inf have no JSON number; keep their YAML spelling.
            match number {
                Some(n) => Node::Scalar(Scalar::Number(n)),
                None => Node::string(num.to_string()),
            }
        }
        Value::String(s) => Node::Scalar(Scalar::String(s)),
        Value::Sequence(seq) => Node::Sequence(seq.into_iter().map(yaml_to_node).collect()),
        Value::Mapping(map) => Node::Mapping(
            map.into_iter()
                .map(|(key, value)| (key_text(key), yaml_to_node(value)))
                .collect(),
        ),
        Value::Tagged(tagged) => yaml_to_node(tagged.value),
    }
}

fn key_text(key: Value) -> String {
    match key {
        Value::String(s) => s,
        other => serde_yaml::to_string(&other)
            .unwrap_or_default()
            .trim()
            .to_string(),
    }
}
