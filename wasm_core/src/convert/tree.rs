// Format-agnostic tree bridging the JSON, YAML and XML converters.
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

/// Leaf values shared by all three formats.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
}

impl Scalar {
    /// Text form used when a scalar becomes XML character data.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::String(s) => s.clone(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Intermediate document value. Mappings keep insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Mapping(IndexMap<String, Node>),
}

impl Node {
    pub fn string(value: impl Into<String>) -> Self {
        Node::Scalar(Scalar::String(value.into()))
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }
}

/// What [`insert_child`] did with a named child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// First occurrence: stored as-is, not wrapped in a sequence.
    Inserted,
    /// Second occurrence: the existing value became the first element of a sequence.
    Promoted,
    /// Third or later occurrence: appended to the existing sequence.
    Appended,
}

/// Adds a named child to a mapping, promoting to a sequence on the second occurrence.
///
/// A single child therefore stays a plain value while two or more become a
/// sequence, so the output shape depends on how many siblings share a name.
pub fn insert_child(children: &mut IndexMap<String, Node>, name: String, child: Node) -> Promotion {
    match children.entry(name) {
        Entry::Vacant(slot) => {
            slot.insert(child);
            Promotion::Inserted
        }
        Entry::Occupied(mut slot) => match slot.get_mut() {
            Node::Sequence(items) => {
                items.push(child);
                Promotion::Appended
            }
            existing => {
                let first = std::mem::take(existing);
                *existing = Node::Sequence(vec![first, child]);
                Promotion::Promoted
            }
        },
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
            Node::Scalar(Scalar::Number(n)) => n.serialize(serializer),
            Node::Scalar(Scalar::Bool(b)) => serializer.serialize_bool(*b),
            Node::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}
