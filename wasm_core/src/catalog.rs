//! Tool catalog and the history records handed to the hosted store.
//!
//! The core never talks to the store itself. It only shapes the record the
//! UI posts after a tool runs: a user id, a tool id and a short preview.

use serde::Serialize;

use crate::convert::Format;
use crate::error::{Result, ToolError};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ToolDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub path: &'static str,
}

pub const TOOLS: &[ToolDefinition] = &[
    ToolDefinition {
        id: "unit-converter",
        name: "Unit Converter",
        description: "Convert between units of length, weight, temperature, speed, and storage",
        category: "converters",
        tags: &["units", "length", "temperature", "storage"],
        path: "/tools/unit-converter",
    },
    ToolDefinition {
        id: "json-converter",
        name: "JSON ↔ YAML ↔ XML Converter",
        description: "Convert between JSON, YAML, and XML formats with validation",
        category: "converters",
        tags: &["json", "yaml", "xml", "format"],
        path: "/tools/json-converter",
    },
    ToolDefinition {
        id: "uuid-generator",
        name: "UUID Generator",
        description: "Generate v1, v4 and v7 UUIDs in bulk",
        category: "generators",
        tags: &["uuid", "guid", "id"],
        path: "/tools/uuid-generator",
    },
    ToolDefinition {
        id: "base64-tool",
        name: "Base64 Encoder/Decoder",
        description: "Encode text to Base64 or decode it back",
        category: "encoders",
        tags: &["base64", "encode", "decode"],
        path: "/tools/base64-tool",
    },
    ToolDefinition {
        id: "jwt-decoder",
        name: "JWT Decoder",
        description: "Inspect the header, payload and expiry of a JSON Web Token",
        category: "security",
        tags: &["jwt", "token", "auth"],
        path: "/tools/jwt-decoder",
    },
    ToolDefinition {
        id: "password-checker",
        name: "Password Strength Checker",
        description: "Score a password and estimate its entropy",
        category: "security",
        tags: &["password", "entropy", "security"],
        path: "/tools/password-checker",
    },
    ToolDefinition {
        id: "color-picker",
        name: "Color Picker",
        description: "Convert colors between HEX, RGB and HSL and build palettes",
        category: "design",
        tags: &["color", "hex", "rgb", "hsl", "palette"],
        path: "/tools/color-picker",
    },
    ToolDefinition {
        id: "gpa-calculator",
        name: "GPA Calculator",
        description: "Calculate semester and cumulative GPA from credits and grades",
        category: "education",
        tags: &["gpa", "grades", "credits"],
        path: "/tools/gpa-calculator",
    },
];

pub fn find(id: &str) -> Option<&'static ToolDefinition> {
    TOOLS.iter().find(|tool| tool.id == id)
}

/// A usage record for the hosted history table.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub user_id: String,
    pub tool_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_preview: Option<String>,
}

impl HistoryEntry {
    /// Builds a record, keeping at most `limit` characters of the preview.
    pub fn new(user_id: &str, tool_id: &str, preview: Option<&str>, limit: usize) -> Result<Self> {
        let user_id = user_id.trim();
        let tool_id = tool_id.trim();
        if user_id.is_empty() {
            return Err(ToolError::validation("user id is required"));
        }
        if tool_id.is_empty() {
            return Err(ToolError::validation("tool id is required"));
        }
        let input_preview = preview
            .filter(|text| !text.is_empty())
            .map(|text| text.chars().take(limit).collect());
        Ok(Self {
            user_id: user_id.to_string(),
            tool_id: tool_id.to_string(),
            input_preview,
        })
    }
}

/// Preview text recorded after a unit conversion, e.g. `1 Meters to Feet`.
pub fn unit_preview(value: &str, from: &str, to: &str) -> String {
    format!("{} {from} to {to}", value.trim())
}

/// Preview text recorded after a format conversion, e.g. `JSON → YAML`.
pub fn format_preview(from: Format, to: Format) -> String {
    format!("{from} → {to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_paths_match() {
        for (idx, tool) in TOOLS.iter().enumerate() {
            assert!(TOOLS[idx + 1..].iter().all(|other| other.id != tool.id));
            assert_eq!(tool.path, format!("/tools/{}", tool.id));
        }
        assert_eq!(find("json-converter").map(|t| t.category), Some("converters"));
        assert!(find("bug-fixer").is_none());
    }

    #[test]
    fn preview_is_truncated_by_characters() {
        let long = "é".repeat(150);
        let entry = HistoryEntry::new("user-1", "base64-tool", Some(&long), 100).unwrap();
        assert_eq!(entry.input_preview.unwrap().chars().count(), 100);
    }

    #[test]
    fn missing_ids_are_rejected() {
        assert!(HistoryEntry::new("", "unit-converter", None, 100).is_err());
        assert!(HistoryEntry::new("u", "  ", None, 100).is_err());
        let entry = HistoryEntry::new("u", "unit-converter", Some(""), 100).unwrap();
        assert_eq!(entry.input_preview, None);
    }

    #[test]
    fn preview_builders() {
        assert_eq!(unit_preview(" 1 ", "Meters", "Feet"), "1 Meters to Feet");
        assert_eq!(format_preview(Format::Json, Format::Yaml), "JSON → YAML");
    }
}
