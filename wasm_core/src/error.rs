//! Error type shared by every tool in the crate.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::convert::Format;

/// Errors surfaced synchronously to the calling UI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// Bad numeric input, malformed selector, or otherwise unusable argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unit category that is not part of the table.
    #[error("unknown unit category: {0}")]
    UnknownCategory(String),

    /// Unit name that does not belong to the requested category.
    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: String, unit: String },

    /// Malformed JSON, YAML or XML input.
    #[error("{format} parse error: {message}")]
    Parse { format: Format, message: String },
}

impl ToolError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        ToolError::Validation(msg.into())
    }

    pub(crate) fn parse(format: Format, err: impl std::fmt::Display) -> Self {
        ToolError::Parse {
            format,
            message: err.to_string(),
        }
    }
}

impl From<ToolError> for JsValue {
    fn from(err: ToolError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;
