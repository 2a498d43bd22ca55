// Base64 encode/decode of UTF-8 text.
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, ToolError};

pub fn base64_encode(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(ToolError::validation("input is empty"));
    }
    Ok(STANDARD.encode(input.as_bytes()))
}

/// Decodes standard Base64; embedded whitespace and line breaks are ignored.
pub fn base64_decode(input: &str) -> Result<String> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(ToolError::validation("input is empty"));
    }
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|err| ToolError::validation(format!("invalid Base64: {err}")))?;
    String::from_utf8(bytes)
        .map_err(|_| ToolError::validation("decoded bytes are not valid UTF-8 text"))
}
