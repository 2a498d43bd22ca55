//! Display and rendering options passed in from the browser host.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{Result, ToolError};

/// Options shared by the conversion tools.
///
/// Every field is optional on the JS side; missing fields fall back to the
/// defaults used by the toolbox UI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolboxOptions {
    /// Decimal places shown for length, weight, speed and storage results.
    pub linear_precision: usize,
    /// Decimal places shown for temperature results.
    pub temperature_precision: usize,
    /// Name of the wrapping element when rendering XML.
    pub xml_root: String,
    /// Element name used for each entry of a sequence in XML output.
    pub xml_item: String,
    /// Maximum number of characters kept in a history preview.
    pub preview_limit: usize,
}

impl Default for ToolboxOptions {
    fn default() -> Self {
        Self {
            linear_precision: 6,
            temperature_precision: 4,
            xml_root: "root".into(),
            xml_item: "item".into(),
            preview_limit: 100,
        }
    }
}

impl ToolboxOptions {
    /// Decodes options from a JS value; `undefined` and `null` yield defaults.
    pub fn from_js(value: JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|err| ToolError::validation(format!("invalid options: {err}")))
    }

    /// Decodes options from a JSON document, used by native callers and tests.
    pub fn from_json(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(input)
            .map_err(|err| ToolError::validation(format!("invalid options: {err}")))
    }
}
