use console_error_panic_hook::set_once as set_panic_hook;
use indexmap::IndexMap;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod color;
pub mod config;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod gpa;
pub mod ids;
pub mod jwt;
pub mod logging;
pub mod password;
pub mod units;

use config::ToolboxOptions;
use convert::Format;
use error::ToolError;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    set_panic_hook();
    logging::init();
}

/// Objects cross the boundary as plain JS objects rather than `Map`s.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn convert_unit(category: &str, value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
    units::convert_named(category, value, from, to).map_err(JsValue::from)
}

/// Converts a typed value into every unit of the category, formatted for display.
#[wasm_bindgen]
pub fn convert_units(
    category: &str,
    value: &str,
    from: &str,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let options = ToolboxOptions::from_js(options)?;
    let sheet = unit_sheet(category, value, from, &options)?;
    to_js(&sheet)
}

fn unit_sheet(
    category: &str,
    value: &str,
    from: &str,
    options: &ToolboxOptions,
) -> error::Result<IndexMap<String, String>> {
    let category: units::UnitCategory = category.parse()?;
    let value = units::parse_value(value)?;
    units::convert_all(category, value, from, options)
}

#[wasm_bindgen]
pub fn unit_catalog() -> Result<JsValue, JsValue> {
    to_js(&units::catalog())
}

#[wasm_bindgen]
pub fn transform_format(
    from: &str,
    to: &str,
    input: &str,
    options: JsValue,
) -> Result<String, JsValue> {
    let options = ToolboxOptions::from_js(options)?;
    convert::convert_formats(from, to, input, &options).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn generate_uuids(version: &str, count: u32) -> Result<JsValue, JsValue> {
    let ids = uuid_batch(version, count)?;
    to_js(&ids)
}

fn uuid_batch(version: &str, count: u32) -> error::Result<Vec<String>> {
    let version: ids::UuidVersion = version.parse()?;
    ids::generate(version, count as usize)
}

#[wasm_bindgen]
pub fn base64_encode(input: &str) -> Result<String, JsValue> {
    encoding::base64_encode(input).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn base64_decode(input: &str) -> Result<String, JsValue> {
    encoding::base64_decode(input).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn jwt_decode(token: &str) -> Result<JsValue, JsValue> {
    let now_secs = (ids::now_millis() / 1000) as i64;
    let decoded = jwt::decode(token, now_secs)?;
    to_js(&decoded)
}

#[wasm_bindgen]
pub fn password_strength(password: &str) -> Result<JsValue, JsValue> {
    to_js(&password::analyze(password))
}

#[wasm_bindgen]
pub fn color_info(hex: &str) -> Result<JsValue, JsValue> {
    let info = color::color_info(hex)?;
    to_js(&info)
}

#[wasm_bindgen]
pub fn color_palette(hex: &str) -> Result<JsValue, JsValue> {
    let colors = color::palette(hex)?;
    to_js(&colors)
}

/// `semesters` is an array of `{ name, courses: [{ name, credits, grade }] }`.
#[wasm_bindgen]
pub fn gpa_summary(semesters: JsValue) -> Result<JsValue, JsValue> {
    let semesters: Vec<gpa::Semester> = serde_wasm_bindgen::from_value(semesters)
        .map_err(|err| ToolError::validation(format!("invalid semesters: {err}")))?;
    to_js(&gpa::summarize(&semesters))
}

#[wasm_bindgen]
pub fn tool_catalog() -> Result<JsValue, JsValue> {
    to_js(catalog::TOOLS)
}

#[wasm_bindgen]
pub fn history_entry(
    user_id: &str,
    tool_id: &str,
    preview: Option<String>,
    options: JsValue,
) -> Result<JsValue, JsValue> {
    let options = ToolboxOptions::from_js(options)?;
    let entry = history_record(user_id, tool_id, preview.as_deref(), &options)?;
    to_js(&entry)
}

fn history_record(
    user_id: &str,
    tool_id: &str,
    preview: Option<&str>,
    options: &ToolboxOptions,
) -> error::Result<catalog::HistoryEntry> {
    let entry = catalog::HistoryEntry::new(user_id, tool_id, preview, options.preview_limit)?;
    if catalog::find(&entry.tool_id).is_none() {
        tracing::debug!(tool = %entry.tool_id, "history entry for a tool outside the catalog");
    }
    Ok(entry)
}

#[wasm_bindgen]
pub fn unit_history_preview(value: &str, from: &str, to: &str) -> String {
    catalog::unit_preview(value, from, to)
}

#[wasm_bindgen]
pub fn format_history_preview(from: &str, to: &str) -> Result<String, JsValue> {
    let from: Format = from.parse()?;
    let to: Format = to.parse()?;
    Ok(catalog::format_preview(from, to))
}

#[cfg(test)]
mod lib_tests;
