//! Unit conversion for the toolbox unit converter.
//!
//! Linear categories (length, weight, speed, storage) scale through a base
//! unit; temperature pivots through Celsius. Values are converted at full
//! double precision and only rounded by [`format_value`] for display.
//!
//! ```rust
//! use toolbox_core::units::{convert, UnitCategory};
//!
//! let feet = convert(UnitCategory::Length, 1.0, "Meters", "Feet")?;
//! assert!((feet - 3.280839895).abs() < 1e-6);
//! # Ok::<(), toolbox_core::error::ToolError>(())
//! ```
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::ToolboxOptions;
use crate::error::{Result, ToolError};

pub mod table;
mod temperature;

pub use table::{UnitDefinition, UnitTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Speed,
    Storage,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 5] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Speed,
        UnitCategory::Storage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Speed => "speed",
            UnitCategory::Storage => "storage",
        }
    }

    /// True for categories converted by a plain scale factor.
    pub fn is_linear(self) -> bool {
        !matches!(self, UnitCategory::Temperature)
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        UnitCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ToolError::UnknownCategory(name.to_string()))
    }
}

fn lookup(category: UnitCategory, unit: &str) -> Result<&'static UnitDefinition> {
    UnitTable::global()
        .find(category, unit)
        .ok_or_else(|| ToolError::UnknownUnit {
            category: category.to_string(),
            unit: unit.trim().to_string(),
        })
}

/// Converts `value` from one unit to another within `category`.
pub fn convert(category: UnitCategory, value: f64, from: &str, to: &str) -> Result<f64> {
    if !value.is_finite() {
        tracing::warn!(%category, "rejected non-finite input {value}");
        return Err(ToolError::validation(format!(
            "value must be a finite number, got {value}"
        )));
    }
    let from_unit = lookup(category, from)?;
    let to_unit = lookup(category, to)?;
    if from_unit.name == to_unit.name {
        return Ok(value);
    }
    let converted = match (from_unit.scale, to_unit.scale) {
        (Some(from_scale), Some(to_scale)) => value * from_scale / to_scale,
        _ => temperature::convert(value, from_unit.name, to_unit.name),
    };
    if !converted.is_finite() {
        tracing::warn!(%category, "conversion of {value} overflowed");
        return Err(ToolError::validation(format!(
            "{value} {} is out of range for {}",
            from_unit.name, to_unit.name
        )));
    }
    tracing::debug!(
        %category,
        from = from_unit.name,
        to = to_unit.name,
        "converted {value} -> {converted}"
    );
    Ok(converted)
}

/// String-keyed variant of [`convert`] used by the wasm bindings.
pub fn convert_named(category: &str, value: f64, from: &str, to: &str) -> Result<f64> {
    convert(category.parse()?, value, from, to)
}

/// Parses a user-typed number, rejecting blanks and non-finite values.
pub fn parse_value(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ToolError::validation(format!("'{trimmed}' is not a number")))?;
    if !value.is_finite() {
        return Err(ToolError::validation(format!(
            "value must be a finite number, got {trimmed}"
        )));
    }
    Ok(value)
}

/// Rounds a converted value for display using the category's precision.
pub fn format_value(category: UnitCategory, value: f64, options: &ToolboxOptions) -> String {
    let precision = if category.is_linear() {
        options.linear_precision
    } else {
        options.temperature_precision
    };
    let text = format!("{value:.precision$}");
    // Avoid "-0.000000" for tiny negative results.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Converts `value` into every unit of the category, keyed by unit name in table order.
pub fn convert_all(
    category: UnitCategory,
    value: f64,
    from: &str,
    options: &ToolboxOptions,
) -> Result<IndexMap<String, String>> {
    let mut sheet = IndexMap::new();
    for unit in UnitTable::global().units(category) {
        let converted = convert(category, value, from, unit.name)?;
        sheet.insert(
            unit.name.to_string(),
            format_value(category, converted, options),
        );
    }
    Ok(sheet)
}

/// Category and unit names, for populating the converter's selectors.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub category: UnitCategory,
    pub base_unit: &'static str,
    pub units: Vec<&'static str>,
}

pub fn catalog() -> Vec<CategoryInfo> {
    UnitTable::global()
        .categories()
        .filter_map(|(category, units)| {
            let base = units.first()?;
            Some(CategoryInfo {
                category,
                base_unit: base.name,
                units: units.iter().map(|unit| unit.name).collect(),
            })
        })
        .collect()
}
