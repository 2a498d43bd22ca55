// Static unit definitions, built once and shared by every conversion call.
use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::UnitCategory;

const LENGTH_UNITS: &[(&str, f64)] = &[
    ("Meters", 1.0),
    ("Kilometers", 1000.0),
    ("Centimeters", 0.01),
    ("Millimeters", 0.001),
    ("Miles", 1609.34),
    ("Yards", 0.9144),
    ("Feet", 0.3048),
    ("Inches", 0.0254),
];

const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("Kilograms", 1.0),
    ("Grams", 0.001),
    ("Milligrams", 0.000001),
    ("Pounds", 0.453592),
    ("Ounces", 0.0283495),
    ("Tons", 1000.0),
];

const SPEED_UNITS: &[(&str, f64)] = &[
    ("Meters/sec", 1.0),
    ("Kilometers/hr", 0.277778),
    ("Miles/hr", 0.44704),
    ("Feet/sec", 0.3048),
    ("Knots", 0.514444),
];

const STORAGE_UNITS: &[(&str, f64)] = &[
    ("Bytes", 1.0),
    ("Kilobytes", 1024.0),
    ("Megabytes", 1_048_576.0),
    ("Gigabytes", 1_073_741_824.0),
    ("Terabytes", 1_099_511_627_776.0),
];

const TEMPERATURE_UNITS: &[&str] = &["Celsius", "Fahrenheit", "Kelvin"];

static TABLE: OnceLock<UnitTable> = OnceLock::new();

/// A named unit and, for linear categories, its factor to the base unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDefinition {
    pub name: &'static str,
    /// `None` for temperature units, which convert through Celsius instead.
    pub scale: Option<f64>,
}

/// Immutable category -> units lookup.
#[derive(Debug)]
pub struct UnitTable {
    categories: BTreeMap<UnitCategory, Vec<UnitDefinition>>,
}

impl UnitTable {
    /// Returns the process-wide table, constructing it on first use.
    pub fn global() -> &'static UnitTable {
        TABLE.get_or_init(UnitTable::build)
    }

    fn build() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(UnitCategory::Length, linear(LENGTH_UNITS));
        categories.insert(UnitCategory::Weight, linear(WEIGHT_UNITS));
        categories.insert(UnitCategory::Speed, linear(SPEED_UNITS));
        categories.insert(UnitCategory::Storage, linear(STORAGE_UNITS));
        categories.insert(
            UnitCategory::Temperature,
            TEMPERATURE_UNITS
                .iter()
                .map(|&name| UnitDefinition { name, scale: None })
                .collect(),
        );
        Self { categories }
    }

    /// Units of a category in display order; the base unit comes first.
    pub fn units(&self, category: UnitCategory) -> &[UnitDefinition] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Looks up a unit by name, ignoring ASCII case.
    pub fn find(&self, category: UnitCategory, name: &str) -> Option<&UnitDefinition> {
        let name = name.trim();
        self.units(category)
            .iter()
            .find(|unit| unit.name.eq_ignore_ascii_case(name))
    }

    pub fn categories(&self) -> impl Iterator<Item = (UnitCategory, &[UnitDefinition])> {
        self.categories
            .iter()
            .map(|(category, units)| (*category, units.as_slice()))
    }
}

fn linear(defs: &[(&'static str, f64)]) -> Vec<UnitDefinition> {
    defs.iter()
        .map(|&(name, scale)| {
            debug_assert!(scale.is_finite() && scale > 0.0, "bad scale for {name}");
            UnitDefinition {
                name,
                scale: Some(scale),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scales_are_positive_and_finite() {
        for (category, units) in UnitTable::global().categories() {
            for unit in units {
                match (category.is_linear(), unit.scale) {
                    (true, Some(scale)) => assert!(scale.is_finite() && scale > 0.0),
                    (false, None) => {}
                    other => panic!("{} has unexpected scale {:?}", unit.name, other),
                }
            }
        }
    }

    #[test]
    fn unit_names_are_unique_within_category() {
        for (_, units) in UnitTable::global().categories() {
            for (idx, unit) in units.iter().enumerate() {
                assert!(
                    units[idx + 1..]
                        .iter()
                        .all(|other| !other.name.eq_ignore_ascii_case(unit.name)),
                    "duplicate unit {}",
                    unit.name
                );
            }
        }
    }

    #[test]
    fn base_unit_is_listed_first() {
        let table = UnitTable::global();
        assert_eq!(table.units(UnitCategory::Length)[0].name, "Meters");
        assert_eq!(table.units(UnitCategory::Storage)[0].name, "Bytes");
        assert_eq!(table.units(UnitCategory::Temperature)[0].name, "Celsius");
    }

    #[test]
    fn lookup_ignores_case() {
        let table = UnitTable::global();
        let unit = table.find(UnitCategory::Speed, "knots").expect("knots");
        assert_eq!(unit.name, "Knots");
        assert!(table.find(UnitCategory::Speed, "Meters").is_none());
    }

    #[test]
    fn table_is_built_once() {
        assert!(std::ptr::eq(UnitTable::global(), UnitTable::global()));
    }
}
