// Temperature conversions always pivot through Celsius.

pub(crate) fn to_celsius(value: f64, unit: &str) -> f64 {
    match unit {
        "Fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "Kelvin" => value - 273.15,
        _ => value,
    }
}

pub(crate) fn from_celsius(celsius: f64, unit: &str) -> f64 {
    match unit {
        "Fahrenheit" => celsius * 9.0 / 5.0 + 32.0,
        "Kelvin" => celsius + 273.15,
        _ => celsius,
    }
}

/// Converts between canonical temperature unit names.
pub(crate) fn convert(value: f64, from: &str, to: &str) -> f64 {
    from_celsius(to_celsius(value, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fixed_points() {
        assert_eq!(convert(0.0, "Celsius", "Fahrenheit"), 32.0);
        assert_eq!(convert(100.0, "Celsius", "Fahrenheit"), 212.0);
        assert_eq!(convert(-273.15, "Celsius", "Kelvin"), 0.0);
        assert_eq!(convert(-40.0, "Fahrenheit", "Celsius"), -40.0);
    }

    #[test]
    fn fahrenheit_to_kelvin_goes_through_celsius() {
        assert_relative_eq!(convert(212.0, "Fahrenheit", "Kelvin"), 373.15, epsilon = 1e-9);
        assert_relative_eq!(convert(0.0, "Kelvin", "Fahrenheit"), -459.67, epsilon = 1e-9);
    }
}
