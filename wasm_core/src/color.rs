// Color picker helpers: hex <-> RGB, RGB -> HSL, HSL -> hex and palettes.
use serde::Serialize;

use crate::error::{Result, ToolError};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent, all rounded.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    fn from_packed(value: u32) -> Self {
        Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

/// Parses `#rrggbb` (leading `#` optional, case-insensitive).
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let digits = input.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ToolError::validation(format!(
            "'{}' is not a #rrggbb color",
            input.trim()
        )));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|err| ToolError::validation(err.to_string()))?;
    Ok(Rgb::from_packed(value))
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let (mut h, mut s) = (0.0, 0.0);
    if max != min {
        let d = max - min;
        s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        h = if max == r {
            ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
        } else if max == g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };
    }
    Hsl {
        h: (h * 360.0).round() as u16 % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    let h = f64::from(hsl.h);
    let l = f64::from(hsl.l) / 100.0;
    let a = f64::from(hsl.s) * l.min(1.0 - l) / 100.0;
    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * value).round().clamp(0.0, 255.0) as u8
    };
    Rgb {
        r: channel(0.0),
        g: channel(8.0),
        b: channel(4.0),
    }
    .to_hex()
}

pub fn color_info(hex: &str) -> Result<ColorInfo> {
    let rgb = parse_hex(hex)?;
    Ok(ColorInfo {
        hex: rgb.to_hex(),
        rgb,
        hsl: rgb_to_hsl(rgb),
    })
}

/// Base color, its complement, then three analogous hues 30° apart.
pub fn palette(hex: &str) -> Result<Vec<String>> {
    let rgb = parse_hex(hex)?;
    let hsl = rgb_to_hsl(rgb);
    let mut colors = vec![rgb.to_hex(), Rgb::from_packed(0xff_ffff - rgb.packed()).to_hex()];
    for step in 1..=3u16 {
        colors.push(hsl_to_hex(Hsl {
            h: (hsl.h + 30 * step) % 360,
            ..hsl
        }));
    }
    Ok(colors)
}
