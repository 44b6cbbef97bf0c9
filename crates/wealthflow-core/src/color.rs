// File: crates/wealthflow-core/src/color.rs
// Summary: Static RGBA colors parsed from the hex strings used by fixtures.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rrggbb`, `#rrggbbaa` or the short `#rgb` form.
    pub fn from_hex(s: &str) -> Result<Self, ChartError> {
        let bad = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| bad());
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Ok(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(bad()),
        }
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Formats as `#rrggbb`; alpha is carried separately by renderers.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
