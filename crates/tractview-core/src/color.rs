//! Display colors for categories
//!
//! Colors are fixed per category at construction time. They serialize as
//! `#RRGGBB` strings so configuration files and rendering layers can use
//! them directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An opaque RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from hex string (e.g., "#4E79A7" or "4e79a7")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::rgb(r, g, b))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s).ok_or_else(|| ConfigError::InvalidValue {
            field: "color".to_string(),
            message: format!("'{}' is not a #RRGGBB color", s),
        })
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Categorical palette shared by the built-in category groups
pub mod palette {
    use super::Color;

    pub const BLUE: Color = Color::rgb(0x4E, 0x79, 0xA7);
    pub const ORANGE: Color = Color::rgb(0xF2, 0x8E, 0x2B);
    pub const RED: Color = Color::rgb(0xE1, 0x57, 0x59);
    pub const TEAL: Color = Color::rgb(0x76, 0xB7, 0xB2);

    /// Colors assigned to category positions, in order
    pub const CATEGORICAL: [Color; 4] = [BLUE, ORANGE, RED, TEAL];

    /// Non-null slice of a null/non-null composition
    pub const PRESENT: Color = BLUE;
    /// Null slice of a null/non-null composition
    pub const MISSING: Color = RED;

    /// Color for the category at `index`, cycling through the palette
    pub fn categorical(index: usize) -> Color {
        CATEGORICAL[index % CATEGORICAL.len()]
    }
}
