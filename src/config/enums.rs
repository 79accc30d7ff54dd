//! Configuration enum types.

use crate::color::{Color, ColorError};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a palette name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "blue"
///
/// # Hex color, with or without alpha
/// color = "#3498DB"
/// track_color = "#3498DB33"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (red, green, blue, white, transparent) or hex string
    /// (#RGB, #RGBA, #RRGGBB, #RRGGBBAA)
    Text(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`], reporting malformed text.
    ///
    /// Palette names win over hex parsing; RGB arrays are fully opaque.
    pub fn try_to_color(&self) -> Result<Color, ColorError> {
        match self {
            ColorSpec::Text(text) => crate::util::resolve_color(text),
            ColorSpec::Rgb([r, g, b]) => Ok(Color::rgb(*r, *g, *b)),
        }
    }

    /// Converts the specification to a [`Color`].
    ///
    /// Unresolvable text falls back to `fallback` with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        self.try_to_color().unwrap_or_else(|err| {
            warn!("{}, using {}", err, fallback);
            fallback
        })
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Text(color.to_hex())
    }
}
