//! RGBA color type and predefined color constants.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Represents an RGBA color as used by CSS.
///
/// Red, green and blue are bytes (0-255). Alpha is a float that always lies in
/// the range 0.0 (fully transparent) to 1.0 (fully opaque); out-of-range values
/// are clamped when the color is built, never rejected.
///
/// Colors are immutable: there are no setters, only constructors.
///
/// # Examples
///
/// ```
/// use spinner_color::Color;
/// let red = Color::rgb(255, 0, 0);
/// let half_blue = Color::new(0, 0, 255, 0.5);
/// assert_eq!(red.to_string(), "rgba(255, 0, 0, 1)");
/// assert_eq!(half_blue.a(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

/// Clamps an alpha value into `[0.0, 1.0]`.
///
/// NaN and negative zero both map to `0.0`.
pub(crate) fn clamp_alpha(a: f64) -> f64 {
    if a.is_nan() || a <= 0.0 {
        0.0
    } else if a >= 1.0 {
        1.0
    } else {
        a
    }
}

impl Color {
    /// Fully opaque red, see [`RED`].
    pub const RED: Color = RED;
    /// Fully opaque green, see [`GREEN`].
    pub const GREEN: Color = GREEN;
    /// Fully opaque blue, see [`BLUE`].
    pub const BLUE: Color = BLUE;
    /// Fully opaque white, see [`WHITE`].
    pub const WHITE: Color = WHITE;
    /// Fully transparent black, see [`TRANSPARENT`].
    pub const TRANSPARENT: Color = TRANSPARENT;

    /// Creates a new color from RGBA components.
    ///
    /// `a` is clamped into 0.0 to 1.0.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    /// Creates a fully opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns a copy of this color with a different (clamped) alpha.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Alpha channel, always within `[0.0, 1.0]`.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for Color {
    fn default() -> Self {
        TRANSPARENT
    }
}

impl fmt::Display for Color {
    /// Renders the CSS functional form, e.g. `rgba(255, 0, 0, 1)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// Serialized as a hex string so colors read back through `from_hex`.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::from_hex(&text).map_err(de::Error::custom)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (255, 0, 0, 1)
pub const RED: Color = Color {
    r: 255,
    g: 0,
    b: 0,
    a: 1.0,
};

/// Predefined green color (0, 255, 0, 1)
pub const GREEN: Color = Color {
    r: 0,
    g: 255,
    b: 0,
    a: 1.0,
};

/// Predefined blue color (0, 0, 255, 1)
pub const BLUE: Color = Color {
    r: 0,
    g: 0,
    b: 255,
    a: 1.0,
};

/// Predefined white color (255, 255, 255, 1)
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
    a: 1.0,
};

/// Fully transparent color (0, 0, 0, 0)
pub const TRANSPARENT: Color = Color {
    r: 0,
    g: 0,
    b: 0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_channels_unchanged() {
        let color = Color::new(12, 34, 56, 0.25);
        assert_eq!(
            (color.r(), color.g(), color.b(), color.a()),
            (12, 34, 56, 0.25)
        );
        assert_eq!(color.to_string(), "rgba(12, 34, 56, 0.25)");
    }

    #[test]
    fn rgb_defaults_to_opaque() {
        assert_eq!(Color::rgb(1, 2, 3), Color::new(1, 2, 3, 1.0));
    }

    #[test]
    fn alpha_is_clamped_to_unit_range() {
        assert_eq!(Color::new(0, 0, 0, -0.5).a(), 0.0);
        assert_eq!(Color::new(0, 0, 0, 3.0).a(), 1.0);
        assert_eq!(Color::new(0, 0, 0, f64::INFINITY).a(), 1.0);
        assert_eq!(Color::new(0, 0, 0, f64::NEG_INFINITY).a(), 0.0);
        assert_eq!(Color::new(0, 0, 0, f64::NAN).a(), 0.0);
    }

    #[test]
    fn negative_zero_alpha_renders_as_zero() {
        assert_eq!(Color::new(0, 0, 0, -0.0).to_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn constants_render_in_css_form() {
        assert_eq!(RED.to_string(), "rgba(255, 0, 0, 1)");
        assert_eq!(GREEN.to_string(), "rgba(0, 255, 0, 1)");
        assert_eq!(BLUE.to_string(), "rgba(0, 0, 255, 1)");
        assert_eq!(WHITE.to_string(), "rgba(255, 255, 255, 1)");
        assert_eq!(TRANSPARENT.to_string(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn associated_constants_match_module_constants() {
        assert_eq!(Color::RED, RED);
        assert_eq!(Color::TRANSPARENT, TRANSPARENT);
        assert_eq!(Color::default(), TRANSPARENT);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let faded = RED.with_alpha(0.5);
        assert_eq!(faded, Color::new(255, 0, 0, 0.5));
        assert_eq!(RED.with_alpha(7.0), RED);
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::new(255, 0, 0, 0.0)).unwrap();
        assert_eq!(json, "\"#FF000000\"");

        let parsed: Color = serde_json::from_str("\"#00f\"").unwrap();
        assert_eq!(parsed, BLUE);

        let err = serde_json::from_str::<Color>("\"#12345\"").unwrap_err();
        assert!(err.to_string().contains("invalid hex color format"));
    }
}
