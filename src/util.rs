//! Utility functions for looking up and resolving colors.
//!
//! Provides:
//! - Name-to-color mapping for the predefined palette
//! - Color-to-name mapping for display
//! - A resolver accepting either a palette name or a hex string

use crate::color::{BLUE, Color, ColorError, GREEN, RED, TRANSPARENT, WHITE};
use log::debug;

/// Every predefined color paired with its lowercase name.
pub const PALETTE: [(&str, Color); 5] = [
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("white", WHITE),
    ("transparent", TRANSPARENT),
];

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the CLI to accept palette names in
/// place of hex strings. Only the predefined constants are recognized; this
/// is not a CSS named-color table.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "white", "transparent"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim().to_lowercase();
    PALETTE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, color)| *color)
}

/// Maps a Color value to its palette name.
///
/// Matching is exact on all four channels. Returns "Custom" for anything
/// outside the palette.
pub fn color_to_name(color: &Color) -> &'static str {
    match PALETTE.iter().find(|(_, candidate)| candidate == color) {
        Some((name, _)) => *name,
        None => "Custom",
    }
}

/// Resolves a palette name or a hex string into a Color.
///
/// Names are tried first, so `"transparent"` never reaches the hex parser.
///
/// # Errors
/// Returns [`ColorError::InvalidFormat`] when the text is neither a palette
/// name nor a valid hex color.
pub fn resolve_color(text: &str) -> Result<Color, ColorError> {
    if let Some(color) = name_to_color(text) {
        debug!("Resolved '{}' as palette color", text);
        return Ok(color);
    }
    Color::from_hex(text.trim())
}
