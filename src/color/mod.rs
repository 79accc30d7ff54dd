//! CSS-compatible RGBA color value type.
//!
//! This module defines the color primitives consumed by spinner markup:
//! - [`Color`]: immutable RGBA value with byte channels and a clamped alpha
//! - [`ColorError`]: the single failure raised when parsing hex strings
//! - Predefined constants ([`RED`], [`GREEN`], [`BLUE`], [`WHITE`], [`TRANSPARENT`])
//!
//! `Display` renders the `rgba(R, G, B, A)` form understood by CSS.

pub mod error;
pub mod hex;
pub mod rgba;

// Re-export commonly used types at module level
pub use error::ColorError;
pub use rgba::Color;

pub use rgba::{BLUE, GREEN, RED, TRANSPARENT, WHITE};
