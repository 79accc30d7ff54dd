//! CSS-compatible RGBA colors for loading spinners.
//!
//! Exposes the [`Color`] value type alongside the configuration and lookup
//! helpers built on it, so markup generators can share parsing and
//! formatting with the `spinner-color` binary.

pub mod color;
pub mod config;
pub mod util;

pub use color::{Color, ColorError};
pub use config::Config;
