//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::color::{BLUE, Color, TRANSPARENT};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Spinner palette settings.
///
/// Controls the colors handed to the spinner markup. Every color accepts a
/// palette name, a hex string, or an RGB array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpinnerConfig {
    /// Color of the moving arc - a palette name (red, green, blue, white, transparent),
    /// a hex string like `"#3498DB"`, or an RGB array like `[52, 152, 219]`
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Color of the static track behind the arc
    #[serde(default = "default_track_color")]
    pub track_color: ColorSpec,

    /// Optional alpha override for `color` (valid range: 0.0 - 1.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            track_color: default_track_color(),
            opacity: None,
        }
    }
}

impl SpinnerConfig {
    /// Final arc color, with `opacity` applied when set.
    pub fn resolved_color(&self) -> Color {
        let color = self.color.to_color_or(BLUE);
        match self.opacity {
            Some(opacity) => color.with_alpha(opacity),
            None => color,
        }
    }

    /// Final track color.
    pub fn resolved_track_color(&self) -> Color {
        self.track_color.to_color_or(TRANSPARENT)
    }
}

pub(super) fn default_color() -> ColorSpec {
    ColorSpec::Text("blue".to_string())
}

pub(super) fn default_track_color() -> ColorSpec {
    ColorSpec::Text("transparent".to_string())
}
