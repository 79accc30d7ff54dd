//! Error type for color parsing.

use thiserror::Error;

/// Errors that can occur while parsing a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not `#?` followed by 3, 4, 6 or 8 hexadecimal digits.
    #[error("invalid hex color format: '{0}'")]
    InvalidFormat(String),
}
