//! Hex string parsing and formatting for [`Color`].
//!
//! The accepted formats are:
//! * `#RGB`
//! * `#RGBA`
//! * `#RRGGBB`
//! * `#RRGGBBAA`
//!
//! The leading `#` is optional and digits are case-insensitive. Short forms
//! duplicate each digit (`#F80` is `#FF8800`).

use super::error::ColorError;
use super::rgba::Color;

impl Color {
    /// Parses a CSS hex color.
    ///
    /// Alpha, when present, is the trailing byte divided by 255.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidFormat`] if the digit count is not 3, 4, 6
    /// or 8, or if any character is not a hexadecimal digit.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat(hex.to_string());

        let nibble = |c: u8| -> Result<u8, ColorError> {
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(invalid)
        };
        // #RGB digit expanded to RR
        let short = |c: u8| -> Result<u8, ColorError> { Ok(nibble(c)? * 17) };
        let pair = |hi: u8, lo: u8| -> Result<u8, ColorError> {
            Ok((nibble(hi)? << 4) | nibble(lo)?)
        };

        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let color = match *digits.as_bytes() {
            [r, g, b] => Color::rgb(short(r)?, short(g)?, short(b)?),
            [r, g, b, a] => Color::new(short(r)?, short(g)?, short(b)?, alpha(short(a)?)),
            [r1, r2, g1, g2, b1, b2] => Color::rgb(pair(r1, r2)?, pair(g1, g2)?, pair(b1, b2)?),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Color::new(
                pair(r1, r2)?,
                pair(g1, g2)?,
                pair(b1, b2)?,
                alpha(pair(a1, a2)?),
            ),
            _ => return Err(invalid()),
        };

        Ok(color)
    }

    /// Formats the color as uppercase hex.
    ///
    /// Opaque colors use `#RRGGBB`; anything else uses `#RRGGBBAA` with the
    /// alpha rounded to the nearest byte.
    pub fn to_hex(&self) -> String {
        if self.a() >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
        } else {
            let a = (self.a() * 255.0).round() as u8;
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r(), self.g(), self.b(), a)
        }
    }
}

fn alpha(byte: u8) -> f64 {
    byte as f64 / 255.0
}

impl core::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_hex(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RED, TRANSPARENT, WHITE};

    fn invalid(input: &str) -> ColorError {
        ColorError::InvalidFormat(input.to_string())
    }

    #[test]
    fn short_form_duplicates_digits() {
        assert_eq!(Color::from_hex("#F00").unwrap(), Color::new(255, 0, 0, 1.0));
        assert_eq!(Color::from_hex("#abc").unwrap(), Color::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn short_form_with_alpha() {
        let color = Color::from_hex("#F008").unwrap();
        assert_eq!(color, Color::new(255, 0, 0, 0x88 as f64 / 255.0));
        assert_eq!(Color::from_hex("#0000").unwrap(), TRANSPARENT);
    }

    #[test]
    fn long_form_parses_each_pair() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), RED);
        assert_eq!(Color::from_hex("#12aB9f").unwrap(), Color::rgb(0x12, 0xAB, 0x9F));
    }

    #[test]
    fn long_form_alpha_is_byte_over_255() {
        let color = Color::from_hex("#FF000080").unwrap();
        assert_eq!(color, Color::new(255, 0, 0, 128.0 / 255.0));
        assert!((color.a() - 0.502).abs() < 0.001);
    }

    #[test]
    fn hash_prefix_is_optional() {
        assert_eq!(
            Color::from_hex("FF0000").unwrap(),
            Color::from_hex("#FF0000").unwrap()
        );
        assert_eq!(Color::from_hex("fff").unwrap(), WHITE);
    }

    #[test]
    fn wrong_digit_counts_are_rejected() {
        for input in ["", "#", "#1", "#12", "#12345", "#1234567", "#123456789"] {
            assert_eq!(Color::from_hex(input), Err(invalid(input)), "input {input:?}");
        }
    }

    #[test]
    fn non_hex_characters_are_rejected() {
        for input in ["#GGGGGG", "#FF00ZZ", "#+F0000", "# F0000", "#-1-1-1", "##F00", "#ÿÿÿ"] {
            assert_eq!(Color::from_hex(input), Err(invalid(input)), "input {input:?}");
        }
    }

    #[test]
    fn error_message_names_the_input() {
        let err = Color::from_hex("#12345").unwrap_err();
        assert_eq!(err.to_string(), "invalid hex color format: '#12345'");
    }

    #[test]
    fn to_hex_omits_alpha_when_opaque() {
        assert_eq!(RED.to_hex(), "#FF0000");
        assert_eq!(Color::new(1, 2, 3, 0.5).to_hex(), "#01020380");
        assert_eq!(TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn from_str_and_try_from_delegate_to_from_hex() {
        assert_eq!("#F00".parse::<Color>().unwrap(), RED);
        assert_eq!(Color::try_from("00F").unwrap(), crate::color::BLUE);
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn channels_survive_hex_round_trip() {
        for input in ["#000000", "#FFFFFF", "#1E90FF", "#7f7f7f", "#C0FFEE"] {
            let color = Color::from_hex(input).unwrap();
            let again = Color::from_hex(&color.to_hex()).unwrap();
            assert_eq!(
                (again.r(), again.g(), again.b()),
                (color.r(), color.g(), color.b())
            );
        }
    }
}
