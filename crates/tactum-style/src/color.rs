//! Color values and CSS serialization.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error produced when a color literal cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The literal did not match `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
    #[error("unrecognized color literal `{0}`")]
    Unrecognized(String),
}

/// An RGBA color with 8-bit channels.
///
/// Alpha is stored as 0–255; 255 is fully opaque. Serialization follows the
/// shipped stylesheet conventions: opaque colors print as uppercase hex,
/// translucent colors as `rgba(r, g, b, a)` with a two-decimal alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 255,
        }
    }

    /// Whether the color is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        // ITU-R BT.709 luma: 0.2126 R + 0.7152 G + 0.0722 B
        let r = self.r as u32;
        let g = self.g as u32;
        let b = self.b as u32;
        let luma = 2126 * r + 7152 * g + 722 * b;
        ((luma + 5000) / 10_000) as u8
    }

    /// Serialize to a CSS color literal.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            let alpha = f64::from(self.a) / 255.0;
            format!("rgba({}, {}, {}, {alpha:.2})", self.r, self.g, self.b)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorError::Unrecognized(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |range: &str| u8::from_str_radix(range, 16).map_err(|_| err());
        match hex.len() {
            3 => {
                let mut chars = hex.chars();
                let mut next = || {
                    let c = chars.next().expect("length checked above");
                    channel(&format!("{c}{c}"))
                };
                Ok(Self::rgb(next()?, next()?, next()?))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Ok(Self::rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        let c = Rgba::rgb(10, 20, 30);
        assert!(c.is_opaque());
        assert_eq!(c.a, 255);
    }

    #[test]
    fn hex_literal_unpacks_channels() {
        let c = Rgba::hex(0x2563EB);
        assert_eq!((c.r, c.g, c.b, c.a), (0x25, 0x63, 0xEB, 255));
    }

    #[test]
    fn opaque_serializes_as_uppercase_hex() {
        assert_eq!(Rgba::hex(0xFAFAFA).to_css(), "#FAFAFA");
        assert_eq!(Rgba::rgb(22, 163, 74).to_css(), "#16A34A");
    }

    #[test]
    fn translucent_serializes_as_rgba() {
        assert_eq!(
            Rgba::rgba(37, 99, 235, 115).to_css(),
            "rgba(37, 99, 235, 0.45)"
        );
        assert_eq!(Rgba::rgba(0, 0, 0, 153).to_css(), "rgba(0, 0, 0, 0.60)");
        assert_eq!(
            Rgba::rgba(255, 255, 255, 41).to_css(),
            "rgba(255, 255, 255, 0.16)"
        );
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!("#fff".parse::<Rgba>().unwrap(), Rgba::rgb(255, 255, 255));
        assert_eq!("#a1b".parse::<Rgba>().unwrap(), Rgba::rgb(0xAA, 0x11, 0xBB));
    }

    #[test]
    fn parses_long_hex() {
        assert_eq!("#171717".parse::<Rgba>().unwrap(), Rgba::hex(0x171717));
        assert_eq!(
            "#2563EB73".parse::<Rgba>().unwrap(),
            Rgba::rgba(0x25, 0x63, 0xEB, 0x73)
        );
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["", "fff", "#", "#ff", "#fffff", "#gggggg", "#fffffffff"] {
            assert!(bad.parse::<Rgba>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn luminance_orders_black_and_white() {
        assert_eq!(Rgba::rgb(0, 0, 0).luminance_u8(), 0);
        assert_eq!(Rgba::rgb(255, 255, 255).luminance_u8(), 255);
        assert!(Rgba::hex(0xFAFAFA).luminance_u8() > Rgba::hex(0x171717).luminance_u8());
    }

    #[test]
    fn display_matches_to_css() {
        let c = Rgba::rgba(0, 0, 0, 77);
        assert_eq!(format!("{c}"), c.to_css());
    }
}
