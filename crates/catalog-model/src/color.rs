//! sRGB colors and WCAG 2.x contrast ratios.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (a single leading `#`
    /// is optional). Any alpha channel is dropped; see [`Rgb::from_hex_alpha`].
    pub fn from_hex(raw: &str) -> Option<Self> {
        Self::from_hex_alpha(raw).map(|(color, _)| color)
    }

    /// Parse a hex color and its alpha channel (`0xFF` when absent).
    pub fn from_hex_alpha(raw: &str) -> Option<(Self, u8)> {
        let raw = raw.trim();
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channels: Vec<u8> = match hex.len() {
            3 | 4 => hex
                .chars()
                .map(|c| c.to_digit(16).map(|digit| digit as u8 * 17))
                .collect::<Option<_>>()?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
                .collect::<Option<_>>()?,
            _ => return None,
        };
        let alpha = channels.get(3).copied().unwrap_or(u8::MAX);
        Some((Self::new(channels[0], channels[1], channels[2]), alpha))
    }

    /// The color seen when `self` at `alpha` is painted over `background`.
    pub fn over(&self, alpha: u8, background: &Rgb) -> Rgb {
        let a = f64::from(alpha) / 255.0;
        let blend = |top: u8, bottom: u8| {
            (f64::from(top) * a + f64::from(bottom) * (1.0 - a)).round() as u8
        };
        Rgb::new(
            blend(self.r, background.r),
            blend(self.g, background.g),
            blend(self.b, background.b),
        )
    }

    /// Relative luminance per WCAG 2.x.
    pub fn relative_luminance(&self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Contrast ratio between two colors, in `1.0..=21.0`.
    pub fn contrast_ratio(&self, other: &Rgb) -> f64 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
        (lighter + 0.05) / (darker + 0.05)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ModelError::InvalidColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_hex("1A73E8"), Some(Rgb::new(0x1A, 0x73, 0xE8)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
    }

    #[test]
    fn only_one_leading_hash_is_accepted() {
        assert_eq!(Rgb::from_hex("##fff"), None);
        assert_eq!(Rgb::from_hex(" #fff "), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn alpha_digits_are_parsed() {
        assert_eq!(
            Rgb::from_hex_alpha("#202124FF"),
            Some((Rgb::new(0x20, 0x21, 0x24), 0xFF))
        );
        assert_eq!(
            Rgb::from_hex_alpha("#0008"),
            Some((Rgb::new(0, 0, 0), 0x88))
        );
        assert_eq!(Rgb::from_hex("#20212440"), Some(Rgb::new(0x20, 0x21, 0x24)));
        assert_eq!(Rgb::from_hex_alpha("#fff").map(|(_, a)| a), Some(0xFF));
    }

    #[test]
    fn compositing_blends_toward_background() {
        let ink = Rgb::new(0x20, 0x21, 0x24);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(ink.over(0xFF, &white), ink);
        assert_eq!(ink.over(0, &white), white);
        assert_eq!(ink.over(0x40, &white), Rgb::new(199, 199, 200));
    }

    #[test]
    fn black_on_white_is_max_contrast() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert!((black.contrast_ratio(&white) - 21.0).abs() < 1e-9);
        assert!((white.contrast_ratio(&black) - 21.0).abs() < 1e-9);
        assert!((white.contrast_ratio(&white) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mid_gray_on_white_fails_aa() {
        let gray = Rgb::from_hex("#999999").unwrap();
        let white = Rgb::new(255, 255, 255);
        assert!(gray.contrast_ratio(&white) < 4.5);
    }

    #[test]
    fn display_is_uppercase_hex() {
        assert_eq!(Rgb::new(26, 115, 232).to_string(), "#1A73E8");
    }
}
