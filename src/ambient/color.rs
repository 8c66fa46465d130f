//! Translucent colours
//!
//! Colours are kept as 8-bit RGB plus a floating alpha so they map 1:1 onto
//! CSS `rgba(...)` strings, which is what a 2D canvas context accepts as fill
//! style. Themes are written with CSS strings and parsed here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AmbientError;

/// An sRGB colour with straight (non-premultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Same colour, fully transparent. Used as the outer stop of glows.
    pub fn transparent(self) -> Self {
        self.with_alpha(0.0)
    }

    /// Multiply alpha by an opacity factor, clamped to `[0, 1]`
    pub fn scale_alpha(self, opacity: f64) -> Self {
        self.with_alpha((self.a * opacity).clamp(0.0, 1.0))
    }

    fn parse_channel(raw: &str, input: &str) -> Result<u8, AmbientError> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmbientError::InvalidColor(input.to_string()));
        }
        raw.parse::<u8>()
            .map_err(|_| AmbientError::InvalidColor(input.to_string()))
    }

    fn parse_alpha(raw: &str, input: &str) -> Result<f64, AmbientError> {
        let alpha = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| AmbientError::InvalidColor(input.to_string()))?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(AmbientError::InvalidColor(input.to_string()));
        }
        Ok(alpha)
    }

    fn parse_hex(hex: &str, input: &str) -> Result<Self, AmbientError> {
        let invalid = || AmbientError::InvalidColor(input.to_string());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digits: Vec<u8> = match hex.len() {
            3 => hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(invalid)?,
            6 => (0..3)
                .map(|i| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok())
                .collect::<Option<Vec<_>>>()
                .ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        Ok(Self::new(digits[0], digits[1], digits[2], 1.0))
    }
}

impl FromStr for Rgba {
    type Err = AmbientError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim().to_ascii_lowercase();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex, input);
        }

        let (body, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(AmbientError::InvalidColor(input.to_string()));
        };

        let body = body
            .strip_suffix(')')
            .ok_or_else(|| AmbientError::InvalidColor(input.to_string()))?;
        let parts: Vec<&str> = body.split(',').collect();

        match (parts.as_slice(), with_alpha) {
            ([r, g, b, a], true) => Ok(Self::new(
                Self::parse_channel(r, input)?,
                Self::parse_channel(g, input)?,
                Self::parse_channel(b, input)?,
                Self::parse_alpha(a, input)?,
            )),
            ([r, g, b], false) => Ok(Self::new(
                Self::parse_channel(r, input)?,
                Self::parse_channel(g, input)?,
                Self::parse_channel(b, input)?,
                1.0,
            )),
            _ => Err(AmbientError::InvalidColor(input.to_string())),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for Rgba {
    type Error = AmbientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgba() {
        let color: Rgba = "rgba(168, 85, 247, 0.4)".parse().unwrap();
        assert_eq!(color, Rgba::new(168, 85, 247, 0.4));
    }

    #[test]
    fn test_parse_rgb_and_hex() {
        assert_eq!("rgb(1,2,3)".parse::<Rgba>().unwrap(), Rgba::new(1, 2, 3, 1.0));
        assert_eq!("#8b5cf6".parse::<Rgba>().unwrap(), Rgba::new(139, 92, 246, 1.0));
        assert_eq!("#fff".parse::<Rgba>().unwrap(), Rgba::new(255, 255, 255, 1.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("purple".parse::<Rgba>().is_err());
        assert!("rgba(300, 0, 0, 0.5)".parse::<Rgba>().is_err());
        assert!("rgba(0, 0, 0, 1.5)".parse::<Rgba>().is_err());
        assert!("rgba(0, 0, 0)".parse::<Rgba>().is_err());
        assert!("#12345".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_parse_rejects_signs_and_non_ascii() {
        assert!("#+f+f+f".parse::<Rgba>().is_err());
        assert!("#+ff".parse::<Rgba>().is_err());
        assert!("rgb(+1, +2, +3)".parse::<Rgba>().is_err());
        assert!("rgba(1, 2, -0, 0.5)".parse::<Rgba>().is_err());
        assert!("#aéeee".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_display_is_css() {
        let color = Rgba::new(139, 92, 246, 0.2);
        assert_eq!(color.to_string(), "rgba(139, 92, 246, 0.2)");
        assert_eq!(color.transparent().to_string(), "rgba(139, 92, 246, 0)");
    }

    #[test]
    fn test_scale_alpha() {
        let color = Rgba::new(0, 0, 0, 0.5).scale_alpha(0.5);
        assert!((color.a - 0.25).abs() < 1e-12);
        assert_eq!(Rgba::new(0, 0, 0, 0.9).scale_alpha(4.0).a, 1.0);
    }

    #[test]
    fn test_serde_as_css_string() {
        let json = serde_json::to_string(&Rgba::new(76, 29, 149, 0.1)).unwrap();
        assert_eq!(json, "\"rgba(76, 29, 149, 0.1)\"");

        let parsed: Rgba = serde_json::from_str("\"rgba(109, 40, 217, 0.07)\"").unwrap();
        assert_eq!(parsed, Rgba::new(109, 40, 217, 0.07));

        assert!(serde_json::from_str::<Rgba>("\"nope\"").is_err());
    }
}
