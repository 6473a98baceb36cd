//! `mathcore::ext` hidden submodule supplies [`Color`] struct that is used
//! throughout `ggui` crate.
//!

use serde::{Deserialize, Serialize};
use std::{error::Error, fmt, str::FromStr};

/// [`Color`] struct represents RGBA model of color.
///
/// # Examples
/// ```rust
/// # use ggui::mathcore::Color;
/// let color: Color = Color { r: 1, g: 2, b: 3, a: 4 };
/// assert_eq!(Color::RED, Color { r: 255, g: 0, b: 0, a: 255 });
/// assert_eq!(Color::GREEN, Color { r: 0, g: 255, b: 0, a: 255 });
/// assert_eq!(Color::BLUE, Color { r: 0, g: 0, b: 255, a: 255 });
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component of color.
    ///
    pub r: u8,

    /// Green component of color.
    ///
    pub g: u8,

    /// Blue component of color.
    ///
    pub b: u8,

    /// Alpha channel value of color.
    ///
    pub a: u8,
}
impl Color {
    /// Color that corresponds to white.
    ///
    pub const WHITE: Self = Color::from_rgb(255, 255, 255);
    /// Color that corresponds to black.
    ///
    pub const BLACK: Self = Color::from_rgb(0, 0, 0);
    /// Color that corresponds to gray.
    ///
    pub const GRAY: Self = Color::from_rgb(128, 128, 128);
    /// Color that corresponds to light gray.
    ///
    pub const LIGHT_GRAY: Self = Color::from_rgb(192, 192, 192);
    /// Color that corresponds to dark gray.
    ///
    pub const DARK_GRAY: Self = Color::from_rgb(64, 64, 64);
    /// Color that corresponds to red.
    ///
    pub const RED: Self = Color::from_rgb(255, 0, 0);
    /// Color that corresponds to maroon.
    ///
    pub const MAROON: Self = Color::from_rgb(128, 0, 0);
    /// Color that corresponds to green.
    ///
    pub const GREEN: Self = Color::from_rgb(0, 255, 0);
    /// Color that corresponds to forest green.
    ///
    pub const FOREST_GREEN: Self = Color::from_rgb(34, 139, 34);
    /// Color that corresponds to blue.
    ///
    pub const BLUE: Self = Color::from_rgb(0, 0, 255);
    /// Color that corresponds to yellow.
    ///
    pub const YELLOW: Self = Color::from_rgb(255, 255, 0);
    /// Color that corresponds to cyan.
    ///
    pub const CYAN: Self = Color::from_rgb(0, 255, 255);
    /// Color that corresponds to magenta.
    ///
    pub const MAGENTA: Self = Color::from_rgb(255, 0, 255);
    /// Fully transparent color.
    ///
    pub const TRANSPARENT: Self = Color::from_rgba(0, 0, 0, 0);

    /// Initializes `Color` from RGBA model.
    ///
    /// Alias for manual construction of struct.
    ///
    /// # Examples
    /// ```rust
    /// # use ggui::mathcore::Color;
    /// assert_eq!(Color::from_rgba(1, 2, 3, 4), Color { r: 1, g: 2, b: 3, a: 4 });
    /// ```
    ///
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
    /// Initializes opaque `Color` from RGB model.
    ///
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }
    /// Initializes opaque `Color` from red, green and blue intensities in [0.0, 1.0] range.
    ///
    /// Values outside of that range are clamped.
    ///
    /// # Examples
    /// ```rust
    /// # use ggui::mathcore::Color;
    /// assert_eq!(Color::from_unit_rgb(1.0, 0.0, 2.0), Color::MAGENTA);
    /// ```
    ///
    pub fn from_unit_rgb(r: f32, g: f32, b: f32) -> Self {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::from_rgb(channel(r), channel(g), channel(b))
    }
    /// Initializes `Color` from packed `0xRRGGBBAA` value.
    ///
    /// # Examples
    /// ```rust
    /// # use ggui::mathcore::Color;
    /// assert_eq!(Color::from_packed(0x00000088), Color::from_rgba(0, 0, 0, 0x88));
    /// ```
    ///
    pub const fn from_packed(value: u32) -> Self {
        Color {
            r: (value >> 24) as u8,
            g: (value >> 16) as u8,
            b: (value >> 8) as u8,
            a: value as u8,
        }
    }

    /// Returns tuple of red, green, blue and alpha values.
    ///
    /// # Examples
    /// ```rust
    /// # use ggui::mathcore::Color;
    /// assert_eq!(Color::from_rgba(1, 2, 3, 4).to_rgba(), (1, 2, 3, 4));
    /// ```
    ///
    pub fn to_rgba(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Returns the same color with alpha channel multiplied by `opacity`.
    ///
    /// `opacity` is clamped to [0.0, 1.0] range.
    ///
    /// # Examples
    /// ```rust
    /// # use ggui::mathcore::Color;
    /// assert_eq!(Color::WHITE.with_opacity(0.5).a, 128);
    /// assert_eq!(Color::from_rgba(0, 0, 0, 100).with_opacity(0.0).a, 0);
    /// ```
    ///
    pub fn with_opacity(self, opacity: f32) -> Self {
        let alpha: f32 = f32::from(self.a) * opacity.clamp(0.0, 1.0);
        Color {
            a: alpha.round() as u8,
            ..self
        }
    }
}

/// [`ParseColorError`] struct is returned when string could not be parsed as [`Color`].
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError {
    /// String that failed to parse.
    ///
    input: String,
}
impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a color (expected 'r,g,b[,a]', '#RRGGBB[AA]' or '0xRRGGBBAA')",
            self.input
        )
    }
}
impl Error for ParseColorError {}
impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses color from a comma/whitespace separated list of 3 or 4 channels
    /// or from hexadecimal notation.
    ///
    /// Hexadecimal notation with `#` prefix accepts `RRGGBB` and `RRGGBBAA`,
    /// `0x` prefix always means `RRGGBBAA`.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::mathcore::Color;
    /// assert_eq!("255,0,0".parse::<Color>(), Ok(Color::RED));
    /// assert_eq!("0 0 0 136".parse::<Color>(), Ok(Color::from_rgba(0, 0, 0, 136)));
    /// assert_eq!("#FF00FF".parse::<Color>(), Ok(Color::MAGENTA));
    /// assert_eq!("0x00000088".parse::<Color>(), Ok(Color::from_rgba(0, 0, 0, 0x88)));
    /// ```
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseColorError {
            input: s.to_string(),
        };
        let trimmed: &str = s.trim();

        let hex: Option<(&str, bool)> = if let Some(digits) = trimmed.strip_prefix('#') {
            Some((digits, digits.len() == 8))
        } else if let Some(digits) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some((digits, true))
        } else {
            None
        };
        if let Some((digits, has_alpha)) = hex {
            let expected_length: usize = if has_alpha { 8 } else { 6 };
            if digits.len() != expected_length
                || !digits.bytes().all(|byte| byte.is_ascii_hexdigit())
            {
                return Err(error());
            }
            let value: u32 = u32::from_str_radix(digits, 16).map_err(|_| error())?;
            return Ok(if has_alpha {
                Color::from_packed(value)
            } else {
                Color::from_packed((value << 8) | 0xFF)
            });
        }

        let channels: Vec<u8> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u8>().map_err(|_| error()))
            .collect::<Result<_, _>>()?;
        match channels[..] {
            [r, g, b] => Ok(Color::from_rgb(r, g, b)),
            [r, g, b, a] => Ok(Color::from_rgba(r, g, b, a)),
            _ => Err(error()),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn color() {
        use super::Color;

        assert_eq!(Color::WHITE.to_rgba(), (255, 255, 255, 255));
        assert_eq!(Color::BLACK.to_rgba(), (0, 0, 0, 255));
        assert_eq!(Color::from_packed(0x11223344).to_rgba(), (0x11, 0x22, 0x33, 0x44));

        assert_eq!(Color::WHITE.with_opacity(0.25).a, 64);
        assert_eq!(Color::WHITE.with_opacity(2.0).a, 255);
        assert_eq!(Color::RED.with_opacity(0.5).to_rgba().0, 255);
    }

    #[test]
    fn color_parsing() {
        use super::Color;

        assert_eq!("128, 128, 128".parse::<Color>(), Ok(Color::GRAY));
        assert_eq!("#00000080".parse::<Color>(), Ok(Color::from_rgba(0, 0, 0, 128)));
        assert_eq!("0XFFFFFFFF".parse::<Color>(), Ok(Color::WHITE));

        assert!("".parse::<Color>().is_err());
        assert!("256,0,0".parse::<Color>().is_err());
        assert!("1,2".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("0xFFFFFF".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#+12345".parse::<Color>().is_err());
        assert!("0x+FFFFFFF".parse::<Color>().is_err());
    }
}
