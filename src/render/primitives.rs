use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// sRGB color with 8-bit channels and a normalized alpha.
///
/// Serializes as the CSS string a declarative chart engine expects:
/// `#RRGGBB` when opaque, `rgba(r, g, b, a)` otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RGB` or `#RRGGBB`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.trim().strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidData(format!("hex color `{input}` must start with `#`"))
        })?;
        if !digits.is_ascii() {
            return Err(ChartError::InvalidData(format!(
                "hex color `{input}` has a non-hex digit"
            )));
        }
        let channel = |text: &str| {
            u8::from_str_radix(text, 16).map_err(|_| {
                ChartError::InvalidData(format!("hex color `{input}` has a non-hex digit"))
            })
        };
        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, i) in channels.iter_mut().zip(0..3) {
                    let value = channel(&digits[i..=i])?;
                    *slot = value * 17;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(ChartError::InvalidData(format!(
                "hex color `{input}` must have 3 or 6 digits"
            ))),
        }
    }

    /// Parses the CSS forms produced by `to_css`, plus `rgb(r, g, b)`.
    pub fn parse_css(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }

        let (body, expect_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ChartError::InvalidData(format!(
                "unsupported css color `{input}`"
            )));
        };
        let body = body.strip_suffix(')').ok_or_else(|| {
            ChartError::InvalidData(format!("css color `{input}` is missing `)`"))
        })?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected_parts = if expect_alpha { 4 } else { 3 };
        if parts.len() != expected_parts {
            return Err(ChartError::InvalidData(format!(
                "css color `{input}` must have {expected_parts} components"
            )));
        }

        let channel = |text: &str| {
            text.parse::<u8>().map_err(|_| {
                ChartError::InvalidData(format!("css color `{input}` has an invalid channel"))
            })
        };
        let alpha = if expect_alpha {
            parts[3].parse::<f64>().map_err(|_| {
                ChartError::InvalidData(format!("css color `{input}` has an invalid alpha"))
            })?
        } else {
            1.0
        };

        let color = Self::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, alpha);
        color.validate()?;
        Ok(color)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CssColorVisitor;

        impl Visitor<'_> for CssColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a css color string like `#2196F3` or `rgba(250, 250, 250, 0.8)`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
                Color::parse_css(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CssColorVisitor)
    }
}

/// Stroke drawn around a filled shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub color: Color,
    pub width: f64,
}

impl Outline {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ChartError::InvalidData(
                "outline width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Font settings for one text element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    pub size: f64,
    pub color: Color,
}

impl FontStyle {
    #[must_use]
    pub const fn new(size: f64, color: Color) -> Self {
        Self { size, color }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
