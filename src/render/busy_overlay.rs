use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontStyle};

/// Ring spinner drawn in the middle of the busy overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spinner {
    pub size_px: f64,
    pub border_width_px: f64,
    pub track_color: Color,
    pub accent_color: Color,
    /// Duration of one full linear turn.
    pub period_ms: u32,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            size_px: 40.0,
            border_width_px: 4.0,
            track_color: Color::rgb(0xE0, 0xE0, 0xE0),
            accent_color: Color::rgb(0x21, 0x96, 0xF3),
            period_ms: 1_000,
        }
    }
}

impl Spinner {
    /// Rotation in degrees `[0, 360)` after `elapsed_ms` of linear animation.
    #[must_use]
    pub fn rotation_degrees_at(self, elapsed_ms: u64) -> f64 {
        if self.period_ms == 0 {
            return 0.0;
        }
        let period = u64::from(self.period_ms);
        (elapsed_ms % period) as f64 * 360.0 / period as f64
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "spinner size must be finite and > 0".to_owned(),
            ));
        }
        if !self.border_width_px.is_finite()
            || self.border_width_px <= 0.0
            || self.border_width_px * 2.0 > self.size_px
        {
            return Err(ChartError::InvalidConfig(
                "spinner border width must be > 0 and fit inside the spinner".to_owned(),
            ));
        }
        if self.period_ms == 0 {
            return Err(ChartError::InvalidConfig(
                "spinner period must be > 0".to_owned(),
            ));
        }
        self.track_color.validate()?;
        self.accent_color.validate()?;
        Ok(self)
    }
}

/// Visual settings of the busy overlay, independent of its caption text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusyOverlayStyle {
    pub background: Color,
    pub gap_rem: f64,
    pub spinner: Spinner,
    pub caption_font: FontStyle,
}

impl Default for BusyOverlayStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(250, 250, 250, 0.8),
            gap_rem: 1.0,
            spinner: Spinner::default(),
            caption_font: FontStyle::new(14.0, Color::rgb(0x66, 0x66, 0x66)),
        }
    }
}

impl BusyOverlayStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.background.validate()?;
        if !self.gap_rem.is_finite() || self.gap_rem < 0.0 {
            return Err(ChartError::InvalidConfig(
                "busy overlay gap must be finite and >= 0".to_owned(),
            ));
        }
        self.spinner.validate()?;
        self.caption_font.validate()?;
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyCaption {
    pub text: String,
    pub font: FontStyle,
}

/// Translucent full-bleed layer drawn above the chart while upstream
/// computation is pending. It never alters the chart underneath.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyOverlay {
    pub background: Color,
    pub gap_rem: f64,
    pub spinner: Spinner,
    pub caption: BusyCaption,
}

impl BusyOverlay {
    #[must_use]
    pub fn from_style(style: BusyOverlayStyle, caption: impl Into<String>) -> Self {
        Self {
            background: style.background,
            gap_rem: style.gap_rem,
            spinner: style.spinner,
            caption: BusyCaption {
                text: caption.into(),
                font: style.caption_font,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{BusyOverlay, BusyOverlayStyle, Spinner};

    #[test]
    fn spinner_rotates_linearly_and_wraps() {
        let spinner = Spinner::default();
        assert_relative_eq!(spinner.rotation_degrees_at(0), 0.0);
        assert_relative_eq!(spinner.rotation_degrees_at(250), 90.0);
        assert_relative_eq!(spinner.rotation_degrees_at(1_500), 180.0);
    }

    #[test]
    fn default_style_is_valid() {
        assert!(BusyOverlayStyle::default().validate().is_ok());
    }

    #[test]
    fn oversized_border_is_rejected() {
        let spinner = Spinner {
            border_width_px: 25.0,
            ..Spinner::default()
        };
        assert!(spinner.validate().is_err());
    }

    #[test]
    fn overlay_carries_caption_with_style_font() {
        let style = BusyOverlayStyle::default();
        let overlay = BusyOverlay::from_style(style, "computing");
        assert_eq!(overlay.caption.text, "computing");
        assert_eq!(overlay.caption.font, style.caption_font);
        assert_eq!(overlay.background.to_css(), "rgba(250, 250, 250, 0.8)");
    }
}
