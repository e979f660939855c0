use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Binary fill classification of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarTone {
    Positive,
    Neutral,
}

impl BarTone {
    /// `Positive` iff `value > 0`; zero, negatives and NaN are neutral.
    #[must_use]
    pub fn classify(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else {
            Self::Neutral
        }
    }
}

/// Fill colors for the two bar tones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPalette {
    pub positive: Color,
    pub neutral: Color,
}

impl BarPalette {
    #[must_use]
    pub fn color_for(self, tone: BarTone) -> Color {
        match tone {
            BarTone::Positive => self.positive,
            BarTone::Neutral => self.neutral,
        }
    }
}

/// One bar of the feature chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub index: usize,
    pub value: f64,
    pub tone: BarTone,
    pub color: Color,
}

impl BarDatum {
    /// 1-based category label shown under the bar.
    #[must_use]
    pub fn label(&self) -> String {
        (self.index + 1).to_string()
    }

    /// Category position in data coordinates.
    #[must_use]
    pub fn category_x(&self) -> f64 {
        (self.index + 1) as f64
    }
}

/// Builds one bar per display value.
#[must_use]
pub fn derive_bars(values: &[f64], palette: BarPalette) -> Vec<BarDatum> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let tone = BarTone::classify(value);
            BarDatum {
                index,
                value,
                tone,
                color: palette.color_for(tone),
            }
        })
        .collect()
}
