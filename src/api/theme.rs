use serde::{Deserialize, Serialize};

use crate::core::BarPalette;
use crate::render::{BusyOverlayStyle, Color, ContainerStyle, FontStyle, Outline};

/// Colors and fonts of the feature chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub positive_bar: Color,
    pub neutral_bar: Color,
    pub bar_outline: Outline,
    pub title_font: FontStyle,
    pub axis_title_font: FontStyle,
    pub plot_background: Color,
    pub paper_background: Color,
    pub font_family: String,
    pub container: ContainerStyle,
    pub busy: BusyOverlayStyle,
}

impl Default for ChartTheme {
    fn default() -> Self {
        let background = Color::rgb(0xFA, 0xFA, 0xFA);
        Self {
            positive_bar: Color::rgb(0x21, 0x96, 0xF3),
            neutral_bar: Color::rgb(0xE0, 0xE0, 0xE0),
            bar_outline: Outline::new(Color::rgb(0x19, 0x76, 0xD2), 1.0),
            title_font: FontStyle::new(18.0, Color::rgb(0x33, 0x33, 0x33)),
            axis_title_font: FontStyle::new(14.0, Color::rgb(0x66, 0x66, 0x66)),
            plot_background: background,
            paper_background: background,
            font_family: "\"Noto Sans JP\", Arial, sans-serif".to_owned(),
            container: ContainerStyle::default(),
            busy: BusyOverlayStyle::default(),
        }
    }
}

impl ChartTheme {
    #[must_use]
    pub fn palette(&self) -> BarPalette {
        BarPalette {
            positive: self.positive_bar,
            neutral: self.neutral_bar,
        }
    }
}

/// User-facing strings. `{len}` in `title` expands to the expected length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub series_name: String,
    pub busy_caption: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self::japanese()
    }
}

impl ChartLabels {
    pub const LEN_PLACEHOLDER: &'static str = "{len}";

    #[must_use]
    pub fn japanese() -> Self {
        Self {
            title: "HLAC特徴量 ({len}次元)".to_owned(),
            x_axis_title: "マスクID".to_owned(),
            y_axis_title: "特徴量".to_owned(),
            series_name: "特徴量値".to_owned(),
            busy_caption: "特徴量を計算中...".to_owned(),
        }
    }

    #[must_use]
    pub fn english() -> Self {
        Self {
            title: "HLAC Features ({len} dimensions)".to_owned(),
            x_axis_title: "Mask ID".to_owned(),
            y_axis_title: "Feature value".to_owned(),
            series_name: "Feature values".to_owned(),
            busy_caption: "Computing features...".to_owned(),
        }
    }

    #[must_use]
    pub fn title_for(&self, expected_len: usize) -> String {
        self.title.replace(Self::LEN_PLACEHOLDER, &expected_len.to_string())
    }
}
