use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{ImageLayer, ImageSizing, XAnchor, YAnchor};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontStyle, Outline};

/// Declarative chart description handed to a chart engine.
///
/// Field names follow the series/layout/config vocabulary shared by
/// declarative engines such as Plotly, so the serialized form can be fed
/// to them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub data: Vec<BarTrace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarMarker {
    pub color: Vec<Color>,
    pub line: Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    /// Non-finite values are written as `null` and read back as NaN.
    #[serde(with = "nullable_values")]
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    pub marker: BarMarker,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub text: String,
    pub font: FontStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitleSpec {
    pub text: String,
    pub font: FontStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standoff: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxisSpec {
    pub title: AxisTitleSpec,
    pub dtick: f64,
    pub range: [f64; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    Normal,
    Tozero,
    Nonnegative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisSpec {
    pub title: AxisTitleSpec,
    /// `None` lets the engine auto-fit the upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    pub rangemode: RangeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateRef {
    X,
    Y,
    Paper,
}

/// Image annotation positioned in mixed data/paper coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    pub source: String,
    pub xref: CoordinateRef,
    pub yref: CoordinateRef,
    pub x: f64,
    pub y: f64,
    pub sizex: f64,
    pub sizey: f64,
    pub xanchor: XAnchor,
    pub yanchor: YAnchor,
    pub layer: ImageLayer,
    pub sizing: ImageSizing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: f64,
    pub r: f64,
    pub t: f64,
    pub b: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            l: 60.0,
            r: 30.0,
            t: 60.0,
            b: 180.0,
        }
    }
}

impl Margin {
    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [("l", self.l), ("r", self.r), ("t", self.t), ("b", self.b)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub family: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: TitleSpec,
    pub xaxis: XAxisSpec,
    pub yaxis: YAxisSpec,
    pub images: Vec<ImageSpec>,
    pub plot_bgcolor: Color,
    pub paper_bgcolor: Color,
    pub margin: Margin,
    pub showlegend: bool,
    pub font: FontFamily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(rename = "displayModeBar")]
    pub display_mode_bar: bool,
    pub responsive: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            display_mode_bar: false,
            responsive: true,
        }
    }
}

impl ChartSpec {
    /// Number of categories shown on the x-axis.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.data.first().map_or(0, |trace| trace.x.len())
    }

    /// Structural checks a backend runs before drawing.
    ///
    /// Feature values themselves are not inspected; non-finite values are
    /// passed through to the engine unchanged.
    pub fn validate(&self) -> ChartResult<()> {
        for trace in &self.data {
            if trace.x.len() != trace.y.len() || trace.x.len() != trace.marker.color.len() {
                return Err(ChartError::InvalidData(format!(
                    "bar trace columns differ in length: x={}, y={}, color={}",
                    trace.x.len(),
                    trace.y.len(),
                    trace.marker.color.len()
                )));
            }
            for color in &trace.marker.color {
                color.validate()?;
            }
            trace.marker.line.validate()?;
        }

        if self.layout.images.len() != self.category_count() {
            return Err(ChartError::InvalidData(format!(
                "image annotation count {} differs from category count {}",
                self.layout.images.len(),
                self.category_count()
            )));
        }

        let [x_min, x_max] = self.layout.xaxis.range;
        if !x_min.is_finite() || !x_max.is_finite() || x_min >= x_max {
            return Err(ChartError::InvalidData(
                "x-axis range must be finite and increasing".to_owned(),
            ));
        }
        if let Some([y_min, _]) = self.layout.yaxis.range {
            if y_min < 0.0 {
                return Err(ChartError::InvalidData(
                    "y-axis range must not start below zero".to_owned(),
                ));
            }
        }

        self.layout.title.font.validate()?;
        self.layout.xaxis.title.font.validate()?;
        self.layout.yaxis.title.font.validate()?;
        self.layout.plot_bgcolor.validate()?;
        self.layout.paper_bgcolor.validate()?;
        self.layout.margin.validate()?;
        Ok(())
    }
}

mod nullable_values {
    use super::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(
        values: &[f64],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let wire: Vec<Option<f64>> = values
            .iter()
            .map(|value| value.is_finite().then_some(*value))
            .collect();
        wire.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<f64>, D::Error> {
        let wire = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(wire
            .into_iter()
            .map(|value| value.unwrap_or(f64::NAN))
            .collect())
    }
}
