use serde::{Deserialize, Serialize};
use tracing::trace;

/// Value-axis range for the feature bars.
///
/// The lower bound is always zero; only the upper bound varies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AxisRange {
    /// Explicit `[min, max]` range.
    Fixed { min: f64, max: f64 },
    /// No explicit bound; the engine fits the data but never shows negatives.
    AutoNonNegative,
}

impl AxisRange {
    /// Chooses the range for `values`.
    ///
    /// Auto-scaling kicks in only when the maximum is strictly greater than
    /// `fixed_max`. A NaN anywhere makes the maximum NaN, which never compares
    /// greater, so such vectors stay on the fixed range.
    #[must_use]
    pub fn derive(values: &[f64], fixed_max: f64) -> Self {
        let max_value = max_with_nan(values);
        let range = if max_value > fixed_max {
            Self::AutoNonNegative
        } else {
            Self::Fixed {
                min: 0.0,
                max: fixed_max,
            }
        };
        trace!(max_value, fixed_max, ?range, "derived value-axis range");
        range
    }

    #[must_use]
    pub fn lower_bound(self) -> f64 {
        match self {
            Self::Fixed { min, .. } => min.max(0.0),
            Self::AutoNonNegative => 0.0,
        }
    }

    #[must_use]
    pub fn upper_bound(self) -> Option<f64> {
        match self {
            Self::Fixed { max, .. } => Some(max),
            Self::AutoNonNegative => None,
        }
    }

    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::AutoNonNegative)
    }

    /// Explicit `[min, max]` pair, if any.
    #[must_use]
    pub fn explicit(self) -> Option<[f64; 2]> {
        match self {
            Self::Fixed { min, max } => Some([min.max(0.0), max]),
            Self::AutoNonNegative => None,
        }
    }
}

fn max_with_nan(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, |acc, value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            acc.max(value)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::AxisRange;

    #[test]
    fn maximum_of_exactly_threshold_keeps_fixed_range() {
        let mut values = vec![0.0; 25];
        values[3] = 100.0;
        assert_eq!(
            AxisRange::derive(&values, 100.0),
            AxisRange::Fixed {
                min: 0.0,
                max: 100.0
            }
        );
    }

    #[test]
    fn maximum_above_threshold_switches_to_auto() {
        let mut values = vec![0.0; 25];
        values[0] = 101.0;
        let range = AxisRange::derive(&values, 100.0);
        assert!(range.is_auto());
        assert_eq!(range.upper_bound(), None);
        assert_eq!(range.lower_bound(), 0.0);
    }

    #[test]
    fn all_negative_vector_stays_fixed_and_nonnegative() {
        let range = AxisRange::derive(&[-5.0, -1.0], 100.0);
        assert_eq!(range.explicit(), Some([0.0, 100.0]));
    }

    #[test]
    fn nan_keeps_fixed_range() {
        let range = AxisRange::derive(&[500.0, f64::NAN], 100.0);
        assert!(!range.is_auto());
    }
}
