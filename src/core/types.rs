use serde::{Deserialize, Serialize};

/// Number of HLAC mask responses in one descriptor.
pub const DEFAULT_FEATURE_LEN: usize = 25;

/// Upper bound of the fixed value-axis range, and the auto-scale threshold.
pub const DEFAULT_FIXED_AXIS_MAX: f64 = 100.0;

/// How a non-empty feature vector whose length differs from the expected
/// length is handled.
///
/// Empty input is always replaced by zeros of the expected length before the
/// policy is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureLengthPolicy {
    /// Render whatever length was given.
    #[default]
    PassThrough,
    /// Truncate or zero-pad to the expected length.
    Fit,
    /// Reject mismatched vectors.
    Strict,
}
