use tracing::warn;

use crate::core::FeatureLengthPolicy;
use crate::error::{ChartError, ChartResult};

/// Builds the display vector for one render pass.
///
/// Empty input becomes `expected_len` zeros. Non-empty input is checked
/// against `expected_len` according to `policy`.
pub fn normalize_features(
    features: &[f64],
    expected_len: usize,
    policy: FeatureLengthPolicy,
) -> ChartResult<Vec<f64>> {
    if features.is_empty() {
        return Ok(vec![0.0; expected_len]);
    }
    if features.len() == expected_len {
        return Ok(features.to_vec());
    }

    match policy {
        FeatureLengthPolicy::PassThrough => {
            warn!(
                expected = expected_len,
                actual = features.len(),
                "feature vector length differs from expected; rendering as given"
            );
            Ok(features.to_vec())
        }
        FeatureLengthPolicy::Fit => {
            let mut display = features.to_vec();
            display.resize(expected_len, 0.0);
            Ok(display)
        }
        FeatureLengthPolicy::Strict => Err(ChartError::FeatureLengthMismatch {
            expected: expected_len,
            actual: features.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_features;
    use crate::core::FeatureLengthPolicy;
    use crate::error::ChartError;

    #[test]
    fn empty_input_is_zero_filled_under_every_policy() {
        for policy in [
            FeatureLengthPolicy::PassThrough,
            FeatureLengthPolicy::Fit,
            FeatureLengthPolicy::Strict,
        ] {
            let display = normalize_features(&[], 25, policy).expect("empty is substituted");
            assert_eq!(display, vec![0.0; 25]);
        }
    }

    #[test]
    fn pass_through_keeps_short_vectors() {
        let display = normalize_features(&[1.0, 2.0, 3.0], 25, FeatureLengthPolicy::PassThrough)
            .expect("pass-through");
        assert_eq!(display, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn fit_pads_and_truncates() {
        let padded = normalize_features(&[5.0, 6.0], 4, FeatureLengthPolicy::Fit).expect("pad");
        assert_eq!(padded, vec![5.0, 6.0, 0.0, 0.0]);

        let truncated =
            normalize_features(&[1.0, 2.0, 3.0, 4.0, 5.0], 3, FeatureLengthPolicy::Fit)
                .expect("truncate");
        assert_eq!(truncated, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn strict_rejects_mismatch() {
        let err = normalize_features(&[1.0; 24], 25, FeatureLengthPolicy::Strict)
            .expect_err("mismatch must fail");
        assert!(matches!(
            err,
            ChartError::FeatureLengthMismatch {
                expected: 25,
                actual: 24
            }
        ));
    }
}
