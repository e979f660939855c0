use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("feature vector length mismatch: expected={expected}, actual={actual}")]
    FeatureLengthMismatch { expected: usize, actual: usize },

    #[error("serialization failed: {0}")]
    Serialization(String),
}
