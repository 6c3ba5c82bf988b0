use thiserror::Error;

/// Errors raised while validating engine configuration.
///
/// The measurement and inference paths themselves are total: degenerate runtime
/// inputs resolve to a canonical fallback direction or to an explicit
/// [`InferenceStatus`](crate::inference::inference_result::InferenceStatus),
/// never to an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkyShiftError {
    #[error("Invalid inference parameter: {0}")]
    InvalidInferenceParameter(String),

    #[error("Invalid display scale: {0}")]
    InvalidDisplayScale(String),
}
