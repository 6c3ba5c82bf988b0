//! # Capture inference parameters
//!
//! This module defines the [`InferenceParams`] configuration struct and its
//! builder, which control how the **capture inference engine** rejects weak
//! observing geometry and propagates measurement noise.
//!
//! ## Purpose
//!
//! [`InferenceParams`] centralizes the tunable parameters consumed by
//! [`infer_captures`](crate::inference::engine::infer_captures):
//!
//! - the minimum effective baseline below which a parallax estimate is refused,
//! - the per-epoch noise sigma propagated into the estimate's uncertainty.
//!
//! ## Example
//!
//! ```rust
//! use skyshift::inference::InferenceParams;
//!
//! let params = InferenceParams::builder()
//!     .min_baseline_eff_au(0.5)
//!     .sigma_epoch_mas(2.0)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## See also
//!
//! * [`crate::inference::engine::infer_captures`] – consumes these parameters.
//! * [`crate::inference::inference_result::CaptureInference`] – the result record.

use std::cmp::Ordering::{Equal, Greater};

use crate::constants::{Au, Mas, DEFAULT_MIN_BASELINE_EFF_AU};
use crate::skyshift_errors::SkyShiftError;

pub mod engine;
pub mod inference_result;

/// Configuration parameters for the capture inference engine.
///
/// Fields
/// -----------------
/// * `min_baseline_eff_au` – minimum effective baseline (AU) along the
///   measurement axis; below it the geometry is classified as
///   [`BaselineTooSmall`](crate::inference::inference_result::InferenceStatus::BaselineTooSmall).
/// * `sigma_epoch_mas` – 1-sigma measurement noise per epoch (mas), combined in
///   quadrature over the two epochs when propagating uncertainties.
///
/// Defaults
/// -----------------
/// * `min_baseline_eff_au`: 0.2 AU
/// * `sigma_epoch_mas`: 0.0 mas (noiseless instrument)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferenceParams {
    pub min_baseline_eff_au: Au,
    pub sigma_epoch_mas: Mas,
}

impl InferenceParams {
    /// Construct a new [`InferenceParams`] with default values.
    ///
    /// This is equivalent to calling [`InferenceParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`InferenceParamsBuilder`] to configure custom parameters.
    pub fn builder() -> InferenceParamsBuilder {
        InferenceParamsBuilder::new()
    }
}

impl Default for InferenceParams {
    fn default() -> Self {
        InferenceParams {
            min_baseline_eff_au: DEFAULT_MIN_BASELINE_EFF_AU,
            sigma_epoch_mas: 0.0,
        }
    }
}

/// Builder for [`InferenceParams`], with validation.
#[derive(Debug, Clone)]
pub struct InferenceParamsBuilder {
    params: InferenceParams,
}

impl Default for InferenceParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InferenceParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: InferenceParams::default(),
        }
    }

    pub fn min_baseline_eff_au(mut self, v: Au) -> Self {
        self.params.min_baseline_eff_au = v;
        self
    }

    pub fn sigma_epoch_mas(mut self, v: Mas) -> Self {
        self.params.sigma_epoch_mas = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Return true iff x >= 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn ge0(x: f64) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    /// Finalize the builder and produce an [`InferenceParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `min_baseline_eff_au > 0.0` and finite – the geometric floor must be a
    ///   usable threshold.
    /// * `sigma_epoch_mas >= 0.0` and finite – a noiseless instrument is valid,
    ///   a negative or non-finite sigma is not.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(InferenceParams)` if all values are valid.
    /// * `Err(SkyShiftError::InvalidInferenceParameter)` if any rule fails.
    pub fn build(self) -> Result<InferenceParams, SkyShiftError> {
        let p = &self.params;

        if !Self::gt0(p.min_baseline_eff_au) || !p.min_baseline_eff_au.is_finite() {
            return Err(SkyShiftError::InvalidInferenceParameter(format!(
                "min_baseline_eff_au must be finite and > 0 (got {})",
                p.min_baseline_eff_au
            )));
        }
        if !Self::ge0(p.sigma_epoch_mas) || !p.sigma_epoch_mas.is_finite() {
            return Err(SkyShiftError::InvalidInferenceParameter(format!(
                "sigma_epoch_mas must be finite and >= 0 (got {})",
                p.sigma_epoch_mas
            )));
        }

        Ok(self.params)
    }
}

#[cfg(test)]
mod params_tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = InferenceParams::default();
        assert_eq!(params.min_baseline_eff_au, DEFAULT_MIN_BASELINE_EFF_AU);
        assert_eq!(params.sigma_epoch_mas, 0.0);
    }

    #[test]
    fn test_builder_accepts_valid_params() {
        let params = InferenceParams::builder()
            .min_baseline_eff_au(0.5)
            .sigma_epoch_mas(2.0)
            .build()
            .unwrap();
        assert_eq!(params.min_baseline_eff_au, 0.5);
        assert_eq!(params.sigma_epoch_mas, 2.0);
    }

    #[test]
    fn test_builder_rejects_invalid_params() {
        assert!(InferenceParams::builder()
            .min_baseline_eff_au(0.0)
            .build()
            .is_err());
        assert!(InferenceParams::builder()
            .min_baseline_eff_au(-1.0)
            .build()
            .is_err());
        assert!(InferenceParams::builder()
            .min_baseline_eff_au(f64::NAN)
            .build()
            .is_err());
        assert!(InferenceParams::builder()
            .sigma_epoch_mas(-0.1)
            .build()
            .is_err());
        assert!(InferenceParams::builder()
            .sigma_epoch_mas(f64::INFINITY)
            .build()
            .is_err());
    }
}
