//! # Capture inference result
//!
//! This module defines [`CaptureInference`], the record produced by the
//! **capture inference engine** for a pair of epoch captures.
//!
//! ## Structure
//!
//! The record separates what is *always* known from what only exists for a
//! successful estimate:
//!
//! - **Diagnostics** (baseline geometry, phase separation, offset delta) are
//!   populated for every terminal status, so a partial display can always
//!   render something sensible.
//! - **The solution** (parallax, distance, propagated uncertainties, SNR,
//!   quality) is an `Option<ParallaxSolution>`: present exactly when
//!   `status == Ok`. A failed inference therefore cannot leak `NaN` through a
//!   "successful" numeric field.
//!
//! ## Terminal statuses
//!
//! - [`InferenceStatus::MissingCapture`] – one or both epochs absent or non-finite.
//! - [`InferenceStatus::BaselineTooSmall`] – effective baseline below the floor.
//! - [`InferenceStatus::ZeroShift`] – no net offset between the epochs.
//! - [`InferenceStatus::Ok`] – estimate available.
//!
//! ## See also
//!
//! * [`infer_captures`](crate::inference::engine::infer_captures) – produces this record.
//! * [`MeasurementQuality`] – qualitative confidence rating derived from the SNR.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{Au, Degree, Mas, Parsec, Vec2};

/// Terminal classification of one inference run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InferenceStatus {
    /// One or both epoch captures are absent or contain non-finite values.
    MissingCapture,
    /// The baseline component along the measurement axis is below the floor.
    BaselineTooSmall,
    /// The two epochs show no net offset along the measurement axis.
    ZeroShift,
    /// A parallax estimate was computed.
    Ok,
}

impl fmt::Display for InferenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InferenceStatus::MissingCapture => "missing_capture",
            InferenceStatus::BaselineTooSmall => "baseline_too_small",
            InferenceStatus::ZeroShift => "zero_shift",
            InferenceStatus::Ok => "ok",
        };
        write!(f, "{label}")
    }
}

/// Qualitative confidence rating derived from the parallax SNR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementQuality {
    Excellent,
    Good,
    Poor,
    NotMeasurable,
}

impl MeasurementQuality {
    /// Classify a signal-to-noise ratio.
    ///
    /// Arguments
    /// ---------
    /// * `snr`: estimated parallax divided by its propagated 1-sigma uncertainty
    ///
    /// Return
    /// ------
    /// * `Excellent` for an infinite SNR (noiseless instrument) or `snr >= 10`
    /// * `NotMeasurable` for a non-finite or non-positive SNR
    /// * `Good` for `snr >= 5`
    /// * `Poor` otherwise
    pub fn from_snr(snr: f64) -> Self {
        if snr == f64::INFINITY {
            return MeasurementQuality::Excellent;
        }
        if !snr.is_finite() || snr <= 0.0 {
            return MeasurementQuality::NotMeasurable;
        }
        if snr >= 10.0 {
            MeasurementQuality::Excellent
        } else if snr >= 5.0 {
            MeasurementQuality::Good
        } else {
            MeasurementQuality::Poor
        }
    }
}

impl fmt::Display for MeasurementQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MeasurementQuality::Excellent => "Excellent",
            MeasurementQuality::Good => "Good",
            MeasurementQuality::Poor => "Poor",
            MeasurementQuality::NotMeasurable => "Not measurable",
        };
        write!(f, "{label}")
    }
}

/// Parallax estimate and propagated uncertainties, present only for
/// [`InferenceStatus::Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxSolution {
    /// Estimated parallax (mas)
    pub p_hat_mas: Mas,
    /// Estimated distance (pc), `1000 / p_hat_mas`
    pub d_hat_pc: Parsec,
    /// Shift a canonical 6-month baseline would show at this parallax (mas)
    pub equivalent_six_month_shift_mas: Mas,
    /// 1-sigma uncertainty of the two-epoch shift (mas)
    pub sigma_shift_mas: Mas,
    /// 1-sigma uncertainty of the parallax estimate (mas)
    pub sigma_p_hat_mas: Mas,
    /// 1-sigma uncertainty of the distance estimate (pc), first-order propagation
    pub sigma_d_hat_pc: Parsec,
    /// Signal-to-noise ratio of the parallax estimate
    pub snr_p_hat: f64,
    /// Qualitative confidence rating
    pub quality: MeasurementQuality,
}

/// Result record of one capture inference run.
///
/// Diagnostics are populated for every status; `solution` is present exactly
/// when `status` is [`InferenceStatus::Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureInference {
    /// Terminal classification of the run
    pub status: InferenceStatus,
    /// Separation of the two Earth positions (AU)
    pub baseline_vec_au: Vec2,
    /// Full length of the baseline vector (AU)
    pub baseline_chord_au: Au,
    /// Baseline component along the measurement axis (AU)
    pub baseline_eff_au: Au,
    /// Minimum-angle separation of the two phases, in [0°, 180°]
    pub phase_sep_deg: Degree,
    /// Signed offset delta along the measurement axis (mas)
    pub delta_theta_signed_mas: Mas,
    /// Magnitude of the offset delta (mas)
    pub delta_theta_mas: Mas,
    /// Parallax estimate, present only when the run succeeded
    pub solution: Option<ParallaxSolution>,
}

impl CaptureInference {
    /// Whether the run produced a parallax estimate.
    pub fn computable(&self) -> bool {
        self.solution.is_some()
    }

    /// Result for a run with at least one absent or non-finite capture.
    ///
    /// All diagnostics are zeroed; there is nothing to compute from.
    pub fn missing() -> Self {
        CaptureInference {
            status: InferenceStatus::MissingCapture,
            baseline_vec_au: Vec2::zeros(),
            baseline_chord_au: 0.0,
            baseline_eff_au: 0.0,
            phase_sep_deg: 0.0,
            delta_theta_signed_mas: 0.0,
            delta_theta_mas: 0.0,
            solution: None,
        }
    }
}

impl fmt::Display for CaptureInference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status        : {}", self.status)?;
        writeln!(
            f,
            "baseline      : chord {:.3} AU, effective {:.3} AU, phase sep {:.1}°",
            self.baseline_chord_au, self.baseline_eff_au, self.phase_sep_deg
        )?;
        writeln!(
            f,
            "shift         : {:.3} mas (signed {:+.3} mas)",
            self.delta_theta_mas, self.delta_theta_signed_mas
        )?;
        match &self.solution {
            None => writeln!(f, "parallax      : not computable"),
            Some(sol) => {
                writeln!(
                    f,
                    "parallax      : {:.3} ± {:.3} mas (SNR {:.1})",
                    sol.p_hat_mas, sol.sigma_p_hat_mas, sol.snr_p_hat
                )?;
                writeln!(
                    f,
                    "distance      : {:.3} ± {:.3} pc",
                    sol.d_hat_pc, sol.sigma_d_hat_pc
                )?;
                writeln!(
                    f,
                    "6-month shift : {:.3} mas",
                    sol.equivalent_six_month_shift_mas
                )?;
                writeln!(f, "quality       : {}", sol.quality)
            }
        }
    }
}
