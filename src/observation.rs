//! # Simulated epoch captures
//!
//! The **measurement simulator**: given a true parallax and an epoch's observing
//! geometry, produce the angular offset a one-dimensional detector would report,
//! including a reproducible noise term.
//!
//! ## Overview
//!
//! The small-angle parallax model used throughout this crate is a 1-D projection:
//! the apparent offset of the target star is the Earth's orbital position
//! projected onto the measurement axis, scaled by the parallax magnitude,
//!
//! ```text
//! true_offset = axis_hat * (parallax_mas * dot(earth_pos_au, axis_hat))
//! ```
//!
//! and the simulated detector reading adds a deterministic Gaussian term along
//! the same axis (see [`crate::noise`]).
//!
//! An [`EpochCapture`] freezes one such reading together with the observing
//! geometry. Two captures are the sole input to the
//! [inference engine](crate::inference::engine); captures are assembled on
//! demand by the caller and never owned or cached by this crate.
//!
//! ## Display helpers
//!
//! [`offset_px`] and [`error_radius_px`] convert mas quantities to screen pixels
//! for the out-of-scope rendering layer. The error-radius clamp keeps markers
//! legible; it is a display concern only and never feeds back into inference.

use serde::{Deserialize, Serialize};

use crate::constants::{
    Degree, Mas, Parsec, Pixel, Vec2, ERROR_RADIUS_MAX_PX, ERROR_RADIUS_MIN_PX,
};
use crate::geometry::MeasurementBasis;
use crate::noise::deterministic_noise_mas;
use crate::skyshift_errors::SkyShiftError;

/// One frozen simulated observation of the target star.
///
/// Fields
/// ------
/// * `earth_pos_au` – heliocentric Earth position at the epoch, in AU
/// * `measured_offset_mas` – simulated detector reading, in mas
/// * `phase_deg` – orbital phase of the epoch, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochCapture {
    pub earth_pos_au: Vec2,
    pub measured_offset_mas: Vec2,
    pub phase_deg: Degree,
}

impl EpochCapture {
    /// Simulate a capture for one epoch.
    ///
    /// Arguments
    /// ---------
    /// * `epoch_label`: label keying the noise draw (e.g. `"A"`)
    /// * `parallax_mas`: true parallax, clamped to be non-negative
    /// * `earth_pos_au`: heliocentric Earth position at the epoch, in AU
    /// * `phase_deg`: orbital phase of the epoch, in degrees
    /// * `distance_pc`: target distance in parsecs (part of the noise key)
    /// * `sigma_mas`: 1-sigma measurement noise in mas
    /// * `salt`: optional noise salt, `None` for the crate default
    /// * `basis`: measurement basis the offset is projected onto
    ///
    /// Return
    /// ------
    /// * an [`EpochCapture`] holding the noisy simulated reading
    #[allow(clippy::too_many_arguments)]
    pub fn simulate(
        epoch_label: &str,
        parallax_mas: Mas,
        earth_pos_au: Vec2,
        phase_deg: Degree,
        distance_pc: Parsec,
        sigma_mas: Mas,
        salt: Option<&str>,
        basis: &MeasurementBasis,
    ) -> Self {
        let measured_offset_mas = simulate_offset_mas(
            epoch_label,
            parallax_mas,
            &earth_pos_au,
            phase_deg,
            distance_pc,
            sigma_mas,
            salt,
            basis,
        );
        EpochCapture {
            earth_pos_au,
            measured_offset_mas,
            phase_deg,
        }
    }

    /// Whether every field of the capture is a finite number.
    pub fn is_finite(&self) -> bool {
        self.earth_pos_au.x.is_finite()
            && self.earth_pos_au.y.is_finite()
            && self.measured_offset_mas.x.is_finite()
            && self.measured_offset_mas.y.is_finite()
            && self.phase_deg.is_finite()
    }
}

/// True angular offset of the star at one epoch, without noise.
///
/// Arguments
/// ---------
/// * `parallax_mas`: true parallax; negative values are clamped to `0`
/// * `earth_pos_au`: heliocentric Earth position, in AU
/// * `basis`: measurement basis
///
/// Return
/// ------
/// * `axis_hat * (parallax_mas * dot(earth_pos_au, axis_hat))`, in mas
pub fn true_offset_mas(parallax_mas: Mas, earth_pos_au: &Vec2, basis: &MeasurementBasis) -> Vec2 {
    let parallax_mas = parallax_mas.max(0.0);
    basis.axis_hat * (parallax_mas * earth_pos_au.dot(&basis.axis_hat))
}

/// Simulated detector reading: true offset plus axis-aligned noise.
///
/// Arguments
/// ---------
/// * `epoch_label`: label keying the noise draw
/// * `parallax_mas`: true parallax; negative values are clamped to `0`
/// * `earth_pos_au`: heliocentric Earth position, in AU
/// * `phase_deg`: orbital phase, part of the noise key
/// * `distance_pc`: target distance, part of the noise key
/// * `sigma_mas`: 1-sigma measurement noise in mas
/// * `salt`: optional noise salt
/// * `basis`: measurement basis
///
/// Return
/// ------
/// * the noisy offset vector in mas; reproducible for identical arguments
#[allow(clippy::too_many_arguments)]
pub fn simulate_offset_mas(
    epoch_label: &str,
    parallax_mas: Mas,
    earth_pos_au: &Vec2,
    phase_deg: Degree,
    distance_pc: Parsec,
    sigma_mas: Mas,
    salt: Option<&str>,
    basis: &MeasurementBasis,
) -> Vec2 {
    let noise_mas = deterministic_noise_mas(epoch_label, phase_deg, distance_pc, sigma_mas, salt);
    true_offset_mas(parallax_mas, earth_pos_au, basis) + basis.axis_hat * noise_mas
}

/// Conversion from angular offsets to screen pixels.
///
/// Validated at construction so the rendering path never sees a degenerate
/// scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayScale {
    /// Visual exaggeration factor applied to angular offsets
    pub exaggeration: f64,
    /// Pixels per milliarcsecond at exaggeration 1
    pub px_per_mas: f64,
}

impl DisplayScale {
    /// Create a validated display scale.
    ///
    /// Arguments
    /// ---------
    /// * `exaggeration`: must be finite and strictly positive
    /// * `px_per_mas`: must be finite and strictly positive
    ///
    /// Return
    /// ------
    /// * `Ok(DisplayScale)` when both factors are valid
    /// * `Err(SkyShiftError::InvalidDisplayScale)` otherwise
    pub fn new(exaggeration: f64, px_per_mas: f64) -> Result<Self, SkyShiftError> {
        if !exaggeration.is_finite() || exaggeration <= 0.0 {
            return Err(SkyShiftError::InvalidDisplayScale(format!(
                "exaggeration must be finite and > 0 (got {exaggeration})"
            )));
        }
        if !px_per_mas.is_finite() || px_per_mas <= 0.0 {
            return Err(SkyShiftError::InvalidDisplayScale(format!(
                "px_per_mas must be finite and > 0 (got {px_per_mas})"
            )));
        }
        Ok(DisplayScale {
            exaggeration,
            px_per_mas,
        })
    }
}

/// Convert an angular offset to pixels.
pub fn offset_px(offset_mas: Mas, scale: &DisplayScale) -> Pixel {
    offset_mas * scale.exaggeration * scale.px_per_mas
}

/// Rendered radius of the error circle for a given sigma, clamped for legibility.
///
/// The clamp is purely a display range; the numeric inference path never reads it.
pub fn error_radius_px(sigma_mas: Mas, scale: &DisplayScale) -> Pixel {
    let radius = offset_px(sigma_mas, scale).abs();
    if !radius.is_finite() {
        return ERROR_RADIUS_MIN_PX;
    }
    radius.clamp(ERROR_RADIUS_MIN_PX, ERROR_RADIUS_MAX_PX)
}
