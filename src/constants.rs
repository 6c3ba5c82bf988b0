//! # Constants and type definitions for skyshift
//!
//! This module centralizes the **conversion factors**, **engine defaults**, and **common type
//! definitions** used throughout the `skyshift` library.
//!
//! ## Overview
//!
//! - Parallax/distance conversion factors
//! - Defaults for the inference engine and the deterministic noise pipeline
//! - Display clamps for marker rendering
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the measurement simulator,
//! the noise generator, and the capture inference engine.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Milliarcseconds per arcsecond; `distance_pc = MAS_PER_ARCSEC / parallax_mas`
pub const MAS_PER_ARCSEC: f64 = 1000.0;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

// -------------------------------------------------------------------------------------------------
// Engine defaults
// -------------------------------------------------------------------------------------------------

/// Minimum effective baseline (AU) below which a parallax estimate is rejected
pub const DEFAULT_MIN_BASELINE_EFF_AU: f64 = 0.2;

/// Default salt mixed into the deterministic noise key
pub const DEFAULT_NOISE_SALT: &str = "skyshift-noise";

/// Floor applied to the first Box–Muller uniform to keep the logarithm finite
pub const MIN_UNIFORM: f64 = 1e-12;

// -------------------------------------------------------------------------------------------------
// Display clamps
// -------------------------------------------------------------------------------------------------

/// Smallest rendered error-circle radius (pixels)
pub const ERROR_RADIUS_MIN_PX: f64 = 3.0;

/// Largest rendered error-circle radius (pixels)
pub const ERROR_RADIUS_MAX_PX: f64 = 44.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in milliarcseconds
pub type Mas = f64;
/// Distance in astronomical units
pub type Au = f64;
/// Distance in parsecs
pub type Parsec = f64;
/// Length in screen pixels
pub type Pixel = f64;

/// 2D vector used for both AU positions and mas angular offsets.
///
/// The unit is carried by field naming, not by the type.
pub type Vec2 = nalgebra::Vector2<f64>;
