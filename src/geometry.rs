//! # 2D measurement geometry
//!
//! Vector helpers and the **measurement basis** used by the parallax simulator.
//!
//! ## Overview
//!
//! All simulated astrometry in this crate is one-dimensional: offsets are measured
//! along a single axis on the detector. [`MeasurementBasis`] derives that axis from
//! a star-direction hint as an orthonormal pair:
//!
//! - `star_dir_hat` – unit vector pointing at the target star,
//! - `axis_hat` – unit vector perpendicular to it, along which every offset and
//!   every noise draw is projected.
//!
//! General-purpose vector algebra (`+`, `-`, scaling, `dot`, `norm`) comes from
//! [`nalgebra`]; this module only adds the two operations nalgebra does not define
//! for us: a 90° rotation and a zero-safe normalization.
//!
//! ## Degenerate inputs
//!
//! [`unit_or_x`] never fails: a zero-length or non-finite vector resolves to the
//! canonical direction `(1, 0)`, so downstream geometry and rendering always
//! receive a well-defined unit vector.
//!
//! ## See also
//!
//! * [`crate::observation`] – projects Earth positions onto `axis_hat`.
//! * [`crate::inference`] – projects baselines and offset deltas onto `axis_hat`.

use serde::{Deserialize, Serialize};

use crate::constants::Vec2;

/// Rotate a vector by 90° counter-clockwise.
///
/// Arguments
/// ---------
/// * `v`: the vector to rotate
///
/// Return
/// ------
/// * `(-v.y, v.x)`
pub fn perp(v: &Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Normalize a vector, falling back to the x axis for degenerate input.
///
/// Arguments
/// ---------
/// * `v`: the vector to normalize
///
/// Return
/// ------
/// * `v / |v|` when `|v|` is finite and strictly positive, `(1, 0)` otherwise
pub fn unit_or_x(v: &Vec2) -> Vec2 {
    let norm = v.norm();
    if norm.is_finite() && norm > 0.0 {
        v / norm
    } else {
        Vec2::new(1.0, 0.0)
    }
}

/// Orthonormal pair defining the one-dimensional measurement geometry.
///
/// Invariant: `|star_dir_hat| = |axis_hat| = 1` and
/// `dot(star_dir_hat, axis_hat) = 0`, to within floating-point tolerance.
/// Construction through [`MeasurementBasis::from_hint`] upholds this for every
/// input, including zero-length and non-finite hints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementBasis {
    /// Unit vector pointing from the observer toward the target star
    pub star_dir_hat: Vec2,
    /// Unit vector along which offsets and noise are measured
    pub axis_hat: Vec2,
}

impl MeasurementBasis {
    /// Build a measurement basis from an optional star-direction hint.
    ///
    /// Arguments
    /// ---------
    /// * `hint`: direction toward the star; `None` uses the default hint `(0, 1)`
    ///
    /// Return
    /// ------
    /// * an orthonormal [`MeasurementBasis`] with
    ///   `star_dir_hat = unit_or_x(hint)` and `axis_hat = unit_or_x(perp(star_dir_hat))`
    pub fn from_hint(hint: Option<Vec2>) -> Self {
        let star_dir_hat = unit_or_x(&hint.unwrap_or_else(|| Vec2::new(0.0, 1.0)));
        let axis_hat = unit_or_x(&perp(&star_dir_hat));
        MeasurementBasis {
            star_dir_hat,
            axis_hat,
        }
    }
}

impl Default for MeasurementBasis {
    fn default() -> Self {
        Self::from_hint(None)
    }
}

#[cfg(test)]
mod geometry_tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_perp() {
        assert_eq!(perp(&Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0));
        assert_eq!(perp(&Vec2::new(0.0, 1.0)), Vec2::new(-1.0, 0.0));

        let v = Vec2::new(3.7, -1.2);
        assert_relative_eq!(v.dot(&perp(&v)), 0.0);
    }

    #[test]
    fn test_unit_or_x() {
        let u = unit_or_x(&Vec2::new(3.0, 4.0));
        assert_relative_eq!(u.x, 0.6);
        assert_relative_eq!(u.y, 0.8);
        assert_relative_eq!(u.norm(), 1.0);

        // Degenerate inputs resolve to the canonical direction, exactly.
        assert_eq!(unit_or_x(&Vec2::new(0.0, 0.0)), Vec2::new(1.0, 0.0));
        assert_eq!(unit_or_x(&Vec2::new(f64::NAN, 1.0)), Vec2::new(1.0, 0.0));
        assert_eq!(
            unit_or_x(&Vec2::new(f64::INFINITY, 0.0)),
            Vec2::new(1.0, 0.0)
        );
    }

    #[test]
    fn test_basis_orthonormal_for_any_hint() {
        let mut rng = StdRng::seed_from_u64(42_u64);

        let mut hints: Vec<Option<Vec2>> = (0..200)
            .map(|_| {
                Some(Vec2::new(
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                ))
            })
            .collect();
        hints.push(None);
        hints.push(Some(Vec2::new(0.0, 0.0)));
        hints.push(Some(Vec2::new(f64::NAN, f64::NAN)));

        for hint in hints {
            let basis = MeasurementBasis::from_hint(hint);
            assert_relative_eq!(basis.star_dir_hat.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(basis.axis_hat.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(
                basis.star_dir_hat.dot(&basis.axis_hat),
                0.0,
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_default_basis() {
        let basis = MeasurementBasis::default();
        assert_eq!(basis.star_dir_hat, Vec2::new(0.0, 1.0));
        assert_eq!(basis.axis_hat, Vec2::new(-1.0, 0.0));
    }
}
