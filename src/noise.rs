//! # Deterministic measurement noise
//!
//! Reproducible Gaussian noise for the simulated detector, computed as a **pure
//! function of a semantic key** rather than from a stateful random number
//! generator or system entropy.
//!
//! ## Why deterministic
//!
//! The simulator must show the *same* noise draw whenever the user returns to the
//! same configuration: moving a slider back and forth should not re-roll the
//! instrument. A stateful RNG would break that, so the draw is derived entirely
//! from the observation's identifying inputs.
//!
//! ## Algorithm outline
//!
//! 1. `sigma_mas <= 0` (or non-finite) short-circuits to `0.0` — no noise.
//! 2. A canonical key string is assembled from the salt, the epoch label, the
//!    phase angle rounded to one decimal degree, and the distance and sigma
//!    formatted to fixed precision. Rounding **before** hashing is deliberate:
//!    phase values that differ only by floating-point jitter map to the same key
//!    and therefore the same draw.
//! 3. The key is hashed with 32-bit **FNV-1a**.
//! 4. The hash seeds a **Mulberry32** generator, from which two uniforms are drawn.
//! 5. The cosine branch of the **Box–Muller** transform turns the uniforms into a
//!    standard normal sample, scaled by `sigma_mas`.
//!
//! Identical arguments always produce bit-identical output within one build of
//! this crate; bit-for-bit parity across runtimes is not a goal.

use crate::constants::{Degree, Mas, Parsec, DEFAULT_NOISE_SALT, DPI, MIN_UNIFORM};

/// 32-bit FNV-1a hash of a key string.
///
/// Offset basis `2166136261`, prime `16777619`, XOR-then-multiply per byte,
/// wrapping u32 arithmetic.
fn fnv1a_32(key: &str) -> u32 {
    let mut hash: u32 = 2_166_136_261;
    for byte in key.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

/// Mulberry32 pseudo-random generator.
///
/// Small 32-bit state generator; statistical quality is more than sufficient for
/// simulated detector noise and the state fits in the seed itself.
struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    fn new(seed: u32) -> Self {
        Mulberry32 { state: seed }
    }

    /// Next uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        (t ^ (t >> 14)) as f64 / 4_294_967_296.0
    }
}

/// Canonical key for one noise draw.
///
/// Phase is rounded to one decimal degree, distance and sigma to three, so that
/// sub-granularity float jitter cannot change the draw.
fn noise_key(
    salt: &str,
    epoch_label: &str,
    phase_deg: Degree,
    distance_pc: Parsec,
    sigma_mas: Mas,
) -> String {
    format!("{salt}|{epoch_label}|{phase_deg:.1}|{distance_pc:.3}|{sigma_mas:.3}")
}

/// Draw a reproducible Gaussian noise sample for one simulated measurement.
///
/// Arguments
/// ---------
/// * `epoch_label`: label identifying the epoch (e.g. `"A"` or `"B"`)
/// * `phase_deg`: orbital phase of the observation, in degrees
/// * `distance_pc`: target distance in parsecs
/// * `sigma_mas`: 1-sigma noise magnitude in milliarcseconds
/// * `salt`: optional salt; `None` uses [`DEFAULT_NOISE_SALT`]
///
/// Return
/// ------
/// * a sample from `N(0, sigma_mas²)`, or exactly `0.0` when `sigma_mas <= 0`
///   or non-finite. Calling twice with identical arguments yields identical
///   output.
pub fn deterministic_noise_mas(
    epoch_label: &str,
    phase_deg: Degree,
    distance_pc: Parsec,
    sigma_mas: Mas,
    salt: Option<&str>,
) -> Mas {
    if !(sigma_mas > 0.0) || !sigma_mas.is_finite() {
        return 0.0;
    }

    let key = noise_key(
        salt.unwrap_or(DEFAULT_NOISE_SALT),
        epoch_label,
        phase_deg,
        distance_pc,
        sigma_mas,
    );
    let mut rng = Mulberry32::new(fnv1a_32(&key));

    let u1 = rng.next_f64().max(MIN_UNIFORM);
    let u2 = rng.next_f64();
    let z = (-2.0 * u1.ln()).sqrt() * (DPI * u2).cos();

    z * sigma_mas
}
