//! Bounded uniform noise
//!
//! Every generated count passes through [`noise`]: the base value plus a uniform
//! offset in `[-variance, variance]`, rounded and clamped at zero.

use rand::Rng;

/// Perturb `base` by a uniform offset in `[-variance, variance]`
///
/// The result is rounded half away from zero and never negative. A negative or
/// non-finite variance adds no noise.
pub fn noise<R: Rng + ?Sized>(base: f64, variance: f64, rng: &mut R) -> u32 {
    let offset = if variance.is_finite() && variance > 0.0 {
        rng.gen_range(-variance..=variance)
    } else {
        0.0
    };
    clamp_round(base + offset)
}

/// Round to the nearest integer and clamp into `u32`
pub(crate) fn clamp_round(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Sample `[0, span)` uniformly
pub(crate) fn unit_span<R: Rng + ?Sized>(span: f64, rng: &mut R) -> f64 {
    rng.gen::<f64>() * span
}
