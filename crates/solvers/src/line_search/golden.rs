/// The golden ratio: φ = (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// The golden-section fraction: 1 - 1/φ ≈ 0.382
///
/// Fraction of a bracket half taken by a golden-section step.
pub const CPHI: f64 = 1.0 - 1.0 / PHI;

/// Fractional precision of the minimiser: √ε for `f64`.
pub const TOL: f64 = 1.490_116_119_384_765_6e-8;

/// Absolute floor for tolerances and interpolation denominators.
///
/// Fractional precision is meaningless when the minimum sits at zero, and no
/// denominator in either phase is allowed to shrink below this value.
pub const TINY: f64 = 1.0e-10;

/// Maximum parabolic extrapolation, as a multiple of the current span.
pub const MAX_STEP: f64 = 10.0;

/// Returns the sign of `value` as `-1.0`, `0.0`, or `1.0`.
///
/// Unlike [`f64::signum`], zero maps to zero, so a zero step stays zero.
pub(super) fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Returns `value` with its magnitude raised to at least [`TINY`].
///
/// A positive zero is treated as positive.
pub(super) fn floored(value: f64) -> f64 {
    value.abs().max(TINY).copysign(value)
}
