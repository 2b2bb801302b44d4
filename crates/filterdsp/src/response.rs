//! Frequency response of designed filters.
use core::f64::consts::PI;
use num_complex::Complex64;

use crate::math::poly::horner;

/// Complex frequency response `H(e^{jω}) = B(z)/A(z)` of a filter with
/// numerator `b` and denominator `a` (ascending powers of `z^-1`) at `freq`
/// Hz, for a sample rate of `sample_rate` Hz.
///
/// Use `a = &[1.0]` for an FIR filter.
///
/// Example usage:
/// ```
/// use filterdsp::response;
///
/// // two-tap moving average: unit DC gain, zero at Nyquist
/// let b = [0.5, 0.5];
/// assert!((response::freqz(&b, &[1.0], 0.0, 1000.0).norm() - 1.0).abs() < 1e-12);
/// assert!(response::freqz(&b, &[1.0], 500.0, 1000.0).norm() < 1e-12);
/// ```
pub fn freqz(b: &[f64], a: &[f64], freq: f64, sample_rate: f64) -> Complex64 {
    let z_inv = Complex64::from_polar(1.0, -2.0 * PI * freq / sample_rate);
    horner(b, z_inv) / horner(a, z_inv)
}

/// Magnitude of the frequency response, see [`freqz`].
pub fn magnitude(b: &[f64], a: &[f64], freq: f64, sample_rate: f64) -> f64 {
    freqz(b, a, freq, sample_rate).norm()
}

/// Magnitude of the frequency response in dB, see [`freqz`].
pub fn magnitude_db(b: &[f64], a: &[f64], freq: f64, sample_rate: f64) -> f64 {
    20.0 * magnitude(b, a, freq, sample_rate).log10()
}
