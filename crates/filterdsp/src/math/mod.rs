//! Numerical helpers shared by the designers.
pub mod poly;

use core::f64::consts::PI;

/// Normalized sinc, `sin(π·x)/(π·x)` with `sinc(0) = 1`.
///
/// Example usage:
/// ```
/// use filterdsp::math::sinc;
///
/// assert_eq!(sinc(0.0), 1.0);
/// assert!(sinc(1.0).abs() < 1e-15);
/// ```
pub fn sinc(x: f64) -> f64 {
    match x == 0.0 {
        true => 1.0,
        false => (PI * x).sin() / (PI * x),
    }
}
