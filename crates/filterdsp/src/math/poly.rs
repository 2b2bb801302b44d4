//! Complex polynomial arithmetic.
use num_complex::Complex64;

/// Coefficients of the monic polynomial with the given roots, highest power
/// first: `poly(&[r1, r2]) = [1, -(r1 + r2), r1*r2]`.
///
/// Read in ascending powers of `z^-1`, the same coefficients describe
/// `Π (1 - r_i*z^-1)`, which is how transfer functions use them.
pub fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = Vec::with_capacity(roots.len() + 1);
    coeffs.push(Complex64::new(1.0, 0.0));
    for r in roots {
        coeffs.push(Complex64::new(0.0, 0.0));
        for i in (1..coeffs.len()).rev() {
            let prev = coeffs[i - 1];
            coeffs[i] -= r * prev;
        }
    }
    coeffs
}

/// Product of all values; `1` for an empty slice.
pub fn prod(values: &[Complex64]) -> Complex64 {
    values.iter().product()
}

/// Evaluates `Σ coeffs[k] * x^k` with Horner's rule.
pub fn horner(coeffs: &[f64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, c| acc * x + *c)
}
