//! Window functions for FIR design.

/// A generalized cosine window of a given length with coefficients `coeffs`.
/// If `periodic` is `false`, a symmetric window is returned, which is suitable for
/// filter design. If `periodic` is true, the window of length `len+1` is
/// computed and truncated to its first `len` taps.
///
/// The generalized cosine window is on the form:
///```text
/// w[n] = sum_k (-1)^k * coeffs[k] * cos(2*π*k*n/(N-1)),     0 ≤ n < N.
///```
///
/// A window of length 1 is `[1.0]`.
///
/// Example usage:
/// ```
/// use filterdsp::windows;
///
/// let taps = windows::gen_cos(38, &[0.1, 0.2], false);
/// assert_eq!(taps.len(), 38);
/// ```
pub fn gen_cos(len: usize, coeffs: &[f64], periodic: bool) -> Vec<f64> {
    if len <= 1 {
        return vec![1.0; len];
    }
    let n_points = match periodic {
        true => len + 1,
        false => len,
    };
    let alpha = (n_points - 1) as f64 / 2.0;
    (0..len)
        .map(|n| {
            coeffs
                .iter()
                .enumerate()
                .map(|(k, c)| {
                    (-1.0f64).powi(k as i32)
                        * c
                        * (core::f64::consts::PI * ((k * n) as f64) / alpha).cos()
                })
                .sum()
        })
        .collect()
}

/// A Hamming window of a given length, `w[n] = 0.54 - 0.46*cos(2*π*n/(N-1))`.
/// If `periodic` is `true` a periodic window is returned, otherwise a symmetric
/// window. See [`gen_cos`] for more details.
///
/// Example usage:
/// ```
/// use filterdsp::windows;
///
/// let taps = windows::hamming(5, false);
/// assert!((taps[2] - 1.0).abs() < 1e-12);
/// ```
pub fn hamming(len: usize, periodic: bool) -> Vec<f64> {
    gen_cos(len, &[0.54, 0.46], periodic)
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;

    fn assert_taps(window: &[f64], expected: &[f64]) {
        assert_eq!(window.len(), expected.len());
        for (i, tap) in expected.iter().enumerate() {
            let tol = 1e-12;
            assert!(
                (window[i] - tap).abs() < tol,
                "abs({} - {}) < {} (tap {})",
                window[i],
                tap,
                tol,
                i
            );
        }
    }

    #[test]
    fn hamming_odd() {
        assert_taps(&hamming(5, false), &[0.08, 0.54, 1.0, 0.54, 0.08]);
    }

    #[test]
    fn hamming_even() {
        let test_taps = [
            0.080000000000000,
            0.253194691144983,
            0.642359629619905,
            0.954445679235113,
            0.954445679235113,
            0.642359629619905,
            0.253194691144983,
            0.080000000000000,
        ];
        assert_taps(&hamming(8, false), &test_taps);
    }

    #[test]
    fn hamming_periodic() {
        let test_taps = [
            0.080000000000000,
            0.397852182587524,
            0.912147817412476,
            0.912147817412476,
            0.397852182587524,
        ];
        assert_taps(&hamming(5, true), &test_taps);
    }

    #[test]
    fn degenerate_lengths() {
        assert!(hamming(0, false).is_empty());
        assert_eq!(hamming(1, false), vec![1.0]);
        assert_eq!(hamming(1, true), vec![1.0]);
    }
}
