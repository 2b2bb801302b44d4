//! Text rendering of designed coefficients.
use filterdsp::TransferFunction;

/// Comma-separated coefficients, one line, no trailing newline. This is the
/// `fir` output format.
///
/// Each value is printed with the shortest representation that parses back
/// to the same `f64`, always with a fractional part or an exponent
/// (`1.0`, `0.25`, `-8.5e-17`).
///
/// ```
/// use filtergen::output::format_coefficients;
///
/// assert_eq!(format_coefficients(&[1.0, -0.5, 1e-20]), "1.0,-0.5,1e-20");
/// ```
pub fn format_coefficients(coeffs: &[f64]) -> String {
    coeffs
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// IIR coefficients in the `iir` output format: a `b=` line followed by an
/// `a=` line, no trailing newline.
pub fn format_transfer_function(tf: &TransferFunction) -> String {
    format!(
        "b={}\na={}",
        format_coefficients(&tf.b),
        format_coefficients(&tf.a)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_precision() {
        let taps = [0.0284064700150113, 0.23700821359070315, 0.46917063278857096];
        let text = format_coefficients(&taps);
        let parsed: Vec<f64> = text.split(',').map(|s| s.parse().unwrap()).collect();
        assert_eq!(parsed, taps);
    }

    #[test]
    fn transfer_function_lines() {
        let tf = TransferFunction {
            b: vec![0.25, 0.5, 0.25],
            a: vec![1.0, 0.0, 0.5],
        };
        assert_eq!(
            format_transfer_function(&tf),
            "b=0.25,0.5,0.25\na=1.0,0.0,0.5"
        );
    }

    #[test]
    fn empty() {
        assert_eq!(format_coefficients(&[]), "");
    }
}
