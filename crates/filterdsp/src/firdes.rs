//! Methods for designing FIR filters.
//!
//! All builders return taps in convolution order: `taps[0]` multiplies the
//! newest input sample, `y[n] = Σ_k taps[k]·x[n-k]`. The designed filters are
//! linear phase, i.e., symmetric for odd `num_taps`, so reversing the vector
//! yields the same filter.
//!
//! Cutoffs of the low-level builders are fractions of the Nyquist frequency,
//! in `(0, 1)`. [`firwin`] takes frequencies in Hz and validates them.
use crate::math::sinc;
use crate::windows;
use crate::Band;
use crate::Cutoff;
use crate::Error;
use crate::FilterType;
use crate::Result;

/// Designs a Hamming-windowed FIR filter for `band` at `sample_rate`.
///
/// Supports lowpass, highpass and bandpass. The passband gain is exactly one
/// at DC (lowpass), at Nyquist (highpass), or at the band center (bandpass).
///
/// Example usage:
/// ```
/// use filterdsp::{firdes, Band};
///
/// let taps = firdes::firwin(5, &Band::lowpass(100.0), 1000.0).unwrap();
/// assert!((taps.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub fn firwin(num_taps: usize, band: &Band, sample_rate: f64) -> Result<Vec<f64>> {
    if num_taps == 0 {
        return Err(Error::InvalidArgument(
            "number of taps must be at least 1".to_string(),
        ));
    }
    if band.filter_type() == FilterType::Bandstop {
        return Err(Error::InvalidFilterType(
            "bandstop is not supported by the FIR designer (use lowpass, highpass or bandpass)"
                .to_string(),
        ));
    }
    let cutoff = band.normalized(sample_rate)?;
    let window = windows::hamming(num_taps, false);

    let taps = match (band.filter_type(), cutoff) {
        (FilterType::Lowpass, Cutoff::Single(wc)) => lowpass(num_taps, wc, &window),
        (FilterType::Highpass, Cutoff::Single(wc)) => {
            if num_taps % 2 == 0 {
                return Err(Error::InvalidArgument(format!(
                    "a highpass filter needs an odd number of taps, got {num_taps}"
                )));
            }
            highpass(num_taps, wc, &window)
        }
        (FilterType::Bandpass, Cutoff::Pair(w1, w2)) => bandpass(num_taps, w1, w2, &window),
        (filter_type, cutoff) => unreachable!("{filter_type} with {cutoff:?}"),
    };
    debug!(
        "designed {} fir, {} taps, cutoff {:?} (fraction of nyquist)",
        band.filter_type(),
        num_taps,
        cutoff
    );
    Ok(taps)
}

/// Constructs a lowpass FIR filter with unit DC gain and cutoff `cutoff`
/// (fraction of Nyquist) using the window `window`.
///
/// # Panics
/// If `window.len()` is zero or `cutoff` is outside `(0, 1)`.
///
/// Example usage:
/// ```
/// use filterdsp::{firdes, windows};
///
/// let num_taps = 65;
/// let taps = firdes::lowpass(num_taps, 0.4, &windows::hamming(num_taps, false));
/// ```
pub fn lowpass(num_taps: usize, cutoff: f64, window: &[f64]) -> Vec<f64> {
    assert!(num_taps > 0, "num_taps must be greater than 0");
    assert_eq!(window.len(), num_taps, "window length must equal num_taps");
    assert!(cutoff > 0.0 && cutoff < 1.0, "cutoff must be in (0, 1)");
    let mut taps = windowed_sinc(window, |x| cutoff * sinc(cutoff * x));
    scale(&mut taps, 0.0);
    taps
}

/// Constructs a highpass FIR filter with unit gain at Nyquist and cutoff
/// `cutoff` (fraction of Nyquist) using the window `window`.
///
/// # Panics
/// If `num_taps` is even, the window length differs from `num_taps`, or
/// `cutoff` is outside `(0, 1)`. An even-length symmetric filter always has a
/// zero at Nyquist and cannot be a highpass.
pub fn highpass(num_taps: usize, cutoff: f64, window: &[f64]) -> Vec<f64> {
    assert!(num_taps % 2 == 1, "num_taps must be odd");
    assert_eq!(window.len(), num_taps, "window length must equal num_taps");
    assert!(cutoff > 0.0 && cutoff < 1.0, "cutoff must be in (0, 1)");
    let mut taps = windowed_sinc(window, |x| sinc(x) - cutoff * sinc(cutoff * x));
    scale(&mut taps, 1.0);
    taps
}

/// Constructs a bandpass FIR filter with unit gain at the band center and
/// band edges `lower_cutoff` and `higher_cutoff` (fractions of Nyquist) using
/// the window `window`.
///
/// # Panics
/// If the window length differs from `num_taps`, or the edges are not
/// ordered within `(0, 1)`.
///
/// Example usage:
/// ```
/// use filterdsp::{firdes, windows};
///
/// let num_taps = 65;
/// let taps = firdes::bandpass(num_taps, 0.2, 0.4, &windows::hamming(num_taps, false));
/// ```
pub fn bandpass(
    num_taps: usize,
    lower_cutoff: f64,
    higher_cutoff: f64,
    window: &[f64],
) -> Vec<f64> {
    assert!(num_taps > 0, "num_taps must be greater than 0");
    assert_eq!(window.len(), num_taps, "window length must equal num_taps");
    assert!(
        lower_cutoff > 0.0 && lower_cutoff < 1.0,
        "lower_cutoff must be in (0, 1)"
    );
    assert!(
        higher_cutoff > lower_cutoff && higher_cutoff < 1.0,
        "higher_cutoff must be in (lower_cutoff, 1)"
    );
    let mut taps = windowed_sinc(window, |x| {
        higher_cutoff * sinc(higher_cutoff * x) - lower_cutoff * sinc(lower_cutoff * x)
    });
    scale(&mut taps, (lower_cutoff + higher_cutoff) / 2.0);
    taps
}

/// Samples `ideal` around the (possibly fractional) center tap and applies
/// the window.
fn windowed_sinc(window: &[f64], ideal: impl Fn(f64) -> f64) -> Vec<f64> {
    let alpha = (window.len() - 1) as f64 / 2.0;
    window
        .iter()
        .enumerate()
        .map(|(n, w)| ideal(n as f64 - alpha) * w)
        .collect()
}

/// Scales `taps` to unit gain at `freq` (fraction of Nyquist).
fn scale(taps: &mut [f64], freq: f64) {
    let alpha = (taps.len() - 1) as f64 / 2.0;
    let gain: f64 = taps
        .iter()
        .enumerate()
        .map(|(n, h)| h * (core::f64::consts::PI * (n as f64 - alpha) * freq).cos())
        .sum();
    for tap in taps.iter_mut() {
        *tap /= gain;
    }
}
