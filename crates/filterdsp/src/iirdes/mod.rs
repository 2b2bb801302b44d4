//! Methods for designing digital Butterworth IIR filters.
//!
//! The design goes through the analog domain:
//! 1. pre-warp the cutoffs, `Ω = 2·fs·tan(π·f/fs)`,
//! 2. build the analog Butterworth prototype,
//! 3. transform it to the requested band,
//! 4. map it to the z-plane with the bilinear transform,
//! 5. expand zeros and poles into `b` and `a`.
//!
//! Coefficients are in ascending powers of `z^-1`:
//! `a[0]·y[n] = Σ_k b[k]·x[n-k] - Σ_{k≥1} a[k]·y[n-k]`, with `a[0] == 1`.
use core::f64::consts::PI;

use crate::Band;
use crate::Cutoff;
use crate::Error;
use crate::FilterType;
use crate::Result;
use crate::response;

mod zpk;
pub use zpk::Zpk;

/// Numerator and denominator coefficients of a digital filter.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    /// Numerator (feed-forward) coefficients.
    pub b: Vec<f64>,
    /// Denominator (feedback) coefficients, `a[0] == 1`.
    pub a: Vec<f64>,
}

impl TransferFunction {
    /// Frequency response at `freq` Hz, see [`response::freqz`].
    pub fn response(&self, freq: f64, sample_rate: f64) -> num_complex::Complex64 {
        response::freqz(&self.b, &self.a, freq, sample_rate)
    }
}

/// Bounds for the numerical checks of the IIR designer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Largest imaginary residue of the expanded polynomials, relative to the
    /// largest coefficient magnitude.
    pub imag: f64,
    /// Largest deviation of the passband gain from one, measured on the final
    /// coefficients at the reference frequency of the band.
    pub gain: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            imag: 1e-10,
            gain: 1e-3,
        }
    }
}

/// Highest filter order the designer accepts.
///
/// Expanding the zeros and poles is quadratic in the order, and far below
/// this limit the coefficients of any band already lose all precision.
pub const MAX_ORDER: usize = 256;

/// Designs a digital Butterworth filter of order `order` for `band` at
/// `sample_rate` and returns its zeros, poles and gain.
///
/// Band filters have `2·order` poles. Orders above [`MAX_ORDER`] fail with
/// [`Error::NumericalInstability`] before anything is allocated.
pub fn butter_zpk(order: usize, band: &Band, sample_rate: f64) -> Result<Zpk> {
    if order == 0 {
        return Err(Error::InvalidArgument(
            "filter order must be at least 1".to_string(),
        ));
    }
    if order > MAX_ORDER {
        return Err(Error::NumericalInstability(format!(
            "order {order} exceeds the maximum of {MAX_ORDER}"
        )));
    }
    band.normalized(sample_rate)?;

    let prototype = Zpk::butterworth(order);
    let analog = match (band.filter_type(), band.cutoff()) {
        (FilterType::Lowpass, Cutoff::Single(f)) => prototype.lp2lp(prewarp(f, sample_rate)),
        (FilterType::Highpass, Cutoff::Single(f)) => prototype.lp2hp(prewarp(f, sample_rate)),
        (filter_type, Cutoff::Pair(f1, f2)) => {
            let (wo, bw) = center_and_width(f1, f2, sample_rate);
            match filter_type {
                FilterType::Bandstop => prototype.lp2bs(wo, bw),
                _ => prototype.lp2bp(wo, bw),
            }
        }
        (filter_type, cutoff) => unreachable!("{filter_type} with {cutoff:?}"),
    };
    Ok(analog.bilinear(sample_rate))
}

/// Designs a digital Butterworth filter with the default [`Tolerance`].
///
/// Example usage:
/// ```
/// use filterdsp::{iirdes, Band};
///
/// let tf = iirdes::butter(2, &Band::lowpass(250.0), 1000.0).unwrap();
/// assert_eq!(tf.a[0], 1.0);
/// assert!((tf.b[1] - 0.585786437626905).abs() < 1e-12);
/// ```
pub fn butter(order: usize, band: &Band, sample_rate: f64) -> Result<TransferFunction> {
    butter_with_tolerance(order, band, sample_rate, &Tolerance::default())
}

/// Designs a digital Butterworth filter of order `order` for `band` at
/// `sample_rate`.
///
/// Both vectors have `order + 1` coefficients, `2·order + 1` for bandpass and
/// bandstop. Fails with [`Error::NumericalInstability`] if the coefficients
/// overflow, a pole is not strictly inside the unit circle, or the realized
/// passband gain misses one by more than `tolerance.gain`. The last check
/// catches high orders at low cutoffs, where every pole is accurate but the
/// expanded polynomials lose all precision.
pub fn butter_with_tolerance(
    order: usize,
    band: &Band,
    sample_rate: f64,
    tolerance: &Tolerance,
) -> Result<TransferFunction> {
    let zpk = butter_zpk(order, band, sample_rate)?;
    let tf = zpk.to_tf(tolerance)?;

    if let Some(p) = zpk.poles.iter().find(|p| !(p.norm() < 1.0)) {
        return Err(Error::NumericalInstability(format!(
            "pole {p} is not inside the unit circle"
        )));
    }

    let f_ref = reference_frequency(band, sample_rate);
    let gain = response::magnitude(&tf.b, &tf.a, f_ref, sample_rate);
    if !((gain - 1.0).abs() <= tolerance.gain) {
        return Err(Error::NumericalInstability(format!(
            "order {order} is not realizable for this band: gain at {f_ref} Hz is {gain:e} instead of 1"
        )));
    }

    debug!(
        "designed {} butterworth, order {}, {} coefficients, max pole radius {}",
        band.filter_type(),
        order,
        tf.a.len(),
        zpk.poles.iter().map(|p| p.norm()).fold(0.0, f64::max)
    );
    Ok(tf)
}

/// Analog angular frequency whose bilinear image is `freq` Hz.
fn prewarp(freq: f64, sample_rate: f64) -> f64 {
    2.0 * sample_rate * (PI * freq / sample_rate).tan()
}

/// Geometric center and width of a band, both pre-warped.
fn center_and_width(f1: f64, f2: f64, sample_rate: f64) -> (f64, f64) {
    let w1 = prewarp(f1, sample_rate);
    let w2 = prewarp(f2, sample_rate);
    ((w1 * w2).sqrt(), w2 - w1)
}

/// Frequency (Hz) at which the designed filter has unit gain.
fn reference_frequency(band: &Band, sample_rate: f64) -> f64 {
    match (band.filter_type(), band.cutoff()) {
        (FilterType::Lowpass | FilterType::Bandstop, _) => 0.0,
        (FilterType::Highpass, _) => sample_rate / 2.0,
        (FilterType::Bandpass, Cutoff::Pair(f1, f2)) => {
            let (wo, _) = center_and_width(f1, f2, sample_rate);
            sample_rate / PI * (wo / (2.0 * sample_rate)).atan()
        }
        (filter_type, cutoff) => unreachable!("{filter_type} with {cutoff:?}"),
    }
}
