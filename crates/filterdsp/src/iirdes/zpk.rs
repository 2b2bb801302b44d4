use core::f64::consts::PI;
use num_complex::Complex64;

use crate::Error;
use crate::Result;
use crate::iirdes::Tolerance;
use crate::iirdes::TransferFunction;
use crate::math::poly::poly;
use crate::math::poly::prod;

/// A filter in zeros, poles and gain form.
///
/// Analog filters are in terms of `s`, digital ones in terms of `z`. The
/// frequency transforms expect an analog lowpass prototype with cutoff
/// 1 rad/s, as returned by [`Zpk::butterworth`].
#[derive(Debug, Clone, PartialEq)]
pub struct Zpk {
    /// Zeros
    pub zeros: Vec<Complex64>,
    /// Poles
    pub poles: Vec<Complex64>,
    /// Gain
    pub gain: f64,
}

impl Zpk {
    /// Analog Butterworth lowpass prototype of order `order`: no zeros, unit
    /// DC gain, and poles evenly spaced on the left half of the unit circle,
    /// `p_k = exp(jπ(2k+order+1)/(2·order))` for `k = 0..order`.
    ///
    /// The poles are computed as `-exp(jπ(2k+1-order)/(2·order))`, the same
    /// set, so that conjugate pairs and the real pole of odd orders are exact.
    pub fn butterworth(order: usize) -> Self {
        let n = order as f64;
        let poles = (0..order)
            .map(|k| {
                let m = 2.0 * k as f64 + 1.0 - n;
                -Complex64::from_polar(1.0, PI * m / (2.0 * n))
            })
            .collect();
        Self {
            zeros: Vec::new(),
            poles,
            gain: 1.0,
        }
    }

    /// Excess of poles over zeros.
    pub fn degree(&self) -> usize {
        debug_assert!(self.poles.len() >= self.zeros.len());
        self.poles.len() - self.zeros.len()
    }

    /// Lowpass prototype to lowpass with cutoff `wo` (rad/s).
    pub fn lp2lp(&self, wo: f64) -> Self {
        Self {
            zeros: self.zeros.iter().map(|z| *z * wo).collect(),
            poles: self.poles.iter().map(|p| *p * wo).collect(),
            gain: self.gain * wo.powi(self.degree() as i32),
        }
    }

    /// Lowpass prototype to highpass with cutoff `wo` (rad/s).
    pub fn lp2hp(&self, wo: f64) -> Self {
        let degree = self.degree();
        let mut zeros: Vec<Complex64> = self.zeros.iter().map(|z| wo / *z).collect();
        zeros.extend(core::iter::repeat_n(Complex64::new(0.0, 0.0), degree));
        Self {
            zeros,
            poles: self.poles.iter().map(|p| wo / *p).collect(),
            gain: self.gain * self.inversion_gain(),
        }
    }

    /// Lowpass prototype to bandpass with center `wo` and bandwidth `bw`
    /// (rad/s).
    pub fn lp2bp(&self, wo: f64, bw: f64) -> Self {
        let degree = self.degree();
        let mut zeros = band_roots(self.zeros.iter().map(|z| *z * bw / 2.0), wo);
        zeros.extend(core::iter::repeat_n(Complex64::new(0.0, 0.0), degree));
        Self {
            zeros,
            poles: band_roots(self.poles.iter().map(|p| *p * bw / 2.0), wo),
            gain: self.gain * bw.powi(degree as i32),
        }
    }

    /// Lowpass prototype to bandstop with center `wo` and bandwidth `bw`
    /// (rad/s).
    pub fn lp2bs(&self, wo: f64, bw: f64) -> Self {
        let degree = self.degree();
        let mut zeros = band_roots(self.zeros.iter().map(|z| bw / 2.0 / *z), wo);
        zeros.extend(core::iter::repeat_n(Complex64::new(0.0, wo), degree));
        zeros.extend(core::iter::repeat_n(Complex64::new(0.0, -wo), degree));
        Self {
            zeros,
            poles: band_roots(self.poles.iter().map(|p| bw / 2.0 / *p), wo),
            gain: self.gain * self.inversion_gain(),
        }
    }

    /// Maps an analog filter to a digital one with the bilinear transform
    /// `s = 2·fs·(1 - z^-1)/(1 + z^-1)`.
    ///
    /// Zeros at infinity end up at `z = -1`.
    pub fn bilinear(&self, sample_rate: f64) -> Self {
        let fs2 = 2.0 * sample_rate;
        let degree = self.degree();
        let map = |s: &Complex64| (fs2 + *s) / (fs2 - *s);

        let mut zeros: Vec<Complex64> = self.zeros.iter().map(map).collect();
        zeros.extend(core::iter::repeat_n(Complex64::new(-1.0, 0.0), degree));

        let num: Vec<Complex64> = self.zeros.iter().map(|z| fs2 - *z).collect();
        let den: Vec<Complex64> = self.poles.iter().map(|p| fs2 - *p).collect();
        Self {
            zeros,
            poles: self.poles.iter().map(map).collect(),
            gain: self.gain * (prod(&num) / prod(&den)).re,
        }
    }

    /// Expands zeros and poles into numerator and denominator coefficients,
    /// normalized to `a[0] == 1`.
    ///
    /// Fails if a coefficient overflowed, or if the imaginary parts left over
    /// from the complex expansion exceed `tolerance.imag` relative to the
    /// largest coefficient.
    pub fn to_tf(&self, tolerance: &Tolerance) -> Result<TransferFunction> {
        let b: Vec<Complex64> = poly(&self.zeros)
            .into_iter()
            .map(|c| c * self.gain)
            .collect();
        let a = poly(&self.poles);

        if b
            .iter()
            .chain(&a)
            .any(|c| !c.re.is_finite() || !c.im.is_finite())
        {
            return Err(Error::NumericalInstability(
                "coefficients overflow double precision".to_string(),
            ));
        }

        let largest = b.iter().chain(&a).map(|c| c.norm()).fold(0.0, f64::max);
        let residue = b
            .iter()
            .chain(&a)
            .map(|c| c.im.abs())
            .fold(0.0, f64::max);
        if residue > tolerance.imag * largest {
            return Err(Error::NumericalInstability(format!(
                "imaginary residue {residue:e} exceeds tolerance (largest coefficient {largest:e})"
            )));
        }

        let a0 = a[0].re;
        Ok(TransferFunction {
            b: b.iter().map(|c| c.re / a0).collect(),
            a: a.iter().map(|c| c.re / a0).collect(),
        })
    }

    /// Gain factor of the `s -> w/s` substitution, `Re(Π(-z)/Π(-p))`.
    fn inversion_gain(&self) -> f64 {
        let neg_zeros: Vec<Complex64> = self.zeros.iter().map(|z| -*z).collect();
        let neg_poles: Vec<Complex64> = self.poles.iter().map(|p| -*p).collect();
        (prod(&neg_zeros) / prod(&neg_poles)).re
    }
}

/// Both roots of `s^2 - 2·r·s + wo^2` for every `r`: first all `r + sqrt(r^2 - wo^2)`,
/// then all `r - sqrt(r^2 - wo^2)`.
fn band_roots(roots: impl Iterator<Item = Complex64>, wo: f64) -> Vec<Complex64> {
    let roots: Vec<Complex64> = roots.collect();
    let offsets: Vec<Complex64> = roots.iter().map(|r| (r * r - wo * wo).sqrt()).collect();
    roots
        .iter()
        .zip(&offsets)
        .map(|(r, d)| *r + *d)
        .chain(roots.iter().zip(&offsets).map(|(r, d)| *r - *d))
        .collect()
}
