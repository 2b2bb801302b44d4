//! Filter type and cutoff frequencies of a design request.
use core::fmt;
use core::str::FromStr;

use crate::Error;
use crate::Result;

/// Shape of the frequency response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterType {
    /// Passes frequencies below the cutoff.
    Lowpass,
    /// Passes frequencies above the cutoff.
    Highpass,
    /// Passes frequencies between the two band edges.
    Bandpass,
    /// Rejects frequencies between the two band edges.
    Bandstop,
}

impl FilterType {
    /// Number of cutoff frequencies this type is specified with.
    pub fn num_cutoffs(self) -> usize {
        match self {
            FilterType::Lowpass | FilterType::Highpass => 1,
            FilterType::Bandpass | FilterType::Bandstop => 2,
        }
    }

    /// Name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterType::Lowpass => "lowpass",
            FilterType::Highpass => "highpass",
            FilterType::Bandpass => "bandpass",
            FilterType::Bandstop => "bandstop",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lowpass" => Ok(FilterType::Lowpass),
            "highpass" => Ok(FilterType::Highpass),
            "bandpass" => Ok(FilterType::Bandpass),
            "bandstop" => Ok(FilterType::Bandstop),
            _ => Err(Error::InvalidFilterType(format!(
                "`{s}` (expected lowpass, highpass, bandpass or bandstop)"
            ))),
        }
    }
}

/// One cutoff frequency, or the two edges of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutoff {
    /// Cutoff of a lowpass or highpass filter.
    Single(f64),
    /// Lower and upper edge of a bandpass or bandstop filter.
    Pair(f64, f64),
}

/// Filter type together with its cutoff frequencies in Hz.
///
/// Frequencies are only checked against a sample rate in
/// [`Band::normalized`], so a `Band` can be built before the rate is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    filter_type: FilterType,
    cutoff: Cutoff,
}

impl Band {
    /// Builds a band from a type and a list of cutoffs, as they arrive from
    /// the command line.
    ///
    /// Lowpass and highpass take exactly one value, bandpass and bandstop
    /// exactly two.
    pub fn new(filter_type: FilterType, cutoffs: &[f64]) -> Result<Self> {
        let cutoff = match (filter_type.num_cutoffs(), cutoffs) {
            (1, [f]) => Cutoff::Single(*f),
            (2, [f1, f2]) => Cutoff::Pair(*f1, *f2),
            (n, _) => {
                return Err(Error::InvalidArgument(format!(
                    "{filter_type} takes {n} cutoff frequenc{}, got {}",
                    if n == 1 { "y" } else { "ies" },
                    cutoffs.len()
                )));
            }
        };
        Ok(Self {
            filter_type,
            cutoff,
        })
    }

    /// Lowpass with cutoff `f` (Hz).
    pub fn lowpass(f: f64) -> Self {
        Self {
            filter_type: FilterType::Lowpass,
            cutoff: Cutoff::Single(f),
        }
    }

    /// Highpass with cutoff `f` (Hz).
    pub fn highpass(f: f64) -> Self {
        Self {
            filter_type: FilterType::Highpass,
            cutoff: Cutoff::Single(f),
        }
    }

    /// Bandpass between `f1` and `f2` (Hz).
    pub fn bandpass(f1: f64, f2: f64) -> Self {
        Self {
            filter_type: FilterType::Bandpass,
            cutoff: Cutoff::Pair(f1, f2),
        }
    }

    /// Bandstop between `f1` and `f2` (Hz).
    pub fn bandstop(f1: f64, f2: f64) -> Self {
        Self {
            filter_type: FilterType::Bandstop,
            cutoff: Cutoff::Pair(f1, f2),
        }
    }

    /// Filter type.
    pub fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    /// Cutoff frequencies in Hz.
    pub fn cutoff(&self) -> Cutoff {
        self.cutoff
    }

    /// Validates the band against `sample_rate` and returns the cutoffs as
    /// fractions of the Nyquist frequency, each strictly inside `(0, 1)`.
    pub fn normalized(&self, sample_rate: f64) -> Result<Cutoff> {
        check_sample_rate(sample_rate)?;
        let nyquist = sample_rate / 2.0;
        let check = |f: f64| -> Result<f64> {
            if f.is_finite() && f > 0.0 && f < nyquist {
                Ok(f / nyquist)
            } else {
                Err(Error::InvalidFrequencySpec(format!(
                    "cutoff {f} Hz must lie strictly between 0 and the Nyquist frequency {nyquist} Hz"
                )))
            }
        };
        match self.cutoff {
            Cutoff::Single(f) => Ok(Cutoff::Single(check(f)?)),
            Cutoff::Pair(f1, f2) => {
                let w1 = check(f1)?;
                let w2 = check(f2)?;
                if f1 >= f2 {
                    return Err(Error::InvalidFrequencySpec(format!(
                        "lower band edge {f1} Hz must be below upper band edge {f2} Hz"
                    )));
                }
                Ok(Cutoff::Pair(w1, w2))
            }
        }
    }
}

pub(crate) fn check_sample_rate(sample_rate: f64) -> Result<()> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "sample rate must be a positive number, got {sample_rate}"
        )))
    }
}
