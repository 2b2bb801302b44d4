//! Command-line front end of the `fir` and `iir` tools.
//!
//! The argument structs only take care of syntax; counts and ranges are
//! checked by the designers so both tools report the same errors as the
//! library.
use clap::Parser;
use filterdsp::Band;
use filterdsp::FilterType;
use filterdsp::Result;
use filterdsp::firdes;
use filterdsp::iirdes;

use crate::output;

/// Design a Hamming-windowed FIR filter and print its taps
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fir", version, allow_negative_numbers = true)]
pub struct FirArgs {
    /// Filter type: lowpass, highpass or bandpass
    pub filter_type: String,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Number of taps
    pub num_taps: usize,

    /// Cutoff frequency in Hz; lower and upper band edge for bandpass
    #[arg(required = true, num_args = 1..)]
    pub cutoff: Vec<f64>,
}

/// Design a digital Butterworth filter and print its coefficients
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "iir", version, allow_negative_numbers = true)]
pub struct IirArgs {
    /// Filter type: lowpass, highpass, bandpass or bandstop
    pub filter_type: String,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Filter order
    pub order: usize,

    /// Cutoff frequency in Hz; lower and upper band edge for bandpass and bandstop
    #[arg(required = true, num_args = 1..)]
    pub cutoff: Vec<f64>,
}

fn band(filter_type: &str, cutoff: &[f64]) -> Result<Band> {
    let filter_type: FilterType = filter_type.parse()?;
    Band::new(filter_type, cutoff)
}

/// Designs the FIR filter described by `args` and returns the text to print.
pub fn fir(args: &FirArgs) -> Result<String> {
    let band = band(&args.filter_type, &args.cutoff)?;
    info!(
        "fir {} at {} Hz, {} taps, cutoff {:?} Hz",
        band.filter_type(),
        args.sample_rate,
        args.num_taps,
        args.cutoff
    );
    let taps = firdes::firwin(args.num_taps, &band, args.sample_rate)?;
    Ok(output::format_coefficients(&taps))
}

/// Designs the IIR filter described by `args` and returns the text to print.
///
/// The numerical checks always use the default [`filterdsp::Tolerance`].
pub fn iir(args: &IirArgs) -> Result<String> {
    let band = band(&args.filter_type, &args.cutoff)?;
    info!(
        "iir {} at {} Hz, order {}, cutoff {:?} Hz",
        band.filter_type(),
        args.sample_rate,
        args.order,
        args.cutoff
    );
    let tf = iirdes::butter(args.order, &band, args.sample_rate)?;
    Ok(output::format_transfer_function(&tf))
}
