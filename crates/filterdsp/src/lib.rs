//! Coefficient design for digital filters.
//!
//! Two independent designers live here:
//! * [`firdes`]: Hamming-windowed sinc FIR filters (lowpass, highpass, bandpass).
//! * [`iirdes`]: digital Butterworth filters obtained from the analog prototype
//!   through a frequency transform and the bilinear transform (lowpass,
//!   highpass, bandpass, bandstop).
//!
//! Every design function is pure. Identical inputs produce identical
//! coefficients, and nothing is cached between calls.
//!
//! ## Example
//! ```
//! use filterdsp::{Band, firdes, iirdes};
//!
//! let taps = firdes::firwin(5, &Band::lowpass(100.0), 1000.0).unwrap();
//! assert_eq!(taps.len(), 5);
//!
//! let tf = iirdes::butter(2, &Band::bandpass(300.0, 3400.0), 8000.0).unwrap();
//! assert_eq!(tf.a[0], 1.0);
//! assert_eq!(tf.b.len(), 5);
//! ```
#![warn(missing_docs)]

#[macro_use]
extern crate tracing;

pub use num_complex;

pub use band::Band;
pub use band::Cutoff;
pub use band::FilterType;
pub use error::Error;
pub use error::Result;
pub use iirdes::Tolerance;
pub use iirdes::TransferFunction;
pub use iirdes::Zpk;

mod band;
mod error;
pub mod firdes;
pub mod iirdes;
pub mod math;
pub mod response;
pub mod windows;
