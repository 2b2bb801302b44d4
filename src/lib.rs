#![warn(missing_docs)]

//! Command-line filter coefficient generators.
//!
//! Two tools wrap the [`filterdsp`] designers:
//! * `fir <type> <sample_rate> <num_taps> <cutoff...>` prints the taps of a
//!   Hamming-windowed FIR filter on one comma-separated line.
//! * `iir <type> <sample_rate> <order> <cutoff...>` prints the `b=` and `a=`
//!   lines of a digital Butterworth filter.
//!
//! ## Example
//! ```
//! use clap::Parser;
//! use filtergen::cli::{self, FirArgs};
//!
//! let args = FirArgs::parse_from(["fir", "lowpass", "1000", "5", "100"]);
//! let line = cli::fir(&args).unwrap();
//! assert_eq!(line.split(',').count(), 5);
//! ```

/// Logging macro
#[macro_use]
pub extern crate tracing;

// re-exports
pub use anyhow;
pub use filterdsp;

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
