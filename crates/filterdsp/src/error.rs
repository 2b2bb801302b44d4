use thiserror::Error;

/// Result type of the design functions.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Reasons a filter cannot be designed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Wrong number of values, or a value that is out of range regardless of
    /// the frequencies involved (zero taps, zero order, bad sample rate).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Unknown filter type, or a type the requested designer does not support.
    #[error("invalid filter type: {0}")]
    InvalidFilterType(String),
    /// Cutoff outside `(0, Nyquist)` or band edges out of order.
    #[error("invalid frequency specification: {0}")]
    InvalidFrequencySpec(String),
    /// The design is not realizable in double precision.
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}
