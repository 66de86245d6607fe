//! Butterworth design errors.

use crate::design::FilterType;
use iir_design_core::DesignError;
use thiserror::Error;

/// Result type for Butterworth design
pub type ButterworthResult<T> = Result<T, ButterworthError>;

/// Errors raised while designing a Butterworth filter
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ButterworthError {
    /// Order below 1
    #[error("filter order must be at least 1, got {0}")]
    InvalidOrder(usize),

    /// Sample rate not positive or not finite
    #[error("sample rate must be positive and finite, got {0} Hz")]
    InvalidSampleRate(f64),

    /// Band edge outside `(0, fs/2)`
    #[error("band edge {frequency} Hz outside (0, {nyquist}) Hz")]
    InvalidFrequency {
        /// Offending edge in Hz
        frequency: f64,
        /// Nyquist frequency in Hz
        nyquist: f64,
    },

    /// Wrong number of edges or edges out of order
    #[error("invalid {filter_type:?} band: {reason}")]
    InvalidBand {
        /// Requested response type
        filter_type: FilterType,
        /// What is wrong with the edges
        reason: &'static str,
    },

    /// Fault inside the design pipeline
    #[error(transparent)]
    Design(#[from] DesignError),
}
