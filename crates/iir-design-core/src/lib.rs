//! IIR Design Core Library
//!
//! Butterworth filter design from zeros, poles and gain down to a cascade of
//! second-order sections, plus the biquad runtime that applies the result.
//! This crate is `no_std` compatible (with `alloc`) when the `std` feature
//! is disabled.
//!
//! # Pipeline
//!
//! ```text
//! analog_lowpass -> lp2lp / lp2hp / lp2bp / lp2bs -> bilinear_transform -> zpk2sos -> Cascade
//! ```
//!
//! # Modules
//!
//! - [`types`] - ZPK record and complex root helpers
//! - [`config`] - Design tolerance configuration
//! - [`error`] - Design error kinds
//! - [`log`] - Injected design logging
//! - [`prototype`] - Analog Butterworth prototype
//! - [`transform`] - Lowpass prototype frequency transforms
//! - [`bilinear`] - Analog to digital mapping
//! - [`pairing`] - Conjugate pair validation
//! - [`sos`] - Second-order section factorization
//! - [`filter`] - Biquad runtime and cascades

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bilinear;
pub mod config;
pub mod error;
pub mod filter;
pub mod log;
pub mod pairing;
pub mod prototype;
pub mod sos;
pub mod transform;
pub mod types;

// Re-export commonly used types
pub use bilinear::bilinear_transform;
pub use config::{DesignConfig, DEFAULT_TOLERANCE};
pub use error::{DesignError, DesignResult};
pub use filter::{Biquad, BiquadCoeffs, Cascade};
pub use log::{DesignLog, LogLevel, NullLog};
pub use pairing::{cplxpair, cplxpair_with, ConjugatePairs};
pub use prototype::analog_lowpass;
pub use sos::{zpk2sos, zpk2sos_with, zpk2tf, zpk2tf_with, SectionZpk};
pub use transform::{lp2bp, lp2bs, lp2hp, lp2lp};
pub use types::{is_near, is_real, pop_nearest, RootKind, Zpk};

#[cfg(feature = "defmt")]
pub use log::DefmtLog;
#[cfg(feature = "tracing")]
pub use log::TracingLog;

/// Complex number type used for all poles and zeros.
pub use num_complex::Complex64;
