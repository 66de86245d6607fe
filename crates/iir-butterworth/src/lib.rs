//! Butterworth Filter Design
//!
//! Binds the design pipeline from `iir-design-core` to a ready-to-run
//! cascade: validate parameters, pre-warp band edges, transform the analog
//! prototype, discretize, factor into second-order sections.
//!
//! # Example
//!
//! ```rust
//! use iir_butterworth::{Band, Butterworth};
//!
//! let mut filter = Butterworth::new(4, Band::Lowpass(1000.0), 48000.0)?;
//! let output = filter.process_slice(&[1.0, 0.0, 0.0, 0.0]);
//! assert_eq!(output.len(), 4);
//! # Ok::<(), iir_butterworth::ButterworthError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod butterworth;
pub mod design;
pub mod error;

pub use butterworth::Butterworth;
pub use design::{analog_zpk, butterworth, butterworth_with, prewarp, Band, FilterType};
pub use error::{ButterworthError, ButterworthResult};
