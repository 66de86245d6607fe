//! Butterworth design entry point
//!
//! Band edges are given in Hz and pre-warped before the analog transform so
//! the digital -3 dB points land exactly on the requested edges.

use crate::error::{ButterworthError, ButterworthResult};
use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;
use iir_design_core::{
    analog_lowpass, bilinear_transform, lp2bp, lp2bs, lp2hp, lp2lp, zpk2sos_with, Cascade,
    DesignConfig, DesignLog, LogLevel, NullLog, Zpk,
};
#[allow(unused_imports)]
use num_traits::Float;

/// Response shape of a Butterworth design
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterType {
    /// Pass below the cutoff
    Lowpass,
    /// Pass above the cutoff
    Highpass,
    /// Pass between the edges
    Bandpass,
    /// Reject between the edges
    Bandstop,
}

/// Band specification with edges in Hz
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Band {
    /// Lowpass with a single cutoff
    Lowpass(f64),
    /// Highpass with a single cutoff
    Highpass(f64),
    /// Bandpass between `low` and `high`
    Bandpass {
        /// Lower edge
        low: f64,
        /// Upper edge
        high: f64,
    },
    /// Bandstop between `low` and `high`
    Bandstop {
        /// Lower edge
        low: f64,
        /// Upper edge
        high: f64,
    },
}

impl Band {
    /// Build a band from a filter type and its edges.
    ///
    /// Lowpass and highpass take one edge, bandpass and bandstop take two.
    pub fn from_edges(filter_type: FilterType, edges: &[f64]) -> ButterworthResult<Self> {
        match (filter_type, edges) {
            (FilterType::Lowpass, &[cutoff]) => Ok(Self::Lowpass(cutoff)),
            (FilterType::Highpass, &[cutoff]) => Ok(Self::Highpass(cutoff)),
            (FilterType::Bandpass, &[low, high]) => Ok(Self::Bandpass { low, high }),
            (FilterType::Bandstop, &[low, high]) => Ok(Self::Bandstop { low, high }),
            (FilterType::Lowpass | FilterType::Highpass, _) => Err(ButterworthError::InvalidBand {
                filter_type,
                reason: "expected exactly one edge",
            }),
            (FilterType::Bandpass | FilterType::Bandstop, _) => Err(ButterworthError::InvalidBand {
                filter_type,
                reason: "expected exactly two edges",
            }),
        }
    }

    /// Response shape of this band.
    #[must_use]
    pub const fn filter_type(&self) -> FilterType {
        match self {
            Self::Lowpass(_) => FilterType::Lowpass,
            Self::Highpass(_) => FilterType::Highpass,
            Self::Bandpass { .. } => FilterType::Bandpass,
            Self::Bandstop { .. } => FilterType::Bandstop,
        }
    }

    /// Band edges in Hz, ascending.
    #[must_use]
    pub fn edges(&self) -> Vec<f64> {
        match *self {
            Self::Lowpass(cutoff) | Self::Highpass(cutoff) => vec![cutoff],
            Self::Bandpass { low, high } | Self::Bandstop { low, high } => vec![low, high],
        }
    }

    fn validate(&self, sample_rate: f64) -> ButterworthResult<()> {
        let nyquist = sample_rate / 2.0;
        for frequency in self.edges() {
            if !(frequency.is_finite() && frequency > 0.0 && frequency < nyquist) {
                return Err(ButterworthError::InvalidFrequency { frequency, nyquist });
            }
        }

        match *self {
            Self::Bandpass { low, high } | Self::Bandstop { low, high } if low >= high => {
                Err(ButterworthError::InvalidBand {
                    filter_type: self.filter_type(),
                    reason: "lower edge must be below upper edge",
                })
            }
            _ => Ok(()),
        }
    }
}

/// Pre-warp a frequency in Hz to the analog angular frequency (rad/s) the
/// bilinear transform maps back onto it.
#[inline]
#[must_use]
pub fn prewarp(frequency: f64, sample_rate: f64) -> f64 {
    2.0 * sample_rate * (PI * frequency / sample_rate).tan()
}

fn validate(order: usize, band: &Band, sample_rate: f64) -> ButterworthResult<()> {
    if order == 0 {
        return Err(ButterworthError::InvalidOrder(order));
    }
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(ButterworthError::InvalidSampleRate(sample_rate));
    }
    band.validate(sample_rate)
}

/// Analog Butterworth design with pre-warped edges.
///
/// Parameters are validated the same way as [`butterworth`].
pub fn analog_zpk(order: usize, band: Band, sample_rate: f64) -> ButterworthResult<Zpk> {
    validate(order, &band, sample_rate)?;

    let prototype = analog_lowpass(order);
    let zpk = match band {
        Band::Lowpass(cutoff) => lp2lp(&prototype, prewarp(cutoff, sample_rate)),
        Band::Highpass(cutoff) => lp2hp(&prototype, prewarp(cutoff, sample_rate)),
        Band::Bandpass { low, high } => {
            let (center, width) = band_geometry(low, high, sample_rate);
            lp2bp(&prototype, center, width)
        }
        Band::Bandstop { low, high } => {
            let (center, width) = band_geometry(low, high, sample_rate);
            lp2bs(&prototype, center, width)
        }
    };

    Ok(zpk)
}

fn band_geometry(low: f64, high: f64, sample_rate: f64) -> (f64, f64) {
    let w_lo = prewarp(low, sample_rate);
    let w_hi = prewarp(high, sample_rate);
    ((w_lo * w_hi).sqrt(), w_hi - w_lo)
}

/// Design a Butterworth filter as a cascade of biquads.
///
/// # Arguments
/// * `order` - Prototype order (>= 1); two-edge bands double it
/// * `band` - Response shape and edges in Hz
/// * `sample_rate` - Sample rate in Hz
pub fn butterworth(order: usize, band: Band, sample_rate: f64) -> ButterworthResult<Cascade> {
    butterworth_with(order, band, sample_rate, &DesignConfig::default(), &NullLog)
}

/// [`butterworth`] with an explicit tolerance and log handle.
pub fn butterworth_with(
    order: usize,
    band: Band,
    sample_rate: f64,
    config: &DesignConfig,
    log: &dyn DesignLog,
) -> ButterworthResult<Cascade> {
    let analog = analog_zpk(order, band, sample_rate)?;
    let digital = bilinear_transform(&analog, sample_rate);
    let sections = zpk2sos_with(&digital, config, log)?;

    log.log(
        LogLevel::Info,
        format_args!(
            "butterworth: order {} {:?} {:?} at {} Hz -> {} sections",
            order,
            band.filter_type(),
            band.edges(),
            sample_rate,
            sections.len()
        ),
    );

    Ok(Cascade::new(sections))
}
