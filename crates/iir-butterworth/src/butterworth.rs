//! Butterworth filter object
//!
//! Holds the design parameters next to the cascade they produced so a
//! caller can inspect what is running.

use crate::design::{butterworth_with, Band, FilterType};
use crate::error::ButterworthResult;
use alloc::vec::Vec;
use iir_design_core::{Biquad, Cascade, DesignConfig, DesignLog, NullLog};

/// Designed Butterworth filter ready to process samples
#[derive(Clone, Debug)]
pub struct Butterworth {
    order: usize,
    band: Band,
    sample_rate: f64,
    cascade: Cascade,
}

impl Butterworth {
    /// Design a filter with the default tolerance.
    ///
    /// # Arguments
    /// * `order` - Prototype order (>= 1)
    /// * `band` - Response shape and edges in Hz
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(order: usize, band: Band, sample_rate: f64) -> ButterworthResult<Self> {
        Self::with_config(order, band, sample_rate, &DesignConfig::default(), &NullLog)
    }

    /// Design a filter with an explicit tolerance and log handle.
    pub fn with_config(
        order: usize,
        band: Band,
        sample_rate: f64,
        config: &DesignConfig,
        log: &dyn DesignLog,
    ) -> ButterworthResult<Self> {
        let cascade = butterworth_with(order, band, sample_rate, config, log)?;
        Ok(Self {
            order,
            band,
            sample_rate,
            cascade,
        })
    }

    /// Prototype order.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Band the filter was designed for.
    #[must_use]
    pub const fn band(&self) -> Band {
        self.band
    }

    /// Response shape.
    #[must_use]
    pub const fn filter_type(&self) -> FilterType {
        self.band.filter_type()
    }

    /// Sample rate in Hz.
    #[must_use]
    pub const fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Sections in processing order.
    #[must_use]
    pub fn sections(&self) -> &[Biquad] {
        self.cascade.sections()
    }

    /// Process a single sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.cascade.process(input)
    }

    /// Process a sequence, returning a new output of the same length.
    pub fn process_slice(&mut self, samples: &[f64]) -> Vec<f64> {
        self.cascade.process_slice(samples)
    }

    /// Process a block of samples in-place.
    pub fn process_block(&mut self, samples: &mut [f64]) {
        self.cascade.process_block(samples);
    }

    /// Clear the state of every section.
    pub fn reset(&mut self) {
        self.cascade.reset();
    }
}

impl From<Butterworth> for Cascade {
    fn from(filter: Butterworth) -> Self {
        filter.cascade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getters() {
        let band = Band::Highpass(300.0);
        let filter = Butterworth::new(5, band, 8000.0).unwrap();
        assert_eq!(filter.order(), 5);
        assert_eq!(filter.band(), band);
        assert_eq!(filter.filter_type(), FilterType::Highpass);
        assert_eq!(filter.sample_rate(), 8000.0);
        assert_eq!(filter.sections().len(), 3);
    }

    #[test]
    fn test_reset_restores_output() {
        let mut filter = Butterworth::new(2, Band::Lowpass(1000.0), 48000.0).unwrap();
        let first = filter.process_slice(&[1.0, 0.5, -0.25, 0.0]);
        filter.reset();
        let second = filter.process_slice(&[1.0, 0.5, -0.25, 0.0]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_into_cascade() {
        let filter = Butterworth::new(4, Band::Lowpass(1000.0), 48000.0).unwrap();
        let sections = filter.sections().len();
        let cascade: Cascade = filter.into();
        assert_eq!(cascade.len(), sections);
    }
}
