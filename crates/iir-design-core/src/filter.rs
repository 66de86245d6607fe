//! Biquad runtime.
//!
//! Applies designed second-order sections to real sample data. Coefficients
//! are fixed at construction; the only mutable state is each section's
//! delay memory, updated in call order.

use alloc::vec::Vec;

/// Biquad filter coefficients.
///
/// Implements the Direct Form I difference equation:
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiquadCoeffs {
    /// Feedforward coefficient b0
    pub b0: f64,
    /// Feedforward coefficient b1
    pub b1: f64,
    /// Feedforward coefficient b2
    pub b2: f64,
    /// Feedback coefficient a1 (note: negated in difference equation)
    pub a1: f64,
    /// Feedback coefficient a2 (note: negated in difference equation)
    pub a2: f64,
}

impl BiquadCoeffs {
    /// Unity (pass-through) coefficients
    pub const UNITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 0.0);

    /// Create coefficients (a0 is normalized to 1).
    #[must_use]
    pub const fn new(b0: f64, b1: f64, b2: f64, a1: f64, a2: f64) -> Self {
        Self { b0, b1, b2, a1, a2 }
    }
}

impl Default for BiquadCoeffs {
    fn default() -> Self {
        Self::UNITY
    }
}

/// Biquad filter state (Direct Form I).
///
/// Not meant to be shared: one instance per signal stream.
#[derive(Clone, Debug, Default)]
pub struct Biquad {
    coeffs: BiquadCoeffs,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl Biquad {
    /// Create a new biquad filter with given coefficients and zeroed state.
    #[must_use]
    pub const fn new(coeffs: BiquadCoeffs) -> Self {
        Self {
            coeffs,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Snapshot of the section coefficients.
    #[must_use]
    pub const fn coefficients(&self) -> BiquadCoeffs {
        self.coeffs
    }

    /// Process a single sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let c = &self.coeffs;
        let output = c.b0 * input + c.b1 * self.x1 + c.b2 * self.x2
            - c.a1 * self.y1
            - c.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Process a sequence, returning a new output of the same length.
    ///
    /// State carries over between calls, so chunked input gives the same
    /// result as one long call.
    pub fn process_slice(&mut self, samples: &[f64]) -> Vec<f64> {
        samples.iter().map(|&sample| self.process(sample)).collect()
    }

    /// Process a block of samples in-place.
    pub fn process_block(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Reset filter state to zero.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

/// Ordered chain of biquads; section 0 sees the input first.
#[derive(Clone, Debug, Default)]
pub struct Cascade {
    sections: Vec<Biquad>,
}

impl Cascade {
    /// Create a cascade from sections in processing order.
    #[must_use]
    pub fn new(sections: Vec<Biquad>) -> Self {
        Self { sections }
    }

    /// Sections in processing order.
    #[must_use]
    pub fn sections(&self) -> &[Biquad] {
        &self.sections
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true when the cascade has no sections (pass-through).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Process a single sample through every section in order.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.sections
            .iter_mut()
            .fold(input, |sample, section| section.process(sample))
    }

    /// Process a sequence, returning a new output of the same length.
    pub fn process_slice(&mut self, samples: &[f64]) -> Vec<f64> {
        samples.iter().map(|&sample| self.process(sample)).collect()
    }

    /// Process a block of samples in-place.
    pub fn process_block(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Reset every section's state.
    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.reset();
        }
    }
}

impl From<Vec<Biquad>> for Cascade {
    fn from(sections: Vec<Biquad>) -> Self {
        Self::new(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_biquad_unity() {
        let mut filter = Biquad::new(BiquadCoeffs::UNITY);
        assert!((filter.process(1.0) - 1.0).abs() < 1e-12);
        assert!((filter.process(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_difference_equation() {
        let mut filter = Biquad::new(BiquadCoeffs::new(0.5, 0.25, 0.125, -0.5, 0.25));
        // y0 = 0.5
        assert_eq!(filter.process(1.0), 0.5);
        // y1 = 0.25 + 0.5*0.5 = 0.5
        assert_eq!(filter.process(0.0), 0.5);
        // y2 = 0.125 + 0.5*0.5 - 0.25*0.5 = 0.25
        assert_eq!(filter.process(0.0), 0.25);
    }

    #[test]
    fn test_process_slice_matches_single_calls() {
        let coeffs = BiquadCoeffs::new(0.2, -0.3, 0.4, 0.1, -0.2);
        let input = [1.0, 0.0, 0.0, 0.0];

        let mut block = Biquad::new(coeffs);
        let from_slice = block.process_slice(&input);

        let mut single = Biquad::new(coeffs);
        let from_calls: Vec<f64> = input.iter().map(|&x| single.process(x)).collect();

        assert_eq!(from_slice, from_calls);
        assert_eq!(from_slice.len(), input.len());
    }

    #[test]
    fn test_chunked_processing_is_continuous() {
        let coeffs = BiquadCoeffs::new(0.3, 0.3, 0.0, -0.4, 0.0);
        let input = [1.0, -1.0, 0.5, 0.25, 0.0, 2.0];

        let mut whole = Biquad::new(coeffs);
        let expected = whole.process_slice(&input);

        let mut chunked = Biquad::new(coeffs);
        let mut output = chunked.process_slice(&input[..2]);
        output.extend(chunked.process_slice(&input[2..]));

        assert_eq!(output, expected);
    }

    #[test]
    fn test_process_block_in_place() {
        let coeffs = BiquadCoeffs::new(0.5, 0.5, 0.0, 0.0, 0.0);
        let mut filter = Biquad::new(coeffs);
        let mut samples = [1.0, 1.0, 1.0];
        filter.process_block(&mut samples);
        assert_eq!(samples, [0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut filter = Biquad::new(BiquadCoeffs::new(0.5, 0.5, 0.5, -0.5, 0.1));
        let first = filter.process(1.0);
        filter.process(0.3);
        filter.reset();
        assert_eq!(filter.process(1.0), first);
    }

    #[test]
    fn test_coefficients_snapshot() {
        let coeffs = BiquadCoeffs::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let filter = Biquad::new(coeffs);
        assert_eq!(filter.coefficients(), coeffs);
    }

    #[test]
    fn test_cascade_routes_in_order() {
        let gain = Biquad::new(BiquadCoeffs::new(2.0, 0.0, 0.0, 0.0, 0.0));
        let delay = Biquad::new(BiquadCoeffs::new(0.0, 1.0, 0.0, 0.0, 0.0));
        let mut cascade = Cascade::new(vec![gain, delay]);

        assert_eq!(cascade.process_slice(&[1.0, 3.0, 0.0]), vec![0.0, 2.0, 6.0]);
        assert_eq!(cascade.len(), 2);
    }

    #[test]
    fn test_empty_cascade_passes_through() {
        let mut cascade = Cascade::default();
        assert!(cascade.is_empty());
        assert_eq!(cascade.process(0.75), 0.75);
    }

    #[test]
    fn test_cascade_reset() {
        let section = Biquad::new(BiquadCoeffs::new(0.5, 0.5, 0.0, -0.5, 0.0));
        let mut cascade = Cascade::from(vec![section.clone(), section]);
        let first = cascade.process_slice(&[1.0, 0.0, 0.0]);
        cascade.reset();
        assert_eq!(cascade.process_slice(&[1.0, 0.0, 0.0]), first);
    }
}
