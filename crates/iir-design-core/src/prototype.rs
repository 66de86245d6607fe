//! Analog Butterworth prototype.

use crate::types::Zpk;
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;

/// Poles of the unity-cutoff analog Butterworth lowpass prototype.
///
/// Returns `order` poles at `-exp(j*pi*m / (2*order))` for
/// `m = -order+1, -order+3, ..., order-1`, no zeros and unit gain. All
/// poles sit on the unit circle in the left half plane. An order of zero
/// yields an empty record.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analog_lowpass(order: usize) -> Zpk {
    let n = order as f64;
    let poles: Vec<Complex64> = (0..order)
        .map(|k| {
            let m = 2.0 * k as f64 - (n - 1.0);
            -Complex64::new(0.0, PI * m / (2.0 * n)).exp()
        })
        .collect();

    Zpk::new(Vec::new(), poles, 1.0)
}
