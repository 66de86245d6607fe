//! Analog to digital mapping (bilinear transform).

use crate::types::{product_ratio, Zpk};
use core::iter;
use num_complex::Complex64;

/// Map an analog ZPK record to the z-plane with Tustin's substitution.
///
/// Every root `x` maps to `(2*fs + x) / (2*fs - x)` and zeros at infinity
/// map to `-1` (Nyquist). The gain is rescaled by
/// `Re(prod(2*fs - zeros) / prod(2*fs - poles))`.
///
/// `sample_rate` is in Hz. No pre-warping is done here: callers that need
/// a critical frequency to land exactly on a digital frequency must
/// pre-warp it (`2*fs*tan(pi*f/fs)`) before the frequency transform.
#[must_use]
pub fn bilinear_transform(zpk: &Zpk, sample_rate: f64) -> Zpk {
    let fs2 = 2.0 * sample_rate;
    let map = |x: Complex64| (fs2 + x) / (fs2 - x);

    let zeros = zpk
        .zeros
        .iter()
        .map(|&z| map(z))
        .chain(iter::repeat(Complex64::new(-1.0, 0.0)).take(zpk.infinite_zeros()))
        .collect();
    let poles = zpk.poles.iter().map(|&p| map(p)).collect();

    let ratio = product_ratio(
        zpk.zeros.iter().map(|&z| fs2 - z),
        zpk.poles.iter().map(|&p| fs2 - p),
    );

    Zpk::new(zeros, poles, zpk.gain * ratio.re)
}
