//! Lowpass prototype frequency transforms
//!
//! Each transform relocates the poles and zeros of a unity-cutoff analog
//! lowpass prototype and compensates the gain. Frequencies are angular
//! (rad/s). The input record is never modified.

use crate::types::{product_ratio, Zpk};
use alloc::vec::Vec;
use core::iter;
use num_complex::Complex64;
#[allow(unused_imports)]
use num_traits::Float;

/// Transform a lowpass prototype to a lowpass filter with cutoff `cutoff`.
///
/// Scales every root radially by `cutoff`; the gain is multiplied by
/// `cutoff^degree` to cancel the net scaling.
#[must_use]
pub fn lp2lp(zpk: &Zpk, cutoff: f64) -> Zpk {
    let zeros = zpk.zeros.iter().map(|&z| z * cutoff).collect();
    let poles = zpk.poles.iter().map(|&p| p * cutoff).collect();
    let gain = zpk.gain * cutoff.powi(zpk.degree());

    Zpk::new(zeros, poles, gain)
}

/// Transform a lowpass prototype to a highpass filter with cutoff `cutoff`.
///
/// Inverts every root radially (`cutoff / x`). Zeros at infinity move to
/// the origin.
#[must_use]
pub fn lp2hp(zpk: &Zpk, cutoff: f64) -> Zpk {
    let zeros = zpk
        .zeros
        .iter()
        .map(|&z| cutoff / z)
        .chain(iter::repeat(Complex64::new(0.0, 0.0)).take(zpk.infinite_zeros()))
        .collect();
    let poles = zpk.poles.iter().map(|&p| cutoff / p).collect();

    Zpk::new(zeros, poles, zpk.gain * inversion_gain(zpk))
}

/// Transform a lowpass prototype to a bandpass filter.
///
/// Each root is scaled by `width / 2` and split into the pair
/// `x +/- sqrt(x^2 - center^2)`. Zeros at infinity are split between the
/// origin and infinity.
#[must_use]
pub fn lp2bp(zpk: &Zpk, center: f64, width: f64) -> Zpk {
    let half_width = width / 2.0;
    let scale = |x: Complex64| x * half_width;

    let mut zeros = split_about_center(&zpk.zeros, scale, center);
    zeros.extend(iter::repeat(Complex64::new(0.0, 0.0)).take(zpk.infinite_zeros()));
    let poles = split_about_center(&zpk.poles, scale, center);

    Zpk::new(zeros, poles, zpk.gain * width.powi(zpk.degree()))
}

/// Transform a lowpass prototype to a bandstop filter.
///
/// Each root is inverted (`(width / 2) / x`) and split as in [`lp2bp`].
/// Zeros at infinity move to `+/- j*center`, the middle of the stopband.
#[must_use]
pub fn lp2bs(zpk: &Zpk, center: f64, width: f64) -> Zpk {
    let half_width = width / 2.0;
    let invert = |x: Complex64| half_width / x;

    let mut zeros = split_about_center(&zpk.zeros, invert, center);
    let stop = zpk.infinite_zeros();
    zeros.extend(iter::repeat(Complex64::new(0.0, center)).take(stop));
    zeros.extend(iter::repeat(Complex64::new(0.0, -center)).take(stop));
    let poles = split_about_center(&zpk.poles, invert, center);

    Zpk::new(zeros, poles, zpk.gain * inversion_gain(zpk))
}

/// `Re(prod(-zeros) / prod(-poles))`: cancels the gain change of a radial
/// inversion.
fn inversion_gain(zpk: &Zpk) -> f64 {
    product_ratio(zpk.zeros.iter().map(|&z| -z), zpk.poles.iter().map(|&p| -p)).re
}

/// Map every root through `map`, then duplicate it about `+/- center`.
///
/// All `+` roots come first, followed by all `-` roots.
fn split_about_center<F>(roots: &[Complex64], map: F, center: f64) -> Vec<Complex64>
where
    F: Fn(Complex64) -> Complex64,
{
    let mapped: Vec<Complex64> = roots.iter().map(|&x| map(x)).collect();
    let center_sq = center * center;
    let upper = mapped.iter().map(|&x| x + (x * x - center_sq).sqrt());
    let lower = mapped.iter().map(|&x| x - (x * x - center_sq).sqrt());
    upper.chain(lower).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prototype::analog_lowpass;
    use alloc::vec;

    const TOL: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * (1.0 + b.abs())
    }

    /// Analog response `H(jw)` of a ZPK record.
    fn analog_response(zpk: &Zpk, omega: f64) -> Complex64 {
        let s = Complex64::new(0.0, omega);
        let num: Complex64 = zpk.zeros.iter().map(|&z| s - z).product();
        let den: Complex64 = zpk.poles.iter().map(|&p| s - p).product();
        num / den * zpk.gain
    }

    #[test]
    fn test_lp2lp_scales_roots_and_gain() {
        let proto = analog_lowpass(3);
        let zpk = lp2lp(&proto, 10.0);
        assert_eq!(zpk.poles.len(), 3);
        assert!(zpk.zeros.is_empty());
        assert!(approx_eq(zpk.gain, 1000.0, TOL));
        for (p, q) in zpk.poles.iter().zip(&proto.poles) {
            assert!((p - q * 10.0).norm() < TOL);
        }
        // Unity DC gain and -3 dB at the cutoff
        assert!(approx_eq(analog_response(&zpk, 0.0).norm(), 1.0, TOL));
        assert!(approx_eq(
            analog_response(&zpk, 10.0).norm(),
            core::f64::consts::FRAC_1_SQRT_2,
            TOL
        ));
    }

    #[test]
    fn test_lp2hp_moves_infinite_zeros_to_origin() {
        let zpk = lp2hp(&analog_lowpass(4), 5.0);
        assert_eq!(zpk.poles.len(), 4);
        assert_eq!(zpk.zeros, vec![Complex64::new(0.0, 0.0); 4]);
        // Blocks DC, passes high frequencies at unity
        assert!(analog_response(&zpk, 1e-6).norm() < 1e-9);
        assert!(approx_eq(analog_response(&zpk, 1e6).norm(), 1.0, 1e-6));
        assert!(approx_eq(
            analog_response(&zpk, 5.0).norm(),
            core::f64::consts::FRAC_1_SQRT_2,
            TOL
        ));
    }

    #[test]
    fn test_lp2hp_with_finite_zeros() {
        let proto = Zpk::new(vec![Complex64::new(-2.0, 0.0)], vec![Complex64::new(-1.0, 0.0)], 3.0);
        let zpk = lp2hp(&proto, 1.0);
        assert_eq!(zpk.zeros, vec![Complex64::new(-0.5, 0.0)]);
        assert_eq!(zpk.poles, vec![Complex64::new(-1.0, 0.0)]);
        // 3 * Re(2 / 1)
        assert!(approx_eq(zpk.gain, 6.0, TOL));
    }

    #[test]
    fn test_lp2bp_doubles_roots() {
        let center = 100.0;
        let width = 20.0;
        let zpk = lp2bp(&analog_lowpass(3), center, width);
        assert_eq!(zpk.poles.len(), 6);
        assert_eq!(zpk.zeros, vec![Complex64::new(0.0, 0.0); 3]);
        assert!(approx_eq(zpk.gain, 8000.0, TOL));
        // Unity at the center, blocked at DC
        assert!(approx_eq(analog_response(&zpk, center).norm(), 1.0, 1e-6));
        assert!(analog_response(&zpk, 1e-3).norm() < 1e-6);
    }

    #[test]
    fn test_lp2bp_preserves_conjugates() {
        let zpk = lp2bp(&analog_lowpass(2), 50.0, 10.0);
        for p in &zpk.poles {
            assert!(
                zpk.poles.iter().any(|q| (p - q.conj()).norm() < 1e-9),
                "pole {p} has no conjugate"
            );
        }
    }

    #[test]
    fn test_lp2bs_places_zeros_at_center() {
        let center = 100.0;
        let width = 20.0;
        let zpk = lp2bs(&analog_lowpass(2), center, width);
        assert_eq!(zpk.poles.len(), 4);
        assert_eq!(
            zpk.zeros,
            vec![
                Complex64::new(0.0, center),
                Complex64::new(0.0, center),
                Complex64::new(0.0, -center),
                Complex64::new(0.0, -center),
            ]
        );
        // Unity away from the stopband, null at its center
        assert!(approx_eq(analog_response(&zpk, 1e-3).norm(), 1.0, 1e-6));
        assert!(analog_response(&zpk, center).norm() < 1e-9);
    }

    #[test]
    fn test_transforms_leave_input_untouched() {
        let proto = analog_lowpass(2);
        let copy = proto.clone();
        let _ = lp2lp(&proto, 2.0);
        let _ = lp2hp(&proto, 2.0);
        let _ = lp2bp(&proto, 2.0, 1.0);
        let _ = lp2bs(&proto, 2.0, 1.0);
        assert_eq!(proto, copy);
    }
}
