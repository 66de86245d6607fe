//! Second-order section factorization
//!
//! Converts a digital ZPK record into an ordered cascade of biquads. Poles
//! closest to the unit circle are paired first with their nearest zeros;
//! the resulting sections are emitted in reverse so the worst-conditioned
//! one runs last, after the earlier sections have limited dynamic range.

use crate::config::DesignConfig;
use crate::error::{DesignError, DesignResult};
use crate::filter::{Biquad, BiquadCoeffs};
use crate::log::{DesignLog, LogLevel, NullLog};
use crate::pairing::cplxpair_with;
use crate::types::{count_real, is_real, pop_nearest, RootKind, Zpk};
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex64;
#[allow(unused_imports)]
use num_traits::Float;

const ORIGIN: Complex64 = Complex64::new(0.0, 0.0);

/// Roots and gain of one second-order section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionZpk {
    /// Section zeros (a conjugate pair or two reals)
    pub zeros: [Complex64; 2],
    /// Section poles (a conjugate pair or two reals)
    pub poles: [Complex64; 2],
    /// Section gain
    pub gain: f64,
}

/// Expand one section into biquad coefficients using the default tolerance.
///
/// # Errors
///
/// [`DesignError::NonRealCoefficient`] if a coefficient is complex.
pub fn zpk2tf(section: &SectionZpk) -> DesignResult<BiquadCoeffs> {
    zpk2tf_with(section, &DesignConfig::default())
}

/// Expand `gain*(z - z0)(z - z1) / ((z - p0)(z - p1))` into biquad
/// coefficients.
///
/// A coefficient with `|imag| >= tolerance` means the roots were not
/// conjugate-symmetric; the imaginary part is never silently dropped.
///
/// # Errors
///
/// [`DesignError::NonRealCoefficient`] naming the first complex coefficient.
pub fn zpk2tf_with(section: &SectionZpk, config: &DesignConfig) -> DesignResult<BiquadCoeffs> {
    let [z0, z1] = section.zeros;
    let [p0, p1] = section.poles;
    let gain = section.gain;

    let real = |name: &'static str, value: Complex64| {
        if is_real(value, config.tolerance) {
            Ok(value.re)
        } else {
            Err(DesignError::NonRealCoefficient {
                name,
                imag: value.im,
            })
        }
    };

    let a1 = real("a1", -p0 - p1)?;
    let a2 = real("a2", p0 * p1)?;
    let b0 = gain;
    let b1 = real("b1", (-z0 - z1) * gain)?;
    let b2 = real("b2", z0 * z1 * gain)?;

    Ok(BiquadCoeffs::new(b0, b1, b2, a1, a2))
}

/// Factor a digital ZPK record into second-order sections.
///
/// # Errors
///
/// See [`zpk2sos_with`].
pub fn zpk2sos(zpk: &Zpk) -> DesignResult<Vec<Biquad>> {
    zpk2sos_with(zpk, &DesignConfig::default(), &NullLog)
}

/// Factor a digital ZPK record into second-order sections.
///
/// Returns `ceil(max(zeros, poles) / 2)` biquads whose cascade reproduces
/// the input transfer function. The overall gain sits in the last section;
/// every other section has unit gain. An empty record yields one gain-only
/// section.
///
/// Only meaningful for digital (z-plane) records.
///
/// # Errors
///
/// - [`DesignError::NonFiniteGain`] if the gain is NaN or infinite
/// - [`DesignError::InvalidPairing`] if poles or zeros are not conjugate-symmetric
/// - [`DesignError::UnbalancedFactorization`] if roots are left over
/// - [`DesignError::NonRealCoefficient`] if a section expands to complex coefficients
pub fn zpk2sos_with(
    zpk: &Zpk,
    config: &DesignConfig,
    log: &dyn DesignLog,
) -> DesignResult<Vec<Biquad>> {
    let tol = config.tolerance;

    if !zpk.gain.is_finite() {
        return Err(DesignError::NonFiniteGain(zpk.gain));
    }

    if zpk.zeros.is_empty() && zpk.poles.is_empty() {
        log.log(
            LogLevel::Warn,
            format_args!("empty zpk, emitting gain-only section (gain {})", zpk.gain),
        );
        let coeffs = BiquadCoeffs::new(zpk.gain, 0.0, 0.0, 0.0, 0.0);
        return Ok(vec![Biquad::new(coeffs)]);
    }

    // Balance pole and zero counts with roots at the origin
    let count = zpk.zeros.len().max(zpk.poles.len());
    let mut zeros = zpk.zeros.clone();
    let mut poles = zpk.poles.clone();
    zeros.resize(count, ORIGIN);
    poles.resize(count, ORIGIN);

    let n_sections = count.div_ceil(2);
    if count % 2 == 1 {
        zeros.push(ORIGIN);
        poles.push(ORIGIN);
    }
    log.log(
        LogLevel::Debug,
        format_args!(
            "zpk2sos: {} zeros, {} poles padded to {} -> {} sections",
            zpk.zeros.len(),
            zpk.poles.len(),
            poles.len(),
            n_sections
        ),
    );

    // Conjugates are implied by the positive-imaginary representatives
    let mut poles = cplxpair_with(&poles, config)?.representatives();
    let mut zeros = cplxpair_with(&zeros, config)?.representatives();

    // Worst (closest to the unit circle) first
    poles.sort_by(|a, b| (1.0 - a.norm()).abs().total_cmp(&(1.0 - b.norm()).abs()));

    let mut formed: Vec<SectionZpk> = Vec::with_capacity(n_sections);
    for _ in 0..n_sections {
        if poles.is_empty() {
            return Err(unbalanced(&poles, &zeros));
        }
        let p1 = poles.remove(0);
        let p1_real = is_real(p1, tol);

        let (p2, z1, z2) = if p1_real && count_real(&poles, tol) == 0 {
            // First-order section
            let z1 = pop_nearest(&mut zeros, p1, RootKind::Real, tol)
                .ok_or_else(|| unbalanced(&poles, &zeros))?;
            (ORIGIN, z1, ORIGIN)
        } else {
            let z1 = if !p1_real && count_real(&zeros, tol) == 1 {
                // Keep the lone real zero for the eventual first-order section
                pop_nearest(&mut zeros, p1, RootKind::Complex, tol)
            } else {
                pop_nearest(&mut zeros, p1, RootKind::Any, tol)
            }
            .ok_or_else(|| unbalanced(&poles, &zeros))?;

            match (p1_real, is_real(z1, tol)) {
                (false, false) => (p1.conj(), z1, z1.conj()),
                (false, true) => {
                    let z2 = pop_nearest(&mut zeros, p1, RootKind::Real, tol)
                        .ok_or_else(|| unbalanced(&poles, &zeros))?;
                    (p1.conj(), z1, z2)
                }
                (true, false) => {
                    let p2 = pop_nearest(&mut poles, z1, RootKind::Real, tol)
                        .ok_or_else(|| unbalanced(&poles, &zeros))?;
                    (p2, z1, z1.conj())
                }
                (true, true) => {
                    // Next worst real pole, then the real zero nearest to it
                    let index = poles
                        .iter()
                        .position(|&p| is_real(p, tol))
                        .ok_or_else(|| unbalanced(&poles, &zeros))?;
                    let p2 = poles.remove(index);
                    let z2 = pop_nearest(&mut zeros, p2, RootKind::Real, tol)
                        .ok_or_else(|| unbalanced(&poles, &zeros))?;
                    (p2, z1, z2)
                }
            }
        };

        log.log(
            LogLevel::Debug,
            format_args!("section {}: poles [{p1}, {p2}] zeros [{z1}, {z2}]", formed.len()),
        );
        formed.push(SectionZpk {
            zeros: [z1, z2],
            poles: [p1, p2],
            gain: 1.0,
        });
    }

    if !poles.is_empty() || !zeros.is_empty() {
        return Err(unbalanced(&poles, &zeros));
    }

    // Worst section last; the overall gain rides on it
    if let Some(worst) = formed.first_mut() {
        worst.gain = zpk.gain;
    }
    formed
        .iter()
        .rev()
        .map(|section| zpk2tf_with(section, config).map(Biquad::new))
        .collect()
}

fn unbalanced(poles: &[Complex64], zeros: &[Complex64]) -> DesignError {
    DesignError::UnbalancedFactorization {
        poles: poles.len(),
        zeros: zeros.len(),
    }
}
