//! Conjugate pair validation
//!
//! Real-coefficient polynomials have roots that are either real or come in
//! exact conjugate pairs. [`cplxpair`] checks that property and keeps one
//! representative per pair.

use crate::config::DesignConfig;
use crate::error::{DesignError, DesignResult};
use crate::types::{is_near, is_real};
use alloc::vec::Vec;
use core::cmp::Ordering;
use num_complex::Complex64;
#[allow(unused_imports)]
use num_traits::Float;

/// Roots split into reals and positive-imaginary pair representatives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConjugatePairs {
    /// Real roots (imaginary part dropped), ascending
    pub reals: Vec<Complex64>,
    /// One root of each conjugate pair (positive imaginary part), ordered
    /// by real then imaginary part
    pub complex: Vec<Complex64>,
}

impl ConjugatePairs {
    /// Number of roots represented, counting each pair twice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reals.len() + 2 * self.complex.len()
    }

    /// Returns true when no roots are represented.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reals.is_empty() && self.complex.is_empty()
    }

    /// Reals followed by the pair representatives, conjugates implied.
    ///
    /// This is the working set the SOS factorizer pairs from.
    #[must_use]
    pub fn representatives(&self) -> Vec<Complex64> {
        self.reals.iter().chain(&self.complex).copied().collect()
    }

    /// Rebuild the full root set: reals, representatives, then conjugates.
    #[must_use]
    pub fn expand(&self) -> Vec<Complex64> {
        self.reals
            .iter()
            .chain(&self.complex)
            .copied()
            .chain(self.complex.iter().map(Complex64::conj))
            .collect()
    }
}

/// Validate conjugate pairs using the default tolerance.
///
/// # Errors
///
/// [`DesignError::InvalidPairing`] if a complex root has no conjugate.
pub fn cplxpair(roots: &[Complex64]) -> DesignResult<ConjugatePairs> {
    cplxpair_with(roots, &DesignConfig::default())
}

/// Validate conjugate pairs and keep the positive-imaginary half.
///
/// Roots are sorted by real part, then imaginary part, and partitioned into
/// reals (`|imag| < tolerance`), positive-imaginary and negative-imaginary
/// roots. Each positive root must be matched by a distinct negative root `b`
/// with `|a - conj(b)| < tolerance`, and no negative root may be left over.
///
/// # Errors
///
/// [`DesignError::InvalidPairing`] carrying the first unmatched root.
pub fn cplxpair_with(roots: &[Complex64], config: &DesignConfig) -> DesignResult<ConjugatePairs> {
    let tol = config.tolerance;

    let mut sorted = roots.to_vec();
    sorted.sort_by(|a, b| match a.re.total_cmp(&b.re) {
        Ordering::Equal => a.im.total_cmp(&b.im),
        ordering => ordering,
    });

    let mut pairs = ConjugatePairs::default();
    let mut negative = Vec::new();
    for root in sorted {
        if is_real(root, tol) {
            pairs.reals.push(Complex64::new(root.re, 0.0));
        } else if root.im > 0.0 {
            pairs.complex.push(root);
        } else {
            negative.push(root);
        }
    }

    for &root in &pairs.complex {
        match negative
            .iter()
            .position(|&candidate| is_near(root, candidate.conj(), tol))
        {
            Some(index) => {
                negative.remove(index);
            }
            None => return Err(DesignError::InvalidPairing(root)),
        }
    }
    if let Some(&root) = negative.first() {
        return Err(DesignError::InvalidPairing(root));
    }

    Ok(pairs)
}
