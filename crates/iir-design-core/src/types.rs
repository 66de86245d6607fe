//! Core types for IIR filter design.

use alloc::vec::Vec;
use num_complex::Complex64;
#[allow(unused_imports)]
use num_traits::Float;

/// Zero/pole/gain representation of a rational transfer function.
///
/// ```text
/// H(s) = gain * prod(s - zeros[i]) / prod(s - poles[i])
/// ```
///
/// Every pipeline stage takes a `&Zpk` and returns a freshly built one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Zpk {
    /// Transfer function zeros
    pub zeros: Vec<Complex64>,
    /// Transfer function poles
    pub poles: Vec<Complex64>,
    /// System gain
    pub gain: f64,
}

impl Zpk {
    /// Create a ZPK record.
    #[must_use]
    pub fn new(zeros: Vec<Complex64>, poles: Vec<Complex64>, gain: f64) -> Self {
        Self { zeros, poles, gain }
    }

    /// Relative degree: number of poles minus number of zeros.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn degree(&self) -> i32 {
        self.poles.len() as i32 - self.zeros.len() as i32
    }

    /// Number of zeros at infinity (excess poles, never negative).
    #[must_use]
    pub fn infinite_zeros(&self) -> usize {
        self.poles.len().saturating_sub(self.zeros.len())
    }
}

/// Returns true when `value` has an imaginary part below `tolerance`.
#[must_use]
#[inline]
pub fn is_real(value: Complex64, tolerance: f64) -> bool {
    value.im.abs() < tolerance
}

/// Returns true when `a` and `b` are within `tolerance` of each other.
#[must_use]
#[inline]
pub fn is_near(a: Complex64, b: Complex64, tolerance: f64) -> bool {
    (a - b).norm() < tolerance
}

/// `prod(numer) / prod(denom)`, accumulated one ratio at a time.
///
/// Neither product is formed on its own, so long root lists whose products
/// would overflow still give a finite quotient. Unpaired trailing terms
/// multiply or divide the running value directly.
pub(crate) fn product_ratio<N, D>(numer: N, denom: D) -> Complex64
where
    N: IntoIterator<Item = Complex64>,
    D: IntoIterator<Item = Complex64>,
{
    let mut numer = numer.into_iter();
    let mut denom = denom.into_iter();
    let mut ratio = Complex64::new(1.0, 0.0);
    loop {
        match (numer.next(), denom.next()) {
            (Some(n), Some(d)) => ratio *= n / d,
            (Some(n), None) => ratio *= n,
            (None, Some(d)) => ratio /= d,
            (None, None) => return ratio,
        }
    }
}

/// Which roots a nearest-neighbour search may select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootKind {
    /// Only real roots
    Real,
    /// Only roots with a non-negligible imaginary part
    Complex,
    /// Any root
    Any,
}

impl RootKind {
    fn matches(self, value: Complex64, tolerance: f64) -> bool {
        match self {
            Self::Real => is_real(value, tolerance),
            Self::Complex => !is_real(value, tolerance),
            Self::Any => true,
        }
    }
}

/// Remove and return the element of `values` of the given kind closest to
/// `target` (Euclidean distance in the complex plane).
///
/// Ties resolve to the earliest element. Returns `None` when no element of
/// the requested kind remains.
pub fn pop_nearest(
    values: &mut Vec<Complex64>,
    target: Complex64,
    kind: RootKind,
    tolerance: f64,
) -> Option<Complex64> {
    let index = values
        .iter()
        .enumerate()
        .filter(|(_, value)| kind.matches(**value, tolerance))
        .min_by(|(_, a), (_, b)| (**a - target).norm().total_cmp(&(**b - target).norm()))
        .map(|(index, _)| index)?;
    Some(values.remove(index))
}

/// Count the real elements of `values`.
#[must_use]
pub fn count_real(values: &[Complex64], tolerance: f64) -> usize {
    values.iter().filter(|value| is_real(**value, tolerance)).count()
}
