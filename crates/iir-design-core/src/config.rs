//! Design configuration and numeric constants
//!
//! The realness and conjugate-matching tolerance is a policy value rather
//! than a law of nature, so it is carried in [`DesignConfig`] and threaded
//! through every stage that classifies roots.

/// Default tolerance for realness tests and conjugate matching
/// (`100 * f64::EPSILON`).
pub const DEFAULT_TOLERANCE: f64 = 100.0 * f64::EPSILON;

/// Tunable parameters of a design call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesignConfig {
    /// A root is real when `|imag| < tolerance`; two roots `a`, `b` are
    /// conjugates when `|a - conj(b)| < tolerance`.
    pub tolerance: f64,
}

impl DesignConfig {
    /// Configuration with the default tolerance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Configuration with a custom tolerance.
    #[must_use]
    pub const fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self::new()
    }
}
