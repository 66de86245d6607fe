//! Design error types
//!
//! All three kinds are data-integrity faults: a design call that hits one
//! must be abandoned, never patched up.

use num_complex::Complex64;
use thiserror::Error;

/// Result type for design operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Errors raised by the design pipeline
#[derive(Error, Clone, Debug, PartialEq)]
pub enum DesignError {
    /// A complex root has no conjugate partner within tolerance
    #[error("complex value {0} has no matching conjugate")]
    InvalidPairing(Complex64),

    /// Expanding a section produced a coefficient with an imaginary part
    #[error("filter coefficient {name} is complex (imaginary part {imag:e})")]
    NonRealCoefficient {
        /// Coefficient name (`b0`, `b1`, `b2`, `a1`, `a2`)
        name: &'static str,
        /// Offending imaginary part
        imag: f64,
    },

    /// Overall gain is NaN or infinite
    #[error("design gain {0} is not finite")]
    NonFiniteGain(f64),

    /// Poles or zeros were left over (or ran out) while forming sections
    #[error("unbalanced factorization: {poles} poles and {zeros} zeros unpaired")]
    UnbalancedFactorization {
        /// Poles remaining when pairing stopped
        poles: usize,
        /// Zeros remaining when pairing stopped
        zeros: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        let err = DesignError::InvalidPairing(Complex64::new(0.5, 0.25));
        assert!(err.to_string().contains("no matching conjugate"));

        let err = DesignError::NonRealCoefficient {
            name: "a1",
            imag: 1e-3,
        };
        assert!(err.to_string().contains("a1"));

        let err = DesignError::NonFiniteGain(f64::NAN);
        assert_eq!(err.to_string(), "design gain NaN is not finite");

        let err = DesignError::UnbalancedFactorization { poles: 1, zeros: 0 };
        assert_eq!(
            err.to_string(),
            "unbalanced factorization: 1 poles and 0 zeros unpaired"
        );
    }

    #[test]
    fn test_errors_are_distinct() {
        let pairing = DesignError::InvalidPairing(Complex64::new(0.0, 1.0));
        let leftover = DesignError::UnbalancedFactorization { poles: 0, zeros: 2 };
        assert_ne!(pairing, leftover);
    }
}
