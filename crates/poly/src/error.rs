//! Error types for the tsdiag-poly crate.

/// Error type for all fallible operations in the tsdiag-poly crate.
///
/// This enum covers coefficient validation failures, parse failures, and
/// numerical problems encountered while solving for characteristic roots.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolyError {
    /// Returned when a coefficient vector is empty.
    #[error("coefficient vector is empty (model order must be at least 1)")]
    EmptyCoefficients,

    /// Returned when a coefficient string contains a token that is not a number.
    #[error("unparseable coefficient token '{token}'")]
    ParseToken {
        /// The offending token, verbatim.
        token: String,
    },

    /// Returned when a coefficient is NaN or infinite.
    #[error("coefficient {index} is not finite (got {value})")]
    NonFiniteCoefficient {
        /// Zero-based index of the offending coefficient.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a polynomial's degree does not match the model order
    /// it claims to represent.
    #[error("polynomial degree {degree} does not match model order {order}")]
    DegreeMismatch {
        /// Degree implied by the coefficient count.
        degree: usize,
        /// Model order the polynomial was expected to match.
        order: usize,
    },

    /// Returned when the eigenvalue solver produces a non-finite root.
    #[error("root solver produced a non-finite root at index {index}")]
    NonFiniteRoot {
        /// Index of the non-finite eigenvalue.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_coefficients() {
        let err = PolyError::EmptyCoefficients;
        assert_eq!(
            err.to_string(),
            "coefficient vector is empty (model order must be at least 1)"
        );
    }

    #[test]
    fn error_parse_token() {
        let err = PolyError::ParseToken {
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "unparseable coefficient token 'abc'");
    }

    #[test]
    fn error_non_finite_coefficient() {
        let err = PolyError::NonFiniteCoefficient {
            index: 2,
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "coefficient 2 is not finite (got inf)");
    }

    #[test]
    fn error_degree_mismatch() {
        let err = PolyError::DegreeMismatch {
            degree: 3,
            order: 2,
        };
        assert_eq!(
            err.to_string(),
            "polynomial degree 3 does not match model order 2"
        );
    }

    #[test]
    fn error_non_finite_root() {
        let err = PolyError::NonFiniteRoot { index: 1 };
        assert_eq!(
            err.to_string(),
            "root solver produced a non-finite root at index 1"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<PolyError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PolyError>();
    }
}
