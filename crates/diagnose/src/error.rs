//! Error types for the tsdiag-diagnose crate.

use tsdiag_poly::PolyError;

/// Error type for all fallible operations in the tsdiag-diagnose crate.
///
/// Every hard failure in the diagnostic pipeline originates upstream in
/// coefficient validation, parsing, or root solving; this enum carries
/// those through unchanged. An exhausted suggestion search is *not* an
/// error: [`crate::suggest_adjustment`] reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiagnoseError {
    /// A coefficient or polynomial failure from the poly crate.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_poly_error_transparently() {
        let err = DiagnoseError::from(PolyError::EmptyCoefficients);
        assert_eq!(
            err.to_string(),
            "coefficient vector is empty (model order must be at least 1)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DiagnoseError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DiagnoseError>();
    }
}
