//! Stateless convenience wrappers around the engine entry points.
//!
//! Nothing here carries logic of its own; every function delegates to
//! the check, margin, or batch modules.

use tsdiag_poly::{CoefficientVector, ModelKind};

use crate::batch::{batch_check, BatchSummary};
use crate::check::{invertibility_check, stationarity_check};
use crate::error::DiagnoseError;

/// Quick AR stationarity check returning only the boolean verdict.
///
/// # Example
///
/// ```
/// use tsdiag_diagnose::quick_ar_check;
/// use tsdiag_poly::CoefficientVector;
///
/// let coeffs = CoefficientVector::new(vec![0.8, 0.15]).unwrap();
/// assert!(quick_ar_check(&coeffs).unwrap());
/// ```
pub fn quick_ar_check(coefficients: &CoefficientVector) -> Result<bool, DiagnoseError> {
    Ok(stationarity_check(coefficients)?.passed())
}

/// Quick MA invertibility check returning only the boolean verdict.
pub fn quick_ma_check(coefficients: &CoefficientVector) -> Result<bool, DiagnoseError> {
    Ok(invertibility_check(coefficients)?.passed())
}

/// Checks both sides of an ARMA model: AR stationarity and MA
/// invertibility, in that order.
pub fn quick_arma_check(
    ar: &CoefficientVector,
    ma: &CoefficientVector,
) -> Result<(bool, bool), DiagnoseError> {
    Ok((quick_ar_check(ar)?, quick_ma_check(ma)?))
}

/// Ranks a set of same-kind models against each other.
///
/// Thin alias over [`batch_check`]; the summary's ranking and
/// `best()`/`worst()` accessors carry the comparison.
pub fn compare_models(models: &[(String, Vec<f64>)], kind: ModelKind) -> BatchSummary {
    batch_check(models, kind)
}
