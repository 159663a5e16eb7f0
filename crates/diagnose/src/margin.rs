//! Aggregate stability margin analysis.

use serde::Serialize;
use tsdiag_poly::{CoefficientVector, ModelKind};

use crate::check::check;
use crate::classify::{RiskLevel, Root};
use crate::error::DiagnoseError;

/// A scalar summary of how close a model is to instability.
///
/// The margin is the minimum signed distance of any characteristic root
/// from the unit circle: positive for a passing model, negative or zero
/// for a failing one, infinite for a degenerate constant polynomial.
/// The qualitative band applies the per-root risk thresholds to this
/// aggregate value.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StabilityMargin {
    margin: f64,
    risk: RiskLevel,
}

impl StabilityMargin {
    pub(crate) fn from_roots(roots: &[Root]) -> Self {
        let margin = roots
            .iter()
            .map(Root::distance_from_unit_circle)
            .fold(f64::INFINITY, f64::min);
        Self {
            margin,
            risk: RiskLevel::from_distance(margin),
        }
    }

    /// Minimum signed distance of any root from the unit circle.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Qualitative risk band for the aggregate margin.
    pub fn risk(&self) -> RiskLevel {
        self.risk
    }
}

/// Computes the aggregate stability margin for `coefficients` under `kind`.
///
/// Used for ranking models in batch comparisons; a larger margin means a
/// more comfortably stable model.
///
/// # Errors
///
/// Propagates [`tsdiag_poly::PolyError`] failures from root solving.
pub fn analyze_stability(
    coefficients: &CoefficientVector,
    kind: ModelKind,
) -> Result<StabilityMargin, DiagnoseError> {
    let result = check(coefficients, kind)?;
    Ok(StabilityMargin::from_roots(result.roots()))
}
