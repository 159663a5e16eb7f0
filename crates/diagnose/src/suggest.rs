//! Coefficient adjustment suggestions for failing models.

use serde::Serialize;
use tsdiag_poly::{CoefficientVector, ModelKind};

use crate::check::check;
use crate::error::DiagnoseError;
use crate::margin::StabilityMargin;

/// Target magnitude for the smallest root after adjustment.
///
/// Calibration constant: a suggestion must clear the unit circle with
/// some headroom, not just graze it.
const SAFETY_TARGET: f64 = 1.05;

/// Maximum number of trial shrink factors evaluated per call.
const MAX_TRIALS: usize = 50;

/// Bisection stops refining once the bracket is this narrow.
const BISECT_TOL: f64 = 1e-3;

/// A proposed coefficient rescaling that restores stability.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    coefficients: CoefficientVector,
    shrink_factor: f64,
    predicted_margin: f64,
}

impl Suggestion {
    /// The proposed replacement coefficients.
    pub fn coefficients(&self) -> &CoefficientVector {
        &self.coefficients
    }

    /// The uniform factor the original coefficients were multiplied by.
    pub fn shrink_factor(&self) -> f64 {
        self.shrink_factor
    }

    /// The verified margin of the proposed coefficients.
    pub fn predicted_margin(&self) -> f64 {
        self.predicted_margin
    }
}

/// Searches for a uniform shrink factor that stabilises a failing model.
///
/// Scaling every coefficient by `s ∈ (0, 1)` moves an order-1 model's
/// root to `1/s` times its magnitude exactly, and higher-order roots
/// approximately, so every candidate factor is verified by re-running
/// the full polynomial/root pipeline. The search starts from the exact
/// order-1 guess (smallest root magnitude over the safety target),
/// halves until a passing factor is found, then bisects toward the
/// largest factor that still clears the target — the smallest
/// modification of the original model.
///
/// Returns `Ok(None)` when the model already passes, and when no factor
/// is found within the trial budget (the "no suggestion available"
/// outcome — a normal result, not an error).
///
/// # Errors
///
/// Propagates [`tsdiag_poly::PolyError`] failures from root solving.
pub fn suggest_adjustment(
    coefficients: &CoefficientVector,
    kind: ModelKind,
) -> Result<Option<Suggestion>, DiagnoseError> {
    let original = check(coefficients, kind)?;
    if original.passed() {
        return Ok(None);
    }

    // A failing model always has roots (no roots means a vacuous pass),
    // and none of them can sit at the origin because the constant term
    // of the characteristic polynomial is 1. Sorted ascending, the first
    // root drives the instability.
    let min_magnitude = original.roots()[0].magnitude();
    let required_margin = SAFETY_TARGET - 1.0;

    let mut trials = 0;
    let mut passing: Option<(f64, f64)> = None;

    // Phase 1: geometric shrink from the order-1 guess until a factor
    // clears the safety target.
    let mut s = min_magnitude / SAFETY_TARGET;
    while trials < MAX_TRIALS && s > 0.0 {
        let margin = trial_margin(coefficients, kind, s)?;
        trials += 1;
        if margin >= required_margin {
            passing = Some((s, margin));
            break;
        }
        s *= 0.5;
    }

    let Some((mut lo, mut lo_margin)) = passing else {
        return Ok(None);
    };

    // Phase 2: bisect between the passing factor and the nearest known
    // failing one, keeping the largest factor that still passes.
    let mut hi = (lo * 2.0).min(1.0);
    while trials < MAX_TRIALS && hi - lo > BISECT_TOL {
        let mid = 0.5 * (lo + hi);
        let margin = trial_margin(coefficients, kind, mid)?;
        trials += 1;
        if margin >= required_margin {
            lo = mid;
            lo_margin = margin;
        } else {
            hi = mid;
        }
    }

    Ok(Some(Suggestion {
        coefficients: coefficients.scaled(lo),
        shrink_factor: lo,
        predicted_margin: lo_margin,
    }))
}

/// Verified margin of the model with all coefficients scaled by `s`.
fn trial_margin(
    coefficients: &CoefficientVector,
    kind: ModelKind,
    s: f64,
) -> Result<f64, DiagnoseError> {
    let candidate = coefficients.scaled(s);
    let result = check(&candidate, kind)?;
    Ok(StabilityMargin::from_roots(result.roots()).margin())
}
