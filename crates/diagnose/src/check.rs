//! Stationarity and invertibility checks.

use serde::Serialize;
use tsdiag_poly::{CharacteristicPolynomial, CoefficientVector, ModelKind};

use crate::classify::{classify_roots, Root};
use crate::error::DiagnoseError;

/// The result of a stationarity or invertibility check.
///
/// One shape serves both kinds of check; [`StabilityResult::kind`] tags
/// which property the verdict speaks to. Constructed once per check call
/// and immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct StabilityResult {
    kind: ModelKind,
    passed: bool,
    roots: Vec<Root>,
    coefficients: CoefficientVector,
    characteristic_polynomial: CharacteristicPolynomial,
    message: String,
}

impl StabilityResult {
    /// Which property was checked (stationarity for AR, invertibility for MA).
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// The verdict: true iff every root lies strictly outside the unit
    /// circle.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// The classified roots, ascending by magnitude.
    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    /// The coefficients the check was run on.
    pub fn coefficients(&self) -> &CoefficientVector {
        &self.coefficients
    }

    /// The characteristic polynomial the roots were solved from.
    pub fn characteristic_polynomial(&self) -> &CharacteristicPolynomial {
        &self.characteristic_polynomial
    }

    /// Human-readable summary of the verdict.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Runs the shared polynomial/root pipeline for `kind`.
///
/// The verdict is true iff every characteristic root lies strictly
/// outside the unit circle; a single root on or inside the circle flips
/// it to false. A model whose polynomial degenerates to a constant (all
/// coefficients zero) has no roots and passes vacuously.
///
/// # Errors
///
/// Propagates [`tsdiag_poly::PolyError`] failures from root solving.
pub fn check(
    coefficients: &CoefficientVector,
    kind: ModelKind,
) -> Result<StabilityResult, DiagnoseError> {
    let polynomial = CharacteristicPolynomial::build(coefficients, kind);
    let values = polynomial.roots()?;
    let roots = classify_roots(&values);
    let passed = roots.iter().all(Root::is_outside_unit_circle);
    let message = render_message(kind, passed, &roots);

    Ok(StabilityResult {
        kind,
        passed,
        roots,
        coefficients: coefficients.clone(),
        characteristic_polynomial: polynomial,
        message,
    })
}

/// Checks an AR model's stationarity condition.
///
/// Stationarity requires every root of `1 - c1·z - … - cp·z^p` to lie
/// outside the unit circle.
///
/// # Example
///
/// ```
/// use tsdiag_diagnose::stationarity_check;
/// use tsdiag_poly::CoefficientVector;
///
/// let stable = CoefficientVector::new(vec![0.5]).unwrap();
/// assert!(stationarity_check(&stable).unwrap().passed());
///
/// let unstable = CoefficientVector::new(vec![1.1]).unwrap();
/// assert!(!stationarity_check(&unstable).unwrap().passed());
/// ```
pub fn stationarity_check(
    coefficients: &CoefficientVector,
) -> Result<StabilityResult, DiagnoseError> {
    check(coefficients, ModelKind::Ar)
}

/// Checks an MA model's invertibility condition.
///
/// Invertibility requires every root of `1 + c1·z + … + cq·z^q` to lie
/// outside the unit circle.
pub fn invertibility_check(
    coefficients: &CoefficientVector,
) -> Result<StabilityResult, DiagnoseError> {
    check(coefficients, ModelKind::Ma)
}

fn render_message(kind: ModelKind, passed: bool, roots: &[Root]) -> String {
    let property = kind.property();
    if roots.is_empty() {
        return format!("{property} holds: the characteristic polynomial is constant (no roots)");
    }
    if passed {
        // Roots are sorted ascending, so the first carries the minimum margin.
        let margin = roots[0].distance_from_unit_circle();
        format!(
            "{property} holds: all {} roots lie outside the unit circle (minimum margin {margin:.6})",
            roots.len()
        )
    } else {
        let violating: Vec<&Root> = roots
            .iter()
            .filter(|r| !r.is_outside_unit_circle())
            .collect();
        let min_magnitude = violating
            .iter()
            .map(|r| r.magnitude())
            .fold(f64::INFINITY, f64::min);
        format!(
            "{property} fails: {} of {} roots lie on or inside the unit circle (smallest root magnitude {min_magnitude:.6})",
            violating.len(),
            roots.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn coeffs(values: &[f64]) -> CoefficientVector {
        CoefficientVector::new(values.to_vec()).unwrap()
    }

    #[test]
    fn ar1_stationary() {
        let result = stationarity_check(&coeffs(&[0.5])).unwrap();
        assert!(result.passed());
        assert_eq!(result.kind(), ModelKind::Ar);
        assert_eq!(result.roots().len(), 1);
        assert_abs_diff_eq!(result.roots()[0].magnitude(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn ar1_non_stationary() {
        let result = stationarity_check(&coeffs(&[1.1])).unwrap();
        assert!(!result.passed());
        assert_abs_diff_eq!(
            result.roots()[0].magnitude(),
            1.0 / 1.1,
            epsilon = 1e-9
        );
    }

    #[test]
    fn ar1_unit_root() {
        let result = stationarity_check(&coeffs(&[1.0])).unwrap();
        assert!(!result.passed());
        assert_abs_diff_eq!(result.roots()[0].magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ar2_complex_pair_stationary() {
        // 1 - 0.5z + 0.3z²: complex conjugate roots, |z| = sqrt(1/0.3).
        let result = stationarity_check(&coeffs(&[0.5, -0.3])).unwrap();
        assert!(result.passed());
        assert_eq!(result.roots().len(), 2);
        let expected = (1.0_f64 / 0.3).sqrt();
        for root in result.roots() {
            assert_abs_diff_eq!(root.magnitude(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn ma1_invertible() {
        let result = invertibility_check(&coeffs(&[0.5])).unwrap();
        assert!(result.passed());
        assert_eq!(result.kind(), ModelKind::Ma);
        assert_abs_diff_eq!(result.roots()[0].magnitude(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn ma1_non_invertible() {
        let result = invertibility_check(&coeffs(&[1.5])).unwrap();
        assert!(!result.passed());
    }

    #[test]
    fn ma1_unit_root() {
        let result = invertibility_check(&coeffs(&[1.0])).unwrap();
        assert!(!result.passed());
    }

    #[test]
    fn polynomial_sign_conventions_differ() {
        let c = coeffs(&[0.5, -0.3]);
        let ar = check(&c, ModelKind::Ar).unwrap();
        let ma = check(&c, ModelKind::Ma).unwrap();
        assert_eq!(
            ar.characteristic_polynomial().coefficients(),
            &[1.0, -0.5, 0.3]
        );
        assert_eq!(
            ma.characteristic_polynomial().coefficients(),
            &[1.0, 0.5, -0.3]
        );
    }

    #[test]
    fn roots_sorted_ascending() {
        // 1 - 2.5z + z² = (z - 2)(z - 0.5): one root inside, one outside.
        let result = stationarity_check(&coeffs(&[2.5, -1.0])).unwrap();
        assert!(!result.passed());
        let mags: Vec<f64> = result.roots().iter().map(Root::magnitude).collect();
        assert!(mags.windows(2).all(|w| w[0] <= w[1]));
        assert_abs_diff_eq!(mags[0], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(mags[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn all_zero_coefficients_pass_vacuously() {
        let result = stationarity_check(&coeffs(&[0.0, 0.0])).unwrap();
        assert!(result.passed());
        assert!(result.roots().is_empty());
        assert!(result.message().contains("constant"));
    }

    #[test]
    fn failing_message_counts_violations() {
        let result = stationarity_check(&coeffs(&[2.5, -1.0])).unwrap();
        assert!(result.message().contains("1 of 2 roots"));
        assert!(result.message().contains("0.500000"));
    }

    #[test]
    fn passing_message_reports_margin() {
        let result = stationarity_check(&coeffs(&[0.5])).unwrap();
        assert!(result.message().contains("minimum margin 1.000000"));
    }

    #[test]
    fn result_preserves_inputs() {
        let c = coeffs(&[0.8, 0.15]);
        let result = stationarity_check(&c).unwrap();
        assert_eq!(result.coefficients(), &c);
        assert_eq!(result.characteristic_polynomial().degree(), 2);
    }
}
