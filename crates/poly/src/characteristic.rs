//! Characteristic polynomial construction.

use num_complex::Complex;
use serde::Serialize;

use crate::coeffs::CoefficientVector;
use crate::error::PolyError;
use crate::kind::ModelKind;
use crate::solver;

/// The characteristic polynomial of an AR or MA model.
///
/// Coefficients are stored in ascending degree order (constant term
/// first): index `k` holds the coefficient of `z^k`, and the constant
/// term is always 1. The sign convention is fixed per kind:
///
/// - AR(p): `1 - c1·z - c2·z² - … - cp·z^p`
/// - MA(q): `1 + c1·z + c2·z² + … + cq·z^q`
///
/// The root solver consumes the same ascending ordering, so the pair
/// stays self-consistent end to end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CharacteristicPolynomial {
    /// Ascending-degree coefficients; `coeffs[k]` multiplies `z^k`.
    coeffs: Vec<f64>,
}

impl CharacteristicPolynomial {
    /// Builds the characteristic polynomial for `coefficients` under the
    /// sign convention selected by `kind`.
    pub fn build(coefficients: &CoefficientVector, kind: ModelKind) -> Self {
        let mut coeffs = Vec::with_capacity(coefficients.order() + 1);
        coeffs.push(1.0);
        match kind {
            ModelKind::Ar => coeffs.extend(coefficients.values().iter().map(|c| -c)),
            ModelKind::Ma => coeffs.extend_from_slice(coefficients.values()),
        }
        Self { coeffs }
    }

    /// Wraps raw ascending-degree coefficients.
    ///
    /// Intended for boundary layers that carry polynomial coefficients
    /// directly; [`CharacteristicPolynomial::build`] is the normal path.
    ///
    /// # Errors
    ///
    /// [`PolyError::DegreeMismatch`] if the degree implied by
    /// `coeffs.len()` does not equal `order`.
    pub fn from_raw(coeffs: Vec<f64>, order: usize) -> Result<Self, PolyError> {
        if coeffs.len() != order + 1 {
            return Err(PolyError::DegreeMismatch {
                degree: coeffs.len().saturating_sub(1),
                order,
            });
        }
        Ok(Self { coeffs })
    }

    /// Ascending-degree coefficients (`coefficients()[k]` multiplies `z^k`).
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Nominal degree: the order of the coefficient vector the polynomial
    /// was built from. A zero highest-lag model coefficient lowers the
    /// *effective* degree used by the solver.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Computes all complex roots of this polynomial.
    ///
    /// Returns one root per unit of effective degree (multiplicities
    /// appear as clustered approximate roots), in no particular order.
    /// A polynomial that is constant after trimming zero leading terms
    /// has no roots and yields an empty vector.
    ///
    /// # Errors
    ///
    /// [`PolyError::NonFiniteRoot`] if the eigenvalue decomposition
    /// produces a non-finite value.
    pub fn roots(&self) -> Result<Vec<Complex<f64>>, PolyError> {
        solver::solve(&self.coeffs)
    }
}
