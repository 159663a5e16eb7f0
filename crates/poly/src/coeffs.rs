//! Validated model coefficient vectors.

use std::str::FromStr;

use serde::Serialize;

use crate::error::PolyError;

/// An ordered, validated sequence of real AR or MA coefficients.
///
/// Construction enforces the two engine-wide input invariants: the
/// vector is non-empty (model order at least 1) and every coefficient is
/// finite. Instances are immutable once built.
///
/// # Example
///
/// ```
/// use tsdiag_poly::CoefficientVector;
///
/// let coeffs = CoefficientVector::parse("0.5, -0.3 0.1").unwrap();
/// assert_eq!(coeffs.order(), 3);
/// assert_eq!(coeffs.values(), &[0.5, -0.3, 0.1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CoefficientVector {
    values: Vec<f64>,
}

impl CoefficientVector {
    /// Validates and wraps a coefficient vector.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`PolyError::EmptyCoefficients`] | `values` is empty |
    /// | [`PolyError::NonFiniteCoefficient`] | any element is NaN or infinite |
    pub fn new(values: Vec<f64>) -> Result<Self, PolyError> {
        if values.is_empty() {
            return Err(PolyError::EmptyCoefficients);
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(PolyError::NonFiniteCoefficient { index, value });
            }
        }
        Ok(Self { values })
    }

    /// Parses a delimited coefficient string.
    ///
    /// Numbers may be separated by commas, whitespace, or any mix of the
    /// two; whitespace around separators is trimmed. Negative numbers,
    /// decimal points, and scientific notation are all legal tokens.
    ///
    /// # Errors
    ///
    /// [`PolyError::ParseToken`] names the first token that is not a
    /// number; [`PolyError::EmptyCoefficients`] if the string contains no
    /// tokens at all. Tokens spelling non-finite values ("nan", "inf")
    /// parse as numbers but are rejected by the finiteness check.
    pub fn parse(input: &str) -> Result<Self, PolyError> {
        let mut values = Vec::new();
        for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let value = token.parse::<f64>().map_err(|_| PolyError::ParseToken {
                token: token.to_string(),
            })?;
            values.push(value);
        }
        Self::new(values)
    }

    /// Model order (`p` for AR, `q` for MA): the number of coefficients.
    pub fn order(&self) -> usize {
        self.values.len()
    }

    /// The coefficients as a slice, in lag order (`c1..cp`).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns a copy with every coefficient multiplied by `factor`.
    ///
    /// `factor` must be finite so the result upholds the construction
    /// invariants. Shrinking toward zero moves the characteristic roots
    /// away from the origin; the suggestion engine relies on this.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            values: self.values.iter().map(|v| v * factor).collect(),
        }
    }
}

impl FromStr for CoefficientVector {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
