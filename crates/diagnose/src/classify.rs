//! Per-root classification against the unit circle.

use std::fmt;

use num_complex::Complex;
use serde::Serialize;

/// Numerical tolerance for the outside-the-unit-circle test.
///
/// A root of magnitude exactly 1 (a unit root) must fail the test, but
/// eigenvalue extraction carries rounding error, so "outside" means
/// `|z| > 1 + tol`.
pub(crate) const UNIT_CIRCLE_TOL: f64 = 1e-10;

/// Distance from the unit circle above which a root is considered safe.
///
/// Shared by the per-root risk tier and the aggregate margin band; a
/// fixed design constant, not configurable per call.
pub(crate) const LOW_RISK_MARGIN: f64 = 0.1;

/// Discrete risk tier for a root's proximity to the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Comfortably outside the unit circle (distance above 0.1).
    Low,
    /// Outside the unit circle but within 0.1 of it.
    Medium,
    /// On or inside the unit circle.
    High,
}

impl RiskLevel {
    /// Classifies a signed distance from the unit circle.
    pub fn from_distance(distance: f64) -> Self {
        if distance <= 0.0 {
            Self::High
        } else if distance <= LOW_RISK_MARGIN {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{label}")
    }
}

/// A characteristic root with its derived position diagnostics.
///
/// Produced fresh per analysis call and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Root {
    real: f64,
    imag: f64,
    magnitude: f64,
    distance: f64,
    risk: RiskLevel,
}

impl Root {
    /// Classifies one complex root.
    pub fn classify(value: Complex<f64>) -> Self {
        let magnitude = value.norm();
        let distance = magnitude - 1.0;
        Self {
            real: value.re,
            imag: value.im,
            magnitude,
            distance,
            risk: RiskLevel::from_distance(distance),
        }
    }

    /// The root as a complex number.
    pub fn value(&self) -> Complex<f64> {
        Complex::new(self.real, self.imag)
    }

    /// Real part.
    pub fn real(&self) -> f64 {
        self.real
    }

    /// Imaginary part.
    pub fn imag(&self) -> f64 {
        self.imag
    }

    /// Distance from the origin, `|z|`.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Signed distance from the unit circle, `|z| - 1`.
    pub fn distance_from_unit_circle(&self) -> f64 {
        self.distance
    }

    /// Risk tier for this root's position.
    pub fn risk(&self) -> RiskLevel {
        self.risk
    }

    /// Whether the root lies strictly outside the unit circle, using the
    /// engine-wide numerical tolerance.
    pub fn is_outside_unit_circle(&self) -> bool {
        self.magnitude > 1.0 + UNIT_CIRCLE_TOL
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.real)?;
        if self.imag != 0.0 {
            write!(f, "{:+.6}i", self.imag)?;
        }
        write!(f, " (|z|={:.6})", self.magnitude)
    }
}

/// Classifies a set of roots and orders them ascending by magnitude.
///
/// The ascending order makes results deterministic and puts the root
/// driving any instability first.
pub fn classify_roots(values: &[Complex<f64>]) -> Vec<Root> {
    let mut roots: Vec<Root> = values.iter().map(|&v| Root::classify(v)).collect();
    roots.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
    roots
}
