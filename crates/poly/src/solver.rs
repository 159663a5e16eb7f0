//! Polynomial root solving via companion-matrix eigendecomposition.
//!
//! For a polynomial `p(z) = a0 + a1·z + … + an·zⁿ` (ascending order),
//! the monic normalisation's companion matrix has the roots of `p` as
//! its eigenvalues:
//!
//! ```text
//! C = [ 0   0   …   0   -a0/an  ]
//!     [ 1   0   …   0   -a1/an  ]
//!     [ 0   1   …   0   -a2/an  ]
//!     [ .   .   …   .     .     ]
//!     [ 0   0   …   1  -a_{n-1}/an ]
//! ```
//!
//! Eigenvalues are extracted with nalgebra's real Schur decomposition,
//! which degrades gracefully on ill-conditioned input (approximate
//! clustered roots rather than outright failure).
//!
//! **Not part of the public API.**

use nalgebra::DMatrix;
use num_complex::Complex;

use crate::error::PolyError;

/// Computes all complex roots of a real polynomial given in ascending
/// degree order (`coeffs[k]` multiplies `z^k`).
///
/// Zero leading (highest-degree) coefficients are trimmed first: a zero
/// highest-lag model coefficient lowers the effective degree rather than
/// producing a singular companion matrix. A polynomial that is constant
/// after trimming has no roots.
///
/// # Errors
///
/// [`PolyError::NonFiniteRoot`] if any eigenvalue is NaN or infinite.
pub(crate) fn solve(coeffs: &[f64]) -> Result<Vec<Complex<f64>>, PolyError> {
    let mut degree = coeffs.len().saturating_sub(1);
    while degree > 0 && coeffs[degree] == 0.0 {
        degree -= 1;
    }
    if degree == 0 {
        return Ok(Vec::new());
    }

    let leading = coeffs[degree];
    let mut companion = DMatrix::<f64>::zeros(degree, degree);
    for i in 1..degree {
        companion[(i, i - 1)] = 1.0;
    }
    for k in 0..degree {
        companion[(k, degree - 1)] = -coeffs[k] / leading;
    }

    let eigenvalues = companion.complex_eigenvalues();

    let mut roots = Vec::with_capacity(degree);
    for (index, ev) in eigenvalues.iter().enumerate() {
        if !ev.re.is_finite() || !ev.im.is_finite() {
            return Err(PolyError::NonFiniteRoot { index });
        }
        roots.push(Complex::new(ev.re, ev.im));
    }
    Ok(roots)
}
