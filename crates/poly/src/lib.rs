//! Characteristic polynomials for AR/MA model diagnostics.
//!
//! This crate covers the input half of the diagnostic pipeline: parsing
//! and validating model coefficients, building the characteristic
//! polynomial under the AR or MA sign convention, and computing its
//! complex roots.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────────────┐     ┌───────────────────────────┐     ┌─────────────┐
//!  │  CoefficientVector │────▶│  CharacteristicPolynomial │────▶│   .roots()  │
//!  │  (parse/validate)  │     │  (sign convention)        │     │  (solve)    │
//!  └────────────────────┘     └───────────────────────────┘     └─────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use tsdiag_poly::{CharacteristicPolynomial, CoefficientVector, ModelKind};
//!
//! let coeffs = CoefficientVector::parse("0.5, -0.3").unwrap();
//! let poly = CharacteristicPolynomial::build(&coeffs, ModelKind::Ar);
//! let roots = poly.roots().unwrap();
//! assert_eq!(roots.len(), 2);
//! ```

pub mod characteristic;
pub mod coeffs;
pub mod error;
pub mod kind;

pub(crate) mod solver;

pub use characteristic::CharacteristicPolynomial;
pub use coeffs::CoefficientVector;
pub use error::PolyError;
pub use kind::ModelKind;
