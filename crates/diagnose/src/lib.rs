//! Stability and invertibility diagnostics for AR/MA models.
//!
//! This crate is the downstream half of the diagnostic pipeline: it takes
//! the characteristic roots produced by [`tsdiag_poly`], classifies each
//! against the unit circle, aggregates a verdict and a stability margin,
//! proposes coefficient adjustments for failing models, and runs batches
//! of models for comparison.
//!
//! # Pipeline
//!
//! ```text
//!  ┌────────────┐     ┌───────────┐     ┌──────────┐     ┌───────────┐
//!  │  classify  │────▶│  verdict  │────▶│  margin  │────▶│  suggest  │
//!  │  (per root)│     │  (check)  │     │          │     │  (if fail)│
//!  └────────────┘     └───────────┘     └──────────┘     └───────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use tsdiag_diagnose::stationarity_check;
//! use tsdiag_poly::CoefficientVector;
//!
//! let coeffs = CoefficientVector::new(vec![0.5]).unwrap();
//! let result = stationarity_check(&coeffs).unwrap();
//! assert!(result.passed());
//! assert_eq!(result.roots().len(), 1);
//! ```

pub mod api;
pub mod batch;
pub mod check;
pub mod classify;
pub mod error;
pub mod margin;
pub mod suggest;

pub use api::{compare_models, quick_ar_check, quick_arma_check, quick_ma_check};
pub use batch::{batch_check, batch_check_str, BatchEntry, BatchOutcome, BatchSummary, RankedModel};
pub use check::{check, invertibility_check, stationarity_check, StabilityResult};
pub use classify::{classify_roots, RiskLevel, Root};
pub use error::DiagnoseError;
pub use margin::{analyze_stability, StabilityMargin};
pub use suggest::{suggest_adjustment, Suggestion};

// The poly-crate input types are part of this crate's signatures.
pub use tsdiag_poly::{CoefficientVector, ModelKind};
