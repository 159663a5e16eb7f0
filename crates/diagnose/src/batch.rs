//! Batch checking and cross-model comparison.

use rayon::prelude::*;
use serde::Serialize;
use tsdiag_poly::{CoefficientVector, ModelKind, PolyError};

use crate::check::{check, StabilityResult};
use crate::error::DiagnoseError;
use crate::margin::StabilityMargin;

/// Outcome of one batch entry.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchOutcome {
    /// The pipeline ran; the verdict itself may still be failing.
    Checked {
        /// Full check result for this entry.
        result: StabilityResult,
        /// Aggregate margin for this entry.
        margin: StabilityMargin,
    },
    /// The entry never reached a verdict (bad coefficients, solver failure).
    Error {
        /// Rendered error message.
        message: String,
    },
}

/// One named model within a batch, in input position.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    /// Caller-supplied model identifier.
    pub name: String,
    /// Zero-based position in the input.
    pub index: usize,
    /// What happened to this entry.
    pub outcome: BatchOutcome,
}

impl BatchEntry {
    /// Whether this entry reached a passing verdict.
    pub fn passed(&self) -> bool {
        matches!(&self.outcome, BatchOutcome::Checked { result, .. } if result.passed())
    }

    /// The entry's aggregate margin, if it was checked.
    pub fn margin(&self) -> Option<f64> {
        match &self.outcome {
            BatchOutcome::Checked { margin, .. } => Some(margin.margin()),
            BatchOutcome::Error { .. } => None,
        }
    }
}

/// A ranking row; rows are ordered most stable first.
#[derive(Debug, Clone, Serialize)]
pub struct RankedModel {
    /// Caller-supplied model identifier.
    pub name: String,
    /// Zero-based position in the batch input.
    pub index: usize,
    /// Aggregate stability margin.
    pub margin: f64,
    /// Whether the model passed its check.
    pub passed: bool,
}

/// Aggregate result of checking a batch of models.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// Per-entry outcomes, in input order.
    pub entries: Vec<BatchEntry>,
    /// Number of entries with a passing verdict.
    pub pass_count: usize,
    /// `pass_count / entries.len()`; 0.0 for an empty batch. Entries
    /// that errored count against the rate.
    pub pass_rate: f64,
    /// Entries that produced a margin, ranked by margin descending.
    pub ranking: Vec<RankedModel>,
}

impl BatchSummary {
    /// The most stable ranked model, if any entry produced a margin.
    pub fn best(&self) -> Option<&RankedModel> {
        self.ranking.first()
    }

    /// The least stable ranked model, if any entry produced a margin.
    pub fn worst(&self) -> Option<&RankedModel> {
        self.ranking.last()
    }
}

/// Checks every named model in `models` under `kind`.
///
/// Entries are evaluated in parallel; the output order always matches
/// the input order. A failing entry (invalid coefficients, solver
/// failure) is recorded in place without aborting the batch.
pub fn batch_check(models: &[(String, Vec<f64>)], kind: ModelKind) -> BatchSummary {
    let entries: Vec<BatchEntry> = models
        .par_iter()
        .enumerate()
        .map(|(index, (name, values))| BatchEntry {
            name: name.clone(),
            index,
            outcome: entry_outcome(CoefficientVector::new(values.clone()), kind),
        })
        .collect();

    summarize(entries)
}

/// Checks every named model given as a delimited coefficient string.
///
/// Same contract as [`batch_check`]; a string that fails to parse is
/// recorded as that entry's error.
pub fn batch_check_str(models: &[(String, String)], kind: ModelKind) -> BatchSummary {
    let entries: Vec<BatchEntry> = models
        .par_iter()
        .enumerate()
        .map(|(index, (name, raw))| BatchEntry {
            name: name.clone(),
            index,
            outcome: entry_outcome(CoefficientVector::parse(raw), kind),
        })
        .collect();

    summarize(entries)
}

fn entry_outcome(
    coefficients: Result<CoefficientVector, PolyError>,
    kind: ModelKind,
) -> BatchOutcome {
    match run_entry(coefficients, kind) {
        Ok(outcome) => outcome,
        Err(e) => BatchOutcome::Error {
            message: e.to_string(),
        },
    }
}

fn run_entry(
    coefficients: Result<CoefficientVector, PolyError>,
    kind: ModelKind,
) -> Result<BatchOutcome, DiagnoseError> {
    let coefficients = coefficients?;
    let result = check(&coefficients, kind)?;
    let margin = StabilityMargin::from_roots(result.roots());
    Ok(BatchOutcome::Checked { result, margin })
}

fn summarize(entries: Vec<BatchEntry>) -> BatchSummary {
    let pass_count = entries.iter().filter(|e| e.passed()).count();
    let pass_rate = if entries.is_empty() {
        0.0
    } else {
        pass_count as f64 / entries.len() as f64
    };

    let mut ranking: Vec<RankedModel> = entries
        .iter()
        .filter_map(|e| {
            e.margin().map(|margin| RankedModel {
                name: e.name.clone(),
                index: e.index,
                margin,
                passed: e.passed(),
            })
        })
        .collect();
    // Stable sort: ties keep input order.
    ranking.sort_by(|a, b| b.margin.total_cmp(&a.margin));

    BatchSummary {
        entries,
        pass_count,
        pass_rate,
        ranking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn named(models: &[(&str, &[f64])]) -> Vec<(String, Vec<f64>)> {
        models
            .iter()
            .map(|(name, values)| (name.to_string(), values.to_vec()))
            .collect()
    }

    #[test]
    fn output_order_matches_input_order() {
        let models = named(&[("c", &[0.3]), ("a", &[0.5]), ("b", &[1.1])]);
        let summary = batch_check(&models, ModelKind::Ar);
        let names: Vec<&str> = summary.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
        let indices: Vec<usize> = summary.entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn pass_rate_exact() {
        let models = named(&[("stationary", &[0.5]), ("nonstationary", &[1.1])]);
        let summary = batch_check(&models, ModelKind::Ar);
        assert_eq!(summary.pass_count, 1);
        assert_abs_diff_eq!(summary.pass_rate, 0.5, epsilon = f64::EPSILON);
    }

    #[test]
    fn empty_batch() {
        let summary = batch_check(&[], ModelKind::Ar);
        assert!(summary.entries.is_empty());
        assert_eq!(summary.pass_count, 0);
        assert_eq!(summary.pass_rate, 0.0);
        assert!(summary.best().is_none());
        assert!(summary.worst().is_none());
    }

    #[test]
    fn bad_entry_does_not_abort_batch() {
        let models = named(&[("good", &[0.5]), ("empty", &[]), ("bad", &[f64::NAN])]);
        let summary = batch_check(&models, ModelKind::Ar);
        assert_eq!(summary.entries.len(), 3);
        assert!(summary.entries[0].passed());
        assert!(matches!(
            summary.entries[1].outcome,
            BatchOutcome::Error { .. }
        ));
        assert!(matches!(
            summary.entries[2].outcome,
            BatchOutcome::Error { .. }
        ));
        // Errors count against the rate.
        assert_abs_diff_eq!(summary.pass_rate, 1.0 / 3.0, epsilon = f64::EPSILON);
        // And are excluded from the ranking.
        assert_eq!(summary.ranking.len(), 1);
    }

    #[test]
    fn ranking_descending_by_margin() {
        let models = named(&[("risky", &[0.95]), ("safe", &[0.2]), ("failing", &[1.1])]);
        let summary = batch_check(&models, ModelKind::Ar);
        let ranked: Vec<&str> = summary.ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(ranked, ["safe", "risky", "failing"]);
        assert_eq!(summary.best().unwrap().name, "safe");
        assert_eq!(summary.worst().unwrap().name, "failing");
        assert!(summary.best().unwrap().passed);
        assert!(!summary.worst().unwrap().passed);
    }

    #[test]
    fn ranking_tie_keeps_input_order() {
        let models = named(&[("first", &[0.5]), ("second", &[0.5])]);
        let summary = batch_check(&models, ModelKind::Ar);
        assert_eq!(summary.ranking[0].name, "first");
        assert_eq!(summary.ranking[1].name, "second");
    }

    #[test]
    fn string_batch_records_parse_errors() {
        let models = vec![
            ("ok".to_string(), "0.5, -0.3".to_string()),
            ("bad".to_string(), "0.5, oops".to_string()),
        ];
        let summary = batch_check_str(&models, ModelKind::Ma);
        assert!(summary.entries[0].passed());
        match &summary.entries[1].outcome {
            BatchOutcome::Error { message } => assert!(message.contains("oops")),
            other => panic!("expected error outcome, got {other:?}"),
        }
    }

    #[test]
    fn kind_applies_to_every_entry() {
        let models = named(&[("m", &[0.5, -0.3])]);
        let summary = batch_check(&models, ModelKind::Ma);
        match &summary.entries[0].outcome {
            BatchOutcome::Checked { result, .. } => {
                assert_eq!(result.kind(), ModelKind::Ma);
                assert_eq!(
                    result.characteristic_polynomial().coefficients(),
                    &[1.0, 0.5, -0.3]
                );
            }
            other => panic!("expected checked outcome, got {other:?}"),
        }
    }
}
