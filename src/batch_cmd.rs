//! Batch command: check every model in a JSON file.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tracing::info;

use tsdiag_diagnose::{batch_check, BatchOutcome, BatchSummary};
use tsdiag_poly::ModelKind;

use crate::cli::BatchArgs;

/// Runs the batch check over a JSON model file. Returns the process exit
/// code: 0 when every entry passes, 1 otherwise.
pub fn run(args: BatchArgs) -> Result<i32> {
    let raw = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read batch file: {}", args.input.display()))?;
    // BTreeMap gives identical inputs a deterministic entry order.
    let models: BTreeMap<String, Vec<f64>> =
        serde_json::from_str(&raw).context("failed to parse batch JSON")?;
    let models: Vec<(String, Vec<f64>)> = models.into_iter().collect();

    let kind = ModelKind::from(args.kind);
    info!(
        n_models = models.len(),
        property = kind.property(),
        "running batch check"
    );
    let summary = batch_check(&models, kind);

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&summary)
            .context("failed to serialise batch summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write summary: {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    } else {
        render_summary(&summary);
    }

    Ok(if summary.pass_count == summary.entries.len() {
        0
    } else {
        1
    })
}

fn render_summary(summary: &BatchSummary) {
    for entry in &summary.entries {
        match &entry.outcome {
            BatchOutcome::Checked { result, margin } => {
                let verdict = if result.passed() { "PASS" } else { "FAIL" };
                println!(
                    "{}: {} (margin {:.6}, risk {})",
                    entry.name,
                    verdict,
                    margin.margin(),
                    margin.risk()
                );
            }
            BatchOutcome::Error { message } => {
                println!("{}: error: {}", entry.name, message);
            }
        }
    }

    println!();
    println!(
        "pass rate: {}/{} ({:.1}%)",
        summary.pass_count,
        summary.entries.len(),
        summary.pass_rate * 100.0
    );
    if let Some(best) = summary.best() {
        println!("most stable:  {} (margin {:.6})", best.name, best.margin);
    }
    if let Some(worst) = summary.worst() {
        println!("least stable: {} (margin {:.6})", worst.name, worst.margin);
    }
}
