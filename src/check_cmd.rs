//! Single-model check command: parse, check, render, exit code.

use anyhow::{Context, Result};
use tracing::info;

use tsdiag_diagnose::{analyze_stability, check, suggest_adjustment, StabilityResult};
use tsdiag_poly::{CoefficientVector, ModelKind};

use crate::cli::CheckArgs;

/// Runs a stationarity or invertibility check. Returns the process exit
/// code: 0 when the check passes, 1 when it fails.
pub fn run(args: CheckArgs, kind: ModelKind) -> Result<i32> {
    let coefficients = CoefficientVector::parse(&args.coefficients)
        .with_context(|| format!("failed to parse {} coefficients", kind.symbol()))?;
    info!(
        order = coefficients.order(),
        property = kind.property(),
        "checking model"
    );

    let result = check(&coefficients, kind)?;
    render_result(&result);

    if args.analysis {
        let margin = analyze_stability(&coefficients, kind)?;
        println!();
        println!("margin: {:.6}", margin.margin());
        println!("risk:   {}", margin.risk());
    }

    if args.suggest && !result.passed() {
        println!();
        match suggest_adjustment(&coefficients, kind)? {
            Some(suggestion) => {
                println!(
                    "suggested {} coefficients (scaled by {:.6}): {:?}",
                    kind.symbol(),
                    suggestion.shrink_factor(),
                    suggestion.coefficients().values()
                );
                println!("predicted margin: {:.6}", suggestion.predicted_margin());
            }
            None => println!("no stabilising adjustment found"),
        }
    }

    Ok(if result.passed() { 0 } else { 1 })
}

fn render_result(result: &StabilityResult) {
    let verdict = if result.passed() { "PASS" } else { "FAIL" };
    println!("{}: {}", result.kind().property(), verdict);
    println!("{}", result.message());
    for (i, root) in result.roots().iter().enumerate() {
        let mark = if root.is_outside_unit_circle() {
            "ok"
        } else {
            "!!"
        };
        println!("  root {}: {} [{}]", i + 1, root, mark);
    }
}
