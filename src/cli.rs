use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tsdiag_poly::ModelKind;

/// tsdiag time-series model stability diagnostics.
#[derive(Parser)]
#[command(
    name = "tsdiag",
    version,
    about = "Time-series model stability diagnostics"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Check an AR model's stationarity condition.
    Stationarity(CheckArgs),
    /// Check an MA model's invertibility condition.
    Invertibility(CheckArgs),
    /// Check a batch of models from a JSON file.
    Batch(BatchArgs),
}

/// Arguments shared by the two single-model check subcommands.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Model coefficients, comma and/or whitespace separated (e.g. "0.5,-0.3").
    #[arg(short, long)]
    pub coefficients: String,

    /// Also print the stability margin analysis.
    #[arg(short, long)]
    pub analysis: bool,

    /// Propose a coefficient adjustment when the check fails.
    #[arg(short, long)]
    pub suggest: bool,
}

/// Arguments for the `batch` subcommand.
#[derive(clap::Args)]
pub struct BatchArgs {
    /// Path to a JSON object mapping model names to coefficient arrays.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Model kind applied to every entry.
    #[arg(short, long, value_enum, default_value_t = KindArg::Ar)]
    pub kind: KindArg,

    /// Write the full summary as JSON to this path instead of a stdout table.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// CLI mirror of the engine's model kind.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Autoregressive (stationarity check).
    Ar,
    /// Moving-average (invertibility check).
    Ma,
}

impl From<KindArg> for ModelKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Ar => ModelKind::Ar,
            KindArg::Ma => ModelKind::Ma,
        }
    }
}
