mod batch_cmd;
mod check_cmd;
mod cli;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use tsdiag_poly::ModelKind;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}

fn run(command: Command) -> Result<i32> {
    match command {
        Command::Stationarity(args) => check_cmd::run(args, ModelKind::Ar),
        Command::Invertibility(args) => check_cmd::run(args, ModelKind::Ma),
        Command::Batch(args) => batch_cmd::run(args),
    }
}
