//! Poisson process CLI
//!
//! Evaluate probabilities of, and sample from, a Poisson process.

use clap::Parser;
use poisson_cli::{init_tracing, run, Args};
use poisson_core::PoissonProcess;
use std::io::BufWriter;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(args.verbose) {
        eprintln!("Warning: {}", e);
    }
    debug!(?args, "parsed arguments");

    let mut process = PoissonProcess::new(args.config());
    let mut stdout = BufWriter::new(std::io::stdout().lock());

    match run(&args, &mut process, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
