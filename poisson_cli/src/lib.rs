//! Poisson Process Command-Line Front End
//!
//! Parses the `poisson-process` command line, runs the selected operation
//! against a [`poisson_core::PoissonProcess`], and renders the result.
//!
//! # Usage
//!
//! ```text
//! poisson-process pmf                    <rate> <duration> <number>
//! poisson-process cdf                    <rate> <duration> <number>
//! poisson-process sample-arrival-times   <rate> <number>   <seed>
//! poisson-process sample-number-arrivals <rate> <duration> <seed>
//! ```
//!
//! Global flags: `--strict`, `--json`, `--precision <N>`, `--verbose`.

mod args;
mod commands;
mod error;
mod logging;
mod output;

pub use args::{Args, ArrivalTimesArgs, Command, IntervalArgs, NumberArrivalsArgs};
pub use commands::{execute, run};
pub use error::CliError;
pub use logging::{init_tracing, log_filter};
pub use output::{format_float, CommandOutput};
