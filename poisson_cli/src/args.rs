//! Command-line arguments.

use clap::{Args as ClapArgs, Parser, Subcommand};
use poisson_core::{ParameterMode, ProcessConfig};

/// Poisson process probabilities and reproducible sampling
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "poisson-process")]
#[command(
    about = "Evaluate and sample a Poisson process N with arrival rate L",
    long_about = "Calculates P(N(t+s) - N(t) {=|<=} k) = exp(-L*s) * (L*s)**k / k! for a Poisson \
                  process N with rate of arrivals L, over an interval of length s, for k arrivals; \
                  or samples arrival times and arrival counts from seeded random streams."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Reject negative or non-finite rates and durations
    #[arg(long, global = true)]
    pub strict: bool,

    /// JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Fixed number of decimals for floating-point output
    #[arg(short, long, global = true)]
    pub precision: Option<usize>,

    /// Verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Args {
    /// Builds the process configuration selected by the flags.
    pub fn config(&self) -> ProcessConfig {
        let mode = if self.strict {
            ParameterMode::Strict
        } else {
            ParameterMode::Permissive
        };
        ProcessConfig { mode }
    }
}

/// Subcommands, one per Poisson process operation.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Probability of exactly NUMBER arrivals in an interval
    Pmf(IntervalArgs),

    /// Probability of at most NUMBER arrivals in an interval
    Cdf(IntervalArgs),

    /// Sample a sequence of arrival time variates
    SampleArrivalTimes(ArrivalTimesArgs),

    /// Sample the number of arrivals in an interval
    SampleNumberArrivals(NumberArrivalsArgs),
}

impl Command {
    /// Returns the subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Pmf(_) => "pmf",
            Command::Cdf(_) => "cdf",
            Command::SampleArrivalTimes(_) => "sample-arrival-times",
            Command::SampleNumberArrivals(_) => "sample-number-arrivals",
        }
    }
}

/// Arguments of `pmf` and `cdf`.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct IntervalArgs {
    /// Rate of arrivals in Poisson process
    #[arg(allow_negative_numbers = true)]
    pub rate: f64,

    /// Duration of interval over which to calculate probability
    #[arg(allow_negative_numbers = true)]
    pub duration: f64,

    /// Number of arrivals to calculate probability for
    pub number: u64,
}

/// Arguments of `sample-arrival-times`.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct ArrivalTimesArgs {
    /// Rate of arrivals in Poisson process
    #[arg(allow_negative_numbers = true)]
    pub rate: f64,

    /// Number of arrival times to sample
    pub number: u64,

    /// Seed for random number generator (0 = fresh random seed)
    pub seed: u64,
}

/// Arguments of `sample-number-arrivals`.
#[derive(ClapArgs, Debug, Clone, PartialEq)]
pub struct NumberArrivalsArgs {
    /// Rate of arrivals in Poisson process
    #[arg(allow_negative_numbers = true)]
    pub rate: f64,

    /// Duration of interval in which to count arrivals
    #[arg(allow_negative_numbers = true)]
    pub duration: f64,

    /// Seed for random number generator (0 = fresh random seed)
    pub seed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("poisson-process").chain(argv.iter().copied()))
    }

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_pmf() {
        let args = parse(&["pmf", "2.0", "1.0", "0"]).unwrap();
        assert_eq!(
            args.command,
            Command::Pmf(IntervalArgs { rate: 2.0, duration: 1.0, number: 0 })
        );
        assert_eq!(args.command.name(), "pmf");
        assert_eq!(args.config(), ProcessConfig::permissive());
    }

    #[test]
    fn test_parse_sampling_commands() {
        let args = parse(&["sample-arrival-times", "1.5", "10", "42"]).unwrap();
        assert_eq!(
            args.command,
            Command::SampleArrivalTimes(ArrivalTimesArgs { rate: 1.5, number: 10, seed: 42 })
        );

        let args = parse(&["sample-number-arrivals", "0", "5", "1"]).unwrap();
        assert_eq!(
            args.command,
            Command::SampleNumberArrivals(NumberArrivalsArgs { rate: 0.0, duration: 5.0, seed: 1 })
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = parse(&["cdf", "2", "1", "3", "--strict", "--json", "-p", "4"]).unwrap();
        assert!(args.json);
        assert_eq!(args.precision, Some(4));
        assert_eq!(args.config(), ProcessConfig::strict());
    }

    #[test]
    fn test_parse_negative_rate() {
        let args = parse(&["pmf", "-1.5", "2", "1"]).unwrap();
        assert_eq!(
            args.command,
            Command::Pmf(IntervalArgs { rate: -1.5, duration: 2.0, number: 1 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse(&["pmf", "2.0", "1.0"]).is_err());
        assert!(parse(&["pmf", "abc", "1.0", "0"]).is_err());
        assert!(parse(&["sample-arrival-times", "1.0", "-3", "1"]).is_err());
        assert!(parse(&["matrix", "test", "file.txt"]).is_err());
        assert!(parse(&[]).is_err());
    }
}
