//! Executing parsed commands against a Poisson process.

use crate::args::{Args, Command};
use crate::error::CliError;
use crate::output::{format_float, CommandOutput};
use poisson_core::PoissonProcess;
use poisson_env::EntropySource;
use std::io::Write;
use tracing::debug;

/// Runs one command and returns its result.
pub fn execute<E: EntropySource>(
    process: &mut PoissonProcess<E>,
    command: &Command,
) -> Result<CommandOutput, CliError> {
    debug!(command = command.name(), mode = %process.config().mode, "running command");

    let output = match command {
        Command::Pmf(a) => CommandOutput::Probability {
            value: process.pmf(a.rate, a.duration, a.number)?,
        },
        Command::Cdf(a) => CommandOutput::Probability {
            value: process.cdf(a.rate, a.duration, a.number)?,
        },
        Command::SampleArrivalTimes(a) => CommandOutput::ArrivalTimes {
            values: process.sample_arrival_times(a.rate, a.number, a.seed)?,
        },
        Command::SampleNumberArrivals(a) => CommandOutput::ArrivalCount {
            value: process.sample_number_arrivals(a.rate, a.duration, a.seed)?,
        },
    };

    Ok(output)
}

/// Runs the command selected by `args` and writes the rendered result.
///
/// Arrival times in text mode are written one line per draw as they are
/// sampled, so the count is not bounded by memory.
pub fn run<E, W>(args: &Args, process: &mut PoissonProcess<E>, out: &mut W) -> Result<(), CliError>
where
    E: EntropySource,
    W: Write,
{
    match &args.command {
        Command::SampleArrivalTimes(a) if !args.json => {
            debug!(command = args.command.name(), mode = %process.config().mode, "streaming command");
            for arrival in process.arrival_times(a.rate, a.number, a.seed)? {
                writeln!(out, "{}", format_float(arrival?, args.precision))?;
            }
        }
        command => {
            let output = execute(process, command)?;
            let rendered = if args.json {
                output.render_json(command.name(), process.config().mode)?
            } else {
                output.render_text(args.precision)
            };
            out.write_all(rendered.as_bytes())?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{ArrivalTimesArgs, IntervalArgs, NumberArrivalsArgs};
    use clap::Parser;
    use poisson_core::{PoissonError, ProcessConfig};
    use poisson_env::ScriptedEntropy;

    fn process(config: ProcessConfig) -> PoissonProcess<ScriptedEntropy> {
        PoissonProcess::with_entropy(config, ScriptedEntropy::new([5]))
    }

    fn run_argv(argv: &[&str]) -> Result<String, CliError> {
        let args = Args::try_parse_from(std::iter::once("poisson-process").chain(argv.iter().copied()))
            .expect("arguments parse");
        let mut process = process(args.config());
        let mut out = Vec::new();
        run(&args, &mut process, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8 output"))
    }

    #[test]
    fn test_execute_pmf_and_cdf() {
        let mut process = process(ProcessConfig::default());
        let interval = IntervalArgs { rate: 2.0, duration: 1.0, number: 0 };

        let pmf = execute(&mut process, &Command::Pmf(interval.clone())).unwrap();
        let cdf = execute(&mut process, &Command::Cdf(interval)).unwrap();

        assert_eq!(pmf, CommandOutput::Probability { value: (-2.0f64).exp() });
        assert_eq!(pmf, cdf);
    }

    #[test]
    fn test_execute_sampling() {
        let mut process = process(ProcessConfig::default());

        let times = execute(
            &mut process,
            &Command::SampleArrivalTimes(ArrivalTimesArgs { rate: 2.0, number: 6, seed: 42 }),
        )
        .unwrap();
        match times {
            CommandOutput::ArrivalTimes { values } => {
                assert_eq!(values.len(), 6);
                assert!(values.windows(2).all(|w| w[0] < w[1]));
            }
            other => panic!("unexpected output {:?}", other),
        }

        let count = execute(
            &mut process,
            &Command::SampleNumberArrivals(NumberArrivalsArgs { rate: 0.0, duration: 5.0, seed: 1 }),
        )
        .unwrap();
        assert_eq!(count, CommandOutput::ArrivalCount { value: 0 });
    }

    #[test]
    fn test_execute_strict_rejection() {
        let mut process = process(ProcessConfig::strict());
        let result = execute(
            &mut process,
            &Command::Pmf(IntervalArgs { rate: -1.0, duration: 1.0, number: 0 }),
        );
        assert!(matches!(
            result,
            Err(CliError::Poisson(PoissonError::InvalidParameter { .. }))
        ));
    }

    #[test]
    fn test_run_text_output() {
        assert_eq!(run_argv(&["pmf", "2.0", "1.0", "0"]).unwrap(), "0.1353352832366127\n");
        assert_eq!(run_argv(&["sample-number-arrivals", "0", "5", "1"]).unwrap(), "0\n");

        let lines = run_argv(&["sample-arrival-times", "1.0", "4", "9"]).unwrap();
        let values: Vec<f64> = lines.lines().map(|l| l.parse().unwrap()).collect();
        assert_eq!(values.len(), 4);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_run_seeded_output_is_reproducible() {
        let argv = ["sample-arrival-times", "3.0", "5", "1234"];
        assert_eq!(run_argv(&argv).unwrap(), run_argv(&argv).unwrap());
    }

    #[test]
    fn test_run_zero_seed_uses_entropy() {
        // The scripted entropy hands out seed 5
        assert_eq!(
            run_argv(&["sample-arrival-times", "3.0", "5", "0"]).unwrap(),
            run_argv(&["sample-arrival-times", "3.0", "5", "5"]).unwrap()
        );
    }

    #[test]
    fn test_run_json_output() {
        let rendered = run_argv(&["cdf", "2", "1", "0", "--json", "--strict"]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed["command"], "cdf");
        assert_eq!(parsed["mode"], "strict");
        assert_eq!(parsed["output"]["kind"], "probability");
        let value = parsed["output"]["value"].as_f64().unwrap();
        assert!((value - (-2.0f64).exp()).abs() < 1e-15);
    }

    /// Accepts `limit` bytes, then fails every write.
    struct BoundedSink {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for BoundedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let room = self.limit - self.written.len();
            if room == 0 {
                return Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "sink full"));
            }
            let n = buf.len().min(room);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_streams_huge_arrival_counts() {
        let args = Args::try_parse_from([
            "poisson-process",
            "sample-arrival-times",
            "1",
            "18446744073709551615",
            "1",
        ])
        .unwrap();
        let mut process = process(args.config());
        let mut sink = BoundedSink { written: Vec::new(), limit: 4096 };

        // Lines reach the writer before sampling finishes; the full sink stops the run
        assert!(matches!(run(&args, &mut process, &mut sink), Err(CliError::Io(_))));
        assert_eq!(sink.written.len(), 4096);

        let text = String::from_utf8(sink.written).unwrap();
        let mut lines: Vec<&str> = text.lines().collect();
        lines.pop(); // cut off by the sink
        let complete: Vec<f64> = lines.iter().map(|l| l.parse().unwrap()).collect();
        assert!(complete.len() > 10);
        assert!(complete.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_run_streamed_text_matches_json_values() {
        let text = run_argv(&["sample-arrival-times", "2.0", "6", "17"]).unwrap();
        let json = run_argv(&["sample-arrival-times", "2.0", "6", "17", "--json"]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["output"]["kind"], "arrival_times");
        let from_json: Vec<f64> = parsed["output"]["values"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        let from_text: Vec<f64> = text.lines().map(|l| l.parse().unwrap()).collect();

        assert_eq!(from_text.len(), 6);
        for (a, b) in from_text.iter().zip(&from_json) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_run_strict_error_writes_nothing() {
        let args = Args::try_parse_from(["poisson-process", "--strict", "pmf", "1", "-2", "0"]).unwrap();
        let mut process = process(args.config());
        let mut out = Vec::new();

        assert!(run(&args, &mut process, &mut out).is_err());
        assert!(out.is_empty());
    }
}
