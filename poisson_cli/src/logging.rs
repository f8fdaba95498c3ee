//! Tracing subscriber setup for the binary.

use crate::error::CliError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Builds the log filter.
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` is honoured and
/// the fallback is `warn`, so a plain run prints nothing on stderr.
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Installs the global subscriber writing to stderr.
pub fn init_tracing(verbose: bool) -> Result<(), CliError> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::Logging(e.to_string()))
}

