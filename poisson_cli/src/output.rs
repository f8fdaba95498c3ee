//! Rendering command results as text lines or JSON.

use crate::error::CliError;
use poisson_core::ParameterMode;
use serde::Serialize;

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutput {
    /// `pmf` / `cdf`
    Probability { value: f64 },

    /// `sample-arrival-times`
    ArrivalTimes { values: Vec<f64> },

    /// `sample-number-arrivals`
    ArrivalCount { value: u64 },
}

impl CommandOutput {
    /// Renders the output as newline-terminated lines, one value per line.
    pub fn render_text(&self, precision: Option<usize>) -> String {
        match self {
            CommandOutput::Probability { value } => format!("{}\n", format_float(*value, precision)),
            CommandOutput::ArrivalTimes { values } => values
                .iter()
                .map(|v| format!("{}\n", format_float(*v, precision)))
                .collect(),
            CommandOutput::ArrivalCount { value } => format!("{}\n", value),
        }
    }

    /// Renders the output as a single pretty-printed JSON document.
    ///
    /// Non-finite floats are encoded as `null`.
    pub fn render_json(&self, command: &str, mode: ParameterMode) -> Result<String, CliError> {
        let document = serde_json::json!({
            "command": command,
            "mode": mode,
            "output": self,
        });
        let mut rendered = serde_json::to_string_pretty(&document)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

/// Formats a float for text output.
///
/// With a precision, fixed-point with that many decimals. Without one, the
/// shortest representation that reads back to the same value, switching to
/// scientific notation for magnitudes below `1e-4` or from `1e16` up.
pub fn format_float(value: f64, precision: Option<usize>) -> String {
    if let Some(precision) = precision {
        return format!("{:.*}", precision, value);
    }

    let magnitude = value.abs();
    if value.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}
