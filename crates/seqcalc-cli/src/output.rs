//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigUint;
use serde::Serialize;

use seqcalc_core::SequenceKind;

/// How a generated sequence is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bracketed, comma-separated list: `[1, 4, 9]`.
    #[default]
    List,
    /// JSON object with decimal-string values.
    Json,
    /// One term per line.
    Lines,
}

#[derive(Serialize)]
struct JsonSequence {
    sequence: SequenceKind,
    length: usize,
    values: Vec<String>,
}

/// Render `values` as `[a, b, c]`.
#[must_use]
pub fn format_list(values: &[BigUint]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Render `values` one per line, without a trailing newline.
#[must_use]
pub fn format_lines(values: &[BigUint]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render `values` as a JSON document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_json(kind: SequenceKind, values: &[BigUint]) -> serde_json::Result<String> {
    serde_json::to_string(&JsonSequence {
        sequence: kind,
        length: values.len(),
        values: values.iter().map(ToString::to_string).collect(),
    })
}

/// Render `values` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(
    format: OutputFormat,
    kind: SequenceKind,
    values: &[BigUint],
) -> serde_json::Result<String> {
    match format {
        OutputFormat::List => Ok(format_list(values)),
        OutputFormat::Lines => Ok(format_lines(values)),
        OutputFormat::Json => format_json(kind, values),
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write rendered output to a file, followed by a newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, rendered: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{rendered}")?;
    tracing::debug!(path, bytes = rendered.len(), "output written");
    Ok(())
}
