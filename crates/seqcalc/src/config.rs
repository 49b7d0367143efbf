//! Application configuration from CLI flags and environment.

use clap::builder::PossibleValuesParser;
use clap::Parser;

use seqcalc_cli::OutputFormat;
use seqcalc_core::SequenceKind;

/// Compute well-known mathematical sequences iteratively.
#[derive(Parser, Debug)]
#[command(name = "seqcalc", version, about)]
pub struct AppConfig {
    /// Name of the sequence.
    #[arg(
        short,
        long,
        env = "SEQCALC_SEQUENCE",
        required_unless_present = "completion",
        value_parser = PossibleValuesParser::new(SequenceKind::ALL.map(SequenceKind::as_str))
    )]
    pub sequence: Option<String>,

    /// Length of the computed sequence.
    #[arg(
        short,
        long,
        env = "SEQCALC_LENGTH",
        required_unless_present = "completion",
        allow_negative_numbers = true
    )]
    pub length: Option<i64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::List)]
    pub format: OutputFormat,

    /// Also write the rendered sequence to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Show the sequence name, length, duration and size of the last term.
    #[arg(short, long)]
    pub details: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
