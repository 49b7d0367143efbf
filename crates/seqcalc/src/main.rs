//! SeqCalc prints well-known integer sequences.

use std::process::ExitCode;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use seqcalc_lib::{app, config, errors, version};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    tracing::debug!(version = %version::full_version(), "starting");

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            seqcalc_cli::ui::print_error(&format!("{err:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
