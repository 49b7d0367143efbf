//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};

use seqcalc_cli::output::{render, write_to_file};
use seqcalc_cli::presenter::CLIResultPresenter;
use seqcalc_core::SequenceError;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        seqcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let name = config
        .sequence
        .as_deref()
        .ok_or_else(|| SequenceError::InvalidArgument("missing --sequence".into()))?;
    let length = config
        .length
        .ok_or_else(|| SequenceError::InvalidArgument("missing --length".into()))?;

    let (generator, length) = seqcalc_core::resolve(name, length)?;

    tracing::info!(sequence = name, length, generator = generator.name(), "generating");
    let start = Instant::now();
    let values = generator.generate(length);
    let duration = start.elapsed();

    let rendered =
        render(config.format, generator.kind(), &values).context("failed to render sequence")?;

    let presenter = CLIResultPresenter::new(config.details);
    presenter.present_result(generator.kind(), &values, duration, &rendered);

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_to_file(path, &rendered)
            .map_err(|err| SequenceError::Io(format!("{path}: {err}")))?;
    }

    Ok(())
}
