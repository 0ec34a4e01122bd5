// ==============================================================================
// main.rs - Lambda Entry Point
// ==============================================================================
// Description: Computes the genomic inflation factor for each GWAS result file
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 0.2.0
// ==============================================================================

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gwas_lambda::cli::Args;
use gwas_lambda::config::RunConfig;
use gwas_lambda::output::ReportWriter;
use gwas_lambda::processor::LambdaProcessor;

fn main() -> ExitCode {
    // Logs go to stderr so the report on stdout stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gwas_lambda=info,lambda=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    // Option conflicts abort before any file is opened
    let config = RunConfig::from_args(args)?;
    info!(
        "Computing lambda for {} file(s) from field '{}' ({})",
        config.inputs.len(),
        config.stat_field,
        config.semantics
    );

    let mut writer = ReportWriter::new(io::stdout().lock(), config.format);
    let processor = LambdaProcessor::new(config)?;

    processor.process_all(|report| writer.write(report))
}
