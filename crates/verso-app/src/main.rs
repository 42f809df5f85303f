use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use verso_core::RunSummary;
use verso_translator::{Enricher, OpenAiEnricher};

mod cli;
mod logging;

use self::cli::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    dotenvy::dotenv().ok();

    let args = Args::parse();
    logging::init(args.verbose, args.log_json);

    match run(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<RunSummary> {
    let config = args.resolve_config()?;
    let output = args.output_path();

    let enricher =
        OpenAiEnricher::new(&config.enricher).context("Failed to initialize HTTP client")?;
    tracing::debug!(
        "Using {} at {}",
        enricher.metadata().name,
        config.enricher.chat_completions_url()
    );

    let summary = verso_core::run(&args.input, &output, &config, &enricher).await?;
    Ok(summary)
}
