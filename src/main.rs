//! Arg Lens - Terminal Entry Point

use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use arg_lens::cli::Cli;
use arg_lens::{run_analysis, AnalysisSession, ConfigService, PipelineContext};
use arg_lens_api::ApiClient;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_service = match &cli.config {
        Some(path) => ConfigService::from_path(path)?,
        None => ConfigService::new()?,
    };
    let mut config = config_service.get_config().clone();
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }

    let client = ApiClient::with_timeout(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    );
    let ctx = PipelineContext::new(&client)
        .with_llm_topics(config.prefer_llm_topic_model || cli.topic_llm);
    let session = AnalysisSession::new();

    let request = cli.to_request();
    match run_analysis(&session, &ctx, &request).await {
        Ok(report) => {
            println!("{}", report.render());
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}
