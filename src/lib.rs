pub mod cli;
pub mod config;
pub mod consultation;
pub mod knowledge;
pub mod messages;
pub mod models;
pub mod narrative;
pub mod normalizer;
pub mod questionnaire;
pub mod reasoning;
pub mod synthesizer;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub fn run() -> std::process::ExitCode {
    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let args = cli::Args::parse();
    let engine_config = config::EngineConfig::from_env();

    match cli::execute(args, &engine_config) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Consultation run failed");
            eprintln!("error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
