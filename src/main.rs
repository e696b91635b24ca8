use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::info;
use whoreacted::app::{self, Cli};
use whoreacted::params::Params;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the name list
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whoreacted=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match Params::new() {
        Ok(params) => {
            info!(?params, "Application parameters loaded");
            app::run(&cli, &params, &mut io::stdout().lock()).await
        }
        Err(err) => Err(err),
    };

    app::exit_code(&result)
}
