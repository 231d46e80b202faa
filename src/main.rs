use std::process::ExitCode;

use clap::Parser;
use tasktrack::bootstrap::{self, config::resolve_config};
use tasktrack::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Command failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&args.global)?;
    let sync = bootstrap::wiring::wire_dependencies(&config)?;
    cli::execute(&sync, args.command, &mut std::io::stdout()).await
}
