use clap::Parser;
use log::{error, info};
use std::process::ExitCode;
use thermtop::app;
use thermtop::cli::{self, Cli};
use thermtop::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("{}", cli::version_text());
        return ExitCode::SUCCESS;
    }

    if let Err(e) = logging::init(&cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting thermtop v{}", env!("CARGO_PKG_VERSION"));

    let result = match app::load_config(&cli) {
        Ok(config) => app::run_dashboard(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Log output never reaches the terminal; report once there
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
