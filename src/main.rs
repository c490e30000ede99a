use std::process::ExitCode;

use clap::Parser;

use harmonic::Cli;
use harmonic::cli::{Output, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Shown even under --quiet
            Output::new(false, false, OutputFormat::Text, 0).error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
