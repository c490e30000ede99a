//! Command-line interface for harmonic
//!
//! Parses arguments with clap, loads the layered configuration once and hands
//! both to the command implementations in [`commands`].

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::config::{HarmonicConfig, Settings};

pub mod commands;
mod output;

pub use output::{Output, OutputFormat};

/// harmonic - parallel partial sums of the harmonic series
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use custom configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Sum the first N terms of the harmonic series
    Sum(commands::sum::SumArgs),
    /// Approximate Euler's number with a truncated Taylor series
    Euler(commands::euler::EulerArgs),
    /// Show how N terms would be split between worker threads
    Partition(commands::partition::PartitionArgs),
    /// Find the first N whose partial sum exceeds a limit
    Threshold(commands::threshold::ThresholdArgs),
    /// Configuration management
    Config(commands::config::ConfigArgs),
    /// Show version information
    Version(commands::version::VersionArgs),
}

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    pub config: HarmonicConfig,
    pub settings: Settings,
    pub output: Output,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let Some(command) = self.command else {
            let mut cmd = Cli::command();
            cmd.print_help()?;
            return Ok(());
        };

        let config = HarmonicConfig::load(self.config.as_deref())?;
        let settings = config.settings()?;
        let output = Output::new(self.verbose > 0, self.quiet, self.format, settings.output.precision);
        let ctx = CommandContext {
            config,
            settings,
            output,
        };

        match command {
            Commands::Sum(args) => commands::sum::execute(args, &ctx).await,
            Commands::Euler(args) => commands::euler::execute(args, &ctx).await,
            Commands::Partition(args) => commands::partition::execute(args, &ctx).await,
            Commands::Threshold(args) => commands::threshold::execute(args, &ctx).await,
            Commands::Config(args) => commands::config::execute(args, &ctx).await,
            Commands::Version(args) => commands::version::execute(args, &ctx).await,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info"),
        2 => tracing_subscriber::EnvFilter::new("debug"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    // Logs go to stderr so JSON results on stdout stay parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
