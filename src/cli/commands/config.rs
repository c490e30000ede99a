use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::CommandContext;
use crate::config::ConfigFormat;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Display current merged configuration
    Show {
        /// Output format: json, toml, yaml
        #[arg(value_name = "FORMAT", default_value = "toml")]
        export_format: String,
    },
    /// Check that the merged configuration is valid
    Validate,
}

pub async fn execute(args: ConfigArgs, ctx: &CommandContext) -> Result<()> {
    match args.command {
        ConfigCommand::Show { export_format } => {
            let format: ConfigFormat = export_format.parse()?;
            println!("{}", ctx.config.export_config(format)?);
        }
        ConfigCommand::Validate => {
            // Settings were extracted and validated before dispatch
            ctx.settings.validate()?;
            ctx.output.success("Configuration is valid");
        }
    }
    Ok(())
}
