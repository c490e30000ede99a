use anyhow::Result;
use clap::Args;

use crate::cli::CommandContext;

#[derive(Args)]
pub struct VersionArgs {
    /// Show detailed version information
    #[arg(short = 'd', long = "detailed")]
    pub detailed: bool,
}

pub async fn execute(args: VersionArgs, ctx: &CommandContext) -> Result<()> {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.detailed {
        ctx.output.key_value("Description:", env!("CARGO_PKG_DESCRIPTION"));
        ctx.output.key_value("License:", env!("CARGO_PKG_LICENSE"));
        ctx.output.key_value("Rust edition:", "2024");
        ctx.output.key_value("Target:", std::env::consts::ARCH);
        ctx.output.key_value("Cores:", &num_cpus::get().to_string());
        ctx.output.key_value("Profile:", if cfg!(debug_assertions) { "debug" } else { "release" });
    }
    Ok(())
}
