use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::cli::{CommandContext, OutputFormat};
use crate::series::approximate_euler;

#[derive(Args)]
pub struct EulerArgs {
    /// Taylor-series iterations [default: euler.iterations]
    #[arg(short, long)]
    pub iterations: Option<u32>,
}

pub async fn execute(args: EulerArgs, ctx: &CommandContext) -> Result<()> {
    let iterations = args.iterations.unwrap_or(ctx.settings.euler.iterations);
    let e = approximate_euler(iterations);
    let error = (e - std::f64::consts::E).abs();

    match ctx.output.format() {
        OutputFormat::Json => ctx.output.json(&json!({
            "iterations": iterations,
            "approximation": e,
            "error": error,
        }))?,
        OutputFormat::Text => {
            ctx.output.header("Euler's number");
            ctx.output.key_value("iterations", &iterations.to_string());
            ctx.output.value("e", e);
            ctx.output.key_value("error", &format!("{error:e}"));
        }
    }

    Ok(())
}
