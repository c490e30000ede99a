use anyhow::Result;
use clap::Args;
use serde_json::json;

use crate::cli::{CommandContext, OutputFormat};
use crate::series::estimate_threshold;

#[derive(Args)]
pub struct ThresholdArgs {
    /// The partial sum must exceed this value
    #[arg(allow_negative_numbers = true)]
    pub limit: f64,

    /// Worker threads for the initial sum [default: series.threads]
    #[arg(short, long)]
    pub threads: Option<usize>,
}

pub async fn execute(args: ThresholdArgs, ctx: &CommandContext) -> Result<()> {
    let workers = super::resolve_threads(args.threads, &ctx.settings);
    let limit = args.limit;
    let terms = tokio::task::spawn_blocking(move || estimate_threshold(limit, workers)).await??;

    match ctx.output.format() {
        OutputFormat::Json => ctx.output.json(&json!({ "limit": limit, "terms": terms }))?,
        OutputFormat::Text => {
            ctx.output.info(&format!("First partial sum above {limit}"));
            ctx.output.key_value("terms", &terms.to_string());
        }
    }

    Ok(())
}
