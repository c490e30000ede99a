use anyhow::Result;
use clap::Args;

use crate::cli::{CommandContext, OutputFormat};
use crate::series::partition;

#[derive(Args)]
pub struct PartitionArgs {
    /// Number of terms to split [default: series.terms]
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub terms: Option<i64>,

    /// Worker threads, 0 for one per available core [default: series.threads]
    #[arg(short, long)]
    pub threads: Option<usize>,
}

pub async fn execute(args: PartitionArgs, ctx: &CommandContext) -> Result<()> {
    let terms = args.terms.unwrap_or(ctx.settings.series.terms);
    let workers = super::resolve_threads(args.threads, &ctx.settings);
    let ranges = partition(terms, workers)?;

    match ctx.output.format() {
        OutputFormat::Json => ctx.output.json(&ranges)?,
        OutputFormat::Text => {
            ctx.output.header(&format!("{terms} terms across {} workers", ranges.len()));
            for (worker, range) in ranges.iter().enumerate() {
                ctx.output
                    .list_item(&format!("worker {worker}: {range} ({} terms)", range.len()));
            }
        }
    }

    Ok(())
}
