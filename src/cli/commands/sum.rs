//! Sum the harmonic series and print sum, e^sum and terms / e^sum

use std::future::Future;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::{CommandContext, Output, OutputFormat};
use crate::parallel::CancellationToken;
use crate::series::{SeriesReport, effective_workers, parallel_sum_with_cancel};

#[derive(Args)]
pub struct SumArgs {
    /// Number of terms to sum [default: series.terms]
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub terms: Option<i64>,

    /// Worker threads, 0 for one per available core [default: series.threads]
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Sum on a single thread
    #[arg(long, conflicts_with = "threads")]
    pub serial: bool,
}

pub async fn execute(args: SumArgs, ctx: &CommandContext) -> Result<()> {
    let terms = args.terms.unwrap_or(ctx.settings.series.terms);
    let workers = if args.serial {
        1
    } else {
        super::resolve_threads(args.threads, &ctx.settings)
    };

    ctx.output.verbose(&format!("Summing {terms} terms with up to {workers} workers"));

    let interrupted = async {
        // Without a signal handler the sum simply runs to completion
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };
    let sum = sum_until(terms, workers, interrupted, &ctx.output).await?;

    // terms is known to be non-negative once the sum succeeded
    let used_workers = effective_workers(terms as u64, workers);
    let report = SeriesReport::new(terms as u64, used_workers, sum);

    match ctx.output.format() {
        OutputFormat::Json => ctx.output.json(&report)?,
        OutputFormat::Text => {
            ctx.output.header("Harmonic series");
            ctx.output.key_value("terms", &report.terms.to_string());
            ctx.output.key_value("workers", &report.workers.to_string());
            ctx.output.value("sum", report.sum);
            ctx.output.value("e^sum", report.exp_sum);
            ctx.output.value("terms / e^sum", report.terms_over_exp_sum);
        }
    }

    Ok(())
}

/// Run the sum on a blocking task, cancelling its workers once `interrupted`
/// resolves. An interrupted run fails with `SeriesError::Cancelled`.
async fn sum_until<F>(terms: i64, workers: usize, interrupted: F, output: &Output) -> Result<f64>
where
    F: Future<Output = ()>,
{
    let cancel = CancellationToken::new();
    let worker_cancel = cancel.clone();
    // One worker runs on the calling thread and matches serial_sum exactly
    let mut task = tokio::task::spawn_blocking(move || parallel_sum_with_cancel(terms, workers, &worker_cancel));

    let joined = tokio::select! {
        joined = &mut task => joined,
        () = interrupted => {
            output.warning("Interrupted, cancelling workers");
            cancel.cancel();
            task.await
        }
    };
    Ok(joined.context("Summation task failed")??)
}
