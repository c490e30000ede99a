use crate::error::Result;
use crate::parallel::{CancellationToken, ExecutionStrategy, MAX_WORKER_THREADS};
use crate::series::sum::{PartialResult, partial_sum_cancellable};
use crate::series::partition;

/// Add up partial sums in the order given, which is worker-index order when
/// the slice comes from [`parallel_partials`].
pub fn reduce(partials: &[PartialResult]) -> f64 {
    partials.iter().fold(0.0, |total, partial| total + partial.sum)
}

/// H_N computed by `workers` threads, each summing one contiguous range.
///
/// At most [`MAX_WORKER_THREADS`] threads are started; a larger request is
/// reduced to that many ranges and still returns H_N.
///
/// ```rust
/// let total = harmonic::series::parallel_sum(100, 8).unwrap();
/// assert!((total - 5.187377518).abs() < 1e-9);
/// ```
pub fn parallel_sum(terms: i64, workers: usize) -> Result<f64> {
    parallel_sum_with_cancel(terms, workers, &CancellationToken::new())
}

/// [`parallel_sum`] that gives up with `SeriesError::Cancelled` once `cancel` fires.
pub fn parallel_sum_with_cancel(terms: i64, workers: usize, cancel: &CancellationToken) -> Result<f64> {
    let partials = parallel_partials(terms, workers, cancel)?;
    let total = reduce(&partials);
    tracing::debug!("Reduced {} partial sums to {}", partials.len(), total);
    Ok(total)
}

/// Partition `[1, terms]`, sum every range on its own worker and return the
/// partial results in worker order. No reduction happens until every worker
/// has been joined. `workers` above [`MAX_WORKER_THREADS`] is lowered to it.
pub fn parallel_partials(terms: i64, workers: usize, cancel: &CancellationToken) -> Result<Vec<PartialResult>> {
    if workers > MAX_WORKER_THREADS {
        tracing::debug!("Capping {} requested workers at {}", workers, MAX_WORKER_THREADS);
    }
    let ranges = partition(terms, workers.min(MAX_WORKER_THREADS))?;

    // A single range runs on the calling thread
    let strategy = ExecutionStrategy::auto(ranges.len(), 2, ranges.len());
    tracing::debug!("Summing {} ranges with {:?}", ranges.len(), strategy);

    strategy.execute(
        ranges,
        |range, worker_id, cancel| {
            let sum = partial_sum_cancellable(range, cancel)?;
            tracing::trace!("Worker {} summed {} to {}", worker_id, range, sum);
            Ok(PartialResult { range, sum })
        },
        cancel,
    )
}
