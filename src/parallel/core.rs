use crate::error::{Result, SeriesError};
use crate::parallel::CancellationToken;

/// Most threads a single fork-join call will start. Also the cap on explicit
/// worker requests when `parallel.max_threads` is 0.
pub const MAX_WORKER_THREADS: usize = 256;

/// Fork-join executor: one scoped thread per work item, all joined before
/// results are returned. Nothing outlives a call, so there is no pool to
/// shut down.
pub struct ForkJoinExecutor {
    thread_name: String,
}

impl Default for ForkJoinExecutor {
    fn default() -> Self {
        Self::new("harmonic-worker")
    }
}

impl ForkJoinExecutor {
    pub fn new(thread_name: impl Into<String>) -> Self {
        Self {
            thread_name: thread_name.into(),
        }
    }

    /// Run `processor` on every item concurrently.
    ///
    /// Results come back in item order regardless of completion order. If any
    /// worker fails or panics the whole call fails, reporting the lowest
    /// failing worker index. More than [`MAX_WORKER_THREADS`] items is an
    /// `Executor` error raised before any thread starts.
    pub fn execute<T, R, F>(
        &self,
        work_items: Vec<T>,
        processor: F,
        cancel: &CancellationToken,
    ) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(T, usize, &CancellationToken) -> Result<R> + Sync, // (item, worker_id, token)
    {
        if work_items.is_empty() {
            return Ok(Vec::new());
        }
        if work_items.len() > MAX_WORKER_THREADS {
            return Err(SeriesError::Executor(format!(
                "{} work items exceed the limit of {MAX_WORKER_THREADS} worker threads",
                work_items.len()
            )));
        }

        let work_count = work_items.len();
        let processor = &processor;

        crossbeam::thread::scope(|s| -> Result<Vec<R>> {
            let mut handles = Vec::with_capacity(work_count);
            let mut spawn_failure = None;

            for (worker_id, work_item) in work_items.into_iter().enumerate() {
                let spawned = s
                    .builder()
                    .name(format!("{}-{worker_id}", self.thread_name))
                    .spawn(move |_| processor(work_item, worker_id, cancel));

                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        spawn_failure = Some(SeriesError::Executor(format!(
                            "failed to spawn worker {worker_id}: {e}"
                        )));
                        break;
                    }
                }
            }

            // Join everything that did start, even after a spawn failure
            let mut results = Vec::with_capacity(handles.len());
            let mut first_failure: Option<SeriesError> = None;

            for (worker_id, handle) in handles.into_iter().enumerate() {
                match handle.join() {
                    Ok(Ok(result)) => results.push(result),
                    Ok(Err(e)) => {
                        tracing::debug!("Worker {} failed: {}", worker_id, e);
                        if first_failure.is_none() {
                            first_failure = Some(e);
                        }
                    }
                    Err(_) => {
                        tracing::warn!("Worker {} panicked", worker_id);
                        if first_failure.is_none() {
                            first_failure = Some(SeriesError::WorkerPanicked { worker: worker_id });
                        }
                    }
                }
            }

            if let Some(e) = first_failure.or(spawn_failure) {
                return Err(e);
            }

            tracing::debug!("Joined {} workers", results.len());
            Ok(results)
        })
        .map_err(|_| SeriesError::Executor("thread panic escaped the worker scope".to_string()))?
    }
}

/// Sequential execution on the calling thread, in item order.
pub struct SequentialExecutor;

impl SequentialExecutor {
    pub fn execute<T, R, F>(
        work_items: Vec<T>,
        processor: F,
        cancel: &CancellationToken,
    ) -> Result<Vec<R>>
    where
        F: Fn(T, usize, &CancellationToken) -> Result<R>,
    {
        work_items
            .into_iter()
            .map(|work_item| processor(work_item, 0, cancel)) // Sequential uses worker_id 0
            .collect()
    }
}

/// Execution strategy enum for choosing between parallel and sequential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    Sequential,
    Parallel { workers: usize },
}

impl ExecutionStrategy {
    pub fn execute<T, R, F>(
        &self,
        work_items: Vec<T>,
        processor: F,
        cancel: &CancellationToken,
    ) -> Result<Vec<R>>
    where
        T: Send,
        R: Send,
        F: Fn(T, usize, &CancellationToken) -> Result<R> + Sync,
    {
        match self {
            ExecutionStrategy::Sequential => SequentialExecutor::execute(work_items, processor, cancel),
            ExecutionStrategy::Parallel { workers } => {
                if work_items.len() > *workers {
                    return Err(SeriesError::Executor(format!(
                        "{} work items exceed the {} workers of this strategy",
                        work_items.len(),
                        workers
                    )));
                }
                ForkJoinExecutor::default().execute(work_items, processor, cancel)
            }
        }
    }

    /// Threshold decision between sequential and parallel execution.
    ///
    /// ```rust
    /// use harmonic::parallel::ExecutionStrategy;
    ///
    /// // A single range gains nothing from a thread of its own
    /// assert!(matches!(ExecutionStrategy::auto(1, 2, 1), ExecutionStrategy::Sequential));
    /// assert!(matches!(ExecutionStrategy::auto(8, 2, 8), ExecutionStrategy::Parallel { workers: 8 }));
    /// ```
    pub fn auto(work_items_count: usize, min_items_for_parallel: usize, optimal_workers: usize) -> Self {
        if work_items_count >= min_items_for_parallel {
            ExecutionStrategy::Parallel {
                workers: optimal_workers,
            }
        } else {
            ExecutionStrategy::Sequential
        }
    }

    /// Maximum workers allowed by the machine and configuration.
    ///
    /// ```text
    /// 1. cores = num_cpus::get()
    /// 2. by_percentage = max(1, cores * thread_percentage / 100)
    /// 3. min(max_threads_config, by_percentage) if max_threads_config > 0
    /// 4. never more than MAX_WORKER_THREADS
    /// ```
    pub fn calculate_optimal_workers(max_threads_config: usize, thread_percentage: u8) -> usize {
        let available_cores = num_cpus::get();

        let workers_by_percentage =
            std::cmp::max(1, (available_cores * thread_percentage as usize) / 100);

        // 0 means use percentage calculation only
        let workers = if max_threads_config > 0 {
            std::cmp::min(max_threads_config, workers_by_percentage)
        } else {
            workers_by_percentage
        };
        workers.min(MAX_WORKER_THREADS)
    }

    /// Worker count for a request, always in `[1, max]`.
    ///
    /// 0 asks for the machine default. Explicit requests may exceed the core
    /// count but are capped by `max_threads_config`, or by
    /// [`MAX_WORKER_THREADS`] when that is 0.
    pub fn resolve_workers(requested: usize, max_threads_config: usize, thread_percentage: u8) -> usize {
        if requested == 0 {
            return Self::calculate_optimal_workers(max_threads_config, thread_percentage);
        }

        let ceiling = if max_threads_config > 0 {
            max_threads_config.min(MAX_WORKER_THREADS)
        } else {
            MAX_WORKER_THREADS
        };
        requested.clamp(1, ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(x: u64, _worker_id: usize, _cancel: &CancellationToken) -> Result<u64> {
        Ok(x * 2)
    }

    #[test]
    fn test_sequential_executor() {
        let results =
            SequentialExecutor::execute(vec![1, 2, 3, 4, 5], double, &CancellationToken::new()).unwrap();
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_fork_join_preserves_item_order() {
        let executor = ForkJoinExecutor::default();
        let results = executor
            .execute(
                vec![5u64, 4, 3, 2, 1],
                |x, worker_id, _| {
                    // Later workers finish first
                    std::thread::sleep(std::time::Duration::from_millis(x * 5));
                    Ok((worker_id, x))
                },
                &CancellationToken::new(),
            )
            .unwrap();

        assert_eq!(results, vec![(0, 5), (1, 4), (2, 3), (3, 2), (4, 1)]);
    }

    #[test]
    fn test_fork_join_empty_input() {
        let results: Vec<u64> = ForkJoinExecutor::default()
            .execute(Vec::<u64>::new(), double, &CancellationToken::new())
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_fork_join_reports_lowest_failing_worker() {
        let result: Result<Vec<u64>> = ForkJoinExecutor::default().execute(
            vec![0u64, 1, 2, 3],
            |x, worker_id, _| {
                if x >= 2 {
                    Err(SeriesError::invalid(format!("worker {worker_id}")))
                } else {
                    Ok(x)
                }
            },
            &CancellationToken::new(),
        );

        assert_eq!(result, Err(SeriesError::InvalidArgument("worker 2".to_string())));
    }

    #[test]
    fn test_fork_join_surfaces_panics() {
        let result: Result<Vec<u64>> = ForkJoinExecutor::new("panicky").execute(
            vec![0u64, 1, 2],
            |x, _, _| {
                if x == 1 {
                    panic!("boom");
                }
                Ok(x)
            },
            &CancellationToken::new(),
        );

        assert_eq!(result, Err(SeriesError::WorkerPanicked { worker: 1 }));
    }

    #[test]
    fn test_execution_strategy() {
        let cancel = CancellationToken::new();

        let seq_results = ExecutionStrategy::Sequential.execute(vec![1, 2, 3], double, &cancel).unwrap();
        assert_eq!(seq_results, vec![2, 4, 6]);

        let par_results = ExecutionStrategy::Parallel { workers: 3 }
            .execute(vec![1, 2, 3], double, &cancel)
            .unwrap();
        assert_eq!(par_results, vec![2, 4, 6]);

        let too_many = ExecutionStrategy::Parallel { workers: 2 }.execute(vec![1, 2, 3], double, &cancel);
        assert!(matches!(too_many, Err(SeriesError::Executor(_))));
    }

    #[test]
    fn test_auto_strategy() {
        assert!(matches!(ExecutionStrategy::auto(1, 2, 8), ExecutionStrategy::Sequential));
        assert!(matches!(ExecutionStrategy::auto(4, 2, 4), ExecutionStrategy::Parallel { workers: 4 }));
    }

    #[test]
    fn test_worker_resolution() {
        assert!(ExecutionStrategy::calculate_optimal_workers(0, 100) >= 1);
        assert!(ExecutionStrategy::calculate_optimal_workers(2, 100) <= 2);
        assert!(ExecutionStrategy::calculate_optimal_workers(0, 1) >= 1);

        assert_eq!(ExecutionStrategy::resolve_workers(8, 0, 100), 8);
        assert_eq!(ExecutionStrategy::resolve_workers(8, 4, 100), 4);
        assert!(ExecutionStrategy::resolve_workers(0, 0, 100) >= 1);
    }

    #[test]
    fn test_large_requests_are_capped() {
        assert_eq!(ExecutionStrategy::resolve_workers(100_000, 0, 100), MAX_WORKER_THREADS);
        assert_eq!(ExecutionStrategy::resolve_workers(100_000, 16, 100), 16);
        assert_eq!(ExecutionStrategy::resolve_workers(100_000, 100_000, 100), MAX_WORKER_THREADS);
        assert!(ExecutionStrategy::calculate_optimal_workers(100_000, 100) <= MAX_WORKER_THREADS);
    }

    #[test]
    fn test_fork_join_refuses_oversized_input() {
        let items: Vec<u64> = (0..=MAX_WORKER_THREADS as u64).collect();
        let result = ForkJoinExecutor::default().execute(items, double, &CancellationToken::new());
        assert!(matches!(result, Err(SeriesError::Executor(_))));
    }
}
