//! Command implementations for the harmonic CLI
//!
//! Each command is organized into its own module with its clap arguments and
//! an `execute` function taking the shared [`CommandContext`](crate::cli::CommandContext).

pub mod config;
pub mod euler;
pub mod partition;
pub mod sum;
pub mod threshold;
pub mod version;

use crate::config::Settings;
use crate::parallel::ExecutionStrategy;

/// Worker count for a command: the CLI value, else the configured one, capped
/// by `parallel.max_threads` (or `MAX_WORKER_THREADS`) and derived from the
/// core count when 0.
pub(crate) fn resolve_threads(cli_threads: Option<usize>, settings: &Settings) -> usize {
    let requested = cli_threads.unwrap_or(settings.series.threads);
    ExecutionStrategy::resolve_workers(
        requested,
        settings.parallel.max_threads,
        settings.parallel.thread_percentage,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_threads_win_over_config() {
        let mut settings = Settings::default();
        settings.series.threads = 6;
        assert_eq!(resolve_threads(Some(3), &settings), 3);
        assert_eq!(resolve_threads(None, &settings), 6);

        settings.parallel.max_threads = 2;
        assert_eq!(resolve_threads(Some(3), &settings), 2);
        assert!(resolve_threads(Some(0), &settings) <= 2);

        settings.parallel.max_threads = 0;
        assert_eq!(resolve_threads(Some(100_000), &settings), crate::parallel::MAX_WORKER_THREADS);
    }
}
