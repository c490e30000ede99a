//! Error types for series computations

use thiserror::Error;

/// Failures surfaced by partitioning, summation and the fork-join executor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Computation cancelled before all workers finished")]
    Cancelled,

    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("Executor error: {0}")]
    Executor(String),
}

impl SeriesError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SeriesError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SeriesError>;
