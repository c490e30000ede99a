//! Generic fork-join execution
//!
//! This module owns everything about running independent work items on
//! threads; it knows nothing about harmonic series.
//!
//! ## What This Module Does:
//! - **Resource Discovery**: Detects available CPU cores using `num_cpus::get()`
//! - **Resource Calculation**: Applies the configured thread percentage and hard cap
//! - **Execution Strategy**: Sequential vs fork-join execution
//! - **Cancellation**: A shared token workers poll between blocks of work
//!
//! ## What This Module Does NOT Do:
//! - Decide how work is split. Callers hand over ready-made work items and
//!   receive results in the same order.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Caller        │    │   Parallel       │    │   System        │
//! │   (series)      │───▶│   Module         │───▶│   Resources     │
//! │                 │    │                  │    │                 │
//! │ • Partitioning  │    │ • CPU cores      │    │ • Hardware      │
//! │ • Reduction     │    │ • Scoped threads │    │ • OS limits     │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use harmonic::parallel::{CancellationToken, ExecutionStrategy};
//!
//! let strategy = ExecutionStrategy::Parallel { workers: 3 };
//! let squares = strategy
//!     .execute(vec![1u64, 2, 3], |x, _worker_id, _cancel| Ok(x * x), &CancellationToken::new())
//!     .unwrap();
//! assert_eq!(squares, vec![1, 4, 9]);
//! ```

pub mod cancel;
pub mod core;

// Re-export main types for easier access
pub use cancel::CancellationToken;
pub use self::core::{ExecutionStrategy, ForkJoinExecutor, MAX_WORKER_THREADS, SequentialExecutor};
