//! Harmonic series partial sums
//!
//! The parallel path splits `[1, N]` into contiguous ranges with
//! [`partition`], sums each range on its own worker and folds the partial
//! sums back together in worker order with [`reduce`]:
//!
//! ```text
//! [1 ........................................ N]
//!  │ worker 0 │ worker 1 │ ... │ worker T-1 │
//!       │          │                │
//!    Σ 1/i      Σ 1/i            Σ 1/i        (concurrently)
//!       └──────────┴───── + ────────┘         (after join, in order)
//! ```
//!
//! Parallel and serial totals agree to within floating-point rounding; they
//! are not guaranteed to be bit-identical for different worker counts.

pub mod euler;
pub mod range;
pub mod reduce;
pub mod report;
pub mod state;
pub mod sum;
pub mod threshold;

pub use euler::approximate_euler;
pub use range::{TermRange, effective_workers, partition};
pub use reduce::{parallel_partials, parallel_sum, parallel_sum_with_cancel, reduce};
pub use report::SeriesReport;
pub use state::HarmonicSeries;
pub use sum::{PartialResult, partial_sum, partial_sum_cancellable, serial_sum};
pub use threshold::estimate_threshold;
