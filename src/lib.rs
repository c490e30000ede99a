//! # harmonic - parallel partial sums of the harmonic series
//!
//! Computes H_N = Σ_{i=1}^{N} 1/i on one thread or on a fixed set of worker
//! threads, each summing a contiguous range of terms, and merges the partial
//! sums in worker order. Also approximates Euler's number with a truncated
//! Taylor series and estimates how many terms it takes for H_N to pass a
//! limit.
//!
//! ## Quick Start
//!
//! ```bash
//! # Sum 100 terms on 8 threads
//! harmonic sum --terms 100 --threads 8
//!
//! # Show how the terms are split between workers
//! harmonic partition --terms 100 --threads 8
//!
//! # First N with H_N > 10
//! harmonic threshold 10
//! ```
//!
//! ## Library Usage
//!
//! ```rust
//! use harmonic::series::{HarmonicSeries, parallel_sum, serial_sum};
//!
//! let parallel = parallel_sum(100, 8)?;
//! let serial = serial_sum(100)?;
//! assert!((parallel - serial).abs() < 1e-12);
//!
//! let mut series = HarmonicSeries::new(99)?;
//! series.sum()?;
//! series.add_term();
//! assert!((series.total() - serial).abs() < 1e-12);
//! # Ok::<(), harmonic::SeriesError>(())
//! ```
//!
//! ## Configuration
//!
//! Defaults live in `default-config.toml` and can be overridden by
//! `~/.config/harmonic/config.*`, `./harmonic.*`, `--config <FILE>` and
//! `HARMONIC_*` environment variables. See [`config`].

pub mod cli;
pub mod config;
pub mod error;
pub mod parallel;
pub mod series;

pub use cli::Cli;
pub use config::HarmonicConfig;
pub use error::SeriesError;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
