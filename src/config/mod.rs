//! Configuration management for harmonic
//!
//! Settings are merged with figment from, lowest priority first: the embedded
//! `default-config.toml`, `~/.config/harmonic/config.*`, `./harmonic.*` (or a
//! single `--config` file instead of those two), and `HARMONIC_*` environment
//! variables, where `__` separates nested keys (`HARMONIC_SERIES__TERMS=500`).

pub mod core;
pub mod formats;

// Re-export main types for easier access
pub use self::core::{EulerSettings, HarmonicConfig, OutputSettings, ParallelSettings, SeriesSettings, Settings};
pub use formats::ConfigFormat;
