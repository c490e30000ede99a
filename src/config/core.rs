use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Json, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Layered configuration: embedded defaults, user file, repository file (or
/// an explicit `--config` file), then `HARMONIC_` environment variables.
pub struct HarmonicConfig {
    figment: Figment,
}

/// Typed view of the merged configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub series: SeriesSettings,
    pub parallel: ParallelSettings,
    pub euler: EulerSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSettings {
    /// Terms summed when the command line does not say
    pub terms: i64,
    /// Requested worker threads (0 = auto)
    pub threads: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelSettings {
    /// Hard cap on worker threads (0 = no cap)
    pub max_threads: usize,
    /// Percentage of CPU cores used for the automatic thread count
    pub thread_percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EulerSettings {
    pub iterations: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Digits after the decimal point
    pub precision: usize,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self { terms: 1000, threads: 0 }
    }
}

impl Default for ParallelSettings {
    fn default() -> Self {
        Self {
            max_threads: 0,
            thread_percentage: 100,
        }
    }
}

impl Default for EulerSettings {
    fn default() -> Self {
        Self { iterations: 30 }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { precision: 12 }
    }
}

impl HarmonicConfig {
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // A custom config replaces the user and repository layers
        if let Some(custom_path) = custom_config {
            let path = Path::new(custom_path);
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::trace!("CONFIG LOAD: Using custom config {}", path.display());
            figment = merge_file(figment, path);
        } else {
            let user_base = Self::user_config_base_path();
            for ext in ["toml", "json", "yaml", "yml"] {
                figment = merge_file(figment, Path::new(&format!("{user_base}.{ext}")));
            }
            for ext in ["toml", "json", "yaml", "yml"] {
                figment = merge_file(figment, Path::new(&format!("harmonic.{ext}")));
            }
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("HARMONIC_").split("__"));

        Ok(HarmonicConfig { figment })
    }

    /// Extract and validate the typed settings.
    pub fn settings(&self) -> Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .context("Failed to parse configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        let value = self.figment.extract()?;
        Ok(value)
    }

    fn user_config_base_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/harmonic/config", home),
            Err(_) => "~/.config/harmonic/config".to_string(),
        }
    }
}

/// Merge `path` with the provider its extension implies. Missing files are
/// skipped by figment.
fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => figment.merge(Json::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.parallel.thread_percentage == 0 || self.parallel.thread_percentage > 100 {
            anyhow::bail!(
                "parallel.thread_percentage must be between 1 and 100, got {}",
                self.parallel.thread_percentage
            );
        }
        if self.series.terms < 0 {
            anyhow::bail!("series.terms must not be negative, got {}", self.series.terms);
        }
        Ok(())
    }
}
