use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Cortex configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CortexConfig {
    /// Data locations.
    #[serde(default)]
    pub data: DataConfig,

    /// Windowed-correlation defaults.
    #[serde(default)]
    pub correlation: CorrelationToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Directory holding subject files.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    /// Precomputed wavelet phase dataset (Parquet).
    #[serde(default = "default_phase_dataset")]
    pub phase_dataset: PathBuf,
    /// Phenotypic labels CSV; diagnosis passthrough is skipped when unset.
    pub phenotypics: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorrelationToml {
    /// Default sliding window size.
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Default step between windows.
    #[serde(default = "default_step")]
    pub step: usize,
    /// Apply the Fisher z-transform to Pearson/Spearman output.
    #[serde(default)]
    pub fisher: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            phase_dataset: default_phase_dataset(),
            phenotypics: None,
        }
    }
}

impl Default for CorrelationToml {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            step: default_step(),
            fisher: false,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/ABIDE")
}

fn default_phase_dataset() -> PathBuf {
    PathBuf::from("data/wavelet_phases.parquet")
}

fn default_window_size() -> usize {
    30
}

fn default_step() -> usize {
    1
}

impl CortexConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a present but malformed file is
    /// an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}
