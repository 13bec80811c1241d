//! YAML configuration for the `wavegen` shell.
//!
//! Every field has a default, so a partial file (or none at all) is valid.

use crate::error::Result;
use crate::generator::SignalParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Initial generation parameters
    #[serde(default)]
    pub signal: SignalParameters,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Default file names used when an export is requested without a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_wav_path")]
    pub wav: PathBuf,
    #[serde(default = "default_signal_csv_path")]
    pub signal_csv: PathBuf,
    #[serde(default = "default_spectrum_csv_path")]
    pub spectrum_csv: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Rows shown in the data preview table
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Visible time span of the time-domain plot, in seconds
    #[serde(default = "default_time_window")]
    pub time_window_sec: f64,
    /// Visible frequency span of the spectrum plot, in Hz
    #[serde(default = "default_spectrum_window")]
    pub spectrum_window_hz: f64,
}

fn default_wav_path() -> PathBuf {
    PathBuf::from("output.wav")
}
fn default_signal_csv_path() -> PathBuf {
    PathBuf::from("signal.csv")
}
fn default_spectrum_csv_path() -> PathBuf {
    PathBuf::from("fft.csv")
}
fn default_rows() -> usize {
    100
}
fn default_time_window() -> f64 {
    0.01
}
fn default_spectrum_window() -> f64 {
    1000.0
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            wav: default_wav_path(),
            signal_csv: default_signal_csv_path(),
            spectrum_csv: default_spectrum_csv_path(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            time_window_sec: default_time_window(),
            spectrum_window_hz: default_spectrum_window(),
        }
    }
}

impl Config {
    /// Load config from a YAML file, falling back to defaults for missing fields.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config, or defaults if the file is missing or unreadable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    /// Save config to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }
}
