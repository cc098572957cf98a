//! CLI configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// CLI configuration, read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeConfig {
    /// Directory of `{CCY}.{TENOR}.{yyyyMMdd}.csv` curve files
    pub market_data_dir: Option<PathBuf>,

    /// Interpolation method used when none is given
    #[serde(default = "default_interpolation")]
    pub default_interpolation: String,

    /// Output format used when none is given
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Absolute fair-value tolerance for calibration checks
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_interpolation() -> String {
    "exponential".to_string()
}

fn default_log_filter() -> String {
    "info,cfhedge=debug".to_string()
}

fn default_tolerance() -> f64 {
    1e-6
}

impl Default for HedgeConfig {
    fn default() -> Self {
        Self {
            market_data_dir: None,
            default_interpolation: default_interpolation(),
            default_format: OutputFormat::default(),
            log_filter: default_log_filter(),
            tolerance: default_tolerance(),
        }
    }
}

impl HedgeConfig {
    /// Default configuration file location.
    pub fn default_path() -> CliResult<PathBuf> {
        let dir = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| CliError::MissingArgument("configuration directory".into()))?;
        Ok(dir.join("cfhedge").join("config.toml"))
    }

    /// Resolves `explicit` or the default location.
    pub fn resolve_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Loads the configuration; a missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|reason| CliError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parses and validates TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let config: HedgeConfig = toml::from_str(content).map_err(|e| e.to_string())?;
        if !config.tolerance.is_finite() || config.tolerance < 0.0 {
            return Err(format!("tolerance must be non-negative, got {}", config.tolerance));
        }
        config
            .default_interpolation
            .parse::<cfhedge_math::interpolation::InterpolationMethod>()
            .map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config {
            path: PathBuf::new(),
            reason: e.to_string(),
        })
    }

    /// Writes the configuration, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
