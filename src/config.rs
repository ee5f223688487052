use crate::error::{IrrigOpsError, Result};
use crate::logic::calculations::atmospheric_pressure;
use crate::models::SiteParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Mean wind speed at 2 m, m/s
    #[serde(default = "default_wind_speed")]
    pub wind_speed: f64,
    /// Metres above sea level
    #[serde(default)]
    pub altitude: f64,
}

fn default_wind_speed() -> f64 {
    2.0
}

impl SiteConfig {
    pub fn parameters(&self) -> SiteParameters {
        SiteParameters::new(self.wind_speed, self.altitude)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            wind_speed: default_wind_speed(),
            altitude: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Shortest watering run, seconds
    #[serde(default = "default_min_duration")]
    pub min_duration: u32,
    /// Longest watering run, seconds
    #[serde(default = "default_max_duration")]
    pub max_duration: u32,
}

fn default_min_duration() -> u32 {
    5
}

fn default_max_duration() -> u32 {
    60
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_duration: default_min_duration(),
            max_duration: default_max_duration(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or the first config found in the
    /// standard locations. Falls back to defaults when none exists.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(IrrigOpsError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                Some(p.to_path_buf())
            }
            None => Self::find_config_path(),
        };

        let config = match config_path {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| IrrigOpsError::Config(format!("Failed to read config: {}", e)))?;
                Self::from_yaml(&content)?
            }
            None => {
                tracing::info!("No config file found, using defaults");
                Config::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| IrrigOpsError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Search for config.yaml in standard locations
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        dirs::config_dir()
            .map(|dir| dir.join("irrigops").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Fail fast on settings the model or engine cannot work with
    pub fn validate(&self) -> Result<()> {
        let EngineConfig {
            min_duration,
            max_duration,
        } = self.engine;
        if min_duration > max_duration {
            return Err(IrrigOpsError::MisconfiguredBounds {
                min: min_duration,
                max: max_duration,
            });
        }

        if !self.site.wind_speed.is_finite() || self.site.wind_speed < 0.0 {
            return Err(IrrigOpsError::InvalidSite(format!(
                "wind speed {} must be a non-negative number",
                self.site.wind_speed
            )));
        }

        let pressure = atmospheric_pressure(self.site.altitude);
        if !self.site.altitude.is_finite() || !pressure.is_finite() || pressure <= 0.0 {
            return Err(IrrigOpsError::InvalidSite(format!(
                "altitude {} m gives no usable atmospheric pressure",
                self.site.altitude
            )));
        }

        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| IrrigOpsError::Config(format!("Bad substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
