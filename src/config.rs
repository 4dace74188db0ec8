//! Viewer configuration, read from an optional JSON file.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::application::{MAX_SPEED, MIN_SPEED};
use crate::domain::{Algorithm, rule_by_name};
use crate::error::{LifeError, Result};

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "LIFE_CONFIG";

static SHARED: OnceLock<AppConfig> = OnceLock::new();

/// Window parameters handed to macroquad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life".to_string(),
            width: 1000,
            height: 800,
        }
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Generations per second while running (1-60)
    pub generations_per_second: f64,
    /// Chance that a cell comes alive when randomizing (0.0 to 1.0)
    pub random_density: f64,
    pub algorithm: Algorithm,
    /// Display name of the rule, matched case-insensitively
    pub rule: String,
    pub start_running: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations_per_second: 10.0,
            random_density: 0.3,
            algorithm: Algorithm::default(),
            rule: "Conway".to_string(),
            start_running: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `LIFE_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Like [`from_env`](Self::from_env), but a bad file is logged and
    /// replaced by defaults
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            warn!("ignoring config: {err}; using defaults");
            Self::default()
        })
    }

    /// Process-wide config, read from the environment on first use only
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::from_env_or_default)
    }

    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if !(MIN_SPEED..=MAX_SPEED).contains(&sim.generations_per_second) {
            return Err(LifeError::InvalidConfig(format!(
                "generations_per_second must be within {MIN_SPEED}-{MAX_SPEED}, got {}",
                sim.generations_per_second
            )));
        }
        if !(0.0..=1.0).contains(&sim.random_density) {
            return Err(LifeError::InvalidConfig(format!(
                "random_density must be within 0-1, got {}",
                sim.random_density
            )));
        }
        if rule_by_name(&sim.rule).is_none() {
            return Err(LifeError::InvalidConfig(format!("unknown rule {:?}", sim.rule)));
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(LifeError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}
