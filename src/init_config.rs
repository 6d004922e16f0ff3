// init_config.rs
// Handles loading and parsing the start-up configuration from init_config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::SimConfig;
use crate::error::ConfigError;

pub const DEFAULT_INIT_CONFIG: &str = "init_config.toml";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitConfig {
    /// Physics overrides. Missing keys fall back to `SimConfig::default()`.
    pub simulation: Option<SimConfig>,
    /// Generator seed. A random seed is used when omitted.
    pub seed: Option<u64>,
    /// Spawn triggers fired before the first tick
    #[serde(default)]
    pub initial_spawns: usize,
    #[serde(default)]
    pub run: RunConfig,
}

/// Settings for the headless driver.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RunConfig {
    /// Clock ticks to run
    pub ticks: usize,
    /// Wall-clock milliseconds reported per tick
    pub tick_millis: u64,
    /// Fire a spawn every this many ticks. 0 disables it.
    pub spawn_every: usize,
    /// Sleep for `tick_millis` between ticks and feed measured elapsed time
    pub realtime: bool,
    pub log_level: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            tick_millis: 16,
            spawn_every: 0,
            realtime: false,
            log_level: "info".to_string(),
        }
    }
}

impl InitConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: InitConfig = toml::from_str(content)?;
        if let Some(sim) = &config.simulation {
            sim.validate()?;
        }
        Ok(config)
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_from_file(DEFAULT_INIT_CONFIG)
    }

    /// `load_default`, or defaults when the file does not exist.
    pub fn load_default_or_builtin() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_INIT_CONFIG).exists() {
            Self::load_default()
        } else {
            Ok(Self::default())
        }
    }

    pub fn simulation_config(&self) -> SimConfig {
        self.simulation.clone().unwrap_or_default()
    }
}
