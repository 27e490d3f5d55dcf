//! Runtime configuration, read from the TOML file named by `SHARK_HUNT_CONFIG`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Position;

pub const CONFIG_ENV: &str = "SHARK_HUNT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {field}: {value}")]
    Invalid { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub simulator: SimulatorConfig,
    pub shark: SharkConfig,
    pub tuna: TunaConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:25555".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Longest chase, in seconds, the shark will commit to
    pub max_time_to_catch: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_time_to_catch: 35.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharkConfig {
    pub speed: f64,
    pub position: Position,
}

impl Default for SharkConfig {
    fn default() -> Self {
        Self {
            speed: 144.0,
            position: Position::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunaConfig {
    /// Tuna spawn inside `[0, bounds]` on every axis
    pub bounds: f64,
}

impl Default for TunaConfig {
    fn default() -> Self {
        Self { bounds: 500.0 }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Speeds and bounds must be finite and non-negative, positions finite.
    /// `max_time_to_catch` may be infinite but not negative or NaN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("shark.speed", self.shark.speed, |v| v.is_finite() && v >= 0.0)?;
        let Position { x, y, z } = self.shark.position;
        check("shark.position.x", x, f64::is_finite)?;
        check("shark.position.y", y, f64::is_finite)?;
        check("shark.position.z", z, f64::is_finite)?;
        check(
            "simulator.max_time_to_catch",
            self.simulator.max_time_to_catch,
            |v| v >= 0.0,
        )?;
        check("tuna.bounds", self.tuna.bounds, |v| v.is_finite() && v >= 0.0)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Loads the file named by `SHARK_HUNT_CONFIG`, or defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

fn check(field: &'static str, value: f64, ok: impl Fn(f64) -> bool) -> Result<(), ConfigError> {
    if ok(value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, value })
    }
}
