use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    Config, ConfigError, DefaultCatchSimulator, HuntError, Hunter, Position, Tuna, WhiteShark,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    ConfigurePrey { speed: f64, position: Position },
    ConfigureHunter { speed: f64, position: Position },
    Hunt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HuntReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HuntReport {
    pub success: bool,
}

impl Reply {
    fn message(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
        }
    }

    pub fn invalid_command() -> Self {
        Self::message("invalid command")
    }
}

/// One shark and one tuna, driven by client commands.
#[derive(Debug)]
pub struct HuntSession {
    shark: WhiteShark,
    tuna: Tuna,
}

impl HuntSession {
    pub fn new(shark: WhiteShark, tuna: Tuna) -> Self {
        Self { shark, tuna }
    }

    pub fn from_config<R: Rng>(config: &Config, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let simulator = Arc::new(DefaultCatchSimulator::new(
            config.simulator.max_time_to_catch,
        ));
        let shark = WhiteShark::new(config.shark.speed, config.shark.position, simulator);
        let tuna = Tuna::random(rng, config.tuna.bounds);
        Ok(Self::new(shark, tuna))
    }

    pub fn shark(&self) -> &WhiteShark {
        &self.shark
    }

    pub fn tuna(&self) -> &Tuna {
        &self.tuna
    }

    pub fn hunt(&self) -> Reply {
        let success = match self.shark.hunt(&self.tuna) {
            Ok(()) => true,
            Err(err @ HuntError::CanNotHunt(_)) => {
                info!(%err, "hunt failed");
                false
            }
        };

        Reply {
            message: "hunt done".to_string(),
            data: Some(HuntReport { success }),
        }
    }

    /// Applies a command that changes state. `Hunt` is read-only and goes through [`HuntSession::hunt`].
    pub fn apply(&mut self, command: Command) -> Reply {
        match command {
            Command::ConfigurePrey { speed, position } => {
                if !valid_speed(speed) {
                    warn!(speed, "rejected prey configuration");
                    return Reply::message("invalid speed");
                }
                self.tuna.configure(speed, position);
                info!(speed, ?position, "prey configured");
                Reply::message("prey configured")
            }
            Command::ConfigureHunter { speed, position } => {
                if !valid_speed(speed) {
                    warn!(speed, "rejected hunter configuration");
                    return Reply::message("invalid speed");
                }
                self.shark.configure(speed, position);
                info!(speed, ?position, "hunter configured");
                Reply::message("hunter configured")
            }
            Command::Hunt => self.hunt(),
        }
    }
}

fn valid_speed(speed: f64) -> bool {
    speed.is_finite() && speed >= 0.0
}
