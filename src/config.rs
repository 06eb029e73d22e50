use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{REVEAL_DELAY, ROUND_BUDGET};
use crate::game::Timing;

pub const CONFIG_FILE: &str = "rps.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Session timing, read from `rps.toml` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Resource)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub round_seconds: u64,
    pub reveal_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_BUDGET.as_secs(),
            reveal_delay_ms: REVEAL_DELAY.as_millis() as u64,
        }
    }
}

impl GameConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.round_seconds == 0 {
            return Err(ConfigError::invalid("round_seconds must be positive"));
        }
        if self.reveal_delay_ms == 0 {
            return Err(ConfigError::invalid("reveal_delay_ms must be positive"));
        }
        let Some(round_ms) = self.round_seconds.checked_mul(1000) else {
            return Err(ConfigError::invalid("round_seconds too large"));
        };
        if self.reveal_delay_ms >= round_ms {
            return Err(ConfigError::invalid(
                "reveal_delay_ms must be shorter than the round",
            ));
        }
        Ok(())
    }

    pub fn timing(&self) -> Timing {
        Timing {
            round_budget: Duration::from_secs(self.round_seconds),
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
        }
    }
}

/// Where the active config came from, reported once the log is up.
#[derive(Resource, Debug)]
pub enum ConfigOrigin {
    File,
    Defaults,
    Fallback(String),
}

/// Loads `rps.toml` (or defaults) into the `GameConfig` resource.
pub struct GameConfigPlugin;

impl Plugin for GameConfigPlugin {
    fn build(&self, app: &mut App) {
        let (config, origin) = match GameConfig::load() {
            Ok(config) => (config, ConfigOrigin::File),
            Err(ConfigError::Read(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                (GameConfig::default(), ConfigOrigin::Defaults)
            }
            Err(e) => (GameConfig::default(), ConfigOrigin::Fallback(e.to_string())),
        };

        app.insert_resource(config)
            .insert_resource(origin)
            .add_systems(Startup, report_config);
    }
}

fn report_config(config: Res<GameConfig>, origin: Res<ConfigOrigin>) {
    match origin.as_ref() {
        ConfigOrigin::File => info!("Loaded {}", CONFIG_FILE),
        ConfigOrigin::Defaults => info!("No {} found, using defaults", CONFIG_FILE),
        ConfigOrigin::Fallback(reason) => {
            warn!("Ignoring {}: {}. Using defaults", CONFIG_FILE, reason)
        }
    }
    info!(
        "Round budget {}s, reveal delay {}ms",
        config.round_seconds, config.reveal_delay_ms
    );
}
