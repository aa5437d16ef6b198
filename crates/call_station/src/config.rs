use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StationError};

pub const TRANSITION_LOG_LIMIT_ENV: &str = "CALL_STATION_TRANSITION_LOG_LIMIT";

const DEFAULT_TRANSITION_LOG_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationConfig {
    /// How many transitions the station keeps in its audit log. 0 disables it.
    #[serde(default = "default_transition_log_limit")]
    pub transition_log_limit: usize,
}

fn default_transition_log_limit() -> usize {
    DEFAULT_TRANSITION_LOG_LIMIT
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            transition_log_limit: DEFAULT_TRANSITION_LOG_LIMIT,
        }
    }
}

fn parse_limit(value: &str) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|e| {
        StationError::InvalidConfig(format!(
            "{} must be a non-negative integer, got {:?}: {}",
            TRANSITION_LOG_LIMIT_ENV, value, e
        ))
    })
}

impl StationConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str::<StationConfig>(content)?)
    }

    /// Load from a TOML file, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(limit) = std::env::var(TRANSITION_LOG_LIMIT_ENV) {
            self.apply_limit_override(&limit)?;
        }
        Ok(())
    }

    fn apply_limit_override(&mut self, value: &str) -> Result<()> {
        self.transition_log_limit = parse_limit(value)?;
        tracing::debug!(
            limit = self.transition_log_limit,
            "Config: transition log limit overridden from environment"
        );
        Ok(())
    }
}
