use std::time::Duration;

use bevy_ecs::resource::Resource;

use crate::error::ConfigError;
use crate::services::ServiceWait;

/// When a catch request is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatchAck {
    /// Answer `success: true` as soon as the kill call is issued, without
    /// waiting for it to resolve.
    #[default]
    Immediate,
    /// Answer once the kill call resolves, reporting whether it succeeded.
    AfterRemoval,
}

impl CatchAck {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "immediate" => Some(Self::Immediate),
            "after_removal" => Some(Self::AfterRemoval),
            _ => None,
        }
    }
}

/// Spawner configuration, resolved once before the app is built.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SpawnerConfig {
    /// Turtle names are `name_prefix` followed by the spawn counter.
    pub name_prefix: String,
    /// Spawn attempts per second.
    pub spawn_frequency: f64,
    /// Fixed RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub service_wait: ServiceWait,
    pub catch_ack: CatchAck,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            name_prefix: "turtle".to_string(),
            spawn_frequency: 1.0,
            seed: None,
            service_wait: ServiceWait::default(),
            catch_ack: CatchAck::Immediate,
        }
    }
}

impl SpawnerConfig {
    /// Defaults overridden by `key:=value` parameters, then validated.
    ///
    /// Recognised keys: `turtle_name_prefix` (or `name_prefix`),
    /// `spawn_frequency`, `seed`, `service_wait_interval` (seconds),
    /// `service_wait_attempts` (0 waits forever), `catch_ack`
    /// (`immediate` | `after_removal`).
    pub fn from_params<I, S>(params: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for param in params {
            config.apply_param(param.as_ref())?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Apply a single `key:=value` override.
    pub fn apply_param(&mut self, param: &str) -> Result<(), ConfigError> {
        let Some((key, value)) = param.split_once(":=") else {
            return Err(ConfigError::Malformed(param.to_string()));
        };
        let key = key.trim();
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "turtle_name_prefix" | "name_prefix" => self.name_prefix = value.to_string(),
            "spawn_frequency" => self.spawn_frequency = value.parse().map_err(|_| invalid())?,
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            "service_wait_interval" => {
                let secs: f64 = value.parse().map_err(|_| invalid())?;
                self.service_wait.interval =
                    Duration::try_from_secs_f64(secs).map_err(|_| invalid())?;
            }
            "service_wait_attempts" => {
                let attempts: u32 = value.parse().map_err(|_| invalid())?;
                self.service_wait.max_attempts = (attempts > 0).then_some(attempts);
            }
            "catch_ack" => self.catch_ack = CatchAck::parse(value).ok_or_else(invalid)?,
            _ => return Err(ConfigError::UnknownParameter(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spawn_frequency.is_finite() || self.spawn_frequency <= 0.0 {
            return Err(ConfigError::NonPositiveFrequency(self.spawn_frequency));
        }
        Ok(())
    }

    /// Time between spawn attempts. Saturates for vanishingly small frequencies.
    pub fn spawn_period(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.spawn_frequency).unwrap_or(Duration::MAX)
    }
}
