//! Core configuration for motive-animation-core.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AnimError;
use crate::ids::AnimationId;

/// Configuration for the animator.
/// Every field has a default so hosts can pass partial JSON.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Speed multiplier a new animator starts with.
    pub default_speed: f32,

    /// Seed for the jitter source; `None` draws from OS entropy.
    pub jitter_seed: Option<u64>,

    /// Maximum events to retain between ticks; the oldest are dropped beyond it.
    pub max_events_per_tick: usize,

    /// Extra prompt aliases, appended after the built-in table.
    pub extra_aliases: IndexMap<String, AnimationId>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_speed: 1.0,
            jitter_seed: None,
            max_events_per_tick: 256,
            extra_aliases: IndexMap::new(),
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(s: &str) -> Result<Config, AnimError> {
        let cfg: Config = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), AnimError> {
        if !(self.default_speed.is_finite() && self.default_speed > 0.0) {
            return Err(AnimError::InvalidSpeed {
                speed: self.default_speed,
            });
        }
        if self.max_events_per_tick == 0 {
            return Err(AnimError::Config(
                "max_events_per_tick must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
