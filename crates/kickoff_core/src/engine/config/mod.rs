//! # Match Configuration
//!
//! Everything a shell decides before kick-off: pitch dimensions, RNG seed,
//! AI toggle, frame clamp and an optional custom roster. Per-frame tuning
//! constants stay in [`crate::engine::physics_constants`].
//!
//! ```rust
//! use kickoff_core::engine::config::MatchConfig;
//!
//! let config = MatchConfig::default();
//! let replayable = MatchConfig::deterministic(42);
//! assert_eq!(replayable.sim.seed, 42);
//! assert!(config.validate().is_ok());
//! ```

mod sim_config;

pub use sim_config::SimConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::field::FieldBounds;
use crate::engine::team::{default_roster, RosterSlot};
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MatchConfig {
    #[serde(default)]
    pub field: FieldBounds,
    #[serde(default)]
    pub sim: SimConfig,
    /// Custom agent roster; `None` plays the default eleven
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster: Option<Vec<RosterSlot>>,
}

impl MatchConfig {
    /// FIFA pitch, both teams, seed 0
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Same as realistic with a caller-chosen seed, for replays and tests
    pub fn deterministic(seed: u64) -> Self {
        let mut cfg = Self::default();
        cfg.sim.seed = seed;
        cfg
    }

    /// Empty pitch for trying out touches and shots
    pub fn practice() -> Self {
        let mut cfg = Self::default();
        cfg.sim.ai_enabled = false;
        cfg
    }

    /// The roster to field: the custom one if present, else the default
    pub fn roster(&self) -> Vec<RosterSlot> {
        self.roster.clone().unwrap_or_else(default_roster)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let f = &self.field;
        for (name, value) in [
            ("field.length", f.length),
            ("field.width", f.width),
            ("field.goal_width", f.goal_width),
            ("field.goal_height", f.goal_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if f.goal_width >= f.width {
            return Err(ConfigError::Invalid(format!(
                "goal width {} must be narrower than the field ({})",
                f.goal_width, f.width
            )));
        }

        let max_dt = self.sim.max_frame_dt;
        if !max_dt.is_finite() || max_dt <= 0.0 {
            return Err(ConfigError::Invalid(format!("sim.max_frame_dt must be positive, got {max_dt}")));
        }

        if let Some(roster) = &self.roster {
            for (i, slot) in roster.iter().enumerate() {
                let on_pitch = slot.x.is_finite()
                    && slot.z.is_finite()
                    && slot.x.abs() <= f.half_length()
                    && slot.z.abs() <= f.half_width();
                if !on_pitch {
                    return Err(ConfigError::Invalid(format!(
                        "roster[{i}] home ({}, {}) is off the pitch",
                        slot.x, slot.z
                    )));
                }
            }
        }
        Ok(())
    }
}
