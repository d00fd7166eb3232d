//! Simulation loop settings

use serde::{Deserialize, Serialize};

use crate::engine::timestep::MAX_FRAME_DT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the match RNG (dribble touches, shot scatter)
    pub seed: u64,
    /// Whether the autonomous teams play at kick-off
    pub ai_enabled: bool,
    /// Longest frame the shell may feed the simulation (s)
    pub max_frame_dt: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 0, ai_enabled: true, max_frame_dt: MAX_FRAME_DT }
    }
}
