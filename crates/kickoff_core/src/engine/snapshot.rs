//! Render-side view of one frame
//!
//! Everything a renderer (or a replay check) needs after a step, detached
//! from the live simulation objects. [`FrameSnapshot::digest`] hashes the raw
//! float bits, so two runs agree on the digest only if they agree bit for bit.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::agent::{Agent, AgentRole, AgentState};
use super::ball_physics::BallState;
use super::field::TeamSide;
use super::geometry::Vec3;
use super::human::HumanController;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanSnapshot {
    pub position: Vec3,
    pub velocity: Vec3,
    pub facing: f32,
    pub sprinting: bool,
    pub is_kicking: bool,
    pub kick_timer: f32,
    pub animation_time: f32,
}

impl From<&HumanController> for HumanSnapshot {
    fn from(h: &HumanController) -> Self {
        Self {
            position: h.position(),
            velocity: h.velocity(),
            facing: h.facing(),
            sprinting: h.is_sprinting(),
            is_kicking: h.is_kicking(),
            kick_timer: h.kick_timer(),
            animation_time: h.animation_time(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub team: TeamSide,
    pub role: AgentRole,
    pub state: AgentState,
    pub position: Vec3,
    pub velocity: Vec3,
    pub facing: f32,
    pub is_designated_chaser: bool,
    pub anim_time: f32,
}

impl From<&Agent> for AgentSnapshot {
    fn from(a: &Agent) -> Self {
        Self {
            team: a.team(),
            role: a.role(),
            state: a.state(),
            position: a.position(),
            velocity: a.velocity(),
            facing: a.facing(),
            is_designated_chaser: a.is_designated_chaser(),
            anim_time: a.anim_time(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Frames stepped since kick-off
    pub frame: u64,
    /// Simulated seconds since kick-off
    pub elapsed_s: f32,
    pub ball: BallState,
    pub human: HumanSnapshot,
    pub agents: Vec<AgentSnapshot>,
    pub score_left: u32,
    pub score_right: u32,
    pub goal_scored: bool,
    /// Team that scored last, for colouring the celebration overlay
    pub last_scoring_team: Option<TeamSide>,
    pub celebration_alpha: f32,
    pub ai_enabled: bool,
}

impl FrameSnapshot {
    /// SHA-256 over every simulated quantity, hex encoded
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.frame.to_le_bytes());
        hash_f32(&mut hasher, self.elapsed_s);

        for v in [&self.ball.position, &self.ball.velocity, &self.ball.angular_velocity] {
            hash_vec(&mut hasher, v);
        }
        hash_f32(&mut hasher, self.ball.rotation_angle);

        hash_vec(&mut hasher, &self.human.position);
        hash_vec(&mut hasher, &self.human.velocity);
        hash_f32(&mut hasher, self.human.facing);
        hasher.update([self.human.is_kicking as u8]);

        for a in &self.agents {
            hasher.update([a.team.index() as u8, a.state as u8, a.is_designated_chaser as u8]);
            hash_vec(&mut hasher, &a.position);
            hash_vec(&mut hasher, &a.velocity);
            hash_f32(&mut hasher, a.facing);
        }

        hasher.update(self.score_left.to_le_bytes());
        hasher.update(self.score_right.to_le_bytes());
        hasher.update([self.goal_scored as u8, self.ai_enabled as u8]);
        hasher.update([self.last_scoring_team.map_or(u8::MAX, |t| t.index() as u8)]);

        format!("{:x}", hasher.finalize())
    }
}

#[inline]
fn hash_f32(hasher: &mut Sha256, v: f32) {
    hasher.update(v.to_bits().to_le_bytes());
}

#[inline]
fn hash_vec(hasher: &mut Sha256, v: &Vec3) {
    for c in v.iter() {
        hash_f32(hasher, *c);
    }
}
