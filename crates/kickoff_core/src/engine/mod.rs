pub mod agent; // Autonomous players: role inference, pursue/reposition, shooting
pub mod ball;
pub mod ball_physics; // Per-frame flight integrator (drag, Magnus, bounce, rolling)
pub mod config; // MatchConfig + presets
pub mod field;
pub mod geometry; // Ground-plane distance, facing, overlap helpers
pub mod human; // Human-controlled locomotion, kick and dribble
pub mod live_match; // Frame driver owning every participant
pub mod match_state; // Score and goal celebration lifecycle
pub mod physics_constants;
pub mod snapshot; // Render view + determinism digest
pub mod team; // Chaser arbitration and collision resolution
pub mod timestep;

pub use agent::{Agent, AgentRole, AgentState};
pub use ball::Ball;
pub use ball_physics::{magnus_acceleration, BallState};
pub use config::{MatchConfig, SimConfig};
pub use field::{FieldBounds, PlayArea, TeamSide};
pub use geometry::Vec3;
pub use human::HumanController;
pub use live_match::{FrameInput, LiveMatch, StepResult};
pub use match_state::{MatchEvent, MatchState};
pub use snapshot::{AgentSnapshot, FrameSnapshot, HumanSnapshot};
pub use team::{default_roster, RosterSlot, TeamCoordinator};
pub use timestep::{clamp_frame_dt, DEFAULT_FRAME_DT, MAX_FRAME_DT};
