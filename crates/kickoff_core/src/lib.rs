//! # kickoff_core - Real-time Soccer Match Simulation Core
//!
//! Frame-stepped gameplay simulation for a small-sided soccer match: ball
//! aerodynamics, human and autonomous player locomotion, body collisions,
//! team decision-making and scoring. Rendering, windowing and input capture
//! belong to the shell; this crate only consumes intent and produces state.
//!
//! ## Features
//! - Deterministic per frame: same seed + same dt sequence = same match
//! - Ball flight with quadratic drag, Magnus curve, bounce and rolling friction
//! - Two autonomous teams with one designated chaser each
//! - Serde snapshots for render consumers, with a SHA-256 digest for replay checks
//!
//! ```rust
//! use kickoff_core::{FrameInput, LiveMatch, MatchConfig, DEFAULT_FRAME_DT};
//!
//! let mut game = LiveMatch::new(MatchConfig::deterministic(7)).expect("valid config");
//! for _ in 0..60 {
//!     game.step(DEFAULT_FRAME_DT, &FrameInput::default());
//! }
//! assert_eq!(game.frame(), 60);
//! ```

pub mod engine;
pub mod error;

pub use engine::{
    Agent, AgentRole, AgentState, Ball, BallState, FieldBounds, FrameInput, FrameSnapshot,
    HumanController, LiveMatch, MatchConfig, MatchEvent, MatchState, RosterSlot, SimConfig,
    StepResult, TeamCoordinator, TeamSide, Vec3, DEFAULT_FRAME_DT,
};
pub use error::{ConfigError, Result};
