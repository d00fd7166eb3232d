//! Live match driver
//!
//! Owns every participant and the match RNG, and runs one frame in a fixed
//! order:
//!
//! 1. apply input (ball reset, AI toggle, movement, facing, kick)
//! 2. human locomotion
//! 3. ball flight
//! 4. match-level boundary rebound
//! 5. human/ball contact, skipped while a goal is celebrated
//! 6. goal check or celebration countdown
//! 7. autonomous teams, when enabled
//!
//! Shells feed measured frame times straight in; `step` clamps them.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::ball::Ball;
use super::config::MatchConfig;
use super::field::{FieldBounds, PlayArea};
use super::geometry::Vec3;
use super::human::HumanController;
use super::match_state::{MatchEvent, MatchState};
use super::snapshot::{AgentSnapshot, FrameSnapshot, HumanSnapshot};
use super::team::TeamCoordinator;
use super::timestep::clamp_frame_dt;
use crate::error::Result;

/// Player intent for one frame, already mapped from raw devices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Desired ground-plane direction; zero means no input
    pub movement_direction: Vec3,
    pub sprinting: bool,
    /// Kick edge (pressed this frame, not held)
    pub kick_just_pressed: bool,
    /// Sidespin for the kick (rad/s); positive curls left
    pub spin_y: f32,
    /// Facing to turn toward; `None` keeps the previous target
    pub target_facing: Option<f32>,
    pub reset_ball: bool,
    pub toggle_ai: bool,
}

/// What happened during one step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepResult {
    /// Whether a kick request reached the ball
    pub kicked: bool,
    pub event: Option<MatchEvent>,
}

#[derive(Debug, Clone)]
pub struct LiveMatch {
    config: MatchConfig,
    play_area: PlayArea,
    ball: Ball,
    human: HumanController,
    coordinator: TeamCoordinator,
    match_state: MatchState,
    rng: ChaCha8Rng,
    ai_enabled: bool,
    frame: u64,
    elapsed_s: f32,
}

impl LiveMatch {
    /// Validate `config` and line everyone up for kick-off
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        let field = config.field;
        Ok(Self {
            play_area: field.play_area(),
            ball: Ball::new(),
            human: HumanController::default(),
            coordinator: TeamCoordinator::from_roster(&config.roster()),
            match_state: MatchState::new(field),
            rng: ChaCha8Rng::seed_from_u64(config.sim.seed),
            ai_enabled: config.sim.ai_enabled,
            frame: 0,
            elapsed_s: 0.0,
            config,
        })
    }

    /// Back to kick-off with the configured seed; the score is cleared
    pub fn restart(&mut self) {
        self.ball.reset();
        self.human = HumanController::default();
        self.coordinator = TeamCoordinator::from_roster(&self.config.roster());
        self.match_state.reset();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.sim.seed);
        self.ai_enabled = self.config.sim.ai_enabled;
        self.frame = 0;
        self.elapsed_s = 0.0;
    }

    /// Advance one frame of `dt` seconds (clamped to the configured maximum)
    pub fn step(&mut self, dt: f32, input: &FrameInput) -> StepResult {
        let dt = clamp_frame_dt(dt, self.config.sim.max_frame_dt);
        let field = self.config.field;
        let mut result = StepResult::default();

        self.apply_input(input, &mut result);

        self.human.update(dt, &self.play_area);
        self.ball.update(dt, &field);
        self.match_state.handle_boundary_collision(&mut self.ball);

        if !self.match_state.is_goal_scored() {
            self.human.handle_ball_collision(&mut self.ball, dt, &mut self.rng);
        }

        result.event = self.match_state.update(dt, &mut self.ball);

        if self.ai_enabled {
            let human_pos = self.human.position();
            self.coordinator.update(dt, &mut self.ball, &human_pos, &field, &mut self.rng);
        }

        self.frame += 1;
        self.elapsed_s += dt;
        result
    }

    fn apply_input(&mut self, input: &FrameInput, result: &mut StepResult) {
        if input.reset_ball {
            self.ball.reset();
            debug!(frame = self.frame, "ball reset");
        }

        if input.toggle_ai {
            self.ai_enabled = !self.ai_enabled;
            debug!(enabled = self.ai_enabled, "AI toggled");
        }

        self.human.set_movement_input(input.movement_direction, input.sprinting);
        if let Some(facing) = input.target_facing {
            self.human.set_target_facing(facing);
        }

        // no kicking the ball out of the net mid-celebration
        if input.kick_just_pressed && !self.match_state.is_goal_scored() {
            result.kicked = self.human.try_kick(&mut self.ball, input.sprinting, input.spin_y);
        }
    }

    /// Detached copy of everything a renderer draws
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            frame: self.frame,
            elapsed_s: self.elapsed_s,
            ball: *self.ball.state(),
            human: HumanSnapshot::from(&self.human),
            agents: self.coordinator.agents().iter().map(AgentSnapshot::from).collect(),
            score_left: self.match_state.score_left(),
            score_right: self.match_state.score_right(),
            goal_scored: self.match_state.is_goal_scored(),
            last_scoring_team: self.match_state.last_scoring_team(),
            celebration_alpha: self.match_state.celebration_alpha(),
            ai_enabled: self.ai_enabled,
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn field(&self) -> &FieldBounds {
        &self.config.field
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn human(&self) -> &HumanController {
        &self.human
    }

    pub fn human_mut(&mut self) -> &mut HumanController {
        &mut self.human
    }

    pub fn coordinator(&self) -> &TeamCoordinator {
        &self.coordinator
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.ai_enabled = enabled;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed_s(&self) -> f32 {
        self.elapsed_s
    }
}
