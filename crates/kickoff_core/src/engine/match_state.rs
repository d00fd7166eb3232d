//! Match state
//!
//! Score keeping and the Playing → Celebrating → Playing lifecycle, plus the
//! match-level boundary rebound that keeps the ball a radius inside the lines.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::ball::Ball;
use super::field::{FieldBounds, TeamSide};
use super::geometry::Vec3;
use super::physics_constants::{boundary, celebration};

/// Something the render/audio side should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    GoalScored { team: TeamSide, score_left: u32, score_right: u32 },
    PlayResumed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    field: FieldBounds,
    /// Goals for Blue (scored in the -X goal)
    score_left: u32,
    /// Goals for Red (scored in the +X goal)
    score_right: u32,
    goal_scored: bool,
    celebration_timer: f32,
    last_scoring_team: Option<TeamSide>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(FieldBounds::default())
    }
}

impl MatchState {
    pub fn new(field: FieldBounds) -> Self {
        Self {
            field,
            score_left: 0,
            score_right: 0,
            goal_scored: false,
            celebration_timer: 0.0,
            last_scoring_team: None,
        }
    }

    pub fn set_field_dimensions(&mut self, field: FieldBounds) {
        self.field = field;
    }

    /// Count down a celebration, or look for a new goal
    pub fn update(&mut self, dt: f32, ball: &mut Ball) -> Option<MatchEvent> {
        if self.goal_scored {
            self.celebration_timer -= dt;
            if self.celebration_timer <= 0.0 {
                self.reset_after_goal(ball);
                return Some(MatchEvent::PlayResumed);
            }
            return None;
        }

        if self.check_goal(&ball.position()) {
            let team = self.last_scoring_team?;
            return Some(MatchEvent::GoalScored {
                team,
                score_left: self.score_left,
                score_right: self.score_right,
            });
        }
        None
    }

    /// Score a goal if the ball has fully crossed a goal line between the posts
    /// and under the bar. Never scores twice during one celebration.
    pub fn check_goal(&mut self, ball_pos: &Vec3) -> bool {
        if self.goal_scored {
            return false;
        }

        let line = self.field.half_length() + Ball::RADIUS;
        let in_mouth = ball_pos.z.abs() < self.field.goal_half_width()
            && ball_pos.y > 0.0
            && ball_pos.y < self.field.goal_height;
        if !in_mouth {
            return false;
        }

        let team = if ball_pos.x > line {
            self.score_right += 1;
            TeamSide::Red
        } else if ball_pos.x < -line {
            self.score_left += 1;
            TeamSide::Blue
        } else {
            return false;
        };

        self.goal_scored = true;
        self.celebration_timer = celebration::DURATION_S;
        self.last_scoring_team = Some(team);
        info!(
            team = team.name(),
            score_left = self.score_left,
            score_right = self.score_right,
            "GOAL! {} scores ({} - {})",
            team.name(),
            self.score_left,
            self.score_right
        );
        true
    }

    /// Ball back to the centre spot and play resumes
    pub fn reset_after_goal(&mut self, ball: &mut Ball) {
        ball.reset();
        self.goal_scored = false;
        self.celebration_timer = 0.0;
        info!(score_left = self.score_left, score_right = self.score_right, "play resumed");
    }

    /// Overlay opacity: fades in over the first 0.5 s, out over the last 1 s
    pub fn celebration_alpha(&self) -> f32 {
        if !self.goal_scored || self.celebration_timer <= 0.0 {
            return 0.0;
        }

        let t = self.celebration_timer;
        if t > celebration::DURATION_S - celebration::FADE_IN_S {
            (celebration::DURATION_S - t) / celebration::FADE_IN_S
        } else if t < celebration::FADE_OUT_S {
            t / celebration::FADE_OUT_S
        } else {
            1.0
        }
    }

    /// Whether `pos` is past a touchline, or past an end line outside the goal mouth
    pub fn is_ball_out_of_bounds(&self, pos: &Vec3) -> bool {
        if pos.z.abs() > self.field.half_width() {
            return true;
        }
        pos.x.abs() > self.field.half_length() && !self.field.in_goal_mouth(pos)
    }

    /// Keep the ball a radius inside the touchlines and end lines, sending it
    /// back inward at 60% speed. The goal mouth stays open.
    pub fn handle_boundary_collision(&self, ball: &mut Ball) {
        let pos = ball.position();
        let vel = ball.velocity();
        let side = self.field.half_width() - Ball::RADIUS;
        let end = self.field.half_length() - Ball::RADIUS;
        let state = ball.state_mut();

        if pos.z < -side {
            state.position.z = -side;
            state.velocity.z = vel.z.abs() * boundary::MATCH_RESTITUTION;
        } else if pos.z > side {
            state.position.z = side;
            state.velocity.z = -vel.z.abs() * boundary::MATCH_RESTITUTION;
        }

        if self.field.in_goal_mouth(&pos) {
            return;
        }

        if pos.x < -end {
            state.position.x = -end;
            state.velocity.x = vel.x.abs() * boundary::MATCH_RESTITUTION;
        } else if pos.x > end {
            state.position.x = end;
            state.velocity.x = -vel.x.abs() * boundary::MATCH_RESTITUTION;
        }
    }

    /// Zero the score and drop any celebration in progress
    pub fn reset(&mut self) {
        self.score_left = 0;
        self.score_right = 0;
        self.goal_scored = false;
        self.celebration_timer = 0.0;
        self.last_scoring_team = None;
    }

    pub fn field(&self) -> &FieldBounds {
        &self.field
    }

    pub fn score_left(&self) -> u32 {
        self.score_left
    }

    pub fn score_right(&self) -> u32 {
        self.score_right
    }

    /// True while a goal is being celebrated
    pub fn is_goal_scored(&self) -> bool {
        self.goal_scored
    }

    pub fn celebration_timer(&self) -> f32 {
        self.celebration_timer
    }

    pub fn last_scoring_team(&self) -> Option<TeamSide> {
        self.last_scoring_team
    }
}
