//! Ball entity
//!
//! Thin owner of a [`BallState`] with the actions players perform on it.
//! Flight itself lives in [`super::ball_physics`].

use super::ball_physics::{self, BallState};
use super::field::FieldBounds;
use super::geometry::Vec3;
use super::physics_constants::ball;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    state: BallState,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    pub const RADIUS: f32 = ball::RADIUS;

    /// New ball on the kick-off spot
    pub fn new() -> Self {
        let mut b = Self { state: BallState::default() };
        b.reset();
        b
    }

    /// Advance one frame of flight
    pub fn update(&mut self, dt: f32, bounds: &FieldBounds) {
        ball_physics::advance(&mut self.state, dt, bounds);
    }

    /// Back to the centre spot, slightly raised, with no motion or spin
    pub fn reset(&mut self) {
        self.state = BallState {
            position: Vec3::new(0.0, ball::KICKOFF_HEIGHT, 0.0),
            velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            rotation_angle: 0.0,
        };
    }

    /// Replace velocity with `normalize(direction) * power` and set spin to (spin_x, spin_y, 0).
    ///
    /// A zero direction leaves the ball untouched.
    pub fn kick(&mut self, direction: Vec3, power: f32, spin_y: f32, spin_x: f32) {
        let Some(dir) = direction.try_normalize(f32::EPSILON) else {
            return;
        };
        self.state.velocity = dir * power;
        self.state.angular_velocity = Vec3::new(spin_x, spin_y, 0.0);
    }

    /// Add `direction * force` to the current velocity
    pub fn push(&mut self, direction: Vec3, force: f32) {
        self.state.velocity += direction * force;
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    pub fn angular_velocity(&self) -> Vec3 {
        self.state.angular_velocity
    }

    pub fn rotation_angle(&self) -> f32 {
        self.state.rotation_angle
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.state.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.state.velocity = velocity;
    }

    pub fn state(&self) -> &BallState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BallState {
        &mut self.state
    }

    pub fn is_in_air(&self) -> bool {
        ball_physics::is_in_air(&self.state)
    }

    pub fn is_low(&self) -> bool {
        ball_physics::is_low(&self.state)
    }
}
