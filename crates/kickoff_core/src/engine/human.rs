//! Human-controlled participant
//!
//! Turns per-frame intent (move direction, sprint, facing, kick) into
//! accelerating locomotion, and handles close control of the ball:
//! dribble steering with periodic touches plus a hard body/ball separation.

use rand::Rng;
use tracing::debug;

use super::ball::Ball;
use super::field::PlayArea;
use super::geometry::{facing_direction, horizontal, horizontal_speed, smooth_facing, Vec3};
use super::physics_constants::{collision, human};

/// Movement, facing and kick state for the single human participant
#[derive(Debug, Clone, PartialEq)]
pub struct HumanController {
    position: Vec3,
    velocity: Vec3,
    /// Facing angle (rad), kept in [-π, π)
    facing: f32,
    target_facing: f32,
    sprinting: bool,
    input_direction: Vec3,
    is_kicking: bool,
    kick_timer: f32,
    animation_time: f32,
    /// Time since the last dribble touch
    touch_timer: f32,
}

impl Default for HumanController {
    fn default() -> Self {
        Self::new(Vec3::new(human::SPAWN_XZ.0, 0.0, human::SPAWN_XZ.1))
    }
}

impl HumanController {
    pub const RADIUS: f32 = human::RADIUS;

    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::zeros(),
            facing: 0.0,
            target_facing: 0.0,
            sprinting: false,
            input_direction: Vec3::zeros(),
            is_kicking: false,
            kick_timer: 0.0,
            animation_time: 0.0,
            touch_timer: 0.0,
        }
    }

    /// Desired ground-plane direction (any length) and sprint flag for the next update
    pub fn set_movement_input(&mut self, direction: Vec3, sprinting: bool) {
        self.input_direction = direction;
        self.sprinting = sprinting;
    }

    pub fn set_target_facing(&mut self, angle: f32) {
        self.target_facing = angle;
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Advance locomotion, facing and animation clocks, then clamp into `area`
    pub fn update(&mut self, dt: f32, area: &PlayArea) {
        self.update_movement(dt);
        self.facing = smooth_facing(self.facing, self.target_facing, human::TURN_RATE, dt);
        self.update_animation(dt);
        area.clamp(&mut self.position);
    }

    fn update_movement(&mut self, dt: f32) {
        let target_speed = if self.sprinting { human::SPRINT_SPEED } else { human::MAX_SPEED };

        if self.input_direction.norm() > 0.01 {
            let target_velocity = self.input_direction.normalize() * target_speed;
            let diff = target_velocity - self.velocity;
            let step = human::ACCELERATION * dt;
            if diff.norm() <= step {
                self.velocity = target_velocity;
            } else {
                self.velocity += diff.normalize() * step;
            }
        } else {
            let speed = self.velocity.norm();
            if speed > 0.01 {
                let step = human::DECELERATION * dt;
                if speed < step {
                    self.velocity = Vec3::zeros();
                } else {
                    self.velocity -= self.velocity / speed * step;
                }
            }
        }

        self.position += self.velocity * dt;
    }

    fn update_animation(&mut self, dt: f32) {
        let speed = self.speed();
        if speed > human::MIN_MOVING_SPEED {
            self.animation_time += dt * speed * human::ANIMATION_RATE;
        }

        if self.kick_timer > 0.0 {
            self.kick_timer -= dt;
            if self.kick_timer <= 0.0 {
                self.is_kicking = false;
            }
        }
    }

    /// Kick the ball along the facing direction with a little lift.
    ///
    /// Returns `false` without touching the ball when it is 1.5 m or more away.
    pub fn try_kick(&mut self, ball: &mut Ball, sprinting: bool, spin_y: f32) -> bool {
        let distance = (ball.position() - self.position).norm();
        if distance >= human::KICK_RANGE {
            return false;
        }

        let forward = facing_direction(self.facing);
        let direction = Vec3::new(forward.x, human::KICK_LIFT, forward.z);
        let (power, spin_x) = if sprinting {
            (human::SPRINT_KICK_POWER, human::SPRINT_TOPSPIN)
        } else {
            (human::KICK_POWER, 0.0)
        };

        ball.kick(direction, power, spin_y, spin_x);
        self.is_kicking = true;
        self.kick_timer = human::KICK_ANIMATION_S;
        debug!(power, spin_y, sprinting, "human kick");
        true
    }

    /// Dribble steering and hard separation between the body and the ball
    pub fn handle_ball_collision<R: Rng + ?Sized>(&mut self, ball: &mut Ball, dt: f32, rng: &mut R) {
        let to_ball = horizontal(&(ball.position() - self.position));
        let distance = to_ball.norm();
        let min_distance = Self::RADIUS + Ball::RADIUS;
        let on_ground = ball.position().y <= Ball::RADIUS + human::DRIBBLE_GROUND_MARGIN;
        let speed = self.speed();

        if distance < human::DRIBBLE_RANGE && speed > human::MIN_MOVING_SPEED && on_ground {
            self.dribble(ball, dt, rng);
        }

        if distance < min_distance && distance > collision::COINCIDENT {
            let push_dir = to_ball / distance;
            let state = ball.state_mut();
            state.position.x = self.position.x + push_dir.x * min_distance;
            state.position.z = self.position.z + push_dir.z * min_distance;

            if speed > human::MIN_MOVING_SPEED {
                state.velocity.x += push_dir.x * speed * human::MOMENTUM_TRANSFER;
                state.velocity.z += push_dir.z * speed * human::MOMENTUM_TRANSFER;
            }
        }
    }

    fn dribble<R: Rng + ?Sized>(&mut self, ball: &mut Ball, dt: f32, rng: &mut R) {
        let to_ball = horizontal(&(ball.position() - self.position));
        let Some(to_ball_dir) = to_ball.try_normalize(collision::COINCIDENT) else {
            return;
        };

        let forward = facing_direction(self.facing);
        if to_ball_dir.dot(&forward) <= human::DRIBBLE_MIN_ALIGNMENT {
            return;
        }

        let speed = self.speed();
        let ideal = self.position + forward * human::DRIBBLE_LEAD;
        let to_ideal = horizontal(&(ideal - ball.position()));

        let state = ball.state_mut();
        state.velocity.x += to_ideal.x * human::DRIBBLE_CONTROL * speed;
        state.velocity.z += to_ideal.z * human::DRIBBLE_CONTROL * speed;

        self.touch_timer += dt;
        if self.touch_timer > human::TOUCH_INTERVAL_S {
            self.touch_timer = 0.0;
            let strength: f32 = rng.gen_range(0.5..1.0);
            state.velocity += forward * speed * strength * human::TOUCH_SCALE;
        }

        let ball_speed = horizontal_speed(&state.velocity);
        let cap = speed * human::DRIBBLE_SPEED_CAP;
        if ball_speed > cap {
            let factor = cap / ball_speed;
            state.velocity.x *= factor;
            state.velocity.z *= factor;
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn target_facing(&self) -> f32 {
        self.target_facing
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    pub fn is_kicking(&self) -> bool {
        self.is_kicking
    }

    pub fn kick_timer(&self) -> f32 {
        self.kick_timer
    }

    pub fn animation_time(&self) -> f32 {
        self.animation_time
    }
}
