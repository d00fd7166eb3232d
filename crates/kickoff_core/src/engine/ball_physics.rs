//! Ball Dynamics
//!
//! One call to [`advance`] integrates a single frame of ball flight:
//! - gravity, quadratic air drag and Magnus (spin curve) force
//! - spin decay (faster on the grass than in the air)
//! - explicit Euler position step and cosmetic roll angle
//! - ground contact with bounce or soft landing, then rolling friction
//! - end-line and touchline reflection, letting the ball through the goal mouth
//!
//! Pure function of (state, dt, field): no randomness, no hidden state, so a
//! fixed dt sequence reproduces the same trajectory bit for bit.

use serde::{Deserialize, Serialize};

use super::field::FieldBounds;
use super::geometry::{horizontal_speed, Vec3};
use super::physics_constants::{ball, bounce, boundary};

/// Runtime state of the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Spin (rad/s)
    pub angular_velocity: Vec3,
    /// Visual roll angle (rad); cosmetic only
    pub rotation_angle: f32,
}

impl Default for BallState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, ball::KICKOFF_HEIGHT, 0.0),
            velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            rotation_angle: 0.0,
        }
    }
}

/// Height of the ball centre when it rests on the grass
#[inline]
pub fn resting_height() -> f32 {
    ball::RADIUS
}

/// Clearly airborne: drag and Magnus only act above this height
pub fn is_in_air(state: &BallState) -> bool {
    state.position.y > ball::RADIUS + ball::AIRBORNE_MARGIN
}

/// Close to the ground and not rising; safe to kick (no mid-bounce shots)
pub fn is_low(state: &BallState) -> bool {
    state.position.y < ball::RADIUS + ball::LOW_MARGIN
        && state.velocity.y < ball::LOW_MAX_RISE_SPEED
}

/// Advance the ball by `dt` seconds inside `bounds`.
///
/// `dt` must be finite and non-negative; clamping frame hitches is the caller's job.
pub fn advance(state: &mut BallState, dt: f32, bounds: &FieldBounds) {
    let in_air = is_in_air(state);
    let speed = state.velocity.norm();
    let was_resting = state.position.y <= resting_height() + bounce::ROLLING_MARGIN
        && state.velocity.y.abs() < bounce::MIN_BOUNCE_SPEED;

    apply_gravity(state, dt);

    if in_air && speed > ball::DRAG_MIN_SPEED {
        apply_air_drag(state, dt);
    }

    // gated on the speed at the start of the frame
    if in_air && speed > ball::MAGNUS_MIN_SPEED && state.angular_velocity.norm() > ball::MAGNUS_MIN_SPIN {
        state.velocity += spin_curve(&state.angular_velocity, &state.velocity) * dt;
    }

    apply_spin_decay(state, dt);

    state.position += state.velocity * dt;

    if speed > ball::VISUAL_SPIN_MIN_SPEED {
        state.rotation_angle += speed * dt * ball::VISUAL_SPIN_RATE;
    }

    handle_ground_contact(state, was_resting);
    apply_rolling_friction(state, dt);
    handle_field_boundaries(state, bounds);
}

fn apply_gravity(state: &mut BallState, dt: f32) {
    state.velocity.y -= ball::GRAVITY * dt;
}

/// Quadratic drag: F = ½ ρ Cd A v², opposing the direction of travel
fn apply_air_drag(state: &mut BallState, dt: f32) {
    let speed = state.velocity.norm();
    if speed < ball::DRAG_EPSILON {
        return;
    }

    let direction = state.velocity / speed;
    let area = std::f32::consts::PI * ball::RADIUS * ball::RADIUS;
    let drag_force = 0.5 * ball::AIR_DENSITY * ball::DRAG_COEFFICIENT * area * speed * speed;
    let drag_accel = drag_force / ball::MASS_KG;

    state.velocity -= direction * drag_accel * dt;
}

/// Magnus acceleration for a ball spinning at `angular_velocity` while moving at `velocity`.
///
/// F = S (ω × v), clamped to [`ball::MAGNUS_MAX_ACCEL`]. Exactly zero when
/// |ω| ≤ 0.1 rad/s or |v| ≤ 1.0 m/s.
pub fn magnus_acceleration(angular_velocity: &Vec3, velocity: &Vec3) -> Vec3 {
    if angular_velocity.norm() <= ball::MAGNUS_MIN_SPIN || velocity.norm() <= ball::MAGNUS_MIN_SPEED
    {
        return Vec3::zeros();
    }
    spin_curve(angular_velocity, velocity)
}

fn spin_curve(angular_velocity: &Vec3, velocity: &Vec3) -> Vec3 {
    let force = angular_velocity.cross(velocity) * ball::MAGNUS_COEFFICIENT;
    let accel = force / ball::MASS_KG;
    let magnitude = accel.norm();
    if magnitude > ball::MAGNUS_MAX_ACCEL {
        accel * (ball::MAGNUS_MAX_ACCEL / magnitude)
    } else {
        accel
    }
}

fn apply_spin_decay(state: &mut BallState, dt: f32) {
    let retain = if is_in_air(state) { ball::SPIN_DECAY_AIR } else { ball::SPIN_DECAY_GROUND };
    state.angular_velocity *= retain.powf(dt);
}

/// Clamp to the grass and either bounce or land softly.
///
/// A ball already resting on the grass only ever lands softly: the speed it
/// picked up from one frame of gravity is not an impact.
fn handle_ground_contact(state: &mut BallState, was_resting: bool) {
    let ground = resting_height();
    if state.position.y >= ground {
        return;
    }

    state.position.y = ground;

    if !was_resting && state.velocity.y < -bounce::MIN_BOUNCE_SPEED {
        state.velocity.y = -state.velocity.y * bounce::RESTITUTION;
        state.velocity.x *= bounce::HORIZONTAL_RETAIN;
        state.velocity.z *= bounce::HORIZONTAL_RETAIN;
        state.angular_velocity *= bounce::SPIN_RETAIN;
    } else {
        state.velocity.y = 0.0;
    }
}

/// Constant deceleration on the grass; slows to a stop, never reverses
fn apply_rolling_friction(state: &mut BallState, dt: f32) {
    if state.position.y > resting_height() + bounce::ROLLING_MARGIN {
        return;
    }

    let ground_speed = horizontal_speed(&state.velocity);
    if ground_speed > bounce::ROLLING_STOP_SPEED {
        let decel = bounce::ROLLING_FRICTION * ball::GRAVITY * dt;
        let new_speed = (ground_speed - decel).max(0.0);
        let factor = new_speed / ground_speed;
        state.velocity.x *= factor;
        state.velocity.z *= factor;
    } else {
        state.velocity.x = 0.0;
        state.velocity.z = 0.0;
    }
}

/// Reflect off the end lines (except through the goal mouth) and the touchlines
fn handle_field_boundaries(state: &mut BallState, bounds: &FieldBounds) {
    let half_length = bounds.half_length();
    let side_wall = bounds.half_width() + boundary::DYNAMICS_SIDE_MARGIN;

    if state.position.x.abs() > half_length && !bounds.in_goal_mouth(&state.position) {
        state.position.x = half_length.copysign(state.position.x);
        state.velocity.x = -state.velocity.x * boundary::DYNAMICS_RESTITUTION;
        state.angular_velocity *= boundary::DYNAMICS_SPIN_RETAIN;
    }

    if state.position.z.abs() > side_wall {
        state.position.z = side_wall.copysign(state.position.z);
        state.velocity.z = -state.velocity.z * boundary::DYNAMICS_RESTITUTION;
        state.angular_velocity *= boundary::DYNAMICS_SPIN_RETAIN;
    }
}
