//! Shared geometry helpers
//!
//! Ground-plane distances, facing angles and body overlap checks used by the
//! ball, the human controller and the agents. Facing angle 0 looks down -Z;
//! positive angles turn toward -X.

use std::f32::consts::{PI, TAU};

use nalgebra::Vector3;

use super::physics_constants::collision::COINCIDENT;

pub type Vec3 = Vector3<f32>;

/// Copy of `v` projected onto the ground plane (y = 0)
#[inline]
pub fn horizontal(v: &Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Distance between two points ignoring height
#[inline]
pub fn horizontal_distance(a: &Vec3, b: &Vec3) -> f32 {
    horizontal(&(b - a)).norm()
}

/// Horizontal speed of a velocity vector
#[inline]
pub fn horizontal_speed(v: &Vec3) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

/// Wrap an angle into [-π, π); angles already in range pass through untouched
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    if (-PI..PI).contains(&angle) {
        angle
    } else {
        (angle + PI).rem_euclid(TAU) - PI
    }
}

/// Unit ground-plane direction a body with this facing angle looks along
#[inline]
pub fn facing_direction(angle: f32) -> Vec3 {
    Vec3::new(-angle.sin(), 0.0, -angle.cos())
}

/// Facing angle that looks along `dir` (inverse of [`facing_direction`])
#[inline]
pub fn facing_angle(dir: &Vec3) -> f32 {
    (-dir.x).atan2(-dir.z)
}

/// Exponential turn toward `target`, frame-rate independent.
///
/// Covers `1 - e^(-turn_rate * dt)` of the shortest angular difference and
/// returns the new facing wrapped into [-π, π).
pub fn smooth_facing(current: f32, target: f32, turn_rate: f32, dt: f32) -> f32 {
    let diff = wrap_angle(target - current);
    let t = 1.0 - (-turn_rate * dt).exp();
    wrap_angle(current + diff * t)
}

/// Penetration between two bodies on the ground plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Unit ground-plane direction from the first body toward the second
    pub direction: Vec3,
    /// Current horizontal distance between the bodies
    pub distance: f32,
    /// How far the bodies must move apart to stop touching
    pub depth: f32,
}

/// Check whether `b` sits closer than `min_distance` to `a` on the ground plane.
///
/// Coincident bodies report no overlap since they have no separating direction.
pub fn check_overlap(a: &Vec3, b: &Vec3, min_distance: f32) -> Option<Overlap> {
    let offset = horizontal(&(b - a));
    let distance = offset.norm();
    if distance < min_distance && distance > COINCIDENT {
        Some(Overlap { direction: offset / distance, distance, depth: min_distance - distance })
    } else {
        None
    }
}
