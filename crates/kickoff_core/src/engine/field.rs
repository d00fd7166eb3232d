//! Field geometry and team sides
//!
//! The pitch is centred on the origin: end lines at x = ±length/2, touchlines
//! at z = ±width/2. Goals sit centred on each end line.

use serde::{Deserialize, Serialize};

use super::geometry::Vec3;
use super::physics_constants::{boundary, field};

/// Field dimensions, fixed for the duration of a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBounds {
    /// End line to end line (m)
    pub length: f32,
    /// Touchline to touchline (m)
    pub width: f32,
    /// Distance between the posts (m)
    pub goal_width: f32,
    /// Crossbar height (m)
    pub goal_height: f32,
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self {
            length: field::LENGTH_M,
            width: field::WIDTH_M,
            goal_width: field::GOAL_WIDTH_M,
            goal_height: field::GOAL_HEIGHT_M,
        }
    }
}

impl FieldBounds {
    pub fn new(length: f32, width: f32, goal_width: f32, goal_height: f32) -> Self {
        Self { length, width, goal_width, goal_height }
    }

    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn goal_half_width(&self) -> f32 {
        self.goal_width / 2.0
    }

    /// Whether a point beyond an end line lies inside the goal mouth window
    /// (between the posts and under the crossbar; no lower bound on height).
    pub fn in_goal_mouth(&self, pos: &Vec3) -> bool {
        pos.z.abs() < self.goal_half_width() && pos.y < self.goal_height
    }

    /// Rectangle players are confined to: the field inset by a fixed margin
    pub fn play_area(&self) -> PlayArea {
        PlayArea::inset(self, boundary::PLAY_AREA_MARGIN)
    }
}

/// Axis-aligned ground-plane rectangle movers are clamped into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl PlayArea {
    pub fn inset(bounds: &FieldBounds, margin: f32) -> Self {
        let hl = bounds.half_length() - margin;
        let hw = bounds.half_width() - margin;
        Self { min_x: -hl, max_x: hl, min_z: -hw, max_z: hw }
    }

    /// Clamp the ground-plane components of `pos` into the rectangle
    pub fn clamp(&self, pos: &mut Vec3) {
        pos.x = pos.x.clamp(self.min_x, self.max_x);
        pos.z = pos.z.clamp(self.min_z, self.max_z);
    }

    pub fn contains(&self, pos: &Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x) && (self.min_z..=self.max_z).contains(&pos.z)
    }
}

/// The two sides of the match. Red defends -X and attacks +X; Blue the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    Red,
    Blue,
}

impl TeamSide {
    /// Numeric team identifier (0 = Red, 1 = Blue)
    pub fn index(self) -> usize {
        match self {
            TeamSide::Red => 0,
            TeamSide::Blue => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Red => TeamSide::Blue,
            TeamSide::Blue => TeamSide::Red,
        }
    }

    /// X of the goal line this side defends
    pub fn own_goal_x(self, bounds: &FieldBounds) -> f32 {
        match self {
            TeamSide::Red => -bounds.half_length(),
            TeamSide::Blue => bounds.half_length(),
        }
    }

    /// X of the goal line this side shoots at
    pub fn attacking_goal_x(self, bounds: &FieldBounds) -> f32 {
        self.opponent().own_goal_x(bounds)
    }

    pub fn name(self) -> &'static str {
        match self {
            TeamSide::Red => "Red",
            TeamSide::Blue => "Blue",
        }
    }
}
