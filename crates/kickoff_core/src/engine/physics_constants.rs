//! Physics and tuning constants for the match simulation
//!
//! SI units throughout (meters, seconds, kilograms, radians).
//! World axes: X runs goal to goal, Z runs touchline to touchline, Y is up.

/// Ball physical properties and aerodynamics
pub mod ball {
    /// Ball radius (m)
    pub const RADIUS: f32 = 0.22;
    /// Ball mass (kg) - FIFA: 410-450g
    pub const MASS_KG: f32 = 0.43;
    /// Gravity constant (m/s²)
    pub const GRAVITY: f32 = 9.81;
    /// Air density (kg/m³)
    pub const AIR_DENSITY: f32 = 1.2;
    /// Aerodynamic drag coefficient
    pub const DRAG_COEFFICIENT: f32 = 0.2;
    /// Spin curve strength (Magnus force per unit of ω × v)
    pub const MAGNUS_COEFFICIENT: f32 = 0.5;
    /// Maximum Magnus acceleration (m/s²)
    pub const MAGNUS_MAX_ACCEL: f32 = 15.0;
    /// Minimum spin magnitude for Magnus to act (rad/s)
    pub const MAGNUS_MIN_SPIN: f32 = 0.1;
    /// Minimum speed for Magnus to act (m/s)
    pub const MAGNUS_MIN_SPEED: f32 = 1.0;
    /// Minimum start-of-frame speed for drag to act (m/s)
    pub const DRAG_MIN_SPEED: f32 = 0.1;
    /// Speed below which drag has no direction to oppose (m/s)
    pub const DRAG_EPSILON: f32 = 0.01;
    /// Height above resting height that counts as airborne (m)
    pub const AIRBORNE_MARGIN: f32 = 0.3;
    /// Height above resting height under which the ball is kickable (m)
    pub const LOW_MARGIN: f32 = 0.15;
    /// Maximum upward speed for a kickable ball (m/s)
    pub const LOW_MAX_RISE_SPEED: f32 = 0.5;
    /// Spin retained per second while airborne
    pub const SPIN_DECAY_AIR: f32 = 0.98;
    /// Spin retained per second while on the ground
    pub const SPIN_DECAY_GROUND: f32 = 0.9;
    /// Visual roll rate per unit of linear speed
    pub const VISUAL_SPIN_RATE: f32 = 3.0;
    /// Minimum speed for the visual roll to advance (m/s)
    pub const VISUAL_SPIN_MIN_SPEED: f32 = 0.1;
    /// Kick-off spot height; the ball drops onto the grass from here
    pub const KICKOFF_HEIGHT: f32 = 0.5;
}

/// Ground contact: bounce and rolling
pub mod bounce {
    /// Vertical speed retained on bounce (restitution)
    pub const RESTITUTION: f32 = 0.7;
    /// Minimum descent speed that produces a bounce (m/s)
    pub const MIN_BOUNCE_SPEED: f32 = 0.5;
    /// Horizontal velocity retained on bounce
    pub const HORIZONTAL_RETAIN: f32 = 0.9;
    /// Spin retained on bounce
    pub const SPIN_RETAIN: f32 = 0.7;
    /// Rolling friction coefficient on grass
    pub const ROLLING_FRICTION: f32 = 0.3;
    /// Height above resting height still considered rolling (m)
    pub const ROLLING_MARGIN: f32 = 0.05;
    /// Horizontal speed that snaps to rest (m/s)
    pub const ROLLING_STOP_SPEED: f32 = 0.01;
}

/// Field wall reflection
pub mod boundary {
    /// Velocity retained by the ball-dynamics wall reflection
    pub const DYNAMICS_RESTITUTION: f32 = 0.5;
    /// Spin retained by the ball-dynamics wall reflection
    pub const DYNAMICS_SPIN_RETAIN: f32 = 0.5;
    /// Side wall distance beyond the touchline for the ball-dynamics layer (m)
    pub const DYNAMICS_SIDE_MARGIN: f32 = 0.5;
    /// Velocity retained by the match-state wall reflection
    pub const MATCH_RESTITUTION: f32 = 0.6;
    /// Margin kept between movers and the field lines (m)
    pub const PLAY_AREA_MARGIN: f32 = 1.0;
}

/// Human-controlled player
pub mod human {
    /// Jog speed (m/s)
    pub const MAX_SPEED: f32 = 8.0;
    /// Sprint speed (m/s)
    pub const SPRINT_SPEED: f32 = 12.0;
    /// Acceleration toward target velocity (m/s²)
    pub const ACCELERATION: f32 = 40.0;
    /// Deceleration without input (m/s²)
    pub const DECELERATION: f32 = 30.0;
    /// Exponential turn rate (1/s)
    pub const TURN_RATE: f32 = 6.0;
    /// Body collision radius (m)
    pub const RADIUS: f32 = 0.3;
    /// Maximum distance for a kick (m)
    pub const KICK_RANGE: f32 = 1.5;
    /// Kick power (m/s)
    pub const KICK_POWER: f32 = 15.0;
    /// Sprint kick power (m/s)
    pub const SPRINT_KICK_POWER: f32 = 22.0;
    /// Upward component of the kick direction before normalization
    pub const KICK_LIFT: f32 = 0.3;
    /// Topspin applied to sprint kicks (rad/s)
    pub const SPRINT_TOPSPIN: f32 = -5.0;
    /// Kick animation length (s)
    pub const KICK_ANIMATION_S: f32 = 0.3;
    /// Maximum distance for dribble steering (m)
    pub const DRIBBLE_RANGE: f32 = 1.2;
    /// Distance of the ideal dribble point ahead of the player (m)
    pub const DRIBBLE_LEAD: f32 = 0.8;
    /// Steering gain toward the ideal dribble point
    pub const DRIBBLE_CONTROL: f32 = 0.15;
    /// Minimum facing alignment (dot) for dribble steering
    pub const DRIBBLE_MIN_ALIGNMENT: f32 = -0.3;
    /// Interval between dribble touches (s)
    pub const TOUCH_INTERVAL_S: f32 = 0.15;
    /// Touch impulse scale relative to player speed
    pub const TOUCH_SCALE: f32 = 0.3;
    /// Ball speed cap relative to player speed while dribbling
    pub const DRIBBLE_SPEED_CAP: f32 = 1.5;
    /// Ball height above rest that still counts as grounded for dribbling (m)
    pub const DRIBBLE_GROUND_MARGIN: f32 = 0.1;
    /// Minimum player speed for dribbling and momentum transfer (m/s)
    pub const MIN_MOVING_SPEED: f32 = 0.5;
    /// Fraction of player speed transferred to the ball on contact
    pub const MOMENTUM_TRANSFER: f32 = 0.3;
    /// Animation clock rate per unit of speed
    pub const ANIMATION_RATE: f32 = 0.8;
    /// Spawn position (x, z)
    pub const SPAWN_XZ: (f32, f32) = (0.0, 5.0);
}

/// AI-controlled player
pub mod agent {
    /// Maximum speed (m/s) - slightly slower than the human player
    pub const MAX_SPEED: f32 = 7.0;
    /// Acceleration (m/s²)
    pub const ACCELERATION: f32 = 25.0;
    /// Shot power (m/s)
    pub const KICK_POWER: f32 = 15.0;
    /// Vertical lift applied to shots (m/s)
    pub const KICK_LIFT: f32 = 1.0;
    /// Maximum horizontal distance for a shot (m)
    pub const KICK_RANGE: f32 = 1.0;
    /// Exponential turn rate (1/s)
    pub const TURN_RATE: f32 = 8.0;
    /// Time between shots (s)
    pub const KICK_COOLDOWN_S: f32 = 1.5;
    /// Body collision radius (m)
    pub const RADIUS: f32 = 0.3;
    /// Lateral shot perturbation scale
    pub const SHOT_SPREAD: f32 = 0.3;
    /// Ball position lookahead for interception (s)
    pub const INTERCEPT_LOOKAHEAD_S: f32 = 0.2;
    /// Fraction of max speed used when repositioning
    pub const REPOSITION_SPEED_FACTOR: f32 = 0.5;
    /// Distance at which the agent counts as arrived (m)
    pub const ARRIVE_DISTANCE: f32 = 0.5;
    /// Arrival speed cap per meter of remaining distance (1/s)
    pub const ARRIVE_GAIN: f32 = 2.0;
    /// Per-frame velocity damping once arrived
    pub const ARRIVE_DAMPING: f32 = 0.9;
    /// Speed under which an arrived agent stops (m/s)
    pub const STOP_SPEED: f32 = 0.1;
    /// Maximum distance at which any agent pursues (m)
    pub const MAX_PURSUIT_DISTANCE: f32 = 35.0;
    /// Ball x beyond which a chaser stops pressing into the opponent half (m)
    pub const CHASER_MIDFIELD_LIMIT: f32 = 40.0;
    /// Formation shift per meter of ball x
    pub const FORMATION_SHIFT: f32 = 0.2;
    /// Formation shift scale for defenders
    pub const DEFENDER_SHIFT_SCALE: f32 = 0.3;
    /// Formation shift scale for midfielders and forwards
    pub const FIELD_SHIFT_SCALE: f32 = 0.5;
    /// Goalkeeper lateral tracking ratio of ball z
    pub const KEEPER_TRACKING: f32 = 0.5;
    /// Goalkeeper inset from each post (m)
    pub const KEEPER_POST_INSET: f32 = 1.0;
    /// Animation clock rate per unit of speed
    pub const ANIMATION_RATE: f32 = 0.8;
    /// Minimum speed for the animation clock to advance (m/s)
    pub const ANIMATION_MIN_SPEED: f32 = 0.5;
}

/// Role inference and goalkeeper engagement
pub mod roles {
    /// Home |x| beyond which an agent is a goalkeeper (m)
    pub const GOALKEEPER_HOME_X: f32 = 40.0;
    /// Home |x| beyond which an agent is a defender (m)
    pub const DEFENDER_HOME_X: f32 = 30.0;
    /// Ball distance along X from own goal that engages the keeper (m)
    pub const KEEPER_ENGAGE_GOAL_DISTANCE: f32 = 20.0;
    /// Ball distance from the keeper that engages the keeper (m)
    pub const KEEPER_ENGAGE_DISTANCE: f32 = 15.0;
}

/// Body-body separation distances
pub mod collision {
    /// Agent-ball separation distance (m)
    pub const AGENT_BALL: f32 = 0.5;
    /// Agent-human separation distance (m)
    pub const AGENT_HUMAN: f32 = 0.8;
    /// Agent-agent separation distance (m)
    pub const AGENT_AGENT: f32 = 0.7;
    /// Distance under which two bodies are treated as coincident (m)
    pub const COINCIDENT: f32 = 0.01;
}

/// Goal celebration window
pub mod celebration {
    /// Celebration length (s)
    pub const DURATION_S: f32 = 3.0;
    /// Fade-in length at the start of the window (s)
    pub const FADE_IN_S: f32 = 0.5;
    /// Fade-out length at the end of the window (s)
    pub const FADE_OUT_S: f32 = 1.0;
}

/// Default field dimensions (FIFA standard)
pub mod field {
    /// Field length (m)
    pub const LENGTH_M: f32 = 105.0;
    /// Field width (m)
    pub const WIDTH_M: f32 = 68.0;
    /// Goal width (m)
    pub const GOAL_WIDTH_M: f32 = 7.32;
    /// Goal height / crossbar (m)
    pub const GOAL_HEIGHT_M: f32 = 2.44;
}
