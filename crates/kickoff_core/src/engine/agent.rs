//! Autonomous agent
//!
//! Each computer-controlled player runs a two-state loop every frame:
//! pursue the ball (with a short interception lookahead) or jog back to a
//! formation slot that shifts with play. Role comes from the home position
//! and never changes; pursuit permission comes from the team coordinator.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ball::Ball;
use super::field::{FieldBounds, TeamSide};
use super::geometry::{check_overlap, facing_angle, horizontal, horizontal_distance, smooth_facing, Vec3};
use super::physics_constants::{agent, collision, roles};

/// Decision state. `Defend` is reserved and never entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    Idle,
    ChaseBall,
    ReturnToPosition,
    Defend,
}

/// Positional role, inferred once from the home position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    Goalkeeper,
    Defender,
    FieldPlayer,
}

impl AgentRole {
    /// Goalkeeper beyond |x| = 40, defender beyond |x| = 30, otherwise field player
    pub fn from_home(home: &Vec3) -> Self {
        let depth = home.x.abs();
        if depth > roles::GOALKEEPER_HOME_X {
            AgentRole::Goalkeeper
        } else if depth > roles::DEFENDER_HOME_X {
            AgentRole::Defender
        } else {
            AgentRole::FieldPlayer
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AgentRole::Goalkeeper => "GK",
            AgentRole::Defender => "DEF",
            AgentRole::FieldPlayer => "FLD",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    position: Vec3,
    velocity: Vec3,
    home_position: Vec3,
    facing: f32,
    target_facing: f32,
    team: TeamSide,
    role: AgentRole,
    state: AgentState,
    kick_cooldown: f32,
    anim_time: f32,
    is_designated_chaser: bool,
    target_position: Vec3,
    target_speed: f32,
}

impl Agent {
    pub const RADIUS: f32 = agent::RADIUS;

    /// Agent standing on its home position
    pub fn new(home: Vec3, team: TeamSide) -> Self {
        Self {
            position: home,
            velocity: Vec3::zeros(),
            home_position: home,
            facing: 0.0,
            target_facing: 0.0,
            team,
            role: AgentRole::from_home(&home),
            state: AgentState::Idle,
            kick_cooldown: 0.0,
            anim_time: 0.0,
            is_designated_chaser: false,
            target_position: home,
            target_speed: agent::MAX_SPEED,
        }
    }

    /// One frame: decide, move, maybe shoot, then clamp and turn
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, ball: &mut Ball, bounds: &FieldBounds, rng: &mut R) {
        if self.kick_cooldown > 0.0 {
            self.kick_cooldown -= dt;
        }

        self.decide_action(&ball.position(), &ball.velocity(), bounds);
        self.move_toward(self.target_position, self.target_speed, dt);
        self.try_kick(ball, bounds, rng);

        let speed = self.velocity.norm();
        if speed > agent::ANIMATION_MIN_SPEED {
            self.anim_time += dt * speed * agent::ANIMATION_RATE;
        }

        bounds.play_area().clamp(&mut self.position);
        self.facing = smooth_facing(self.facing, self.target_facing, agent::TURN_RATE, dt);
    }

    /// Pick pursue or reposition for this frame and set the movement target
    pub fn decide_action(&mut self, ball_pos: &Vec3, ball_vel: &Vec3, bounds: &FieldBounds) {
        let distance = self.distance_to_ball(ball_pos);

        let wants_ball = match self.role {
            AgentRole::Goalkeeper => {
                let own_goal_x = self.team.own_goal_x(bounds);
                (ball_pos.x - own_goal_x).abs() < roles::KEEPER_ENGAGE_GOAL_DISTANCE
                    && distance < roles::KEEPER_ENGAGE_DISTANCE
            }
            _ if self.is_designated_chaser => match self.team {
                TeamSide::Red => ball_pos.x < agent::CHASER_MIDFIELD_LIMIT,
                TeamSide::Blue => ball_pos.x > -agent::CHASER_MIDFIELD_LIMIT,
            },
            _ => false,
        };

        if wants_ball && distance < agent::MAX_PURSUIT_DISTANCE {
            self.state = AgentState::ChaseBall;
            self.chase_ball(ball_pos, ball_vel);
        } else {
            self.state = AgentState::ReturnToPosition;
            self.return_to_position(ball_pos, bounds);
        }
    }

    /// Head for where the ball will be shortly, at full speed
    pub fn chase_ball(&mut self, ball_pos: &Vec3, ball_vel: &Vec3) {
        let predicted = ball_pos + ball_vel * agent::INTERCEPT_LOOKAHEAD_S;
        self.target_position = horizontal(&predicted);
        self.target_speed = agent::MAX_SPEED;
    }

    /// Jog to the home slot shifted toward the ball
    pub fn return_to_position(&mut self, ball_pos: &Vec3, bounds: &FieldBounds) {
        let mut slot = self.home_position;
        let shift = ball_pos.x * agent::FORMATION_SHIFT;

        match self.role {
            AgentRole::Goalkeeper => {
                let limit = (bounds.goal_half_width() - agent::KEEPER_POST_INSET).max(0.0);
                slot.z = (ball_pos.z * agent::KEEPER_TRACKING).clamp(-limit, limit);
            }
            AgentRole::Defender => slot.x += shift * agent::DEFENDER_SHIFT_SCALE,
            AgentRole::FieldPlayer => slot.x += shift * agent::FIELD_SHIFT_SCALE,
        }

        self.target_position = slot;
        self.target_speed = agent::MAX_SPEED * agent::REPOSITION_SPEED_FACTOR;
    }

    /// Accelerate toward `target`, easing off on approach and stopping once arrived
    pub fn move_toward(&mut self, target: Vec3, speed: f32, dt: f32) {
        let to_target = horizontal(&(target - self.position));
        let distance = to_target.norm();

        if distance > agent::ARRIVE_DISTANCE {
            let dir = to_target / distance;
            let desired = dir * (distance * agent::ARRIVE_GAIN).min(speed);
            let diff = desired - self.velocity;
            let step = agent::ACCELERATION * dt;
            if diff.norm() <= step {
                self.velocity = desired;
            } else {
                self.velocity += diff.normalize() * step;
            }
            self.target_facing = facing_angle(&dir);
        } else if self.velocity.norm() > agent::STOP_SPEED {
            self.velocity *= agent::ARRIVE_DAMPING;
        } else {
            self.velocity = Vec3::zeros();
        }

        self.position += self.velocity * dt;
    }

    /// Shoot at the centre of the opposing goal with a little lateral scatter.
    ///
    /// Returns `false` without touching the ball when it is out of range, the
    /// cooldown is still running or the ball is bouncing.
    pub fn try_kick<R: Rng + ?Sized>(&mut self, ball: &mut Ball, bounds: &FieldBounds, rng: &mut R) -> bool {
        // is_low keeps agents from volleying a bouncing ball
        if self.distance_to_ball(&ball.position()) >= agent::KICK_RANGE
            || self.kick_cooldown > 0.0
            || !ball.is_low()
        {
            return false;
        }

        let goal = Vec3::new(self.team.attacking_goal_x(bounds), 0.0, 0.0);
        let Some(mut dir) = horizontal(&(goal - self.position)).try_normalize(f32::EPSILON) else {
            return false;
        };

        let scatter: f32 = rng.gen_range(-0.5..0.5);
        dir.z += scatter * agent::SHOT_SPREAD;
        dir.normalize_mut();

        let mut velocity = dir * agent::KICK_POWER;
        velocity.y = agent::KICK_LIFT;
        ball.set_velocity(velocity);
        self.kick_cooldown = agent::KICK_COOLDOWN_S;

        debug!(team = self.team.name(), role = self.role.name(), x = self.position.x, z = self.position.z, "agent shot");
        true
    }

    /// Keep the ball outside the agent's body
    pub fn handle_ball_collision(&self, ball: &mut Ball) {
        if let Some(overlap) = check_overlap(&self.position, &ball.position(), collision::AGENT_BALL) {
            let state = ball.state_mut();
            state.position.x = self.position.x + overlap.direction.x * collision::AGENT_BALL;
            state.position.z = self.position.z + overlap.direction.z * collision::AGENT_BALL;
        }
    }

    /// Step aside from the human; the human is never moved
    pub fn handle_human_collision(&mut self, human_pos: &Vec3) {
        if let Some(overlap) = check_overlap(&self.position, human_pos, collision::AGENT_HUMAN) {
            self.position -= overlap.direction * overlap.depth;
        }
    }

    /// Push two agents apart by half the overlap each
    pub fn handle_agent_collision(&mut self, other: &mut Agent) {
        if let Some(overlap) = check_overlap(&self.position, &other.position, collision::AGENT_AGENT) {
            let half = overlap.direction * (overlap.depth * 0.5);
            self.position -= half;
            other.position += half;
        }
    }

    /// Ground-plane distance to the ball
    pub fn distance_to_ball(&self, ball_pos: &Vec3) -> f32 {
        horizontal_distance(&self.position, ball_pos)
    }

    pub fn set_designated_chaser(&mut self, chaser: bool) {
        self.is_designated_chaser = chaser;
    }

    pub fn is_designated_chaser(&self) -> bool {
        self.is_designated_chaser
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn home_position(&self) -> Vec3 {
        self.home_position
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn team(&self) -> TeamSide {
        self.team
    }

    pub fn role(&self) -> AgentRole {
        self.role
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.role == AgentRole::Goalkeeper
    }

    pub fn is_defender(&self) -> bool {
        self.role == AgentRole::Defender
    }

    pub fn state(&self) -> AgentState {
        self.state
    }

    pub fn kick_cooldown(&self) -> f32 {
        self.kick_cooldown
    }

    pub fn anim_time(&self) -> f32 {
        self.anim_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const DT: f32 = 1.0 / 60.0;

    fn ball_at(x: f32, z: f32) -> Ball {
        let mut ball = Ball::new();
        ball.set_position(Vec3::new(x, Ball::RADIUS, z));
        ball
    }

    #[test]
    fn test_role_inference() {
        assert_eq!(AgentRole::from_home(&Vec3::new(-45.0, 0.0, 0.0)), AgentRole::Goalkeeper);
        assert_eq!(AgentRole::from_home(&Vec3::new(35.0, 0.0, 12.0)), AgentRole::Defender);
        assert_eq!(AgentRole::from_home(&Vec3::new(40.0, 0.0, 0.0)), AgentRole::Defender);
        assert_eq!(AgentRole::from_home(&Vec3::new(30.0, 0.0, 0.0)), AgentRole::FieldPlayer);
        assert_eq!(AgentRole::from_home(&Vec3::new(-5.0, 0.0, 0.0)), AgentRole::FieldPlayer);
    }

    #[test]
    fn test_new_agent_is_idle_at_home() {
        let a = Agent::new(Vec3::new(-15.0, 0.0, 15.0), TeamSide::Red);
        assert_eq!(a.state(), AgentState::Idle);
        assert_eq!(a.position(), a.home_position());
        assert!(!a.is_designated_chaser());
    }

    #[test]
    fn test_chaser_pursues_with_lookahead() {
        let bounds = FieldBounds::default();
        let mut a = Agent::new(Vec3::new(-15.0, 0.0, 0.0), TeamSide::Red);
        a.set_designated_chaser(true);
        let ball_pos = Vec3::new(-5.0, 0.5, 2.0);
        let ball_vel = Vec3::new(5.0, 3.0, 0.0);

        a.decide_action(&ball_pos, &ball_vel, &bounds);
        assert_eq!(a.state(), AgentState::ChaseBall);
        let expected = Vec3::new(-4.0, 0.0, 2.0);
        assert!((a.target_position() - expected).norm() < 1e-5);
    }

    #[test]
    fn test_non_chaser_repositions_with_shift() {
        let bounds = FieldBounds::default();
        let mut mid = Agent::new(Vec3::new(-15.0, 0.0, 15.0), TeamSide::Red);
        mid.decide_action(&Vec3::new(10.0, 0.22, 0.0), &Vec3::zeros(), &bounds);
        assert_eq!(mid.state(), AgentState::ReturnToPosition);
        // 10 * 0.2 * 0.5
        assert!((mid.target_position().x - -14.0).abs() < 1e-5);
        assert_eq!(mid.target_position().z, 15.0);

        let mut def = Agent::new(Vec3::new(-35.0, 0.0, -12.0), TeamSide::Red);
        def.decide_action(&Vec3::new(10.0, 0.22, 0.0), &Vec3::zeros(), &bounds);
        assert!((def.target_position().x - -34.4).abs() < 1e-5);
    }

    #[test]
    fn test_chaser_holds_back_deep_in_opponent_half() {
        let bounds = FieldBounds::default();
        let mut red = Agent::new(Vec3::new(20.0, 0.0, 0.0), TeamSide::Red);
        red.set_designated_chaser(true);
        red.decide_action(&Vec3::new(41.0, 0.22, 0.0), &Vec3::zeros(), &bounds);
        assert_eq!(red.state(), AgentState::ReturnToPosition);

        let mut blue = Agent::new(Vec3::new(-20.0, 0.0, 0.0), TeamSide::Blue);
        blue.set_designated_chaser(true);
        blue.decide_action(&Vec3::new(-41.0, 0.22, 0.0), &Vec3::zeros(), &bounds);
        assert_eq!(blue.state(), AgentState::ReturnToPosition);
        blue.decide_action(&Vec3::new(-39.0, 0.22, 0.0), &Vec3::zeros(), &bounds);
        assert_eq!(blue.state(), AgentState::ChaseBall);
    }

    #[test]
    fn test_chaser_ignores_distant_ball() {
        let bounds = FieldBounds::default();
        let mut a = Agent::new(Vec3::new(-30.0, 0.0, 0.0), TeamSide::Red);
        a.set_designated_chaser(true);
        a.decide_action(&Vec3::new(6.0, 0.22, 0.0), &Vec3::zeros(), &bounds);
        assert_eq!(a.state(), AgentState::ReturnToPosition);
    }

    #[test]
    fn test_goalkeeper_engages_only_near_goal() {
        let bounds = FieldBounds::default();
        let mut gk = Agent::new(Vec3::new(-45.0, 0.0, 0.0), TeamSide::Red);
        assert!(gk.is_goalkeeper());

        gk.decide_action(&Vec3::new(-40.0, 0.22, 5.0), &Vec3::zeros(), &bounds);
        assert_eq!(gk.state(), AgentState::ChaseBall);

        // close to the keeper but more than 20 m from the goal line
        gk.set_position(Vec3::new(-30.0, 0.0, 0.0));
        gk.decide_action(&Vec3::new(-25.0, 0.22, 0.0), &Vec3::zeros(), &bounds);
        assert_eq!(gk.state(), AgentState::ReturnToPosition);
    }

    #[test]
    fn test_goalkeeper_tracks_ball_inside_posts() {
        let bounds = FieldBounds::default();
        let mut gk = Agent::new(Vec3::new(45.0, 0.0, 0.0), TeamSide::Blue);
        gk.return_to_position(&Vec3::new(0.0, 0.22, 30.0), &bounds);
        let limit = bounds.goal_half_width() - agent::KEEPER_POST_INSET;
        assert!((gk.target_position().z - limit).abs() < 1e-5);
        assert_eq!(gk.target_position().x, 45.0);

        gk.return_to_position(&Vec3::new(0.0, 0.22, -2.0), &bounds);
        assert!((gk.target_position().z - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_move_toward_arrives_and_stops() {
        let mut a = Agent::new(Vec3::zeros(), TeamSide::Red);
        let target = Vec3::new(5.0, 0.0, 0.0);
        for _ in 0..600 {
            a.move_toward(target, agent::MAX_SPEED, DT);
        }
        assert!(horizontal_distance(&a.position(), &target) <= agent::ARRIVE_DISTANCE);
        assert_eq!(a.velocity(), Vec3::zeros());
    }

    #[test]
    fn test_move_toward_faces_direction_of_travel() {
        let bounds = FieldBounds::default();
        let mut a = Agent::new(Vec3::new(-15.0, 0.0, 0.0), TeamSide::Red);
        a.set_designated_chaser(true);
        let mut ball = ball_at(-15.0, -10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..60 {
            a.update(DT, &mut ball, &bounds, &mut rng);
        }
        // heading for -Z means facing angle 0
        assert!(a.facing().abs() < 0.05, "facing {}", a.facing());
        assert!(a.velocity().z < 0.0);
        assert!(a.anim_time() > 0.0);
    }

    #[test]
    fn test_shot_heads_for_opposing_goal() {
        let bounds = FieldBounds::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut red = Agent::new(Vec3::new(20.0, 0.0, 0.0), TeamSide::Red);
        let mut ball = ball_at(20.5, 0.0);

        assert!(red.try_kick(&mut ball, &bounds, &mut rng));
        let v = ball.velocity();
        assert!(v.x > 14.0);
        assert_eq!(v.y, agent::KICK_LIFT);
        assert!((horizontal(&v).norm() - agent::KICK_POWER).abs() < 1e-3);
        // at most 0.15 lateral before renormalising
        assert!(v.z.abs() <= agent::KICK_POWER * 0.15 + 1e-3);
        assert_eq!(red.kick_cooldown(), agent::KICK_COOLDOWN_S);

        let mut blue = Agent::new(Vec3::new(20.0, 0.0, 0.0), TeamSide::Blue);
        ball.set_velocity(Vec3::zeros());
        assert!(blue.try_kick(&mut ball, &bounds, &mut rng));
        assert!(ball.velocity().x < -14.0);
    }

    #[test]
    fn test_update_respects_cooldown() {
        let bounds = FieldBounds::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut a = Agent::new(Vec3::new(20.0, 0.0, 0.0), TeamSide::Red);
        let mut ball = ball_at(20.5, 0.0);

        a.update(DT, &mut ball, &bounds, &mut rng);
        assert!(ball.velocity().x > 14.0);

        ball.set_position(Vec3::new(a.position().x + 0.5, Ball::RADIUS, 0.0));
        ball.set_velocity(Vec3::zeros());
        a.update(DT, &mut ball, &bounds, &mut rng);
        assert_eq!(ball.velocity(), Vec3::zeros());
    }

    #[test]
    fn test_no_shot_at_airborne_ball() {
        let bounds = FieldBounds::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut a = Agent::new(Vec3::new(20.0, 0.0, 0.0), TeamSide::Red);
        let mut ball = Ball::new();
        ball.set_position(Vec3::new(20.5, 1.0, 0.0));

        a.update(DT, &mut ball, &bounds, &mut rng);
        assert_eq!(ball.velocity(), Vec3::zeros());
        assert_eq!(a.kick_cooldown(), 0.0);
    }

    #[test]
    fn test_kick_refused_out_of_range() {
        let bounds = FieldBounds::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut a = Agent::new(Vec3::zeros(), TeamSide::Red);
        let mut ball = ball_at(-30.0, 20.0);

        assert!(!a.try_kick(&mut ball, &bounds, &mut rng));
        assert_eq!(ball.velocity(), Vec3::zeros());
        assert_eq!(a.kick_cooldown(), 0.0);
    }

    #[test]
    fn test_kick_refused_on_cooldown() {
        let bounds = FieldBounds::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut a = Agent::new(Vec3::zeros(), TeamSide::Red);
        let mut ball = ball_at(0.5, 0.0);

        assert!(a.try_kick(&mut ball, &bounds, &mut rng));
        ball.set_position(Vec3::new(0.5, Ball::RADIUS, 0.0));
        ball.set_velocity(Vec3::zeros());
        assert!(!a.try_kick(&mut ball, &bounds, &mut rng));
        assert_eq!(ball.velocity(), Vec3::zeros());
    }

    #[test]
    fn test_kick_refused_for_bouncing_ball() {
        let bounds = FieldBounds::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut a = Agent::new(Vec3::zeros(), TeamSide::Red);
        let mut ball = ball_at(0.5, 0.0);
        ball.set_velocity(Vec3::new(0.0, 2.0, 0.0));

        assert!(!a.try_kick(&mut ball, &bounds, &mut rng));
        assert_eq!(ball.velocity(), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(a.kick_cooldown(), 0.0);
    }

    #[test]
    fn test_zero_dt_keeps_cruising_agent_finite() {
        let mut a = Agent::new(Vec3::zeros(), TeamSide::Red);
        let target = Vec3::new(40.0, 0.0, 0.0);
        for _ in 0..60 {
            a.move_toward(target, agent::MAX_SPEED, DT);
        }
        let cruising = a.velocity();
        assert!((cruising.norm() - agent::MAX_SPEED).abs() < 1e-4);

        let before = a.position();
        a.move_toward(target, agent::MAX_SPEED, 0.0);
        assert_eq!(a.velocity(), cruising);
        assert_eq!(a.position(), before);

        a.move_toward(target, agent::MAX_SPEED, DT);
        assert!(a.position().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_ball_pushed_out_of_body() {
        let a = Agent::new(Vec3::zeros(), TeamSide::Red);
        let mut ball = ball_at(0.0, 0.2);
        a.handle_ball_collision(&mut ball);
        assert!((ball.position().z - collision::AGENT_BALL).abs() < 1e-6);
        assert_eq!(ball.position().y, Ball::RADIUS);
    }

    #[test]
    fn test_agent_steps_aside_from_human() {
        let mut a = Agent::new(Vec3::zeros(), TeamSide::Red);
        a.handle_human_collision(&Vec3::new(0.5, 0.0, 0.0));
        assert!((a.position().x - -0.3).abs() < 1e-6);
    }

    #[test]
    fn test_agent_pair_split_evenly() {
        let mut a = Agent::new(Vec3::zeros(), TeamSide::Red);
        let mut b = Agent::new(Vec3::new(0.0, 0.0, 0.3), TeamSide::Blue);
        a.handle_agent_collision(&mut b);
        assert!((a.position().z - -0.2).abs() < 1e-6);
        assert!((b.position().z - 0.5).abs() < 1e-6);
        assert!((horizontal_distance(&a.position(), &b.position()) - collision::AGENT_AGENT).abs() < 1e-5);
    }

    #[test]
    fn test_position_clamped_to_play_area() {
        let bounds = FieldBounds::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut a = Agent::new(Vec3::new(10.0, 0.0, 0.0), TeamSide::Red);
        a.set_position(Vec3::new(60.0, 0.0, -40.0));
        let mut ball = ball_at(0.0, 0.0);
        a.update(DT, &mut ball, &bounds, &mut rng);
        assert!(bounds.play_area().contains(&a.position()));
    }
}
