//! Team coordination
//!
//! Owns every autonomous agent, picks one designated chaser per team each
//! frame and resolves body overlaps after everyone has moved.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::agent::Agent;
use super::ball::Ball;
use super::field::{FieldBounds, TeamSide};
use super::geometry::Vec3;

/// One entry of a roster: which side, and where on the pitch the agent lives
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub team: TeamSide,
    pub x: f32,
    pub z: f32,
}

impl RosterSlot {
    pub const fn new(team: TeamSide, x: f32, z: f32) -> Self {
        Self { team, x, z }
    }

    pub fn home(&self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.z)
    }
}

/// Red plays a full six; Blue's forward slot belongs to the human
pub fn default_roster() -> Vec<RosterSlot> {
    use TeamSide::{Blue, Red};
    vec![
        RosterSlot::new(Red, -45.0, 0.0),
        RosterSlot::new(Red, -35.0, -12.0),
        RosterSlot::new(Red, -35.0, 12.0),
        RosterSlot::new(Red, -15.0, -15.0),
        RosterSlot::new(Red, -15.0, 15.0),
        RosterSlot::new(Red, -5.0, 0.0),
        RosterSlot::new(Blue, 45.0, 0.0),
        RosterSlot::new(Blue, 35.0, -12.0),
        RosterSlot::new(Blue, 35.0, 12.0),
        RosterSlot::new(Blue, 15.0, -15.0),
        RosterSlot::new(Blue, 15.0, 15.0),
    ]
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamCoordinator {
    agents: Vec<Agent>,
}

impl TeamCoordinator {
    /// Both teams on the default roster
    pub fn create_teams() -> Self {
        Self::from_roster(&default_roster())
    }

    pub fn from_roster(roster: &[RosterSlot]) -> Self {
        let agents: Vec<Agent> = roster.iter().map(|slot| Agent::new(slot.home(), slot.team)).collect();
        debug!(
            agents = agents.len(),
            red = agents.iter().filter(|a| a.team() == TeamSide::Red).count(),
            blue = agents.iter().filter(|a| a.team() == TeamSide::Blue).count(),
            "roster created"
        );
        Self { agents }
    }

    /// Flag the nearest non-goalkeeper of each team; clear everyone else.
    ///
    /// Ties go to the agent listed first.
    pub fn assign_chasers(&mut self, ball_pos: &Vec3) {
        let mut nearest: [Option<(usize, f32)>; 2] = [None, None];

        for (i, a) in self.agents.iter().enumerate() {
            if a.is_goalkeeper() {
                continue;
            }
            let distance = a.distance_to_ball(ball_pos);
            let slot = &mut nearest[a.team().index()];
            let closer = slot.map_or(true, |(_, best)| distance < best);
            if closer {
                *slot = Some((i, distance));
            }
        }

        let red = nearest[TeamSide::Red.index()].map(|(i, _)| i);
        let blue = nearest[TeamSide::Blue.index()].map(|(i, _)| i);
        for (i, a) in self.agents.iter_mut().enumerate() {
            a.set_designated_chaser(Some(i) == red || Some(i) == blue);
        }
        trace!(?red, ?blue, "chasers assigned");
    }

    /// Assign chasers, update every agent, then separate bodies
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        ball: &mut Ball,
        human_pos: &Vec3,
        bounds: &FieldBounds,
        rng: &mut R,
    ) {
        self.assign_chasers(&ball.position());

        for a in &mut self.agents {
            a.update(dt, ball, bounds, rng);
        }

        self.resolve_collisions(ball, human_pos);
    }

    /// Agent-ball and agent-human first, then every agent pair once
    pub fn resolve_collisions(&mut self, ball: &mut Ball, human_pos: &Vec3) {
        for a in &mut self.agents {
            a.handle_ball_collision(ball);
            a.handle_human_collision(human_pos);
        }

        for i in 0..self.agents.len() {
            let (head, tail) = self.agents.split_at_mut(i + 1);
            let first = &mut head[i];
            for other in tail {
                first.handle_agent_collision(other);
            }
        }
    }

    /// The designated chaser of `team`, if it has one
    pub fn chaser(&self, team: TeamSide) -> Option<&Agent> {
        self.agents.iter().find(|a| a.team() == team && a.is_designated_chaser())
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
