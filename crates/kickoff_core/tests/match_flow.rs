//! End-to-end match flow through the public API

use kickoff_core::engine::geometry::{facing_angle, horizontal};
use kickoff_core::{
    Ball, FrameInput, LiveMatch, MatchConfig, MatchEvent, TeamSide, Vec3, DEFAULT_FRAME_DT,
};

/// Run at the ball, face it, and kick whenever it is in range
fn chase_and_shoot(game: &LiveMatch) -> FrameInput {
    let to_ball = horizontal(&(game.ball().position() - game.human().position()));
    let distance = to_ball.norm();
    let mut input = FrameInput::default();
    if distance > 0.05 {
        input.movement_direction = to_ball / distance;
        input.target_facing = Some(facing_angle(&to_ball));
    }
    input.kick_just_pressed = game.frame() % 20 == 0 && distance < 1.2;
    input
}

fn run(seed: u64, frames: usize) -> LiveMatch {
    let mut game = LiveMatch::new(MatchConfig::deterministic(seed)).expect("valid config");
    for _ in 0..frames {
        let input = chase_and_shoot(&game);
        game.step(DEFAULT_FRAME_DT, &input);
    }
    game
}

#[test]
fn goal_scored_then_play_resumes() {
    let mut game = LiveMatch::new(MatchConfig::practice()).expect("valid config");
    game.ball_mut().set_position(Vec3::new(53.5, 1.0, 0.0));

    let first = game.step(DEFAULT_FRAME_DT, &FrameInput::default());
    assert_eq!(
        first.event,
        Some(MatchEvent::GoalScored { team: TeamSide::Red, score_left: 0, score_right: 1 })
    );
    assert!(game.match_state().is_goal_scored());
    assert_eq!(game.match_state().celebration_alpha(), 0.0);

    let mut resumed = false;
    for _ in 0..200 {
        let step = game.step(DEFAULT_FRAME_DT, &FrameInput::default());
        match step.event {
            Some(MatchEvent::PlayResumed) => {
                resumed = true;
                break;
            }
            Some(other) => panic!("unexpected event during celebration: {other:?}"),
            None => {}
        }
    }
    assert!(resumed, "celebration should end within 3 seconds");
    assert_eq!(game.ball().position(), Vec3::new(0.0, 0.5, 0.0));
    assert_eq!(game.match_state().score_right(), 1);
    assert_eq!(game.match_state().score_left(), 0);
}

#[test]
fn shot_from_the_edge_of_the_box_goes_in() {
    let mut game = LiveMatch::new(MatchConfig::practice()).expect("valid config");
    // facing starts down -Z; turn toward the +X goal first
    game.human_mut().set_position(Vec3::new(40.0, 0.0, 0.0));
    game.ball_mut().set_position(Vec3::new(40.8, Ball::RADIUS, 0.0));

    let aim = FrameInput { target_facing: Some(facing_angle(&Vec3::new(1.0, 0.0, 0.0))), ..FrameInput::default() };
    for _ in 0..90 {
        game.step(DEFAULT_FRAME_DT, &aim);
    }
    game.ball_mut().set_position(Vec3::new(40.8, Ball::RADIUS, 0.0));
    game.ball_mut().set_velocity(Vec3::zeros());

    let kick = FrameInput { kick_just_pressed: true, ..aim.clone() };
    assert!(game.step(DEFAULT_FRAME_DT, &kick).kicked);

    let mut scored = None;
    for _ in 0..180 {
        if let Some(event) = game.step(DEFAULT_FRAME_DT, &aim).event {
            scored = Some(event);
            break;
        }
    }
    assert!(matches!(scored, Some(MatchEvent::GoalScored { team: TeamSide::Red, .. })), "got {scored:?}");
}

#[test]
fn resting_ball_stays_at_rest() {
    let mut game = LiveMatch::new(MatchConfig::practice()).expect("valid config");
    game.ball_mut().set_position(Vec3::new(-20.0, Ball::RADIUS, 10.0));
    for dt in [DEFAULT_FRAME_DT, 0.05, 0.1] {
        for _ in 0..120 {
            game.step(dt, &FrameInput::default());
        }
        assert_eq!(game.ball().position(), Vec3::new(-20.0, Ball::RADIUS, 10.0));
        assert_eq!(game.ball().velocity(), Vec3::zeros());
    }
}

#[test]
fn same_seed_same_match() {
    let a = run(2024, 900);
    let b = run(2024, 900);
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.snapshot().digest(), b.snapshot().digest());
}

#[test]
fn ball_never_sinks_during_play() {
    let mut game = LiveMatch::new(MatchConfig::deterministic(11)).expect("valid config");
    for frame in 0..1200 {
        let input = chase_and_shoot(&game);
        game.step(DEFAULT_FRAME_DT, &input);
        let y = game.ball().position().y;
        assert!(y >= Ball::RADIUS, "ball below the grass at frame {frame}: y = {y}");
    }
}

#[test]
fn exactly_one_chaser_per_team_every_frame() {
    let mut game = LiveMatch::new(MatchConfig::deterministic(3)).expect("valid config");
    for _ in 0..600 {
        let input = chase_and_shoot(&game);
        game.step(DEFAULT_FRAME_DT, &input);
        for team in [TeamSide::Red, TeamSide::Blue] {
            let chasers = game
                .coordinator()
                .agents()
                .iter()
                .filter(|a| a.team() == team && a.is_designated_chaser())
                .count();
            assert_eq!(chasers, 1, "{team:?} should have exactly one chaser");
        }
    }
}

#[test]
fn everyone_stays_on_the_pitch() {
    let mut game = LiveMatch::new(MatchConfig::deterministic(8)).expect("valid config");
    let area = game.field().play_area();
    for _ in 0..900 {
        let input = chase_and_shoot(&game);
        game.step(DEFAULT_FRAME_DT, &input);
        assert!(area.contains(&game.human().position()));
    }
    let field = *game.field();
    for a in game.coordinator().agents() {
        // collision pushes run after the clamp, so check the lines rather than the inset area
        assert!(a.position().x.abs() <= field.half_length());
        assert!(a.position().z.abs() <= field.half_width());
    }
}
