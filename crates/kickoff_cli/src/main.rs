//! Headless match runner
//!
//! Plays a match without a window: the human participant is driven by a
//! simple autopilot that runs at the ball and shoots at the -X goal.
//! Logs go to stderr; the summary (or the final snapshot with `--json`) to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use kickoff_core::engine::geometry::{facing_angle, horizontal};
use kickoff_core::engine::timestep::frame_dt_for_rate;
use kickoff_core::{FrameInput, LiveMatch, MatchConfig, MatchEvent, TeamSide, Vec3};

#[derive(Parser)]
#[command(name = "kickoff")]
#[command(about = "Run a headless soccer match simulation", long_about = None)]
struct Cli {
    /// Match configuration JSON (defaults to the standard pitch and rosters)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed, overriding the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Fixed update rate (Hz)
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Start with the autonomous teams switched off
    #[arg(long)]
    no_ai: bool,

    /// Print the final frame snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Distance beyond which the autopilot sprints (m)
const SPRINT_DISTANCE: f32 = 10.0;
/// Distance at which the autopilot shoots (m)
const SHOOT_DISTANCE: f32 = 1.2;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config from {}", path.display()))?,
        None => MatchConfig::realistic(),
    };
    if let Some(seed) = cli.seed {
        config.sim.seed = seed;
    }
    if cli.no_ai {
        config.sim.ai_enabled = false;
    }

    let dt = frame_dt_for_rate(cli.fps);
    let mut game = LiveMatch::new(config).context("invalid match config")?;
    info!(frames = cli.frames, dt, seed = game.config().sim.seed, ai = game.ai_enabled(), "kick-off");

    let mut goals = 0u32;
    let mut kicks = 0u32;
    for _ in 0..cli.frames {
        let input = autopilot(&game);
        let result = game.step(dt, &input);
        if result.kicked {
            kicks += 1;
        }
        if let Some(MatchEvent::GoalScored { .. }) = result.event {
            goals += 1;
        }
    }

    let snapshot = game.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?);
        return Ok(());
    }

    println!("Frames:  {} ({:.1} s simulated)", snapshot.frame, snapshot.elapsed_s);
    println!(
        "Score:   {} {} - {} {}",
        TeamSide::Red.name(),
        snapshot.score_right,
        snapshot.score_left,
        TeamSide::Blue.name()
    );
    println!("Goals:   {goals}  Human kicks: {kicks}");
    println!("Digest:  {}", snapshot.digest());
    Ok(())
}

/// Run at the ball facing the -X goal and shoot when close enough
fn autopilot(game: &LiveMatch) -> FrameInput {
    let human = game.human().position();
    let ball = game.ball().position();
    let to_ball = horizontal(&(ball - human));
    let distance = to_ball.norm();

    let goal = Vec3::new(TeamSide::Blue.attacking_goal_x(game.field()), 0.0, 0.0);
    let to_goal = horizontal(&(goal - human));

    FrameInput {
        movement_direction: if distance > 0.05 { to_ball } else { Vec3::zeros() },
        sprinting: distance > SPRINT_DISTANCE,
        kick_just_pressed: distance < SHOOT_DISTANCE && !game.human().is_kicking(),
        spin_y: 0.0,
        target_facing: Some(facing_angle(&to_goal)),
        reset_ball: false,
        toggle_ai: false,
    }
}

fn init_tracing(default_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
