//! Brick Breaker entry point
//!
//! Native builds run the game headless: a logging frontend, a logging audio
//! backend, and an autopilot standing in for the player.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use brick_breaker::audio::{AudioManager, LogAudio};
use brick_breaker::frontend::LogFrontend;
use brick_breaker::sim::{GamePhase, GameState};
use brick_breaker::{Driver, Settings, Tuning};

/// Run a headless Brick Breaker session
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Gameplay tuning JSON
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Player settings JSON
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).context("loading tuning")?,
        None => Tuning::default(),
    };
    let settings = match &args.settings {
        Some(path) => Settings::load(path).context("loading settings")?,
        None => Settings::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Brick Breaker starting with seed {}", seed);

    let mut audio = AudioManager::new(Some(Box::new(LogAudio)));
    audio.apply_settings(&settings);

    let state = GameState::new(seed, tuning).context("building session")?;
    let mut driver = Driver::new(state, LogFrontend::default(), audio);
    driver.run(Some(args.frames), |state, input| {
        // Chase the ball with a wobble so bounces vary
        let wobble = (state.time_ticks as f32 * 0.05).sin() * state.paddle.width * 0.35;
        input.pointer_move(state.ball.pos.x + wobble, 0.0);

        if state.phase != GamePhase::Playing && state.phase != GamePhase::Paused {
            if let Some(overlay) = state.overlay() {
                input.push_command(overlay.action);
            }
        }
    });

    let state = driver.state();
    log::info!(
        "Finished {} frames: stage {}, score {}, lives {}, phase {:?}",
        driver.frames(),
        state.stage,
        state.score,
        state.lives,
        state.phase
    );
    Ok(())
}
