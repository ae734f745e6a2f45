//! Brick Breaker headless demo
//!
//! Runs autopilot sessions against the simulation core and logs each outcome.
//! A renderer host would drive the engine the same way: one `run_frame` per
//! display frame, paddle input in between.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use brick_breaker::{Autopilot, FieldConfig, GameEvent, SimulationEngine};

/// Env var naming an optional JSON playfield override
const CONFIG_ENV: &str = "BRICK_BREAKER_CONFIG";
/// Sessions to play
const SESSIONS: u32 = 3;
/// Frame cap per session (~30 minutes at 60 Hz)
const MAX_FRAMES: u64 = 60 * 60 * 30;
/// Autopilot aim error
const AIM_ERROR: f32 = 60.0;

fn load_config() -> Result<FieldConfig> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(FieldConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {CONFIG_ENV} file {path}"))?;
    let config = FieldConfig::from_json(&json).with_context(|| format!("parsing {path}"))?;
    log::info!("Loaded field config from {}", path);
    Ok(config)
}

fn play_session(engine: &mut SimulationEngine, pilot: &mut Autopilot) -> Option<GameEvent> {
    engine.start();
    let mut frames = 0u64;
    while let Some(token) = engine.pending_frame() {
        if frames >= MAX_FRAMES {
            log::warn!("Frame cap reached with {} bricks left", engine.bricks_remaining());
            engine.stop();
            return None;
        }
        pilot.steer(engine);
        if let Some(event) = engine.run_frame(token) {
            log::debug!("Session ended after {frames} frames");
            return Some(event);
        }
        frames += 1;
    }
    None
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let config = load_config()?;
    let mut engine = SimulationEngine::with_config(config).context("invalid field config")?;
    engine.set_event_listener(|event| match event {
        GameEvent::Won { score } => log::info!("You win! Score: {score}"),
        GameEvent::Lost { score } => log::info!("Game over! Score: {score}"),
    });

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|d| u64::try_from(d.as_millis()).ok())
        .unwrap_or_default();
    log::info!("Autopilot seed: {}", seed);

    for session in 1..=SESSIONS {
        let mut pilot = Autopilot::new(seed.wrapping_add(session as u64), AIM_ERROR);
        let outcome = play_session(&mut engine, &mut pilot);
        let snapshot = engine.snapshot();
        log::info!(
            "Session {session}: {:?}, score {}, lives {}, {} bricks left",
            outcome,
            snapshot.score,
            snapshot.lives,
            snapshot.bricks_remaining()
        );
        log::trace!("Final frame: {}", snapshot.to_json()?);
    }

    Ok(())
}
