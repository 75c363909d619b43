//! Ball Dodge headless runner
//!
//! Plays one seeded session with a scripted pointer that circles the arena,
//! logging progress until game over or the tick cap.
//!
//! Usage: `ball-dodge [seed] [tuning.json]`

use std::f32::consts::TAU;

use glam::Vec2;

use ball_dodge::consts::{DEFAULT_MAX_TICKS, DEFAULT_SEED};
use ball_dodge::sim::GameEvent;
use ball_dodge::{Host, Session, Tuning};

/// Portrait phone-sized surface
const ARENA_SIZE: (f32, f32) = (1080.0, 1920.0);

/// Finger that traces a slow circle, lifting off every few seconds
struct ScriptedHost {
    tick: u64,
}

impl Host for ScriptedHost {
    fn arena_bounds(&self) -> (f32, f32) {
        ARENA_SIZE
    }

    fn latest_pointer_sample(&self) -> Option<Vec2> {
        // Touch for 3 s, release for 1 s (60 ticks per second)
        if self.tick % 240 >= 180 {
            return None;
        }
        let center = Vec2::new(ARENA_SIZE.0, ARENA_SIZE.1) / 2.0;
        let theta = self.tick as f32 * TAU / 600.0;
        Some(center + Vec2::new(theta.cos(), theta.sin()) * 350.0)
    }
}

fn load_tuning(path: Option<String>) -> Result<Tuning, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            log::info!("Loaded tuning from {}", path);
            Ok(Tuning::from_json(&json)?)
        }
        None => Ok(Tuning::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw.parse()?,
        None => DEFAULT_SEED,
    };
    let tuning = load_tuning(args.next())?;

    let mut host = ScriptedHost { tick: 0 };
    let mut session = Session::from_host(&host, tuning, seed)?;
    log::info!("Ball Dodge (headless) starting, seed {}", seed);

    let mut prizes = 0u32;
    while host.tick < DEFAULT_MAX_TICKS && !session.is_game_over() {
        session.poll(&host);
        host.tick += 1;

        for event in session.drain_events() {
            match event {
                GameEvent::PrizeCollected { points, .. } => {
                    prizes += 1;
                    log::debug!("Prize worth {} (total {})", points, session.score() as u64);
                }
                GameEvent::GameOver { score } => log::info!("RIP, final score {}", score as u64),
                _ => {}
            }
        }

        if host.tick % 600 == 0 {
            log::info!(
                "t={} score={} health={:.0}/{:.0} entities={} interval={}",
                session.time_ticks(),
                session.score() as u64,
                session.health(),
                session.health_max(),
                session.entities().count(),
                session.spawn_interval()
            );
        }
    }

    let snapshot = session.snapshot();
    println!(
        "score {} after {} ticks, {} prizes, game over: {}",
        snapshot.score as u64, snapshot.time_ticks, prizes, snapshot.game_over
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
