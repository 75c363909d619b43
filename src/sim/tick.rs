//! Discrete simulation tick
//!
//! Core game loop that advances the simulation one step:
//! game-over check → avatar (with input) → entity update/collide/cull → spawner.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer/touch position, `None` when nothing is pressed
    pub pointer: Option<Vec2>,
    /// Pointer went down this tick (press edge, not a held drag)
    pub tap: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    pub fn pointer(x: f32, y: f32) -> Self {
        Self {
            pointer: Some(Vec2::new(x, y)),
            ..Default::default()
        }
    }

    /// A fresh press at `(x, y)`
    pub fn tap(x: f32, y: f32) -> Self {
        Self {
            tap: true,
            ..Self::pointer(x, y)
        }
    }
}

/// Advance the game state by one tick
///
/// `state.events` only holds what this call (and anything since) produced.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    match state.phase {
        GamePhase::Paused => return,
        GamePhase::GameOver => {
            if input.tap && state.tuning.restart_on_touch {
                log::info!("Tap after game over, starting a new run");
                state.restart();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    if state.health <= 0.0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over after {} ticks, score {}",
            state.time_ticks,
            state.score as u64
        );
        return;
    }

    state.time_ticks += 1;

    state.avatar.update(&state.arena, input.pointer);
    update_entities(state);
    run_spawner(state);
}

/// Prune last tick's tombstones, then move and collide everything left
fn update_entities(state: &mut GameState) {
    state.entities.retain(|e| e.is_alive());

    let hitbox = state.avatar.hitbox();
    let score_tuning = &state.tuning.score;

    for entity in state.entities.iter_mut() {
        entity.update(&state.arena, &mut state.rng);

        if !hitbox.touches_circle(entity.pos, entity.radius) {
            continue;
        }

        if entity.is_collectible() {
            entity.kill();
            let points = prize_points(score_tuning.point_modifier, entity.radius);
            state.score += points;
            state.health = (state.health + score_tuning.health_gain).min(score_tuning.health_max);
            state.events.push(GameEvent::PrizeCollected {
                id: entity.id,
                points,
            });
            log::debug!("Collected prize {} for {} points", entity.id, points);
        } else {
            state.health = (state.health - score_tuning.hazard_damage).max(0.0);
            state.events.push(GameEvent::HazardContact { id: entity.id });
        }
    }
}

/// Countdown hazards with a difficulty ramp, plus an independent prize roll
fn run_spawner(state: &mut GameState) {
    state.spawn_countdown -= 1;
    if state.spawn_countdown < 0 {
        state.spawn_hazard();
        state.spawn_countdown = state.spawn_interval as i32;
        if state.spawn_interval > state.tuning.spawn.interval_floor {
            state.spawn_interval -= 1;
        }
        state.score += survival_bonus(state.tuning.score.point_modifier, state.spawn_countdown);
    }

    if state.rng.random::<f64>() < state.tuning.spawn.prize_chance {
        state.spawn_prize();
    }
}

/// `(modifier / radius) * 2` in whole points; smaller prizes pay more
pub fn prize_points(modifier: u32, radius: f32) -> f64 {
    let radius = (radius as u32).max(1);
    ((modifier / radius) * 2) as f64
}

/// `(modifier / countdown) / 2` in whole points; paid on every hazard spawn
pub fn survival_bonus(modifier: u32, countdown: i32) -> f64 {
    let countdown = countdown.max(1) as u32;
    ((modifier / countdown) / 2) as f64
}
