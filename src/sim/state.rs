//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::avatar::Avatar;
use super::entity::{Entity, SpawnParams};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Host paused the run
    Paused,
    /// Health ran out
    GameOver,
}

/// Things that happened during a tick, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    HazardSpawned { id: u32 },
    PrizeSpawned { id: u32 },
    PrizeCollected { id: u32, points: f64 },
    /// Avatar overlapped a hazard this tick
    HazardContact { id: u32 },
    GameOver { score: f64 },
    Restarted,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Simulated ticks since the last (re)start
    pub time_ticks: u64,
    pub score: f64,
    pub health: f32,
    /// Ticks until the next hazard; spawns once it drops below zero
    pub spawn_countdown: i32,
    /// Value the countdown resets to, ramps down to the floor
    pub spawn_interval: u32,
    pub avatar: Avatar,
    /// Entities in spawn order; dead ones linger for one tick
    pub entities: Vec<Entity>,
    /// Events from the latest tick, plus any restart or spawn since
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run. `arena` and `tuning` are assumed validated.
    pub fn new(arena: Arena, tuning: Tuning, seed: u64) -> Self {
        Self {
            arena,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ticks: 0,
            score: 0.0,
            health: tuning.score.initial_health,
            spawn_countdown: tuning.spawn.initial_interval as i32,
            spawn_interval: tuning.spawn.initial_interval,
            avatar: Avatar::new(&tuning.avatar),
            entities: Vec::new(),
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Reset every gameplay value to its creation-time default.
    ///
    /// The RNG stream carries on so consecutive runs differ.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.score = 0.0;
        self.health = self.tuning.score.initial_health;
        self.spawn_countdown = self.tuning.spawn.initial_interval as i32;
        self.spawn_interval = self.tuning.spawn.initial_interval;
        self.avatar = Avatar::new(&self.tuning.avatar);
        self.entities.clear();
        self.next_id = 1;
        self.events.push(GameEvent::Restarted);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Entities still in play
    pub fn live_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_alive())
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Health normalised to `[0, 1]`
    pub fn health_ratio(&self) -> f32 {
        (self.health / self.tuning.score.health_max).clamp(0.0, 1.0)
    }

    /// Spawn a countdown entity (hazard unless hazards are configured edible)
    pub fn spawn_hazard(&mut self) -> u32 {
        let e = &self.tuning.entities;
        let params = SpawnParams {
            max_radius: e.hazard_max_radius,
            max_velocity: e.hazard_max_velocity,
            collectible: e.hazards_collectible,
            growth: e.prize_growth,
        };
        let id = self.spawn(params);
        self.events.push(GameEvent::HazardSpawned { id });
        log::debug!("Spawned hazard {} ({} entities)", id, self.entities.len());
        id
    }

    /// Spawn a prize: bigger, slower and collectible
    pub fn spawn_prize(&mut self) -> u32 {
        let e = &self.tuning.entities;
        let params = SpawnParams {
            max_radius: e.prize_max_radius(),
            max_velocity: e.prize_max_velocity(),
            collectible: true,
            growth: e.prize_growth,
        };
        let id = self.spawn(params);
        self.events.push(GameEvent::PrizeSpawned { id });
        log::debug!("Spawned prize {}", id);
        id
    }

    fn spawn(&mut self, params: SpawnParams) -> u32 {
        let id = self.next_entity_id();
        let entity = Entity::spawn(id, &self.arena, params, &mut self.rng);
        self.entities.push(entity);
        id
    }

    /// Place an entity directly (scripted scenarios and tests)
    pub fn insert_entity(&mut self, mut entity: Entity) -> u32 {
        let id = self.next_entity_id();
        entity.id = id;
        self.entities.push(entity);
        id
    }

    /// Avatar pose for rendering: top-left corner and size
    pub fn avatar_pose(&self) -> (Vec2, Vec2) {
        (self.avatar.pos, self.avatar.size)
    }
}
