//! Host-facing session controller
//!
//! Wraps [`GameState`] behind the handful of calls a render loop needs:
//! create, tick with the latest pointer sample, restart, and read-only
//! accessors. Inputs are validated here so the per-tick code never fails.

use glam::Vec2;
use serde::Serialize;
use thiserror::Error;

use crate::sim::{Arena, ArenaError, Entity, GameEvent, GamePhase, GameState, Rgb, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// Why a session could not be created
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid arena: {0}")]
    Arena(#[from] ArenaError),
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
}

/// Platform side of the game: surface size and touch input
pub trait Host {
    /// Play-field `(width, height)`
    fn arena_bounds(&self) -> (f32, f32);
    /// Most recent pointer position, `None` when nothing is pressed
    fn latest_pointer_sample(&self) -> Option<Vec2>;
}

/// Render-ready view of one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityView {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub collectible: bool,
}

impl From<&Entity> for EntityView {
    fn from(e: &Entity) -> Self {
        Self {
            id: e.id,
            pos: e.pos,
            radius: e.radius,
            color: e.color,
            collectible: e.is_collectible(),
        }
    }
}

/// Everything the renderer and HUD read after a tick
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub avatar_pos: Vec2,
    pub avatar_size: Vec2,
    pub entities: Vec<EntityView>,
    pub score: f64,
    pub health: f32,
    pub health_max: f32,
    pub game_over: bool,
    pub time_ticks: u64,
}

/// A running game
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    /// Pointer was down on the previous tick, for press-edge detection
    pointer_down: bool,
}

impl Session {
    /// Start a session on a `width` x `height` arena.
    ///
    /// Rejects degenerate arenas and tuning before any tick runs.
    pub fn new(width: f32, height: f32, tuning: Tuning, seed: u64) -> Result<Self, SessionError> {
        let arena = Arena::new(width, height).inspect_err(|err| log::warn!("Rejected arena: {err}"))?;
        tuning
            .validate()
            .inspect_err(|err| log::warn!("Rejected tuning: {err}"))?;

        log::info!("New session on {}x{} arena (seed {:#x})", width, height, seed);
        Ok(Self {
            state: GameState::new(arena, tuning, seed),
            pointer_down: false,
        })
    }

    /// Start a session sized to the host surface
    pub fn from_host<H: Host + ?Sized>(host: &H, tuning: Tuning, seed: u64) -> Result<Self, SessionError> {
        let (width, height) = host.arena_bounds();
        Self::new(width, height, tuning, seed)
    }

    /// Advance one tick steering toward `pointer`.
    ///
    /// A sample following a tick without one counts as a tap; holding the
    /// pointer down never does.
    pub fn tick(&mut self, pointer: Option<Vec2>) {
        self.tick_with(&TickInput {
            pointer,
            tap: pointer.is_some() && !self.pointer_down,
            ..Default::default()
        });
    }

    /// Advance one tick with full input (pause toggle and tap included)
    pub fn tick_with(&mut self, input: &TickInput) {
        self.pointer_down = input.pointer.is_some();
        tick(&mut self.state, input);
    }

    /// Poll the host for its latest sample and advance one tick
    pub fn poll<H: Host + ?Sized>(&mut self, host: &H) {
        self.tick(host.latest_pointer_sample());
    }

    /// Throw the current run away and start over
    pub fn restart(&mut self) {
        log::info!("Restarting session (previous score {})", self.state.score as u64);
        self.state.restart();
    }

    pub fn score(&self) -> f64 {
        self.state.score
    }

    pub fn health(&self) -> f32 {
        self.state.health
    }

    pub fn health_max(&self) -> f32 {
        self.state.tuning.score.health_max
    }

    pub fn health_ratio(&self) -> f32 {
        self.state.health_ratio()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn arena(&self) -> &Arena {
        &self.state.arena
    }

    /// Avatar top-left corner and size
    pub fn avatar_pose(&self) -> (Vec2, Vec2) {
        self.state.avatar_pose()
    }

    /// Live entities in spawn order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.state.live_entities()
    }

    /// Current spawn interval (ramps down toward the floor)
    pub fn spawn_interval(&self) -> u32 {
        self.state.spawn_interval
    }

    pub fn time_ticks(&self) -> u64 {
        self.state.time_ticks
    }

    /// Take the events of the latest tick (and any restart since)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        let (avatar_pos, avatar_size) = self.avatar_pose();
        Snapshot {
            avatar_pos,
            avatar_size,
            entities: self.entities().map(EntityView::from).collect(),
            score: self.score(),
            health: self.health(),
            health_max: self.health_max(),
            game_over: self.is_game_over(),
            time_ticks: self.time_ticks(),
        }
    }

    /// Underlying state (read-only)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Underlying state for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
