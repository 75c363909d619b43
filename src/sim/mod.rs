//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete ticks only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod avatar;
pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;

pub use arena::{Arena, ArenaError};
pub use avatar::Avatar;
pub use collision::{InsetRect, circle_rect_overlap};
pub use entity::{Entity, Rgb, SpawnParams};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, prize_points, survival_bonus, tick};
