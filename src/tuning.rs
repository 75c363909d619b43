//! Data-driven game balance
//!
//! Every gameplay constant lives here so a host can ship a JSON override
//! without touching the simulation. Missing fields fall back to defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{HEALTH_MAX, INITIAL_HEALTH, POINT_MODIFIER};

/// Rejected balance values
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be finite and greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be finite and at least 2 (got {value})")]
    RadiusTooSmall { field: &'static str, value: f32 },
    #[error("{field} must be between 0.0 and 1.0 (got {value})")]
    OutOfUnitRange { field: &'static str, value: f32 },
    #[error("spawn interval floor must be non-zero")]
    ZeroSpawnFloor,
    #[error("initial spawn interval {initial} is below the floor {floor}")]
    IntervalBelowFloor { initial: u32, floor: u32 },
    #[error("initial spawn interval {0} exceeds {max}", max = i32::MAX)]
    IntervalTooLarge(u32),
    #[error("initial health {initial} must be in (0, {max}]")]
    InitialHealth { initial: f32, max: f32 },
}

/// Avatar handling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarTuning {
    /// Top-left corner at session start
    pub start_pos: Vec2,
    /// Velocity at session start
    pub start_vel: Vec2,
    /// Bounding rectangle (width, height) of the sprite
    pub size: Vec2,
    /// Steering divisor, higher = more sluggish
    pub responsiveness: f32,
    /// Per-tick velocity decay
    pub friction: f32,
    /// Symmetric per-axis speed clamp
    pub max_velocity: f32,
    /// Fraction of the bounding rect that counts for collisions
    pub collision_inset: f32,
}

impl Default for AvatarTuning {
    fn default() -> Self {
        Self {
            start_pos: Vec2::ZERO,
            start_vel: Vec2::new(20.0, 12.0),
            size: Vec2::new(96.0, 96.0),
            responsiveness: 100.0,
            friction: 0.1,
            max_velocity: 30.0,
            collision_inset: 0.8,
        }
    }
}

/// Spawned circles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityTuning {
    pub hazard_max_radius: f32,
    pub hazard_max_velocity: f32,
    /// Prize radius ceiling = hazard ceiling * this
    pub prize_radius_multiplier: f32,
    /// Prize velocity ceiling = hazard ceiling / this (integer division)
    pub prize_velocity_divisor: u32,
    /// Radius added to a collectible every tick
    pub prize_growth: f32,
    /// Countdown spawns are collectible too
    pub hazards_collectible: bool,
}

impl Default for EntityTuning {
    fn default() -> Self {
        Self {
            hazard_max_radius: 65.0,
            hazard_max_velocity: 15.0,
            prize_radius_multiplier: 2.0,
            prize_velocity_divisor: 2,
            prize_growth: 0.5,
            hazards_collectible: false,
        }
    }
}

impl EntityTuning {
    pub fn prize_max_radius(&self) -> f32 {
        self.hazard_max_radius * self.prize_radius_multiplier
    }

    pub fn prize_max_velocity(&self) -> f32 {
        (self.hazard_max_velocity as u32 / self.prize_velocity_divisor.max(1)) as f32
    }
}

/// Spawn scheduler and difficulty ramp
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// Countdown default at session start (higher = slower)
    pub initial_interval: u32,
    /// The countdown default never ramps below this
    pub interval_floor: u32,
    /// Per-tick Bernoulli chance of a prize
    pub prize_chance: f64,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            initial_interval: 100,
            interval_floor: 10,
            prize_chance: 0.005,
        }
    }
}

/// Score and health accounting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTuning {
    pub point_modifier: u32,
    pub initial_health: f32,
    pub health_max: f32,
    /// Health restored per collected prize
    pub health_gain: f32,
    /// Health lost per tick of hazard contact
    pub hazard_damage: f32,
}

impl Default for ScoreTuning {
    fn default() -> Self {
        Self {
            point_modifier: POINT_MODIFIER,
            initial_health: INITIAL_HEALTH,
            health_max: HEALTH_MAX,
            health_gain: 100.0,
            hazard_damage: 1.0,
        }
    }
}

/// Complete balance sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub avatar: AvatarTuning,
    pub entities: EntityTuning,
    pub spawn: SpawnTuning,
    pub score: ScoreTuning,
    /// A pointer sample during game over starts a new run
    pub restart_on_touch: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            avatar: AvatarTuning::default(),
            entities: EntityTuning::default(),
            spawn: SpawnTuning::default(),
            score: ScoreTuning::default(),
            restart_on_touch: true,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would break per-tick arithmetic
    pub fn validate(&self) -> Result<(), TuningError> {
        let a = &self.avatar;
        positive("avatar.size.x", a.size.x)?;
        positive("avatar.size.y", a.size.y)?;
        positive("avatar.responsiveness", a.responsiveness)?;
        positive("avatar.max_velocity", a.max_velocity)?;
        if !(a.friction.is_finite() && a.friction >= 0.0) {
            return Err(TuningError::NotPositive {
                field: "avatar.friction",
                value: a.friction,
            });
        }
        unit("avatar.collision_inset", a.collision_inset)?;

        let e = &self.entities;
        spawn_radius("entities.hazard_max_radius", e.hazard_max_radius)?;
        spawn_radius("entities.prize_radius_multiplier", e.prize_max_radius())?;
        if !(e.hazard_max_velocity.is_finite() && e.hazard_max_velocity >= 0.0) {
            return Err(TuningError::NotPositive {
                field: "entities.hazard_max_velocity",
                value: e.hazard_max_velocity,
            });
        }
        if !(e.prize_growth.is_finite() && e.prize_growth >= 0.0) {
            return Err(TuningError::NotPositive {
                field: "entities.prize_growth",
                value: e.prize_growth,
            });
        }

        let s = &self.spawn;
        if s.interval_floor == 0 {
            return Err(TuningError::ZeroSpawnFloor);
        }
        if s.initial_interval < s.interval_floor {
            return Err(TuningError::IntervalBelowFloor {
                initial: s.initial_interval,
                floor: s.interval_floor,
            });
        }
        if i32::try_from(s.initial_interval).is_err() {
            return Err(TuningError::IntervalTooLarge(s.initial_interval));
        }
        unit("spawn.prize_chance", s.prize_chance as f32)?;

        let sc = &self.score;
        positive("score.health_max", sc.health_max)?;
        if !(sc.initial_health > 0.0 && sc.initial_health <= sc.health_max) {
            return Err(TuningError::InitialHealth {
                initial: sc.initial_health,
                max: sc.health_max,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

fn spawn_radius(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 2.0 {
        Ok(())
    } else {
        Err(TuningError::RadiusTooSmall { field, value })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), TuningError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TuningError::OutOfUnitRange { field, value })
    }
}
