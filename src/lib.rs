//! Ball Dodge - a dodge-and-collect arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, spawning, game state)
//! - `session`: Host-facing façade (new session, tick, restart, read-only accessors)
//! - `tuning`: Data-driven game balance

pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{EntityView, Host, Session, SessionError, Snapshot};
pub use tuning::{Tuning, TuningError};

use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Upper bound of the health pool
    pub const HEALTH_MAX: f32 = 2000.0;
    /// Health at session start
    pub const INITIAL_HEALTH: f32 = 1000.0;
    /// Numerator of every score award
    pub const POINT_MODIFIER: u32 = 1000;

    /// Seed used by the headless runner when none is given
    pub const DEFAULT_SEED: u64 = 0x0bad_cafe;
    /// Tick cap for the headless runner
    pub const DEFAULT_MAX_TICKS: u64 = 60 * 60 * 10;
}

/// Integer draw in `[0, max)` returned as a float.
///
/// `floor(u * max)` for `u` uniform in `[0, 1)`. A non-positive `max` yields
/// a non-positive result, so callers clamp spans before drawing.
#[inline]
pub fn random_uniform<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    (rng.random::<f32>() * max).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_random_uniform_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_uniform(&mut rng, 15.0);
            assert!((0.0..15.0).contains(&v));
            assert_eq!(v, v.trunc());
        }
    }

    #[test]
    fn test_random_uniform_zero() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(random_uniform(&mut rng, 0.0), 0.0);
    }
}
