//! Spawned circles: hazards to dodge and prizes to collect

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::random_uniform;

/// Cosmetic RGB colour, no simulation effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(
            random_uniform(rng, 255.0) as u8,
            random_uniform(rng, 255.0) as u8,
            random_uniform(rng, 255.0) as u8,
        )
    }
}

/// Ceilings for a freshly rolled entity
#[derive(Debug, Clone, Copy)]
pub struct SpawnParams {
    pub max_radius: f32,
    pub max_velocity: f32,
    pub collectible: bool,
    /// Radius gained per tick while collectible
    pub growth: f32,
}

/// A circle bouncing around the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// Center, always on whole units
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    collectible: bool,
    growth: f32,
    alive: bool,
}

impl Entity {
    /// Place an entity explicitly; `id` is assigned when it joins a state
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, collectible: bool, growth: f32) -> Self {
        debug_assert!(radius > 0.0, "entity radius must be positive");
        Self {
            id: 0,
            pos,
            vel,
            radius,
            color: Rgb::default(),
            collectible,
            growth,
            alive: true,
        }
    }

    /// Roll a new entity fully inside the arena.
    ///
    /// Radius is drawn from `[1, max_radius)`; each velocity component from
    /// `[0, max_velocity)`. When the arena is narrower than the circle the
    /// center lands on the radius line and the first bounce sorts it out.
    pub fn spawn<R: Rng + ?Sized>(id: u32, arena: &Arena, params: SpawnParams, rng: &mut R) -> Self {
        let radius = 1.0 + random_uniform(rng, params.max_radius - 1.0);
        let span = (arena.size() - Vec2::splat(radius.trunc() * 2.0)).max(Vec2::ZERO);
        let pos = Vec2::new(
            radius + random_uniform(rng, span.x),
            radius + random_uniform(rng, span.y),
        )
        .trunc();
        let vel = Vec2::new(
            random_uniform(rng, params.max_velocity),
            random_uniform(rng, params.max_velocity),
        );

        Self {
            id,
            pos,
            vel,
            radius,
            color: Rgb::random(rng),
            collectible: params.collectible,
            growth: params.growth,
            alive: true,
        }
    }

    /// Advance one tick: integrate, bounce, and grow if collectible
    pub fn update<R: Rng + ?Sized>(&mut self, arena: &Arena, rng: &mut R) {
        self.pos += self.vel.trunc();
        arena.bounce_circle(&mut self.pos, &mut self.vel, self.radius);

        if self.collectible {
            self.color = Rgb::random(rng);
            self.radius += self.growth;
        }
    }

    #[inline]
    pub fn is_collectible(&self) -> bool {
        self.collectible
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Tombstone the entity; it is pruned at the start of the next tick
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn hazard() -> SpawnParams {
        SpawnParams {
            max_radius: 65.0,
            max_velocity: 15.0,
            collectible: false,
            growth: 0.5,
        }
    }

    #[test]
    fn test_spawn_inside_arena() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut rng = Pcg32::seed_from_u64(42);
        for id in 0..500 {
            let e = Entity::spawn(id, &arena, hazard(), &mut rng);
            assert!(e.radius >= 1.0 && e.radius < 65.0);
            assert!(e.pos.x >= e.radius && e.pos.x <= 800.0 - e.radius);
            assert!(e.pos.y >= e.radius && e.pos.y <= 600.0 - e.radius);
            assert!(e.vel.x >= 0.0 && e.vel.x < 15.0);
            assert!(e.vel.y >= 0.0 && e.vel.y < 15.0);
            assert!(e.is_alive());
            assert!(!e.is_collectible());
        }
    }

    #[test]
    fn test_spawn_in_tiny_arena() {
        let arena = Arena::new(10.0, 10.0).unwrap();
        let mut rng = Pcg32::seed_from_u64(1);
        let e = Entity::spawn(0, &arena, hazard(), &mut rng);
        assert!(e.radius > 0.0);
        assert!(e.pos.is_finite());
    }

    #[test]
    fn test_update_truncates_velocity() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut rng = Pcg32::seed_from_u64(0);
        let mut e = Entity::spawn(0, &arena, hazard(), &mut rng);
        e.pos = Vec2::new(400.0, 300.0);
        e.vel = Vec2::new(2.9, -1.7);
        e.update(&arena, &mut rng);
        assert_eq!(e.pos, Vec2::new(402.0, 299.0));
        assert_eq!(e.vel, Vec2::new(2.9, -1.7));
    }

    #[test]
    fn test_update_bounces_off_right_wall() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut rng = Pcg32::seed_from_u64(0);
        let mut e = Entity::spawn(0, &arena, hazard(), &mut rng);
        e.radius = 10.0;
        e.pos = Vec2::new(785.0, 300.0);
        e.vel = Vec2::new(10.0, 0.0);
        e.update(&arena, &mut rng);
        // 795 >= 790 so flip and step back one unit
        assert_eq!(e.pos, Vec2::new(794.0, 300.0));
        assert_eq!(e.vel.x, -10.0);
    }

    #[test]
    fn test_collectible_grows() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        let params = SpawnParams {
            collectible: true,
            ..hazard()
        };
        let mut e = Entity::spawn(0, &arena, params, &mut rng);
        let r0 = e.radius;
        for _ in 0..4 {
            e.update(&arena, &mut rng);
        }
        assert_eq!(e.radius, r0 + 2.0);
    }

    #[test]
    fn test_hazard_keeps_radius() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut e = Entity::spawn(0, &arena, hazard(), &mut rng);
        let (r0, c0) = (e.radius, e.color);
        e.update(&arena, &mut rng);
        assert_eq!(e.radius, r0);
        assert_eq!(e.color, c0);
    }

    #[test]
    fn test_kill() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut e = Entity::spawn(0, &arena, hazard(), &mut rng);
        e.kill();
        assert!(!e.is_alive());
    }
}
