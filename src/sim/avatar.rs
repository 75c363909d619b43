//! The player-controlled avatar
//!
//! A rectangle that drifts under friction and is pulled toward the pointer.
//! `pos` is the top-left corner of the bounding rect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::collision::InsetRect;
use crate::tuning::AvatarTuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Bounding rect (width, height), fixed for the session
    pub size: Vec2,
    /// Steering divisor, higher = more sluggish
    pub responsiveness: f32,
    pub friction: f32,
    pub max_velocity: f32,
    /// Fraction of `size` used for contact tests
    pub inset: f32,
}

impl Avatar {
    pub fn new(tuning: &AvatarTuning) -> Self {
        let mut avatar = Self {
            pos: tuning.start_pos,
            vel: Vec2::ZERO,
            size: tuning.size,
            responsiveness: tuning.responsiveness,
            friction: tuning.friction,
            max_velocity: tuning.max_velocity,
            inset: tuning.collision_inset,
        };
        avatar.vel = avatar.clamp(tuning.start_vel);
        avatar
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Shrunken, centered rect used for contact tests
    pub fn hitbox(&self) -> InsetRect {
        InsetRect::new(self.center(), self.size * self.inset / 2.0)
    }

    /// Advance one tick, steering toward `pointer` when a sample exists
    pub fn update(&mut self, arena: &Arena, pointer: Option<Vec2>) {
        self.pos += self.vel.trunc();
        arena.bounce_rect(&mut self.pos, &mut self.vel, self.size);
        self.apply_friction();

        if let Some(target) = pointer {
            self.steer_toward(target);
        }
    }

    /// Subtract friction from positive axes and add it to negative ones.
    ///
    /// No zero clamp: a component smaller than `friction` flips sign and
    /// keeps oscillating around zero.
    fn apply_friction(&mut self) {
        let friction = self.friction;
        for v in [&mut self.vel.x, &mut self.vel.y] {
            if *v > 0.0 {
                *v -= friction;
            } else if *v < 0.0 {
                *v += friction;
            }
        }
    }

    /// Pull toward `target` with strength `displacement / responsiveness`
    pub fn steer_toward(&mut self, target: Vec2) {
        let delta = (target - self.center()) / self.responsiveness;
        self.add_velocity(delta);
    }

    pub fn add_velocity(&mut self, delta: Vec2) {
        self.vel = self.clamp(self.vel + delta);
    }

    #[inline]
    fn clamp(&self, vel: Vec2) -> Vec2 {
        vel.clamp(Vec2::splat(-self.max_velocity), Vec2::splat(self.max_velocity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0).unwrap()
    }

    fn still_avatar() -> Avatar {
        let mut avatar = Avatar::new(&AvatarTuning::default());
        avatar.pos = Vec2::new(300.0, 200.0);
        avatar.vel = Vec2::ZERO;
        avatar
    }

    #[test]
    fn test_new_uses_tuning() {
        let avatar = Avatar::new(&AvatarTuning::default());
        assert_eq!(avatar.pos, Vec2::ZERO);
        assert_eq!(avatar.vel, Vec2::new(20.0, 12.0));
        assert_eq!(avatar.center(), Vec2::new(48.0, 48.0));
    }

    #[test]
    fn test_start_velocity_is_clamped() {
        let tuning = AvatarTuning {
            start_vel: Vec2::new(100.0, -100.0),
            ..Default::default()
        };
        let avatar = Avatar::new(&tuning);
        assert_eq!(avatar.vel, Vec2::new(30.0, -30.0));
    }

    #[test]
    fn test_friction_decays_toward_zero() {
        let mut avatar = still_avatar();
        avatar.vel = Vec2::new(5.0, -5.0);
        avatar.update(&arena(), None);
        assert_eq!(avatar.pos, Vec2::new(305.0, 195.0));
        assert!((avatar.vel.x - 4.9).abs() < 1e-5);
        assert!((avatar.vel.y + 4.9).abs() < 1e-5);
    }

    #[test]
    fn test_friction_overshoots_zero() {
        let mut avatar = still_avatar();
        avatar.vel = Vec2::new(0.05, 0.0);
        avatar.update(&arena(), None);
        assert!((avatar.vel.x + 0.05).abs() < 1e-5);
        // Exactly zero stays zero
        assert_eq!(avatar.vel.y, 0.0);
    }

    #[test]
    fn test_steering_pulls_toward_pointer() {
        let mut avatar = still_avatar();
        // center is (348, 248)
        avatar.update(&arena(), Some(Vec2::new(548.0, 148.0)));
        assert_eq!(avatar.pos, Vec2::new(300.0, 200.0));
        assert!((avatar.vel.x - 2.0).abs() < 1e-5);
        assert!((avatar.vel.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_steering_clamps() {
        let mut avatar = still_avatar();
        avatar.vel = Vec2::new(29.0, -29.0);
        avatar.steer_toward(Vec2::new(10_000.0, -10_000.0));
        assert_eq!(avatar.vel, Vec2::new(30.0, -30.0));
    }

    #[test]
    fn test_bounces_off_bottom_right() {
        let mut avatar = still_avatar();
        avatar.pos = Vec2::new(700.0, 500.0);
        avatar.vel = Vec2::new(10.0, 10.0);
        avatar.update(&arena(), None);
        // 710 >= 704 and 510 >= 504
        assert_eq!(avatar.pos, Vec2::new(709.0, 509.0));
        assert!(avatar.vel.x < 0.0 && avatar.vel.y < 0.0);
    }

    #[test]
    fn test_hitbox_is_centered_inset() {
        let mut avatar = still_avatar();
        avatar.pos = Vec2::new(50.0, 50.0);
        avatar.size = Vec2::new(100.0, 100.0);
        let hitbox = avatar.hitbox();
        assert_eq!(hitbox.center, Vec2::new(100.0, 100.0));
        assert!((hitbox.half_extents.x - 40.0).abs() < 1e-5);
        assert!((hitbox.half_extents.y - 40.0).abs() < 1e-5);
    }
}
