use glam::Vec2;

use crate::components::entity::{Entity, EntityKind};
use crate::core::rng::Rng;
use crate::renderer::painter::Color;

/// Free-flying decorative fragment (exhaust puff, explosion debris).
/// Bounces off planets instead of passing through them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub rotation: f32,
    /// Radians added per frame.
    pub rotation_rate: f32,
    /// Size multiplier per second; 1.0 keeps the size constant.
    pub growth: f32,
}

/// Background junk drifting through space. Ignores planets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debris {
    pub rotation: f32,
    pub rotation_rate: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleConfig {
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub rotation_rate: f32,
    pub growth: f32,
    pub ttl: f32,
    pub color: Color,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(4.0),
            velocity: Vec2::ZERO,
            rotation: 0.0,
            rotation_rate: 0.0,
            growth: 1.0,
            ttl: f32::INFINITY,
            color: Color::WHITE,
        }
    }
}

impl ParticleConfig {
    pub fn into_entity(self) -> Entity {
        Entity::new(EntityKind::Particle(Particle {
            rotation: self.rotation,
            rotation_rate: self.rotation_rate,
            growth: self.growth,
        }))
        .with_pos(self.pos)
        .with_size(self.size)
        .with_velocity(self.velocity)
        .with_ttl(self.ttl)
        .with_color(self.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebrisConfig {
    pub pos: Vec2,
    pub size: Vec2,
    /// Random drift in ±25 per axis when `None`.
    pub velocity: Option<Vec2>,
    /// Random spin in ±0.05 rad/frame when `None`.
    pub rotation_rate: Option<f32>,
    pub color: Color,
}

impl Default for DebrisConfig {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(4.0),
            velocity: None,
            rotation_rate: None,
            color: Color::WHITE,
        }
    }
}

impl DebrisConfig {
    pub const DRIFT: f32 = 25.0;
    pub const SPIN: f32 = 0.05;

    pub fn into_entity(self, rng: &mut Rng) -> Entity {
        let velocity = self
            .velocity
            .unwrap_or_else(|| Vec2::new(rng.spread(Self::DRIFT), rng.spread(Self::DRIFT)));
        let rotation_rate = self.rotation_rate.unwrap_or_else(|| rng.spread(Self::SPIN));
        Entity::new(EntityKind::Debris(Debris {
            rotation: 0.0,
            rotation_rate,
        }))
        .with_pos(self.pos)
        .with_size(self.size)
        .with_velocity(velocity)
        .with_color(self.color)
    }
}
