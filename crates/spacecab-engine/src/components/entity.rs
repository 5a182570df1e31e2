use glam::Vec2;

use crate::api::types::EntityHandle;
use crate::components::craft::Craft;
use crate::components::hud::HudText;
use crate::components::layer::Layer;
use crate::components::particle::{Debris, Particle};
use crate::components::passenger::Passenger;
use crate::components::planet::{Moon, Planet};
use crate::renderer::painter::Color;

/// Per-kind state. The shared body (position, lifetime, ...) lives on [`Entity`].
#[derive(Debug)]
pub enum EntityKind {
    /// No behaviour beyond lifetime decay; draws nothing.
    Plain,
    Planet(Planet),
    Moon(Moon),
    Passenger(Passenger),
    Particle(Particle),
    Debris(Debris),
    Craft(Craft),
    HudText(HudText),
}

/// Fat entity: a shared simulated body plus one kind-specific payload.
#[derive(Debug)]
pub struct Entity {
    /// Set by the world on spawn.
    pub handle: EntityHandle,
    /// Set by the world on spawn. HUD entities keep the default.
    pub layer: Layer,
    /// Position in world space (screen space for HUD entities).
    pub pos: Vec2,
    /// Bounding width/height.
    pub size: Vec2,
    /// Render pivot, relative to the top-left of the bounding box.
    pub origin: Vec2,
    pub velocity: Vec2,
    /// Seconds left to live. `f32::INFINITY` is permanent.
    pub ttl: f32,
    pub color: Color,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            handle: EntityHandle::default(),
            layer: Layer::default(),
            pos: Vec2::ZERO,
            size: Vec2::ZERO,
            origin: Vec2::ZERO,
            velocity: Vec2::ZERO,
            ttl: f32::INFINITY,
            color: Color::WHITE,
            kind,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    /// Also resets the origin to the centre of the new size.
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self.origin = size * 0.5;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_ttl(mut self, ttl: f32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    // -- Lifetime --

    pub fn is_alive(&self) -> bool {
        self.ttl > 0.0
    }

    /// Count the lifetime down. Infinite lifetimes stay infinite.
    pub fn age(&mut self, dt: f32) {
        if self.ttl.is_finite() {
            self.ttl -= dt;
        }
    }

    pub fn kill(&mut self) {
        self.ttl = 0.0;
    }

    // -- Kind accessors --

    /// Radius of a gravity source, `None` for anything that is not a planet or moon.
    pub fn body_radius(&self) -> Option<f32> {
        match &self.kind {
            EntityKind::Planet(planet) => Some(planet.radius),
            EntityKind::Moon(moon) => Some(moon.planet.radius),
            _ => None,
        }
    }

    pub fn craft(&self) -> Option<&Craft> {
        match &self.kind {
            EntityKind::Craft(craft) => Some(craft),
            _ => None,
        }
    }

    pub fn craft_mut(&mut self) -> Option<&mut Craft> {
        match &mut self.kind {
            EntityKind::Craft(craft) => Some(craft),
            _ => None,
        }
    }

    pub fn passenger(&self) -> Option<&Passenger> {
        match &self.kind {
            EntityKind::Passenger(passenger) => Some(passenger),
            _ => None,
        }
    }

    pub fn passenger_mut(&mut self) -> Option<&mut Passenger> {
        match &mut self.kind {
            EntityKind::Passenger(passenger) => Some(passenger),
            _ => None,
        }
    }

    pub fn moon(&self) -> Option<&Moon> {
        match &self.kind {
            EntityKind::Moon(moon) => Some(moon),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entity_is_permanent() {
        let e = Entity::new(EntityKind::Plain);
        assert!(e.is_alive());
        assert_eq!(e.ttl, f32::INFINITY);
    }

    #[test]
    fn infinite_ttl_never_expires() {
        let mut e = Entity::new(EntityKind::Plain);
        for _ in 0..100_000 {
            e.age(0.5);
        }
        assert!(e.is_alive());
        assert_eq!(e.ttl, f32::INFINITY);
    }

    #[test]
    fn finite_ttl_counts_down() {
        let mut e = Entity::new(EntityKind::Plain).with_ttl(1.0);
        e.age(0.4);
        assert!(e.is_alive());
        e.age(0.6);
        assert!(!e.is_alive());
    }

    #[test]
    fn with_size_centres_origin() {
        let e = Entity::new(EntityKind::Plain).with_size(Vec2::new(50.0, 20.0));
        assert_eq!(e.origin, Vec2::new(25.0, 10.0));
        let e = e.with_origin(Vec2::ZERO);
        assert_eq!(e.origin, Vec2::ZERO);
    }

    #[test]
    fn body_radius_only_for_planets() {
        let planet = Entity::new(EntityKind::Planet(Planet { radius: 80.0 }));
        assert_eq!(planet.body_radius(), Some(80.0));
        assert_eq!(Entity::new(EntityKind::Plain).body_radius(), None);
    }
}
