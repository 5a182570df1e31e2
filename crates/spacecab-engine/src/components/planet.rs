use glam::Vec2;

use crate::api::types::EntityHandle;
use crate::components::entity::{Entity, EntityKind};
use crate::core::world::World;
use crate::renderer::painter::Color;

/// Immobile gravity source and collision target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub radius: f32,
}

/// A planet on a circular orbit around another planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moon {
    pub planet: Planet,
    /// The body this moon circles (non-owning).
    pub orbits: EntityHandle,
    pub orbit_radius: f32,
    /// Current angle in radians.
    pub angular_pos: f32,
    /// Radians per second.
    pub angular_speed: f32,
}

impl Moon {
    /// Position relative to the parent body's centre.
    pub fn orbit_offset(&self) -> Vec2 {
        Vec2::new(self.angular_pos.cos(), self.angular_pos.sin()) * self.orbit_radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetConfig {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: 100.0,
            color: Color::WHITE,
        }
    }
}

impl PlanetConfig {
    pub fn into_entity(self) -> Entity {
        Entity::new(EntityKind::Planet(Planet { radius: self.radius }))
            .with_pos(self.pos)
            .with_size(Vec2::splat(self.radius * 2.0))
            .with_color(self.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonConfig {
    pub orbits: EntityHandle,
    pub radius: f32,
    pub color: Color,
    /// Defaults to four times the parent's radius.
    pub orbit_radius: Option<f32>,
    pub angular_pos: f32,
    pub angular_speed: f32,
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            orbits: EntityHandle::default(),
            radius: 40.0,
            color: Color::hex(0xaaaaaa),
            orbit_radius: None,
            angular_pos: 0.0,
            angular_speed: 0.25,
        }
    }
}

impl MoonConfig {
    /// Resolve defaults against the parent body and place the moon on its orbit.
    /// A missing parent leaves the moon at the origin with a zero orbit.
    pub fn into_entity(self, world: &World) -> Entity {
        let parent = world.get(self.orbits);
        let parent_pos = parent.map_or(Vec2::ZERO, |p| p.pos);
        let orbit_radius = self
            .orbit_radius
            .or_else(|| parent.and_then(|p| p.body_radius()).map(|r| r * 4.0))
            .unwrap_or(0.0);
        let moon = Moon {
            planet: Planet { radius: self.radius },
            orbits: self.orbits,
            orbit_radius,
            angular_pos: self.angular_pos,
            angular_speed: self.angular_speed,
        };
        let pos = parent_pos + moon.orbit_offset();
        Entity::new(EntityKind::Moon(moon))
            .with_pos(pos)
            .with_size(Vec2::splat(self.radius * 2.0))
            .with_color(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::tags;
    use crate::components::layer::Layer;

    #[test]
    fn planet_config_builds_round_body() {
        let e = PlanetConfig {
            pos: Vec2::new(800.0, 300.0),
            radius: 120.0,
            color: Color::hex(0x00aa66),
        }
        .into_entity();
        assert_eq!(e.body_radius(), Some(120.0));
        assert_eq!(e.size, Vec2::splat(240.0));
        assert_eq!(e.pos, Vec2::new(800.0, 300.0));
    }

    #[test]
    fn moon_defaults_to_four_parent_radii() {
        let mut world = World::default();
        let parent = world.spawn(
            PlanetConfig {
                pos: Vec2::new(-50.0, 600.0),
                radius: 80.0,
                ..Default::default()
            }
            .into_entity(),
            Layer::BACKGROUND,
            Some(tags::PLANET),
        );
        let moon = MoonConfig {
            orbits: parent,
            ..Default::default()
        }
        .into_entity(&world);
        let m = moon.moon().unwrap();
        assert_eq!(m.orbit_radius, 320.0);
        assert_eq!(moon.pos, Vec2::new(270.0, 600.0));
    }

    #[test]
    fn orbit_offset_follows_angle() {
        let moon = Moon {
            planet: Planet { radius: 10.0 },
            orbits: EntityHandle::default(),
            orbit_radius: 100.0,
            angular_pos: std::f32::consts::PI,
            angular_speed: 0.0,
        };
        assert!((moon.orbit_offset() - Vec2::new(-100.0, 0.0)).length() < 1e-3);
    }
}
