use glam::Vec2;

use crate::api::config::FlightConfig;
use crate::api::types::EntityHandle;
use crate::components::entity::{Entity, EntityKind};
use crate::core::vector::heading;
use crate::renderer::painter::Color;

/// Where a landed craft is parked: the planet and the offset from its centre,
/// frozen at touchdown so a moving planet carries the craft along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub planet: EntityHandle,
    pub offset: Vec2,
}

/// The player-controlled taxi.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Craft {
    /// Nose heading in radians.
    pub rotation: f32,
    pub thrust_accel: f32,
    pub max_speed: f32,
    pub passenger: Option<EntityHandle>,
    pub landing: Option<Landing>,
}

impl Craft {
    pub fn is_landed(&self) -> bool {
        self.landing.is_some()
    }

    pub fn landed_planet(&self) -> Option<EntityHandle> {
        self.landing.map(|l| l.planet)
    }

    /// Unit vector out of the nose.
    pub fn forward(&self) -> Vec2 {
        heading(self.rotation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CraftConfig {
    pub pos: Vec2,
    pub rotation: f32,
    pub thrust_accel: f32,
    pub max_speed: f32,
    /// Hull bounding box; the pivot sits at its centre.
    pub size: Vec2,
    pub color: Color,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self::from_flight(&FlightConfig::default())
    }
}

impl CraftConfig {
    /// Handling and hull size taken from the engine tuning.
    pub fn from_flight(flight: &FlightConfig) -> Self {
        Self {
            pos: Vec2::ZERO,
            rotation: 0.0,
            thrust_accel: flight.thrust_accel,
            max_speed: flight.max_speed,
            size: Vec2::new(flight.hull_width, flight.hull_height),
            color: Color::HULL_GRAY,
        }
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn into_entity(self) -> Entity {
        Entity::new(EntityKind::Craft(Craft {
            rotation: self.rotation,
            thrust_accel: self.thrust_accel,
            max_speed: self.max_speed,
            passenger: None,
            landing: None,
        }))
        .with_pos(self.pos)
        .with_size(self.size)
        .with_color(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_craft_matches_flight_tuning() {
        let e = CraftConfig::default().with_pos(Vec2::new(200.0, 200.0)).into_entity();
        let craft = e.craft().unwrap();
        assert_eq!(craft.thrust_accel, 200.0);
        assert_eq!(craft.max_speed, 300.0);
        assert!(!craft.is_landed());
        assert_eq!(e.origin, Vec2::new(25.0, 10.0));
    }

    #[test]
    fn forward_follows_rotation() {
        let e = CraftConfig::default()
            .with_rotation(std::f32::consts::PI)
            .into_entity();
        assert!((e.craft().unwrap().forward() - Vec2::new(-1.0, 0.0)).length() < 1e-5);
    }
}
