use glam::Vec2;

use crate::api::types::EntityHandle;
use crate::components::entity::{Entity, EntityKind};
use crate::core::world::World;
use crate::renderer::painter::Color;

/// A fare waiting at one planet for a ride to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Passenger {
    pub pickup: EntityHandle,
    pub dropoff: EntityHandle,
    /// Credits paid on delivery.
    pub fare: i64,
    /// The craft carrying this passenger, if boarded.
    pub boarded_by: Option<EntityHandle>,
    /// Draw radius.
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassengerConfig {
    pub pickup: EntityHandle,
    pub dropoff: EntityHandle,
    /// Rolled uniformly from [10, 30) when `None`.
    pub fare: Option<i64>,
    pub radius: f32,
    pub color: Color,
}

impl Default for PassengerConfig {
    fn default() -> Self {
        Self {
            pickup: EntityHandle::default(),
            dropoff: EntityHandle::default(),
            fare: None,
            radius: 10.0,
            color: Color::RED,
        }
    }
}

impl PassengerConfig {
    pub const MIN_FARE: i64 = 10;
    pub const FARE_RANGE: u32 = 20;

    /// Place the passenger at its pickup planet and roll a fare if none was given.
    pub fn into_entity(self, world: &mut World) -> Entity {
        let pos = world.get(self.pickup).map_or(Vec2::ZERO, |p| p.pos);
        let fare = self
            .fare
            .unwrap_or_else(|| Self::MIN_FARE + world.rng.next_int(Self::FARE_RANGE) as i64);
        Entity::new(EntityKind::Passenger(Passenger {
            pickup: self.pickup,
            dropoff: self.dropoff,
            fare,
            boarded_by: None,
            radius: self.radius,
        }))
        .with_pos(pos)
        .with_size(Vec2::splat(self.radius * 2.0))
        .with_color(self.color)
    }
}
