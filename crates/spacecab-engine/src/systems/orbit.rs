use glam::Vec2;

use crate::api::types::EntityHandle;
use crate::components::entity::EntityKind;
use crate::core::world::World;

/// Advance a moon along its orbit and re-anchor it to the body it circles.
/// If that body is gone the moon keeps circling its last known centre.
pub fn update_moon(world: &mut World, handle: EntityHandle, dt: f32) {
    let Some((orbits, last_offset)) = world.get(handle).and_then(|e| {
        e.moon().map(|m| (m.orbits, m.orbit_offset()))
    }) else {
        return;
    };
    let centre = match world.get(orbits) {
        Some(parent) => parent.pos,
        None => world.get(handle).map_or(Vec2::ZERO, |e| e.pos - last_offset),
    };

    let Some(entity) = world.get_mut(handle) else {
        return;
    };
    if let EntityKind::Moon(moon) = &mut entity.kind {
        moon.angular_pos += moon.angular_speed * dt;
        entity.pos = centre + moon.orbit_offset();
    }
}
