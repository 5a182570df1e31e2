use crate::api::types::EntityHandle;
use crate::components::entity::{Entity, EntityKind};
use crate::core::physics::bounce_off_planets;
use crate::core::vector::VectorOps;
use crate::core::world::World;

/// Integrate a particle: drift, grow or shrink, spin, then bounce off any
/// planet it has sunk into.
pub fn update_particle(world: &mut World, handle: EntityHandle, dt: f32) {
    let probes = world.planet_probes();
    let bounce = world.config.particles.bounce;

    let Some(entity) = world.get_mut(handle) else {
        return;
    };
    let Entity {
        pos,
        size,
        origin,
        velocity,
        kind: EntityKind::Particle(particle),
        ..
    } = entity
    else {
        return;
    };

    pos.add_in_place(velocity.scaled(dt));
    if particle.growth != 1.0 {
        let factor = 1.0 + (particle.growth - 1.0) * dt;
        *size = size.scaled(factor);
        *origin = origin.scaled(factor);
    }
    particle.rotation += particle.rotation_rate;

    bounce_off_planets(&probes, pos, velocity, dt, bounce);
}

/// Background junk: straight-line drift and spin, no collisions.
pub fn update_debris(world: &mut World, handle: EntityHandle, dt: f32) {
    let Some(Entity {
        pos,
        velocity,
        kind: EntityKind::Debris(debris),
        ..
    }) = world.get_mut(handle)
    else {
        return;
    };
    pos.add_in_place(velocity.scaled(dt));
    debris.rotation += debris.rotation_rate;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::tags;
    use crate::components::layer::Layer;
    use crate::components::particle::{DebrisConfig, ParticleConfig};
    use crate::components::planet::PlanetConfig;
    use crate::core::rng::Rng;
    use glam::Vec2;

    #[test]
    fn particle_moves_spins_and_shrinks() {
        let mut world = World::default();
        let h = world.spawn(
            ParticleConfig {
                size: Vec2::splat(8.0),
                velocity: Vec2::new(10.0, -20.0),
                rotation_rate: 0.1,
                growth: 0.4,
                ..Default::default()
            }
            .into_entity(),
            Layer::BACKGROUND,
            None,
        );
        update_particle(&mut world, h, 0.5);

        let e = world.get(h).unwrap();
        assert!((e.pos - Vec2::new(5.0, -10.0)).length() < 1e-5);
        // 1 + (0.4 - 1) * 0.5 = 0.7
        assert!((e.size - Vec2::splat(5.6)).length() < 1e-4);
        assert!((e.origin - Vec2::splat(2.8)).length() < 1e-4);
        match &e.kind {
            EntityKind::Particle(p) => assert!((p.rotation - 0.1).abs() < 1e-6),
            other => panic!("expected particle, got {other:?}"),
        }
    }

    #[test]
    fn particle_bounces_off_planet() {
        let mut world = World::default();
        world.spawn(
            PlanetConfig {
                pos: Vec2::ZERO,
                radius: 50.0,
                ..Default::default()
            }
            .into_entity(),
            Layer::BACKGROUND,
            Some(tags::PLANET),
        );
        let h = world.spawn(
            ParticleConfig {
                pos: Vec2::new(55.0, 0.0),
                velocity: Vec2::new(-100.0, 0.0),
                ..Default::default()
            }
            .into_entity(),
            Layer::BACKGROUND,
            None,
        );
        update_particle(&mut world, h, 0.1);

        let e = world.get(h).unwrap();
        assert!((e.pos.x - 55.0).abs() < 1e-4);
        assert!((e.velocity - Vec2::new(20.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn debris_drifts_through_planets() {
        let mut world = World::default();
        world.spawn(PlanetConfig::default().into_entity(), Layer::BACKGROUND, Some(tags::PLANET));
        let h = world.spawn(
            DebrisConfig {
                velocity: Some(Vec2::new(10.0, 0.0)),
                rotation_rate: Some(0.05),
                ..Default::default()
            }
            .into_entity(&mut Rng::new(1)),
            Layer::BACKGROUND,
            Some(tags::JUNK),
        );
        update_debris(&mut world, h, 1.0);
        let e = world.get(h).unwrap();
        assert_eq!(e.pos, Vec2::new(10.0, 0.0));
        assert_eq!(e.velocity, Vec2::new(10.0, 0.0));
    }
}
