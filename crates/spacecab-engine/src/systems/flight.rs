//! Player craft: gravity, hull collision, landing, thrust and steering.
//!
//! One call per frame in this order:
//! 1. landed: pin to the planet; flying: gravity + collision probes (may explode or land)
//! 2. thrust (lifts off, spawns exhaust)
//! 3. steering, only while flying
//! 4. speed limit
//! 5. flying: integrate position; landed: zero velocity and run docking

use glam::Vec2;

use crate::api::config::{ExhaustConfig, ExplosionConfig};
use crate::api::types::{tags, EntityHandle, WorldEvent};
use crate::components::entity::{Entity, EntityKind};
use crate::components::layer::Layer;
use crate::components::particle::ParticleConfig;
use crate::core::physics::{probe_contacts, HullSensors};
use crate::core::vector::{heading, VectorOps};
use crate::core::world::World;
use crate::input::queue::{Key, KeySource};
use crate::renderer::painter::Color;
use crate::systems::docking;

const DEBRIS_COLOR: Color = Color::hex(0xffffaa);

/// Side effects collected while the craft is borrowed, applied afterwards.
enum Outcome {
    Exploded {
        pos: Vec2,
        velocity: Vec2,
        passenger: Option<EntityHandle>,
    },
    Flew {
        exhaust: Option<(Vec2, Vec2, Vec2)>,
        docked_at: Option<EntityHandle>,
    },
}

pub fn update_craft(world: &mut World, handle: EntityHandle, dt: f32, keys: &dyn KeySource) {
    let probes = world.planet_probes();
    let flight = world.config.flight;
    let gravity = world.config.gravity;

    // Where a landed craft should sit this frame, if its planet is still around.
    let Some(landing) = world.get(handle).and_then(Entity::craft).map(|c| c.landing) else {
        return;
    };
    let anchor = landing.and_then(|l| {
        world
            .get(l.planet)
            .filter(|p| p.is_alive())
            .map(|p| p.pos + l.offset)
    });

    let Some(Entity {
        pos,
        origin,
        velocity,
        kind: EntityKind::Craft(craft),
        ttl,
        ..
    }) = world.get_mut(handle)
    else {
        return;
    };

    let forward = heading(craft.rotation);

    if craft.is_landed() {
        match anchor {
            Some(anchor) => *pos = anchor,
            None => {
                log::warn!("landing planet vanished, craft is flying again");
                craft.landing = None;
            }
        }
    } else {
        let sensors = HullSensors::new(*pos, craft.rotation, *origin, &flight.hull);
        let report = probe_contacts(&probes, *pos, &sensors, &gravity);
        velocity.add_in_place(report.pull);

        if report.explosion.is_some() {
            *ttl = 0.0;
            let outcome = Outcome::Exploded {
                pos: *pos,
                velocity: *velocity,
                passenger: craft.passenger.take(),
            };
            apply(world, handle, outcome);
            return;
        }
        if let Some(touchdown) = report.touchdown {
            log::info!("craft landed");
            craft.landing = Some(touchdown);
        }
    }

    let mut exhaust = None;
    if keys.is_key_down(Key::Thrust) {
        velocity.add_in_place(forward.scaled(dt * craft.thrust_accel));
        exhaust = Some((*pos, *velocity, forward));
        if craft.landing.take().is_some() {
            log::debug!("craft lifted off");
        }
    }

    if !craft.is_landed() {
        if keys.is_key_down(Key::RotateLeft) {
            craft.rotation -= flight.rotation_step;
        }
        if keys.is_key_down(Key::RotateRight) {
            craft.rotation += flight.rotation_step;
        }
    }

    *velocity = velocity.limited(craft.max_speed);

    let docked_at = craft.landed_planet();
    if docked_at.is_none() {
        pos.add_in_place(velocity.scaled(dt));
    } else {
        *velocity = Vec2::ZERO;
    }

    apply(world, handle, Outcome::Flew { exhaust, docked_at });
}

fn apply(world: &mut World, handle: EntityHandle, outcome: Outcome) {
    match outcome {
        Outcome::Exploded {
            pos,
            velocity,
            passenger,
        } => explode(world, pos, velocity, passenger),
        Outcome::Flew { exhaust, docked_at } => {
            if let Some((pos, velocity, forward)) = exhaust {
                let exhaust = world.config.exhaust;
                spawn_exhaust(world, &exhaust, pos, velocity, forward);
            }
            if let Some(planet) = docked_at {
                docking::dock(world, handle, planet);
            }
        }
    }
}

fn explode(world: &mut World, pos: Vec2, velocity: Vec2, passenger: Option<EntityHandle>) {
    let blast: ExplosionConfig = world.config.explosion;
    log::info!(
        "craft destroyed at ({:.0}, {:.0}), resetting in {}s",
        pos.x,
        pos.y,
        world.config.reset_delay
    );

    for _ in 0..blast.debris_count {
        let rng = &mut world.rng;
        let fragment = ParticleConfig {
            pos: pos + Vec2::new(rng.spread(blast.jitter[0]), rng.spread(blast.jitter[1])),
            size: Vec2::new(
                rng.range(blast.min_size, blast.max_size),
                rng.range(blast.min_size, blast.max_size),
            ),
            velocity: velocity.scaled(blast.inherited_velocity)
                + Vec2::new(rng.spread(blast.spread / 2.0), rng.spread(blast.spread / 2.0)),
            rotation_rate: rng.spread(blast.max_spin),
            ttl: rng.range(blast.min_lifetime, blast.max_lifetime),
            color: DEBRIS_COLOR,
            ..Default::default()
        };
        world.spawn(fragment.into_entity(), Layer::BACKGROUND, Some(tags::DEBRIS));
    }

    if let Some(entity) = passenger.and_then(|h| world.get_mut(h)) {
        entity.ttl = blast.dropped_passenger_ttl;
        if let Some(p) = entity.passenger_mut() {
            p.boarded_by = None;
        }
    }

    let delay = world.config.reset_delay;
    world.schedule(delay, WorldEvent::ResetScenario);
}

fn spawn_exhaust(world: &mut World, exhaust: &ExhaustConfig, pos: Vec2, velocity: Vec2, forward: Vec2) {
    let rng = &mut world.rng;
    let jitter = Vec2::new(rng.spread(exhaust.jitter), rng.spread(exhaust.jitter));
    let puff = ParticleConfig {
        pos: pos - forward.scaled(exhaust.offset),
        size: Vec2::splat(exhaust.size),
        velocity: forward.scaled(-exhaust.back_speed) + velocity + jitter,
        growth: exhaust.growth,
        ttl: rng.range(exhaust.min_lifetime, exhaust.max_lifetime),
        color: Color::YELLOW,
        ..Default::default()
    };
    world.spawn(puff.into_entity(), Layer::BACKGROUND, Some(tags::DEBRIS));
}
