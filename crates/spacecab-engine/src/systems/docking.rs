//! Passenger pickup and delivery while the craft sits on a planet.

use crate::api::types::{tags, EntityHandle};
use crate::components::entity::EntityKind;
use crate::core::world::World;

/// Keep a boarded passenger on top of the craft carrying it.
/// A passenger whose carrier is gone or dead is left where it is, free to board again.
pub fn follow_carrier(world: &mut World, handle: EntityHandle) {
    let Some(carrier) = world
        .get(handle)
        .and_then(|e| e.passenger())
        .and_then(|p| p.boarded_by)
    else {
        return;
    };
    let carrier_pos = world.get(carrier).filter(|c| c.is_alive()).map(|c| c.pos);
    let Some(entity) = world.get_mut(handle) else {
        return;
    };
    match carrier_pos {
        Some(pos) => entity.pos = pos,
        None => {
            if let Some(p) = entity.passenger_mut() {
                p.boarded_by = None;
            }
            log::debug!("carrier gone, passenger released");
        }
    }
}

/// Run the docking state machine for a craft landed on `planet`.
///
/// An empty craft boards the first waiting passenger whose pickup is `planet`.
/// A craft carrying a passenger bound for `planet` delivers it and collects the fare.
pub fn dock(world: &mut World, craft: EntityHandle, planet: EntityHandle) {
    let Some(carried) = world.get(craft).and_then(|e| e.craft()).map(|c| c.passenger) else {
        return;
    };

    match carried {
        None => board(world, craft, planet),
        Some(passenger) => deliver(world, craft, passenger, planet),
    }
}

fn board(world: &mut World, craft: EntityHandle, planet: EntityHandle) {
    let waiting = world.iter_tagged(tags::PASSENGER).find_map(|e| {
        e.passenger()
            .filter(|p| p.pickup == planet && p.boarded_by.is_none())
            .map(|_| e.handle)
    });
    let Some(passenger) = waiting else {
        return;
    };

    if let Some(p) = world.get_mut(passenger).and_then(|e| e.passenger_mut()) {
        p.boarded_by = Some(craft);
    }
    if let Some(c) = world.get_mut(craft).and_then(|e| e.craft_mut()) {
        c.passenger = Some(passenger);
    }
    log::info!("passenger boarded");
}

fn deliver(world: &mut World, craft: EntityHandle, passenger: EntityHandle, planet: EntityHandle) {
    if !world.get(passenger).is_some_and(|e| e.is_alive()) {
        // Passenger vanished under us; free the seat.
        if let Some(c) = world.get_mut(craft).and_then(|e| e.craft_mut()) {
            c.passenger = None;
        }
        return;
    }
    let Some(entity) = world.get_mut(passenger) else {
        return;
    };
    let EntityKind::Passenger(p) = &mut entity.kind else {
        return;
    };
    if p.dropoff != planet {
        return;
    }

    let fare = p.fare;
    p.boarded_by = None;
    entity.kill();
    world.credits += fare;
    if let Some(c) = world.get_mut(craft).and_then(|e| e.craft_mut()) {
        c.passenger = None;
    }
    log::info!("passenger delivered, fare {fare}, credits now {}", world.credits);
}
