//! Per-kind drawing. Every entity draws inside its own save/restore pair with
//! the painter translated to its position (and rotated, for spinning kinds).

use glam::Vec2;

use crate::components::entity::{Entity, EntityKind};
use crate::core::world::World;
use crate::renderer::painter::{Color, Painter};

/// Gravity-zone halo: translucent discs from 4x down to (but excluding) 1x radius.
const HALO_COLOR: Color = Color::new(0xaa as f32 / 255.0, 0xaa as f32 / 255.0, 1.0, 8.0 / 255.0);
const HALO_START: f32 = 4.0;
const HALO_STEP: f32 = 0.25;
const HALO_RINGS: usize = 12;

const ROUTE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0x99 as f32 / 255.0);
const PASSENGER_RIM: f32 = 2.0;

/// Drawn hull is shorter than the collision box; nose and fins fill the rest.
const HULL_BODY: Vec2 = Vec2::new(40.0, 20.0);

pub fn draw_entity(world: &World, entity: &Entity, painter: &mut dyn Painter) {
    if !entity.is_alive() {
        return;
    }
    match &entity.kind {
        EntityKind::Plain => {}
        EntityKind::Planet(planet) => draw_planet(entity, planet.radius, painter),
        EntityKind::Moon(moon) => draw_planet(entity, moon.planet.radius, painter),
        EntityKind::Passenger(passenger) => {
            painter.save();
            painter.translate(entity.pos);
            painter.fill_circle(Vec2::ZERO, passenger.radius, Color::WHITE);
            painter.fill_circle(Vec2::ZERO, passenger.radius - PASSENGER_RIM, entity.color);
            painter.restore();

            if let Some(dropoff) = world.get(passenger.dropoff) {
                painter.line(entity.pos, dropoff.pos, ROUTE_COLOR);
            }
        }
        EntityKind::Particle(particle) => draw_box(entity, particle.rotation, painter),
        EntityKind::Debris(debris) => draw_box(entity, debris.rotation, painter),
        EntityKind::Craft(craft) => {
            painter.save();
            painter.translate(entity.pos);
            painter.rotate(craft.rotation);
            draw_hull(entity.origin, entity.color, painter);
            painter.restore();
        }
        EntityKind::HudText(hud) => {
            painter.save();
            painter.translate(entity.pos);
            painter.text(&hud.text, Vec2::ZERO, &hud.style, entity.color);
            painter.restore();
        }
    }
}

fn draw_planet(entity: &Entity, radius: f32, painter: &mut dyn Painter) {
    painter.save();
    painter.translate(entity.pos);
    for ring in 0..HALO_RINGS {
        let scale = HALO_START - HALO_STEP * ring as f32;
        painter.fill_circle(Vec2::ZERO, radius * scale, HALO_COLOR);
    }
    painter.fill_circle(Vec2::ZERO, radius, entity.color);
    painter.restore();
}

fn draw_box(entity: &Entity, rotation: f32, painter: &mut dyn Painter) {
    painter.save();
    painter.translate(entity.pos);
    painter.rotate(rotation);
    painter.fill_rect(-entity.origin, entity.size, entity.color);
    painter.restore();
}

/// Body, pointed nose and tail fin, in hull-local space with `o` as the pivot.
fn draw_hull(o: Vec2, color: Color, painter: &mut dyn Painter) {
    painter.fill_rect(-o, HULL_BODY, color);
    painter.fill_polygon(
        &[
            Vec2::new(30.0 - o.x, -5.0 - o.y),
            Vec2::new(35.0 - o.x, -o.y),
            Vec2::new(40.0 - o.x, -o.y),
            Vec2::new(50.0 - o.x, -5.0),
            Vec2::new(55.0 - o.x, 0.0),
            Vec2::new(50.0 - o.x, 5.0),
            Vec2::new(40.0 - o.x, o.y),
            Vec2::new(35.0 - o.x, o.y),
            Vec2::new(30.0 - o.x, 5.0 + o.y),
        ],
        color,
    );
    painter.fill_polygon(
        &[
            Vec2::new(2.0 - o.x, -5.0 - o.y),
            Vec2::new(20.0 - o.x, 0.0),
            Vec2::new(2.0 - o.x, 5.0 + o.y),
        ],
        color,
    );
}
