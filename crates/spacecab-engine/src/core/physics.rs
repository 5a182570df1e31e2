//! Planet gravity and collision sampling.
//!
//! Pure functions over copied planet data ([`PlanetProbe`]) so the flight and
//! particle systems can run them while holding a mutable borrow of the entity
//! they are moving.
//!
//! Gravity is a constant-magnitude pull towards every planet whose influence
//! zone (`radius * influence_factor`) contains the craft. Collision is tested
//! at a handful of hull sample points rather than against the hull outline;
//! a planet slipping between two samples goes unnoticed.

use glam::Vec2;

use crate::api::config::{GravityConfig, HullOffsets};
use crate::api::types::EntityHandle;
use crate::components::craft::Landing;
use crate::core::vector::{heading, VectorOps};

/// Snapshot of one gravity source, taken at the start of a mover's update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetProbe {
    pub handle: EntityHandle,
    pub pos: Vec2,
    pub radius: f32,
}

impl PlanetProbe {
    /// Inclusive: a point exactly on the surface counts as touching.
    pub fn touches(&self, point: Vec2) -> bool {
        self.pos.diff(point).magnitude() <= self.radius
    }

    /// Strictly inside the surface.
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.diff(point).magnitude() < self.radius
    }

    pub fn influences(&self, point: Vec2, gravity: &GravityConfig) -> bool {
        self.pos.diff(point).magnitude() <= self.radius * gravity.influence_factor
    }
}

/// World-space sample points around the craft hull for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullSensors {
    pub nose: Vec2,
    pub front_left: Vec2,
    pub front_right: Vec2,
    pub rear_left: Vec2,
    pub rear_right: Vec2,
    /// On the nose axis at the tail; touching down here is a landing.
    pub gear: Vec2,
}

impl HullSensors {
    /// `origin` is the hull pivot measured from its top-left corner, so the
    /// tail sits `origin.x` behind `pos` and the hull edge `origin.y` to the side.
    pub fn new(pos: Vec2, rotation: f32, origin: Vec2, hull: &HullOffsets) -> Self {
        let forward = heading(rotation);
        let left = Vec2::new(forward.y, -forward.x);
        let right = -left;
        let along = |from_tail: f32| forward.scaled(from_tail - origin.x);
        let side = hull.fin_span + origin.y;

        Self {
            nose: pos.sum(along(hull.nose)),
            front_left: pos.sum(left.scaled(side)).sum(along(hull.front_fins)),
            front_right: pos.sum(right.scaled(side)).sum(along(hull.front_fins)),
            rear_left: pos.sum(left.scaled(side)).sum(along(hull.rear_fins)),
            rear_right: pos.sum(right.scaled(side)).sum(along(hull.rear_fins)),
            gear: pos.sum(along(0.0)),
        }
    }

    /// The points whose contact destroys the craft.
    pub fn hull_points(&self) -> [Vec2; 5] {
        [
            self.nose,
            self.front_left,
            self.front_right,
            self.rear_left,
            self.rear_right,
        ]
    }
}

/// Result of testing a free-flying craft against every planet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactReport {
    /// Accumulated gravity to add to the craft velocity.
    pub pull: Vec2,
    /// Planet whose surface a hull sample touched. Evaluation stops there.
    pub explosion: Option<EntityHandle>,
    /// First planet the landing gear touched, unless the hull also hit something.
    pub touchdown: Option<Landing>,
}

/// Gravity, explosion, and landing checks for a craft at `pos`.
pub fn probe_contacts(
    probes: &[PlanetProbe],
    pos: Vec2,
    sensors: &HullSensors,
    gravity: &GravityConfig,
) -> ContactReport {
    let mut report = ContactReport::default();

    for probe in probes {
        if !probe.influences(pos, gravity) {
            continue;
        }
        report.pull += probe.pos.diff(pos).normalized().scaled(gravity.pull);

        if sensors.hull_points().iter().any(|&p| probe.touches(p)) {
            report.explosion = Some(probe.handle);
            report.touchdown = None;
            break;
        }

        if report.touchdown.is_none() && probe.touches(sensors.gear) {
            report.touchdown = Some(Landing {
                planet: probe.handle,
                offset: pos.diff(probe.pos),
            });
        }
    }

    report
}

/// Push a particle back out of any planet it entered this step and damp its
/// velocity by `bounce` (negative reverses it).
pub fn bounce_off_planets(
    probes: &[PlanetProbe],
    pos: &mut Vec2,
    velocity: &mut Vec2,
    dt: f32,
    bounce: f32,
) {
    for probe in probes {
        if probe.contains(*pos) {
            pos.subtract_in_place(velocity.scaled(dt));
            *velocity = velocity.scaled(bounce);
        }
    }
}
