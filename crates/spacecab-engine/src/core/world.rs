//! The world registry: owns every entity, indexes them by render layer and tag,
//! and drives the per-frame update, cleanup and render passes.

use std::collections::{BTreeMap, HashMap};

use slotmap::SlotMap;

use crate::api::config::SimConfig;
use crate::api::types::{tags, EntityHandle, ScheduledEvent, WorldEvent};
use crate::components::entity::{Entity, EntityKind};
use crate::components::hud::HudView;
use crate::components::layer::Layer;
use crate::core::physics::PlanetProbe;
use crate::core::rng::Rng;
use crate::input::queue::KeySource;
use crate::renderer::camera::Camera;
use crate::renderer::painter::Painter;
use crate::systems;

/// What a single entity does during `update`, decided before any system borrows the world.
#[derive(Clone, Copy)]
enum Step {
    Idle,
    Orbit,
    Ride,
    Particle,
    Drift,
    Fly,
    Hud,
}

impl Step {
    fn of(kind: &EntityKind) -> Self {
        match kind {
            EntityKind::Plain | EntityKind::Planet(_) => Step::Idle,
            EntityKind::Moon(_) => Step::Orbit,
            EntityKind::Passenger(_) => Step::Ride,
            EntityKind::Particle(_) => Step::Particle,
            EntityKind::Debris(_) => Step::Drift,
            EntityKind::Craft(_) => Step::Fly,
            EntityKind::HudText(_) => Step::Hud,
        }
    }
}

pub struct World {
    entities: SlotMap<EntityHandle, Entity>,
    layers: BTreeMap<Layer, Vec<EntityHandle>>,
    tags: HashMap<String, Vec<EntityHandle>>,
    hud: Vec<EntityHandle>,
    /// Score. Only deliveries change it.
    pub credits: i64,
    pub rng: Rng,
    pub config: SimConfig,
    time: f64,
    pending: Vec<ScheduledEvent>,
}

impl World {
    pub fn new(config: SimConfig) -> Self {
        Self {
            entities: SlotMap::with_capacity_and_key(1024),
            layers: BTreeMap::new(),
            tags: HashMap::new(),
            hud: Vec::new(),
            credits: config.starting_credits,
            rng: Rng::new(config.rng_seed),
            config,
            time: 0.0,
            pending: Vec::new(),
        }
    }

    // -- Spawning --

    /// Insert an entity into `layer` (and the `tag` index, if given).
    /// Layers are sparse; any `i32` works, negative included.
    pub fn spawn(&mut self, entity: Entity, layer: Layer, tag: Option<&str>) -> EntityHandle {
        let handle = self.entities.insert_with_key(|handle| Entity {
            handle,
            layer,
            ..entity
        });
        self.layers.entry(layer).or_default().push(handle);
        if let Some(tag) = tag {
            self.add_tag(handle, tag);
        }
        handle
    }

    /// Add `handle` to a tag list. Tags are many-to-many; duplicates are not checked.
    pub fn add_tag(&mut self, handle: EntityHandle, tag: &str) {
        self.tags.entry(tag.to_string()).or_default().push(handle);
    }

    /// Screen-space entity, drawn after every world layer and never transformed by the camera.
    pub fn spawn_hud(&mut self, entity: Entity) -> EntityHandle {
        let handle = self.entities.insert_with_key(|handle| Entity { handle, ..entity });
        self.hud.push(handle);
        handle
    }

    // -- Lookup --

    pub fn get(&self, handle: EntityHandle) -> Option<&Entity> {
        self.entities.get(handle)
    }

    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        self.entities.get_mut(handle)
    }

    /// Handles under `tag`, in spawn order. Empty for a tag never used.
    pub fn tagged(&self, tag: &str) -> &[EntityHandle] {
        self.tags.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Handles in one layer, in spawn order.
    pub fn layer(&self, layer: Layer) -> &[EntityHandle] {
        self.layers.get(&layer).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate live tagged entities.
    pub fn iter_tagged<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.tagged(tag)
            .iter()
            .filter_map(|&h| self.entities.get(h))
            .filter(|e| e.is_alive())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// World clock in seconds, advanced by every `update`.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Copy out every live planet (moons included) for gravity and collision checks.
    pub fn planet_probes(&self) -> Vec<PlanetProbe> {
        self.iter_tagged(tags::PLANET)
            .filter_map(|e| {
                e.body_radius().map(|radius| PlanetProbe {
                    handle: e.handle,
                    pos: e.pos,
                    radius,
                })
            })
            .collect()
    }

    /// Facts the HUD reads this frame.
    pub fn hud_view(&self) -> HudView {
        HudView {
            credits: self.credits,
        }
    }

    // -- Deferred events --

    /// Queue `event` to fire `delay` seconds of world time from now.
    pub fn schedule(&mut self, delay: f32, event: WorldEvent) {
        self.pending.push(ScheduledEvent {
            due: self.time + f64::from(delay),
            event,
        });
    }

    /// Remove and return every event whose time has come, in scheduling order.
    pub fn drain_due(&mut self) -> Vec<WorldEvent> {
        let now = self.time;
        let mut due = Vec::new();
        self.pending.retain(|scheduled| {
            if scheduled.due <= now {
                due.push(scheduled.event);
                false
            } else {
                true
            }
        });
        due
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    // -- Frame passes --

    /// Update every entity: world layers ascending, spawn order within a layer,
    /// then the HUD. Entities spawned during this pass wait for the next frame.
    pub fn update(&mut self, dt: f32, keys: &dyn KeySource) {
        self.time += f64::from(dt);

        let mut order: Vec<EntityHandle> = self.layers.values().flatten().copied().collect();
        order.extend_from_slice(&self.hud);

        for handle in order {
            let Some(entity) = self.entities.get_mut(handle) else {
                continue;
            };
            if !entity.is_alive() {
                continue;
            }
            entity.age(dt);
            match Step::of(&entity.kind) {
                Step::Idle => {}
                Step::Orbit => systems::orbit::update_moon(self, handle, dt),
                Step::Ride => systems::docking::follow_carrier(self, handle),
                Step::Particle => systems::particles::update_particle(self, handle, dt),
                Step::Drift => systems::particles::update_debris(self, handle, dt),
                Step::Fly => systems::flight::update_craft(self, handle, dt, keys),
                Step::Hud => systems::hud::refresh_text(self, handle),
            }
        }
    }

    /// Drop every entity whose lifetime ran out, from storage and all indices.
    /// Survivors keep their relative order. Returns how many were removed.
    pub fn cleanup(&mut self) -> usize {
        let before = self.entities.len();
        self.entities.retain(|_, e| e.is_alive());
        let removed = before - self.entities.len();
        if removed == 0 {
            return 0;
        }

        let entities = &self.entities;
        let live = |h: &EntityHandle| entities.contains_key(*h);
        for list in self.layers.values_mut() {
            list.retain(live);
        }
        self.layers.retain(|_, list| !list.is_empty());
        for list in self.tags.values_mut() {
            list.retain(live);
        }
        self.hud.retain(live);

        log::debug!("cleanup removed {removed} entities, {} left", self.entities.len());
        removed
    }

    /// Draw world layers through the camera transform, then the HUD in screen space.
    pub fn render(&self, camera: &Camera, painter: &mut dyn Painter) {
        camera.begin(painter);
        for handle in self.layers.values().flatten() {
            if let Some(entity) = self.entities.get(*handle) {
                systems::render::draw_entity(self, entity, painter);
            }
        }
        camera.end(painter);

        for handle in &self.hud {
            if let Some(entity) = self.entities.get(*handle) {
                systems::render::draw_entity(self, entity, painter);
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::hud::HudTextConfig;
    use crate::components::particle::ParticleConfig;
    use crate::components::planet::PlanetConfig;
    use crate::input::queue::Keyboard;
    use crate::renderer::draw_list::{op, DrawList};
    use crate::renderer::painter::Color;
    use glam::Vec2;

    fn plain(x: f32) -> Entity {
        Entity::new(EntityKind::Plain).with_pos(Vec2::new(x, 0.0))
    }

    #[test]
    fn cleanup_keeps_all_live_entities() {
        let mut world = World::default();
        for i in 0..10 {
            world.spawn(plain(i as f32), Layer::CRAFT, None);
        }
        assert_eq!(world.cleanup(), 0);
        assert_eq!(world.len(), 10);
        assert_eq!(world.layer(Layer::CRAFT).len(), 10);
    }

    #[test]
    fn cleanup_removes_exactly_the_dead_one_in_order() {
        let mut world = World::default();
        let handles: Vec<_> = (0..5)
            .map(|i| world.spawn(plain(i as f32), Layer::CRAFT, Some("thing")))
            .collect();
        world.get_mut(handles[2]).unwrap().kill();

        assert_eq!(world.cleanup(), 1);
        let expected = [handles[0], handles[1], handles[3], handles[4]];
        assert_eq!(world.layer(Layer::CRAFT), &expected);
        assert_eq!(world.tagged("thing"), &expected);
        assert!(world.get(handles[2]).is_none());
    }

    #[test]
    fn unknown_tag_is_empty() {
        let world = World::default();
        assert!(world.tagged("nothing-here").is_empty());
        assert_eq!(world.iter_tagged("nothing-here").count(), 0);
    }

    #[test]
    fn tags_are_shared_and_non_exclusive() {
        let mut world = World::default();
        let a = world.spawn(plain(0.0), Layer::BACKGROUND, Some("shared"));
        let b = world.spawn(plain(1.0), Layer::CRAFT, Some("shared"));
        world.add_tag(a, "other");
        assert_eq!(world.tagged("shared"), &[a, b]);
        assert_eq!(world.tagged("other"), &[a]);
    }

    #[test]
    fn negative_layer_is_legal_and_first() {
        let mut world = World::default();
        world.spawn(plain(0.0), Layer::CRAFT, None);
        let under = world.spawn(plain(0.0), Layer(-3), None);
        assert_eq!(world.get(under).unwrap().layer, Layer(-3));
        assert_eq!(world.layers.keys().next(), Some(&Layer(-3)));
    }

    #[test]
    fn spawn_records_handle_and_layer() {
        let mut world = World::default();
        let h = world.spawn(plain(0.0), Layer::PASSENGERS, None);
        let e = world.get(h).unwrap();
        assert_eq!(e.handle, h);
        assert_eq!(e.layer, Layer::PASSENGERS);
    }

    #[test]
    fn finite_ttl_expires_through_update() {
        let mut world = World::default();
        let h = world.spawn(plain(0.0).with_ttl(0.5), Layer::CRAFT, None);
        let keys = Keyboard::new();
        world.update(0.3, &keys);
        world.cleanup();
        assert!(world.get(h).is_some());
        world.update(0.3, &keys);
        world.cleanup();
        assert!(world.get(h).is_none());
    }

    #[test]
    fn update_moves_particles_once_per_frame() {
        let mut world = World::default();
        let h = world.spawn(
            ParticleConfig {
                velocity: Vec2::new(10.0, 0.0),
                ..Default::default()
            }
            .into_entity(),
            Layer::BACKGROUND,
            None,
        );
        world.update(0.5, &Keyboard::new());
        assert!((world.get(h).unwrap().pos.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn planet_probes_skip_dead_planets() {
        let mut world = World::default();
        let a = world.spawn(PlanetConfig::default().into_entity(), Layer::BACKGROUND, Some(tags::PLANET));
        let b = world.spawn(
            PlanetConfig {
                pos: Vec2::new(500.0, 0.0),
                radius: 50.0,
                ..Default::default()
            }
            .into_entity(),
            Layer::BACKGROUND,
            Some(tags::PLANET),
        );
        world.get_mut(a).unwrap().kill();
        let probes = world.planet_probes();
        assert_eq!(probes.len(), 1);
        assert_eq!(probes[0].handle, b);
        assert_eq!(probes[0].radius, 50.0);
    }

    #[test]
    fn scheduled_events_fire_on_time() {
        let mut world = World::default();
        world.schedule(1.0, WorldEvent::ResetScenario);
        let keys = Keyboard::new();
        world.update(0.6, &keys);
        assert!(world.drain_due().is_empty());
        world.update(0.6, &keys);
        assert_eq!(world.drain_due(), vec![WorldEvent::ResetScenario]);
        assert!(!world.has_pending());
    }

    #[test]
    fn render_draws_layers_ascending_then_hud() {
        let mut world = World::default();
        let square = |color| {
            ParticleConfig {
                color,
                ..Default::default()
            }
            .into_entity()
        };
        world.spawn(square(Color::RED), Layer::CRAFT, None);
        world.spawn(square(Color::YELLOW), Layer::BACKGROUND, None);
        world.spawn_hud(
            HudTextConfig {
                text: "hi".into(),
                ..Default::default()
            }
            .into_entity(),
        );

        let mut list = DrawList::new();
        world.render(&Camera::new(800.0, 600.0), &mut list);

        let rects: Vec<_> = list.records().iter().filter(|r| r.op == op::RECT).collect();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].rgba, [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(rects[1].rgba, [1.0, 0.0, 0.0, 1.0]);

        let last_rect = list.records().iter().rposition(|r| r.op == op::RECT).unwrap();
        let text = list.records().iter().position(|r| r.op == op::TEXT).unwrap();
        assert!(text > last_rect);
        assert_eq!(list.texts()[0].text, "hi");
    }

    #[test]
    fn credits_start_from_config() {
        let world = World::new(SimConfig {
            starting_credits: 7,
            ..Default::default()
        });
        assert_eq!(world.credits, 7);
        assert_eq!(world.hud_view().credits, 7);
    }

    #[test]
    fn entities_spawned_mid_pass_wait_for_next_update() {
        use crate::components::craft::CraftConfig;
        use crate::input::queue::Key;

        let mut world = World::default();
        let craft = world.spawn(
            CraftConfig::default().with_pos(Vec2::new(5000.0, 0.0)).into_entity(),
            Layer::CRAFT,
            Some(tags::PLAYER),
        );
        let mut keys = Keyboard::new();
        keys.press(Key::Thrust);

        world.update(0.1, &keys);
        assert!(world.get(craft).unwrap().pos.x > 5000.0);

        let puffs: Vec<_> = world.iter_tagged(tags::DEBRIS).collect();
        assert_eq!(puffs.len(), 1);
        let puff = puffs[0];
        assert_eq!(puff.pos, Vec2::new(4985.0, 0.0));
        assert_eq!(puff.size, Vec2::splat(8.0));
        assert!(puff.ttl >= 1.0 && puff.ttl < 3.0);
        let (pos, ttl) = (puff.pos, puff.ttl);

        world.update(0.1, &Keyboard::new());
        let puff = world.iter_tagged(tags::DEBRIS).next().unwrap();
        assert_ne!(puff.pos, pos);
        assert!((puff.ttl - (ttl - 0.1)).abs() < 1e-5);
    }
}
