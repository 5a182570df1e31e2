//! Space taxi: three planets (one with a moon), a junk field, and one fare at a time.
//! Crash into a planet and the craft is rebuilt at the start a second later.

use glam::Vec2;
use spacecab_engine::{
    tags, Camera, Color, CraftConfig, DebrisConfig, EntityHandle, HudTextConfig, HudView, Layer,
    MoonConfig, PassengerConfig, PlanetConfig, Scenario, SimConfig, TextAlign, World,
};

const JUNK_COUNT: usize = 500;
/// The junk field spans this many viewports in each direction.
const JUNK_SPREAD: f32 = 10.0;
const JUNK_MIN_SIZE: u32 = 2;
const JUNK_SIZE_RANGE: u32 = 5;

const CRAFT_START: Vec2 = Vec2::new(200.0, 200.0);
const HUD_POS: Vec2 = Vec2::new(10.0, 20.0);

pub struct SpaceTaxi {
    config: SimConfig,
    /// Every body a fare can start or end at, moon included.
    stops: Vec<EntityHandle>,
    passenger: Option<EntityHandle>,
    craft: Option<EntityHandle>,
}

impl SpaceTaxi {
    pub fn new() -> Self {
        Self {
            config: SimConfig::default(),
            stops: Vec::new(),
            passenger: None,
            craft: None,
        }
    }

    fn spawn_junk(world: &mut World) {
        let field = Vec2::new(world.config.viewport.width, world.config.viewport.height);
        let half = field * JUNK_SPREAD / 2.0;
        for _ in 0..JUNK_COUNT {
            let rng = &mut world.rng;
            let pos = Vec2::new(
                rng.range(-half.x, half.x).floor(),
                rng.range(-half.y, half.y).floor(),
            );
            let size = Vec2::new(
                (JUNK_MIN_SIZE + rng.next_int(JUNK_SIZE_RANGE)) as f32,
                (JUNK_MIN_SIZE + rng.next_int(JUNK_SIZE_RANGE)) as f32,
            );
            let junk = DebrisConfig {
                pos,
                size,
                velocity: Some(Vec2::ZERO),
                ..Default::default()
            }
            .into_entity(rng);
            world.spawn(junk, Layer::BACKGROUND, Some(tags::JUNK));
        }
    }

    fn spawn_planet(world: &mut World, x: f32, y: f32, radius: f32, color: u32) -> EntityHandle {
        let planet = PlanetConfig {
            pos: Vec2::new(x, y),
            radius,
            color: Color::hex(color),
        };
        world.spawn(planet.into_entity(), Layer::BACKGROUND, Some(tags::PLANET))
    }

    fn spawn_passenger(&mut self, world: &mut World, pickup: EntityHandle, dropoff: EntityHandle) {
        let passenger = PassengerConfig {
            pickup,
            dropoff,
            ..Default::default()
        }
        .into_entity(world);
        let fare = passenger.passenger().map_or(0, |p| p.fare);
        self.passenger = Some(world.spawn(passenger, Layer::PASSENGERS, Some(tags::PASSENGER)));
        log::info!("new fare waiting: {fare} credits");
    }

    /// Two distinct stops, picked at random.
    fn random_route(&self, world: &mut World) -> Option<(EntityHandle, EntityHandle)> {
        let live: Vec<EntityHandle> = self
            .stops
            .iter()
            .copied()
            .filter(|&h| world.get(h).is_some())
            .collect();
        if live.len() < 2 {
            return None;
        }
        let n = live.len() as u32;
        let from = world.rng.next_int(n);
        let to = (from + 1 + world.rng.next_int(n - 1)) % n;
        Some((live[from as usize], live[to as usize]))
    }

    pub fn craft(&self) -> Option<EntityHandle> {
        self.craft
    }

    pub fn passenger(&self) -> Option<EntityHandle> {
        self.passenger
    }
}

impl Default for SpaceTaxi {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario for SpaceTaxi {
    fn config(&self) -> SimConfig {
        self.config.clone()
    }

    fn init(&mut self, world: &mut World, _camera: &mut Camera) {
        Self::spawn_junk(world);

        let green = Self::spawn_planet(world, 800.0, 300.0, 120.0, 0x00aa66);
        let home = Self::spawn_planet(world, -50.0, 600.0, 80.0, 0x00aa00);
        let olive = Self::spawn_planet(world, 0.0, -400.0, 140.0, 0x55aa00);
        let moon = MoonConfig {
            orbits: home,
            ..Default::default()
        }
        .into_entity(world);
        let moon = world.spawn(moon, Layer::BACKGROUND, Some(tags::PLANET));
        self.stops = vec![green, home, olive, moon];

        self.spawn_passenger(world, green, home);

        world.spawn_hud(
            HudTextConfig {
                pos: HUD_POS,
                text: "CREDITS:".into(),
                align: TextAlign::Start,
                updater: Some(Box::new(|view: &HudView| format!("CREDITS: {}", view.credits))),
                ..Default::default()
            }
            .into_entity(),
        );
    }

    fn reset(&mut self, world: &mut World, camera: &mut Camera) {
        let craft = world.spawn(
            CraftConfig::from_flight(&world.config.flight)
                .with_pos(CRAFT_START)
                .into_entity(),
            Layer::CRAFT,
            Some(tags::PLAYER),
        );
        camera.set_follow(Some(craft));
        self.craft = Some(craft);

        // A fare dropped in the crash is already counting down and does not count.
        let waiting = self
            .passenger
            .and_then(|h| world.get(h))
            .is_some_and(|e| e.is_alive() && e.ttl.is_infinite());
        if !waiting {
            if let Some((pickup, dropoff)) = self.random_route(world) {
                self.spawn_passenger(world, pickup, dropoff);
            }
        }
    }
}
