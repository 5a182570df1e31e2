use crate::api::config::SimConfig;
use crate::api::types::WorldEvent;
use crate::core::time::{Clock, FrameClock};
use crate::core::world::World;
use crate::input::queue::{InputEvent, InputQueue, Keyboard};
use crate::renderer::camera::Camera;
use crate::renderer::painter::{Color, Painter};

/// The contract every scenario must fulfill.
pub trait Scenario {
    /// Return engine tuning. Called once before init.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// Spawn the permanent parts of the scenario (planets, HUD, ...).
    fn init(&mut self, world: &mut World, camera: &mut Camera);

    /// Re-populate whatever a lost craft takes with it. Called right after
    /// `init` and again every time a scheduled reset comes due.
    fn reset(&mut self, world: &mut World, camera: &mut Camera);
}

/// Drives one frame: input, update, cleanup, deferred events, camera, render.
pub struct Simulation<S: Scenario> {
    scenario: S,
    world: World,
    camera: Camera,
    input: InputQueue,
    keyboard: Keyboard,
    clock: FrameClock,
    initialized: bool,
}

impl<S: Scenario> Simulation<S> {
    pub fn new(scenario: S) -> Self {
        let config = scenario.config();
        Self::with_config(scenario, config)
    }

    /// Build with explicit tuning instead of the scenario's own.
    pub fn with_config(scenario: S, config: SimConfig) -> Self {
        let camera = Camera::new(config.viewport.width, config.viewport.height);
        let clock = FrameClock::new(config.max_frame_dt);
        Self {
            scenario,
            world: World::new(config),
            camera,
            input: InputQueue::new(),
            keyboard: Keyboard::new(),
            clock,
            initialized: false,
        }
    }

    /// Swap the tuning. Only honoured before `init`; returns whether it was applied.
    pub fn reconfigure(&mut self, config: SimConfig) -> bool {
        if self.initialized {
            log::warn!("config change ignored, simulation already running");
            return false;
        }
        self.camera = Camera::new(config.viewport.width, config.viewport.height);
        self.clock = FrameClock::new(config.max_frame_dt);
        self.world = World::new(config);
        true
    }

    /// Populate the world. Call once after construction.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.scenario.init(&mut self.world, &mut self.camera);
        self.scenario.reset(&mut self.world, &mut self.camera);
        self.initialized = true;
        log::debug!("simulation initialized with {} entities", self.world.len());
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame stamped `now` (seconds). Returns the delta actually simulated.
    pub fn frame(&mut self, now: f64, painter: &mut dyn Painter) -> f32 {
        let dt = self.clock.tick(now);
        self.step(dt, painter);
        dt
    }

    /// Run one frame, reading the time from `clock`.
    pub fn frame_from(&mut self, clock: &dyn Clock, painter: &mut dyn Painter) -> f32 {
        self.frame(clock.now(), painter)
    }

    /// Advance by exactly `dt` seconds and draw the result.
    pub fn step(&mut self, dt: f32, painter: &mut dyn Painter) {
        if !self.initialized {
            return;
        }

        for event in self.input.drain() {
            self.keyboard.apply(&event);
            if let InputEvent::Resize { width, height } = event {
                self.camera.resize(width, height);
            }
        }

        self.world.update(dt, &self.keyboard);
        self.world.cleanup();

        for event in self.world.drain_due() {
            match event {
                WorldEvent::ResetScenario => {
                    log::info!("resetting scenario");
                    self.scenario.reset(&mut self.world, &mut self.camera);
                }
            }
        }

        self.camera.update(&self.world);

        painter.clear(Color::BLACK);
        self.world.render(&self.camera, painter);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scenario(&self) -> &S {
        &self.scenario
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
