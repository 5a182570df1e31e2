use spacecab_engine::{Clock, DrawList, InputEvent, Scenario, SimConfig, Simulation};

/// Wall clock backed by `Date.now()`, for hosts that do not pass a frame timestamp.
pub struct DateClock;

impl Clock for DateClock {
    fn now(&self) -> f64 {
        js_sys::Date::now() / 1000.0
    }
}

/// Generic runner that wires a scenario to the page.
///
/// Each concrete game (e.g., `space-taxi`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<S: Scenario> {
    sim: Simulation<S>,
    /// Last frame's draw calls, replayed by the page onto its canvas.
    draw_list: DrawList,
    /// Text table of the last frame, serialized once per frame.
    texts_json: String,
}

impl<S: Scenario> GameRunner<S> {
    pub fn new(scenario: S) -> Self {
        Self {
            sim: Simulation::new(scenario),
            draw_list: DrawList::new(),
            texts_json: String::from("[]"),
        }
    }

    /// Override the scenario's tuning from JSON. Must run before `init`.
    /// A malformed document is logged and the current tuning is kept.
    pub fn load_config_json(&mut self, json: &str) {
        match SimConfig::from_json(json) {
            Ok(config) => {
                if self.sim.reconfigure(config) {
                    log::info!("tuning loaded");
                }
            }
            Err(err) => log::error!("ignoring malformed tuning: {err}"),
        }
    }

    /// Initialize the scenario. Call once after construction.
    pub fn init(&mut self) {
        self.sim.init();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.sim.push_input(event);
    }

    /// Run one frame. `timestamp_ms` is the `requestAnimationFrame` timestamp.
    pub fn frame(&mut self, timestamp_ms: f64) {
        self.draw_list.reset();
        self.sim.frame(timestamp_ms / 1000.0, &mut self.draw_list);
        self.texts_json = self.draw_list.texts_json();
    }

    /// Run one frame stamped by [`DateClock`].
    pub fn frame_now(&mut self) {
        self.draw_list.reset();
        self.sim.frame_from(&DateClock, &mut self.draw_list);
        self.texts_json = self.draw_list.texts_json();
    }

    // ---- Pointer accessors for the page-side replayer ----

    pub fn records_ptr(&self) -> *const f32 {
        self.draw_list.records_ptr()
    }

    pub fn record_count(&self) -> u32 {
        self.draw_list.record_count()
    }

    pub fn texts_json(&self) -> String {
        self.texts_json.clone()
    }

    pub fn credits(&self) -> i64 {
        self.sim.world().credits
    }

    pub fn entity_count(&self) -> u32 {
        self.sim.world().len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.sim.camera().viewport.x
    }

    pub fn viewport_height(&self) -> f32 {
        self.sim.camera().viewport.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacecab_engine::{tags, Camera, CraftConfig, Layer, PlanetConfig, Vector, World};

    struct Lone;

    impl Scenario for Lone {
        fn init(&mut self, world: &mut World, _camera: &mut Camera) {
            world.spawn(PlanetConfig::default().into_entity(), Layer::BACKGROUND, Some(tags::PLANET));
        }

        fn reset(&mut self, world: &mut World, camera: &mut Camera) {
            let craft = world.spawn(
                CraftConfig::default().with_pos(Vector::new(1000.0, 0.0)).into_entity(),
                Layer::CRAFT,
                Some(tags::PLAYER),
            );
            camera.set_follow(Some(craft));
        }
    }

    #[test]
    fn frame_fills_draw_buffer() {
        let mut runner = GameRunner::new(Lone);
        runner.init();
        runner.frame(16.0);
        assert!(runner.record_count() > 0);
        assert!(!runner.records_ptr().is_null());
        assert_eq!(runner.texts_json(), "[]");
    }

    #[test]
    fn bad_config_keeps_defaults() {
        let mut runner = GameRunner::new(Lone);
        runner.load_config_json("{ not json");
        runner.init();
        assert_eq!(runner.credits(), 10);
    }

    #[test]
    fn config_overrides_before_init() {
        let mut runner = GameRunner::new(Lone);
        runner.load_config_json(r#"{ "starting_credits": 3, "viewport": { "width": 320.0, "height": 200.0 } }"#);
        runner.init();
        assert_eq!(runner.credits(), 3);
        assert_eq!(runner.viewport_width(), 320.0);
        assert_eq!(runner.entity_count(), 2);
    }
}
