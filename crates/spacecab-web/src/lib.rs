pub mod runner;

pub use runner::{DateClock, GameRunner};

/// Generate all `#[wasm_bindgen]` exports for a scenario.
///
/// This macro generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_frame, input handlers, draw buffer and viewport accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use spacecab_engine::*;
///
/// mod game;
/// use game::MyScenario;
///
/// spacecab_web::export_game!(MyScenario, "my-scenario");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The scenario type; must implement `spacecab_engine::Scenario` and have a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
///
/// Calls made before `game_init()` are ignored and return a neutral value.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::warn!("{}: called before game_init()", $game_name);
                    R::default()
                }
            })
        }

        /// Create the runner. `config_json` may be empty to keep the scenario's tuning.
        #[wasm_bindgen]
        pub fn game_init(config_json: &str) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let mut runner = $crate::GameRunner::new(<$game_type>::new());
            if !config_json.trim().is_empty() {
                runner.load_config_json(config_json);
            }
            runner.init();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_frame(timestamp_ms: f64) {
            with_runner(|r| r.frame(timestamp_ms));
        }

        #[wasm_bindgen]
        pub fn game_frame_now() {
            with_runner(|r| r.frame_now());
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_draw_records_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.records_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_draw_record_count() -> u32 {
            with_runner(|r| r.record_count())
        }

        #[wasm_bindgen]
        pub fn get_draw_record_floats() -> u32 {
            $crate::DRAW_RECORD_FLOATS
        }

        #[wasm_bindgen]
        pub fn get_draw_texts() -> String {
            with_runner(|r| r.texts_json())
        }

        #[wasm_bindgen]
        pub fn get_credits() -> f64 {
            with_runner(|r| r.credits() as f64)
        }

        #[wasm_bindgen]
        pub fn get_entity_count() -> u32 {
            with_runner(|r| r.entity_count())
        }

        /// Viewport the camera centres on; the page sizes its canvas to match.
        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_width())
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_height())
        }
    };
}

/// Floats per record in the draw buffer; the page steps through it by this stride.
pub const DRAW_RECORD_FLOATS: u32 = spacecab_engine::DrawRecord::FLOATS as u32;
