pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{
    ExhaustConfig, ExplosionConfig, FlightConfig, GravityConfig, HullOffsets, ParticleTuning,
    SimConfig, Viewport,
};
pub use api::simulation::{Scenario, Simulation};
pub use api::types::{tags, EntityHandle, WorldEvent};
pub use components::craft::{Craft, CraftConfig, Landing};
pub use components::entity::{Entity, EntityKind};
pub use components::hud::{HudText, HudTextConfig, HudView};
pub use components::layer::Layer;
pub use components::particle::{Debris, DebrisConfig, Particle, ParticleConfig};
pub use components::passenger::{Passenger, PassengerConfig};
pub use components::planet::{Moon, MoonConfig, Planet, PlanetConfig};
pub use core::rng::Rng;
pub use core::time::{Clock, FrameClock};
pub use core::vector::{heading, Vector, VectorOps};
pub use core::world::World;
pub use input::queue::{InputEvent, InputQueue, Key, KeySource, Keyboard};
pub use renderer::camera::Camera;
pub use renderer::draw_list::{DrawList, DrawRecord, TextEntry};
pub use renderer::painter::{Color, Painter, TextAlign, TextStyle};
