pub mod craft;
pub mod entity;
pub mod hud;
pub mod layer;
pub mod particle;
pub mod passenger;
pub mod planet;
