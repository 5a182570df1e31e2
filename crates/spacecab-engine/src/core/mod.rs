pub mod physics;
pub mod rng;
pub mod time;
pub mod vector;
pub mod world;
