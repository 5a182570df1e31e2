//! Per-kind update and draw routines, dispatched by the [`World`](crate::World).

pub mod docking;
pub mod flight;
pub mod hud;
pub mod orbit;
pub mod particles;
pub mod render;
