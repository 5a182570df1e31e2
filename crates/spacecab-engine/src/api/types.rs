use slotmap::new_key_type;

new_key_type! {
    /// Generation-checked handle to an entity in the [`World`](crate::World).
    ///
    /// Handles are non-owning: once the entity is cleaned up every lookup through
    /// a stale handle returns `None`.
    pub struct EntityHandle;
}

/// Well-known tag names used by the built-in systems.
/// Tags are non-exclusive groupings, never identities.
pub mod tags {
    /// Gravity sources and collision targets (moons included).
    pub const PLANET: &str = "planet";
    pub const PASSENGER: &str = "passenger";
    /// Explosion fragments and exhaust puffs.
    pub const DEBRIS: &str = "debris";
    /// The background junk field.
    pub const JUNK: &str = "junk";
    pub const PLAYER: &str = "player";
}

/// Deferred world events, drained by the simulation loop between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// Re-populate the scenario after the craft was lost.
    ResetScenario,
}

/// A [`WorldEvent`] due at a given world time (seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledEvent {
    pub due: f64,
    pub event: WorldEvent,
}
