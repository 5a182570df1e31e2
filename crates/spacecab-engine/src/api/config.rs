use serde::{Deserialize, Serialize};

/// Engine tuning, provided by the scenario and optionally overridden from JSON.
/// Every field falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Largest frame delta (seconds) handed to the world. Longer stalls are clamped.
    pub max_frame_dt: f32,
    /// Initial viewport size in screen units.
    pub viewport: Viewport,
    /// Credits balance at world creation.
    pub starting_credits: i64,
    /// Seconds between an explosion and the scenario reset.
    pub reset_delay: f32,
    /// Seed for the world RNG (debris scatter, fares, exhaust jitter).
    pub rng_seed: u64,
    pub gravity: GravityConfig,
    pub flight: FlightConfig,
    pub explosion: ExplosionConfig,
    pub exhaust: ExhaustConfig,
    pub particles: ParticleTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_frame_dt: 0.1,
            viewport: Viewport::default(),
            starting_credits: 10,
            reset_delay: 1.0,
            rng_seed: 42,
            gravity: GravityConfig::default(),
            flight: FlightConfig::default(),
            explosion: ExplosionConfig::default(),
            exhaust: ExhaustConfig::default(),
            particles: ParticleTuning::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Planet pull on the craft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    /// Pull applies within `radius * influence_factor` of a planet centre.
    pub influence_factor: f32,
    /// Velocity added per frame towards each planet in range.
    /// Constant magnitude, independent of distance.
    pub pull: f32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            influence_factor: 4.0,
            pull: 1.0,
        }
    }
}

/// Player craft handling and hull geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Acceleration along the nose while thrusting (units/s²).
    pub thrust_accel: f32,
    pub max_speed: f32,
    /// Radians turned per frame while a rotate key is held.
    pub rotation_step: f32,
    pub hull_width: f32,
    pub hull_height: f32,
    pub hull: HullOffsets,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            thrust_accel: 200.0,
            max_speed: 300.0,
            rotation_step: 0.02,
            hull_width: 50.0,
            hull_height: 20.0,
            hull: HullOffsets::default(),
        }
    }
}

/// Collision sample positions, measured from the hull's tail along the nose
/// axis and outward from the hull edge across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullOffsets {
    pub nose: f32,
    pub front_fins: f32,
    pub rear_fins: f32,
    /// How far the fins stick out past the hull edge.
    pub fin_span: f32,
}

impl Default for HullOffsets {
    fn default() -> Self {
        Self {
            nose: 55.0,
            front_fins: 30.0,
            rear_fins: 3.5,
            fin_span: 5.0,
        }
    }
}

/// Debris burst when the craft hits a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    pub debris_count: usize,
    /// Half-extent of the positional scatter around the craft, per axis.
    pub jitter: [f32; 2],
    pub min_size: f32,
    pub max_size: f32,
    /// Fraction of the craft velocity each fragment inherits.
    pub inherited_velocity: f32,
    /// Full width of the random velocity spread, per axis.
    pub spread: f32,
    /// Maximum spin, radians per frame, either direction.
    pub max_spin: f32,
    pub min_lifetime: f32,
    pub max_lifetime: f32,
    /// Remaining lifetime given to a passenger aboard the destroyed craft.
    pub dropped_passenger_ttl: f32,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            debris_count: 100,
            jitter: [25.0, 10.0],
            min_size: 2.0,
            max_size: 7.0,
            inherited_velocity: 0.1,
            spread: 150.0,
            max_spin: 0.1,
            min_lifetime: 1.0,
            max_lifetime: 6.0,
            dropped_passenger_ttl: 2.0,
        }
    }
}

/// Thruster puff spawned every frame thrust is held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustConfig {
    /// Distance behind the craft pivot where puffs appear.
    pub offset: f32,
    pub size: f32,
    /// Speed backwards relative to the craft.
    pub back_speed: f32,
    /// Half-width of the random velocity jitter per axis.
    pub jitter: f32,
    pub min_lifetime: f32,
    pub max_lifetime: f32,
    /// Size multiplier per second (below 1 shrinks).
    pub growth: f32,
}

impl Default for ExhaustConfig {
    fn default() -> Self {
        Self {
            offset: 15.0,
            size: 8.0,
            back_speed: 40.0,
            jitter: 10.0,
            min_lifetime: 1.0,
            max_lifetime: 3.0,
            growth: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    /// Velocity multiplier applied when a particle enters a planet.
    pub bounce: f32,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self { bounce: -0.2 }
    }
}
