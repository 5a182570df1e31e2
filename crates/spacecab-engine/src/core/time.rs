use log::warn;

/// Monotonic time source, in seconds.
/// The host provides this (e.g. `performance.now() / 1000` in the browser).
pub trait Clock {
    fn now(&self) -> f64;
}

/// Turns successive clock readings into per-frame delta seconds.
///
/// Deltas are clamped to `max_dt` so a stalled or backgrounded frame cannot
/// push the craft through a planet in a single step.
pub struct FrameClock {
    /// Largest delta ever handed to the simulation.
    max_dt: f32,
    /// Timestamp of the previous frame, `None` before the first reading.
    last: Option<f64>,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            last: None,
        }
    }

    /// Record a new timestamp and return the seconds elapsed since the last one.
    /// The first call returns zero.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(prev) => (now - prev).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        if dt > self.max_dt {
            warn!("frame delta {dt:.3}s clamped to {:.3}s", self.max_dt);
            self.max_dt
        } else {
            dt
        }
    }

    /// Read from a [`Clock`] and advance.
    pub fn tick_from(&mut self, clock: &dyn Clock) -> f32 {
        self.tick(clock.now())
    }

    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ManualClock(Cell<f64>);

    impl Clock for ManualClock {
        fn now(&self) -> f64 {
            self.0.get()
        }
    }

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.tick(12.5), 0.0);
    }

    #[test]
    fn measures_elapsed_time() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(1.0);
        let dt = clock.tick(1.016);
        assert!((dt - 0.016).abs() < 1e-6, "dt was {dt}");
    }

    #[test]
    fn clamps_long_stalls() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(0.0);
        assert_eq!(clock.tick(30.0), 0.1);
    }

    #[test]
    fn backwards_time_is_zero() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(5.0);
        assert_eq!(clock.tick(4.0), 0.0);
    }

    #[test]
    fn reads_from_clock_source() {
        let source = ManualClock(Cell::new(2.0));
        let mut clock = FrameClock::new(0.1);
        clock.tick_from(&source);
        source.0.set(2.05);
        let dt = clock.tick_from(&source);
        assert!((dt - 0.05).abs() < 1e-6);
    }
}
