//! 2D vector helpers layered on top of `glam::Vec2`.
//!
//! Simulation code reads better with named operations (`diff`, `scaled`,
//! `normalized`) than with raw operators in a few places, and the
//! normalization here is zero-safe: a zero-length vector normalizes to zero
//! instead of producing NaNs.

use glam::Vec2;

/// World-space point or direction.
pub type Vector = Vec2;

/// Named vector operations used by the physics and entity systems.
///
/// Pure forms return a new vector; `add_in_place`/`subtract_in_place` mutate.
pub trait VectorOps: Copy {
    /// `self + other` as a new vector.
    fn sum(self, other: Self) -> Self;
    /// `self - other` as a new vector.
    fn diff(self, other: Self) -> Self;
    /// Every component multiplied by `factor`.
    fn scaled(self, factor: f32) -> Self;
    /// Euclidean length. Needs no cached state.
    fn magnitude(self) -> f32;
    /// Unit vector in the same direction, or zero for a zero-length input.
    fn normalized(self) -> Self;
    fn add_in_place(&mut self, other: Self);
    fn subtract_in_place(&mut self, other: Self);
    /// Scales down proportionally so the magnitude never exceeds `max`.
    /// Direction is preserved; components are never clamped independently.
    fn limited(self, max: f32) -> Self;
}

impl VectorOps for Vec2 {
    fn sum(self, other: Self) -> Self {
        self + other
    }

    fn diff(self, other: Self) -> Self {
        self - other
    }

    fn scaled(self, factor: f32) -> Self {
        self * factor
    }

    fn magnitude(self) -> f32 {
        self.length()
    }

    fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            self / len
        } else {
            Vec2::ZERO
        }
    }

    fn add_in_place(&mut self, other: Self) {
        *self += other;
    }

    fn subtract_in_place(&mut self, other: Self) {
        *self -= other;
    }

    fn limited(self, max: f32) -> Self {
        let len = self.length();
        if len > max && len > 0.0 {
            self * (max / len)
        } else {
            self
        }
    }
}

/// Unit vector pointing along `angle` radians (0 = +X, growing towards +Y).
pub fn heading(angle: f32) -> Vector {
    Vec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn diff_then_sum_round_trips() {
        let samples = [
            (Vec2::new(3.0, -4.0), Vec2::new(10.5, 2.25)),
            (Vec2::new(-100.0, 0.0), Vec2::new(0.0, 0.0)),
            (Vec2::new(0.1, 0.2), Vec2::new(-7.0, 99.0)),
        ];
        for (v, u) in samples {
            let back = v.diff(u).sum(u);
            assert!((back - v).length() < EPS, "{v} -> {back}");
        }
    }

    #[test]
    fn normalized_has_unit_magnitude() {
        for v in [Vec2::new(3.0, 4.0), Vec2::new(-0.001, 0.0), Vec2::new(1e4, -1e4)] {
            assert!((v.normalized().magnitude() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn zero_normalizes_to_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn in_place_ops_mutate() {
        let mut v = Vec2::new(1.0, 1.0);
        v.add_in_place(Vec2::new(2.0, 3.0));
        assert_eq!(v, Vec2::new(3.0, 4.0));
        v.subtract_in_place(Vec2::new(3.0, 4.0));
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn magnitude_is_stateless() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.scaled(2.0).magnitude(), 10.0);
    }

    #[test]
    fn limited_keeps_direction() {
        let v = Vec2::new(300.0, 400.0).limited(100.0);
        assert!((v.magnitude() - 100.0).abs() < EPS);
        assert!((v.normalized() - Vec2::new(0.6, 0.8)).length() < EPS);
        let slow = Vec2::new(1.0, 1.0);
        assert_eq!(slow.limited(100.0), slow);
    }

    #[test]
    fn heading_zero_points_along_x() {
        assert!((heading(0.0) - Vec2::X).length() < EPS);
        assert!((heading(std::f32::consts::FRAC_PI_2) - Vec2::Y).length() < EPS);
    }
}
