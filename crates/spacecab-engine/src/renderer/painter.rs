//! Drawing contract between the simulation and a 2D backend.
//!
//! The engine never rasterizes anything itself. Each entity issues a handful of
//! primitive calls inside a `save`/`restore` pair; the backend (a canvas, a
//! recorder, a test double) decides what to do with them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a fully opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const HULL_GRAY: Self = Self::hex(0xaaaaaa);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// CSS-style font shorthand, e.g. `"bold 16px sans-serif"`.
    pub font: String,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "bold 16px sans-serif".to_string(),
            align: TextAlign::Start,
        }
    }
}

/// 2D painter with a transform stack, in the style of a canvas context.
///
/// Coordinates passed to the primitive calls are in the current transform's
/// local space.
pub trait Painter {
    /// Fill the whole surface, ignoring the transform.
    fn clear(&mut self, color: Color);
    /// Push the current transform.
    fn save(&mut self);
    /// Pop back to the last saved transform.
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Axis-aligned rectangle with its top-left corner at `min`.
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn text(&mut self, text: &str, at: Vec2, style: &TextStyle, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decodes_channels() {
        let c = Color::hex(0x00aa66);
        assert_eq!(c.r, 0.0);
        assert!((c.g - 170.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 102.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::WHITE.with_alpha(0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 1.0, 1.0, 0.5));
    }

    #[test]
    fn default_text_style_matches_hud() {
        let style = TextStyle::default();
        assert_eq!(style.align, TextAlign::Start);
        assert!(style.font.contains("16px"));
    }
}
