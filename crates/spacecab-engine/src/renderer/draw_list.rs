use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::Serialize;

use super::painter::{Color, Painter, TextAlign, TextStyle};

/// Opcodes stored in [`DrawRecord::op`]. The page-side replayer switches on these.
pub mod op {
    pub const CLEAR: f32 = 0.0;
    pub const SAVE: f32 = 1.0;
    pub const RESTORE: f32 = 2.0;
    pub const TRANSLATE: f32 = 3.0;
    pub const ROTATE: f32 = 4.0;
    pub const CIRCLE: f32 = 5.0;
    pub const RECT: f32 = 6.0;
    /// `p[0]` = point count; that many `POINT` records follow.
    pub const POLYGON: f32 = 7.0;
    pub const POINT: f32 = 8.0;
    pub const LINE: f32 = 9.0;
    /// `p[2]` indexes into the text table.
    pub const TEXT: f32 = 10.0;
}

/// One recorded draw call. Must match the page protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawRecord {
    pub op: f32,
    pub p: [f32; 7],
    pub rgba: [f32; 4],
}

impl DrawRecord {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    fn new(op: f32, params: &[f32], color: Option<Color>) -> Self {
        let mut p = [0.0; 7];
        p[..params.len()].copy_from_slice(params);
        let rgba = color.map_or([0.0; 4], |c| [c.r, c.g, c.b, c.a]);
        Self { op, p, rgba }
    }
}

/// Text table entry referenced by `TEXT` records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextEntry {
    pub text: String,
    pub font: String,
    pub align: TextAlign,
}

/// A [`Painter`] that records one frame into a flat buffer for the host to replay.
#[derive(Debug, Default)]
pub struct DrawList {
    records: Vec<DrawRecord>,
    texts: Vec<TextEntry>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(1024),
            texts: Vec::new(),
        }
    }

    /// Drop everything recorded for the previous frame.
    pub fn reset(&mut self) {
        self.records.clear();
        self.texts.clear();
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn texts(&self) -> &[TextEntry] {
        &self.texts
    }

    pub fn record_count(&self) -> u32 {
        self.records.len() as u32
    }

    /// All records as one contiguous float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.records)
    }

    /// Raw pointer to record data for direct reads from WASM memory.
    pub fn records_ptr(&self) -> *const f32 {
        self.as_floats().as_ptr()
    }

    /// The text table as a JSON array.
    pub fn texts_json(&self) -> String {
        serde_json::to_string(&self.texts).unwrap_or_else(|_| "[]".to_string())
    }

    /// Count records with the given opcode.
    pub fn count_op(&self, opcode: f32) -> usize {
        self.records.iter().filter(|r| r.op == opcode).count()
    }

    fn push(&mut self, record: DrawRecord) {
        self.records.push(record);
    }
}

impl Painter for DrawList {
    fn clear(&mut self, color: Color) {
        self.push(DrawRecord::new(op::CLEAR, &[], Some(color)));
    }

    fn save(&mut self) {
        self.push(DrawRecord::new(op::SAVE, &[], None));
    }

    fn restore(&mut self) {
        self.push(DrawRecord::new(op::RESTORE, &[], None));
    }

    fn translate(&mut self, offset: Vec2) {
        self.push(DrawRecord::new(op::TRANSLATE, &[offset.x, offset.y], None));
    }

    fn rotate(&mut self, radians: f32) {
        self.push(DrawRecord::new(op::ROTATE, &[radians], None));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawRecord::new(op::CIRCLE, &[center.x, center.y, radius], Some(color)));
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.push(DrawRecord::new(
            op::RECT,
            &[min.x, min.y, size.x, size.y],
            Some(color),
        ));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.push(DrawRecord::new(op::POLYGON, &[points.len() as f32], Some(color)));
        for point in points {
            self.push(DrawRecord::new(op::POINT, &[point.x, point.y], None));
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.push(DrawRecord::new(
            op::LINE,
            &[from.x, from.y, to.x, to.y],
            Some(color),
        ));
    }

    fn text(&mut self, text: &str, at: Vec2, style: &TextStyle, color: Color) {
        let index = self.texts.len() as f32;
        self.texts.push(TextEntry {
            text: text.to_string(),
            font: style.font.clone(),
            align: style.align,
        });
        self.push(DrawRecord::new(op::TEXT, &[at.x, at.y, index], Some(color)));
    }
}
