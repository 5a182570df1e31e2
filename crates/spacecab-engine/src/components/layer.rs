/// Render/update layer. Controls draw order for entities.
///
/// Layers are sparse and ordered: lower layers update and draw first
/// (underneath). Any `i32` is legal, negative included; the named constants
/// are the ones the built-in scenario uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Layer(pub i32);

impl Layer {
    /// Planets, moons, and the junk field.
    pub const BACKGROUND: Self = Self(0);
    /// The player craft.
    pub const CRAFT: Self = Self(1);
    pub const PASSENGERS: Self = Self(2);

    pub fn index(self) -> i32 {
        self.0
    }
}

impl From<i32> for Layer {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
