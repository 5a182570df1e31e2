pub mod camera;
pub mod draw_list;
pub mod painter;

pub use draw_list::{DrawList, DrawRecord, TextEntry};
pub use painter::{Color, Painter, TextAlign, TextStyle};
