mod rect;

pub use rect::{Point, Rect, Size};
