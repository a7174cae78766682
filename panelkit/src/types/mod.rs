mod edges;
mod enums;

pub use edges::ResizeEdges;
pub use enums::{Dock, Orientation, ScrollBarVisibility};
