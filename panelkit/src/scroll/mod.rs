//! Scrollable surfaces.

pub mod geometry;
mod panel;
mod proxy;
mod sync;

pub use geometry::{AxisState, ScrollGeometry};
pub use panel::{ScrollConfig, ScrollNotification, ScrollablePanel};
pub use proxy::{ChildCollection, ContentProxy, DirectChildren};
pub use sync::{ScrollBar, ScrollBarSync, SyncSource};
