pub mod desktop;
pub mod drag;
pub mod error;
pub mod event;
pub mod filter;
pub mod hit;
pub mod layout;
pub mod resizable;
pub mod scroll;
pub mod tree;
pub mod types;

pub use desktop::Desktop;
pub use drag::FormDrag;
pub use error::ControlError;
pub use event::{Event, MouseButton, WHEEL_DELTA};
pub use filter::{BorderBinding, BorderFilterTree};
pub use hit::{classify, BorderHitTester, HitTestResult, ResizeRegion};
pub use layout::{Point, Rect, Size};
pub use resizable::{ResizablePanel, ResizeConfig};
pub use scroll::{
    ChildCollection, ContentProxy, DirectChildren, ScrollBar, ScrollBarSync, ScrollConfig,
    ScrollGeometry, ScrollNotification, ScrollablePanel, SyncSource,
};
pub use tree::{Control, ControlId, ControlTree, TreeEvent};
pub use types::*;
