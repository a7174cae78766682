//! Moving a top-level window by dragging one of its controls.

use crate::layout::Point;
use crate::tree::{ControlId, ControlTree};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDrag {
    target: Option<ControlId>,
    /// Grab point in the window's client coordinates while dragging.
    grab: Option<Point>,
}

impl FormDrag {
    pub fn new(target: ControlId) -> Self {
        Self {
            target: Some(target),
            grab: None,
        }
    }

    pub fn target(&self) -> Option<ControlId> {
        self.target
    }

    /// Replace the drag handle. An ongoing drag on the old handle ends.
    pub fn set_target(&mut self, target: Option<ControlId>) {
        if self.target == target {
            return;
        }
        self.target = target;
        self.grab = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    /// Start dragging if the button went down on the handle.
    pub fn mouse_down(&mut self, tree: &ControlTree, target: ControlId, screen: Point) -> bool {
        if self.target != Some(target) {
            return false;
        }
        let Some(window) = tree.top_level(target) else {
            return false;
        };
        self.grab = tree.point_to_client(window, screen);
        self.grab.is_some()
    }

    /// Keep the grab point under the cursor. Returns true if the window
    /// moved.
    pub fn mouse_move(&self, tree: &mut ControlTree, screen: Point) -> bool {
        let (Some(target), Some(grab)) = (self.target, self.grab) else {
            return false;
        };
        let Some(window) = tree.top_level(target) else {
            return false;
        };
        let location = Point::new(screen.x.saturating_sub(grab.x), screen.y.saturating_sub(grab.y));
        tree.set_location(window, location)
    }

    pub fn mouse_up(&mut self) -> bool {
        self.grab.take().is_some()
    }
}
