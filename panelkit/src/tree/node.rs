use crate::layout::{Rect, Size};
use crate::types::Dock;

/// Stable identity of a control within a [`ControlTree`](super::ControlTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub(crate) usize);

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "control-{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Control {
    pub(crate) id: ControlId,
    pub(crate) parent: Option<ControlId>,
    pub(crate) children: Vec<ControlId>,

    /// Bounds relative to the parent's client area. Top-level controls are
    /// positioned in screen coordinates.
    pub bounds: Rect,
    pub dock: Dock,
    pub visible: bool,
}

impl Control {
    pub(crate) fn new(id: ControlId, bounds: Rect) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            bounds,
            dock: Dock::None,
            visible: true,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn parent(&self) -> Option<ControlId> {
        self.parent
    }

    pub fn children(&self) -> &[ControlId] {
        &self.children
    }

    /// Controls have no non-client area, so the client size is the bounds
    /// size with negative dimensions treated as zero.
    pub fn client_size(&self) -> Size {
        self.bounds.size().clamped()
    }
}
