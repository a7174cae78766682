//! Child collections.
//!
//! A scrollable surface presents one flat child list while its children
//! really live in an inner content layer, which is what moves when the
//! surface scrolls.

use crate::error::ControlError;
use crate::tree::{ControlId, ControlTree, TreeEvent};

/// The "child list" capability of a control.
pub trait ChildCollection {
    /// Control whose child list this is, as seen by callers.
    fn owner(&self) -> ControlId;

    fn add(&self, tree: &mut ControlTree, child: ControlId) -> Result<Vec<TreeEvent>, ControlError>;

    fn remove(
        &self,
        tree: &mut ControlTree,
        child: ControlId,
    ) -> Result<Option<TreeEvent>, ControlError>;

    fn clear(&self, tree: &mut ControlTree) -> Result<Vec<TreeEvent>, ControlError>;

    fn children<'t>(&self, tree: &'t ControlTree) -> &'t [ControlId];
}

/// The control's own child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectChildren(pub ControlId);

impl ChildCollection for DirectChildren {
    fn owner(&self) -> ControlId {
        self.0
    }

    fn add(&self, tree: &mut ControlTree, child: ControlId) -> Result<Vec<TreeEvent>, ControlError> {
        tree.add_child(self.0, child)
    }

    fn remove(
        &self,
        tree: &mut ControlTree,
        child: ControlId,
    ) -> Result<Option<TreeEvent>, ControlError> {
        tree.remove_child(self.0, child)
    }

    /// Detaches every child without destroying it.
    fn clear(&self, tree: &mut ControlTree) -> Result<Vec<TreeEvent>, ControlError> {
        let children = tree.children(self.0).to_vec();
        let mut events = Vec::with_capacity(children.len());
        for child in children.into_iter().rev() {
            events.extend(tree.remove_child(self.0, child)?);
        }
        Ok(events)
    }

    fn children<'t>(&self, tree: &'t ControlTree) -> &'t [ControlId] {
        tree.children(self.0)
    }
}

/// Child list of a scrollable surface, forwarded to its content layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentProxy {
    owner: ControlId,
    container: ControlId,
}

impl ContentProxy {
    pub fn new(owner: ControlId, container: ControlId) -> Self {
        Self { owner, container }
    }

    pub fn container(&self) -> ControlId {
        self.container
    }

    pub(crate) fn container_children<'t>(
        &self,
        tree: &'t ControlTree,
    ) -> impl Iterator<Item = ControlId> + 't {
        tree.children(self.container).iter().copied()
    }

    /// The control that actually receives `child`. Only the content layer
    /// itself goes into the surface's real child list.
    pub fn target_for(&self, child: ControlId) -> ControlId {
        if child == self.container {
            self.owner
        } else {
            self.container
        }
    }
}

impl ChildCollection for ContentProxy {
    fn owner(&self) -> ControlId {
        self.owner
    }

    fn add(&self, tree: &mut ControlTree, child: ControlId) -> Result<Vec<TreeEvent>, ControlError> {
        tree.add_child(self.target_for(child), child)
    }

    fn remove(
        &self,
        tree: &mut ControlTree,
        child: ControlId,
    ) -> Result<Option<TreeEvent>, ControlError> {
        tree.remove_child(self.target_for(child), child)
    }

    /// Removes and destroys every child of the content layer, last first.
    fn clear(&self, tree: &mut ControlTree) -> Result<Vec<TreeEvent>, ControlError> {
        if !tree.contains(self.container) {
            return Err(ControlError::UnknownControl(self.container));
        }
        let children = tree.children(self.container).to_vec();
        let mut events = Vec::with_capacity(children.len());
        for child in children.into_iter().rev() {
            events.extend(tree.dispose(child));
        }
        Ok(events)
    }

    fn children<'t>(&self, tree: &'t ControlTree) -> &'t [ControlId] {
        tree.children(self.container)
    }
}
