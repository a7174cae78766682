//! Retained control tree.
//!
//! This is the host side of the widgets: an arena of controls with
//! parent/child links, bounds and visibility. Every structural mutation
//! returns the [`TreeEvent`]s it produced so the caller can deliver them
//! before the mutation is considered complete.

mod node;

use std::collections::HashMap;

pub use node::{Control, ControlId};

use crate::error::ControlError;
use crate::layout::{Point, Rect, Size};
use crate::types::Dock;

/// Structural change notification, raised on the parent whose child list
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent {
    Added { parent: ControlId, child: ControlId },
    Removed { parent: ControlId, child: ControlId },
}

impl TreeEvent {
    pub fn parent(&self) -> ControlId {
        match self {
            TreeEvent::Added { parent, .. } | TreeEvent::Removed { parent, .. } => *parent,
        }
    }

    pub fn child(&self) -> ControlId {
        match self {
            TreeEvent::Added { child, .. } | TreeEvent::Removed { child, .. } => *child,
        }
    }
}

#[derive(Debug, Default)]
pub struct ControlTree {
    controls: HashMap<ControlId, Control>,
    next_id: usize,
}

impl ControlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached control.
    pub fn create(&mut self, bounds: Rect) -> ControlId {
        let id = ControlId(self.next_id);
        self.next_id += 1;
        self.controls.insert(id, Control::new(id, bounds));
        id
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.controls.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(&id)
    }

    pub fn parent(&self, id: ControlId) -> Option<ControlId> {
        self.controls.get(&id).and_then(|c| c.parent)
    }

    /// Direct children in insertion order. Unknown controls have none.
    pub fn children(&self, id: ControlId) -> &[ControlId] {
        self.controls
            .get(&id)
            .map(|c| c.children.as_slice())
            .unwrap_or(&[])
    }

    /// All descendants of `id` in depth-first order, excluding `id`.
    pub fn descendants(&self, id: ControlId) -> Vec<ControlId> {
        let mut result = Vec::new();
        self.collect_descendants(id, &mut result);
        result
    }

    fn collect_descendants(&self, id: ControlId, result: &mut Vec<ControlId>) {
        for &child in self.children(id) {
            result.push(child);
            self.collect_descendants(child, result);
        }
    }

    /// Whether `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: ControlId, id: ControlId) -> bool {
        let mut current = self.parent(id);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }

    /// Controls without a parent, oldest first.
    pub fn roots(&self) -> Vec<ControlId> {
        let mut roots: Vec<ControlId> = self
            .controls
            .values()
            .filter(|c| c.parent.is_none())
            .map(|c| c.id)
            .collect();
        roots.sort();
        roots
    }

    /// Ancestors of `id` from its parent outward.
    pub fn ancestors(&self, id: ControlId) -> Vec<ControlId> {
        let mut result = Vec::new();
        let mut current = self.parent(id);
        while let Some(p) = current {
            result.push(p);
            current = self.parent(p);
        }
        result
    }

    /// The outermost ancestor of `id`, or `id` itself when it has no parent.
    pub fn top_level(&self, id: ControlId) -> Option<ControlId> {
        if !self.contains(id) {
            return None;
        }
        Some(self.ancestors(id).last().copied().unwrap_or(id))
    }

    /// Append `child` to `parent`, detaching it from its previous parent.
    ///
    /// Returns the notifications produced, in order. A stale `child` id is
    /// ignored.
    pub fn add_child(
        &mut self,
        parent: ControlId,
        child: ControlId,
    ) -> Result<Vec<TreeEvent>, ControlError> {
        if !self.contains(parent) {
            return Err(ControlError::UnknownControl(parent));
        }
        if !self.contains(child) {
            log::debug!("[tree] ignoring add of unknown {child} to {parent}");
            return Ok(Vec::new());
        }
        if child == parent || self.is_ancestor(child, parent) {
            return Err(ControlError::CircularReference { parent, child });
        }
        if self.parent(child) == Some(parent) {
            return Ok(Vec::new());
        }

        let mut events = Vec::with_capacity(2);
        if let Some(old) = self.parent(child) {
            self.unlink(old, child);
            events.push(TreeEvent::Removed { parent: old, child });
        }

        if let Some(c) = self.controls.get_mut(&child) {
            c.parent = Some(parent);
        }
        if let Some(p) = self.controls.get_mut(&parent) {
            p.children.push(child);
        }
        events.push(TreeEvent::Added { parent, child });
        Ok(events)
    }

    /// Detach `child` from `parent`. Removing a control that is not a child
    /// of `parent` does nothing.
    pub fn remove_child(
        &mut self,
        parent: ControlId,
        child: ControlId,
    ) -> Result<Option<TreeEvent>, ControlError> {
        if !self.contains(parent) {
            return Err(ControlError::UnknownControl(parent));
        }
        if self.parent(child) != Some(parent) {
            return Ok(None);
        }
        self.unlink(parent, child);
        Ok(Some(TreeEvent::Removed { parent, child }))
    }

    /// Detach `id` from its parent and destroy it with all its descendants.
    pub fn dispose(&mut self, id: ControlId) -> Option<TreeEvent> {
        if !self.contains(id) {
            return None;
        }
        let event = self.parent(id).map(|parent| {
            self.unlink(parent, id);
            TreeEvent::Removed { parent, child: id }
        });

        for descendant in self.descendants(id) {
            self.controls.remove(&descendant);
        }
        self.controls.remove(&id);
        event
    }

    fn unlink(&mut self, parent: ControlId, child: ControlId) {
        if let Some(p) = self.controls.get_mut(&parent) {
            p.children.retain(|&c| c != child);
        }
        if let Some(c) = self.controls.get_mut(&child) {
            c.parent = None;
        }
    }

    /// Returns true if the bounds changed.
    pub fn set_bounds(&mut self, id: ControlId, bounds: Rect) -> bool {
        match self.controls.get_mut(&id) {
            Some(c) if c.bounds != bounds => {
                c.bounds = bounds;
                true
            }
            _ => false,
        }
    }

    /// Returns true if the location changed.
    pub fn set_location(&mut self, id: ControlId, location: Point) -> bool {
        let Some(bounds) = self.get(id).map(|c| c.bounds) else {
            return false;
        };
        self.set_bounds(id, bounds.with_location(location))
    }

    /// Returns true if the visibility changed.
    pub fn set_visible(&mut self, id: ControlId, visible: bool) -> bool {
        match self.controls.get_mut(&id) {
            Some(c) if c.visible != visible => {
                c.visible = visible;
                true
            }
            _ => false,
        }
    }

    pub fn set_dock(&mut self, id: ControlId, dock: Dock) {
        if let Some(c) = self.controls.get_mut(&id) {
            c.dock = dock;
        }
    }

    /// Size of the client area; zero for unknown controls.
    pub fn client_size(&self, id: ControlId) -> Size {
        self.get(id).map(Control::client_size).unwrap_or_default()
    }

    /// Convert a point in `id`'s client coordinates to screen coordinates.
    pub fn point_to_screen(&self, id: ControlId, point: Point) -> Option<Point> {
        let mut result = point;
        let mut current = Some(id);
        while let Some(c) = current {
            let control = self.get(c)?;
            result = result.offset(control.bounds.x, control.bounds.y);
            current = control.parent;
        }
        Some(result)
    }

    /// Convert a screen point to `id`'s client coordinates.
    pub fn point_to_client(&self, id: ControlId, screen: Point) -> Option<Point> {
        let origin = self.point_to_screen(id, Point::default())?;
        Some(Point::new(
            screen.x.saturating_sub(origin.x),
            screen.y.saturating_sub(origin.y),
        ))
    }
}
