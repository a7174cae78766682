//! Registry of border bindings for every control beneath a resizable
//! surface.
//!
//! A probe may arrive through any descendant of the surface; the border
//! region is always computed against the surface's own client rectangle.
//! The registry is keyed by control identity and updated on every
//! structural notification raised inside the tracked subtree, so the set of
//! bindings always equals the set of live descendants.

use std::collections::HashMap;

use crate::hit::{BorderHitTester, ResizeRegion};
use crate::layout::Point;
use crate::tree::{ControlId, ControlTree, TreeEvent};

/// Binding of one tracked control to its owning surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderBinding {
    pub surface: ControlId,
    pub tester: BorderHitTester,
}

#[derive(Debug)]
pub struct BorderFilterTree {
    surface: ControlId,
    tester: BorderHitTester,
    bindings: HashMap<ControlId, BorderBinding>,
}

impl BorderFilterTree {
    pub fn new(surface: ControlId, tester: BorderHitTester) -> Self {
        Self {
            surface,
            tester,
            bindings: HashMap::new(),
        }
    }

    pub fn surface(&self) -> ControlId {
        self.surface
    }

    pub fn tester(&self) -> BorderHitTester {
        self.tester
    }

    /// Replace the surface configuration and push it to every binding.
    pub fn set_tester(&mut self, tester: BorderHitTester) {
        self.tester = tester;
        for binding in self.bindings.values_mut() {
            binding.tester = tester;
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn is_tracked(&self, control: ControlId) -> bool {
        self.bindings.contains_key(&control)
    }

    pub fn binding(&self, control: ControlId) -> Option<&BorderBinding> {
        self.bindings.get(&control)
    }

    pub fn tracked(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.bindings.keys().copied()
    }

    /// Register `control` and every control currently beneath it.
    /// Re-attaching a tracked control replaces its binding.
    pub fn attach(&mut self, tree: &ControlTree, control: ControlId) {
        if !tree.contains(control) || control == self.surface {
            return;
        }
        self.bindings.insert(
            control,
            BorderBinding {
                surface: self.surface,
                tester: self.tester,
            },
        );
        for &child in tree.children(control) {
            self.attach(tree, child);
        }
    }

    /// Unregister `control` and every control beneath it.
    pub fn detach(&mut self, tree: &ControlTree, control: ControlId) {
        if self.bindings.remove(&control).is_none() {
            return;
        }
        for &child in tree.children(control) {
            self.detach(tree, child);
        }
    }

    /// Apply a structural notification. Only notifications raised by the
    /// surface or a tracked control are relevant; returns whether it was.
    pub fn handle(&mut self, tree: &ControlTree, event: &TreeEvent) -> bool {
        let parent = event.parent();
        if parent != self.surface && !self.is_tracked(parent) {
            return false;
        }
        match *event {
            TreeEvent::Added { child, .. } => self.attach(tree, child),
            TreeEvent::Removed { child, .. } => {
                self.detach(tree, child);
                // A destroyed subtree can no longer be walked.
                self.bindings.retain(|&id, _| tree.contains(id));
            }
        }
        log::debug!(
            "[filter] {} now tracks {} controls after {:?}",
            self.surface,
            self.bindings.len(),
            event
        );
        true
    }

    /// Answer a probe that arrived through `target` at `screen`.
    ///
    /// Returns `None` when the target is outside this surface's subtree or
    /// the point is not on an enabled border.
    pub fn probe(&self, tree: &ControlTree, target: ControlId, screen: Point) -> Option<ResizeRegion> {
        let tester = if target == self.surface {
            self.tester
        } else {
            self.bindings.get(&target)?.tester
        };
        let pos = tree.point_to_client(self.surface, screen)?;
        let region = tester.classify(pos, tree.client_size(self.surface));
        log::trace!(
            "[filter] probe {} via {} at {:?} -> {:?}",
            self.surface,
            target,
            pos,
            region
        );
        region
    }
}
