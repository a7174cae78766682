//! Panels that can be resized by dragging their borders.

use crate::filter::BorderFilterTree;
use crate::hit::{BorderHitTester, ResizeRegion};
use crate::layout::Point;
use crate::tree::{ControlId, ControlTree, TreeEvent};
use crate::types::ResizeEdges;

pub const DEFAULT_BORDER_THICKNESS: i32 = 5;

/// Border configuration of a resizable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeConfig {
    /// Borders that start a resize drag.
    pub edges: ResizeEdges,
    /// Width of the grab area on every enabled border, in pixels.
    pub thickness: i32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            edges: ResizeEdges::none(),
            thickness: DEFAULT_BORDER_THICKNESS,
        }
    }
}

impl ResizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edges(mut self, edges: ResizeEdges) -> Self {
        self.edges = edges;
        self
    }

    /// Enable all four borders.
    pub fn all_edges(mut self) -> Self {
        self.edges = ResizeEdges::all();
        self
    }

    /// Negative values are treated as zero.
    pub fn thickness(mut self, thickness: i32) -> Self {
        self.thickness = thickness.max(0);
        self
    }

    fn tester(&self) -> BorderHitTester {
        BorderHitTester::new(self.edges, self.thickness)
    }
}

/// A surface whose enabled borders start a native resize drag, even when
/// the cursor is over one of its descendants.
#[derive(Debug)]
pub struct ResizablePanel {
    filters: BorderFilterTree,
}

impl ResizablePanel {
    pub fn new(surface: ControlId, config: ResizeConfig) -> Self {
        Self {
            filters: BorderFilterTree::new(surface, config.tester()),
        }
    }

    pub fn id(&self) -> ControlId {
        self.filters.surface()
    }

    pub fn config(&self) -> ResizeConfig {
        let tester = self.filters.tester();
        ResizeConfig {
            edges: tester.edges,
            thickness: tester.thickness(),
        }
    }

    pub fn edges(&self) -> ResizeEdges {
        self.filters.tester().edges
    }

    pub fn thickness(&self) -> i32 {
        self.filters.tester().thickness()
    }

    pub fn set_edges(&mut self, edges: ResizeEdges) {
        let mut tester = self.filters.tester();
        if tester.edges == edges {
            return;
        }
        tester.edges = edges;
        self.filters.set_tester(tester);
    }

    pub fn set_left(&mut self, enabled: bool) {
        self.set_edges(ResizeEdges {
            left: enabled,
            ..self.edges()
        });
    }

    pub fn set_right(&mut self, enabled: bool) {
        self.set_edges(ResizeEdges {
            right: enabled,
            ..self.edges()
        });
    }

    pub fn set_top(&mut self, enabled: bool) {
        self.set_edges(ResizeEdges {
            top: enabled,
            ..self.edges()
        });
    }

    pub fn set_bottom(&mut self, enabled: bool) {
        self.set_edges(ResizeEdges {
            bottom: enabled,
            ..self.edges()
        });
    }

    /// Negative values are treated as zero.
    pub fn set_thickness(&mut self, thickness: i32) {
        let mut tester = self.filters.tester();
        if tester.thickness() == thickness.max(0) {
            return;
        }
        tester.set_thickness(thickness);
        self.filters.set_tester(tester);
    }

    pub fn filters(&self) -> &BorderFilterTree {
        &self.filters
    }

    /// Register controls that were already beneath the surface.
    pub fn attach_existing(&mut self, tree: &ControlTree) {
        for &child in tree.children(self.id()) {
            self.filters.attach(tree, child);
        }
    }

    pub fn on_tree_event(&mut self, tree: &ControlTree, event: &TreeEvent) -> bool {
        self.filters.handle(tree, event)
    }

    pub fn hit_test(&self, tree: &ControlTree, target: ControlId, screen: Point) -> Option<ResizeRegion> {
        self.filters.probe(tree, target, screen)
    }
}
