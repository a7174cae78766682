//! Synchronous dispatcher tying the control tree to the widgets.
//!
//! `Desktop` owns the tree, the resizable and scrollable surfaces, the
//! scrollbar widgets and the form drags. Every structural mutation is
//! delivered to the widgets before the mutating call returns.

use std::collections::HashMap;

use crate::drag::FormDrag;
use crate::error::ControlError;
use crate::event::Event;
use crate::hit::HitTestResult;
use crate::layout::{Point, Rect};
use crate::resizable::{ResizablePanel, ResizeConfig};
use crate::scroll::{
    ChildCollection, DirectChildren, ScrollBar, ScrollConfig, ScrollNotification, ScrollablePanel,
    SyncSource,
};
use crate::tree::{ControlId, ControlTree, TreeEvent};
use crate::types::{Dock, Orientation};

/// Upper bound on relayout passes for one trigger. A pass that changes
/// nothing ends the loop earlier.
pub const MAX_LAYOUT_PASSES: usize = 4;

#[derive(Debug)]
enum Widget {
    Resizable(ResizablePanel),
    Scrollable(ScrollablePanel),
}

impl Widget {
    fn resizable(&self) -> &ResizablePanel {
        match self {
            Widget::Resizable(panel) => panel,
            Widget::Scrollable(panel) => panel.resizable(),
        }
    }

    fn resizable_mut(&mut self) -> &mut ResizablePanel {
        match self {
            Widget::Resizable(panel) => panel,
            Widget::Scrollable(panel) => panel.resizable_mut(),
        }
    }

    fn scrollable(&self) -> Option<&ScrollablePanel> {
        match self {
            Widget::Scrollable(panel) => Some(panel),
            Widget::Resizable(_) => None,
        }
    }

    fn scrollable_mut(&mut self) -> Option<&mut ScrollablePanel> {
        match self {
            Widget::Scrollable(panel) => Some(panel),
            Widget::Resizable(_) => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Desktop {
    tree: ControlTree,
    widgets: HashMap<ControlId, Widget>,
    scroll_bars: HashMap<ControlId, ScrollBar>,
    drags: Vec<FormDrag>,
    notifications: Vec<ScrollNotification>,
}

impl Desktop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree(&self) -> &ControlTree {
        &self.tree
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    pub fn create_control(&mut self, bounds: Rect) -> ControlId {
        self.tree.create(bounds)
    }

    pub fn create_resizable_panel(&mut self, bounds: Rect, config: ResizeConfig) -> ControlId {
        let id = self.tree.create(bounds);
        self.widgets
            .insert(id, Widget::Resizable(ResizablePanel::new(id, config)));
        id
    }

    /// Create a scrollable surface together with its content layer.
    pub fn create_scrollable_panel(&mut self, bounds: Rect, config: ScrollConfig) -> ControlId {
        let id = self.tree.create(bounds);
        let container = self
            .tree
            .create(Rect::from_size(bounds.width, bounds.height));
        self.widgets.insert(
            id,
            Widget::Scrollable(ScrollablePanel::new(id, container, config)),
        );
        if let Err(err) = self.add_child(id, container) {
            log::warn!("[desktop] failed to mount content layer of {id}: {err}");
        }
        self.relayout(id);
        id
    }

    pub fn create_scroll_bar(&mut self, bounds: Rect, orientation: Orientation) -> ControlId {
        let id = self.tree.create(bounds);
        self.scroll_bars.insert(id, ScrollBar::new(id, orientation));
        id
    }

    pub fn add_form_drag(&mut self, handle: ControlId) -> usize {
        self.drags.push(FormDrag::new(handle));
        self.drags.len() - 1
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    pub fn resizable(&self, id: ControlId) -> Option<&ResizablePanel> {
        self.widgets.get(&id).map(Widget::resizable)
    }

    /// Edge and thickness changes made through this reference take effect
    /// on the next probe.
    pub fn resizable_mut(&mut self, id: ControlId) -> Option<&mut ResizablePanel> {
        self.widgets.get_mut(&id).map(Widget::resizable_mut)
    }

    pub fn scrollable(&self, id: ControlId) -> Option<&ScrollablePanel> {
        self.widgets.get(&id).and_then(Widget::scrollable)
    }

    /// Call [`Desktop::relayout`] after changing visibility policies.
    pub fn scrollable_mut(&mut self, id: ControlId) -> Option<&mut ScrollablePanel> {
        self.widgets.get_mut(&id).and_then(Widget::scrollable_mut)
    }

    pub fn scroll_bar(&self, id: ControlId) -> Option<&ScrollBar> {
        self.scroll_bars.get(&id)
    }

    pub fn form_drag(&self, index: usize) -> Option<&FormDrag> {
        self.drags.get(index)
    }

    pub fn form_drag_mut(&mut self, index: usize) -> Option<&mut FormDrag> {
        self.drags.get_mut(index)
    }

    /// Drain the notifications raised by scrollable surfaces.
    pub fn take_notifications(&mut self) -> Vec<ScrollNotification> {
        std::mem::take(&mut self.notifications)
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    fn collection(&self, parent: ControlId) -> Box<dyn ChildCollection> {
        match self.scrollable(parent) {
            Some(panel) => Box::new(*panel.proxy()),
            None => Box::new(DirectChildren(parent)),
        }
    }

    pub fn add_child(&mut self, parent: ControlId, child: ControlId) -> Result<(), ControlError> {
        let events = self.collection(parent).add(&mut self.tree, child)?;
        self.deliver(&events);
        Ok(())
    }

    pub fn remove_child(&mut self, parent: ControlId, child: ControlId) -> Result<(), ControlError> {
        let event = self.collection(parent).remove(&mut self.tree, child)?;
        self.deliver(event.as_slice());
        Ok(())
    }

    /// Clear the child list of `parent`. For a scrollable surface this
    /// destroys the children of its content layer.
    pub fn clear_children(&mut self, parent: ControlId) -> Result<(), ControlError> {
        let events = self.collection(parent).clear(&mut self.tree)?;
        self.deliver(&events);
        self.forget_destroyed();
        Ok(())
    }

    /// Children of `parent` as seen from outside.
    pub fn children(&self, parent: ControlId) -> &[ControlId] {
        self.collection(parent).children(&self.tree)
    }

    /// Destroy `id` and everything beneath it.
    pub fn dispose(&mut self, id: ControlId) {
        let event = self.tree.dispose(id);
        self.deliver(event.as_slice());
        self.forget_destroyed();
    }

    fn forget_destroyed(&mut self) {
        let tree = &self.tree;
        self.widgets.retain(|id, _| tree.contains(*id));
        self.scroll_bars.retain(|id, _| tree.contains(*id));
        for widget in self.widgets.values_mut() {
            if let Some(panel) = widget.scrollable_mut() {
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    if let Some(bar) = panel.bars().bar(orientation) {
                        if !tree.contains(bar) {
                            panel.bars_mut().forget(bar);
                        }
                    }
                }
            }
        }
        for drag in &mut self.drags {
            if drag.target().is_some_and(|t| !tree.contains(t)) {
                drag.set_target(None);
            }
        }
    }

    fn deliver(&mut self, events: &[TreeEvent]) {
        for event in events {
            for widget in self.widgets.values_mut() {
                widget.resizable_mut().on_tree_event(&self.tree, event);
            }
            if let Some(surface) = self.surface_of_container(event.parent()) {
                self.relayout(surface);
            }
        }
    }

    /// The scrollable surface whose content layer is `container`.
    fn surface_of_container(&self, container: ControlId) -> Option<ControlId> {
        self.widgets
            .values()
            .filter_map(Widget::scrollable)
            .find(|panel| panel.container() == container)
            .map(ScrollablePanel::id)
    }

    /// Move or resize a control. Resizing a scrollable surface or a child of
    /// its content layer recomputes the surface.
    pub fn set_bounds(&mut self, id: ControlId, bounds: Rect) -> bool {
        if !self.tree.set_bounds(id, bounds) {
            return false;
        }
        if self.scrollable(id).is_some() {
            self.relayout(id);
        }
        self.relayout_parent_surface(id);
        true
    }

    /// Change how a control is docked. Content children of a scrollable
    /// surface change its extents.
    pub fn set_dock(&mut self, id: ControlId, dock: Dock) -> bool {
        if self.tree.get(id).map_or(true, |control| control.dock == dock) {
            return false;
        }
        self.tree.set_dock(id, dock);
        self.relayout_parent_surface(id);
        true
    }

    fn relayout_parent_surface(&mut self, id: ControlId) {
        if let Some(surface) = self
            .tree
            .parent(id)
            .and_then(|parent| self.surface_of_container(parent))
        {
            self.relayout(surface);
        }
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Recompute a scrollable surface from the tree until it settles.
    pub fn relayout(&mut self, surface: ControlId) {
        for pass in 0..MAX_LAYOUT_PASSES {
            let Some(panel) = self.widgets.get_mut(&surface).and_then(Widget::scrollable_mut) else {
                return;
            };
            let before = [
                panel.visible_percent(Orientation::Horizontal),
                panel.visible_percent(Orientation::Vertical),
            ];
            let geometry_changed = panel.relayout(&self.tree);
            let tree_changed = panel.apply(&mut self.tree);

            for (orientation, old) in [Orientation::Horizontal, Orientation::Vertical]
                .into_iter()
                .zip(before)
            {
                if panel.visible_percent(orientation) != old {
                    self.notifications
                        .push(ScrollNotification::VisiblePercentChanged {
                            surface,
                            orientation,
                        });
                }
            }

            if !geometry_changed && !tree_changed {
                log::trace!("[desktop] {surface} settled after {pass} passes");
                return;
            }
        }
        log::warn!("[desktop] {surface} did not settle after {MAX_LAYOUT_PASSES} layout passes");
    }

    /// Assign a scroll value programmatically.
    pub fn set_scroll_value(&mut self, surface: ControlId, orientation: Orientation, value: f32) {
        let Some(panel) = self.widgets.get_mut(&surface).and_then(Widget::scrollable_mut) else {
            return;
        };
        panel.set_scroll_value(orientation, value);
        panel.apply(&mut self.tree);
        self.push_bar_values(surface, SyncSource::Program(orientation));
        self.notifications.push(ScrollNotification::ScrollValueChanged {
            surface,
            orientation,
        });
    }

    /// Bind a scrollbar to the axis matching its orientation. A bar bound to
    /// another surface is released from it first.
    pub fn attach_scroll_bar(&mut self, surface: ControlId, bar: ControlId) -> Result<(), ControlError> {
        let orientation = self
            .scroll_bars
            .get(&bar)
            .map(ScrollBar::orientation)
            .ok_or(ControlError::NotAScrollBar(bar))?;
        if self.scrollable(surface).is_none() {
            return Err(ControlError::UnknownControl(surface));
        }

        for widget in self.widgets.values_mut() {
            if let Some(panel) = widget.scrollable_mut() {
                panel.bars_mut().forget(bar);
            }
        }
        let Some(panel) = self.widgets.get_mut(&surface).and_then(Widget::scrollable_mut) else {
            return Err(ControlError::UnknownControl(surface));
        };
        let replaced = panel.bars_mut().attach(orientation, bar);
        log::debug!("[desktop] {bar} bound to {surface} {orientation:?}, replacing {replaced:?}");

        let value = panel.scroll_value(orientation);
        panel.apply(&mut self.tree);
        if let Some(scroll_bar) = self.scroll_bars.get_mut(&bar) {
            scroll_bar.set_value(value);
        }
        Ok(())
    }

    pub fn detach_scroll_bar(&mut self, surface: ControlId, orientation: Orientation) -> Option<ControlId> {
        self.scrollable_mut(surface)?.bars_mut().detach(orientation)
    }

    /// The user moved a scrollbar to `value`. Returns true if a surface
    /// relayed it.
    pub fn drag_scroll_bar(&mut self, bar: ControlId, value: f32) -> bool {
        let Some(scroll_bar) = self.scroll_bars.get_mut(&bar) else {
            return false;
        };
        scroll_bar.set_value(value);
        let value = scroll_bar.value();

        let Some((surface, orientation)) = self.widgets.values_mut().find_map(|widget| {
            let panel = widget.scrollable_mut()?;
            let orientation = panel.on_scroll_bar_value(bar, value)?;
            Some((panel.id(), orientation))
        }) else {
            return false;
        };

        if let Some(panel) = self.widgets.get(&surface).and_then(Widget::scrollable) {
            panel.apply(&mut self.tree);
        }
        self.push_bar_values(surface, SyncSource::ScrollBar(orientation));
        true
    }

    fn push_bar_values(&mut self, surface: ControlId, source: SyncSource) {
        let Some(panel) = self.widgets.get(&surface).and_then(Widget::scrollable) else {
            return;
        };
        for &orientation in source.bars_to_update() {
            if let Some(bar) = panel.bars().bar(orientation) {
                if let Some(scroll_bar) = self.scroll_bars.get_mut(&bar) {
                    scroll_bar.set_value(panel.scroll_value(orientation));
                }
            }
        }
    }

    /// The innermost scrollable surface that is `id` or contains it.
    fn scrollable_ancestor(&self, id: ControlId) -> Option<ControlId> {
        std::iter::once(id)
            .chain(self.tree.ancestors(id))
            .find(|candidate| self.scrollable(*candidate).is_some())
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Answer the host's "what is under this point" probe that arrived
    /// through `target`.
    pub fn hit_test(&self, target: ControlId, screen: Point) -> HitTestResult {
        let region = std::iter::once(target)
            .chain(self.tree.ancestors(target))
            .filter_map(|candidate| self.widgets.get(&candidate))
            .find_map(|widget| widget.resizable().hit_test(&self.tree, target, screen));
        HitTestResult::from(region)
    }

    /// Find the deepest visible control containing the screen point.
    /// Later siblings are on top.
    pub fn control_at(&self, screen: Point) -> Option<ControlId> {
        self.tree
            .roots()
            .into_iter()
            .rev()
            .find_map(|root| self.control_at_recursive(root, Point::default(), screen))
    }

    fn control_at_recursive(&self, id: ControlId, origin: Point, screen: Point) -> Option<ControlId> {
        let control = self.tree.get(id)?;
        if !control.visible {
            return None;
        }
        let bounds = control.bounds;
        let rect = Rect::new(origin.x + bounds.x, origin.y + bounds.y, bounds.width, bounds.height);
        if !rect.contains(screen) {
            return None;
        }

        // Check children in reverse order (last added = on top)
        for &child in control.children().iter().rev() {
            if let Some(found) = self.control_at_recursive(child, rect.location(), screen) {
                return Some(found);
            }
        }
        Some(id)
    }

    /// Route pointer input. Returns true if the event was consumed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        match event {
            Event::Wheel { target, delta, .. } => self.wheel(target, delta),
            Event::MouseDown { target, x, y, .. } => {
                let tree = &self.tree;
                self.drags
                    .iter_mut()
                    .fold(false, |consumed, drag| drag.mouse_down(tree, target, Point::new(x, y)) || consumed)
            }
            Event::MouseMove { x, y, .. } => {
                let tree = &mut self.tree;
                self.drags
                    .iter()
                    .fold(false, |consumed, drag| drag.mouse_move(tree, Point::new(x, y)) || consumed)
            }
            Event::MouseUp { .. } => self
                .drags
                .iter_mut()
                .fold(false, |consumed, drag| drag.mouse_up() || consumed),
        }
    }

    /// Route a terminal mouse event to the control under it.
    pub fn dispatch_crossterm(&mut self, event: crossterm::event::MouseEvent) -> bool {
        let screen = Point::new(i32::from(event.column), i32::from(event.row));
        let Some(target) = self.control_at(screen) else {
            return false;
        };
        match Event::from_crossterm(event, target) {
            Some(event) => self.dispatch(event),
            None => false,
        }
    }

    fn wheel(&mut self, target: ControlId, delta: i32) -> bool {
        let Some(surface) = self.scrollable_ancestor(target) else {
            return false;
        };
        let Some(panel) = self.widgets.get_mut(&surface).and_then(Widget::scrollable_mut) else {
            return false;
        };
        if !panel.wheel(delta) {
            return false;
        }
        panel.apply(&mut self.tree);
        self.push_bar_values(surface, SyncSource::Wheel);
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            self.notifications.push(ScrollNotification::ScrollValueChanged {
                surface,
                orientation,
            });
        }
        true
    }
}
