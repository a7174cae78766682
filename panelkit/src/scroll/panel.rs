use super::geometry::{content_extents, ScrollGeometry, DEFAULT_SCROLL_SPEED};
use super::proxy::ContentProxy;
use super::sync::ScrollBarSync;
use crate::layout::{Rect, Size};
use crate::resizable::{ResizablePanel, ResizeConfig};
use crate::tree::{ControlId, ControlTree};
use crate::types::{Orientation, ScrollBarVisibility};

/// Configuration of a scrollable surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// A scrollable surface is also resizable by its borders.
    pub resize: ResizeConfig,
    /// Multiplier applied to wheel deltas.
    pub scroll_speed: f32,
    pub show_horizontal: ScrollBarVisibility,
    pub show_vertical: ScrollBarVisibility,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            resize: ResizeConfig::default(),
            scroll_speed: DEFAULT_SCROLL_SPEED,
            show_horizontal: ScrollBarVisibility::OnOverflow,
            show_vertical: ScrollBarVisibility::OnOverflow,
        }
    }
}

impl ScrollConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resize(mut self, resize: ResizeConfig) -> Self {
        self.resize = resize;
        self
    }

    pub fn scroll_speed(mut self, speed: f32) -> Self {
        self.scroll_speed = speed;
        self
    }

    pub fn show_horizontal(mut self, visibility: ScrollBarVisibility) -> Self {
        self.show_horizontal = visibility;
        self
    }

    pub fn show_vertical(mut self, visibility: ScrollBarVisibility) -> Self {
        self.show_vertical = visibility;
        self
    }
}

/// Change raised by a scrollable surface for outside listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollNotification {
    ScrollValueChanged {
        surface: ControlId,
        orientation: Orientation,
    },
    VisiblePercentChanged {
        surface: ControlId,
        orientation: Orientation,
    },
}

/// A resizable surface whose children live in a content layer that is moved
/// to show the part of the content selected by the scroll values.
#[derive(Debug)]
pub struct ScrollablePanel {
    resizable: ResizablePanel,
    proxy: ContentProxy,
    geometry: ScrollGeometry,
    bars: ScrollBarSync,
}

impl ScrollablePanel {
    pub fn new(surface: ControlId, container: ControlId, config: ScrollConfig) -> Self {
        let mut geometry = ScrollGeometry::new();
        geometry.set_scroll_speed(config.scroll_speed);
        geometry.set_visibility(Orientation::Horizontal, config.show_horizontal);
        geometry.set_visibility(Orientation::Vertical, config.show_vertical);
        Self {
            resizable: ResizablePanel::new(surface, config.resize),
            proxy: ContentProxy::new(surface, container),
            geometry,
            bars: ScrollBarSync::new(),
        }
    }

    pub fn id(&self) -> ControlId {
        self.resizable.id()
    }

    /// The inner content layer.
    pub fn container(&self) -> ControlId {
        self.proxy.container()
    }

    pub fn proxy(&self) -> &ContentProxy {
        &self.proxy
    }

    pub fn resizable(&self) -> &ResizablePanel {
        &self.resizable
    }

    pub fn resizable_mut(&mut self) -> &mut ResizablePanel {
        &mut self.resizable
    }

    pub fn geometry(&self) -> &ScrollGeometry {
        &self.geometry
    }

    pub fn bars(&self) -> &ScrollBarSync {
        &self.bars
    }

    pub(crate) fn bars_mut(&mut self) -> &mut ScrollBarSync {
        &mut self.bars
    }

    pub fn scroll_value(&self, orientation: Orientation) -> f32 {
        self.geometry.scroll_value(orientation)
    }

    pub fn visible_percent(&self, orientation: Orientation) -> f32 {
        self.geometry.visible_percent(orientation)
    }

    pub fn scroll_speed(&self) -> f32 {
        self.geometry.scroll_speed()
    }

    pub fn set_scroll_speed(&mut self, speed: f32) {
        self.geometry.set_scroll_speed(speed);
    }

    pub fn visibility(&self, orientation: Orientation) -> ScrollBarVisibility {
        self.geometry.visibility(orientation)
    }

    pub fn set_visibility(&mut self, orientation: Orientation, visibility: ScrollBarVisibility) {
        self.geometry.set_visibility(orientation, visibility);
    }

    /// Viewport size and content extents as currently found in the tree.
    pub fn measure(&self, tree: &ControlTree) -> (Size, Size) {
        let viewport = tree.client_size(self.id());
        let children = self
            .proxy
            .container_children(tree)
            .filter_map(|id| tree.get(id))
            .map(|c| (c.bounds, c.dock));
        (viewport, content_extents(viewport, children))
    }

    /// Recompute the geometry from the tree. Returns true if it changed.
    pub fn relayout(&mut self, tree: &ControlTree) -> bool {
        let (viewport, extents) = self.measure(tree);
        self.geometry.relayout(viewport, extents)
    }

    /// Write the geometry back to the tree: content layer bounds and the
    /// visibility of the bound scrollbars. Returns true if the tree changed.
    pub fn apply(&self, tree: &mut ControlTree) -> bool {
        let position = self.geometry.position();
        let content = self.geometry.content_size();
        let bounds = Rect::new(position.x, position.y, content.width, content.height);
        let mut changed = tree.set_bounds(self.container(), bounds);

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            if let Some(bar) = self.bars.bar(orientation) {
                let visible = self.geometry.bar_visible(orientation);
                if tree.set_visible(bar, visible) {
                    log::debug!("[scroll] {} {:?} scrollbar visible={}", self.id(), orientation, visible);
                    changed = true;
                }
            }
        }
        changed
    }

    pub fn set_scroll_value(&mut self, orientation: Orientation, value: f32) -> bool {
        self.geometry.set_scroll_value(orientation, value)
    }

    /// Relay a value raised by `bar`. Returns the axis it was applied to, or
    /// `None` when the bar is not bound to this surface.
    pub fn on_scroll_bar_value(&mut self, bar: ControlId, value: f32) -> Option<Orientation> {
        let orientation = self.bars.axis_of(bar)?;
        self.geometry.set_scroll_value(orientation, value);
        Some(orientation)
    }

    pub fn wheel(&mut self, delta: i32) -> bool {
        self.geometry.wheel(delta)
    }
}
